//! Bit-string helpers shared by the format decoders

/// Binary digit string for `value`, left-padded with `0` to `width` characters
pub fn to_bits(value: u16, width: usize) -> String {
    format!("{value:0width$b}")
}

/// Split a continuous digit run into fixed-width pieces.
///
/// A trailing piece shorter than `width` is dropped.
pub fn chunk_exact(run: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = run.chars().collect();
    chars
        .chunks(width)
        .filter(|chunk| chunk.len() == width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
