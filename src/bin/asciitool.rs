use asciidec::{BitWidth, DecodeOptions, INVALID_GLYPH, TokenFormat, decode, printable};
use clap::{Args, Parser, Subcommand};
use std::io::Read;

#[derive(Parser)]
#[command(name = "asciitool", version, about = "asciidec CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode byte tokens and print the resulting text
    Decode {
        /// Tokens to decode; reads stdin when omitted
        input: Option<String>,
        #[command(flatten)]
        opts: DecodeArgs,
    },
    /// Print the per-token overview table with an invalid-token summary
    Table {
        /// Tokens to decode; reads stdin when omitted
        input: Option<String>,
        #[command(flatten)]
        opts: DecodeArgs,
    },
}

#[derive(Args)]
struct DecodeArgs {
    /// Input format: bin, hex, or dec
    #[arg(long, default_value = "bin")]
    format: String,
    /// Bits per character: 7 or 8
    #[arg(long, default_value_t = 8)]
    bits: u8,
    /// Keep a continuous run as one token instead of chunking it
    #[arg(long)]
    no_auto_chunk: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Decode { input, opts } => decode_cmd(input, &opts),
        Command::Table { input, opts } => table_cmd(input, &opts),
    }
}

fn build_options(opts: &DecodeArgs) -> Option<DecodeOptions> {
    let format = match TokenFormat::from_name(&opts.format) {
        Some(format) => format,
        None => {
            eprintln!("Unknown format: {} (expected bin, hex, or dec)", opts.format);
            return None;
        }
    };
    let bit_width = match BitWidth::from_bits(opts.bits) {
        Some(width) => width,
        None => {
            eprintln!("Unsupported bit width: {} (expected 7 or 8)", opts.bits);
            return None;
        }
    };
    Some(DecodeOptions::new(format, bit_width, !opts.no_auto_chunk))
}

fn read_input(input: Option<String>) -> Option<String> {
    match input {
        Some(text) => Some(text),
        None => {
            let mut buffer = String::new();
            match std::io::stdin().read_to_string(&mut buffer) {
                Ok(_) => Some(buffer),
                Err(err) => {
                    eprintln!("Failed to read stdin: {}", err);
                    None
                }
            }
        }
    }
}

fn decode_cmd(input: Option<String>, opts: &DecodeArgs) {
    let (Some(options), Some(raw)) = (build_options(opts), read_input(input)) else {
        return;
    };

    let result = decode(&raw, options);
    println!("{}", result.text);
    if !result.invalid_tokens.is_empty() {
        eprintln!(
            "{} invalid token(s): {}",
            result.invalid_tokens.len(),
            result.invalid_tokens.join(" ")
        );
    }
}

fn table_cmd(input: Option<String>, opts: &DecodeArgs) {
    let (Some(options), Some(raw)) = (build_options(opts), read_input(input)) else {
        return;
    };

    let result = decode(&raw, options);

    println!("{:>4}  {:<12} {:<10} {:>4}  char", "#", "token", "bits", "dec");
    if result.rows.is_empty() {
        println!("(no tokens)");
    }
    for (i, row) in result.rows.iter().enumerate() {
        let bits = if row.valid { row.bits.as_str() } else { "—" };
        let value = match (row.valid, row.value) {
            (true, Some(value)) => value.to_string(),
            _ => "—".to_string(),
        };
        let character = match row.character {
            Some(ch) => printable(ch),
            None => INVALID_GLYPH.to_string(),
        };
        println!(
            "{:>4}  {:<12} {:<10} {:>4}  {}",
            i + 1,
            row.token,
            bits,
            value,
            character
        );
    }

    println!();
    println!("Decoded: {}", result.text);
    if !result.invalid_tokens.is_empty() {
        println!(
            "{} invalid token(s). Check format, grouping, or value range.",
            result.invalid_tokens.len()
        );
    }
}
