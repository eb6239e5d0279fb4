pub mod options;
pub mod row;

pub use options::{BitWidth, DecodeOptions, TokenFormat};
pub use row::{DecodeResult, TokenRow};
