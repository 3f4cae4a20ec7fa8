//! Error types for the bit-stream codec.

use thiserror::Error;

/// Error variants for packer and unpacker operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol width outside `1..=32` was given at construction.
    #[error("symbol width must be in the range 1..=32, got {0}")]
    InvalidSymbolWidth(usize),

    /// A push or pop declared a bit width outside the supported range.
    #[error("bit width must be in the range 1..=32, got {0}")]
    WidthOutOfRange(usize),

    /// A pushed value does not fit in its declared bit width.
    #[error("value {0} does not fit in {1} bits")]
    ValueOverflow(u32, usize),

    /// A loaded sequence contains a symbol the alphabet does not recognize.
    #[error("invalid symbol at position {0}")]
    InvalidSymbol(usize),
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
