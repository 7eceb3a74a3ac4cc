//! Error types shared by every stage of the codec.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Everything that can stop a compress or decompress call.
#[derive(Debug, Error)]
pub enum Error {
    /// There is nothing to build a frequency table from.
    #[error("input is empty: at least one symbol is required")]
    EmptyInput,

    /// A window or lookahead setting that the parser cannot work with.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        name: &'static str,
        message: String,
    },

    /// The container stores symbols as 8 bit code points.
    #[error("unsupported symbol {symbol:?} (U+{code:04X}) at position {position}: only code points 0-255 can be stored")]
    UnsupportedSymbol {
        symbol: char,
        code: u32,
        position: usize,
    },

    /// An integer does not fit the field it was meant for.
    #[error("integer overflow: {0}")]
    Overflow(String),

    /// The bit stream ended in the middle of a field.
    #[error("unexpected end of bit stream at bit {position}")]
    UnexpectedEnd { position: usize },

    /// A bit sequence that leads nowhere in the decode trie.
    #[error("no huffman code matches the bits starting at bit {position}")]
    InvalidCode { position: usize },

    /// The stream parsed, but its contents are inconsistent.
    #[error("corrupt stream: {0}")]
    CorruptStream(String),

    /// The terminal logger could not be installed.
    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// I/O error from the file drivers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a corrupt stream error.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Error::CorruptStream(message.into())
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}
