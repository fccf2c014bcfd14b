use thiserror::Error;

/// The error taxonomy for the CBOR codec and everything built on top of it.
///
/// Leaves raise the most specific kind; composed schemas wrap a subordinate
/// error with a module tag via [`Error::Module`] so the top-most error
/// identifies the subsystem that failed.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("invalid cbor head byte 0x{0:02x}")]
    InvalidHead(u8),

    #[error("unknown cbor major type {0}")]
    UnknownMajor(u8),

    #[error("non-canonical integer or length head")]
    NonCanonicalHead,

    #[error("cbor tag {found} did not match expected shape")]
    TagMismatch { found: u64 },

    #[error("invalid utf-8 text string")]
    OverlongUtf8,

    #[error("container length {found} exceeds the configured maximum of {max}")]
    MaxItemsExceeded { found: u64, max: u64 },

    #[error("byte or text string length {found} exceeds the configured maximum of {max}")]
    MaxBytesExceeded { found: u64, max: u64 },

    #[error("trailing bytes after decoding a top-level value")]
    TrailingData,

    #[error("invalid hex string")]
    InvalidHex,

    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),

    #[error("unknown discriminator {0}")]
    UnknownDiscriminator(u64),

    #[error("numeric value out of range: {0}")]
    NumericOutOfRange(String),

    #[error("{module}: {source}")]
    Module {
        module: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps `self` with a module tag, preserving the cause chain.
    pub fn in_module(self, module: &'static str) -> Error {
        Error::Module {
            module,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
