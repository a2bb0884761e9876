//! Centralized error handling for Unibound
//! Defines the typed failure taxonomy shared by the buffer, the boundary
//! iterator, and the bidi context.

use std::fmt;

/// A structured error in Unibound
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundError {
    /// Malformed UTF-8 input, or structurally invalid UTF-16 observed
    /// while decoding a buffer
    InvalidEncoding,
    /// Code point outside `0..=0x10FFFF`, or a lone surrogate value
    InvalidCodePoint(u32),
    /// Index outside the valid span of the text
    OutOfRange { index: usize, len: usize },
    /// Navigation or query attempted before text was installed
    NotBound,
    /// Locale tag that could not be parsed
    UnsupportedLocale(String),
    /// More runs were produced than the context was opened for
    CapacityExceeded { needed: usize, capacity: usize },
    /// Working storage could not be reserved at construction
    AllocationFailed,
    /// Paragraph longer than the context's fixed bound
    InvalidParagraph { len: usize, max: usize },
    /// Rule data was not loaded, or failed validation at load time
    DataNotLoaded,
}

impl fmt::Display for BoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEncoding => write!(f, "invalid text encoding"),
            Self::InvalidCodePoint(cp) => write!(f, "invalid code point U+{:04X}", cp),
            Self::OutOfRange { index, len } => {
                write!(f, "index {} out of range (len: {})", index, len)
            }
            Self::NotBound => write!(f, "no text bound"),
            Self::UnsupportedLocale(tag) => write!(f, "unsupported locale tag {:?}", tag),
            Self::CapacityExceeded { needed, capacity } => {
                write!(
                    f,
                    "capacity exceeded ({} needed, {} available)",
                    needed, capacity
                )
            }
            Self::AllocationFailed => write!(f, "allocation failed"),
            Self::InvalidParagraph { len, max } => {
                write!(f, "paragraph of {} units exceeds maximum {}", len, max)
            }
            Self::DataNotLoaded => write!(f, "rule data not loaded"),
        }
    }
}

impl std::error::Error for BoundError {}

/// Result alias for Unibound operations
pub type Result<T> = std::result::Result<T, BoundError>;
