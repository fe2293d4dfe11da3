use std::io;

use thiserror::Error;

use crate::Tag;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur when encoding or decoding binary NBT data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The underlying reader or writer failed. Unexpected end of input shows
    /// up here as [`io::ErrorKind::UnexpectedEof`].
    #[error("an I/O error occurred: {0}")]
    Io(#[from] io::Error),
    #[error("unknown tag type {0}")]
    UnknownTag(u8),
    #[error("root tag must be a compound, found type id {0}")]
    RootNotCompound(u8),
    #[error("{tag} has negative length {len}")]
    NegativeLength { tag: Tag, len: i32 },
    #[error("list with end element type must be empty, found length {0}")]
    NonEmptyEndList(i32),
    #[error("string is not valid modified UTF-8")]
    InvalidString,
    #[error("string of length {0} exceeds maximum of u16::MAX")]
    StringTooLong(usize),
    #[error("{tag} of length {len} exceeds maximum of i32::MAX")]
    LengthOverflow { tag: Tag, len: usize },
    #[error("reached maximum recursion depth")]
    DepthLimit,
}

impl Error {
    /// Returns `true` if this error came from the byte source or sink rather
    /// than from malformed data.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
