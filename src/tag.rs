use std::fmt;

use crate::{Error, Result};

/// One of the possible NBT data types.
///
/// The discriminant of each variant is its one-byte identifier on the wire.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Tag {
    // Variant order is significant!
    End,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    ByteArray,
    String,
    List,
    Compound,
    IntArray,
    LongArray,
}

impl Tag {
    /// Maps a type identifier read from the wire to its tag type.
    ///
    /// Every identifier in `0..=12` has exactly one tag. Anything else is
    /// reported as [`Error::UnknownTag`], since no length or shape rule exists
    /// for it and decoding cannot continue.
    pub const fn from_u8(id: u8) -> Result<Self> {
        Ok(match id {
            0 => Tag::End,
            1 => Tag::Byte,
            2 => Tag::Short,
            3 => Tag::Int,
            4 => Tag::Long,
            5 => Tag::Float,
            6 => Tag::Double,
            7 => Tag::ByteArray,
            8 => Tag::String,
            9 => Tag::List,
            10 => Tag::Compound,
            11 => Tag::IntArray,
            12 => Tag::LongArray,
            _ => return Err(Error::UnknownTag(id)),
        })
    }

    /// Returns the name of this tag for error reporting purposes.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::End => "end",
            Tag::Byte => "byte",
            Tag::Short => "short",
            Tag::Int => "int",
            Tag::Long => "long",
            Tag::Float => "float",
            Tag::Double => "double",
            Tag::ByteArray => "byte array",
            Tag::String => "string",
            Tag::List => "list",
            Tag::Compound => "compound",
            Tag::IntArray => "int array",
            Tag::LongArray => "long array",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_is_total_over_known_ids() {
        for id in 0..=12_u8 {
            let tag = Tag::from_u8(id).unwrap();
            assert_eq!(tag as u8, id);
        }
    }

    #[test]
    fn from_u8_rejects_unknown_ids() {
        for id in [13_u8, 99, 255] {
            assert!(matches!(Tag::from_u8(id), Err(Error::UnknownTag(n)) if n == id));
        }
    }
}
