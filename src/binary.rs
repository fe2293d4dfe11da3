//! Support for serializing and deserializing compounds in Java edition's binary
//! format.
//!
//! A binary NBT stream always starts with a compound tag carrying a name.
//! The name is a leftover from older versions of the format. It is read and
//! discarded when decoding, and written as the empty string when encoding.
//!
//! # Examples
//!
//! ```
//! use nbt_tree::{compound, from_binary, to_binary, List};
//!
//! let c = compound! {
//!     "byte" => 5_i8,
//!     "string" => "hello",
//!     "list_of_float" => List::Float(vec![
//!         std::f32::consts::PI,
//!         std::f32::consts::E,
//!         1.4142
//!     ]),
//! };
//!
//! let mut buf = vec![];
//! to_binary(&c, &mut buf).unwrap();
//!
//! assert_eq!(from_binary(buf.as_slice()).unwrap(), c);
//! ```
//!
//! Decode NBT data from its binary form.
//!
//! ```
//! use nbt_tree::{compound, from_binary};
//!
//! let some_bytes = [10, 0, 0, 3, 0, 3, 105, 110, 116, 0, 0, 222, 173, 0];
//!
//! let expected_value = compound! {
//!     "int" => 0xdead
//! };
//!
//! assert_eq!(from_binary(some_bytes.as_slice()).unwrap(), expected_value);
//! ```

mod decode;
mod encode;

pub use decode::*;
pub use encode::*;

/// Returns the number of bytes `s` occupies in Java's "Modified UTF-8".
///
/// NUL takes two bytes and characters outside the basic multilingual plane
/// are written as a surrogate pair of three bytes each. Everything else has
/// the same width as in standard UTF-8.
pub(crate) fn modified_utf8_len(s: &str) -> usize {
    s.chars()
        .map(|c| match c as u32 {
            0 => 2,
            1..=0x7f => 1,
            0x80..=0x7ff => 2,
            0x800..=0xffff => 3,
            _ => 6,
        })
        .sum()
}
