use std::borrow::Cow;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use tracing::trace;

use super::modified_utf8_len;
use crate::{Compound, Error, List, Result, Tag, Value, MAX_DEPTH};

/// Encodes uncompressed NBT binary data to the provided writer.
///
/// Only compounds are permitted at the top level. This is why the function
/// accepts a [`Compound`] reference rather than a [`Value`]. The root name is
/// always written as the empty string.
///
/// Strings and lengths are validated right before they are written. If an
/// error is returned, part of the tree may already have been written and the
/// writer should be considered to be in an indeterminate state.
pub fn to_binary<W: Write>(comp: &Compound, writer: W) -> Result<()> {
    let mut state = EncodeState { writer, depth: 0 };

    state.write_tag(Tag::Compound)?;
    state.write_string("")?;
    state.write_compound(comp)?;

    debug_assert_eq!(state.depth, 0);
    trace!(entries = comp.len(), "encoded root compound");

    Ok(())
}

/// Returns the number of bytes that will be written when [`to_binary`] is
/// called with this compound.
///
/// If `to_binary` results in `Ok`, the exact number of bytes
/// reported by this function will have been written. If the result is
/// `Err`, then the reported count will be greater than or equal to the
/// number of bytes that have actually been written.
pub fn written_size(comp: &Compound) -> usize {
    fn value_size(val: &Value) -> usize {
        match val {
            Value::Byte(_) => 1,
            Value::Short(_) => 2,
            Value::Int(_) => 4,
            Value::Long(_) => 8,
            Value::Float(_) => 4,
            Value::Double(_) => 8,
            Value::ByteArray(v) => 4 + v.len(),
            Value::String(v) => string_size(v),
            Value::List(v) => list_size(v),
            Value::Compound(v) => compound_size(v),
            Value::IntArray(v) => 4 + v.len() * 4,
            Value::LongArray(v) => 4 + v.len() * 8,
        }
    }

    fn list_size(l: &List) -> usize {
        let elems_size = match l {
            List::End => 0,
            List::Byte(v) => v.len(),
            List::Short(v) => v.len() * 2,
            List::Int(v) => v.len() * 4,
            List::Long(v) => v.len() * 8,
            List::Float(v) => v.len() * 4,
            List::Double(v) => v.len() * 8,
            List::ByteArray(v) => v.iter().map(|b| 4 + b.len()).sum(),
            List::String(v) => v.iter().map(|s| string_size(s)).sum(),
            List::List(v) => v.iter().map(list_size).sum(),
            List::Compound(v) => v.iter().map(compound_size).sum(),
            List::IntArray(v) => v.iter().map(|i| 4 + i.len() * 4).sum(),
            List::LongArray(v) => v.iter().map(|l| 4 + l.len() * 8).sum(),
        };

        1 + 4 + elems_size
    }

    fn string_size(s: &str) -> usize {
        2 + modified_utf8_len(s)
    }

    fn compound_size(c: &Compound) -> usize {
        c.iter()
            .map(|(k, v)| 1 + string_size(k) + value_size(v))
            .sum::<usize>()
            + 1
    }

    1 + string_size("") + compound_size(comp)
}

struct EncodeState<W> {
    writer: W,
    /// Current recursion depth.
    depth: usize,
}

impl<W: Write> EncodeState<W> {
    #[inline]
    fn check_depth<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= MAX_DEPTH {
            return Err(Error::DepthLimit);
        }

        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        Ok(self.writer.write_u8(tag as u8)?)
    }

    fn write_value(&mut self, v: &Value) -> Result<()> {
        match v {
            Value::Byte(v) => Ok(self.writer.write_i8(*v)?),
            Value::Short(v) => Ok(self.writer.write_i16::<BigEndian>(*v)?),
            Value::Int(v) => Ok(self.writer.write_i32::<BigEndian>(*v)?),
            Value::Long(v) => Ok(self.writer.write_i64::<BigEndian>(*v)?),
            Value::Float(v) => Ok(self.writer.write_f32::<BigEndian>(*v)?),
            Value::Double(v) => Ok(self.writer.write_f64::<BigEndian>(*v)?),
            Value::ByteArray(v) => self.write_byte_array(v),
            Value::String(v) => self.write_string(v),
            Value::List(v) => self.check_depth(|st| st.write_any_list(v)),
            Value::Compound(v) => self.check_depth(|st| st.write_compound(v)),
            Value::IntArray(v) => self.write_int_array(v),
            Value::LongArray(v) => self.write_long_array(v),
        }
    }

    /// Writes a signed 4-byte length for a sequence of `len` elements.
    fn write_len(&mut self, tag: Tag, len: usize) -> Result<()> {
        match i32::try_from(len) {
            Ok(n) => Ok(self.writer.write_i32::<BigEndian>(n)?),
            Err(_) => Err(Error::LengthOverflow { tag, len }),
        }
    }

    fn write_byte_array(&mut self, bytes: &[i8]) -> Result<()> {
        self.write_len(Tag::ByteArray, bytes.len())?;
        self.write_bytes(bytes)
    }

    fn write_bytes(&mut self, bytes: &[i8]) -> Result<()> {
        let bytes: Vec<u8> = bytes.iter().map(|&b| b as u8).collect();
        Ok(self.writer.write_all(&bytes)?)
    }

    fn write_string(&mut self, s: &str) -> Result<()> {
        let encoded: Cow<'_, [u8]> = cesu8::to_java_cesu8(s);

        match u16::try_from(encoded.len()) {
            Ok(n) => self.writer.write_u16::<BigEndian>(n)?,
            Err(_) => return Err(Error::StringTooLong(encoded.len())),
        }

        Ok(self.writer.write_all(&encoded)?)
    }

    fn write_any_list(&mut self, list: &List) -> Result<()> {
        match list {
            List::End => {
                self.write_tag(Tag::End)?;
                // Length
                self.writer.write_i32::<BigEndian>(0)?;
                Ok(())
            }
            List::Byte(v) => {
                self.write_tag(Tag::Byte)?;
                self.write_len(Tag::List, v.len())?;
                self.write_bytes(v)
            }
            List::Short(v) => self.write_list(v, Tag::Short, |st, v| {
                Ok(st.writer.write_i16::<BigEndian>(*v)?)
            }),
            List::Int(v) => self.write_list(v, Tag::Int, |st, v| {
                Ok(st.writer.write_i32::<BigEndian>(*v)?)
            }),
            List::Long(v) => self.write_list(v, Tag::Long, |st, v| {
                Ok(st.writer.write_i64::<BigEndian>(*v)?)
            }),
            List::Float(v) => self.write_list(v, Tag::Float, |st, v| {
                Ok(st.writer.write_f32::<BigEndian>(*v)?)
            }),
            List::Double(v) => self.write_list(v, Tag::Double, |st, v| {
                Ok(st.writer.write_f64::<BigEndian>(*v)?)
            }),
            List::ByteArray(v) => {
                self.write_list(v, Tag::ByteArray, |st, v| st.write_byte_array(v))
            }
            List::String(v) => self.write_list(v, Tag::String, |st, v| st.write_string(v)),
            List::List(v) => self.write_list(v, Tag::List, |st, v| {
                st.check_depth(|st| st.write_any_list(v))
            }),
            List::Compound(v) => self.write_list(v, Tag::Compound, |st, v| {
                st.check_depth(|st| st.write_compound(v))
            }),
            List::IntArray(v) => self.write_list(v, Tag::IntArray, |st, v| st.write_int_array(v)),
            List::LongArray(v) => {
                self.write_list(v, Tag::LongArray, |st, v| st.write_long_array(v))
            }
        }
    }

    /// Writes the element type and count, then each element's payload with no
    /// type byte or name of its own.
    fn write_list<T, F>(&mut self, list: &[T], elem_type: Tag, mut write_elem: F) -> Result<()>
    where
        F: FnMut(&mut Self, &T) -> Result<()>,
    {
        self.write_tag(elem_type)?;
        self.write_len(Tag::List, list.len())?;

        for elem in list {
            write_elem(self, elem)?;
        }

        Ok(())
    }

    fn write_compound(&mut self, c: &Compound) -> Result<()> {
        for (k, v) in c {
            self.write_tag(v.tag())?;
            self.write_string(k)?;
            self.write_value(v)?;
        }
        self.write_tag(Tag::End)?;

        Ok(())
    }

    fn write_int_array(&mut self, ia: &[i32]) -> Result<()> {
        self.write_len(Tag::IntArray, ia.len())?;

        for i in ia {
            self.writer.write_i32::<BigEndian>(*i)?;
        }

        Ok(())
    }

    fn write_long_array(&mut self, la: &[i64]) -> Result<()> {
        self.write_len(Tag::LongArray, la.len())?;

        for l in la {
            self.writer.write_i64::<BigEndian>(*l)?;
        }

        Ok(())
    }
}
