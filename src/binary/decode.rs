use std::io::{self, Read};

use byteorder::{BigEndian, ReadBytesExt};
use tracing::{debug, trace};

use crate::{Compound, Error, List, Result, Tag, Value, MAX_DEPTH};

/// Upper bound on elements reserved up front for a list or array, so a
/// corrupt length can't trigger a huge allocation before any data is read.
const MAX_PREALLOC: usize = 1024;

/// Decodes uncompressed NBT binary data from the provided reader.
///
/// The first tag must be a compound, otherwise [`Error::RootNotCompound`] is
/// returned. The root name that follows it is discarded.
///
/// The reader is consumed exactly up to the end of the root compound.
pub fn from_binary<R: Read>(reader: R) -> Result<Compound> {
    let mut state = DecodeState { reader, depth: 0 };

    let root_tag = state.reader.read_u8()?;

    if root_tag != Tag::Compound as u8 {
        return Err(Error::RootNotCompound(root_tag));
    }

    let root_name = state.read_string()?;

    if !root_name.is_empty() {
        debug!(root_name = %root_name, "discarding name of root compound");
    }

    let root = state.read_compound()?;

    debug_assert_eq!(state.depth, 0);
    trace!(entries = root.len(), "decoded root compound");

    Ok(root)
}

struct DecodeState<R> {
    reader: R,
    /// Current recursion depth.
    depth: usize,
}

impl<R: Read> DecodeState<R> {
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

    fn read_tag(&mut self) -> Result<Tag> {
        Tag::from_u8(self.reader.read_u8()?)
    }

    /// Reads the payload of a value whose type has already been read.
    fn read_value(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => unreachable!("end tag has no payload"),
            Tag::Byte => Value::Byte(self.reader.read_i8()?),
            Tag::Short => Value::Short(self.reader.read_i16::<BigEndian>()?),
            Tag::Int => Value::Int(self.reader.read_i32::<BigEndian>()?),
            Tag::Long => Value::Long(self.reader.read_i64::<BigEndian>()?),
            Tag::Float => Value::Float(self.reader.read_f32::<BigEndian>()?),
            Tag::Double => Value::Double(self.reader.read_f64::<BigEndian>()?),
            Tag::ByteArray => Value::ByteArray(self.read_byte_array()?),
            Tag::String => Value::String(self.read_string()?),
            Tag::List => Value::List(self.check_depth(|st| st.read_any_list())?),
            Tag::Compound => Value::Compound(self.check_depth(|st| st.read_compound())?),
            Tag::IntArray => Value::IntArray(self.read_int_array()?),
            Tag::LongArray => Value::LongArray(self.read_long_array()?),
        })
    }

    fn read_compound(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();

        loop {
            let tag = self.read_tag()?;

            if tag == Tag::End {
                return Ok(compound);
            }

            let name = self.read_string()?;
            let value = self.read_value(tag)?;

            if compound.contains_key(&name) {
                debug!(name = %name, "duplicate compound entry replaced");
            }

            compound.insert(name, value);
        }
    }

    fn read_any_list(&mut self) -> Result<List> {
        let elem_tag = self.read_tag()?;
        let len = self.read_len(Tag::List)?;

        Ok(match elem_tag {
            Tag::End => {
                if len != 0 {
                    return Err(Error::NonEmptyEndList(len as i32));
                }
                List::End
            }
            Tag::Byte => List::Byte(self.read_bytes(len)?),
            Tag::Short => List::Short(self.read_list(len, |st| {
                Ok(st.reader.read_i16::<BigEndian>()?)
            })?),
            Tag::Int => List::Int(self.read_list(len, |st| {
                Ok(st.reader.read_i32::<BigEndian>()?)
            })?),
            Tag::Long => List::Long(self.read_list(len, |st| {
                Ok(st.reader.read_i64::<BigEndian>()?)
            })?),
            Tag::Float => List::Float(self.read_list(len, |st| {
                Ok(st.reader.read_f32::<BigEndian>()?)
            })?),
            Tag::Double => List::Double(self.read_list(len, |st| {
                Ok(st.reader.read_f64::<BigEndian>()?)
            })?),
            Tag::ByteArray => List::ByteArray(self.read_list(len, |st| st.read_byte_array())?),
            Tag::String => List::String(self.read_list(len, |st| st.read_string())?),
            Tag::List => List::List(
                self.read_list(len, |st| st.check_depth(|st| st.read_any_list()))?,
            ),
            Tag::Compound => List::Compound(
                self.read_list(len, |st| st.check_depth(|st| st.read_compound()))?,
            ),
            Tag::IntArray => List::IntArray(self.read_list(len, |st| st.read_int_array())?),
            Tag::LongArray => List::LongArray(self.read_list(len, |st| st.read_long_array())?),
        })
    }

    /// Reads exactly `len` elements with `read_elem`.
    fn read_list<T, F>(&mut self, len: usize, mut read_elem: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        let mut list = Vec::with_capacity(len.min(MAX_PREALLOC));

        for _ in 0..len {
            list.push(read_elem(self)?);
        }

        Ok(list)
    }

    /// Reads a signed 4-byte length, rejecting negative values.
    fn read_len(&mut self, tag: Tag) -> Result<usize> {
        let len = self.reader.read_i32::<BigEndian>()?;

        if len < 0 {
            return Err(Error::NegativeLength { tag, len });
        }

        Ok(len as usize)
    }

    fn read_byte_array(&mut self) -> Result<Vec<i8>> {
        let len = self.read_len(Tag::ByteArray)?;
        self.read_bytes(len)
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<i8>> {
        Ok(self
            .read_exact_vec(len)?
            .into_iter()
            .map(|b| b as i8)
            .collect())
    }

    fn read_int_array(&mut self) -> Result<Vec<i32>> {
        let len = self.read_len(Tag::IntArray)?;
        self.read_list(len, |st| Ok(st.reader.read_i32::<BigEndian>()?))
    }

    fn read_long_array(&mut self) -> Result<Vec<i64>> {
        let len = self.read_len(Tag::LongArray)?;
        self.read_list(len, |st| Ok(st.reader.read_i64::<BigEndian>()?))
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.reader.read_u16::<BigEndian>()?;
        let bytes = self.read_exact_vec(len.into())?;

        match cesu8::from_java_cesu8(&bytes) {
            Ok(s) => Ok(s.into_owned()),
            Err(_) => Err(Error::InvalidString),
        }
    }

    /// Reads exactly `len` bytes. The buffer grows with the data actually
    /// read rather than trusting `len` up front.
    fn read_exact_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(MAX_PREALLOC));

        (&mut self.reader).take(len as u64).read_to_end(&mut buf)?;

        if buf.len() != len {
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
        }

        Ok(buf)
    }
}
