use std::iter::FusedIterator;

use crate::{Compound, Tag, Value, ValueRef};

/// An NBT list value.
///
/// NBT lists are homogeneous, meaning each list element must be of the same
/// type. This is opposed to a format like JSON where lists can be
/// heterogeneous. Each variant holds a vector of one element type, so a
/// mixed list cannot be built in the first place.
#[derive(Clone, Default, PartialEq, Debug)]
pub enum List {
    /// The list with the element type of `TAG_End` and length of zero.
    #[default]
    End,
    Byte(Vec<i8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    ByteArray(Vec<Vec<i8>>),
    String(Vec<String>),
    List(Vec<List>),
    Compound(Vec<Compound>),
    IntArray(Vec<Vec<i32>>),
    LongArray(Vec<Vec<i64>>),
}

/// Applies the same expression to the vector inside every non-`End` variant.
macro_rules! with_elems {
    ($list:expr, $v:ident => $body:expr, End => $end:expr) => {
        match $list {
            List::End => $end,
            List::Byte($v) => $body,
            List::Short($v) => $body,
            List::Int($v) => $body,
            List::Long($v) => $body,
            List::Float($v) => $body,
            List::Double($v) => $body,
            List::ByteArray($v) => $body,
            List::String($v) => $body,
            List::List($v) => $body,
            List::Compound($v) => $body,
            List::IntArray($v) => $body,
            List::LongArray($v) => $body,
        }
    };
}

impl List {
    /// Creates an empty list whose declared element type is `tag`.
    pub fn empty(tag: Tag) -> Self {
        match tag {
            Tag::End => List::End,
            Tag::Byte => List::Byte(Vec::new()),
            Tag::Short => List::Short(Vec::new()),
            Tag::Int => List::Int(Vec::new()),
            Tag::Long => List::Long(Vec::new()),
            Tag::Float => List::Float(Vec::new()),
            Tag::Double => List::Double(Vec::new()),
            Tag::ByteArray => List::ByteArray(Vec::new()),
            Tag::String => List::String(Vec::new()),
            Tag::List => List::List(Vec::new()),
            Tag::Compound => List::Compound(Vec::new()),
            Tag::IntArray => List::IntArray(Vec::new()),
            Tag::LongArray => List::LongArray(Vec::new()),
        }
    }

    /// Returns the length of this list.
    pub fn len(&self) -> usize {
        with_elems!(self, v => v.len(), End => 0)
    }

    /// Returns `true` if this list has no elements. `false` otherwise.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element type of this list.
    pub fn element_tag(&self) -> Tag {
        match self {
            List::End => Tag::End,
            List::Byte(_) => Tag::Byte,
            List::Short(_) => Tag::Short,
            List::Int(_) => Tag::Int,
            List::Long(_) => Tag::Long,
            List::Float(_) => Tag::Float,
            List::Double(_) => Tag::Double,
            List::ByteArray(_) => Tag::ByteArray,
            List::String(_) => Tag::String,
            List::List(_) => Tag::List,
            List::Compound(_) => Tag::Compound,
            List::IntArray(_) => Tag::IntArray,
            List::LongArray(_) => Tag::LongArray,
        }
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<ValueRef<'_>> {
        Some(match self {
            List::End => return None,
            List::Byte(v) => ValueRef::Byte(v.get(index)?),
            List::Short(v) => ValueRef::Short(v.get(index)?),
            List::Int(v) => ValueRef::Int(v.get(index)?),
            List::Long(v) => ValueRef::Long(v.get(index)?),
            List::Float(v) => ValueRef::Float(v.get(index)?),
            List::Double(v) => ValueRef::Double(v.get(index)?),
            List::ByteArray(v) => ValueRef::ByteArray(v.get(index)?),
            List::String(v) => ValueRef::String(v.get(index)?),
            List::List(v) => ValueRef::List(v.get(index)?),
            List::Compound(v) => ValueRef::Compound(v.get(index)?),
            List::IntArray(v) => ValueRef::IntArray(v.get(index)?),
            List::LongArray(v) => ValueRef::LongArray(v.get(index)?),
        })
    }

    /// Appends `value` to the end of the list.
    ///
    /// An `End` list takes on the type of the first element pushed into it.
    /// If the value's type differs from the element type, the list is left
    /// unchanged and the value is handed back in the `Err` variant.
    pub fn try_push(&mut self, value: impl Into<Value>) -> Result<(), Value> {
        let value = value.into();

        if let List::End = self {
            *self = List::empty(value.tag());
        }

        match (self, value) {
            (List::Byte(l), Value::Byte(v)) => l.push(v),
            (List::Short(l), Value::Short(v)) => l.push(v),
            (List::Int(l), Value::Int(v)) => l.push(v),
            (List::Long(l), Value::Long(v)) => l.push(v),
            (List::Float(l), Value::Float(v)) => l.push(v),
            (List::Double(l), Value::Double(v)) => l.push(v),
            (List::ByteArray(l), Value::ByteArray(v)) => l.push(v),
            (List::String(l), Value::String(v)) => l.push(v),
            (List::List(l), Value::List(v)) => l.push(v),
            (List::Compound(l), Value::Compound(v)) => l.push(v),
            (List::IntArray(l), Value::IntArray(v)) => l.push(v),
            (List::LongArray(l), Value::LongArray(v)) => l.push(v),
            (_, value) => return Err(value),
        }

        Ok(())
    }

    /// Returns an iterator over the elements of this list.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            index: 0,
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = ValueRef<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct Iter<'a> {
    list: &'a List,
    index: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = ValueRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.list.get(self.index)?;
        self.index += 1;
        Some(elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

macro_rules! impl_from_vec {
    ($($elem:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$elem>> for List {
                fn from(v: Vec<$elem>) -> Self {
                    List::$variant(v)
                }
            }
        )*
    };
}

impl_from_vec! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    List => List,
    Compound => Compound,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_list_adopts_first_element_type() {
        let mut list = List::End;
        assert_eq!(list.element_tag(), Tag::End);

        list.try_push(5_i32).unwrap();
        list.try_push(-2_i32).unwrap();

        assert_eq!(list, List::Int(vec![5, -2]));
    }

    #[test]
    fn mismatched_push_is_rejected() {
        let mut list = List::from(vec![1_i16]);

        assert_eq!(list.try_push("nope"), Err(Value::String("nope".into())));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn iter_yields_elements_in_order() {
        let list = List::from(vec!["a".to_owned(), "b".to_owned()]);
        let elems: Vec<_> = list.iter().collect();

        assert_eq!(elems, [ValueRef::String("a"), ValueRef::String("b")]);
        assert_eq!(list.iter().len(), 2);
        assert_eq!(List::End.iter().next(), None);
    }
}
