use std::borrow::Cow;

use crate::{Compound, List, Tag};

/// Represents an arbitrary NBT value.
///
/// There is no variant for [`Tag::End`]. The end marker only terminates a
/// compound on the wire and is never stored.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// Represents a reference to an arbitrary NBT value, where the tag is not part
/// of the reference.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ValueRef<'a> {
    Byte(&'a i8),
    Short(&'a i16),
    Int(&'a i32),
    Long(&'a i64),
    Float(&'a f32),
    Double(&'a f64),
    ByteArray(&'a [i8]),
    String(&'a str),
    List(&'a List),
    Compound(&'a Compound),
    IntArray(&'a [i32]),
    LongArray(&'a [i64]),
}

macro_rules! impl_value {
    ($name:ident, $($lifetime:lifetime)?, $($reference:tt)*) => {
        impl $(<$lifetime>)? $name $(<$lifetime>)? {
            /// Returns the type of this value.
            pub fn tag(&self) -> Tag {
                match self {
                    Self::Byte(_) => Tag::Byte,
                    Self::Short(_) => Tag::Short,
                    Self::Int(_) => Tag::Int,
                    Self::Long(_) => Tag::Long,
                    Self::Float(_) => Tag::Float,
                    Self::Double(_) => Tag::Double,
                    Self::ByteArray(_) => Tag::ByteArray,
                    Self::String(_) => Tag::String,
                    Self::List(_) => Tag::List,
                    Self::Compound(_) => Tag::Compound,
                    Self::IntArray(_) => Tag::IntArray,
                    Self::LongArray(_) => Tag::LongArray,
                }
            }
        }

        impl $(<$lifetime>)? From<$($reference)* i8> for $name $(<$lifetime>)? {
            fn from(v: $($reference)* i8) -> Self {
                Self::Byte(v)
            }
        }

        impl $(<$lifetime>)? From<$($reference)* i16> for $name $(<$lifetime>)? {
            fn from(v: $($reference)* i16) -> Self {
                Self::Short(v)
            }
        }

        impl $(<$lifetime>)? From<$($reference)* i32> for $name $(<$lifetime>)? {
            fn from(v: $($reference)* i32) -> Self {
                Self::Int(v)
            }
        }

        impl $(<$lifetime>)? From<$($reference)* i64> for $name $(<$lifetime>)? {
            fn from(v: $($reference)* i64) -> Self {
                Self::Long(v)
            }
        }

        impl $(<$lifetime>)? From<$($reference)* f32> for $name $(<$lifetime>)? {
            fn from(v: $($reference)* f32) -> Self {
                Self::Float(v)
            }
        }

        impl $(<$lifetime>)? From<$($reference)* f64> for $name $(<$lifetime>)? {
            fn from(v: $($reference)* f64) -> Self {
                Self::Double(v)
            }
        }

        impl $(<$lifetime>)? From<$($reference)* List> for $name $(<$lifetime>)? {
            fn from(v: $($reference)* List) -> Self {
                Self::List(v)
            }
        }

        impl $(<$lifetime>)? From<$($reference)* Compound> for $name $(<$lifetime>)? {
            fn from(v: $($reference)* Compound) -> Self {
                Self::Compound(v)
            }
        }
    }
}

impl_value!(Value,,);
impl_value!(ValueRef, 'a, &'a);

impl Value {
    /// Creates a fresh, default-valued instance of the given type: zero for
    /// numbers, empty for strings, arrays and containers.
    ///
    /// Returns `None` for [`Tag::End`], which carries no payload.
    pub fn empty(tag: Tag) -> Option<Self> {
        Some(match tag {
            Tag::End => return None,
            Tag::Byte => Value::Byte(0),
            Tag::Short => Value::Short(0),
            Tag::Int => Value::Int(0),
            Tag::Long => Value::Long(0),
            Tag::Float => Value::Float(0.0),
            Tag::Double => Value::Double(0.0),
            Tag::ByteArray => Value::ByteArray(Vec::new()),
            Tag::String => Value::String(String::new()),
            Tag::List => Value::List(List::End),
            Tag::Compound => Value::Compound(Compound::new()),
            Tag::IntArray => Value::IntArray(Vec::new()),
            Tag::LongArray => Value::LongArray(Vec::new()),
        })
    }

    /// Borrows this value as a [`ValueRef`].
    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Value::Byte(v) => ValueRef::Byte(v),
            Value::Short(v) => ValueRef::Short(v),
            Value::Int(v) => ValueRef::Int(v),
            Value::Long(v) => ValueRef::Long(v),
            Value::Float(v) => ValueRef::Float(v),
            Value::Double(v) => ValueRef::Double(v),
            Value::ByteArray(v) => ValueRef::ByteArray(v),
            Value::String(v) => ValueRef::String(v),
            Value::List(v) => ValueRef::List(v),
            Value::Compound(v) => ValueRef::Compound(v),
            Value::IntArray(v) => ValueRef::IntArray(v),
            Value::LongArray(v) => ValueRef::LongArray(v),
        }
    }
}

impl ValueRef<'_> {
    pub fn to_value(self) -> Value {
        match self {
            ValueRef::Byte(v) => Value::Byte(*v),
            ValueRef::Short(v) => Value::Short(*v),
            ValueRef::Int(v) => Value::Int(*v),
            ValueRef::Long(v) => Value::Long(*v),
            ValueRef::Float(v) => Value::Float(*v),
            ValueRef::Double(v) => Value::Double(*v),
            ValueRef::ByteArray(v) => Value::ByteArray(v.to_vec()),
            ValueRef::String(v) => Value::String(v.to_owned()),
            ValueRef::List(v) => Value::List(v.clone()),
            ValueRef::Compound(v) => Value::Compound(v.clone()),
            ValueRef::IntArray(v) => Value::IntArray(v.to_vec()),
            ValueRef::LongArray(v) => Value::LongArray(v.to_vec()),
        }
    }
}

/// Bools are usually represented as `0` or `1` bytes in NBT.
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Byte(i8::from(b))
    }
}

impl From<Vec<i8>> for Value {
    fn from(v: Vec<i8>) -> Self {
        Self::ByteArray(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl<'a> From<&'a str> for Value {
    fn from(v: &'a str) -> Self {
        Self::String(v.to_owned())
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    fn from(v: Cow<'a, str>) -> Self {
        Self::String(v.into_owned())
    }
}

impl From<Vec<i32>> for Value {
    fn from(v: Vec<i32>) -> Self {
        Self::IntArray(v)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Self::LongArray(v)
    }
}

impl<'a> From<&'a [i8]> for ValueRef<'a> {
    fn from(v: &'a [i8]) -> Self {
        Self::ByteArray(v)
    }
}

impl<'a> From<&'a str> for ValueRef<'a> {
    fn from(v: &'a str) -> ValueRef<'a> {
        Self::String(v)
    }
}

impl<'a> From<&'a [i32]> for ValueRef<'a> {
    fn from(v: &'a [i32]) -> Self {
        Self::IntArray(v)
    }
}

impl<'a> From<&'a [i64]> for ValueRef<'a> {
    fn from(v: &'a [i64]) -> Self {
        Self::LongArray(v)
    }
}

impl<'a> From<&'a Value> for ValueRef<'a> {
    fn from(v: &'a Value) -> Self {
        v.as_value_ref()
    }
}
