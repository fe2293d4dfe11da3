use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::Hash;
use std::ops::{Index, IndexMut};

use indexmap::IndexMap;

use crate::{List, Tag, Value};

/// A map type with [`String`] keys and [`Value`] values.
///
/// Entries keep the order in which they were first inserted. Inserting under
/// an existing name replaces the value in place.
#[derive(Clone, PartialEq, Default)]
pub struct Compound {
    map: Map,
}

type Map = IndexMap<String, Value>;

impl fmt::Debug for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.map.fmt(f)
    }
}

impl Compound {
    pub fn new() -> Self {
        Self { map: Map::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: Map::with_capacity(cap),
        }
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Returns the value stored under `k`, whatever its type.
    pub fn get<Q>(&self, k: &Q) -> Option<&Value>
    where
        String: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.map.get(k)
    }

    pub fn get_mut<Q>(&mut self, k: &Q) -> Option<&mut Value>
    where
        String: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.map.get_mut(k)
    }

    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.map.contains_key(k)
    }

    /// Returns `true` if an entry named `k` exists and holds a value of type
    /// `tag`.
    pub fn contains<Q>(&self, k: &Q, tag: Tag) -> bool
    where
        String: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.get(k).is_some_and(|v| v.tag() == tag)
    }

    /// Inserts `v` under `k`, returning the value it replaced, if any.
    pub fn insert<K, V>(&mut self, k: K, v: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.map.insert(k.into(), v.into())
    }

    /// Removes the entry named `k`, keeping the order of the remaining entries.
    pub fn remove<Q>(&mut self, k: &Q) -> Option<Value>
    where
        String: Borrow<Q>,
        Q: ?Sized + Eq + Hash,
    {
        self.map.shift_remove(k)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.map.iter()
    }

    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.map.iter_mut()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.map.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.map.values()
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&String, &mut Value) -> bool,
    {
        self.map.retain(f);
    }
}

macro_rules! scalar_accessors {
    ($($get:ident, $put:ident, $ty:ty, $variant:ident;)*) => {
        $(
            pub fn $get(&self, name: &str) -> $ty {
                match self.get(name) {
                    Some(Value::$variant(v)) => *v,
                    _ => <$ty>::default(),
                }
            }

            pub fn $put(&mut self, name: impl Into<String>, value: $ty) {
                self.insert(name, Value::$variant(value));
            }
        )*
    };
}

macro_rules! array_accessors {
    ($($get:ident, $put:ident, $elem:ty, $variant:ident;)*) => {
        $(
            pub fn $get(&self, name: &str) -> &[$elem] {
                match self.get(name) {
                    Some(Value::$variant(v)) => v,
                    _ => &[],
                }
            }

            pub fn $put(&mut self, name: impl Into<String>, value: impl Into<Vec<$elem>>) {
                self.insert(name, Value::$variant(value.into()));
            }
        )*
    };
}

/// Typed getters and setters.
///
/// A getter returns the stored value only when the entry exists *and* has
/// the expected type. Otherwise it returns the zero value of that type (`0`,
/// `""`, an empty array, list or compound), so an absent entry, an entry of
/// another type, and a stored zero all look the same. Use [`Compound::get`]
/// and [`Value::tag`] when the difference matters.
impl Compound {
    scalar_accessors! {
        get_byte, put_byte, i8, Byte;
        get_short, put_short, i16, Short;
        get_int, put_int, i32, Int;
        get_long, put_long, i64, Long;
        get_float, put_float, f32, Float;
        get_double, put_double, f64, Double;
    }

    array_accessors! {
        get_byte_array, put_byte_array, i8, ByteArray;
        get_int_array, put_int_array, i32, IntArray;
        get_long_array, put_long_array, i64, LongArray;
    }

    pub fn get_string(&self, name: &str) -> &str {
        match self.get(name) {
            Some(Value::String(s)) => s,
            _ => "",
        }
    }

    pub fn put_string(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.insert(name, Value::String(value.into()));
    }

    /// Returns the nested compound named `name`, or a new empty compound.
    pub fn get_compound(&self, name: &str) -> Cow<'_, Compound> {
        match self.get(name) {
            Some(Value::Compound(c)) => Cow::Borrowed(c),
            _ => Cow::Owned(Compound::new()),
        }
    }

    pub fn put_compound(&mut self, name: impl Into<String>, value: Compound) {
        self.insert(name, value);
    }

    /// Returns the list named `name`, or an empty [`List::End`].
    pub fn get_list(&self, name: &str) -> Cow<'_, List> {
        match self.get(name) {
            Some(Value::List(l)) => Cow::Borrowed(l),
            _ => Cow::Owned(List::End),
        }
    }

    pub fn put_list(&mut self, name: impl Into<String>, value: impl Into<List>) {
        self.insert(name, value.into());
    }
}

impl Extend<(String, Value)> for Compound {
    fn extend<T>(&mut self, iter: T)
    where
        T: IntoIterator<Item = (String, Value)>,
    {
        self.map.extend(iter);
    }
}

impl FromIterator<(String, Value)> for Compound {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (String, Value)>,
    {
        Self {
            map: Map::from_iter(iter),
        }
    }
}

impl<Q> Index<&'_ Q> for Compound
where
    String: Borrow<Q>,
    Q: ?Sized + Eq + Hash,
{
    type Output = Value;

    fn index(&self, index: &Q) -> &Self::Output {
        self.map.index(index)
    }
}

impl<Q> IndexMut<&'_ Q> for Compound
where
    String: Borrow<Q>,
    Q: ?Sized + Eq + Hash,
{
    fn index_mut(&mut self, index: &Q) -> &mut Self::Output {
        self.map.index_mut(index)
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<'a> IntoIterator for &'a mut Compound {
    type Item = (&'a String, &'a mut Value);
    type IntoIter = indexmap::map::IterMut<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter_mut()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::compound;

    #[test]
    fn preserves_order() {
        let letters = ["g", "b", "d", "e", "h", "z", "m", "a", "q"];

        let mut c = Compound::new();
        for l in letters {
            c.insert(l, 0_i8);
        }

        for (k, l) in c.keys().zip(letters) {
            assert_eq!(k, l);
        }
    }

    #[test]
    fn insert_overwrites_in_place() {
        let mut c = compound! {
            "a" => 1,
            "b" => 2,
        };

        assert_eq!(c.insert("a", "replaced"), Some(Value::Int(1)));
        assert_eq!(c.len(), 2);
        assert_eq!(c.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(c.get_string("a"), "replaced");
    }

    #[test]
    fn contains_checks_type() {
        let c = compound! { "a" => 5 };

        assert!(c.contains("a", Tag::Int));
        assert!(!c.contains("a", Tag::Long));
        assert!(!c.contains("missing", Tag::Int));
    }

    #[test]
    fn typed_getters_default_on_absent_or_wrong_type() {
        let c = compound! {
            "a" => 5,
            "s" => "hi",
        };

        assert_eq!(c.get_int("missing"), 0);
        assert_eq!(c.get_string("a"), "");
        assert_eq!(c.get_long("a"), 0);
        assert_eq!(c.get_double("s"), 0.0);
        assert_eq!(c.get_byte_array("a"), &[] as &[i8]);
        assert_eq!(c.get_long_array("missing"), &[] as &[i64]);
        assert!(c.get_compound("a").is_empty());
        assert_eq!(*c.get_list("s"), List::End);

        assert_eq!(c.get_int("a"), 5);
        assert_eq!(c.get_string("s"), "hi");
    }

    #[test]
    fn typed_setters_store_expected_variants() {
        let mut c = Compound::new();

        c.put_byte("byte", -1);
        c.put_short("short", 300);
        c.put_int("int", 70_000);
        c.put_long("long", i64::MIN);
        c.put_float("float", 1.5);
        c.put_double("double", -0.25);
        c.put_byte_array("bytes", vec![1_i8, 2]);
        c.put_string("string", "héllo");
        c.put_int_array("ints", [3_i32, 4]);
        c.put_long_array("longs", vec![5_i64]);
        c.put_list("list", vec![1_i16, 2]);
        c.put_compound("nested", compound! { "x" => 1_i8 });

        assert_eq!(c.get_byte("byte"), -1);
        assert_eq!(c.get_short("short"), 300);
        assert_eq!(c.get_int("int"), 70_000);
        assert_eq!(c.get_long("long"), i64::MIN);
        assert_eq!(c.get_float("float"), 1.5);
        assert_eq!(c.get_double("double"), -0.25);
        assert_eq!(c.get_byte_array("bytes"), [1_i8, 2]);
        assert_eq!(c.get_string("string"), "héllo");
        assert_eq!(c.get_int_array("ints"), [3_i32, 4]);
        assert_eq!(c.get_long_array("longs"), [5_i64]);
        assert_eq!(*c.get_list("list"), List::Short(vec![1, 2]));
        assert_eq!(c.get_compound("nested").get_byte("x"), 1);
        assert!(matches!(c.get_compound("nested"), Cow::Borrowed(_)));
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut c = compound! {
            "a" => 1,
            "b" => 2,
            "c" => 3,
        };

        assert_eq!(c.remove("a"), Some(Value::Int(1)));
        assert_eq!(c.keys().collect::<Vec<_>>(), ["b", "c"]);
    }
}
