//! Request body tree
//!
//! The gateway expects PascalCase JSON built from three shapes: scalars, nested
//! objects and ordered lists of objects. Objects keep insertion order so the
//! serialized body matches the order in which fields were set.

use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

/// Leaf value of the body tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    String(String),
    Integer(i64),
    /// Must be finite to serialize.
    Float(f64),
    Bool(bool),
}

/// Any value that can sit under a body field.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Scalar(Scalar),
    Object(BodyObject),
    List(Vec<BodyObject>),
}

/// Ordered field-name to value mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyObject {
    entries: Vec<(String, Field)>,
}

impl BodyObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Field>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub(crate) fn insert_opt(&mut self, key: &str, value: Option<impl Into<Field>>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for BodyObject
where
    K: Into<String>,
    V: Into<Field>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Self::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for BodyObject
where
    K: Into<String>,
    V: Into<Field>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for BodyObject
where
    K: Into<String>,
    V: Into<Field>,
{
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl Field {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BodyObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[BodyObject]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }
}

impl From<Scalar> for Field {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl From<BodyObject> for Field {
    fn from(value: BodyObject) -> Self {
        Self::Object(value)
    }
}

impl From<Vec<BodyObject>> for Field {
    fn from(value: Vec<BodyObject>) -> Self {
        Self::List(value)
    }
}

macro_rules! scalar_from {
    ($($source:ty => $variant:ident($convert:expr)),* $(,)?) => {
        $(
            impl From<$source> for Scalar {
                fn from(value: $source) -> Self {
                    Self::$variant($convert(value))
                }
            }

            impl From<$source> for Field {
                fn from(value: $source) -> Self {
                    Self::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

scalar_from! {
    String => String(|v| v),
    &str => String(str::to_owned),
    &String => String(String::clone),
    i64 => Integer(|v| v),
    i32 => Integer(i64::from),
    u32 => Integer(i64::from),
    f64 => Float(|v| v),
    bool => Bool(|v| v),
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::String(value) => serializer.serialize_str(value),
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Float(value) if !value.is_finite() => Err(S::Error::custom(format!(
                "{value} cannot be represented in JSON"
            ))),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Bool(value) => serializer.serialize_bool(*value),
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(scalar) => scalar.serialize(serializer),
            Self::Object(object) => object.serialize(serializer),
            Self::List(list) => {
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for object in list {
                    seq.serialize_element(object)?;
                }
                seq.end()
            }
        }
    }
}

impl Serialize for BodyObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
