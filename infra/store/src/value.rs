//! Heterogeneous dictionary values.

use crate::error::StoreError;
use crate::mapping::Mapping;
use std::fmt;

/// The closed set of value shapes a dictionary entry may hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Flag(bool),
    List(Vec<String>),
    Map(Mapping<Self>),
}

impl Value {
    /// Short name of the variant, used in type mismatch reports.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Flag(_) => "flag",
            Self::List(_) => "list",
            Self::Map(_) => "mapping",
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&Mapping<Self>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// One step of nested access: `value[key]`.
    ///
    /// # Errors
    /// [`StoreError::TypeMismatch`] if this value is not a mapping,
    /// [`StoreError::KeyNotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Self, StoreError> {
        self.as_map()
            .ok_or(StoreError::TypeMismatch {
                expected: "mapping",
                found: self.type_name(),
                context: None,
            })?
            .get(key)
    }
}

impl Mapping<Value> {
    /// Chained lookup through nested mappings, e.g. `["Frosta", "location"]`.
    ///
    /// # Errors
    /// Fails at the first level where the key is absent or the value is not a mapping.
    /// An empty path is reported as a missing (empty) key.
    pub fn lookup(&self, path: &[&str]) -> Result<&Value, StoreError> {
        let Some((first, rest)) = path.split_first() else {
            return Err(StoreError::key_not_found(""));
        };
        rest.iter().try_fold(self.get(first)?, |value, key| value.get(key))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "'{text}'"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Flag(flag) => write!(f, "{flag}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{item}'")?;
                }
                f.write_str("]")
            },
            Self::Map(map) => write!(f, "{map}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl<S: Into<String>> From<Vec<S>> for Value {
    fn from(items: Vec<S>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Mapping<Self>> for Value {
    fn from(map: Mapping<Self>) -> Self {
        Self::Map(map)
    }
}
