//! Heterogeneous sequence elements
//!
//! A `Value` tags every element of an untyped input sequence with its runtime kind, so the
//! ranking pipeline can keep exactly the integers by pattern matching.

use std::fmt;

/// One element of an untyped input sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A whole number; the only kind that qualifies for ranking
    Integer(i64),
    /// A floating-point number, excluded even when it holds a whole value
    Float(f64),
    /// A boolean, excluded even though it reads as 0/1 in some languages
    Boolean(bool),
    Text(String),
    Null,
    /// A nested sequence
    List(Vec<Value>),
    /// Any opaque object, carrying its type name
    Other(String),
}

impl Value {
    /// Returns the integer payload, or `None` for every other kind
    ///
    /// # Examples
    /// ```
    /// use competition::core::Value;
    ///
    /// assert_eq!(Value::Integer(12).as_integer(), Some(12));
    /// assert_eq!(Value::Float(12.0).as_integer(), None);
    /// assert_eq!(Value::Boolean(true).as_integer(), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the elements if this value is a sequence
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the runtime kind, used in diagnostics
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Boolean(_) => "bool",
            Self::Text(_) => "str",
            Self::Null => "null",
            Self::List(_) => "list",
            Self::Other(name) => name,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Boolean(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if n.is_u64() {
                    // Whole number past i64::MAX
                    Self::Other("big-int".to_string())
                } else {
                    n.as_f64().map_or_else(|| Self::Other("number".to_string()), Self::Float)
                }
            }
            Json::String(s) => Self::Text(s),
            Json::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Json::Object(_) => Self::Other("object".to_string()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Null => write!(f, "null"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Other(name) => write!(f, "<{name}>"),
        }
    }
}
