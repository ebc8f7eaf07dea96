//! Dynamic attribute values and the typed conversion trait.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::ClassDict;

/// A value stored in a [`ClassDict`] by the deserializer.
///
/// Tuples and lists both arrive as [`AttributeValue::List`]; nested host
/// objects arrive as [`AttributeValue::Object`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    List(Vec<AttributeValue>),
    Dict(IndexMap<String, AttributeValue>),
    Object(ClassDict),
}

impl AttributeValue {
    /// Short name of the runtime shape, used in mismatch reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Dict(_) => "dict",
            Self::Object(_) => "object",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<u8>> for AttributeValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(value: Vec<AttributeValue>) -> Self {
        Self::List(value)
    }
}

impl From<ClassDict> for AttributeValue {
    fn from(value: ClassDict) -> Self {
        Self::Object(value)
    }
}

/// Why a stored value could not be converted.
#[derive(Debug)]
pub enum AttributeError {
    /// The runtime shape is wrong for the requested type.
    Shape { actual: Cow<'static, str> },
    /// The shape is right but the content is not acceptable.
    Invalid(Box<dyn std::error::Error + Send + Sync>),
}

impl AttributeError {
    pub fn shape(value: &AttributeValue) -> Self {
        Self::Shape {
            actual: Cow::Borrowed(value.kind()),
        }
    }

    pub fn invalid<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Invalid(Box::new(error))
    }
}

/// Conversion from a stored [`AttributeValue`] into a concrete Rust type.
///
/// The shape check happens once, at read time.
pub trait FromAttribute: Sized {
    /// Human-readable name of the accepted shape.
    fn expected() -> Cow<'static, str>;

    fn from_attribute(value: &AttributeValue) -> Result<Self, AttributeError>;
}

impl FromAttribute for AttributeValue {
    fn expected() -> Cow<'static, str> {
        Cow::Borrowed("any")
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self, AttributeError> {
        Ok(value.clone())
    }
}

impl FromAttribute for bool {
    fn expected() -> Cow<'static, str> {
        Cow::Borrowed("bool")
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self, AttributeError> {
        match value {
            AttributeValue::Bool(b) => Ok(*b),
            other => Err(AttributeError::shape(other)),
        }
    }
}

impl FromAttribute for i64 {
    fn expected() -> Cow<'static, str> {
        Cow::Borrowed("int")
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self, AttributeError> {
        match value {
            AttributeValue::Int(i) => Ok(*i),
            other => Err(AttributeError::shape(other)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("expected a non-negative int, got {0}")]
struct NegativeInt(i64);

impl FromAttribute for usize {
    fn expected() -> Cow<'static, str> {
        Cow::Borrowed("non-negative int")
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self, AttributeError> {
        match value {
            AttributeValue::Int(i) => {
                usize::try_from(*i).map_err(|_| AttributeError::invalid(NegativeInt(*i)))
            }
            other => Err(AttributeError::shape(other)),
        }
    }
}

impl FromAttribute for f64 {
    fn expected() -> Cow<'static, str> {
        Cow::Borrowed("float")
    }

    /// Ints widen to floats.
    fn from_attribute(value: &AttributeValue) -> Result<Self, AttributeError> {
        match value {
            AttributeValue::Float(f) => Ok(*f),
            AttributeValue::Int(i) => Ok(*i as f64),
            other => Err(AttributeError::shape(other)),
        }
    }
}

impl FromAttribute for String {
    fn expected() -> Cow<'static, str> {
        Cow::Borrowed("str")
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self, AttributeError> {
        match value {
            AttributeValue::Str(s) => Ok(s.clone()),
            other => Err(AttributeError::shape(other)),
        }
    }
}

impl FromAttribute for Vec<u8> {
    fn expected() -> Cow<'static, str> {
        Cow::Borrowed("bytes")
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self, AttributeError> {
        match value {
            AttributeValue::Bytes(b) => Ok(b.clone()),
            other => Err(AttributeError::shape(other)),
        }
    }
}

impl FromAttribute for ClassDict {
    fn expected() -> Cow<'static, str> {
        Cow::Borrowed("object")
    }

    fn from_attribute(value: &AttributeValue) -> Result<Self, AttributeError> {
        match value {
            AttributeValue::Object(dict) => Ok(dict.clone()),
            other => Err(AttributeError::shape(other)),
        }
    }
}

macro_rules! impl_list_from_attribute {
    ($($elem:ty),*) => {$(
        impl FromAttribute for Vec<$elem> {
            fn expected() -> Cow<'static, str> {
                Cow::Owned(format!("list of {}", <$elem as FromAttribute>::expected()))
            }

            fn from_attribute(value: &AttributeValue) -> Result<Self, AttributeError> {
                let AttributeValue::List(items) = value else {
                    return Err(AttributeError::shape(value));
                };
                items
                    .iter()
                    .map(|item| match <$elem as FromAttribute>::from_attribute(item) {
                        Err(AttributeError::Shape { actual }) => Err(AttributeError::Shape {
                            actual: Cow::Owned(format!("list containing {actual}")),
                        }),
                        other => other,
                    })
                    .collect()
            }
        }
    )*};
}

// `Vec<u8>` is bytes, so lists are implemented per element type.
impl_list_from_attribute!(bool, i64, usize, f64, String, ClassDict, AttributeValue);
