//! Decoded element values.

use std::fmt;

/// One decoded element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumpyScalar {
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl NumpyScalar {
    /// Numeric value as a float. Booleans map to `0.0`/`1.0`.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::UInt(v) => v as f64,
            Self::Float(v) => v,
            Self::Bool(v) => f64::from(u8::from(v)),
        }
    }

    /// Integral value, if it fits in an `i64` without loss.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            Self::UInt(v) => i64::try_from(v).ok(),
            Self::Float(v) => {
                if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                    Some(v as i64)
                } else {
                    None
                }
            }
            Self::Bool(v) => Some(i64::from(v)),
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }
}

impl fmt::Display for NumpyScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            // Debug keeps a trailing `.0` on integral floats.
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for NumpyScalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for NumpyScalar {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for NumpyScalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for NumpyScalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
