//! Array-protocol type descriptors (`<f8`, `>i4`, `|b1`, ...).

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use skpmml_buffers::Endian;
use skpmml_classdict::{AttributeError, AttributeValue, FromAttribute};
use tracing::debug;

use crate::NumpyError;

/// Byte order of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    Little,
    Big,
    Native,
}

impl ByteOrder {
    pub fn as_char(self) -> char {
        match self {
            Self::Little => '<',
            Self::Big => '>',
            Self::Native => '=',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Little),
            '>' => Some(Self::Big),
            // `|` marks types where byte order does not apply.
            '=' | '|' => Some(Self::Native),
            _ => None,
        }
    }

    /// The concrete order to read with on this target.
    pub fn resolve(self) -> Endian {
        match self {
            Self::Little => Endian::Little,
            Self::Big => Endian::Big,
            Self::Native => Endian::native(),
        }
    }
}

/// Numeric kind of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Int,
    UInt,
    Float,
    Bool,
}

impl Kind {
    pub fn as_char(self) -> char {
        match self {
            Self::Int => 'i',
            Self::UInt => 'u',
            Self::Float => 'f',
            Self::Bool => 'b',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'i' => Some(Self::Int),
            'u' => Some(Self::UInt),
            'f' => Some(Self::Float),
            'b' => Some(Self::Bool),
            _ => None,
        }
    }

    pub fn supports(self, item_size: usize) -> bool {
        match self {
            Self::Int | Self::UInt => matches!(item_size, 1 | 2 | 4 | 8),
            Self::Float => matches!(item_size, 2 | 4 | 8),
            Self::Bool => item_size == 1,
        }
    }
}

/// How raw bytes map to one numeric element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    byte_order: ByteOrder,
    kind: Kind,
    item_size: usize,
}

fn descriptor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([<>=|])?([a-z])([0-9]+)$").expect("static pattern"))
}

impl TypeDescriptor {
    pub fn new(byte_order: ByteOrder, kind: Kind, item_size: usize) -> Result<Self, NumpyError> {
        if !kind.supports(item_size) {
            return Err(NumpyError::MalformedDescriptor {
                token: format!("{}{}{}", byte_order.as_char(), kind.as_char(), item_size),
                reason: "unsupported item size for kind",
            });
        }
        Ok(Self {
            byte_order,
            kind,
            item_size,
        })
    }

    /// Parses a descriptor token such as `<f8`.
    ///
    /// A missing byte-order character means native order.
    pub fn parse(token: &str) -> Result<Self, NumpyError> {
        let malformed = |reason| NumpyError::MalformedDescriptor {
            token: token.to_string(),
            reason,
        };
        let caps = descriptor_pattern()
            .captures(token)
            .ok_or_else(|| malformed("expected [<>=|]<kind><size>"))?;
        let byte_order = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .map_or(Some(ByteOrder::Native), ByteOrder::from_char)
            .ok_or_else(|| malformed("unknown byte order"))?;
        let kind = caps
            .get(2)
            .and_then(|m| m.as_str().chars().next())
            .and_then(Kind::from_char)
            .ok_or_else(|| malformed("unsupported kind"))?;
        let item_size = caps
            .get(3)
            .and_then(|m| m.as_str().parse::<usize>().ok())
            .ok_or_else(|| malformed("item size out of range"))?;
        if !kind.supports(item_size) {
            return Err(malformed("unsupported item size for kind"));
        }
        let descriptor = Self {
            byte_order,
            kind,
            item_size,
        };
        debug!(%token, ?descriptor, "parsed type descriptor");
        Ok(descriptor)
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn item_size(&self) -> usize {
        self.item_size
    }

    pub fn resolved_byte_order(&self) -> Endian {
        self.byte_order.resolve()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.byte_order.as_char(),
            self.kind.as_char(),
            self.item_size
        )
    }
}

impl FromStr for TypeDescriptor {
    type Err = NumpyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromAttribute for TypeDescriptor {
    fn expected() -> Cow<'static, str> {
        Cow::Borrowed("dtype")
    }

    /// Accepts a bare token or a `numpy.dtype` object carrying `descr`.
    fn from_attribute(value: &AttributeValue) -> Result<Self, AttributeError> {
        match value {
            AttributeValue::Str(token) => Self::parse(token).map_err(AttributeError::invalid),
            AttributeValue::Object(dict) => match dict.get("descr") {
                Ok(AttributeValue::Str(token)) => {
                    Self::parse(token).map_err(AttributeError::invalid)
                }
                _ => Err(AttributeError::shape(value)),
            },
            other => Err(AttributeError::shape(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_little_endian_float() {
        let d = TypeDescriptor::parse("<f8").unwrap();
        assert_eq!(d.byte_order(), ByteOrder::Little);
        assert_eq!(d.kind(), Kind::Float);
        assert_eq!(d.item_size(), 8);
    }

    #[test]
    fn missing_order_and_pipe_mean_native() {
        assert_eq!(
            TypeDescriptor::parse("i4").unwrap().byte_order(),
            ByteOrder::Native
        );
        assert_eq!(
            TypeDescriptor::parse("|b1").unwrap().byte_order(),
            ByteOrder::Native
        );
        assert_eq!(TypeDescriptor::parse("|u1").unwrap().to_string(), "=u1");
    }

    #[test]
    fn rejects_unsupported_widths() {
        for token in ["<f1", "<f16", "<i3", "|b2", "<u0"] {
            assert!(
                matches!(
                    TypeDescriptor::parse(token),
                    Err(NumpyError::MalformedDescriptor { .. })
                ),
                "{token}"
            );
        }
    }

    #[test]
    fn rejects_bad_grammar() {
        for token in ["", "f", "<", "<f", "<x8", "!f8", "<f8 ", "<F8", "<f99999999999999999999999"] {
            assert!(TypeDescriptor::parse(token).is_err(), "{token}");
        }
    }

    #[test]
    fn new_validates_width() {
        assert!(TypeDescriptor::new(ByteOrder::Big, Kind::Float, 4).is_ok());
        assert!(TypeDescriptor::new(ByteOrder::Big, Kind::Bool, 8).is_err());
    }

    #[test]
    fn from_attribute_accepts_dtype_object() {
        let dtype = skpmml_classdict::ClassDict::from_attributes(
            "numpy",
            "dtype",
            [("descr", AttributeValue::from(">u2"))],
        )
        .unwrap();
        let d = TypeDescriptor::from_attribute(&AttributeValue::Object(dtype)).unwrap();
        assert_eq!(d.to_string(), ">u2");
        assert!(TypeDescriptor::from_attribute(&AttributeValue::Int(8)).is_err());
    }
}
