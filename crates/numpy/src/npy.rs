//! Reader for the `.npy` array container.
//!
//! Layout: the magic string `\x93NUMPY`, a major and minor version byte, the
//! header length (u16 LE for version 1, u32 LE for versions 2 and 3), an
//! ASCII Python dict literal padded with spaces and a newline, then the raw
//! element data.

use std::sync::OnceLock;

use regex::Regex;
use skpmml_buffers::{BufferError, Endian, Reader};
use tracing::debug;

use crate::ndarray::element_count;
use crate::{BufferDecoder, NumpyError, NumpyScalar, TypeDescriptor};

const MAGIC: &[u8; 6] = b"\x93NUMPY";

/// A decoded `.npy` array.
#[derive(Debug, Clone, PartialEq)]
pub struct NpyArray {
    pub descriptor: TypeDescriptor,
    pub fortran_order: bool,
    pub shape: Vec<usize>,
    pub content: Vec<NumpyScalar>,
}

struct HeaderPatterns {
    descr: Regex,
    fortran_order: Regex,
    shape: Regex,
}

fn header_patterns() -> &'static HeaderPatterns {
    static PATTERNS: OnceLock<HeaderPatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| HeaderPatterns {
        descr: Regex::new(r#"['"]descr['"]\s*:\s*['"]([^'"]*)['"]"#).expect("static pattern"),
        fortran_order: Regex::new(r#"['"]fortran_order['"]\s*:\s*(True|False)"#)
            .expect("static pattern"),
        shape: Regex::new(r#"['"]shape['"]\s*:\s*\(([^)]*)\)"#).expect("static pattern"),
    })
}

fn malformed(reason: impl Into<String>) -> NumpyError {
    NumpyError::MalformedNpy {
        reason: reason.into(),
    }
}

/// Parses a complete `.npy` file image.
pub fn read_npy(bytes: &[u8]) -> Result<NpyArray, NumpyError> {
    let mut reader = Reader::new(bytes);
    let magic = reader
        .buf(MAGIC.len())
        .map_err(|_| malformed("missing magic string"))?;
    if magic != MAGIC {
        return Err(malformed("missing magic string"));
    }
    let truncated = |_: BufferError| malformed("truncated preamble");
    let major = reader.u8().map_err(truncated)?;
    let _minor = reader.u8().map_err(truncated)?;
    let header_len = match major {
        1 => usize::from(reader.u16(Endian::Little).map_err(truncated)?),
        2 | 3 => usize::try_from(reader.u32(Endian::Little).map_err(truncated)?)
            .map_err(|_| malformed("header length out of range"))?,
        other => return Err(malformed(format!("unsupported version {other}"))),
    };
    let header = reader
        .utf8(header_len)
        .map_err(|err| malformed(format!("unreadable header: {err}")))?;
    let (descriptor, fortran_order, shape) = parse_header(header)?;

    let count = element_count(&shape)?;
    let data = reader.buf(reader.size())?;
    let content = BufferDecoder::new().decode(&descriptor, data, count)?;
    debug!(%descriptor, ?shape, fortran_order, "read npy array");
    Ok(NpyArray {
        descriptor,
        fortran_order,
        shape,
        content,
    })
}

fn parse_header(header: &str) -> Result<(TypeDescriptor, bool, Vec<usize>), NumpyError> {
    let trimmed = header.trim_end();
    if !(trimmed.starts_with('{') && trimmed.ends_with('}')) {
        return Err(malformed("header is not a dict literal"));
    }
    let patterns = header_patterns();

    let descr = patterns
        .descr
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .ok_or_else(|| malformed("header lacks a plain `descr`"))?;
    let descriptor = TypeDescriptor::parse(descr.as_str())?;

    let fortran_order = patterns
        .fortran_order
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str() == "True")
        .ok_or_else(|| malformed("header lacks `fortran_order`"))?;

    let dims = patterns
        .shape
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .ok_or_else(|| malformed("header lacks `shape`"))?;
    let shape = dims
        .as_str()
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| {
            d.trim_end_matches('L')
                .parse::<usize>()
                .map_err(|_| malformed(format!("bad shape dimension `{d}`")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((descriptor, fortran_order, shape))
}
