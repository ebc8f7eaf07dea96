//! Binary buffer utilities for skpmml.
//!
//! This crate provides the bounds-checked byte reader that the NumPy decoders
//! sit on top of.
//!
//! # Overview
//!
//! - [`Reader`] - Reads fixed-width values from a byte slice with cursor tracking
//! - [`Endian`] - Byte order selector for multi-byte reads
//!
//! # Example
//!
//! ```
//! use skpmml_buffers::{Endian, Reader};
//!
//! let data = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x40];
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.f64(Endian::Little).unwrap(), 3.5);
//! ```

mod reader;

pub use reader::Reader;

use thiserror::Error;

/// Byte order of a multi-byte value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    /// The byte order of the compilation target.
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Endian::Big
        } else {
            Endian::Little
        }
    }
}

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: needed {needed} bytes, {remaining} remaining")]
    EndOfBuffer { needed: usize, remaining: usize },
    /// Invalid UTF-8 sequence.
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
}
