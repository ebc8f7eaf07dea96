//! Bounds-checked binary reader with cursor tracking.

use std::str;

use crate::{BufferError, Endian};

/// A binary reader over a borrowed byte slice.
///
/// The reader keeps a cursor and reads fixed-width integers and floats in
/// either byte order. Every read checks the remaining length first, so a
/// short buffer yields [`BufferError::EndOfBuffer`] and leaves the cursor
/// where it was.
///
/// # Example
///
/// ```
/// use skpmml_buffers::{Endian, Reader};
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.u16(Endian::Big).unwrap(), 0x0203);
/// assert!(reader.u8().is_ok());
/// assert!(reader.u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
    /// End position (exclusive).
    pub end: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        let end = uint8.len();
        Self { uint8, x: 0, end }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.end - self.x
    }

    /// Returns `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.x >= self.end
    }

    fn ensure(&self, needed: usize) -> Result<(), BufferError> {
        let remaining = self.size();
        if needed > remaining {
            return Err(BufferError::EndOfBuffer { needed, remaining });
        }
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(size)?;
        let x = self.x;
        let end = x + size;
        self.x = end;
        Ok(&self.uint8[x..end])
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let bin = self.buf(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bin);
        Ok(out)
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.buf(length).map(|_| ())
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        Ok(self.array::<1>()?[0])
    }

    /// Reads a signed 8-bit integer.
    #[inline]
    pub fn i8(&mut self) -> Result<i8, BufferError> {
        Ok(self.array::<1>()?[0] as i8)
    }

    #[inline]
    pub fn u16(&mut self, endian: Endian) -> Result<u16, BufferError> {
        let bytes = self.array()?;
        Ok(match endian {
            Endian::Little => u16::from_le_bytes(bytes),
            Endian::Big => u16::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn i16(&mut self, endian: Endian) -> Result<i16, BufferError> {
        let bytes = self.array()?;
        Ok(match endian {
            Endian::Little => i16::from_le_bytes(bytes),
            Endian::Big => i16::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn u32(&mut self, endian: Endian) -> Result<u32, BufferError> {
        let bytes = self.array()?;
        Ok(match endian {
            Endian::Little => u32::from_le_bytes(bytes),
            Endian::Big => u32::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn i32(&mut self, endian: Endian) -> Result<i32, BufferError> {
        let bytes = self.array()?;
        Ok(match endian {
            Endian::Little => i32::from_le_bytes(bytes),
            Endian::Big => i32::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn u64(&mut self, endian: Endian) -> Result<u64, BufferError> {
        let bytes = self.array()?;
        Ok(match endian {
            Endian::Little => u64::from_le_bytes(bytes),
            Endian::Big => u64::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn i64(&mut self, endian: Endian) -> Result<i64, BufferError> {
        let bytes = self.array()?;
        Ok(match endian {
            Endian::Little => i64::from_le_bytes(bytes),
            Endian::Big => i64::from_be_bytes(bytes),
        })
    }

    /// Reads an IEEE-754 half-precision float and widens it to `f64`.
    #[inline]
    pub fn f16(&mut self, endian: Endian) -> Result<f64, BufferError> {
        Ok(half::f16::from_bits(self.u16(endian)?).to_f64())
    }

    #[inline]
    pub fn f32(&mut self, endian: Endian) -> Result<f32, BufferError> {
        let bytes = self.array()?;
        Ok(match endian {
            Endian::Little => f32::from_le_bytes(bytes),
            Endian::Big => f32::from_be_bytes(bytes),
        })
    }

    #[inline]
    pub fn f64(&mut self, endian: Endian) -> Result<f64, BufferError> {
        let bytes = self.array()?;
        Ok(match endian {
            Endian::Little => f64::from_le_bytes(bytes),
            Endian::Big => f64::from_be_bytes(bytes),
        })
    }

    /// Reads a UTF-8 string of the given size.
    pub fn utf8(&mut self, size: usize) -> Result<&'a str, BufferError> {
        let start = self.x;
        let bin = self.buf(size)?;
        str::from_utf8(bin).map_err(|_| {
            self.x = start;
            BufferError::InvalidUtf8
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u8().unwrap(), 0x01);
        assert_eq!(reader.u8().unwrap(), 0x02);
        assert_eq!(reader.u8().unwrap(), 0x03);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_u16_both_orders() {
        let data = [0x01, 0x02, 0x01, 0x02];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.u16(Endian::Big).unwrap(), 0x0102);
        assert_eq!(reader.u16(Endian::Little).unwrap(), 0x0201);
    }

    #[test]
    fn test_i32_little() {
        let data = [0xff, 0xff, 0xff, 0xff];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.i32(Endian::Little).unwrap(), -1);
    }

    #[test]
    fn test_f64_little() {
        let data = 3.5f64.to_le_bytes();
        let mut reader = Reader::new(&data);
        assert_eq!(reader.f64(Endian::Little).unwrap(), 3.5);
    }

    #[test]
    fn test_short_read_keeps_cursor() {
        let data = [0x01, 0x02, 0x03];
        let mut reader = Reader::new(&data);
        reader.skip(1).unwrap();
        assert_eq!(
            reader.u32(Endian::Little),
            Err(BufferError::EndOfBuffer {
                needed: 4,
                remaining: 2
            })
        );
        assert_eq!(reader.x, 1);
        assert_eq!(reader.u16(Endian::Big).unwrap(), 0x0203);
    }

    #[test]
    fn test_utf8() {
        let data = b"hello world";
        let mut reader = Reader::new(data);
        assert_eq!(reader.utf8(5).unwrap(), "hello");
        assert_eq!(reader.utf8(6).unwrap(), " world");
    }

    #[test]
    fn test_utf8_invalid() {
        let data = [0xff, 0xfe];
        let mut reader = Reader::new(&data);
        assert_eq!(reader.utf8(2), Err(BufferError::InvalidUtf8));
        assert_eq!(reader.size(), 2);
    }
}
