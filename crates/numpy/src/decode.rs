//! Decoding raw element buffers under a [`TypeDescriptor`].

use skpmml_buffers::{BufferError, Endian, Reader};
use tracing::trace;

use crate::{Kind, NumpyError, NumpyScalar, TypeDescriptor};

/// Stateless decoder from raw bytes to [`NumpyScalar`] elements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferDecoder;

impl BufferDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes exactly `count` elements.
    ///
    /// `buffer` must be exactly `item_size * count` bytes long. Elements come
    /// back in buffer order, and on failure nothing is returned.
    pub fn decode(
        &self,
        descriptor: &TypeDescriptor,
        buffer: &[u8],
        count: usize,
    ) -> Result<Vec<NumpyScalar>, NumpyError> {
        let item_size = descriptor.item_size();
        let truncated = || NumpyError::TruncatedBuffer {
            item_size,
            count: Some(count),
            actual: buffer.len(),
        };
        let expected = item_size.checked_mul(count).ok_or_else(truncated)?;
        if buffer.len() != expected {
            return Err(truncated());
        }
        read_elements(descriptor, buffer, count)
    }

    /// Decodes the whole buffer, inferring the element count.
    pub fn decode_all(
        &self,
        descriptor: &TypeDescriptor,
        buffer: &[u8],
    ) -> Result<Vec<NumpyScalar>, NumpyError> {
        let item_size = descriptor.item_size();
        if buffer.len() % item_size != 0 {
            return Err(NumpyError::TruncatedBuffer {
                item_size,
                count: None,
                actual: buffer.len(),
            });
        }
        read_elements(descriptor, buffer, buffer.len() / item_size)
    }
}

/// Shorthand for [`BufferDecoder::decode`].
pub fn decode(
    descriptor: &TypeDescriptor,
    buffer: &[u8],
    count: usize,
) -> Result<Vec<NumpyScalar>, NumpyError> {
    BufferDecoder.decode(descriptor, buffer, count)
}

fn read_elements(
    descriptor: &TypeDescriptor,
    buffer: &[u8],
    count: usize,
) -> Result<Vec<NumpyScalar>, NumpyError> {
    let endian = descriptor.resolved_byte_order();
    let mut reader = Reader::new(buffer);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(read_element(&mut reader, descriptor, endian)?);
    }
    trace!(%descriptor, count, "decoded buffer");
    Ok(out)
}

fn read_element(
    reader: &mut Reader<'_>,
    descriptor: &TypeDescriptor,
    endian: Endian,
) -> Result<NumpyScalar, BufferError> {
    let value = match (descriptor.kind(), descriptor.item_size()) {
        (Kind::Bool, _) => NumpyScalar::Bool(reader.u8()? != 0),
        (Kind::Int, 1) => NumpyScalar::Int(reader.i8()?.into()),
        (Kind::Int, 2) => NumpyScalar::Int(reader.i16(endian)?.into()),
        (Kind::Int, 4) => NumpyScalar::Int(reader.i32(endian)?.into()),
        (Kind::Int, _) => NumpyScalar::Int(reader.i64(endian)?),
        (Kind::UInt, 1) => NumpyScalar::UInt(reader.u8()?.into()),
        (Kind::UInt, 2) => NumpyScalar::UInt(reader.u16(endian)?.into()),
        (Kind::UInt, 4) => NumpyScalar::UInt(reader.u32(endian)?.into()),
        (Kind::UInt, _) => NumpyScalar::UInt(reader.u64(endian)?),
        (Kind::Float, 2) => NumpyScalar::Float(reader.f16(endian)?),
        (Kind::Float, 4) => NumpyScalar::Float(reader.f32(endian)?.into()),
        (Kind::Float, _) => NumpyScalar::Float(reader.f64(endian)?),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(token: &str) -> TypeDescriptor {
        TypeDescriptor::parse(token).unwrap()
    }

    #[test]
    fn little_endian_f8() {
        let bytes = 3.5f64.to_le_bytes();
        assert_eq!(
            decode(&d("<f8"), &bytes, 1).unwrap(),
            [NumpyScalar::Float(3.5)]
        );
    }

    #[test]
    fn little_endian_i4() {
        assert_eq!(
            decode(&d("<i4"), &[0x01, 0x00, 0x00, 0x00], 1).unwrap(),
            [NumpyScalar::Int(1)]
        );
    }

    #[test]
    fn big_endian_i2_sequence() {
        let bytes = [0xff, 0xfe, 0x00, 0x02];
        assert_eq!(
            decode(&d(">i2"), &bytes, 2).unwrap(),
            [NumpyScalar::Int(-2), NumpyScalar::Int(2)]
        );
    }

    #[test]
    fn uint_is_raw_bit_pattern() {
        assert_eq!(
            decode(&d("<u2"), &[0xff, 0xff], 1).unwrap(),
            [NumpyScalar::UInt(65535)]
        );
    }

    #[test]
    fn bool_is_nonzero_test() {
        assert_eq!(
            decode(&d("|b1"), &[0, 1, 7], 3).unwrap(),
            [
                NumpyScalar::Bool(false),
                NumpyScalar::Bool(true),
                NumpyScalar::Bool(true)
            ]
        );
    }

    #[test]
    fn half_and_single_floats() {
        assert_eq!(
            decode(&d("<f2"), &[0x00, 0x3c], 1).unwrap(),
            [NumpyScalar::Float(1.0)]
        );
        assert_eq!(
            decode(&d(">f4"), &0.75f32.to_be_bytes(), 1).unwrap(),
            [NumpyScalar::Float(0.75)]
        );
    }

    #[test]
    fn half_floats_in_both_orders() {
        // 1.5, -2.0, 65504.0 (largest finite half)
        let little = [0x00, 0x3e, 0x00, 0xc0, 0xff, 0x7b];
        let big = [0x3e, 0x00, 0xc0, 0x00, 0x7b, 0xff];
        let expected = [1.5, -2.0, 65504.0].map(NumpyScalar::Float);
        assert_eq!(decode(&d("<f2"), &little, 3).unwrap(), expected);
        assert_eq!(decode(&d(">f2"), &big, 3).unwrap(), expected);
        assert!(matches!(
            decode(&d(">f2"), &big[..5], 3),
            Err(NumpyError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn length_must_match_exactly() {
        let bytes = [0u8; 9];
        for count in [0, 1, 2] {
            assert!(matches!(
                decode(&d("<f8"), &bytes, count),
                Err(NumpyError::TruncatedBuffer { .. })
            ));
        }
        assert!(decode(&d("<f8"), &[], 0).unwrap().is_empty());
    }

    #[test]
    fn count_overflow_is_truncation() {
        assert!(matches!(
            decode(&d("<f8"), &[], usize::MAX),
            Err(NumpyError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn decode_all_infers_count() {
        let bytes = [1, 0, 2, 0, 3, 0];
        assert_eq!(
            BufferDecoder.decode_all(&d("<u2"), &bytes).unwrap(),
            [
                NumpyScalar::UInt(1),
                NumpyScalar::UInt(2),
                NumpyScalar::UInt(3)
            ]
        );
        assert!(BufferDecoder.decode_all(&d("<u2"), &bytes[..5]).is_err());
    }
}
