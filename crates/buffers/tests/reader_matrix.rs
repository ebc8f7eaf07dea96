//! Reader matrix: every width in both byte orders, plus half-float edge cases.

use skpmml_buffers::{BufferError, Endian, Reader};

// ---------------------------------------------------------------------------
// Integer widths
// ---------------------------------------------------------------------------

#[test]
fn signed_widths_little_endian() {
    let mut data = Vec::new();
    data.extend_from_slice(&(-2i8).to_le_bytes());
    data.extend_from_slice(&(-1000i16).to_le_bytes());
    data.extend_from_slice(&(i32::MIN).to_le_bytes());
    data.extend_from_slice(&(i64::MAX).to_le_bytes());
    let mut r = Reader::new(&data);
    assert_eq!(r.i8().unwrap(), -2);
    assert_eq!(r.i16(Endian::Little).unwrap(), -1000);
    assert_eq!(r.i32(Endian::Little).unwrap(), i32::MIN);
    assert_eq!(r.i64(Endian::Little).unwrap(), i64::MAX);
    assert!(r.is_empty());
}

#[test]
fn unsigned_widths_big_endian() {
    let mut data = Vec::new();
    data.push(0xff);
    data.extend_from_slice(&0xbeefu16.to_be_bytes());
    data.extend_from_slice(&0xdead_beefu32.to_be_bytes());
    data.extend_from_slice(&u64::MAX.to_be_bytes());
    let mut r = Reader::new(&data);
    assert_eq!(r.u8().unwrap(), 0xff);
    assert_eq!(r.u16(Endian::Big).unwrap(), 0xbeef);
    assert_eq!(r.u32(Endian::Big).unwrap(), 0xdead_beef);
    assert_eq!(r.u64(Endian::Big).unwrap(), u64::MAX);
}

#[test]
fn same_bytes_differ_by_order() {
    let data = [0x00, 0x00, 0x00, 0x01];
    assert_eq!(Reader::new(&data).u32(Endian::Big).unwrap(), 1);
    assert_eq!(Reader::new(&data).u32(Endian::Little).unwrap(), 0x0100_0000);
}

// ---------------------------------------------------------------------------
// Floats
// ---------------------------------------------------------------------------

#[test]
fn floats_in_both_orders() {
    let mut data = Vec::new();
    data.extend_from_slice(&1.25f32.to_be_bytes());
    data.extend_from_slice(&(-0.5f64).to_le_bytes());
    data.extend_from_slice(&0x3c00u16.to_be_bytes());
    let mut r = Reader::new(&data);
    assert_eq!(r.f32(Endian::Big).unwrap(), 1.25);
    assert_eq!(r.f64(Endian::Little).unwrap(), -0.5);
    assert_eq!(r.f16(Endian::Big).unwrap(), 1.0);
}

#[test]
fn half_floats_by_byte_order() {
    // smallest positive subnormal (2^-24), then the largest finite half
    let data = [0x01, 0x00, 0x7b, 0xff];
    let mut r = Reader::new(&data);
    assert_eq!(r.f16(Endian::Little).unwrap(), 2f64.powi(-24));
    assert_eq!(r.f16(Endian::Big).unwrap(), 65504.0);

    let specials = [0x00, 0x7c, 0x00, 0xfc, 0x01, 0x7c, 0x00, 0x80];
    let mut r = Reader::new(&specials);
    assert_eq!(r.f16(Endian::Little).unwrap(), f64::INFINITY);
    assert_eq!(r.f16(Endian::Little).unwrap(), f64::NEG_INFINITY);
    assert!(r.f16(Endian::Little).unwrap().is_nan());
    let negative_zero = r.f16(Endian::Little).unwrap();
    assert!(negative_zero == 0.0 && negative_zero.is_sign_negative());
}

#[test]
fn half_float_needs_two_bytes() {
    let mut r = Reader::new(&[0x3c]);
    assert_eq!(
        r.f16(Endian::Little),
        Err(BufferError::EndOfBuffer {
            needed: 2,
            remaining: 1
        })
    );
}

#[test]
fn native_matches_target() {
    let expected = if cfg!(target_endian = "big") {
        Endian::Big
    } else {
        Endian::Little
    };
    assert_eq!(Endian::native(), expected);
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

#[test]
fn empty_buffer_rejects_every_read() {
    let mut r = Reader::new(&[]);
    assert!(r.u8().is_err());
    assert!(r.f64(Endian::Little).is_err());
    assert_eq!(r.buf(0).unwrap(), &[] as &[u8]);
}

#[test]
fn buf_past_end_reports_lengths() {
    let data = [1u8, 2, 3];
    let mut r = Reader::new(&data);
    assert_eq!(
        r.buf(5),
        Err(BufferError::EndOfBuffer {
            needed: 5,
            remaining: 3
        })
    );
    assert_eq!(r.buf(3).unwrap(), &[1, 2, 3]);
}
