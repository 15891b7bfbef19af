use slim_cbor::{Decoder, ErrorCode};

fn err_code<T: core::fmt::Debug>(r: Result<T, slim_cbor::CborError>) -> ErrorCode {
    r.unwrap_err().code
}

#[test]
fn unsigned_boundaries() {
    assert_eq!(Decoder::new(&[0x17]).get_u8().unwrap(), 23);
    assert_eq!(Decoder::new(&[0x18, 0xff]).get_u8().unwrap(), u8::MAX);
    assert_eq!(
        err_code(Decoder::new(&[0x19, 0x01, 0x00]).get_u8()),
        ErrorCode::Overflow
    );

    assert_eq!(
        Decoder::new(&[0x19, 0xff, 0xff]).get_u16().unwrap(),
        u16::MAX
    );
    assert_eq!(
        err_code(Decoder::new(&[0x1a, 0x00, 0x01, 0x00, 0x00]).get_u16()),
        ErrorCode::Overflow
    );

    assert_eq!(
        Decoder::new(&[0x1a, 0xff, 0xff, 0xff, 0xff])
            .get_u32()
            .unwrap(),
        u32::MAX
    );
    assert_eq!(
        err_code(Decoder::new(&[0x1b, 0, 0, 0, 1, 0, 0, 0, 0]).get_u32()),
        ErrorCode::Overflow
    );

    let max = [0x1b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
    assert_eq!(Decoder::new(&max).get_u64().unwrap(), u64::MAX);
}

#[test]
fn eight_byte_argument_never_fits_u32() {
    // Even a small value is refused when it is carried in 8 trailing bytes.
    let bytes = [0x1b, 0, 0, 0, 0, 0, 0, 0, 1];
    let mut dec = Decoder::new(&bytes);
    assert_eq!(err_code(dec.get_u32()), ErrorCode::Overflow);
    assert_eq!(err_code(dec.get_i32()), ErrorCode::Overflow);
    assert_eq!(dec.position(), 0);
    assert_eq!(dec.get_u64().unwrap(), 1);
    assert_eq!(dec.position(), 9);
}

#[test]
fn signed_boundaries() {
    assert_eq!(Decoder::new(&[0x18, 0x7f]).get_i8().unwrap(), i8::MAX);
    assert_eq!(
        err_code(Decoder::new(&[0x18, 0x80]).get_i8()),
        ErrorCode::Overflow
    );
    assert_eq!(Decoder::new(&[0x38, 0x7f]).get_i8().unwrap(), i8::MIN);
    assert_eq!(
        err_code(Decoder::new(&[0x38, 0x80]).get_i8()),
        ErrorCode::Overflow
    );

    assert_eq!(
        Decoder::new(&[0x39, 0x7f, 0xff]).get_i16().unwrap(),
        i16::MIN
    );
    assert_eq!(
        Decoder::new(&[0x1a, 0x7f, 0xff, 0xff, 0xff])
            .get_i32()
            .unwrap(),
        i32::MAX
    );
    assert_eq!(
        err_code(Decoder::new(&[0x1a, 0x80, 0x00, 0x00, 0x00]).get_i32()),
        ErrorCode::Overflow
    );
    assert_eq!(
        Decoder::new(&[0x3a, 0x7f, 0xff, 0xff, 0xff])
            .get_i32()
            .unwrap(),
        i32::MIN
    );
    assert_eq!(
        err_code(Decoder::new(&[0x3a, 0x80, 0x00, 0x00, 0x00]).get_i32()),
        ErrorCode::Overflow
    );

    let min = [0x3b, 0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
    assert_eq!(Decoder::new(&min).get_i64().unwrap(), i64::MIN);
    let too_small = [0x3b, 0x80, 0, 0, 0, 0, 0, 0, 0];
    assert_eq!(
        err_code(Decoder::new(&too_small).get_i64()),
        ErrorCode::Overflow
    );
}

#[test]
fn signed_reader_accepts_uint_and_nint() {
    let bytes = [0x0a, 0x29, 0x19, 0x03, 0xe8, 0x39, 0x03, 0xe7];
    let mut dec = Decoder::new(&bytes);
    assert_eq!(dec.get_i16().unwrap(), 10);
    assert_eq!(dec.get_i16().unwrap(), -10);
    assert_eq!(dec.get_i16().unwrap(), 1000);
    assert_eq!(dec.get_i16().unwrap(), -1000);
    assert!(dec.at_end());
}

#[test]
fn type_mismatch_leaves_cursor() {
    let bytes = [0x20];
    let mut dec = Decoder::new(&bytes);
    assert_eq!(err_code(dec.get_u8()), ErrorCode::InvalidType);
    assert_eq!(dec.position(), 0);

    let bytes = [0x41, 0x00];
    let mut dec = Decoder::new(&bytes);
    assert_eq!(err_code(dec.get_i8()), ErrorCode::InvalidType);
    assert_eq!(dec.position(), 0);
}

#[test]
fn truncated_argument_is_end_of_buffer() {
    let bytes = [0x19, 0x01];
    let mut dec = Decoder::new(&bytes);
    let err = dec.get_u16().unwrap_err();
    assert_eq!(err.code, ErrorCode::EndOfBuffer);
    assert_eq!(err.offset, 0);
    assert_eq!(dec.position(), 0);

    let bytes = [0x3a, 0x00, 0x00];
    assert_eq!(
        err_code(Decoder::new(&bytes).get_i32()),
        ErrorCode::EndOfBuffer
    );
}

#[test]
fn reserved_selectors_are_invalid() {
    for ib in [0x1c, 0x1d, 0x1e, 0x1f] {
        let bytes = [ib, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(err_code(Decoder::new(&bytes).get_u64()), ErrorCode::Invalid);
    }
}

#[test]
fn advance_counts_header_and_trailing_bytes() {
    let bytes = [0x05, 0x18, 0x20, 0x19, 0x01, 0x00, 0x1a, 0x00, 0x01, 0x00, 0x00];
    let mut dec = Decoder::new(&bytes);
    dec.get_u32().unwrap();
    assert_eq!(dec.position(), 1);
    dec.get_u32().unwrap();
    assert_eq!(dec.position(), 3);
    dec.get_u32().unwrap();
    assert_eq!(dec.position(), 6);
    assert_eq!(dec.get_u32().unwrap(), 65_536);
    assert_eq!(dec.position(), 11);
}
