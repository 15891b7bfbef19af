use slim_cbor::{DecimalFraction, Decoder, ErrorCode};

#[test]
fn tag_then_content() {
    // 1(1363896240)
    let bytes = [0xc1, 0x1a, 0x51, 0x4b, 0x67, 0xb0];
    let mut dec = Decoder::new(&bytes);
    assert_eq!(dec.get_tag().unwrap(), 1);
    assert_eq!(dec.position(), 1);
    assert_eq!(dec.get_u32().unwrap(), 1_363_896_240);
    assert!(dec.at_end());
}

#[test]
fn tag_does_not_use_a_container_slot() {
    // [1(5)]
    let bytes = [0x81, 0xc1, 0x05];
    let dec = Decoder::new(&bytes);
    let mut arr = dec.enter_array().unwrap();
    assert_eq!(arr.get_tag().unwrap(), 1);
    assert!(!arr.at_end());
    assert_eq!(arr.get_u8().unwrap(), 5);
    assert!(arr.at_end());
}

#[test]
fn tag_number_limits() {
    let bytes = [0xd9, 0xd9, 0xf7, 0x80];
    assert_eq!(Decoder::new(&bytes).get_tag().unwrap(), 55_799);

    let bytes = [0xdb, 0, 0, 0, 1, 0, 0, 0, 0, 0x00];
    let err = Decoder::new(&bytes).get_tag().unwrap_err();
    assert_eq!(err.code, ErrorCode::Overflow);

    let bytes = [0x01];
    let err = Decoder::new(&bytes).get_tag().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidType);
}

#[test]
fn decimal_fraction() {
    // 4([-2, 27315]) = 273.15
    let bytes = [0xc4, 0x82, 0x21, 0x19, 0x6a, 0xb3];
    let mut dec = Decoder::new(&bytes);
    let frac = dec.get_decimal_frac().unwrap();
    assert_eq!(
        frac,
        DecimalFraction {
            exponent: -2,
            mantissa: 27315
        }
    );
    assert_eq!(dec.position(), bytes.len());
}

#[test]
fn decimal_fraction_in_indefinite_array() {
    let bytes = [0xc4, 0x9f, 0x01, 0x02, 0xff, 0x07];
    let mut dec = Decoder::new(&bytes);
    let frac = dec.get_decimal_frac().unwrap();
    assert_eq!(frac.exponent, 1);
    assert_eq!(frac.mantissa, 2);
    assert_eq!(dec.get_u8().unwrap(), 7);
}

#[test]
fn decimal_fraction_not_found_cases() {
    let cases: [&[u8]; 4] = [
        // Other tag.
        &[0xc5, 0x82, 0x01, 0x01],
        // Not a tag at all.
        &[0x01],
        // Tag 4 around a non-array.
        &[0xc4, 0x01],
        // Nothing to read.
        &[],
    ];
    for bytes in cases {
        let mut dec = Decoder::new(bytes);
        let err = dec.get_decimal_frac().unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound, "input {bytes:02x?}");
        assert_eq!(dec.position(), 0);
    }
}

#[test]
fn decimal_fraction_structural_errors_propagate() {
    let text_exponent = [0xc4, 0x82, 0x61, b'a', 0x01];
    let mut dec = Decoder::new(&text_exponent);
    let err = dec.get_decimal_frac().unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidType);
    assert_eq!(dec.position(), 0);

    let wide_mantissa = [0xc4, 0x82, 0x01, 0x1a, 0x80, 0x00, 0x00, 0x00];
    let err = Decoder::new(&wide_mantissa)
        .get_decimal_frac()
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::Overflow);

    let three_items = [0xc4, 0x83, 0x01, 0x02, 0x03];
    let err = Decoder::new(&three_items)
        .get_decimal_frac()
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::Invalid);

    let one_item = [0xc4, 0x81, 0x01];
    let err = Decoder::new(&one_item).get_decimal_frac().unwrap_err();
    assert_eq!(err.code, ErrorCode::EndOfBuffer);
}
