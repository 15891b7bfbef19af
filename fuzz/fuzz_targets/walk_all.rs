#![no_main]

use libfuzzer_sys::fuzz_target;

use slim_cbor::{CborError, Decoder, MajorType};

fn walk(dec: &mut Decoder<'_>, depth: u8) -> Result<(), CborError> {
    if depth == 0 {
        return dec.skip();
    }
    match dec.get_type()? {
        MajorType::Uint | MajorType::Nint => {
            if dec.get_i64().is_err() {
                dec.get_u64()?;
            }
        }
        MajorType::Bytes => {
            dec.get_bstr()?;
        }
        MajorType::Text => {
            if dec.get_str().is_err() {
                dec.get_tstr()?;
            }
        }
        MajorType::Array | MajorType::Map => {
            let mut inner = if dec.get_type()? == MajorType::Map {
                dec.enter_map()?
            } else {
                dec.enter_array()?
            };
            while !inner.at_end() {
                walk(&mut inner, depth - 1)?;
            }
            dec.leave_container(inner)?;
        }
        MajorType::Tag => {
            if dec.get_decimal_frac().is_err() {
                dec.get_tag()?;
                walk(dec, depth - 1)?;
            }
        }
        MajorType::Float => {
            if dec.get_simple().is_err() {
                dec.skip_simple()?;
            }
        }
    }
    Ok(())
}

fuzz_target!(|data: &[u8]| {
    let mut dec = Decoder::new(data);
    while !dec.at_end() {
        let before = dec.position();
        if walk(&mut dec, 16).is_err() {
            break;
        }
        assert!(dec.position() > before);
    }
});
