#![no_main]

use libfuzzer_sys::fuzz_target;

use slim_cbor::Decoder;

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let split = usize::from(split).min(rest.len());
    let (key, doc) = rest.split_at(split);
    let Ok(key) = core::str::from_utf8(key) else {
        return;
    };

    let Ok(map) = Decoder::new(doc).enter_map() else {
        return;
    };
    if let Ok(mut value) = map.get_key_tstr(key) {
        let _ = value.skip();
    }
});
