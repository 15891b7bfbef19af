#![no_main]

use libfuzzer_sys::fuzz_target;

use slim_cbor::Decoder;

fuzz_target!(|data: &[u8]| {
    let mut dec = Decoder::new(data);
    while !dec.at_end() {
        let before = dec.position();
        match dec.get_raw() {
            Ok(raw) => {
                assert_eq!(raw.offset(), before);
                assert_eq!(dec.position(), before + raw.len());
            }
            Err(_) => {
                assert_eq!(dec.position(), before);
                break;
            }
        }
    }
});
