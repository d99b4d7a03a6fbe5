#![no_main]
use huff::format::SENTINEL;
use huff::{decode, encode_with, EncodeOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding stops at the end-of-stream byte, so only inputs free of it
    // are expected to come back unchanged.
    let input: Vec<u8> = data.iter().copied().filter(|&b| b != SENTINEL).collect();

    let options = EncodeOptions {
        require_shrink: false,
    };
    let container = match encode_with(&input, &options) {
        Ok(container) => container,
        Err(_) => return,
    };

    assert_eq!(input, decode(&container).unwrap());
});
