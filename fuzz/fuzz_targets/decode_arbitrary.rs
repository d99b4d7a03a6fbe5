#![no_main]
use huff::format::MAGIC;
use huff::decode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Prefix the magic so the fuzzer reaches table and payload parsing.
    let mut container = MAGIC.to_le_bytes().to_vec();
    container.extend_from_slice(data);
    let _ = decode(&container);
    let _ = decode(data);
});
