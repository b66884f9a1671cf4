#![no_main]

use libfuzzer_sys::fuzz_target;
use keybloat::StretchedKey;

fuzz_target!(|data: &[u8]| {
    let key = StretchedKey::from_slice(data);
    let hex = key.to_hex();
    assert_eq!(hex.len(), data.len() * 2);
    assert_eq!(StretchedKey::from_hex(&hex), Some(key));

    if let Ok(s) = std::str::from_utf8(data) {
        // Arbitrary text must never panic.
        let _ = StretchedKey::from_hex(s);
    }
});
