#![no_main]

use libfuzzer_sys::fuzz_target;
use keybloat::{Sha256Hasher, bloat, crazybloat, multibloat};

fuzz_target!(|input: (Vec<u8>, u8, u8)| {
    let (key, iterations, streams) = input;
    let iterations = usize::from(iterations % 64);
    let streams = usize::from(streams % 4);

    let single = bloat::<Sha256Hasher>(&key, iterations);
    let multi = multibloat::<Sha256Hasher>(&key, iterations, streams);

    // Verify: zero parameters fail, everything else succeeds
    assert_eq!(single.is_err(), iterations == 0);
    assert_eq!(multi.is_err(), iterations == 0 || streams == 0);

    let Ok(single) = single else { return };
    assert_eq!(single.len(), 32);

    // Verify: determinism
    assert_eq!(bloat::<Sha256Hasher>(&key, iterations).unwrap(), single);

    // Verify: the table-free variant agrees (kept short, its cost explodes)
    if iterations <= 10 {
        assert_eq!(crazybloat::<Sha256Hasher>(&key, iterations).unwrap(), single);
    }
});
