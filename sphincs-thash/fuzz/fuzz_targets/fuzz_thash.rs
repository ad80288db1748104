#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use sphincs_thash::{Address, EngineConfig, HashEngine, HashFamily, ParameterSet, TweakableHash};

#[derive(Debug, Arbitrary)]
struct Input {
    shake: bool,
    robust: bool,
    set: u8,
    adrs: [u8; 32],
    pk_seed_byte: u8,
    block: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let config = EngineConfig {
        family: if input.shake { HashFamily::Shake } else { HashFamily::Sha2 },
        set: ParameterSet::ALL[usize::from(input.set) % ParameterSet::ALL.len()],
        robust: input.robust,
    };
    let mut engine: HashEngine = config.build().expect("published sets always build");
    let n = engine.params().n();

    // Pad or cut the fuzzer block to a whole number of n-byte blocks
    let blocks = (input.block.len() / n).max(1);
    let mut m = input.block;
    m.resize(blocks * n, 0);

    let pk_seed = vec![input.pk_seed_byte; n];
    let adrs = Address::from_bytes(input.adrs);

    let f = engine.f(&pk_seed, &adrs, &m[..n]);
    let t = engine.t_l(&pk_seed, &adrs, &m);
    assert_eq!(f.len(), n);
    assert_eq!(t.len(), n);

    // A fresh engine must agree with the one whose prefix cache is warm
    let mut fresh = config.build().expect("published sets always build");
    assert_eq!(fresh.f(&pk_seed, &adrs, &m[..n]), f);
    assert_eq!(fresh.t_l(&pk_seed, &adrs, &m), t);
});
