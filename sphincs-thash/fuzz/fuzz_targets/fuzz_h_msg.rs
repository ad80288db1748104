#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use sphincs_thash::{HashEngine, HashFamily, Params, TweakableHash};

/// Arbitrary parameter shape plus H_msg inputs.
#[derive(Debug, Arbitrary)]
struct Input {
    shake: bool,
    n: u8,
    wide_w: bool,
    d: u8,
    a: u8,
    k: u8,
    h: u8,
    r: Vec<u8>,
    pk_seed: Vec<u8>,
    pk_root: Vec<u8>,
    message: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let w = if input.wide_w { 256 } else { 16 };
    let k = usize::from(input.k % 64);
    let Ok(params) = Params::new(
        false,
        usize::from(input.n),
        w,
        usize::from(input.d),
        usize::from(input.a),
        k,
        usize::from(input.h),
    ) else {
        return;
    };

    let family = if input.shake { HashFamily::Shake } else { HashFamily::Sha2 };
    let Ok(mut engine) = HashEngine::new(family, params) else {
        return;
    };

    let layout = params.digest_layout();
    let digest = engine.h_msg(&input.r, &input.pk_seed, &input.pk_root, &input.message);

    // Indices must fit their widths and the FORS message must have its exact size
    assert_eq!(digest.digest.len(), layout.fors_msg_bytes);
    assert!(layout.tree_bits >= 64 || digest.tree_index >> layout.tree_bits == 0);
    assert!(u64::from(digest.leaf_index) >> layout.leaf_bits == 0);

    // Raw output has exactly the requested length and a deterministic prefix
    let raw = engine.h_msg_bytes(
        &input.r,
        &input.pk_seed,
        &input.pk_root,
        &input.message,
        layout.total_bytes(),
    );
    assert_eq!(raw.len(), layout.total_bytes());
    assert_eq!(&raw[..layout.fors_msg_bytes], digest.digest.as_slice());
});
