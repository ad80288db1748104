//! Known-answer tests for every operation, both hash families, all six
//! parameter shapes, simple and robust.
//!
//! Vectors live in `tests/data/thash_kat.json`, one test group per engine
//! name (e.g. `sha2-192f-robust`).

#![cfg(all(feature = "sha2", feature = "shake"))]

use serde::Deserialize;
use sphincs_thash::{Address, EngineConfig, HashEngine, TweakableHash};
use std::fs;

/// Fixture file structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KatFile {
    test_groups: Vec<KatGroup>,
}

/// One engine configuration
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KatGroup {
    tg_id: u32,
    engine: String,
    tests: Vec<KatCase>,
}

/// Inputs and expected outputs for one test case
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct KatCase {
    tc_id: u32,
    pk_seed: String,
    sk_seed: String,
    adrs: String,
    m1: String,
    m2: String,
    tl: String,
    f: String,
    h: String,
    t_l: String,
    prf: String,
    sk_prf: String,
    opt_rand: String,
    message: String,
    prf_msg: String,
    pk_root: String,
    h_msg: String,
    fors_msg: String,
    tree_index: u64,
    leaf_index: u32,
}

fn hex_decode(s: &str) -> Vec<u8> {
    hex::decode(s).expect("Invalid hex string")
}

fn load_kat_file() -> KatFile {
    let content = fs::read_to_string("tests/data/thash_kat.json").expect("Failed to read KAT file");
    serde_json::from_str(&content).expect("Failed to parse KAT JSON")
}

fn group(name: &str) -> KatGroup {
    load_kat_file()
        .test_groups
        .into_iter()
        .find(|g| g.engine == name)
        .unwrap_or_else(|| panic!("{name} test group not found"))
}

fn engine(name: &str) -> HashEngine {
    name.parse::<EngineConfig>()
        .expect("Invalid engine name")
        .build()
        .expect("Engine construction failed")
}

fn address(s: &str) -> Address {
    let bytes: [u8; 32] = hex_decode(s).try_into().expect("Invalid address length");
    Address::from_bytes(bytes)
}

/// Run every test case of `name` against a fresh engine.
fn run_group(name: &str) {
    let group = group(name);
    let mut eng = engine(name);
    assert!(!group.tests.is_empty(), "tgId={}: empty group", group.tg_id);

    for tc in &group.tests {
        let pk_seed = hex_decode(&tc.pk_seed);
        let adrs = address(&tc.adrs);
        let m1 = hex_decode(&tc.m1);
        let m2 = hex_decode(&tc.m2);

        assert_eq!(
            hex::encode(eng.f(&pk_seed, &adrs, &m1)),
            tc.f,
            "{name} tcId={}: F mismatch",
            tc.tc_id
        );
        assert_eq!(
            hex::encode(eng.h(&pk_seed, &adrs, &m1, &m2)),
            tc.h,
            "{name} tcId={}: H mismatch",
            tc.tc_id
        );
        assert_eq!(
            hex::encode(eng.t_l(&pk_seed, &adrs, &hex_decode(&tc.tl))),
            tc.t_l,
            "{name} tcId={}: T_l mismatch",
            tc.tc_id
        );
        assert_eq!(
            hex::encode(eng.prf(&pk_seed, &hex_decode(&tc.sk_seed), &adrs).as_slice()),
            tc.prf,
            "{name} tcId={}: PRF mismatch",
            tc.tc_id
        );

        let r = eng.prf_msg(
            &hex_decode(&tc.sk_prf),
            &hex_decode(&tc.opt_rand),
            &hex_decode(&tc.message),
        );
        assert_eq!(
            hex::encode(r.as_slice()),
            tc.prf_msg,
            "{name} tcId={}: PRF_msg mismatch",
            tc.tc_id
        );

        let pk_root = hex_decode(&tc.pk_root);
        let message = hex_decode(&tc.message);
        let expected_raw = hex_decode(&tc.h_msg);
        let raw = eng.h_msg_bytes(&r, &pk_seed, &pk_root, &message, expected_raw.len());
        assert_eq!(raw, expected_raw, "{name} tcId={}: H_msg bytes mismatch", tc.tc_id);

        let digest = eng.h_msg(&r, &pk_seed, &pk_root, &message);
        assert_eq!(
            hex::encode(&digest.digest),
            tc.fors_msg,
            "{name} tcId={}: FORS message mismatch",
            tc.tc_id
        );
        assert_eq!(digest.tree_index, tc.tree_index, "{name} tcId={}: tree index", tc.tc_id);
        assert_eq!(digest.leaf_index, tc.leaf_index, "{name} tcId={}: leaf index", tc.tc_id);
    }
}

#[test]
fn test_fixture_covers_every_engine_name() {
    let file = load_kat_file();
    let names: Vec<&str> = file.test_groups.iter().map(|g| g.engine.as_str()).collect();
    for family in ["sha2", "shake"] {
        for set in ["128s", "128f", "192s", "192f", "256s", "256f"] {
            for mode in ["simple", "robust"] {
                let name = format!("{family}-{set}-{mode}");
                assert!(names.contains(&name.as_str()), "{name} missing from fixture");
            }
        }
    }
}

#[test]
fn test_engine_reuse_across_seeds() {
    // Same engine, two different public seeds back to back, then the first again
    let group = group("sha2-256s-robust");
    let mut eng = engine("sha2-256s-robust");
    let cases: Vec<_> = group.tests.iter().chain(group.tests.iter()).collect();
    for tc in cases {
        let out = eng.f(&hex_decode(&tc.pk_seed), &address(&tc.adrs), &hex_decode(&tc.m1));
        assert_eq!(hex::encode(out), tc.f, "tcId={}", tc.tc_id);
    }
}

// ============================================================================
// SHA-2
// ============================================================================

mod sha2 {
    use super::run_group;

    #[test]
    fn test_kat_sha2_128s_simple() {
        run_group("sha2-128s-simple");
    }

    #[test]
    fn test_kat_sha2_128s_robust() {
        run_group("sha2-128s-robust");
    }

    #[test]
    fn test_kat_sha2_128f_simple() {
        run_group("sha2-128f-simple");
    }

    #[test]
    fn test_kat_sha2_128f_robust() {
        run_group("sha2-128f-robust");
    }

    #[test]
    fn test_kat_sha2_192s_simple() {
        run_group("sha2-192s-simple");
    }

    #[test]
    fn test_kat_sha2_192s_robust() {
        run_group("sha2-192s-robust");
    }

    #[test]
    fn test_kat_sha2_192f_simple() {
        run_group("sha2-192f-simple");
    }

    #[test]
    fn test_kat_sha2_192f_robust() {
        run_group("sha2-192f-robust");
    }

    #[test]
    fn test_kat_sha2_256s_simple() {
        run_group("sha2-256s-simple");
    }

    #[test]
    fn test_kat_sha2_256s_robust() {
        run_group("sha2-256s-robust");
    }

    #[test]
    fn test_kat_sha2_256f_simple() {
        run_group("sha2-256f-simple");
    }

    #[test]
    fn test_kat_sha2_256f_robust() {
        run_group("sha2-256f-robust");
    }
}

// ============================================================================
// SHAKE
// ============================================================================

mod shake {
    use super::run_group;

    #[test]
    fn test_kat_shake_128s_simple() {
        run_group("shake-128s-simple");
    }

    #[test]
    fn test_kat_shake_128s_robust() {
        run_group("shake-128s-robust");
    }

    #[test]
    fn test_kat_shake_128f_simple() {
        run_group("shake-128f-simple");
    }

    #[test]
    fn test_kat_shake_128f_robust() {
        run_group("shake-128f-robust");
    }

    #[test]
    fn test_kat_shake_192s_simple() {
        run_group("shake-192s-simple");
    }

    #[test]
    fn test_kat_shake_192s_robust() {
        run_group("shake-192s-robust");
    }

    #[test]
    fn test_kat_shake_192f_simple() {
        run_group("shake-192f-simple");
    }

    #[test]
    fn test_kat_shake_192f_robust() {
        run_group("shake-192f-robust");
    }

    #[test]
    fn test_kat_shake_256s_simple() {
        run_group("shake-256s-simple");
    }

    #[test]
    fn test_kat_shake_256s_robust() {
        run_group("shake-256s-robust");
    }

    #[test]
    fn test_kat_shake_256f_simple() {
        run_group("shake-256f-simple");
    }

    #[test]
    fn test_kat_shake_256f_robust() {
        run_group("shake-256f-robust");
    }
}
