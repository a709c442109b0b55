use frfold_corelib::crypto::{Blake3, Digest32, Keccak256, Sha256};
use frfold_corelib::field::reference::{
    mask_digest, modulus, reduce_be_bytes, reduce_digest_reference,
};
use frfold_corelib::gadgets::clamp::clamp_digest;
use frfold_corelib::{
    hash_then_reduce, hash_then_reduce_by_id, public_inputs_to_scalar, reduce_digest,
    reduce_unmasked, Circuit, CircuitError, Gate, DUMMY_DIGEST,
};
use num_bigint::BigUint;

/// Deterministic pseudo-random digests.
fn sample_digests(n: u32) -> Vec<[u8; 32]> {
    (0..n).map(|i| Blake3::digest(&i.to_le_bytes())).collect()
}

fn bytes_of(v: &BigUint) -> [u8; 32] {
    let raw = v.to_bytes_be();
    let mut out = [0u8; 32];
    out[32 - raw.len()..].copy_from_slice(&raw);
    out
}

#[test]
fn masked_values_reduce_to_themselves() {
    let r = modulus();
    for d in sample_digests(64) {
        let masked = mask_digest(d);
        let v = BigUint::from_bytes_be(&masked);
        assert!(v.bits() <= 253);

        let mut cs = Circuit::new();
        let x = reduce_digest(&mut cs, &bytes_of(&v)).unwrap();
        assert_eq!(*x.value(), &v % &r);
        assert!(*x.value() < r);
    }
}

#[test]
fn matches_reference_on_raw_digests() {
    for d in sample_digests(64) {
        let mut cs = Circuit::new();
        let x = reduce_digest(&mut cs, &d).unwrap();
        assert_eq!(*x.value(), reduce_digest_reference(d));
    }
}

#[test]
fn edge_values() {
    let r = modulus();
    let top = (BigUint::from(1u8) << 253u32) - 1u32;
    for v in [BigUint::from(0u8), BigUint::from(1u8), top] {
        let x = reduce_digest(&mut Circuit::new(), &bytes_of(&v)).unwrap();
        assert_eq!(*x.value(), &v % &r);
    }
}

#[test]
fn deterministic() {
    let d = Sha256::digest(b"determinism");
    let a = reduce_digest(&mut Circuit::new(), &d).unwrap();
    let b = reduce_digest(&mut Circuit::new(), &d).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_bytes_be(), b.to_bytes_be());
}

#[test]
fn clamp_is_idempotent() {
    for d in sample_digests(16) {
        let mut cs = Circuit::new();
        let bytes = cs.alloc_bytes(&d).unwrap();
        let once = clamp_digest(&mut cs, &bytes).unwrap();
        let twice = clamp_digest(&mut cs, &once).unwrap();
        assert_eq!(once, twice);
        let native: Vec<u8> = once.iter().map(|b| b.value()).collect();
        assert_eq!(native, mask_digest(d).to_vec());
    }
}

#[test]
fn unmasked_path_applies_corrections() {
    let r = modulus();
    let x0 = BigUint::parse_bytes(b"1234567890123456789012345678901234567890", 10).unwrap();
    for (b254, b255) in [(false, false), (true, false), (false, true), (true, true)] {
        let mut v = x0.clone();
        if b254 {
            v += BigUint::from(1u8) << 254u32;
        }
        if b255 {
            v += BigUint::from(1u8) << 255u32;
        }
        let bytes = bytes_of(&v);
        let x = reduce_unmasked(&mut Circuit::new(), &bytes).unwrap();
        assert_eq!(*x.value(), &v % &r, "flags ({b254}, {b255})");
        assert_eq!(*x.value(), reduce_be_bytes(&bytes));
    }
}

#[test]
fn unmasked_path_covers_all_256_bit_inputs() {
    for d in sample_digests(64).into_iter().chain([[0xff; 32], [0u8; 32]]) {
        let x = reduce_unmasked(&mut Circuit::new(), &d).unwrap();
        assert_eq!(*x.value(), reduce_be_bytes(&d));
        assert!(*x.value() < modulus());
    }
}

#[test]
fn dummy_digest_scenario() {
    let x = reduce_digest(&mut Circuit::new(), &DUMMY_DIGEST).unwrap();
    let expected = BigUint::parse_bytes(
        b"13876367796315668335904168994681455606263912703330366226354308204443692171264",
        10,
    )
    .unwrap();
    assert_eq!(*x.value(), expected);
    // independent check: top byte 0xde & 0x1f = 0x1e
    let mut clamped = DUMMY_DIGEST;
    clamped[0] = 0x1e;
    assert_eq!(expected, BigUint::from_bytes_be(&clamped));
    assert_eq!(expected, reduce_digest_reference(DUMMY_DIGEST));
}

#[test]
fn oversize_and_undersize_inputs_fail_fast() {
    for len in [0usize, 31, 33, 64] {
        let mut cs = Circuit::new();
        let err = reduce_digest(&mut cs, &vec![0u8; len]).unwrap_err();
        assert_eq!(
            err,
            CircuitError::MalformedInput {
                expected: 32,
                actual: len
            }
        );
        assert_eq!(cs.gate_count(), 0);
    }
}

#[test]
fn shape_is_data_independent() {
    let mut reference = Circuit::new();
    reduce_digest(&mut reference, &[0u8; 32]).unwrap();
    for d in sample_digests(8).into_iter().chain([[0xff; 32], DUMMY_DIGEST]) {
        let mut cs = Circuit::new();
        reduce_digest(&mut cs, &d).unwrap();
        assert_eq!(cs.gates(), reference.gates());
        assert_eq!(cs.shape_digest(), reference.shape_digest());
    }
    // two corrections are always present
    assert_eq!(reference.count_of("select"), 2);
    assert_eq!(reference.count_of("and"), 32);
    assert_eq!(reference.count_of("assert-canonical"), 1);

    let mut unmasked = Circuit::new();
    reduce_unmasked(&mut unmasked, &[0u8; 32]).unwrap();
    assert_ne!(unmasked.shape_digest(), reference.shape_digest());
}

#[test]
fn sha256_vectors_pinned() {
    let empty = public_inputs_to_scalar(&mut Circuit::new(), b"").unwrap();
    assert_eq!(
        empty.to_string(),
        "1669258166902426033910600439979403418188664065762541458854010994191676651605"
    );
    let abc = hash_then_reduce::<Sha256>(&mut Circuit::new(), b"abc").unwrap();
    assert_eq!(
        abc.to_string(),
        "11972312713768178226791969297712321251811143278991161852801995824771111065005"
    );
}

#[test]
fn message_shape_depends_on_length_only() {
    let mut a = Circuit::new();
    hash_then_reduce::<Sha256>(&mut a, b"hello world").unwrap();
    let mut b = Circuit::new();
    hash_then_reduce::<Sha256>(&mut b, b"HELLO WORLD").unwrap();
    assert_eq!(a.shape_digest(), b.shape_digest());

    let mut c = Circuit::new();
    hash_then_reduce::<Sha256>(&mut c, b"hello").unwrap();
    assert_ne!(a.shape_digest(), c.shape_digest());
}

#[test]
fn registry_ids_match_generic_entry_point() {
    let msg = b"registry";
    let by_id = hash_then_reduce_by_id(&mut Circuit::new(), "keccak256", msg).unwrap();
    let generic = hash_then_reduce::<Keccak256>(&mut Circuit::new(), msg).unwrap();
    assert_eq!(by_id, generic);

    let sha = hash_then_reduce_by_id(&mut Circuit::new(), "SHA256", msg).unwrap();
    assert_eq!(sha, public_inputs_to_scalar(&mut Circuit::new(), msg).unwrap());
}

#[test]
fn registry_and_generic_paths_emit_one_hash_gate() {
    let msg = [0x5au8; 17];
    let mut by_id = Circuit::new();
    hash_then_reduce_by_id(&mut by_id, "blake3", &msg).unwrap();
    let mut generic = Circuit::new();
    hash_then_reduce::<Blake3>(&mut generic, &msg).unwrap();
    assert_eq!(by_id.gates(), generic.gates());
    assert_eq!(by_id.count_of("hash"), 1);
    assert_eq!(by_id.gates()[0], Gate::Hash { input_len: 17 });

    let mut unknown = Circuit::new();
    let err = hash_then_reduce_by_id(&mut unknown, "md5", &msg).unwrap_err();
    assert_eq!(err, CircuitError::UnknownHash("md5".into()));
    assert_eq!(unknown.gate_count(), 0);
}
