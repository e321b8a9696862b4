// Run with: cargo test --test test_digest010 --features traits010

use chat_sha256::{Hash, WrappedHash};
use digest010::Digest;

#[test]
fn test_digest_trait() {
    let mut hasher = Hash::new();
    Digest::update(&mut hasher, b"hello world");
    let result = hasher.finalize();

    let expected = Hash::hash(b"hello world");
    assert_eq!(&result[..], &expected[..]);
}

#[test]
fn test_digest_chain() {
    let result = Digest::chain_update(Hash::new(), b"hello ")
        .chain_update(b"world")
        .finalize();

    let expected = Hash::hash(b"hello world");
    assert_eq!(&result[..], &expected[..]);
}

#[test]
fn test_digest_one_shot() {
    let result = <Hash as Digest>::digest(b"hello world");
    let expected = Hash::hash(b"hello world");
    assert_eq!(&result[..], &expected[..]);
}

#[test]
fn test_finalize_reset() {
    let mut hasher = Hash::new();
    Digest::update(&mut hasher, b"hello world");
    let result1 = Digest::finalize_reset(&mut hasher);

    Digest::update(&mut hasher, b"goodbye world");
    let result2 = hasher.finalize();

    assert_eq!(&result1[..], &Hash::hash(b"hello world")[..]);
    assert_eq!(&result2[..], &Hash::hash(b"goodbye world")[..]);
}

#[test]
fn test_wrapped_core() {
    let mut hasher = WrappedHash::default();
    Digest::update(&mut hasher, [0x61u8; 200]);
    let result = hasher.finalize();
    assert_eq!(&result[..], &Hash::hash(&[0x61u8; 200])[..]);
}
