//! Known-answer tests against the published eSTREAM Rabbit vectors.
//!
//! Bytes are in keystream order, as produced by the eSTREAM reference code.
//! RFC 4503 prints the same blocks with each 16-byte block reversed.

use rabbit128::cipher::{KeyIvInit, StreamCipher};
use rabbit128::{Canonical, LegacyRabbitContext, Rabbit, RabbitContext, RabbitCore};

const ZERO_KEY: [u8; 16] = [0; 16];

/// Zero key, IV `27 17 F4 D2 1A 56 EB A6`.
const IV_A: [u8; 8] = [0x27, 0x17, 0xF4, 0xD2, 0x1A, 0x56, 0xEB, 0xA6];
const STREAM_A: [u8; 48] = [
    0x4d, 0x10, 0x51, 0xa1, 0x23, 0xaf, 0xb6, 0x70, 0xbf, 0x8d, 0x85, 0x05, 0xc8, 0xd8, 0x5a, 0x44,
    0x03, 0x5b, 0xc3, 0xac, 0xc6, 0x67, 0xae, 0xae, 0x5b, 0x2c, 0xf4, 0x47, 0x79, 0xf2, 0xc8, 0x96,
    0xcb, 0x51, 0x15, 0xf0, 0x34, 0xf0, 0x3d, 0x31, 0x17, 0x1c, 0xa7, 0x5f, 0x89, 0xfc, 0xcb, 0x9f,
];

/// Zero key, zero IV.
const STREAM_ZERO_IV: [u8; 48] = [
    0xed, 0xb7, 0x05, 0x67, 0x37, 0x5d, 0xcd, 0x7c, 0xd8, 0x95, 0x54, 0xf8, 0x5e, 0x27, 0xa7, 0xc6,
    0x8d, 0x4a, 0xdc, 0x70, 0x32, 0x29, 0x8f, 0x7b, 0xd4, 0xef, 0xf5, 0x04, 0xac, 0xa6, 0x29, 0x5f,
    0x66, 0x8f, 0xbf, 0x47, 0x8a, 0xdb, 0x2b, 0xe5, 0x1e, 0x6c, 0xde, 0x29, 0x2b, 0x82, 0xde, 0x2a,
];

/// Zero key, IV `59 7E 26 C1 75 F5 73 C3`.
const IV_B: [u8; 8] = [0x59, 0x7E, 0x26, 0xC1, 0x75, 0xF5, 0x73, 0xC3];
const STREAM_B: [u8; 48] = [
    0x6d, 0x7d, 0x01, 0x22, 0x92, 0xcc, 0xdc, 0xe0, 0xe2, 0x12, 0x00, 0x58, 0xb9, 0x4e, 0xcd, 0x1f,
    0x2e, 0x6f, 0x93, 0xed, 0xff, 0x99, 0x24, 0x7b, 0x01, 0x25, 0x21, 0xd1, 0x10, 0x4e, 0x5f, 0xa7,
    0xa7, 0x9b, 0x02, 0x12, 0xd0, 0xbd, 0x56, 0x23, 0x39, 0x38, 0xe7, 0x93, 0xc3, 0x12, 0xc1, 0xeb,
];

/// Zero key, key setup only.
const STREAM_KEY_ONLY: [u8; 48] = [
    0x02, 0xf7, 0x4a, 0x1c, 0x26, 0x45, 0x6b, 0xf5, 0xec, 0xd6, 0xa5, 0x36, 0xf0, 0x54, 0x57, 0xb1,
    0xa7, 0x8a, 0xc6, 0x89, 0x47, 0x6c, 0x69, 0x7b, 0x39, 0x0c, 0x9c, 0xc5, 0x15, 0xd8, 0xe8, 0x88,
    0x96, 0xd6, 0x73, 0x16, 0x88, 0xd1, 0x68, 0xda, 0x51, 0xd4, 0x0c, 0x70, 0xc3, 0xa1, 0x16, 0xf4,
];

/// Zero key, IV `27 17 F4 D2 1A 56 EB A6`, mix-before-counter transition.
///
/// Frozen regression value. No published reference exists for this ordering;
/// the bytes pin the current output of the legacy transition.
const LEGACY_STREAM_A: [u8; 32] = [
    0xa2, 0x7b, 0xd3, 0x1d, 0x11, 0xb7, 0x0f, 0x07, 0x34, 0x5f, 0xb4, 0x28, 0xa2, 0xe8, 0x21, 0xf0,
    0xaf, 0xe3, 0x9e, 0x0d, 0x35, 0xb1, 0x74, 0x17, 0x64, 0x9a, 0xb2, 0x22, 0x79, 0x2a, 0x90, 0xde,
];

/// Key `01 02 03 04 05`, IV `09 08 07`, zero padded by the context.
const STREAM_SHORT: [u8; 32] = [
    0x50, 0xa1, 0x9f, 0x55, 0x62, 0x82, 0x82, 0x2e, 0x7b, 0x99, 0x7a, 0x50, 0x57, 0x2a, 0x87, 0x1c,
    0x23, 0x7a, 0x13, 0xbe, 0xf8, 0x18, 0xc1, 0xfd, 0xf6, 0xd2, 0xef, 0xf5, 0xb1, 0xaf, 0xb2, 0x86,
];

fn context_keystream(key: &[u8], iv: &[u8], len: usize) -> Vec<u8> {
    let mut ctx = RabbitContext::new(key, iv).unwrap();
    let mut out = vec![0u8; len];
    ctx.keystream(&mut out);
    out
}

#[test]
fn estream_vector_iv_a() {
    assert_eq!(context_keystream(&ZERO_KEY, &IV_A, 48), STREAM_A);
}

#[test]
fn estream_vector_zero_iv() {
    assert_eq!(context_keystream(&ZERO_KEY, &[0; 8], 48), STREAM_ZERO_IV);
}

#[test]
fn estream_vector_iv_b() {
    assert_eq!(context_keystream(&ZERO_KEY, &IV_B, 48), STREAM_B);
}

#[test]
fn estream_vector_key_only() {
    let mut ctx = RabbitContext::new_key_only(&ZERO_KEY).unwrap();
    let mut out = [0u8; 48];
    ctx.keystream(&mut out);
    assert_eq!(out, STREAM_KEY_ONLY);
    assert!(ctx.iv().is_empty());
}

#[test]
fn stream_cipher_wrapper_vector() {
    let mut cipher = Rabbit::new(&ZERO_KEY.into(), &IV_A.into());
    let mut out = [0u8; 48];
    // Odd split sizes exercise the wrapper's buffered partial blocks.
    let (head, tail) = out.split_at_mut(7);
    cipher.apply_keystream(head);
    cipher.apply_keystream(tail);
    assert_eq!(out, STREAM_A);
}

#[test]
fn key_only_core_vector() {
    let core = RabbitCore::<Canonical>::new_key_only(&ZERO_KEY.into());
    let mut cipher = rabbit128::cipher::StreamCipherCoreWrapper::from_core(core);
    let mut out = [0u8; 48];
    cipher.apply_keystream(&mut out);
    assert_eq!(out, STREAM_KEY_ONLY);
}

#[test]
fn legacy_ordering_vector() {
    let mut ctx = LegacyRabbitContext::new(&ZERO_KEY, &IV_A).unwrap();
    let mut out = [0u8; 32];
    ctx.keystream(&mut out);
    assert_eq!(out, LEGACY_STREAM_A);
    assert_ne!(out[..], STREAM_A[..32]);
}

#[test]
fn short_key_and_iv_vector() {
    assert_eq!(context_keystream(&[1, 2, 3, 4, 5], &[9, 8, 7], 32), STREAM_SHORT);
}
