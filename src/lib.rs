//! RABBIT-128 Stream Cipher Reference Implementation
//!
//! Rabbit is a synchronous stream cipher from the eSTREAM software portfolio
//! (RFC 4503). It keeps a 513-bit internal state: eight 32-bit state words,
//! eight 32-bit counter words and a counter carry bit.
//!
//! Two front ends are provided:
//!
//! * [`Rabbit`] is compatible with the `cipher` crate traits. It takes a
//!   fixed 128-bit key and 64-bit IV and behaves like any other RustCrypto
//!   stream cipher: leftover keystream from a partial block is kept for the
//!   next call.
//! * [`RabbitContext`] is the block-oriented crypt engine. It accepts keys of
//!   1 to 16 bytes and IVs of 1 to 8 bytes, and a partial block at the end of
//!   a call consumes a whole keystream block.
//!
//! ```
//! use rabbit128::RabbitContext;
//!
//! let key = [0x2bu8; 16];
//! let iv = [0x17u8; 8];
//! let plaintext = *b"attack at dawn";
//!
//! let mut ciphertext = [0u8; 14];
//! let mut enc = RabbitContext::new(&key, &iv).unwrap();
//! enc.crypt(&plaintext, &mut ciphertext).unwrap();
//!
//! let mut dec = RabbitContext::new(&key, &iv).unwrap();
//! dec.crypt_in_place(&mut ciphertext);
//! assert_eq!(ciphertext, plaintext);
//! ```

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(test)]
extern crate std;

pub use cipher; // Re-export cipher crate for downstream users

// --- Transition Ordering Abstraction ---

/// Order of the two halves of a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOrder {
    /// Counter system is advanced first and the G-function mixes the new
    /// counter. This is the published algorithm.
    CounterFirst,
    /// G-function mixes the old counter and the counter system is advanced
    /// afterwards. Produces a different, non-standard keystream.
    MixFirst,
}

/// A trait to define the transition ordering of a Rabbit variant.
pub trait RabbitVariant: Clone {
    /// Transition ordering used by the key schedule, IV schedule and keystream.
    const ORDER: StepOrder;
    /// Algorithm name reported through [`cipher::AlgorithmName`].
    const NAME: &'static str;
}

/// Rabbit as published in the eSTREAM portfolio and RFC 4503.
#[derive(Clone, Debug)]
pub struct Canonical;
impl RabbitVariant for Canonical {
    const ORDER: StepOrder = StepOrder::CounterFirst;
    const NAME: &'static str = "Rabbit-128";
}

/// Mix-before-counter ordering, kept for compatibility with data produced
/// by implementations that got the transition order wrong.
#[derive(Clone, Debug)]
pub struct Legacy;
impl RabbitVariant for Legacy {
    const ORDER: StepOrder = StepOrder::MixFirst;
    const NAME: &'static str = "Rabbit-128 (legacy ordering)";
}

// --- Core Cipher Logic ---

mod cipher_core;
pub mod codec;
mod engine;
mod error;
pub(crate) mod state;

// --- Software Backend ---
pub(crate) mod backends;

pub use crate::cipher_core::RabbitCore;
pub use crate::engine::CryptEngine;
pub use crate::error::Error;

// --- Constants ---
const KEY_BYTES: usize = 16;
const IV_BYTES: usize = 8;
const BLOCK_BYTES: usize = 16;
const SCHEDULE_ROUNDS: usize = 4;

// --- Convenience Type Aliases for Users ---

/// Rabbit wrapped for the `cipher` crate's [`cipher::StreamCipher`] API.
pub type Rabbit = cipher::StreamCipherCoreWrapper<RabbitCore<Canonical>>;
/// [`Rabbit`] with the legacy mix-before-counter transition.
pub type LegacyRabbit = cipher::StreamCipherCoreWrapper<RabbitCore<Legacy>>;
/// Block-oriented crypt engine with the published transition.
pub type RabbitContext = CryptEngine<Canonical>;
/// [`RabbitContext`] with the legacy mix-before-counter transition.
pub type LegacyRabbitContext = CryptEngine<Legacy>;
