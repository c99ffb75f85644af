use crate::{
    BLOCK_BYTES, IV_BYTES, KEY_BYTES, RabbitVariant, cipher_core::RabbitCore, error::Error,
    state::State,
};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Block-oriented Rabbit crypt engine over caller-provided buffers.
///
/// Each call to [`crypt`](Self::crypt) or [`crypt_in_place`](Self::crypt_in_place)
/// consumes whole keystream blocks: when the buffer length is not a multiple
/// of 16 the unused tail of the last block is discarded, and the next call
/// starts on a fresh block. Callers that split a stream into chunks must keep
/// chunk boundaries identical on both sides, or use chunk sizes that are a
/// multiple of 16.
///
/// Use [`Rabbit`](crate::Rabbit) for byte-continuous keystream instead.
#[derive(Clone)]
pub struct CryptEngine<V: RabbitVariant> {
    /// Cipher state that produces the keystream
    core: RabbitCore<V>,
    /// State right after the key schedule
    master: State,
    key: [u8; KEY_BYTES],
    key_len: usize,
    iv: [u8; IV_BYTES],
    iv_len: usize,
    /// Keystream blocks produced since the last (re)key
    blocks: u64,
}

impl<V: RabbitVariant> CryptEngine<V> {
    /// Runs the key schedule and the IV schedule.
    ///
    /// `key` must be 1 to 16 bytes and `iv` 1 to 8 bytes; shorter inputs are
    /// zero padded.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, Error> {
        check_key(key)?;
        check_iv(iv)?;
        let mut engine = Self::keyed(key);
        engine.schedule_iv(iv);
        Ok(engine)
    }

    /// Runs the key schedule only (RFC 4503 key-only mode).
    pub fn new_key_only(key: &[u8]) -> Result<Self, Error> {
        check_key(key)?;
        Ok(Self::keyed(key))
    }

    /// Re-keys the engine and rewinds it to the start of the new keystream.
    ///
    /// Both lengths are validated first; on error the engine is left untouched.
    pub fn set_key_and_iv(&mut self, key: &[u8], iv: &[u8]) -> Result<(), Error> {
        *self = Self::new(key, iv)?;
        Ok(())
    }

    /// Applies a new IV to the current key without repeating the key schedule.
    ///
    /// Equivalent to `set_key_and_iv(self.key(), iv)`.
    pub fn set_iv(&mut self, iv: &[u8]) -> Result<(), Error> {
        check_iv(iv)?;
        self.schedule_iv(iv);
        Ok(())
    }

    /// XORs keystream into `input` and writes the result to `output`.
    ///
    /// Fails with [`Error::BufferLengthMismatch`] before producing any
    /// keystream if the buffers differ in length.
    pub fn crypt(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        if input.len() != output.len() {
            return Err(Error::BufferLengthMismatch);
        }

        let mut ks = [0u8; BLOCK_BYTES];
        for (src, dst) in input.chunks(BLOCK_BYTES).zip(output.chunks_mut(BLOCK_BYTES)) {
            self.next_block(&mut ks);
            for ((d, s), k) in dst.iter_mut().zip(src).zip(&ks) {
                *d = s ^ k;
            }
        }
        ks.zeroize();
        Ok(())
    }

    /// XORs keystream into `buf` in place.
    pub fn crypt_in_place(&mut self, buf: &mut [u8]) {
        let mut ks = [0u8; BLOCK_BYTES];
        for chunk in buf.chunks_mut(BLOCK_BYTES) {
            self.next_block(&mut ks);
            chunk.iter_mut().zip(&ks).for_each(|(b, k)| *b ^= k);
        }
        ks.zeroize();
    }

    /// Overwrites `out` with raw keystream.
    pub fn keystream(&mut self, out: &mut [u8]) {
        out.fill(0);
        self.crypt_in_place(out);
    }

    /// Key bytes as supplied.
    pub fn key(&self) -> &[u8] {
        &self.key[..self.key_len]
    }

    /// IV bytes as supplied; empty in key-only mode.
    pub fn iv(&self) -> &[u8] {
        &self.iv[..self.iv_len]
    }

    /// Keystream blocks produced since the engine was last keyed.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    /// Whether any keystream has been produced since the engine was last keyed.
    pub fn is_streaming(&self) -> bool {
        self.blocks != 0
    }

    fn keyed(key: &[u8]) -> Self {
        let mut padded = [0u8; KEY_BYTES];
        padded[..key.len()].copy_from_slice(key);
        let master = State::from_key(&padded, V::ORDER);

        Self {
            core: RabbitCore::from_state(master.clone()),
            master,
            key: padded,
            key_len: key.len(),
            iv: [0; IV_BYTES],
            iv_len: 0,
            blocks: 0,
        }
    }

    fn schedule_iv(&mut self, iv: &[u8]) {
        self.iv = [0; IV_BYTES];
        self.iv[..iv.len()].copy_from_slice(iv);
        self.iv_len = iv.len();

        self.core.state.clone_from(&self.master);
        self.core.apply_iv(&self.iv);
        self.blocks = 0;
    }

    #[inline(always)]
    fn next_block(&mut self, ks: &mut [u8; BLOCK_BYTES]) {
        self.core.next_block(ks);
        self.blocks = self.blocks.wrapping_add(1);
    }
}

fn check_key(key: &[u8]) -> Result<(), Error> {
    if key.is_empty() || key.len() > KEY_BYTES {
        return Err(Error::InvalidKeyLength);
    }
    Ok(())
}

fn check_iv(iv: &[u8]) -> Result<(), Error> {
    if iv.is_empty() || iv.len() > IV_BYTES {
        return Err(Error::InvalidIvLength);
    }
    Ok(())
}

impl<V: RabbitVariant> fmt::Debug for CryptEngine<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptEngine")
            .field("algorithm", &V::NAME)
            .field("key_len", &self.key_len)
            .field("iv_len", &self.iv_len)
            .field("blocks", &self.blocks)
            .finish_non_exhaustive()
    }
}

impl<V: RabbitVariant> Drop for CryptEngine<V> {
    fn drop(&mut self) {
        self.key.zeroize();
        self.iv.zeroize();
    }
}

impl<V: RabbitVariant> ZeroizeOnDrop for CryptEngine<V> {}
