use crate::{BLOCK_BYTES, RabbitVariant, backends, state::State};
use cipher::{
    AlgorithmName, BlockSizeUser, Iv, IvSizeUser, Key, KeyIvInit, KeySizeUser, StreamCipherCore,
    StreamClosure,
    consts::{U8, U16},
};
use core::{fmt, marker::PhantomData};
use zeroize::ZeroizeOnDrop;

/// The core state for the Rabbit cipher.
#[derive(Clone)]
pub struct RabbitCore<V: RabbitVariant> {
    /// State words, counter system and carry
    pub(crate) state: State,
    /// PhantomData to tie the struct to the RabbitVariant
    pub(crate) _variant: PhantomData<V>,
}

impl<V: RabbitVariant> RabbitCore<V> {
    /// Runs only the key schedule, without an IV.
    ///
    /// This is the key-only mode of RFC 4503. Applying an IV afterwards is
    /// what [`KeyIvInit::new`] does.
    pub fn new_key_only(key: &Key<Self>) -> Self {
        Self::from_state(State::from_key(key, V::ORDER))
    }

    pub(crate) fn from_state(state: State) -> Self {
        Self {
            state,
            _variant: PhantomData,
        }
    }

    pub(crate) fn apply_iv(&mut self, iv: &[u8]) {
        self.state.apply_iv(iv, V::ORDER);
    }

    /// Advances the state once and writes the resulting keystream block.
    #[inline(always)]
    pub(crate) fn next_block(&mut self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), BLOCK_BYTES);
        self.state.next_state(V::ORDER);
        self.state.extract(out);
    }
}

impl<V: RabbitVariant> KeySizeUser for RabbitCore<V> {
    type KeySize = U16;
}

impl<V: RabbitVariant> IvSizeUser for RabbitCore<V> {
    type IvSize = U8;
}

impl<V: RabbitVariant> BlockSizeUser for RabbitCore<V> {
    type BlockSize = U16; // 128-bit blocks
}

impl<V: RabbitVariant> KeyIvInit for RabbitCore<V> {
    fn new(key: &Key<Self>, iv: &Iv<Self>) -> Self {
        let mut core = Self::new_key_only(key);
        core.apply_iv(iv);
        core
    }
}

impl<V: RabbitVariant> StreamCipherCore for RabbitCore<V> {
    fn remaining_blocks(&self) -> Option<usize> {
        None
    }

    fn process_with_backend(&mut self, f: impl StreamClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backends::soft::Backend(self));
    }
}

impl<V: RabbitVariant> AlgorithmName for RabbitCore<V> {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::NAME)
    }
}

impl<V: RabbitVariant> fmt::Debug for RabbitCore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(V::NAME)?;
        f.write_str("Core { ... }")
    }
}

// `State` zeroizes itself on drop.
impl<V: RabbitVariant> ZeroizeOnDrop for RabbitCore<V> {}
