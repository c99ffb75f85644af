use crate::{RabbitVariant, cipher_core::RabbitCore};
use cipher::{
    Block, BlockSizeUser, ParBlocksSizeUser, StreamBackend,
    consts::{U1, U16},
};

/// The software backend for Rabbit.
pub(crate) struct Backend<'a, V: RabbitVariant>(pub(crate) &'a mut RabbitCore<V>);

impl<V: RabbitVariant> BlockSizeUser for Backend<'_, V> {
    type BlockSize = U16;
}

// Every block depends on the one before it, so blocks are produced one at a time.
impl<V: RabbitVariant> ParBlocksSizeUser for Backend<'_, V> {
    type ParBlocksSize = U1;
}

impl<V: RabbitVariant> StreamBackend for Backend<'_, V> {
    #[inline(always)]
    fn gen_ks_block(&mut self, block: &mut Block<Self>) {
        self.0.next_block(block);
    }
}
