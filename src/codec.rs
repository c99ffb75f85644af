//! Little-endian conversion between bytes and 32-bit words.
//!
//! Everything is spelled out with shifts so the result never depends on the
//! host byte order or on the alignment of the input buffer.

/// Decodes 4 bytes, least significant first.
#[inline(always)]
pub fn load_le(bytes: [u8; 4]) -> u32 {
    u32::from(bytes[0])
        | u32::from(bytes[1]) << 8
        | u32::from(bytes[2]) << 16
        | u32::from(bytes[3]) << 24
}

/// Encodes a word as 4 bytes, least significant first.
#[inline(always)]
pub fn store_le(word: u32) -> [u8; 4] {
    [
        word as u8,
        (word >> 8) as u8,
        (word >> 16) as u8,
        (word >> 24) as u8,
    ]
}

/// Decodes consecutive 4-byte groups of `bytes` into `W` words.
/// Missing trailing bytes read as zero.
pub(crate) fn load_words<const W: usize>(bytes: &[u8]) -> [u32; W] {
    let mut padded = [[0u8; 4]; W];
    for (i, b) in bytes.iter().take(4 * W).enumerate() {
        padded[i / 4][i % 4] = *b;
    }
    padded.map(load_le)
}

/// Encodes `words` into `out`, 4 bytes per word, stopping at whichever ends first.
pub(crate) fn store_words(words: &[u32], out: &mut [u8]) {
    for (chunk, word) in out.chunks_mut(4).zip(words) {
        let bytes = store_le(*word);
        chunk.copy_from_slice(&bytes[..chunk.len()]);
    }
}
