use crate::{SCHEDULE_ROUNDS, StepOrder, codec};
use zeroize::{Zeroize, ZeroizeOnDrop};

const A0: u32 = 0x4D34_D34D;
const A1: u32 = 0xD34D_34D3;
const A2: u32 = 0x34D3_4D34;

/// Counter increments, period 3 over the eight limbs.
const A: [u32; 8] = [A0, A1, A2, A0, A1, A2, A0, A1];

/// The 513-bit internal state.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub(crate) struct State {
    /// State variables
    pub(crate) x: [u32; 8],
    /// Counter system, least significant limb first
    pub(crate) c: [u32; 8],
    /// Carry out of `c[7]`, always 0 or 1
    pub(crate) carry: u32,
}

impl State {
    /// Key schedule: expands the key into a fresh state and iterates it.
    /// Keys shorter than 16 bytes are zero padded.
    pub(crate) fn from_key(key: &[u8], order: StepOrder) -> Self {
        let [k0, k1, k2, k3] = codec::load_words::<4>(key);

        let mut state = State {
            x: [
                k0,
                (k3 << 16) | (k2 >> 16),
                k1,
                (k0 << 16) | (k3 >> 16),
                k2,
                (k1 << 16) | (k0 >> 16),
                k3,
                (k2 << 16) | (k1 >> 16),
            ],
            c: [
                k2.rotate_left(16),
                (k0 >> 16) | (k1 << 16),
                k3.rotate_left(16),
                (k1 >> 16) | (k2 << 16),
                k0.rotate_left(16),
                (k2 >> 16) | (k3 << 16),
                k1.rotate_left(16),
                (k3 >> 16) | (k0 << 16),
            ],
            carry: 0,
        };

        for _ in 0..SCHEDULE_ROUNDS {
            state.next_state(order);
        }

        // Re-initialize the counters from the iterated state words.
        for i in 0..8 {
            state.c[i] ^= state.x[(i + 4) & 7];
        }
        state
    }

    /// IV schedule: perturbs the counters with the IV and iterates the state.
    /// IVs shorter than 8 bytes are zero padded.
    pub(crate) fn apply_iv(&mut self, iv: &[u8], order: StepOrder) {
        let [iv0, iv1] = codec::load_words::<2>(iv);
        let iv2 = (iv1 & 0xFFFF_0000) | (iv0 >> 16);
        let iv3 = (iv1 << 16) | (iv0 & 0x0000_FFFF);

        let mask = [iv0, iv2, iv1, iv3];
        for (i, c) in self.c.iter_mut().enumerate() {
            *c ^= mask[i & 3];
        }

        for _ in 0..SCHEDULE_ROUNDS {
            self.next_state(order);
        }
    }

    /// Advances the state by one step.
    #[inline(always)]
    pub(crate) fn next_state(&mut self, order: StepOrder) {
        let g = match order {
            StepOrder::CounterFirst => {
                self.step_counters();
                self.mix()
            }
            StepOrder::MixFirst => {
                let g = self.mix();
                self.step_counters();
                g
            }
        };

        self.x[0] = g[0].wrapping_add(g[7].rotate_left(16)).wrapping_add(g[6].rotate_left(16));
        self.x[1] = g[1].wrapping_add(g[0].rotate_left(8)).wrapping_add(g[7]);
        self.x[2] = g[2].wrapping_add(g[1].rotate_left(16)).wrapping_add(g[0].rotate_left(16));
        self.x[3] = g[3].wrapping_add(g[2].rotate_left(8)).wrapping_add(g[1]);
        self.x[4] = g[4].wrapping_add(g[3].rotate_left(16)).wrapping_add(g[2].rotate_left(16));
        self.x[5] = g[5].wrapping_add(g[4].rotate_left(8)).wrapping_add(g[3]);
        self.x[6] = g[6].wrapping_add(g[5].rotate_left(16)).wrapping_add(g[4].rotate_left(16));
        self.x[7] = g[7].wrapping_add(g[6].rotate_left(8)).wrapping_add(g[5]);
    }

    /// Adds `A` plus the previous carry to the 256-bit counter.
    #[inline(always)]
    fn step_counters(&mut self) {
        let old = self.c;
        let mut carry = self.carry;
        for i in 0..8 {
            self.c[i] = self.c[i].wrapping_add(A[i]).wrapping_add(carry);
            carry = u32::from(self.c[i] < old[i]);
        }
        self.carry = carry;
    }

    #[inline(always)]
    fn mix(&self) -> [u32; 8] {
        let mut g = [0u32; 8];
        for i in 0..8 {
            g[i] = g_func(self.x[i].wrapping_add(self.c[i]));
        }
        g
    }

    /// Writes the 16-byte keystream block for the current state.
    pub(crate) fn extract(&self, out: &mut [u8]) {
        let x = &self.x;
        let s = [
            x[0] ^ (x[5] >> 16) ^ (x[3] << 16),
            x[2] ^ (x[7] >> 16) ^ (x[5] << 16),
            x[4] ^ (x[1] >> 16) ^ (x[7] << 16),
            x[6] ^ (x[3] >> 16) ^ (x[1] << 16),
        ];
        codec::store_words(&s, out);
    }
}

/// XOR of the high and low halves of the 64-bit square of `v`.
#[inline(always)]
pub(crate) fn g_func(v: u32) -> u32 {
    let a = v & 0xFFFF;
    let b = v >> 16;
    let h = ((a.wrapping_mul(a) >> 17).wrapping_add(a.wrapping_mul(b)) >> 15)
        .wrapping_add(b.wrapping_mul(b));
    h ^ v.wrapping_mul(v)
}
