use crate::block::Block;
use crate::error::Result;
use crate::seed::{Seed, SplitMix64};
use crate::source::EntropySource;
use tracing::debug;

/// The fast, non-cryptographic source (xoshiro256**).
///
/// Small fixed state and very high throughput; the default source behind
/// [`Generator::new`](crate::Generator::new). Deterministic once seeded, and
/// cheap to clone, which makes it the workhorse for reproducible simulation
/// and test-input generation. Not suitable where an adversary must not
/// predict future output.
#[derive(Debug, Clone)]
pub struct XoshiroSource {
    s: [u64; 4],
}

impl XoshiroSource {
    /// Construct with fresh state drawn from host entropy.
    pub fn new() -> Self {
        Self::from_seed(&Seed::from_entropy())
    }

    /// Construct with state derived deterministically from `seed`.
    pub fn from_seed(seed: &Seed) -> Self {
        // SplitMix64 expands the folded seed into 256 bits of state; xoshiro
        // state must not be all-zero, and SplitMix64 output never is.
        let mut mix = SplitMix64::new(seed.fold64());
        let mut s = [0u64; 4];
        for slot in s.iter_mut() {
            *slot = mix.next_u64();
        }
        debug!(seed = %seed, "seeded fast source");
        XoshiroSource { s }
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let result = self.s[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }
}

impl Default for XoshiroSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for XoshiroSource {
    fn next_block(&mut self) -> Result<Block> {
        let mut bytes = [0u8; Block::BYTES];
        for chunk in bytes.chunks_exact_mut(8) {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        Ok(Block::new(bytes))
    }

    fn reseed(&mut self, seed: &Seed) -> Result<()> {
        self.s = Self::from_seed(seed).s;
        Ok(())
    }

    fn try_clone(&self) -> Option<Box<dyn EntropySource>> {
        Some(Box::new(self.clone()))
    }
}

impl From<u64> for XoshiroSource {
    fn from(seed: u64) -> Self {
        Self::from_seed(&Seed::from(seed))
    }
}
