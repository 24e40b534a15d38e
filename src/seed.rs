//! Seed material and deterministic state derivation.
//!
//! A [`Seed`] is an ordered byte sequence. Character seeds are encoded as
//! UTF-8; integer seeds as little-endian bytes; an absent seed means "draw
//! fresh material from host entropy". Two sources of the same variant primed
//! with the same seed produce identical block sequences, which is the
//! reproducibility contract the whole crate is built around.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::generator::Cursor;
use crate::source::EntropySource;
use rand::rngs::OsRng;
use rand::RngCore;
use smallvec::SmallVec;
use std::any::Any;
use std::fmt;

/// Seed material: an ordered byte sequence used to prime an entropy source.
#[derive(Clone, PartialEq, Eq)]
pub struct Seed {
    bytes: SmallVec<[u8; 32]>,
}

impl Seed {
    /// Wrap explicit seed bytes.
    pub fn new(bytes: &[u8]) -> Self {
        Seed {
            bytes: SmallVec::from_slice(bytes),
        }
    }

    /// Draw 32 bytes of fresh seed material from host entropy.
    pub fn from_entropy() -> Self {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        Seed::new(&bytes)
    }

    /// The raw seed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Fold the seed bytes into a single 64-bit value (FNV-1a), the input to
    /// [`SplitMix64`] state expansion.
    pub(crate) fn fold64(&self) -> u64 {
        const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const PRIME: u64 = 0x0000_0100_0000_01b3;
        self.bytes
            .iter()
            .fold(OFFSET, |h, &b| (h ^ b as u64).wrapping_mul(PRIME))
    }

    /// Spread the seed bytes across a 32-byte key. The bytes are folded in
    /// cyclically, then diffused with a SplitMix64 stream so that short seeds
    /// still touch every key byte.
    pub(crate) fn key32(&self) -> [u8; 32] {
        let mut key = [0u8; 32];
        for (i, &b) in self.bytes.iter().enumerate() {
            key[i % 32] ^= b;
        }
        let mut mix = SplitMix64::new(self.fold64());
        for chunk in key.chunks_exact_mut(8) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            let diffused = u64::from_le_bytes(word) ^ mix.next_u64();
            chunk.copy_from_slice(&diffused.to_le_bytes());
        }
        key
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.bytes.as_slice()))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({})", self)
    }
}

impl From<&[u8]> for Seed {
    fn from(bytes: &[u8]) -> Self {
        Seed::new(bytes)
    }
}

impl From<Vec<u8>> for Seed {
    fn from(bytes: Vec<u8>) -> Self {
        Seed::new(&bytes)
    }
}

impl From<&str> for Seed {
    fn from(chars: &str) -> Self {
        Seed::new(chars.as_bytes())
    }
}

impl From<String> for Seed {
    fn from(chars: String) -> Self {
        Seed::new(chars.as_bytes())
    }
}

macro_rules! int_seeds {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Seed {
            fn from(value: $t) -> Self {
                Seed::new(&value.to_le_bytes())
            }
        }
    )*};
}

int_seeds!(i32, u32, i64, u64);

/// SplitMix64, used to expand a folded seed into arbitrary amounts of
/// initial state. Never produces a long run of zeros, which makes it safe
/// for seeding generators whose state must not be all-zero.
#[derive(Debug, Clone)]
pub(crate) struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub(crate) fn new(seed: u64) -> Self {
        SplitMix64 { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

/// Re-prime `source` from `seed`, then fill `dest` with values derived from
/// the primed state.
///
/// Deterministic: an identical (source variant, seed, destination length and
/// type) triple yields identical derived values. The derived values span the
/// element's representable range the way any fresh draw does; they are
/// suitable as "looks random" initial state for other components.
pub fn derive_state<T: Element>(
    source: &mut dyn EntropySource,
    seed: &Seed,
    dest: &mut [T],
) -> Result<()> {
    source.reseed(seed)?;
    let mut cursor = Cursor::drained();
    for slot in dest.iter_mut() {
        *slot = T::from_entropy(cursor.take(source, T::BYTES)?);
    }
    Ok(())
}

/// Runtime-dispatched version of [`derive_state`] for callers that only know
/// the destination type dynamically.
///
/// The destination must be a `Vec<T>` for one of the supported element types;
/// anything else fails with [`Error::ElementType`].
pub fn derive_state_any(
    source: &mut dyn EntropySource,
    seed: &Seed,
    dest: &mut dyn Any,
) -> Result<()> {
    macro_rules! dispatch {
        ($($t:ty),* $(,)?) => {$(
            if let Some(dest) = dest.downcast_mut::<Vec<$t>>() {
                return derive_state::<$t>(source, seed, dest);
            }
        )*};
    }
    dispatch!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, f32, f64, crate::Block);
    Err(Error::ElementType)
}
