use crate::block::Block;
use crate::error::{Error, Result};
use crate::seed::Seed;
use crate::source::EntropySource;
use rand::rngs::OsRng;
use rand::RngCore;

/// The host-OS source, wrapping the platform entropy facility.
///
/// Cannot be seeded (the platform stream is not replayable) and cannot be
/// cloned; [`try_clone`](EntropySource::try_clone) always returns `None`.
/// Generator construction that requires a faithful duplicate of this source
/// therefore fails with [`Error::Unclonable`](crate::Error::Unclonable).
#[derive(Debug, Default)]
pub struct OsSource;

impl OsSource {
    /// Construct a handle onto the platform entropy facility.
    pub fn new() -> Self {
        OsSource
    }
}

impl EntropySource for OsSource {
    fn next_block(&mut self) -> Result<Block> {
        let mut bytes = [0u8; Block::BYTES];
        // Platform entropy failure is unrecoverable; `fill_bytes` panics on
        // it, which is the rand contract for infallible entropy access.
        OsRng.fill_bytes(&mut bytes);
        Ok(Block::new(bytes))
    }

    fn reseed(&mut self, _seed: &Seed) -> Result<()> {
        Err(Error::SeedRejected)
    }

    fn try_clone(&self) -> Option<Box<dyn EntropySource>> {
        None
    }
}
