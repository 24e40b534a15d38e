use crate::block::Block;
use crate::error::Result;
use crate::seed::Seed;
use crate::source::EntropySource;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A wrapper that serializes access to a shared inner source.
///
/// Mint one handle per thread with [`handle`](SharedSource::handle) and give
/// each thread its own [`Generator`](crate::Generator): every generator keeps
/// an independent cursor, while block production on the shared inner source
/// is serialized behind a mutex. The union of blocks drawn across all
/// threads equals what a sequential interleaving would have drawn; no block
/// is duplicated or dropped.
///
/// The clone protocol deep-copies the inner source (when the inner variant
/// allows it), producing an independent stream; use `handle` when you want
/// another draw point on the *same* stream.
#[derive(Debug)]
pub struct SharedSource {
    inner: Arc<Mutex<Box<dyn EntropySource>>>,
}

impl SharedSource {
    /// Wrap `source` for shared use.
    pub fn new(source: Box<dyn EntropySource>) -> Self {
        SharedSource {
            inner: Arc::new(Mutex::new(source)),
        }
    }

    /// Another handle drawing from the same underlying stream.
    pub fn handle(&self) -> Self {
        SharedSource {
            inner: Arc::clone(&self.inner),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn EntropySource>> {
        // A peer that panicked while holding the lock cannot leave the inner
        // source mid-block, so the poisoned state is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EntropySource for SharedSource {
    fn next_block(&mut self) -> Result<Block> {
        self.lock().next_block()
    }

    fn reseed(&mut self, seed: &Seed) -> Result<()> {
        self.lock().reseed(seed)
    }

    fn try_clone(&self) -> Option<Box<dyn EntropySource>> {
        let inner = self.lock().try_clone()?;
        Some(Box::new(SharedSource::new(inner)))
    }

    fn dispose(&mut self) {
        self.lock().dispose()
    }
}
