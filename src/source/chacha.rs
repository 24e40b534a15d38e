use crate::block::Block;
use crate::error::{Error, Result};
use crate::seed::Seed;
use crate::source::EntropySource;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::fmt;
use tracing::debug;

/// The cryptographic-strength source.
///
/// Holds a disposable ChaCha20 context, treated as an opaque crypto-strength
/// primitive. The context must be seeded before the first block is produced;
/// using it earlier fails with [`Error::Unseeded`]. [`dispose`] releases the
/// context, after which any production attempt fails with
/// [`Error::Disposed`]. Clonable while a live context exists.
///
/// [`dispose`]: EntropySource::dispose
pub struct ChaChaSource {
    ctx: Context,
}

#[derive(Clone)]
enum Context {
    Unseeded,
    Live(ChaCha20Rng),
    Disposed,
}

impl ChaChaSource {
    /// Construct without a context; [`reseed`](EntropySource::reseed) must be
    /// called before the first block is produced.
    pub fn new() -> Self {
        ChaChaSource {
            ctx: Context::Unseeded,
        }
    }

    /// Construct with a context keyed from `seed`.
    pub fn from_seed(seed: &Seed) -> Self {
        let mut source = Self::new();
        // cannot fail on an unseeded context
        source.reseed(seed).unwrap();
        source
    }
}

impl Default for ChaChaSource {
    fn default() -> Self {
        Self::new()
    }
}

// The cipher state stays out of Debug output on purpose: leaking it would
// make every future block predictable.
impl fmt::Debug for ChaChaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.ctx {
            Context::Unseeded => "unseeded",
            Context::Live(_) => "live",
            Context::Disposed => "disposed",
        };
        write!(f, "ChaChaSource({})", state)
    }
}

impl EntropySource for ChaChaSource {
    fn next_block(&mut self) -> Result<Block> {
        match &mut self.ctx {
            Context::Unseeded => Err(Error::Unseeded),
            Context::Disposed => Err(Error::Disposed),
            Context::Live(rng) => {
                let mut bytes = [0u8; Block::BYTES];
                rng.fill_bytes(&mut bytes);
                Ok(Block::new(bytes))
            }
        }
    }

    fn reseed(&mut self, seed: &Seed) -> Result<()> {
        if let Context::Disposed = self.ctx {
            return Err(Error::Disposed);
        }
        self.ctx = Context::Live(ChaCha20Rng::from_seed(seed.key32()));
        debug!(seed = %seed, "keyed cryptographic source");
        Ok(())
    }

    fn try_clone(&self) -> Option<Box<dyn EntropySource>> {
        match self.ctx {
            // a released context cannot be duplicated
            Context::Disposed => None,
            _ => Some(Box::new(ChaChaSource {
                ctx: self.ctx.clone(),
            })),
        }
    }

    fn dispose(&mut self) {
        debug!("disposing cryptographic context");
        self.ctx = Context::Disposed;
    }
}
