//! The interchangeable entropy source variants a [`Generator`](crate::Generator)
//! can draw from.
//!
//! A source produces fixed-size raw [`Block`]s and knows nothing about
//! element types; everything typed happens above it in the generator. The
//! five variants trade speed, cryptographic strength, and clonability:
//!
//! | variant | seedable | clonable |
//! |---|---|---|
//! | [`XoshiroSource`] (fast, non-cryptographic) | yes (default: host entropy) | yes |
//! | [`ChaChaSource`] (cryptographic strength) | required before first use | while live |
//! | [`OsSource`] (host OS) | no | no |
//! | [`StreamSource`] (caller-supplied bytes) | no | no |
//! | [`SharedSource`] (mutex wrapper) | delegates | iff inner is |

use crate::block::Block;
use crate::error::Result;
use crate::seed::Seed;
use std::fmt;

mod chacha;
mod os;
mod shared;
mod stream;
mod xoshiro;

pub use chacha::ChaChaSource;
pub use os::OsSource;
pub use shared::SharedSource;
pub use stream::StreamSource;
pub use xoshiro::XoshiroSource;

/// A producer of raw entropy blocks.
///
/// Implementations are ordinary mutable objects with no internal
/// synchronization (except [`SharedSource`], which exists to add it);
/// concurrent use of one instance from multiple threads without external
/// coordination is the caller's responsibility.
pub trait EntropySource: fmt::Debug + Send {
    /// Produce the next raw block of entropy.
    fn next_block(&mut self) -> Result<Block>;

    /// Re-prime this source's internal state from seed material. Sources
    /// that cannot honor a seed deterministically (host OS, byte streams)
    /// fail with [`Error::SeedRejected`](crate::Error::SeedRejected) rather
    /// than silently ignoring it.
    fn reseed(&mut self, seed: &Seed) -> Result<()>;

    /// Duplicate this source so that the copy produces exactly the block
    /// sequence the original would have produced from this point on.
    /// Returns `None`, not an error, when the variant cannot be faithfully
    /// duplicated.
    fn try_clone(&self) -> Option<Box<dyn EntropySource>>;

    /// Release any externally held resources early. Producing a block after
    /// disposal fails with [`Error::Disposed`](crate::Error::Disposed).
    /// Default: no-op for variants holding no external resource.
    fn dispose(&mut self) {}
}
