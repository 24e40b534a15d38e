//! The engine that turns raw entropy blocks into typed values, bulk buffer
//! operations, and lazy sequences.

use crate::block::Block;
use crate::element::{Element, Ranged, Signed};
use crate::error::{Error, Result};
use crate::seed::Seed;
use crate::source::{EntropySource, XoshiroSource};

mod fill;
mod sequence;

pub use sequence::{BoundedSequence, Sequence};

/// Consumption state over the current block: which block is live and how many
/// of its bytes have been handed out.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor {
    block: Block,
    consumed: usize,
}

impl Cursor {
    /// A cursor with nothing buffered; the first request draws a fresh block.
    pub(crate) fn drained() -> Self {
        Cursor {
            block: Block::default(),
            consumed: Block::BYTES,
        }
    }

    /// Hand out `n` unconsumed bytes. When fewer than `n` remain in the
    /// current block the tail is discarded and a fresh block is drawn, so a
    /// value never straddles a block boundary and mixed-width call orders
    /// stay independent.
    pub(crate) fn take<'a>(
        &'a mut self,
        source: &mut dyn EntropySource,
        n: usize,
    ) -> Result<&'a [u8]> {
        debug_assert!(n <= Block::BYTES);
        if Block::BYTES - self.consumed < n {
            self.block = source.next_block()?;
            self.consumed = 0;
        }
        let at = self.consumed;
        self.consumed += n;
        Ok(&self.block.as_bytes()[at..at + n])
    }
}

/// A seedable, cloneable random number engine.
///
/// A generator exclusively owns one [`EntropySource`] and slices its raw
/// blocks into values of any supported [`Element`] type. Same-width request
/// sequences consume blocks densely; a request that no longer fits in the
/// current block discards the remainder and draws a fresh one, so sequences
/// of mixed widths are deterministic for a fixed call order.
///
/// Two generators built from the same source variant and seed produce
/// identical output, position for position:
///
/// ```
/// use spigot::Generator;
///
/// let mut a = Generator::from_seed(1);
/// let mut b = Generator::from_seed(1);
/// let x: u64 = a.next().unwrap();
/// assert_eq!(x, b.next().unwrap());
/// ```
///
/// A generator is an ordinary mutable object with no internal
/// synchronization. To share one entropy stream across threads, wrap the
/// source in a [`SharedSource`](crate::source::SharedSource) and give each
/// thread its own generator over a handle.
#[derive(Debug)]
pub struct Generator {
    source: Box<dyn EntropySource>,
    cursor: Cursor,
}

impl Generator {
    /// A generator over the default fast source, seeded from host entropy.
    pub fn new() -> Self {
        Self::with_source(Box::new(XoshiroSource::new()))
    }

    /// A generator over an explicit source.
    pub fn with_source(source: Box<dyn EntropySource>) -> Self {
        Generator {
            source,
            cursor: Cursor::drained(),
        }
    }

    /// A generator over the default fast source, primed from `seed`.
    pub fn from_seed(seed: impl Into<Seed>) -> Self {
        Self::with_source(Box::new(XoshiroSource::from_seed(&seed.into())))
    }

    /// A generator over an explicit source primed with `seed`. Fails when
    /// the source does not accept seed material.
    pub fn with_seeded_source(
        mut source: Box<dyn EntropySource>,
        seed: impl Into<Seed>,
    ) -> Result<Self> {
        source.reseed(&seed.into())?;
        Ok(Self::with_source(source))
    }

    /// The clone constructor: a generator that reproduces, element for
    /// element, whatever `other` would produce from this point forward,
    /// without advancing `other`. Fails with [`Error::Unclonable`] when the
    /// underlying source cannot be faithfully duplicated.
    pub fn clone_of(other: &Generator) -> Result<Self> {
        other.try_clone().ok_or(Error::Unclonable)
    }

    /// Duplicate this generator, or `None` (not an error) when the
    /// underlying source cannot be faithfully duplicated.
    pub fn try_clone(&self) -> Option<Self> {
        let source = self.source.try_clone()?;
        Some(Generator {
            source,
            cursor: self.cursor,
        })
    }

    /// Re-prime the underlying source from `seed` and discard any buffered
    /// block tail, restarting the output sequence. Fails when the source
    /// does not accept seed material.
    pub fn reseed(&mut self, seed: impl Into<Seed>) -> Result<()> {
        self.source.reseed(&seed.into())?;
        self.cursor = Cursor::drained();
        Ok(())
    }

    /// Release the source's external resources early and drop any buffered
    /// block tail; every later request fails with [`Error::Disposed`] (or
    /// the source's corresponding state error).
    pub fn dispose(&mut self) {
        self.source.dispose();
        self.cursor = Cursor::drained();
    }

    /// The next value of the full type span; floats land in `[0, 1)`.
    #[inline]
    pub fn next<T: Element>(&mut self) -> Result<T> {
        let bytes = self.cursor.take(&mut *self.source, T::BYTES)?;
        Ok(T::from_entropy(bytes))
    }

    /// The next value in `[0, range)`, free of modulo bias.
    pub fn next_below<T: Ranged>(&mut self, range: T::Span) -> Result<T> {
        self.next_in(T::ZERO, range)
    }

    /// The next value in `[min, min + range)`, free of modulo bias.
    ///
    /// Integer spans use exact rejection sampling: raw draws that would
    /// alias the low residues are discarded and redrawn, with fewer than two
    /// expected draws even in the worst case. Floats are scaled affinely
    /// from a `[0, 1)` draw.
    pub fn next_in<T: Ranged>(&mut self, min: T, range: T::Span) -> Result<T> {
        T::check_span(min, range)?;
        T::sample_in(self, min, range)
    }

    /// The next non-negative value of a signed integer type, uniform over
    /// `[0, MAX]`.
    pub fn next_nonneg<T: Signed>(&mut self) -> Result<T> {
        Ok(self.next::<T>()?.drop_sign())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Interop with the wider rand ecosystem: a [`Generator`] can stand in
/// wherever an [`RngCore`](rand::RngCore) is expected. The infallible
/// methods follow the rand contract and panic if the underlying source
/// fails; use [`try_fill_bytes`](rand::RngCore::try_fill_bytes) or the
/// native accessors to observe source errors.
impl rand_core::RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        self.next().expect("entropy source failed")
    }

    fn next_u64(&mut self) -> u64 {
        self.next().expect("entropy source failed")
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest).expect("entropy source failed")
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        self.fill(dest).map_err(rand_core::Error::new)
    }
}
