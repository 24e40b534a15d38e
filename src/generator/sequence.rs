//! Lazy, unbounded sequences of typed values.
//!
//! A sequence borrows its generator mutably: consuming it advances the
//! shared entropy state irreversibly, so a sequence can only be "restarted"
//! by cloning the generator beforehand.

use crate::element::{Element, Ranged};
use crate::error::Result;
use crate::generator::Generator;
use std::marker::PhantomData;

/// An unbounded lazy sequence of full-span values.
///
/// Produced by [`Generator::sequence`]; never ends on its own, so bound it
/// with [`take`](Iterator::take) or similar.
#[derive(Debug)]
pub struct Sequence<'g, T: Element> {
    gen: &'g mut Generator,
    _elem: PhantomData<fn() -> T>,
}

impl<'g, T: Element> Iterator for Sequence<'g, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.gen.next())
    }
}

/// An unbounded lazy sequence of values in `[min, min + range)`.
///
/// Produced by [`Generator::sequence_below`] and
/// [`Generator::sequence_in`]; the span is validated once at construction.
#[derive(Debug)]
pub struct BoundedSequence<'g, T: Ranged> {
    gen: &'g mut Generator,
    min: T,
    range: T::Span,
}

impl<'g, T: Ranged> Iterator for BoundedSequence<'g, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(T::sample_in(self.gen, self.min, self.range))
    }
}

impl Generator {
    /// An unbounded lazy sequence of full-span values.
    pub fn sequence<T: Element>(&mut self) -> Sequence<'_, T> {
        Sequence {
            gen: self,
            _elem: PhantomData,
        }
    }

    /// An unbounded lazy sequence of values in `[0, range)`.
    pub fn sequence_below<T: Ranged>(&mut self, range: T::Span) -> Result<BoundedSequence<'_, T>> {
        self.sequence_in(T::ZERO, range)
    }

    /// An unbounded lazy sequence of values in `[min, min + range)`.
    pub fn sequence_in<T: Ranged>(
        &mut self,
        min: T,
        range: T::Span,
    ) -> Result<BoundedSequence<'_, T>> {
        T::check_span(min, range)?;
        Ok(BoundedSequence {
            gen: self,
            min,
            range,
        })
    }
}
