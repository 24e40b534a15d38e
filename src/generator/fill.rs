//! Bulk buffer operations: overwrite, additive combine, and xor combine,
//! each over a whole slice or an `(offset, count)` sub-range, unranged or
//! ranged.

use crate::element::{Bits, Element, Ranged};
use crate::error::{Error, Result};
use crate::generator::Generator;

/// Validate an `(offset, count)` pair against `dest` and return the
/// sub-slice it describes. `count == 0` yields an empty slice, making every
/// bulk operation a guaranteed no-op on it.
fn subrange<T>(dest: &mut [T], offset: usize, count: usize) -> Result<&mut [T]> {
    let len = dest.len();
    let end = offset
        .checked_add(count)
        .filter(|&end| end <= len)
        .ok_or(Error::Bounds { offset, count, len })?;
    Ok(&mut dest[offset..end])
}

impl Generator {
    /// Overwrite every element of `dest` with a freshly sampled full-span
    /// value. Direct raw reinterpretation; no rejection needed.
    pub fn fill<T: Element>(&mut self, dest: &mut [T]) -> Result<()> {
        for slot in dest.iter_mut() {
            *slot = self.next()?;
        }
        Ok(())
    }

    /// [`fill`](Generator::fill) over the sub-range `[offset, offset + count)`.
    pub fn fill_at<T: Element>(&mut self, dest: &mut [T], offset: usize, count: usize) -> Result<()> {
        let dest = subrange(dest, offset, count)?;
        self.fill(dest)
    }

    /// Overwrite every element of `dest` with a sample from
    /// `[min, min + range)`, free of modulo bias.
    pub fn fill_in<T: Ranged>(&mut self, dest: &mut [T], min: T, range: T::Span) -> Result<()> {
        T::check_span(min, range)?;
        for slot in dest.iter_mut() {
            *slot = T::sample_in(self, min, range)?;
        }
        Ok(())
    }

    /// [`fill_in`](Generator::fill_in) over the sub-range
    /// `[offset, offset + count)`.
    pub fn fill_in_at<T: Ranged>(
        &mut self,
        dest: &mut [T],
        min: T,
        range: T::Span,
        offset: usize,
        count: usize,
    ) -> Result<()> {
        let dest = subrange(dest, offset, count)?;
        self.fill_in(dest, min, range)
    }

    /// Combine a freshly sampled full-span value into every element of
    /// `dest` with wrapping addition (IEEE addition for floats).
    pub fn add_fill<T: Ranged>(&mut self, dest: &mut [T]) -> Result<()> {
        for slot in dest.iter_mut() {
            *slot = slot.combine_add(self.next()?);
        }
        Ok(())
    }

    /// [`add_fill`](Generator::add_fill) over the sub-range
    /// `[offset, offset + count)`.
    pub fn add_fill_at<T: Ranged>(
        &mut self,
        dest: &mut [T],
        offset: usize,
        count: usize,
    ) -> Result<()> {
        let dest = subrange(dest, offset, count)?;
        self.add_fill(dest)
    }

    /// Combine a sample from `[min, min + range)` into every element of
    /// `dest` with wrapping addition. Any positive range is accepted:
    /// addition of a bias-free bounded sample stays correct regardless of
    /// range shape, so this uses per-element rejection sampling.
    pub fn add_fill_in<T: Ranged>(&mut self, dest: &mut [T], min: T, range: T::Span) -> Result<()> {
        T::check_span(min, range)?;
        for slot in dest.iter_mut() {
            *slot = slot.combine_add(T::sample_in(self, min, range)?);
        }
        Ok(())
    }

    /// [`add_fill_in`](Generator::add_fill_in) over the sub-range
    /// `[offset, offset + count)`.
    pub fn add_fill_in_at<T: Ranged>(
        &mut self,
        dest: &mut [T],
        min: T,
        range: T::Span,
        offset: usize,
        count: usize,
    ) -> Result<()> {
        let dest = subrange(dest, offset, count)?;
        self.add_fill_in(dest, min, range)
    }

    /// Combine a freshly sampled full-span value into every element of
    /// `dest` with bitwise xor.
    pub fn xor_fill<T: Bits>(&mut self, dest: &mut [T]) -> Result<()> {
        for slot in dest.iter_mut() {
            *slot = slot.combine_xor(self.next()?);
        }
        Ok(())
    }

    /// [`xor_fill`](Generator::xor_fill) over the sub-range
    /// `[offset, offset + count)`.
    pub fn xor_fill_at<T: Bits>(
        &mut self,
        dest: &mut [T],
        offset: usize,
        count: usize,
    ) -> Result<()> {
        let dest = subrange(dest, offset, count)?;
        self.xor_fill(dest)
    }

    /// Combine a sample from `[min, min + range)` into every element of
    /// `dest` with bitwise xor. `range` must be a power of two (xor with
    /// any other modulus would not preserve uniformity) and fails with
    /// [`Error::NotPowerOfTwo`] otherwise. A power-of-two range needs no
    /// rejection: the low bits of a raw draw are already unbiased.
    pub fn xor_fill_in<T: Bits>(&mut self, dest: &mut [T], min: T, range: T::Span) -> Result<()> {
        T::check_span(min, range)?;
        if !T::is_pow2(range) {
            return Err(Error::NotPowerOfTwo);
        }
        for slot in dest.iter_mut() {
            *slot = slot.combine_xor(T::sample_masked(self, min, range)?);
        }
        Ok(())
    }

    /// [`xor_fill_in`](Generator::xor_fill_in) over the sub-range
    /// `[offset, offset + count)`.
    pub fn xor_fill_in_at<T: Bits>(
        &mut self,
        dest: &mut [T],
        min: T,
        range: T::Span,
        offset: usize,
        count: usize,
    ) -> Result<()> {
        let dest = subrange(dest, offset, count)?;
        self.xor_fill_in(dest, min, range)
    }

    /// A freshly allocated `Vec` of `count` full-span samples.
    pub fn create<T: Element>(&mut self, count: usize) -> Result<Vec<T>> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.next()?);
        }
        Ok(out)
    }

    /// A freshly allocated `Vec` of `count` samples from `[0, range)`.
    pub fn create_below<T: Ranged>(&mut self, count: usize, range: T::Span) -> Result<Vec<T>> {
        self.create_in(count, T::ZERO, range)
    }

    /// A freshly allocated `Vec` of `count` samples from
    /// `[min, min + range)`.
    pub fn create_in<T: Ranged>(&mut self, count: usize, min: T, range: T::Span) -> Result<Vec<T>> {
        T::check_span(min, range)?;
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(T::sample_in(self, min, range)?);
        }
        Ok(out)
    }

    /// A freshly allocated `Vec` of `count` random bytes.
    pub fn create_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        self.create(count)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn subrange_bounds() {
        let mut buf = [0u8; 10];
        assert!(subrange(&mut buf, 0, 10).is_ok());
        assert!(subrange(&mut buf, 10, 0).is_ok());
        assert!(matches!(
            subrange(&mut buf, 4, 7),
            Err(Error::Bounds {
                offset: 4,
                count: 7,
                len: 10
            })
        ));
        assert!(matches!(
            subrange(&mut buf, usize::MAX, 2),
            Err(Error::Bounds { .. })
        ));
    }

    #[test]
    fn zero_count_touches_nothing() {
        let mut g = Generator::from_seed(1);
        let mut buf = [7u32; 8];
        g.fill_at(&mut buf, 3, 0).unwrap();
        g.add_fill_at(&mut buf, 0, 0).unwrap();
        g.xor_fill_at(&mut buf, 8, 0).unwrap();
        assert_eq!(buf, [7u32; 8]);
    }

    #[test]
    fn sub_range_fills_leave_the_rest_alone() {
        let mut g = Generator::from_seed(2);
        let mut buf = [0u64; 8];
        g.fill_at(&mut buf, 2, 3).unwrap();
        assert_eq!(&buf[..2], &[0, 0]);
        assert_eq!(&buf[5..], &[0, 0, 0]);
        assert!(buf[2..5].iter().all(|&v| v != 0));
    }

    #[test]
    fn create_matches_fill() {
        let mut g = Generator::from_seed(5);
        let mut h = Generator::from_seed(5);
        let created = g.create::<u16>(33).unwrap();
        let mut filled = vec![0u16; 33];
        h.fill(&mut filled).unwrap();
        assert_eq!(created, filled);
    }
}
