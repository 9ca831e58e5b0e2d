//! Buffer for holding limbs.

use crate::defs::Limb;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice::SliceIndex;
use smallvec::SmallVec;

const STATIC_ALLOCATION: usize = 4;

/// Double-ended buffer of limbs, least significant limb first.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub struct LimbBuf {
    inner: SmallVec<[Limb; STATIC_ALLOCATION]>,
}

impl LimbBuf {
    #[inline]
    pub fn new() -> Self {
        LimbBuf {
            inner: SmallVec::new(),
        }
    }

    /// Buffer of `sz` limbs set to `d`.
    #[inline]
    pub fn filled(sz: usize, d: Limb) -> Self {
        LimbBuf {
            inner: SmallVec::from_elem(d, sz),
        }
    }

    #[inline]
    pub fn from_slice(s: &[Limb]) -> Self {
        LimbBuf {
            inner: SmallVec::from_slice(s),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the limb at `i`, or `fill` past the end of the buffer.
    #[inline]
    pub fn get_or(&self, i: usize, fill: Limb) -> Limb {
        self.inner.get(i).copied().unwrap_or(fill)
    }

    #[inline]
    pub fn last(&self) -> Option<Limb> {
        self.inner.last().copied()
    }

    #[inline]
    pub fn push_back(&mut self, d: Limb) {
        self.inner.push(d);
    }

    #[inline]
    pub fn pop_back(&mut self) -> Option<Limb> {
        self.inner.pop()
    }

    #[inline]
    pub fn push_front(&mut self, d: Limb) {
        self.inner.insert(0, d);
    }

    /// Insert `n` limbs with value `d` at the least significant end.
    pub fn insert_front(&mut self, n: usize, d: Limb) {
        if n > 0 {
            self.inner.insert_many(0, core::iter::repeat(d).take(n));
        }
    }

    /// Remove `n` limbs from the least significant end.
    pub fn remove_front(&mut self, n: usize) {
        let n = n.min(self.len());
        if n > 0 {
            self.inner.drain(..n);
        }
    }

    /// Extend the buffer with `d` until it holds `n` limbs.
    #[inline]
    pub fn resize(&mut self, n: usize, d: Limb) {
        self.inner.resize(n, d);
    }

    #[inline]
    pub fn truncate(&mut self, n: usize) {
        self.inner.truncate(n);
    }

    /// Remove least significant limbs equal to `filler`. Returns the number of removed limbs.
    pub fn trim_front(&mut self, filler: Limb) -> usize {
        let n = self.inner.iter().take_while(|v| **v == filler).count();
        self.remove_front(n);
        n
    }

    /// Remove most significant limbs equal to `filler`. Returns the number of removed limbs.
    pub fn trim_back(&mut self, filler: Limb) -> usize {
        let n = self.inner.iter().rev().take_while(|v| **v == filler).count();
        let sz = self.len();
        self.inner.truncate(sz - n);
        n
    }
}

impl<I: SliceIndex<[Limb]>> IndexMut<I> for LimbBuf {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

impl<I: SliceIndex<[Limb]>> Index<I> for LimbBuf {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.inner.index(index)
    }
}

impl Deref for LimbBuf {
    type Target = [Limb];

    #[inline]
    fn deref(&self) -> &[Limb] {
        self.inner.deref()
    }
}

impl DerefMut for LimbBuf {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Limb] {
        self.inner.deref_mut()
    }
}

impl FromIterator<Limb> for LimbBuf {
    fn from_iter<T: IntoIterator<Item = Limb>>(iter: T) -> Self {
        LimbBuf {
            inner: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::LIMB_MAX;

    #[test]
    fn test_trim() {
        let mut b = LimbBuf::from_slice(&[0, 0, 5, 7, 0, 0, 0]);
        assert_eq!(b.trim_back(0), 3);
        assert_eq!(&b[..], &[0, 0, 5, 7]);
        assert_eq!(b.trim_front(0), 2);
        assert_eq!(&b[..], &[5, 7]);

        // all-filler sequence reduces to empty
        let mut b = LimbBuf::filled(3, LIMB_MAX);
        assert_eq!(b.trim_back(LIMB_MAX), 3);
        assert!(b.is_empty());
        assert_eq!(b.trim_front(LIMB_MAX), 0);
    }

    #[test]
    fn test_front_back() {
        let mut b = LimbBuf::new();
        b.push_back(2);
        b.push_front(1);
        b.insert_front(2, 0);
        assert_eq!(&b[..], &[0, 0, 1, 2]);
        assert_eq!(b.get_or(3, LIMB_MAX), 2);
        assert_eq!(b.get_or(4, LIMB_MAX), LIMB_MAX);
        b.remove_front(3);
        assert_eq!(&b[..], &[2]);
        b.remove_front(10);
        assert!(b.is_empty());
        assert_eq!(b.pop_back(), None);
    }
}
