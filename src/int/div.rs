//! Division.

use crate::common::buf::LimbBuf;
use crate::common::util::cmp_slices;
use crate::common::util::div_by_limb;
use crate::common::util::shl1_inject;
use crate::common::util::sub_slices_assign;
use crate::defs::Error;
use crate::defs::Limb;
use crate::defs::LIMB_BIT_SIZE;
use crate::int::BigInt;
use core::cmp::Ordering;

// Restoring long division of unsigned numbers, one bit at a time.
fn div_rem_magnitude(n: &[Limb], d: &[Limb]) -> (LimbBuf, LimbBuf) {
    let mut q = LimbBuf::filled(n.len(), 0);
    let mut r = LimbBuf::new();

    for i in (0..n.len()).rev() {
        for b in (0..LIMB_BIT_SIZE).rev() {
            shl1_inject(&mut r, (n[i] >> b) & 1);
            if cmp_slices(&r, d) != Ordering::Less {
                sub_slices_assign(&mut r, d);
                r.trim_back(0);
                q[i] |= 1 << b;
            }
        }
    }

    (q, r)
}

impl BigInt {
    /// Divides `self` by `d2` in place leaving the quotient in `self`, and returns the remainder.
    /// The quotient is rounded toward zero, the remainder has the sign of the dividend.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn div_rem_assign(&mut self, d2: &Self) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let neg_n = self.is_negative();
        let neg_d = d2.is_negative();

        let (q, r) = div_rem_magnitude(&self.magnitude(), &d2.magnitude());

        *self = BigInt::from_magnitude(q, neg_n != neg_d);

        Ok(BigInt::from_magnitude(r, neg_n))
    }

    /// Returns the quotient and the remainder of division of `self` by `d2`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn div_rem(&self, d2: &Self) -> Result<(Self, Self), Error> {
        let mut q = self.clone();
        let r = q.div_rem_assign(d2)?;
        Ok((q, r))
    }

    /// Returns the quotient of division of `self` by `d2` rounded toward zero.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn div(&self, d2: &Self) -> Result<Self, Error> {
        self.div_rem(d2).map(|(q, _)| q)
    }

    /// Returns the remainder of division of `self` by `d2`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn rem(&self, d2: &Self) -> Result<Self, Error> {
        self.div_rem(d2).map(|(_, r)| r)
    }

    /// Divides the magnitude of `self` by a non-zero limb `d`.
    /// Returns the quotient with the sign of `self` and the remainder of the magnitude.
    pub(crate) fn div_rem_limb(&self, d: Limb) -> (Self, Limb) {
        debug_assert!(d != 0);
        let mut m = self.magnitude();
        let r = div_by_limb(&mut m, d);
        (BigInt::from_magnitude(m, self.is_negative()), r)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::LIMB_MAX;

    fn int(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_div_rem() {
        let (q, r) = int(17).div_rem(&int(5)).unwrap();
        assert_eq!((q, r), (int(3), int(2)));

        // truncation toward zero
        let (q, r) = int(-17).div_rem(&int(5)).unwrap();
        assert_eq!((q, r), (int(-3), int(-2)));

        let (q, r) = int(17).div_rem(&int(-5)).unwrap();
        assert_eq!((q, r), (int(-3), int(2)));

        let (q, r) = int(-17).div_rem(&int(-5)).unwrap();
        assert_eq!((q, r), (int(3), int(-2)));

        let (q, r) = int(4).div_rem(&int(9)).unwrap();
        assert_eq!((q, r), (int(0), int(4)));

        assert_eq!(int(1).div(&int(0)), Err(Error::DivisionByZero));
        assert_eq!(int(0).rem(&int(0)), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_div_long() {
        // (2^128 - 1) / (2^64 - 1) = 2^64 + 1
        let n = BigInt::from_limbs(LimbBuf::from_slice(&[LIMB_MAX, LIMB_MAX, 0]));
        let d = BigInt::from_limb(LIMB_MAX);
        let (q, r) = n.div_rem(&d).unwrap();
        assert_eq!(&q.m[..], &[1, 1]);
        assert!(r.is_zero());

        let (q, r) = n.div_rem_limb(10);
        assert_eq!(q.mul(&int(10)).add(&BigInt::from_limb(r)), n);
    }
}
