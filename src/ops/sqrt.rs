//! Square root.

use crate::common::consts::ONE;
use crate::common::util::bit_len;
use crate::defs::Error;
use crate::defs::SQRT_MAX_ITER;
use crate::int::BigInt;
use crate::num::BigFloat;
use core::cmp::Ordering;

impl BigFloat {
    /// Computes the square root of a number with Newton's method.
    /// Iterations stop when two successive approximations differ by less than `eps`,
    /// or when an iteration no longer decreases the approximation.
    /// The result has the maximum width of `self`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is negative.
    pub fn sqrt(&self, eps: &Self) -> Result<Self, Error> {
        if self.is_negative() {
            return Err(Error::Domain);
        }

        if self.is_zero() {
            return Ok(self.clone());
        }

        // 2^ceil(b/2) >= sqrt(x) for x < 2^b
        let b = self.bit_exponent();
        let mut y = Self::one(self.max_width()).mul_pow2((b + 1).div_euclid(2));

        for _ in 0..SQRT_MAX_ITER {
            let y2 = y.add(&self.div(&y)?).mul_pow2(-1);

            if y2.cmp(&y) != Ordering::Less {
                break;
            }

            let diff = y.sub(&y2);
            y = y2;

            if diff.cmp(eps) == Ordering::Less {
                break;
            }
        }

        Ok(y)
    }
}

impl BigInt {
    /// Returns the integer square root of `self`, i.e. the largest integer whose square
    /// does not exceed `self`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is negative.
    pub fn isqrt(&self) -> Result<Self, Error> {
        if self.is_negative() {
            return Err(Error::Domain);
        }

        if self.is_zero() {
            return Ok(BigInt::new());
        }

        let b = bit_len(&self.m);
        let mut x = ONE.shl((b + 1) / 2);

        loop {
            let y = x.add(&self.div(&x)?).shr(1);
            if y.cmp(&x) != Ordering::Less {
                return Ok(x);
            }
            x = y;
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::LIMB_MAX;

    #[test]
    fn test_sqrt() {
        let eps = BigFloat::new(4);

        let two = BigFloat::from_int(&BigInt::from(2), 4);
        let s = two.sqrt(&eps).unwrap();
        let d = s.mul(&s).sub(&two).abs();
        assert!(d.exponent() <= -3);

        let n = BigFloat::from_int(&BigInt::from(144), 4);
        let s = n.sqrt(&eps).unwrap();
        assert_eq!(s.cmp(&BigFloat::from_int(&BigInt::from(12), 4)), Ordering::Equal);

        let q = BigFloat::from_f64(0.0625, 4).unwrap();
        let s = q.sqrt(&eps).unwrap();
        assert_eq!(s.to_f64(), 0.25);

        // a coarse epsilon stops early
        let coarse = BigFloat::from_f64(0.5, 4).unwrap();
        let s = BigFloat::from_int(&BigInt::from(1_000_000), 4).sqrt(&coarse).unwrap();
        assert!((s.to_f64() - 1000.0).abs() < 1.0);

        assert!(BigFloat::new(4).sqrt(&eps).unwrap().is_zero());
        assert_eq!(two.neg().sqrt(&eps).unwrap_err(), Error::Domain);
    }

    #[test]
    fn test_isqrt() {
        for (n, r) in [(0u64, 0u64), (1, 1), (3, 1), (4, 2), (15, 3), (16, 4), (17, 4), (LIMB_MAX, 4294967295)] {
            assert_eq!(BigInt::from(n).isqrt().unwrap(), BigInt::from(r));
        }

        let n = BigInt::from(u128::MAX);
        assert_eq!(n.isqrt().unwrap(), BigInt::from(u64::MAX));

        for _ in 0..100 {
            let n = BigInt::from(rand::random::<u128>());
            let r = n.isqrt().unwrap();
            assert!(r.mul(&r).cmp(&n) != Ordering::Greater);
            let r1 = r.add(&BigInt::one());
            assert_eq!(r1.mul(&r1).cmp(&n), Ordering::Greater);
        }

        assert_eq!(BigInt::from(-4).isqrt().unwrap_err(), Error::Domain);
    }
}
