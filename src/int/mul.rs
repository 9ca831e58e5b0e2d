//! Multiplication.

use crate::common::buf::LimbBuf;
use crate::common::util::add_shifted_assign;
use crate::defs::LIMB_BIT_SIZE;
use crate::int::BigInt;

impl BigInt {
    /// Multiplies `self` by `d2` in place.
    ///
    /// For every set bit of the shorter operand the longer operand shifted by the bit position
    /// is accumulated, so the cost is proportional to the bit length of the shorter operand
    /// times the limb length of the longer one.
    pub fn mul_assign(&mut self, d2: &Self) {
        let neg = self.is_negative() != d2.is_negative();

        let m1 = self.magnitude();
        let m2 = d2.magnitude();

        let (short, long) = if m1.len() <= m2.len() {
            (&m1, &m2)
        } else {
            (&m2, &m1)
        };

        let mut acc = LimbBuf::filled(m1.len() + m2.len() + 1, 0);

        for (i, d) in short.iter().enumerate() {
            let mut d = *d;
            let mut shift = i * LIMB_BIT_SIZE;
            while d != 0 {
                if d & 1 != 0 {
                    add_shifted_assign(&mut acc, long, shift);
                }
                d >>= 1;
                shift += 1;
            }
        }

        *self = BigInt::from_magnitude(acc, neg);
    }

    /// Returns the product of `self` and `d2`.
    pub fn mul(&self, d2: &Self) -> Self {
        let mut ret = self.clone();
        ret.mul_assign(d2);
        ret
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::{Limb, LIMB_MAX};

    #[test]
    fn test_mul() {
        let a = BigInt::from_limb(LIMB_MAX);
        let p = a.mul(&a);
        // (2^64 - 1)^2 = 2^128 - 2^65 + 1
        assert_eq!(&p.m[..], &[1, LIMB_MAX - 1, 0]);
        assert!(p.is_positive());

        let n = a.neg();
        assert_eq!(n.mul(&a), p.neg());
        assert_eq!(n.mul(&n), p);

        assert!(a.mul(&BigInt::new()).is_zero());
        assert!(BigInt::new().mul(&n).is_zero());

        let b = BigInt::from_limb(12345);
        let c = BigInt::from_limb(678);
        assert_eq!(b.mul(&c), BigInt::from_limb(12345 * 678));
        assert_eq!(b.neg().mul(&c), BigInt::from_limb(12345 * 678).neg());
    }

    #[test]
    fn test_mul_assign_long() {
        // (2^128 + 1) * (2^64 + 3)
        let mut a = BigInt::from_limbs(LimbBuf::from_slice(&[1, 0, 1]));
        let b = BigInt::from_limbs(LimbBuf::from_slice(&[3, 1]));
        a.mul_assign(&b);
        let expected: [Limb; 4] = [3, 1, 3, 1];
        assert_eq!(&a.m[..], &expected);
    }
}
