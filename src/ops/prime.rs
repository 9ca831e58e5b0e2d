//! Primality testing by trial division.

use crate::common::consts::ONE;
use crate::common::consts::THREE;
use crate::common::consts::TWO;
use crate::defs::Limb;
use crate::int::BigInt;
use core::cmp::Ordering;

impl BigInt {
    // True if `d` divides `self`; `d` is positive.
    fn is_divisible_by(&self, d: &BigInt) -> bool {
        match Limb::try_from(d) {
            Ok(v) => self.div_rem_limb(v).1 == 0,
            Err(_) => matches!(self.rem(d), Ok(r) if r.is_zero()),
        }
    }

    /// Returns true if `self` is a prime number.
    /// Odd divisors are tried up to the integer square root of `self`.
    pub fn is_prime(&self) -> bool {
        match self.cmp(&TWO) {
            Ordering::Less => return false,
            Ordering::Equal => return true,
            Ordering::Greater => {}
        }

        if !self.is_odd() {
            return false;
        }

        let limit = match self.isqrt() {
            Ok(v) => v,
            Err(_) => return false,
        };

        let mut d = THREE.clone();
        while d.cmp(&limit) != Ordering::Greater {
            if self.is_divisible_by(&d) {
                return false;
            }
            d.add_assign(&TWO);
        }

        true
    }

    /// Returns the smallest prime number greater than `self`.
    pub fn find_next_prime(&self) -> Self {
        if self.cmp(&TWO) == Ordering::Less {
            return TWO.clone();
        }

        let mut n = self.add(&ONE);
        if !n.is_odd() {
            n.add_assign(&ONE);
        }
        while !n.is_prime() {
            n.add_assign(&TWO);
        }

        n
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_is_prime() {
        let primes: [i64; 10] = [2, 3, 5, 7, 11, 13, 97, 7919, 104729, 2147483647];
        for p in primes {
            assert!(BigInt::from(p).is_prime(), "{}", p);
        }

        let composites: [i64; 9] = [-7, 0, 1, 4, 9, 15, 7917, 104731 * 3, 2147483647 * 3];
        for c in composites {
            assert!(!BigInt::from(c).is_prime(), "{}", c);
        }

        assert!(BigInt::from(4294967291u64).is_prime());
    }

    #[test]
    fn test_find_next_prime() {
        assert_eq!(BigInt::from(15).find_next_prime(), BigInt::from(17));
        assert_eq!(BigInt::from(0).find_next_prime(), BigInt::from(2));
        assert_eq!(BigInt::from(-20).find_next_prime(), BigInt::from(2));
        assert_eq!(BigInt::from(2).find_next_prime(), BigInt::from(3));
        assert_eq!(BigInt::from(13).find_next_prime(), BigInt::from(17));
        assert_eq!(BigInt::from(7907).find_next_prime(), BigInt::from(7919));
    }
}
