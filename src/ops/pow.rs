//! Exponentiation and factorial.

use crate::common::consts::ONE;
use crate::defs::Error;
use crate::int::BigInt;
use crate::num::BigFloat;

impl BigFloat {
    /// Computes `self` to the power of an integer `k` by repeated multiplication.
    /// Every intermediate product is truncated to the maximum width of `self`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `k` is negative.
    pub fn pow(&self, k: i64) -> Result<Self, Error> {
        if k < 0 {
            return Err(Error::Domain);
        }

        let mut ret = Self::one(self.max_width());
        for _ in 0..k {
            ret = ret.mul(self);
        }

        Ok(ret)
    }

    /// Computes `n!` with the maximum width `w` limbs.
    pub fn factorial(n: u64, w: usize) -> Self {
        let mut ret = Self::one(w);
        for i in 2..=n {
            ret = ret.mul(&Self::from_int(&BigInt::from(i), w));
        }
        ret
    }
}

impl BigInt {
    /// Computes `self` to the power of `k` by squaring.
    pub fn pow(&self, mut k: u32) -> Self {
        let mut ret = ONE.clone();
        let mut x = self.clone();

        while k > 0 {
            if k & 1 != 0 {
                ret.mul_assign(&x);
            }
            k >>= 1;
            if k > 0 {
                x = x.mul(&x);
            }
        }

        ret
    }

    /// Computes `n!`.
    pub fn factorial(n: u64) -> Self {
        let mut ret = ONE.clone();
        for i in 2..=n {
            ret.mul_assign(&BigInt::from(i));
        }
        ret
    }
}
