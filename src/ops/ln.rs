//! Natural logarithm.

use crate::common::consts::ONE;
use crate::defs::Error;
use crate::defs::LN_TERMS;
use crate::int::BigInt;
use crate::num::BigFloat;
use crate::ops::consts::Consts;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;
use core::cmp::Ordering;

/// Argument check of the logarithm series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LnMode {
    /// The argument must belong to [1/2, 1].
    Strict,

    /// Any positive argument is accepted. Convergence is slow far from 1.
    Approximate,
}

// Coefficients 1/(2k+1).
struct AtanhPolycoeffGen {
    acc: BigInt,
    one: BigFloat,
    val: BigFloat,
    first: bool,
}

impl AtanhPolycoeffGen {
    fn new(w: usize) -> Self {
        AtanhPolycoeffGen {
            acc: BigInt::one(),
            one: BigFloat::one(w),
            val: BigFloat::one(w),
            first: true,
        }
    }
}

impl PolycoeffGen for AtanhPolycoeffGen {
    fn next(&mut self) -> Result<&BigFloat, Error> {
        if self.first {
            self.first = false;
        } else {
            self.acc.add_assign(&ONE);
            self.acc.add_assign(&ONE);
            let d = BigFloat::from_int(&self.acc, self.one.max_width());
            self.val = self.one.div(&d)?;
        }
        Ok(&self.val)
    }
}

impl BigFloat {
    /// Computes the natural logarithm of `self` with the series
    /// `ln(x) = 2 * (z + z^3/3 + z^5/5 + ...)`, where `z = (x - 1) / (x + 1)`.
    /// In the `Strict` mode the argument must be in [1/2, 1].
    ///
    /// The number of terms is fixed, so for `|z| <= 1/3` the result is accurate to about 320 bits
    /// (5 limbs) whatever the width is. Wider results carry no additional correct bits.
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is not positive, or it is outside of [1/2, 1] in the `Strict` mode.
    pub fn ln_series(&self, mode: LnMode) -> Result<Self, Error> {
        if !self.is_positive() {
            return Err(Error::Domain);
        }

        let w = self.max_width();
        let one = Self::one(w);

        if mode == LnMode::Strict
            && (self.cmp(&one) == Ordering::Greater
                || self.cmp(&one.mul_pow2(-1)) == Ordering::Less)
        {
            return Err(Error::Domain);
        }

        let z = self.sub(&one).div(&self.add(&one))?;
        let z2 = z.mul(&z);

        let mut polycoeff_gen = AtanhPolycoeffGen::new(w);
        let ret = series_run(&z, &z2, LN_TERMS, &mut polycoeff_gen)?;

        Ok(ret.mul_pow2(1))
    }

    /// Computes the natural logarithm of `self`.
    /// The argument is reduced into [1/2, 1] by a power of two `2^k`,
    /// and then `k * ln(2)` is added to the logarithm of the reduced argument.
    /// This function requires constants cache `cc` for computing the result.
    /// The accuracy is bounded by the series, see [`BigFloat::ln_series`].
    ///
    /// ## Errors
    ///
    ///  - Domain: `self` is not positive.
    pub fn ln(&self, cc: &mut Consts) -> Result<Self, Error> {
        if !self.is_positive() {
            return Err(Error::Domain);
        }

        let w = self.max_width();
        let x = self.with_max_width(w + 1);
        let one = Self::one(w + 1);

        let k = if x.cmp(&one) == Ordering::Greater || x.cmp(&one.mul_pow2(-1)) == Ordering::Less {
            x.bit_exponent()
        } else {
            0
        };

        let mut ret = x.mul_pow2(-k).ln_series(LnMode::Strict)?;

        if k != 0 {
            let ln2 = cc.ln_2(w + 1)?;
            let kf = Self::from_int(&BigInt::from(k), w + 1);
            ret = ret.add(&ln2.mul(&kf));
        }

        ret.set_max_width(w);

        Ok(ret)
    }
}
