//! Sine.

use crate::defs::Error;
use crate::defs::SIN_TERMS;
use crate::int::BigInt;
use crate::num::BigFloat;
use crate::ops::consts::Consts;
use crate::ops::series::series_run;
use crate::ops::series::PolycoeffGen;

// Coefficients (-1)^k / (2k+1)!, each one is derived from the previous one.
struct SinPolycoeffGen {
    k: u64,
    val: BigFloat,
}

impl SinPolycoeffGen {
    fn new(w: usize) -> Self {
        SinPolycoeffGen {
            k: 0,
            val: BigFloat::one(w),
        }
    }
}

impl PolycoeffGen for SinPolycoeffGen {
    fn next(&mut self) -> Result<&BigFloat, Error> {
        if self.k > 0 {
            let m = BigInt::from((2 * self.k) * (2 * self.k + 1));
            let w = self.val.max_width();
            self.val = self.val.div(&BigFloat::from_int(&m, w))?.neg();
        }
        self.k += 1;
        Ok(&self.val)
    }
}

impl BigFloat {
    /// Computes the sine of a number.
    /// The argument is reduced by the nearest multiple of pi, and the Taylor series
    /// is applied to the remainder. The precision of the reduction degrades for very large arguments.
    /// The series has a fixed number of terms, so the result is accurate to about 340 bits (5 limbs)
    /// at most, even for wider maximum widths.
    /// This function requires constants cache `cc` for computing the result.
    pub fn sin(&self, cc: &mut Consts) -> Result<Self, Error> {
        let w = self.max_width();

        if self.is_zero() {
            return Ok(Self::new(w));
        }

        let ww = w + 1;
        let x = self.with_max_width(ww);
        let pi = cc.pi(ww)?;

        let n = x.div(&pi)?.round_to_int();
        let mut r = x.sub(&pi.mul(&Self::from_int(&n, ww)));

        // sin(x - n*pi) = (-1)^n * sin(x)
        if n.is_odd() {
            r = r.neg();
        }

        let r2 = r.mul(&r);
        let mut polycoeff_gen = SinPolycoeffGen::new(ww);
        let mut ret = series_run(&r, &r2, SIN_TERMS, &mut polycoeff_gen)?;

        ret.set_max_width(w);

        Ok(ret)
    }
}
