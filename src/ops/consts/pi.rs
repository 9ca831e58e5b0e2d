//! π number

use crate::common::consts::TWO;
use crate::defs::Error;
use crate::defs::LIMB_BIT_SIZE;
use crate::int::BigInt;
use crate::num::BigFloat;

/// Holds the most precise value of pi computed so far.
#[derive(Debug, Default)]
pub struct PiCache {
    val: Option<BigFloat>,
}

impl PiCache {
    pub fn new() -> Self {
        PiCache { val: None }
    }

    /// Return value of pi with the maximum width `w`.
    pub fn for_width(&mut self, w: usize) -> Result<BigFloat, Error> {
        if let Some(v) = &self.val {
            if v.max_width() >= w {
                return Ok(v.with_max_width(w));
            }
        }

        // decimal digits carried by w + 1 limbs
        let digits = (w + 1) * LIMB_BIT_SIZE * 30103 / 100000;
        let v = BigFloat::pi(digits)?;
        let ret = v.with_max_width(w);
        self.val = Some(v);

        Ok(ret)
    }
}

impl BigFloat {
    /// Computes pi with at least `digits` correct decimal digits using the Ramanujan series
    /// `1/pi = 2*sqrt(2)/9801 * sum((4k)! * (1103 + 26390k) / ((k!)^4 * 396^(4k)))`.
    /// Every term adds about 8 digits, so `digits / 8 + 1` terms are summed.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: internal computation failed.
    pub fn pi(digits: usize) -> Result<Self, Error> {
        // 3.33 bits per digit and a guard limb
        let w = (digits * 10 / 3 + LIMB_BIT_SIZE - 1) / LIMB_BIT_SIZE + 2;
        let terms = digits / 8 + 1;

        let mut sum = Self::new(w);

        let mut f4k = BigInt::one();
        let mut fk = BigInt::one();
        let mut p396 = BigInt::one();
        let p396_4 = BigInt::from(396u64 * 396 * 396 * 396);

        for k in 0..terms as u64 {
            if k > 0 {
                for j in 4 * k - 3..=4 * k {
                    f4k.mul_assign(&BigInt::from(j));
                }
                fk.mul_assign(&BigInt::from(k));
                p396.mul_assign(&p396_4);
            }

            let num = f4k.mul(&BigInt::from(1103 + 26390 * k));
            let fk2 = fk.mul(&fk);
            let den = fk2.mul(&fk2).mul(&p396);

            let t = Self::from_int(&num, w).div(&Self::from_int(&den, w))?;
            sum = sum.add(&t);
        }

        let two = Self::from_int(&TWO, w);
        let sqrt2 = two.sqrt(&Self::new(w))?;
        let c = sqrt2.mul_pow2(1).div(&Self::from_int(&BigInt::from(9801), w))?;

        Self::one(w).div(&sum.mul(&c))
    }
}
