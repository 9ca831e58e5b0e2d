//! BigFloat definition, basic arithmetic, comparison, and conversions.

use crate::common::buf::LimbBuf;
use crate::common::consts::ONE;
use crate::common::consts::TWO;
use crate::common::util::bit_len;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Limb;
use crate::defs::Sign;
use crate::defs::DIV_ROUNDS;
use crate::defs::LIMB_BIT_SIZE;
use crate::defs::LIMB_SIGNIFICANT_BIT;
use crate::int::BigInt;
use core::cmp::Ordering;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Guard limbs used by the division.
const DIV_GUARD_LIMBS: usize = 2;

/// A floating point number with a mantissa of a bounded size.
///
/// The value of a number is `m * 2^(64 * (e - f))`, where `m` is a signed integer mantissa,
/// `e` is the position of the most significant limb of `|m|` relative to the radix point,
/// and `f` is the number of limbs of `|m|` below the most significant one.
/// For example, 1 is represented by `m = 1, e = 0`, and 0.5 by `m = 2^63, e = -1`.
///
/// The magnitude of the mantissa never exceeds the maximum width `w` limbs:
/// results of operations are truncated toward negative infinity to fit it.
/// Least significant zero limbs are never stored, and zero always has exponent 0.
#[derive(Debug, Clone)]
pub struct BigFloat {
    m: BigInt,
    e: Exponent,
    w: usize,
}

impl BigFloat {
    /// Builds a normalized number with the value `m * 2^(64 * low)` and the maximum width `w`.
    pub(crate) fn from_parts(mut m: BigInt, mut low: Exponent, w: usize) -> Self {
        let w = w.max(1);

        loop {
            if m.is_zero() {
                return BigFloat {
                    m: BigInt::new(),
                    e: 0,
                    w,
                };
            }

            low += m.m.trim_front(0) as Exponent;

            let n = m.magnitude_len();
            if n <= w {
                return BigFloat {
                    e: low + n as Exponent - 1,
                    m,
                    w,
                };
            }

            // truncation toward negative infinity may produce a power of the base, hence the loop
            let drop = n - w;
            m.shr_assign(drop * LIMB_BIT_SIZE);
            low += drop as Exponent;
        }
    }

    /// Returns a new number with the value of 0 and the maximum width `w` limbs.
    pub fn new(w: usize) -> Self {
        Self::from_parts(BigInt::new(), 0, w)
    }

    /// Returns a new number with the value of 1 and the maximum width `w` limbs.
    pub fn one(w: usize) -> Self {
        Self::from_parts(BigInt::one(), 0, w)
    }

    /// Returns a number with the value of `i` and the maximum width `w` limbs.
    /// Integers wider than `w` limbs are truncated.
    pub fn from_int(i: &BigInt, w: usize) -> Self {
        Self::from_parts(i.clone(), 0, w)
    }

    /// Builds a number from the bytes of a two's complement mantissa in the native byte order,
    /// the exponent `e` of its most significant limb, and the maximum width `w`.
    pub fn from_ne_bytes(bytes: &[u8], e: Exponent, w: usize) -> Self {
        let m = BigInt::from_ne_bytes(bytes);
        let low = e - (m.magnitude_len().max(1) as Exponent - 1);
        Self::from_parts(m, low, w)
    }

    /// Returns the bytes of the two's complement mantissa in the little-endian byte order.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.m.to_le_bytes()
    }

    /// Converts `f` to a number with the maximum width `w` limbs.
    ///
    /// ## Errors
    ///
    ///  - Domain: `f` is NaN or infinite.
    pub fn from_f64(f: f64, w: usize) -> Result<Self, Error> {
        if !f.is_finite() {
            return Err(Error::Domain);
        }

        let bits = f.to_bits();
        let exp = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & ((1u64 << 52) - 1);

        let (m, e2) = if exp == 0 {
            (frac, -1074)
        } else {
            (frac | (1u64 << 52), exp - 1075)
        };

        let m = BigInt::from_limb(m as Limb);
        let ret = Self::from_parts(m, 0, w.max(2)).scale_pow2(e2, w);

        Ok(if f.is_sign_negative() { ret.neg() } else { ret })
    }

    #[cfg(feature = "random")]
    /// Returns a random number with the maximum width `w` limbs and the exponent in the range
    /// from `exp_from` to `exp_to` inclusive. The sign can be positive and negative.
    /// The mantissa may have fewer than `w` limbs, and the result can be zero.
    /// Function does not follow any specific distribution law.
    /// The intended use of this function is for testing.
    pub fn random(w: usize, exp_from: Exponent, exp_to: Exponent) -> Self {
        let w = w.max(1);
        let m = BigInt::random(w);
        let e = if exp_from < exp_to {
            (rand::random::<i64>().unsigned_abs() % (exp_to - exp_from + 1) as u64) as Exponent
                + exp_from
        } else {
            exp_from
        };
        let low = e - (m.magnitude_len().max(1) as Exponent - 1);
        Self::from_parts(m, low, w)
    }

    /// Returns an approximation of `self` as f64.
    pub fn to_f64(&self) -> f64 {
        if self.m.is_zero() {
            return 0.0;
        }

        let mag = self.m.magnitude();
        let mut ret = 0.0;
        for (i, v) in mag.iter().rev().take(2).enumerate() {
            let e = self.e - i as Exponent;
            if e > 16 {
                ret = f64::INFINITY;
                break;
            }
            if e >= -17 {
                ret += *v as f64 * f64::powi(2.0, (e * LIMB_BIT_SIZE as Exponent) as i32);
            }
        }

        if self.is_negative() {
            -ret
        } else {
            ret
        }
    }

    /// Exponent of the least significant limb of the mantissa.
    #[inline]
    pub(crate) fn low(&self) -> Exponent {
        let n = self.m.magnitude_len();
        if n == 0 {
            0
        } else {
            self.e - (n as Exponent - 1)
        }
    }

    /// Returns the mantissa.
    #[inline]
    pub(crate) fn mantissa(&self) -> &BigInt {
        &self.m
    }

    /// Returns the exponent: the position of the most significant limb of the mantissa.
    #[inline]
    pub fn exponent(&self) -> Exponent {
        self.e
    }

    /// Returns the maximum width of the mantissa in limbs.
    #[inline]
    pub fn max_width(&self) -> usize {
        self.w
    }

    /// Sets the maximum width of the mantissa to `w` limbs truncating the mantissa if needed.
    pub fn set_max_width(&mut self, w: usize) {
        let low = self.low();
        let m = core::mem::take(&mut self.m);
        *self = Self::from_parts(m, low, w);
    }

    /// Returns a copy of `self` with the maximum width `w` limbs.
    pub fn with_max_width(&self, w: usize) -> Self {
        Self::from_parts(self.m.clone(), self.low(), w)
    }

    /// Returns true if `self` is 0.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.is_zero()
    }

    /// Returns true if `self` is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.m.is_negative()
    }

    /// Returns true if `self` is greater than 0.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.m.is_positive()
    }

    /// Returns the sign of `self`.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.m.sign()
    }

    /// Returns `self` with the sign reversed.
    pub fn neg(&self) -> Self {
        Self::from_parts(self.m.neg(), self.low(), self.w)
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    // Mantissa of `self` extended with zero limbs down to the exponent `low`.
    fn aligned(&self, low: Exponent) -> BigInt {
        let mut m = self.m.clone();
        m.m.insert_front((self.low() - low) as usize, 0);
        m
    }

    /// Returns the sum of `self` and `d2`. The result has the larger of the two maximum widths.
    pub fn add(&self, d2: &Self) -> Self {
        let w = self.w.max(d2.w);

        if d2.is_zero() {
            return self.with_max_width(w);
        }
        if self.is_zero() {
            return d2.with_max_width(w);
        }

        let (big, small) = if self.e >= d2.e {
            (self, d2)
        } else {
            (d2, self)
        };

        // An operand below the truncation point of the result affects it only with its sign.
        let gap_low = big.e - w as Exponent - 1;
        let sticky;
        let small = if small.e < gap_low {
            let m = if small.is_negative() {
                BigInt::one().neg()
            } else {
                BigInt::one()
            };
            sticky = Self::from_parts(m, gap_low, 1);
            &sticky
        } else {
            small
        };

        let low = big.low().min(small.low());
        let mut m = big.aligned(low);
        m.add_assign(&small.aligned(low));

        Self::from_parts(m, low, w)
    }

    /// Returns the difference of `self` and `d2`. The result has the larger of the two maximum widths.
    pub fn sub(&self, d2: &Self) -> Self {
        self.add(&d2.neg())
    }

    /// Returns the product of `self` and `d2`. The result has the larger of the two maximum widths.
    pub fn mul(&self, d2: &Self) -> Self {
        let w = self.w.max(d2.w);

        if self.is_zero() || d2.is_zero() {
            return Self::new(w);
        }

        Self::from_parts(self.m.mul(&d2.m), self.low() + d2.low(), w)
    }

    /// Returns `self` multiplied by `2^k`. The result has the maximum width `w`.
    pub(crate) fn scale_pow2(&self, k: i64, w: usize) -> Self {
        let q = k.div_euclid(LIMB_BIT_SIZE as i64);
        let r = k.rem_euclid(LIMB_BIT_SIZE as i64) as usize;
        Self::from_parts(self.m.shl(r), self.low() + q, w)
    }

    /// Returns `self` multiplied by `2^k`.
    pub fn mul_pow2(&self, k: i64) -> Self {
        self.scale_pow2(k, self.w)
    }

    // Bits of the integer part of |self|, possibly negative for numbers below 1/2.
    pub(crate) fn bit_exponent(&self) -> i64 {
        bit_len(&self.m.magnitude()) as i64 + self.low() * LIMB_BIT_SIZE as i64
    }

    /// Returns the quotient of `self` and `d2`. The result has the larger of the two maximum widths.
    ///
    /// The divisor is scaled by a power of two into [1/2, 1), and then both operands are repeatedly
    /// multiplied by `2 - divisor` with guard limbs. The estimate is then corrected against the exact
    /// remainder, and the quotient is truncated toward negative infinity like the results of `add` and `mul`.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `d2` is zero.
    pub fn div(&self, d2: &Self) -> Result<Self, Error> {
        if d2.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let w = self.w.max(d2.w);
        if self.is_zero() {
            return Ok(Self::new(w));
        }

        let ww = w + DIV_GUARD_LIMBS;
        let k = -d2.bit_exponent();

        let mut n = self.abs().scale_pow2(k, ww);
        let mut d = d2.abs().scale_pow2(k, ww);

        let one = Self::one(ww);
        let two = Self::from_int(&TWO, ww);
        let mut f = two.sub(&d);

        for _ in 0..DIV_ROUNDS {
            // a factor of exactly 1 is a fixed point of the iteration
            if f.cmp(&one) == Ordering::Equal {
                break;
            }
            n = n.mul(&f);
            d = d.mul(&f);
            f = two.sub(&d);
        }

        Ok(self.truncated_quotient(d2, &n, w))
    }

    // Quotient of `self` and `d2` truncated to `w` limbs given the estimate `q` of its absolute value.
    fn truncated_quotient(&self, d2: &Self, q: &Self, w: usize) -> Self {
        // |self| / |d2| * B^s has at least w limbs in its integer part
        let s = w as Exponent - q.e;

        let a = self.m.abs();
        let b = d2.m.abs();
        let sh = self.low() + s - d2.low();
        let (x, y) = if sh >= 0 {
            (a.shl(sh as usize * LIMB_BIT_SIZE), b)
        } else {
            (a, b.shl(sh.unsigned_abs() as usize * LIMB_BIT_SIZE))
        };

        let t = q.low() + s;
        let mut m = if t >= 0 {
            q.m.shl(t as usize * LIMB_BIT_SIZE)
        } else {
            q.m.shr(t.unsigned_abs() as usize * LIMB_BIT_SIZE)
        };

        // m = floor(x / y)
        let mut p = m.mul(&y);
        while p.cmp(&x) == Ordering::Greater {
            m.sub_assign(&ONE);
            p.sub_assign(&y);
        }
        let mut rem = x.sub(&p);
        while rem.cmp(&y) != Ordering::Less {
            m.add_assign(&ONE);
            rem.sub_assign(&y);
        }

        if self.is_negative() != d2.is_negative() {
            m.neg_assign();
            if !rem.is_zero() {
                m.sub_assign(&ONE);
            }
        }

        Self::from_parts(m, -s, w)
    }

    /// Compares `self` to `d2`.
    pub fn cmp(&self, d2: &Self) -> Ordering {
        let s1 = self.sign();
        let s2 = d2.sign();

        if s1 != s2 {
            return s1.to_int().cmp(&s2.to_int());
        }

        if s1 == Sign::Zero {
            return Ordering::Equal;
        }

        if self.e != d2.e {
            let ord = self.e.cmp(&d2.e);
            return if s1 == Sign::Neg { ord.reverse() } else { ord };
        }

        let low = self.low().min(d2.low());
        self.aligned(low).cmp(&d2.aligned(low))
    }

    /// Returns the integer part of `self`, i.e. `self` rounded toward zero.
    pub fn to_int(&self) -> BigInt {
        let low = self.low();
        if low >= 0 {
            self.m.shl(low as usize * LIMB_BIT_SIZE)
        } else {
            let i = self.m.abs().shr(low.unsigned_abs() as usize * LIMB_BIT_SIZE);
            if self.is_negative() {
                i.neg()
            } else {
                i
            }
        }
    }

    /// Returns the largest integer not greater than `self`.
    pub fn floor(&self) -> BigInt {
        let low = self.low();
        if low >= 0 {
            self.m.shl(low as usize * LIMB_BIT_SIZE)
        } else {
            self.m.shr(low.unsigned_abs() as usize * LIMB_BIT_SIZE)
        }
    }

    /// Returns `self` rounded to the nearest integer. Halves are rounded away from zero.
    pub fn round_to_int(&self) -> BigInt {
        let a = self.abs();
        let half = Self::from_parts(BigInt::from_limb(LIMB_SIGNIFICANT_BIT), -1, 1);
        let w = a.w.max((a.e.max(0) + 2) as usize);
        let i = a.with_max_width(w).add(&half).to_int();
        if self.is_negative() {
            i.neg()
        } else {
            i
        }
    }
}
