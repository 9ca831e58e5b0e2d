//! BigInt definition, addition, negation, shifts, and comparison.

use crate::common::buf::LimbBuf;
use crate::common::util::add_carry;
use crate::defs::Limb;
use crate::defs::Sign;
use crate::defs::LIMB_BIT_SIZE;
use crate::defs::LIMB_MAX;
use crate::defs::LIMB_SIGNIFICANT_BIT;
use core::cmp::Ordering;

/// Fill value implied by the most significant limb `hi`.
#[inline]
pub(crate) fn fill_for(hi: Option<Limb>) -> Limb {
    match hi {
        Some(v) if v & LIMB_SIGNIFICANT_BIT != 0 => LIMB_MAX,
        _ => 0,
    }
}

/// An integer of an arbitrary size.
///
/// Limbs are stored least significant first and interpreted as a two's complement number.
/// Every limb past the stored ones is implicitly equal to the fill value:
/// all zero bits for non-negative numbers and all one bits for negative numbers.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq)]
pub struct BigInt {
    pub(crate) m: LimbBuf,
}

impl BigInt {
    /// Returns a new number with the value of 0.
    pub fn new() -> Self {
        BigInt { m: LimbBuf::new() }
    }

    /// Returns a new number with the value of 1.
    pub fn one() -> Self {
        Self::from_limb(1)
    }

    /// Returns a non-negative number with the value `d`.
    pub fn from_limb(d: Limb) -> Self {
        let mut ret = BigInt {
            m: LimbBuf::from_slice(&[d, 0]),
        };
        ret.normalize();
        ret
    }

    /// Builds a number from two's complement limbs, least significant first.
    pub(crate) fn from_limbs(m: LimbBuf) -> Self {
        let mut ret = BigInt { m };
        ret.normalize();
        ret
    }

    /// Builds a number from an unsigned magnitude and a sign.
    pub(crate) fn from_magnitude(mut m: LimbBuf, negative: bool) -> Self {
        m.push_back(0);
        let mut ret = BigInt { m };
        ret.normalize();
        if negative {
            ret.neg_assign();
        }
        ret
    }

    /// The implicit value of every limb past the stored ones.
    #[inline]
    pub(crate) fn fill(&self) -> Limb {
        fill_for(self.m.last())
    }

    /// Limb `i` of the infinite two's complement representation.
    #[inline]
    pub(crate) fn limb(&self, i: usize) -> Limb {
        self.m.get_or(i, self.fill())
    }

    /// Number of stored limbs.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.m.len()
    }

    /// Remove redundant most significant fill limbs.
    pub(crate) fn normalize(&mut self) {
        let fill = self.fill();
        self.m.trim_back(fill);
        if fill_for(self.m.last()) != fill {
            // the remaining top limb would flip the sign, so one fill limb stays
            self.m.push_back(fill);
        }
    }

    /// Returns true if `self` is 0.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m.iter().all(|v| *v == 0)
    }

    /// Returns true if `self` is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.fill() != 0
    }

    /// Returns true if `self` is greater than 0.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Returns true if `self` is odd.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.limb(0) & 1 != 0
    }

    /// Returns the sign of `self`.
    pub fn sign(&self) -> Sign {
        if self.is_negative() {
            Sign::Neg
        } else if self.is_zero() {
            Sign::Zero
        } else {
            Sign::Pos
        }
    }

    /// Returns -1, 0, or 1 depending on the sign of `self`.
    pub fn signum(&self) -> Self {
        match self.sign() {
            Sign::Neg => BigInt::from_limbs(LimbBuf::from_slice(&[LIMB_MAX])),
            Sign::Zero => BigInt::new(),
            Sign::Pos => BigInt::one(),
        }
    }

    /// Unsigned magnitude of `self` without most significant zero limbs.
    pub(crate) fn magnitude(&self) -> LimbBuf {
        let mut m = if self.is_negative() {
            let mut n = self.clone();
            n.neg_assign();
            n.m
        } else {
            self.m.clone()
        };
        m.trim_back(0);
        m
    }

    /// Number of limbs of the magnitude of `self`.
    pub(crate) fn magnitude_len(&self) -> usize {
        self.magnitude().len()
    }

    /// Adds `d2` to `self` in place.
    pub fn add_assign(&mut self, d2: &Self) {
        let f1 = self.fill();
        let f2 = d2.fill();
        let n = self.len().max(d2.len());

        self.m.resize(n, f1);

        let mut c = 0;
        for i in 0..n {
            let a = self.m[i];
            c = add_carry(a, d2.m.get_or(i, f2), c, &mut self.m[i]);
        }

        // the limb past the longest operand decides the sign of the result.
        let mut overflow = 0;
        add_carry(f1, f2, c, &mut overflow);
        self.m.push_back(overflow);

        self.normalize();
    }

    /// Subtracts `d2` from `self` in place.
    pub fn sub_assign(&mut self, d2: &Self) {
        let mut n = d2.clone();
        n.neg_assign();
        self.add_assign(&n);
    }

    /// Changes the sign of `self` in place.
    pub fn neg_assign(&mut self) {
        if self.m.is_empty() {
            return;
        }
        for v in self.m.iter_mut() {
            *v = !*v;
        }
        self.add_assign(&BigInt::one());
    }

    /// Shifts `self` left by `n` bits in place.
    pub fn shl_assign(&mut self, n: usize) {
        if self.is_zero() {
            self.m.truncate(0);
            return;
        }

        let idx = n / LIMB_BIT_SIZE;
        let bits = n % LIMB_BIT_SIZE;

        if bits > 0 {
            let fill = self.fill();
            let mut prev = 0;
            for v in self.m.iter_mut() {
                let cur = *v;
                *v = (cur << bits) | (prev >> (LIMB_BIT_SIZE - bits));
                prev = cur;
            }
            let overflow = (fill << bits) | (prev >> (LIMB_BIT_SIZE - bits));
            self.m.push_back(overflow);
            self.normalize();
        }

        self.m.insert_front(idx, 0);
    }

    /// Shifts `self` right by `n` bits in place. The result is rounded toward negative infinity.
    pub fn shr_assign(&mut self, n: usize) {
        let fill = self.fill();
        let idx = n / LIMB_BIT_SIZE;
        let bits = n % LIMB_BIT_SIZE;

        if idx >= self.len() {
            self.m.truncate(0);
            if fill != 0 {
                self.m.push_back(fill);
            }
            return;
        }

        self.m.remove_front(idx);

        if bits > 0 {
            let l = self.len();
            for i in 0..l {
                let hi = self.m.get_or(i + 1, fill);
                self.m[i] = (self.m[i] >> bits) | (hi << (LIMB_BIT_SIZE - bits));
            }
        }

        self.normalize();
    }

    /// Compares `self` to `d2`.
    pub fn cmp(&self, d2: &Self) -> Ordering {
        let neg1 = self.is_negative();
        let neg2 = d2.is_negative();

        if neg1 != neg2 {
            return if neg1 {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        if self.len() != d2.len() {
            let ord = self.len().cmp(&d2.len());
            return if neg1 {
                ord.reverse()
            } else {
                ord
            };
        }

        for (a, b) in self.m.iter().rev().zip(d2.m.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }

        Ordering::Equal
    }

    /// Returns the sum of `self` and `d2`.
    pub fn add(&self, d2: &Self) -> Self {
        let mut ret = self.clone();
        ret.add_assign(d2);
        ret
    }

    /// Returns the difference of `self` and `d2`.
    pub fn sub(&self, d2: &Self) -> Self {
        let mut ret = self.clone();
        ret.sub_assign(d2);
        ret
    }

    /// Returns `self` with the sign reversed.
    pub fn neg(&self) -> Self {
        let mut ret = self.clone();
        ret.neg_assign();
        ret
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self.clone()
        }
    }

    /// Returns `self` shifted left by `n` bits.
    pub fn shl(&self, n: usize) -> Self {
        let mut ret = self.clone();
        ret.shl_assign(n);
        ret
    }

    /// Returns `self` shifted right by `n` bits, rounded toward negative infinity.
    pub fn shr(&self, n: usize) -> Self {
        let mut ret = self.clone();
        ret.shr_assign(n);
        ret
    }
}
