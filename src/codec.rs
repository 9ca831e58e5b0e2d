//! Conversion between decimal digits and limbs.
//!
//! Digits are values 0..=9 ordered from the most significant one.

use crate::common::buf::LimbBuf;
use crate::common::util::div_by_limb;
use crate::common::util::is_zero_slice;
use crate::common::util::mul_by_limb;
use crate::common::util::significant_len;
use crate::defs::Limb;
use crate::defs::LIMB_BIT_SIZE;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Limbs of the fractional part of a decimal number.
#[derive(Debug)]
pub struct FracLimbs {
    /// Emitted limbs, least significant first.
    pub limbs: LimbBuf,

    /// Number of all-zero limbs dropped right after the binary point.
    pub skipped: usize,

    /// Rounding carried out of the most significant emitted limb into the integer part.
    pub carry: bool,
}

// Remove most significant zeroes.
fn strip_leading_zeroes(d: &mut Vec<u8>) {
    let n = d.iter().take_while(|v| **v == 0).count();
    d.drain(..n);
}

// Remove least significant zeroes of a fraction.
fn strip_trailing_zeroes(d: &mut Vec<u8>) {
    while let Some(0) = d.last() {
        d.pop();
    }
}

// Divide a decimal integer by two.
fn halve(d: &mut Vec<u8>) {
    let mut borrow = 0;
    for v in d.iter_mut() {
        let x = borrow * 10 + *v;
        *v = x / 2;
        borrow = x % 2;
    }
    strip_leading_zeroes(d);
}

// Multiply a decimal fraction by two and return the integer carry.
fn double(d: &mut Vec<u8>) -> Limb {
    let mut carry = 0;
    for v in d.iter_mut().rev() {
        let x = *v * 2 + carry;
        *v = x % 10;
        carry = x / 10;
    }
    strip_trailing_zeroes(d);
    carry as Limb
}

/// Converts decimal digits of a non-negative integer into an unsigned number.
pub fn int_digits_to_limbs(digits: &[u8]) -> LimbBuf {
    let mut dec = digits.to_vec();
    strip_leading_zeroes(&mut dec);

    let mut ret = LimbBuf::new();
    let mut cur: Limb = 0;
    let mut pos = 0;

    while let Some(last) = dec.last() {
        cur |= ((*last & 1) as Limb) << pos;
        pos += 1;
        if pos == LIMB_BIT_SIZE {
            ret.push_back(cur);
            cur = 0;
            pos = 0;
        }
        halve(&mut dec);
    }

    if pos > 0 {
        ret.push_back(cur);
    }

    ret
}

/// Converts decimal digits of a fraction into at most `max_limbs` limbs.
/// While `skip_leading` is set, all-zero limbs preceding the first non-zero limb are dropped
/// without consuming the width. The result is rounded half up.
pub fn frac_digits_to_limbs(digits: &[u8], max_limbs: usize, skip_leading: bool) -> FracLimbs {
    let mut dec = digits.to_vec();
    strip_trailing_zeroes(&mut dec);

    // most significant first
    let mut emitted: Vec<Limb> = Vec::new();
    let mut skipped = 0;

    while emitted.len() < max_limbs && !dec.is_empty() {
        let mut limb = 0;
        for _ in 0..LIMB_BIT_SIZE {
            limb = (limb << 1) | double(&mut dec);
        }
        if limb == 0 && emitted.is_empty() && skip_leading {
            skipped += 1;
        } else {
            emitted.push(limb);
        }
    }

    let mut carry = false;
    if !dec.is_empty() && double(&mut dec) != 0 {
        carry = true;
        for v in emitted.iter_mut().rev() {
            let (s, o) = v.overflowing_add(1);
            *v = s;
            if !o {
                carry = false;
                break;
            }
        }
    }

    FracLimbs {
        limbs: emitted.into_iter().rev().collect(),
        skipped,
        carry,
    }
}

/// Converts an unsigned number into decimal digits. Zero gives a single digit 0.
pub fn limbs_to_decimal(m: &[Limb]) -> Vec<u8> {
    let mut m: LimbBuf = LimbBuf::from_slice(&m[..significant_len(m)]);
    let mut ret = Vec::new();

    while !m.is_empty() {
        ret.push(div_by_limb(&mut m, 10) as u8);
        m.trim_back(0);
    }

    if ret.is_empty() {
        ret.push(0);
    }

    ret.reverse();
    ret
}

/// Converts the fraction `f / 2^(64*f.len())` into `n` decimal digits.
/// Returns the digits and true if the discarded remainder is at least one half of the last digit.
pub fn frac_limbs_to_decimal(f: &[Limb], n: usize) -> (Vec<u8>, bool) {
    let mut f = LimbBuf::from_slice(f);
    let mut ret = Vec::with_capacity(n);

    for _ in 0..n {
        if is_zero_slice(&f) {
            ret.push(0);
        } else {
            ret.push(mul_by_limb(&mut f, 10) as u8);
        }
    }

    let round_up = f.last().map_or(false, |v| v >> (LIMB_BIT_SIZE - 1) != 0);

    (ret, round_up)
}

/// Adds one to the last decimal digit of `d`. Returns true if the carry propagated out of `d`.
pub fn increment_digits(d: &mut [u8]) -> bool {
    for v in d.iter_mut().rev() {
        if *v == 9 {
            *v = 0;
        } else {
            *v += 1;
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::LIMB_MAX;
    use crate::defs::LIMB_SIGNIFICANT_BIT;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_int_digits() {
        assert!(int_digits_to_limbs(&digits("0")).is_empty());
        assert_eq!(&int_digits_to_limbs(&digits("000123"))[..], &[123]);
        assert_eq!(
            &int_digits_to_limbs(&digits("18446744073709551615"))[..],
            &[LIMB_MAX]
        );
        assert_eq!(
            &int_digits_to_limbs(&digits("18446744073709551616"))[..],
            &[0, 1]
        );
        assert_eq!(
            &int_digits_to_limbs(&digits("340282366920938463463374607431768211457"))[..],
            &[1, 0, 1]
        );

        assert_eq!(limbs_to_decimal(&[0, 1]), digits("18446744073709551616"));
        assert_eq!(limbs_to_decimal(&[]), digits("0"));
        assert_eq!(limbs_to_decimal(&[7, 0, 0]), digits("7"));
    }

    #[test]
    fn test_frac_digits() {
        let f = frac_digits_to_limbs(&digits("5"), 2, false);
        assert_eq!(&f.limbs[..], &[LIMB_SIGNIFICANT_BIT]);
        assert_eq!(f.skipped, 0);
        assert!(!f.carry);

        let f = frac_digits_to_limbs(&digits("8125"), 2, false);
        assert_eq!(&f.limbs[..], &[0xD0 << (LIMB_BIT_SIZE - 8)]);

        // zero fraction
        let f = frac_digits_to_limbs(&digits("000"), 2, true);
        assert!(f.limbs.is_empty());
        assert_eq!(f.skipped, 0);

        // 2^-64 * 0.5: one leading zero limb is dropped
        let f = frac_digits_to_limbs(&digits("00000000000000000002710505431213761085018632002174854278564453125"), 1, true);
        assert_eq!(f.skipped, 1);
        assert_eq!(&f.limbs[..], &[LIMB_SIGNIFICANT_BIT]);

        // same value without skipping: the rounding bit carries into the zero limb
        let f = frac_digits_to_limbs(&digits("00000000000000000002710505431213761085018632002174854278564453125"), 1, false);
        assert_eq!(f.skipped, 0);
        assert_eq!(&f.limbs[..], &[1]);
        assert!(!f.carry);

        // 0.99999... rounds up into the integer part
        let f = frac_digits_to_limbs(&digits("99999999999999999999999999999"), 1, false);
        assert_eq!(&f.limbs[..], &[0]);
        assert!(f.carry);

        // no width left: only the rounding bit counts
        let f = frac_digits_to_limbs(&digits("5"), 0, false);
        assert!(f.limbs.is_empty());
        assert!(f.carry);
    }

    #[test]
    fn test_frac_to_decimal() {
        let (d, r) = frac_limbs_to_decimal(&[LIMB_SIGNIFICANT_BIT], 3);
        assert_eq!(d, digits("500"));
        assert!(!r);

        // 0.8125 to one digit: 0.8, remainder 0.0125 < 0.05
        let (d, r) = frac_limbs_to_decimal(&[0xD0 << (LIMB_BIT_SIZE - 8)], 1);
        assert_eq!(d, digits("8"));
        assert!(!r);

        // 0.8125 to three digits: 0.812, remainder 0.5 of the last digit
        let (d, r) = frac_limbs_to_decimal(&[0xD0 << (LIMB_BIT_SIZE - 8)], 3);
        assert_eq!(d, digits("812"));
        assert!(r);

        let mut d = digits("199");
        assert!(!increment_digits(&mut d));
        assert_eq!(d, digits("200"));
        let mut d = digits("99");
        assert!(increment_digits(&mut d));
        assert_eq!(d, digits("00"));
    }
}
