//! Read-only access to the internal representation of numbers.
//! Intended for tests and debugging.

use crate::common::buf::LimbBuf;
use crate::defs::Exponent;
use crate::defs::Limb;
use crate::defs::Sign;
use crate::int::BigInt;
use crate::num::BigFloat;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Returns the two's complement limbs of `n`, least significant first.
pub fn limbs(n: &BigInt) -> &[Limb] {
    &n.m
}

/// Returns true if the most significant stored limb of `n` has its sign bit set.
pub fn is_negative(n: &BigInt) -> bool {
    n.is_negative()
}

/// Returns the exponent of `f`: the position of the most significant limb of the magnitude.
pub fn exponent(f: &BigFloat) -> Exponent {
    f.exponent()
}

/// Returns the two's complement limbs of the mantissa of `f`, least significant first.
pub fn mantissa_limbs(f: &BigFloat) -> &[Limb] {
    &f.mantissa().m
}

/// Returns the limbs of the absolute value of the mantissa of `f`, least significant first.
pub fn magnitude_limbs(f: &BigFloat) -> Vec<Limb> {
    f.mantissa().magnitude().to_vec()
}

/// Returns the mantissa of `f`.
pub fn mantissa(f: &BigFloat) -> BigInt {
    f.mantissa().clone()
}

/// Builds a number from the limbs of the absolute value of the mantissa `m`, the sign `s`,
/// the exponent `e` of the most significant limb of `m`, and the maximum width `w`.
/// The result is normalized.
pub fn from_raw_parts(m: &[Limb], s: Sign, e: Exponent, w: usize) -> BigFloat {
    let n = BigInt::from_magnitude(LimbBuf::from_slice(m), s == Sign::Neg);
    let low = e - (m.len().max(1) as Exponent - 1);
    BigFloat::from_parts(n, low, w)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::defs::LIMB_MAX;

    #[test]
    fn test_inspect() {
        let f = from_raw_parts(&[0, 0xE8 << 56], Sign::Pos, -1, 2);
        assert_eq!(magnitude_limbs(&f), [0xE8 << 56]);
        assert_eq!(mantissa_limbs(&f), &[0xE8 << 56, 0]);
        assert_eq!(exponent(&f), -1);
        assert!(!is_negative(&mantissa(&f)));

        let f = from_raw_parts(&[1], Sign::Neg, 0, 2);
        assert_eq!(mantissa_limbs(&f), &[LIMB_MAX]);
        assert_eq!(limbs(&mantissa(&f)), &[LIMB_MAX]);
        assert!(is_negative(&mantissa(&f)));
    }
}
