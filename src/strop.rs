//! Conversion of numbers to and from decimal strings.

use crate::codec::frac_digits_to_limbs;
use crate::codec::frac_limbs_to_decimal;
use crate::codec::increment_digits;
use crate::codec::int_digits_to_limbs;
use crate::codec::limbs_to_decimal;
use crate::common::buf::LimbBuf;
use crate::defs::Error;
use crate::defs::Exponent;
use crate::defs::Sign;
use crate::defs::LIMB_BIT_SIZE;
use crate::int::BigInt;
use crate::num::BigFloat;
use crate::parser::parse_frac;
use crate::parser::parse_int;

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

fn push_digits(s: &mut String, d: &[u8]) {
    s.extend(d.iter().map(|v| (b'0' + *v) as char));
}

impl BigInt {
    /// Parses a decimal integer: an optional minus sign followed by digits without leading zeroes.
    ///
    /// ## Errors
    ///
    ///  - Format: the string is not a valid integer.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let ps = parse_int(s);
        if !ps.is_valid() {
            return Err(Error::Format);
        }

        let (sign, int_digits, _) = ps.raw_parts();
        let m = int_digits_to_limbs(int_digits);

        Ok(BigInt::from_magnitude(m, sign == Sign::Neg))
    }

    /// Returns the decimal representation of `self`.
    pub fn format(&self) -> String {
        let digits = limbs_to_decimal(&self.magnitude());

        let mut ret = String::with_capacity(digits.len() + 1);
        if self.is_negative() {
            ret.push('-');
        }
        push_digits(&mut ret, &digits);

        ret
    }
}

impl BigFloat {
    /// Parses a decimal number with a fractional part, e.g. "-12.375",
    /// into a number with the maximum width `w` limbs.
    /// The fractional part is rounded half up to the limbs left after the integer part.
    ///
    /// ## Errors
    ///
    ///  - Format: the string is not a valid number.
    ///  - PrecisionExceeded: the integer part takes more than `w` limbs.
    pub fn parse(s: &str, w: usize) -> Result<Self, Error> {
        let ps = parse_frac(s);
        if !ps.is_valid() {
            return Err(Error::Format);
        }

        let w = w.max(1);
        let (sign, int_digits, frac_digits) = ps.raw_parts();

        let int_limbs = int_digits_to_limbs(int_digits);
        if int_limbs.len() > w {
            return Err(Error::PrecisionExceeded);
        }

        let frac = frac_digits_to_limbs(frac_digits, w - int_limbs.len(), int_limbs.is_empty());
        let k = frac.limbs.len();

        let mut mag = frac.limbs;
        for v in int_limbs.iter() {
            mag.push_back(*v);
        }

        let mut m = BigInt::from_magnitude(mag, false);
        if frac.carry {
            m.add_assign(&BigInt::one().shl(k * LIMB_BIT_SIZE));
        }
        if sign == Sign::Neg {
            m.neg_assign();
        }

        Ok(Self::from_parts(m, -((k + frac.skipped) as Exponent), w))
    }

    /// Returns the decimal representation of `self` with `digits` digits after the point.
    /// The last digit is rounded half up. The minus sign is omitted if all digits are zero.
    pub fn format(&self, digits: usize) -> String {
        let mag = self.mantissa().magnitude();
        let low = self.low();

        let (mut int_digits, mut frac, mut round_up) = if low >= 0 {
            let mut m = LimbBuf::filled(low as usize, 0);
            for v in mag.iter() {
                m.push_back(*v);
            }
            (limbs_to_decimal(&m), Vec::new(), false)
        } else {
            let k = low.unsigned_abs() as usize;
            let (frac_part, int_part) = if mag.len() > k {
                mag.split_at(k)
            } else {
                (&mag[..], &[][..])
            };

            let mut f = LimbBuf::from_slice(frac_part);
            f.resize(k, 0);

            let (d, r) = frac_limbs_to_decimal(&f, digits);
            (limbs_to_decimal(int_part), d, r)
        };

        frac.resize(digits, 0);

        if round_up {
            round_up = increment_digits(&mut frac);
        }
        if round_up && increment_digits(&mut int_digits) {
            int_digits.insert(0, 1);
        }

        let is_zero = int_digits.iter().chain(frac.iter()).all(|v| *v == 0);

        let mut ret = String::with_capacity(int_digits.len() + digits + 2);
        if self.is_negative() && !is_zero {
            ret.push('-');
        }
        push_digits(&mut ret, &int_digits);
        if digits > 0 {
            ret.push('.');
            push_digits(&mut ret, &frac);
        }

        ret
    }

    /// Number of decimal digits after the point that represent the fractional limbs of `self`.
    pub(crate) fn default_frac_digits(&self) -> usize {
        let low = self.low();
        if low >= 0 {
            1
        } else {
            (low.unsigned_abs() as usize * LIMB_BIT_SIZE * 30103 + 99999) / 100000 + 1
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use core::cmp::Ordering;

    #[test]
    fn test_int_strop() {
        for s in ["0", "1", "-1", "123456789012345678901234567890", "-18446744073709551616", "9223372036854775808"] {
            assert_eq!(BigInt::parse(s).unwrap().format(), s);
        }

        assert_eq!(BigInt::parse("-9223372036854775808").unwrap(), BigInt::from(i64::MIN));
        assert_eq!(BigInt::parse("18446744073709551615").unwrap(), BigInt::from(u64::MAX));

        for s in ["", "-0", "01", "1.0", "+5", "1_000"] {
            assert_eq!(BigInt::parse(s).unwrap_err(), Error::Format);
        }
    }

    #[test]
    fn test_float_parse() {
        let n = BigFloat::parse("1.0", 2).unwrap();
        assert_eq!(&n.mantissa().m[..], &[1]);
        assert_eq!(n.exponent(), 0);

        let n = BigFloat::parse("-1.0", 2).unwrap();
        assert_eq!(&n.mantissa().m[..], &[u64::MAX]);
        assert_eq!(n.exponent(), 0);

        let n = BigFloat::parse("0.0", 2).unwrap();
        assert!(n.is_zero());
        assert_eq!(n.exponent(), 0);

        let n = BigFloat::parse("-12.375", 4).unwrap();
        assert_eq!(n.to_f64(), -12.375);

        let n = BigFloat::parse("0.5", 3).unwrap();
        assert_eq!(&n.mantissa().magnitude()[..], &[1 << 63]);
        assert_eq!(n.exponent(), -1);

        // 2^-70, leading zero limbs do not consume the width
        let n = BigFloat::parse("0.000000000000000000000847032947254300339068322500679641962051391601562500", 1).unwrap();
        assert_eq!(&n.mantissa().magnitude()[..], &[1 << 58]);
        assert_eq!(n.exponent(), -2);

        // 0.1 rounded to one limb
        let n = BigFloat::parse("0.1", 1).unwrap();
        assert_eq!(&n.mantissa().magnitude()[..], &[0x199999999999999A]);

        // rounding carries into the integer part
        let n = BigFloat::parse("1.99999999999999999999999999", 1).unwrap();
        assert_eq!(n.cmp(&BigFloat::from_int(&BigInt::from(2), 1)), Ordering::Equal);

        assert_eq!(
            BigFloat::parse("18446744073709551616.5", 1).unwrap_err(),
            Error::PrecisionExceeded
        );
        assert!(BigFloat::parse("18446744073709551615.5", 1).is_ok());

        for s in ["1", "1.", ".5", "1e5", "--1.0", "1.0.0", "abc"] {
            assert_eq!(BigFloat::parse(s, 2).unwrap_err(), Error::Format);
        }
    }

    #[test]
    fn test_float_format() {
        let n = BigFloat::parse("-12.375", 4).unwrap();
        assert_eq!(n.format(3), "-12.375");
        assert_eq!(n.format(2), "-12.38");
        assert_eq!(n.format(0), "-12");
        assert_eq!(n.format(5), "-12.37500");

        let n = BigFloat::parse("0.0001", 4).unwrap();
        assert_eq!(n.format(2), "0.00");
        assert_eq!(n.neg().format(2), "0.00");
        assert_eq!(n.neg().format(4), "-0.0001");

        let n = BigFloat::parse("9.996", 4).unwrap();
        assert_eq!(n.format(2), "10.00");

        let n = BigFloat::from_int(&BigInt::parse("340282366920938463463374607431768211456").unwrap(), 1);
        assert_eq!(n.format(1), "340282366920938463463374607431768211456.0");

        assert_eq!(BigFloat::new(2).format(1), "0.0");
    }
}
