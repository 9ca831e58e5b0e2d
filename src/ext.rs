//! Implementation of the standard library traits for numbers.

use crate::defs::Error;
use crate::defs::DEFAULT_MAX_WIDTH;
use crate::int::BigInt;
use crate::num::BigFloat;

use core::{
    cmp::Ordering, cmp::PartialOrd, fmt::Display, fmt::Formatter, iter::Product, iter::Sum,
    ops::Add, ops::AddAssign, ops::Div, ops::DivAssign, ops::Mul, ops::MulAssign, ops::Neg,
    ops::Rem, ops::RemAssign, ops::Shl, ops::ShlAssign, ops::Shr, ops::ShrAssign, ops::Sub,
    ops::SubAssign, str::FromStr,
};

fn int_div(d1: &BigInt, d2: &BigInt) -> BigInt {
    match BigInt::div(d1, d2) {
        Ok(q) => q,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

fn int_rem(d1: &BigInt, d2: &BigInt) -> BigInt {
    match BigInt::rem(d1, d2) {
        Ok(r) => r,
        Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

fn float_div(d1: &BigFloat, d2: &BigFloat) -> BigFloat {
    match BigFloat::div(d1, d2) {
        Ok(q) => q,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

//
// ops traits
//

macro_rules! impl_bin_op {
    ($t:ty, $tr:ident, $fname:ident, $tr_assign:ident, $fname_assign:ident, $f:path) => {
        impl $tr<&$t> for &$t {
            type Output = $t;
            fn $fname(self, rhs: &$t) -> Self::Output {
                $f(self, rhs)
            }
        }

        impl $tr<$t> for &$t {
            type Output = $t;
            fn $fname(self, rhs: $t) -> Self::Output {
                $f(self, &rhs)
            }
        }

        impl $tr<&$t> for $t {
            type Output = $t;
            fn $fname(self, rhs: &$t) -> Self::Output {
                $f(&self, rhs)
            }
        }

        impl $tr<$t> for $t {
            type Output = $t;
            fn $fname(self, rhs: $t) -> Self::Output {
                $f(&self, &rhs)
            }
        }

        impl $tr_assign<&$t> for $t {
            fn $fname_assign(&mut self, rhs: &$t) {
                *self = $f(self, rhs);
            }
        }

        impl $tr_assign<$t> for $t {
            fn $fname_assign(&mut self, rhs: $t) {
                *self = $f(self, &rhs);
            }
        }
    };
}

impl_bin_op!(BigInt, Add, add, AddAssign, add_assign, BigInt::add);
impl_bin_op!(BigInt, Sub, sub, SubAssign, sub_assign, BigInt::sub);
impl_bin_op!(BigInt, Mul, mul, MulAssign, mul_assign, BigInt::mul);
impl_bin_op!(BigInt, Div, div, DivAssign, div_assign, int_div);
impl_bin_op!(BigInt, Rem, rem, RemAssign, rem_assign, int_rem);

impl_bin_op!(BigFloat, Add, add, AddAssign, add_assign, BigFloat::add);
impl_bin_op!(BigFloat, Sub, sub, SubAssign, sub_assign, BigFloat::sub);
impl_bin_op!(BigFloat, Mul, mul, MulAssign, mul_assign, BigFloat::mul);
impl_bin_op!(BigFloat, Div, div, DivAssign, div_assign, float_div);

macro_rules! impl_neg {
    ($t:ty) => {
        impl Neg for $t {
            type Output = $t;
            fn neg(self) -> Self::Output {
                <$t>::neg(&self)
            }
        }

        impl Neg for &$t {
            type Output = $t;
            fn neg(self) -> Self::Output {
                <$t>::neg(self)
            }
        }
    };
}

impl_neg!(BigInt);
impl_neg!(BigFloat);

impl Shl<usize> for BigInt {
    type Output = Self;
    fn shl(self, n: usize) -> Self::Output {
        BigInt::shl(&self, n)
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;
    fn shl(self, n: usize) -> Self::Output {
        BigInt::shl(self, n)
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, n: usize) {
        BigInt::shl_assign(self, n)
    }
}

impl Shr<usize> for BigInt {
    type Output = Self;
    fn shr(self, n: usize) -> Self::Output {
        BigInt::shr(&self, n)
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;
    fn shr(self, n: usize) -> Self::Output {
        BigInt::shr(self, n)
    }
}

impl ShrAssign<usize> for BigInt {
    fn shr_assign(&mut self, n: usize) {
        BigInt::shr_assign(self, n)
    }
}

//
// ordering traits
//

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(BigInt::cmp(self, other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        BigInt::cmp(self, other)
    }
}

impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        BigFloat::cmp(self, other) == Ordering::Equal
    }
}

impl Eq for BigFloat {}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(BigFloat::cmp(self, other))
    }
}

impl Ord for BigFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        BigFloat::cmp(self, other)
    }
}

//
// conversions
//

impl From<BigInt> for BigFloat {
    /// The maximum width is large enough to hold `i` exactly.
    fn from(i: BigInt) -> Self {
        let w = i.magnitude_len().max(DEFAULT_MAX_WIDTH);
        BigFloat::from_int(&i, w)
    }
}

impl From<&BigInt> for BigFloat {
    fn from(i: &BigInt) -> Self {
        let w = i.magnitude_len().max(DEFAULT_MAX_WIDTH);
        BigFloat::from_int(i, w)
    }
}

macro_rules! impl_float_from_int {
    ($($s:ty)*) => {
        $(
            impl From<$s> for BigFloat {
                fn from(v: $s) -> Self {
                    BigFloat::from_int(&BigInt::from(v), DEFAULT_MAX_WIDTH)
                }
            }
        )*
    };
}

impl_float_from_int!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

impl TryFrom<f64> for BigFloat {
    type Error = Error;

    fn try_from(f: f64) -> Result<Self, Self::Error> {
        BigFloat::from_f64(f, DEFAULT_MAX_WIDTH)
    }
}

impl TryFrom<f32> for BigFloat {
    type Error = Error;

    fn try_from(f: f32) -> Result<Self, Self::Error> {
        BigFloat::from_f64(f as f64, DEFAULT_MAX_WIDTH)
    }
}

impl Default for BigFloat {
    fn default() -> BigFloat {
        BigFloat::new(DEFAULT_MAX_WIDTH)
    }
}

//
// formatting and parsing
//

impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        f.write_str(&self.format())
    }
}

impl Display for BigFloat {
    /// Writes the number with the number of digits after the point given by the formatter's precision,
    /// or with enough digits to represent the fractional limbs followed by trailing zeroes removal.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
        match f.precision() {
            Some(p) => f.write_str(&self.format(p)),
            None => {
                let s = self.format(self.default_frac_digits());
                let t = s.trim_end_matches('0');
                if t.ends_with('.') {
                    f.write_str(&s[..t.len() + 1])
                } else {
                    f.write_str(t)
                }
            }
        }
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(src: &str) -> Result<BigInt, Self::Err> {
        BigInt::parse(src)
    }
}

impl FromStr for BigFloat {
    type Err = Error;

    /// Parses a number with the default maximum width.
    fn from_str(src: &str) -> Result<BigFloat, Self::Err> {
        BigFloat::parse(src, DEFAULT_MAX_WIDTH)
    }
}

//
// iterators
//

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        let mut acc = BigInt::new();
        for v in iter {
            BigInt::add_assign(&mut acc, &v);
        }
        acc
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        let mut acc = BigInt::new();
        for v in iter {
            BigInt::add_assign(&mut acc, v);
        }
        acc
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        let mut acc = BigInt::one();
        for v in iter {
            BigInt::mul_assign(&mut acc, &v);
        }
        acc
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        let mut acc = BigInt::one();
        for v in iter {
            BigInt::mul_assign(&mut acc, v);
        }
        acc
    }
}

impl Sum for BigFloat {
    fn sum<I: Iterator<Item = BigFloat>>(iter: I) -> Self {
        let mut acc = BigFloat::default();
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl<'a> Sum<&'a BigFloat> for BigFloat {
    fn sum<I: Iterator<Item = &'a BigFloat>>(iter: I) -> Self {
        let mut acc = BigFloat::default();
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl Product for BigFloat {
    fn product<I: Iterator<Item = BigFloat>>(iter: I) -> Self {
        let mut acc = BigFloat::one(DEFAULT_MAX_WIDTH);
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl<'a> Product<&'a BigFloat> for BigFloat {
    fn product<I: Iterator<Item = &'a BigFloat>>(iter: I) -> Self {
        let mut acc = BigFloat::one(DEFAULT_MAX_WIDTH);
        for v in iter {
            acc *= v;
        }
        acc
    }
}
