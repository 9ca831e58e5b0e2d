//! Definitions.

use core::fmt::Display;

/// A limb.
pub type Limb = u64;

/// Doubled limb.
pub type DoubleLimb = u128;

/// An exponent. Counted in limbs, i.e. in powers of `2^LIMB_BIT_SIZE`.
pub type Exponent = i64;

/// Maximum value of a limb.
pub const LIMB_MAX: Limb = Limb::MAX;

/// Base of limbs.
pub const LIMB_BASE: DoubleLimb = LIMB_MAX as DoubleLimb + 1;

/// Size of a limb in bits.
pub const LIMB_BIT_SIZE: usize = core::mem::size_of::<Limb>() * 8;

/// Size of a limb in bytes.
pub const LIMB_BYTE_SIZE: usize = core::mem::size_of::<Limb>();

/// Limb with the most significant bit set.
pub const LIMB_SIGNIFICANT_BIT: Limb = LIMB_MAX << (LIMB_BIT_SIZE - 1);

/// Default maximum width of a mantissa in limbs.
pub const DEFAULT_MAX_WIDTH: usize = 4;

/// Number of reciprocal refinement rounds of the division.
pub const DIV_ROUNDS: usize = 20;

/// Number of terms of the logarithm series.
pub const LN_TERMS: usize = 103;

/// Number of terms of the sine series.
pub const SIN_TERMS: usize = 40;

/// Upper bound on the number of Newton steps of the square root.
pub const SQRT_MAX_ITER: usize = 1000;

/// Sign.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// Negative.
    Neg = -1,

    /// Zero.
    Zero = 0,

    /// Positive.
    Pos = 1,
}

impl Sign {
    /// Changes the sign to the opposite.
    pub fn invert(&self) -> Self {
        match *self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
        }
    }

    /// Returns true if `self` is positive.
    pub fn is_positive(&self) -> bool {
        *self == Sign::Pos
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        *self == Sign::Neg
    }

    /// Returns 1 for the positive sign, -1 for the negative sign, and 0 for zero.
    pub fn to_int(&self) -> i8 {
        *self as i8
    }
}

/// Possible errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Malformed integer or float text.
    Format,

    /// Divisor is zero.
    DivisionByZero,

    /// The value does not fit the target native type.
    Overflow,

    /// The argument is outside the domain of the function.
    Domain,

    /// The integer part of a parsed float is wider than the requested mantissa width.
    PrecisionExceeded,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let repr = match self {
            Error::Format => "invalid number format",
            Error::DivisionByZero => "division by zero",
            Error::Overflow => "value does not fit the target type",
            Error::Domain => "argument is out of the function domain",
            Error::PrecisionExceeded => "integer part exceeds the mantissa width",
        };
        f.write_str(repr)
    }
}
