//! Astro-bignum is a library of arbitrary precision signed integers and floating point numbers
//! with a mantissa of a bounded number of 64-bit limbs.
//!
//! [`BigInt`] stores an integer of any size in two's complement form.
//! [`BigFloat`] combines a `BigInt` mantissa with an exponent counted in whole limbs.
//! The exponent of a float is the position of the most significant limb of the absolute value of the mantissa,
//! so 1 has exponent 0 and 1/2 has exponent -1.
//! Arithmetic on floats truncates results to the larger maximum width of the operands.
//!
//! Transcendental functions (square root, natural logarithm, sine, pi) are computed with series
//! and Newton iterations. Operations that need mathematical constants take a [`Consts`] cache,
//! or can be performed through a [`Context`](crate::ctx::Context).
//!
//! ## Examples
//!
//! ```
//! use astro_bignum::BigFloat;
//! use astro_bignum::BigInt;
//! use astro_bignum::Consts;
//!
//! // Integer arithmetic.
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = BigInt::from(1_000_000_007);
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(q * &b + r, a);
//!
//! // Floating point arithmetic with mantissas of 4 limbs.
//! let x = BigFloat::parse("2.0", 4).unwrap();
//! let s = x.sqrt(&BigFloat::new(4)).unwrap();
//! assert!(s.to_string().starts_with("1.41421356237309504880168872420969807856967187537694"));
//!
//! // Constants cache.
//! let mut cc = Consts::new();
//! let pi = cc.pi(4).unwrap();
//! assert_eq!(format!("{:.20}", pi), "3.14159265358979323846");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::module_inception)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod codec;
mod common;
pub mod ctx;
mod defs;
mod ext;
mod int;
mod num;
mod ops;
mod parser;
mod strop;

#[cfg(feature = "serde")]
mod for_3rd;

#[cfg(any(test, feature = "inspect"))]
pub mod inspect;

pub use crate::defs::Error;
pub use crate::defs::Exponent;
pub use crate::defs::Limb;
pub use crate::defs::Sign;
pub use crate::int::BigInt;
pub use crate::num::BigFloat;
pub use crate::ops::consts::Consts;
pub use crate::ops::LnMode;

pub use crate::defs::DEFAULT_MAX_WIDTH;
pub use crate::defs::LIMB_BIT_SIZE;
pub use crate::defs::LIMB_MAX;

#[cfg(test)]
mod tests {

    #[test]
    fn test_bigfloat() {
        use crate::BigFloat;
        use crate::BigInt;
        use crate::Consts;

        // Width with some space for error.
        let w = 5;

        // Initialize mathematical constants cache
        let mut cc = Consts::new();

        // ln(2) from the cache and computed through the logarithm of 8: ln(8) = 3*ln(2)
        let eight = BigFloat::from_int(&BigInt::from(8), w);
        let ln8 = eight.ln(&mut cc).unwrap();
        let ln2 = cc.ln_2(w).unwrap();
        let three = BigFloat::from_int(&BigInt::from(3), w);
        let d = ln8.sub(&ln2.mul(&three)).abs();
        assert!(d.is_zero() || d.exponent() <= -(w as i64) + 1);

        // sin(pi/6) = 1/2
        let pi = cc.pi(w).unwrap();
        let six = BigFloat::from_int(&BigInt::from(6), w);
        let s = pi.div(&six).unwrap().sin(&mut cc).unwrap();
        let half = BigFloat::one(w).mul_pow2(-1);
        let d = s.sub(&half).abs();
        assert!(d.is_zero() || d.exponent() <= -(w as i64) + 1);

        // Reduce the width to 4 limbs
        let mut s = s;
        s.set_max_width(4);
        assert_eq!(s.max_width(), 4);
    }
}
