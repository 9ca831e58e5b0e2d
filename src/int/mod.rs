//! Arbitrary precision signed integer in two's complement form.

mod conv;
mod div;
mod int;
mod mul;

#[cfg(feature = "random")]
mod random;

pub use int::BigInt;
