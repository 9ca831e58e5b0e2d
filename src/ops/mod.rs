//! Functions of numbers.

pub mod consts;
mod ln;
mod pow;
mod prime;
mod series;
mod sin;
mod sqrt;

pub use ln::LnMode;
