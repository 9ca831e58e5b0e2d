//! Static constants.

use crate::int::BigInt;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref ONE: BigInt = BigInt::from_limb(1);
    pub static ref TWO: BigInt = BigInt::from_limb(2);
    pub static ref THREE: BigInt = BigInt::from_limb(3);
}
