//! Conversion between BigInt and native integers or byte buffers.

use crate::common::buf::LimbBuf;
use crate::defs::Error;
use crate::defs::Limb;
use crate::defs::LIMB_BYTE_SIZE;
use crate::defs::LIMB_MAX;
use crate::int::BigInt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

impl BigInt {
    // Little-endian two's complement bytes, sign-extended with `fill` up to a whole number of limbs.
    fn from_le_bytes_ext(bytes: &[u8], fill: Limb) -> Self {
        let mut m: LimbBuf = bytes
            .chunks(LIMB_BYTE_SIZE)
            .map(|chunk| {
                let mut limb = [fill as u8; LIMB_BYTE_SIZE];
                limb[..chunk.len()].copy_from_slice(chunk);
                Limb::from_le_bytes(limb)
            })
            .collect();
        m.push_back(fill);
        BigInt::from_limbs(m)
    }

    /// Constructs a number from a two's complement byte buffer in the native byte order.
    /// An empty buffer gives 0.
    pub fn from_ne_bytes(bytes: &[u8]) -> Self {
        #[cfg(target_endian = "big")]
        let bytes: &[u8] = &bytes.iter().rev().copied().collect::<Vec<u8>>();

        let fill = match bytes.last() {
            Some(b) if b & 0x80 != 0 => LIMB_MAX,
            _ => 0,
        };

        Self::from_le_bytes_ext(bytes, fill)
    }

    /// Returns the two's complement representation of `self` as bytes, the most significant byte last.
    /// Each limb contributes its full size in bytes; the value 0 gives an empty buffer.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.m.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    fn to_i128(&self) -> Result<i128, Error> {
        if self.len() > 2 {
            return Err(Error::Overflow);
        }
        let lo = self.limb(0) as u128;
        let hi = self.limb(1) as u128;
        Ok(((hi << 64) | lo) as i128)
    }

    fn to_u128(&self) -> Result<u128, Error> {
        if self.is_negative() {
            return Err(Error::Overflow);
        }
        let m = self.magnitude();
        if m.len() > 2 {
            return Err(Error::Overflow);
        }
        let lo = m.get_or(0, 0) as u128;
        let hi = m.get_or(1, 0) as u128;
        Ok((hi << 64) | lo)
    }
}

macro_rules! impl_signed_conv {
    ($($s:ty),*) => {
        $(
            impl From<$s> for BigInt {
                fn from(i: $s) -> Self {
                    let fill = if i < 0 { LIMB_MAX } else { 0 };
                    BigInt::from_le_bytes_ext(&i.to_le_bytes(), fill)
                }
            }

            impl TryFrom<&BigInt> for $s {
                type Error = Error;

                fn try_from(n: &BigInt) -> Result<Self, Self::Error> {
                    <$s>::try_from(n.to_i128()?).map_err(|_| Error::Overflow)
                }
            }

            impl TryFrom<BigInt> for $s {
                type Error = Error;

                fn try_from(n: BigInt) -> Result<Self, Self::Error> {
                    <$s>::try_from(&n)
                }
            }
        )*
    };
}

macro_rules! impl_unsigned_conv {
    ($($s:ty),*) => {
        $(
            impl From<$s> for BigInt {
                fn from(i: $s) -> Self {
                    BigInt::from_le_bytes_ext(&i.to_le_bytes(), 0)
                }
            }

            impl TryFrom<&BigInt> for $s {
                type Error = Error;

                fn try_from(n: &BigInt) -> Result<Self, Self::Error> {
                    <$s>::try_from(n.to_u128()?).map_err(|_| Error::Overflow)
                }
            }

            impl TryFrom<BigInt> for $s {
                type Error = Error;

                fn try_from(n: BigInt) -> Result<Self, Self::Error> {
                    <$s>::try_from(&n)
                }
            }
        )*
    };
}

impl_signed_conv!(i8, i16, i32, i64, i128, isize);
impl_unsigned_conv!(u8, u16, u32, u64, u128, usize);
