//! Random numbers.

use crate::common::buf::LimbBuf;
use crate::defs::Limb;
use crate::int::BigInt;
use rand::random;

impl BigInt {
    /// Returns a random number of at most `limbs` limbs, including the sign.
    pub fn random(limbs: usize) -> Self {
        let m: LimbBuf = (0..limbs).map(|_| random::<Limb>()).collect();
        BigInt::from_limbs(m)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_random() {
        for l in 0..10 {
            let n = BigInt::random(l);
            assert!(n.len() <= l);
        }
    }
}
