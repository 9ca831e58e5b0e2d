mod ln2;
mod pi;

use crate::defs::Error;
use crate::num::BigFloat;
use crate::ops::consts::ln2::Ln2Cache;
use crate::ops::consts::pi::PiCache;

/// Constants cache contains arbitrary-precision mathematical constants.
#[derive(Debug, Default)]
pub struct Consts {
    pi: PiCache,
    ln2: Ln2Cache,
}

/// In an ideal situation, the `Consts` structure is initialized with `Consts::new` only once,
/// and then used where needed.
impl Consts {
    /// Initializes an empty constants cache. Values are computed on the first request.
    pub fn new() -> Self {
        Consts {
            pi: PiCache::new(),
            ln2: Ln2Cache::new(),
        }
    }

    /// Returns the value of the pi number with the maximum width `w` limbs.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: internal computation failed.
    pub fn pi(&mut self, w: usize) -> Result<BigFloat, Error> {
        self.pi.for_width(w)
    }

    /// Returns the value of the natural logarithm of 2 with the maximum width `w` limbs.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: internal computation failed.
    pub fn ln_2(&mut self, w: usize) -> Result<BigFloat, Error> {
        self.ln2.for_width(w)
    }
}
