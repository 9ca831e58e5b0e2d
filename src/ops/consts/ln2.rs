//! ln(2)

use crate::defs::Error;
use crate::num::BigFloat;
use crate::ops::LnMode;

/// Holds the most precise value of ln(2) computed so far.
#[derive(Debug, Default)]
pub struct Ln2Cache {
    val: Option<BigFloat>,
}

impl Ln2Cache {
    pub fn new() -> Self {
        Ln2Cache { val: None }
    }

    /// Return value of ln(2) with the maximum width `w`.
    pub fn for_width(&mut self, w: usize) -> Result<BigFloat, Error> {
        if let Some(v) = &self.val {
            if v.max_width() >= w {
                return Ok(v.with_max_width(w));
            }
        }

        // the series converges for z = 1/3, accurate to about 5 limbs
        let v = BigFloat::one(w + 1).mul_pow2(1).ln_series(LnMode::Approximate)?;
        let ret = v.with_max_width(w);
        self.val = Some(v);

        Ok(ret)
    }
}
