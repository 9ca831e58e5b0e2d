//! Power series evaluation.

use crate::defs::Error;
use crate::num::BigFloat;

/// Generator of polynomial coefficients.
pub(crate) trait PolycoeffGen {
    /// Returns the next coefficient.
    fn next(&mut self) -> Result<&BigFloat, Error>;
}

/// Computes `x*c0 + x*s*c1 + x*s^2*c2 + ...` over `terms` terms.
/// Coefficients are supplied by `polycoeff_gen`.
pub(crate) fn series_run<T: PolycoeffGen>(
    x: &BigFloat,
    s: &BigFloat,
    terms: usize,
    polycoeff_gen: &mut T,
) -> Result<BigFloat, Error> {
    let mut acc = BigFloat::new(x.max_width());
    let mut xn = x.clone();

    for _ in 0..terms {
        let c = polycoeff_gen.next()?;
        acc = acc.add(&xn.mul(c));

        xn = xn.mul(s);
        if xn.is_zero() {
            break;
        }
    }

    Ok(acc)
}
