//! All operations on numbers are performed in some context.

use crate::defs::Error;
use crate::defs::DEFAULT_MAX_WIDTH;
use crate::num::BigFloat;
use crate::ops::consts::Consts;
use core::cell::RefCell;

#[cfg(not(feature = "std"))]
use alloc::rc::Rc;

#[cfg(feature = "std")]
use std::rc::Rc;

/// Context contains default parameters for all operations:
/// the maximum width of results, the stopping threshold of the square root,
/// the constants cache, and the current value.
#[derive(Debug, Clone)]
pub struct Context {
    cc: Rc<RefCell<Consts>>,
    w: usize,
    eps: BigFloat,
    value: BigFloat,
}

impl Context {
    /// Create a new context with default parameters.
    pub fn new() -> Self {
        with_max_width(DEFAULT_MAX_WIDTH)
    }

    /// Sets the maximum width of results in limbs.
    pub fn max_width(&mut self, w: usize) -> &mut Self {
        self.w = w.max(1);
        self
    }

    /// Sets the threshold of the difference between successive approximations of the square root.
    pub fn epsilon(&mut self, eps: BigFloat) -> &mut Self {
        self.eps = eps;
        self
    }

    /// Sets the constant cache of the context.
    pub fn constant_cache(&mut self, cc: Rc<RefCell<Consts>>) -> &mut Self {
        self.cc = cc;
        self
    }

    /// Sets the current value of the context.
    pub fn value(&mut self, value: BigFloat) -> &mut Self {
        self.value = value;
        self
    }

    /// Returns the maximum width of results in limbs.
    pub fn get_max_width(&self) -> usize {
        self.w
    }

    /// Returns the square root threshold of the context.
    pub fn get_epsilon(&self) -> BigFloat {
        self.eps.clone()
    }

    /// Returns the constant cache of the context.
    pub fn get_consts(&self) -> Rc<RefCell<Consts>> {
        self.cc.clone()
    }

    /// Returns the current value of the context.
    pub fn get_value(&self) -> BigFloat {
        self.value.clone()
    }

    /// Parses a number with the maximum width of the context.
    ///
    /// ## Errors
    ///
    ///  - Format: the string is not a valid number.
    ///  - PrecisionExceeded: the integer part does not fit the maximum width.
    pub fn parse(&self, s: &str) -> Result<BigFloat, Error> {
        BigFloat::parse(s, self.w)
    }

    /// Returns the value of pi with the maximum width of the context.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: internal computation failed.
    pub fn pi(&self) -> Result<BigFloat, Error> {
        self.cc.borrow_mut().pi(self.w)
    }

    // Current value with the maximum width of the context.
    fn arg(&self) -> BigFloat {
        self.value.with_max_width(self.w)
    }

    /// Replaces the current value with its square root.
    ///
    /// ## Errors
    ///
    ///  - Domain: the current value is negative.
    pub fn sqrt(&mut self) -> Result<&mut Self, Error> {
        let val = self.arg().sqrt(&self.eps)?;
        Ok(self.value(val))
    }

    /// Replaces the current value with `self` to the power of `k`.
    ///
    /// ## Errors
    ///
    ///  - Domain: `k` is negative.
    pub fn pow(&mut self, k: i64) -> Result<&mut Self, Error> {
        let val = self.arg().pow(k)?;
        Ok(self.value(val))
    }
}

macro_rules! impl_fun_cc {
    ($comment:literal, $fname:ident) => {
        #[doc=$comment]
        ///
        /// ## Errors
        ///
        ///  - Domain: the current value is outside of the function domain.
        pub fn $fname(&mut self) -> Result<&mut Self, Error> {
            let val = self.arg().$fname(&mut self.cc.borrow_mut())?;
            Ok(self.value(val))
        }
    };
}

impl Context {
    impl_fun_cc!("Replaces the current value with its natural logarithm.", ln);
    impl_fun_cc!("Replaces the current value with its sine.", sin);
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}

/// Create a new context with the maximum width `w` limbs.
pub fn with_max_width(w: usize) -> Context {
    Context {
        cc: Rc::new(RefCell::new(Consts::new())),
        w: w.max(1),
        eps: BigFloat::new(1),
        value: BigFloat::new(w),
    }
}

/// Create a new context with constant cache `cc`.
pub fn with_consts(cc: Rc<RefCell<Consts>>) -> Context {
    Context {
        cc,
        w: DEFAULT_MAX_WIDTH,
        eps: BigFloat::new(1),
        value: BigFloat::new(DEFAULT_MAX_WIDTH),
    }
}

/// Create a new context with a given value.
pub fn with_value(value: BigFloat) -> Context {
    let mut ctx = with_max_width(value.max_width());
    ctx.value(value);
    ctx
}

/// Operators on a context and a number, applied to the current value of the context.
pub mod ops {

    use super::Context;
    use crate::num::BigFloat;

    use core::{
        cmp::Ordering, cmp::PartialEq, cmp::PartialOrd, fmt::Display, fmt::Formatter, ops::Add,
        ops::AddAssign, ops::Mul, ops::MulAssign, ops::Neg, ops::Sub, ops::SubAssign,
    };

    macro_rules! impl_ctx_op {
        ($tr:ident, $fname:ident, $tr_assign:ident, $fname_assign:ident) => {
            impl $tr<&BigFloat> for Context {
                type Output = Self;
                fn $fname(mut self, rhs: &BigFloat) -> Self::Output {
                    let val = BigFloat::$fname(&self.value, rhs);
                    self.value(val);
                    self
                }
            }

            impl $tr<BigFloat> for Context {
                type Output = Self;
                fn $fname(self, rhs: BigFloat) -> Self::Output {
                    $tr::$fname(self, &rhs)
                }
            }

            impl $tr_assign<&BigFloat> for Context {
                fn $fname_assign(&mut self, rhs: &BigFloat) {
                    let val = BigFloat::$fname(&self.value, rhs);
                    self.value(val);
                }
            }

            impl $tr_assign<BigFloat> for Context {
                fn $fname_assign(&mut self, rhs: BigFloat) {
                    $tr_assign::$fname_assign(self, &rhs)
                }
            }
        };
    }

    impl_ctx_op!(Add, add, AddAssign, add_assign);
    impl_ctx_op!(Sub, sub, SubAssign, sub_assign);
    impl_ctx_op!(Mul, mul, MulAssign, mul_assign);

    impl Neg for Context {
        type Output = Self;
        fn neg(mut self) -> Self::Output {
            self.value = BigFloat::neg(&self.value);
            self
        }
    }

    impl PartialEq<BigFloat> for Context {
        fn eq(&self, other: &BigFloat) -> bool {
            BigFloat::cmp(&self.value, other) == Ordering::Equal
        }
    }

    impl PartialOrd<BigFloat> for Context {
        fn partial_cmp(&self, other: &BigFloat) -> Option<Ordering> {
            Some(BigFloat::cmp(&self.value, other))
        }
    }

    impl Display for Context {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), core::fmt::Error> {
            Display::fmt(&self.value, f)
        }
    }
}
