//! Numeric kinds accepted as rate and count types.
//!
//! The set is closed: signed integers (`i32`, `i64`, `isize`) and floats
//! (`f32`, `f64`). Rate and count types are chosen independently, so the one
//! place rate arithmetic becomes a count delta goes through a conversion.
//!
//! # Truncation
//!
//! Converting a float to an integer kind truncates toward zero. A rate of
//! `0.5` over 3 intervals yields `1.5`, which becomes `1` as an `i64` count.
//! The lost fraction is not carried forward.
//!
//! # Checked vs saturating
//!
//! [`convert`] rejects values that do not fit the target kind. Passive
//! accrual instead uses the `*_saturating` operations and
//! [`convert_saturating`]: out-of-range values pin to the kind's bound in the
//! direction of their sign, so the bounds clamp downstream still applies.
//! Only NaN has no direction and is rejected.

use std::fmt;

use crate::errors::{AccrualError, AccrualResult};

mod sealed {
    pub trait Sealed {}
}

/// Lossless intermediate used when moving a value between numeric kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wide {
    Int(i128),
    Float(f64),
}

/// A numeric kind usable as a counter's rate or count type.
///
/// Sealed: implemented only for `i32`, `i64`, `isize`, `f32` and `f64`.
pub trait Numeric:
    sealed::Sealed + Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const ZERO: Self;

    /// Convert an elapsed round count into this kind, pinning to the
    /// kind's bound when it does not fit.
    fn rounds_saturating(rounds: i64) -> Self;

    /// Addition that reports overflow (or a non-finite float) as `None`.
    fn try_add(self, rhs: Self) -> Option<Self>;

    /// Addition pinned to the kind's bounds. `None` only for NaN.
    fn add_saturating(self, rhs: Self) -> Option<Self>;

    /// Multiplication pinned to the kind's bounds. `None` only for NaN.
    fn mul_saturating(self, rhs: Self) -> Option<Self>;

    fn widen(self) -> Wide;

    /// Narrow a [`Wide`] value into this kind. Floats truncate toward zero
    /// when the target is integral. Out-of-range values give `None`.
    fn narrow(value: Wide) -> Option<Self>;

    /// Like [`narrow`](Numeric::narrow), but out-of-range values pin to the
    /// kind's bound. `None` only for NaN.
    fn narrow_saturating(value: Wide) -> Option<Self>;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            const ZERO: Self = 0;

            fn rounds_saturating(rounds: i64) -> Self {
                let bound = if rounds < 0 { <$t>::MIN } else { <$t>::MAX };
                <$t>::try_from(rounds).unwrap_or(bound)
            }

            fn try_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            fn add_saturating(self, rhs: Self) -> Option<Self> {
                Some(<$t>::saturating_add(self, rhs))
            }

            fn mul_saturating(self, rhs: Self) -> Option<Self> {
                Some(<$t>::saturating_mul(self, rhs))
            }

            fn widen(self) -> Wide {
                Wide::Int(self as i128)
            }

            fn narrow(value: Wide) -> Option<Self> {
                match value {
                    Wide::Int(v) => <$t>::try_from(v).ok(),
                    Wide::Float(f) => {
                        if !f.is_finite() {
                            return None;
                        }
                        let t = f.trunc();
                        // MAX as f64 rounds up to 2^(BITS-1) for 64-bit kinds.
                        if t < <$t>::MIN as f64 || t >= <$t>::MAX as f64 + 1.0 {
                            return None;
                        }
                        Some(t as $t)
                    }
                }
            }

            fn narrow_saturating(value: Wide) -> Option<Self> {
                match value {
                    Wide::Int(v) => Some(v.clamp(<$t>::MIN as i128, <$t>::MAX as i128) as $t),
                    // `as` truncates toward zero and saturates at the bounds.
                    Wide::Float(f) => (!f.is_nan()).then(|| f as $t),
                }
            }
        }
    )*};
}

macro_rules! impl_numeric_float {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl Numeric for $t {
            const ZERO: Self = 0.0;

            fn rounds_saturating(rounds: i64) -> Self {
                rounds as $t
            }

            fn try_add(self, rhs: Self) -> Option<Self> {
                let sum = self + rhs;
                sum.is_finite().then_some(sum)
            }

            fn add_saturating(self, rhs: Self) -> Option<Self> {
                let sum = self + rhs;
                (!sum.is_nan()).then(|| sum.clamp(<$t>::MIN, <$t>::MAX))
            }

            fn mul_saturating(self, rhs: Self) -> Option<Self> {
                let product = self * rhs;
                (!product.is_nan()).then(|| product.clamp(<$t>::MIN, <$t>::MAX))
            }

            fn widen(self) -> Wide {
                Wide::Float(self as f64)
            }

            fn narrow(value: Wide) -> Option<Self> {
                let narrowed = match value {
                    Wide::Int(v) => v as $t,
                    Wide::Float(f) => f as $t,
                };
                narrowed.is_finite().then_some(narrowed)
            }

            fn narrow_saturating(value: Wide) -> Option<Self> {
                let narrowed = match value {
                    Wide::Int(v) => v as $t,
                    Wide::Float(f) => f as $t,
                };
                (!narrowed.is_nan()).then(|| narrowed.clamp(<$t>::MIN, <$t>::MAX))
            }
        }
    )*};
}

impl_numeric_int!(i32, i64, isize);
impl_numeric_float!(f32, f64);

/// Convert between numeric kinds, truncating floats toward zero when the
/// target is integral.
///
/// `operation` names the computation for the overflow error.
pub fn convert<S: Numeric, D: Numeric>(value: S, operation: &'static str) -> AccrualResult<D> {
    D::narrow(value.widen()).ok_or(AccrualError::NumericOverflow { operation })
}

/// Convert between numeric kinds, pinning out-of-range values to the target
/// kind's bound. Only NaN is an error.
pub fn convert_saturating<S: Numeric, D: Numeric>(
    value: S,
    operation: &'static str,
) -> AccrualResult<D> {
    D::narrow_saturating(value.widen()).ok_or(AccrualError::NumericOverflow { operation })
}
