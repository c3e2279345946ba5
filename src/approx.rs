//! Approximate equality.
//!
//! Single-precision arithmetic accumulates round-off, so exact comparison of computed vectors is
//! rarely what callers want. This module provides the [`ApproxEq`] trait, which compares values by
//! bounding the *absolute difference* of every component, and the
//! [`assert_approx_eq!`][crate::assert_approx_eq] / [`assert_approx_ne!`][crate::assert_approx_ne]
//! macros used throughout this crate's tests.
//!
//! For more information on the subtleties of approximate floating-point comparison, see:
//! <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>

mod impls;

use std::fmt;

/// The tolerance used when no explicit one is given.
///
/// Chosen to absorb the round-off typically accumulated by a handful of chained single-precision
/// operations.
pub const DEFAULT_TOLERANCE: f32 = 1e-5;

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their components are.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to `tolerance`, the
    /// values are considered to be equal.
    ///
    /// `NaN` is never equal to anything, including itself. Infinities are equal only to
    /// themselves.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: f32) -> bool;
}

#[doc(hidden)]
#[track_caller]
pub fn assert_inner<T>(left: &T, right: &T, tolerance: f32, expect_eq: bool)
where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    let equal = left.abs_diff_eq(right, tolerance);
    if equal != expect_eq {
        let op = if expect_eq { "==" } else { "!=" };
        panic!(
            r#"assertion `left {op} right` failed (tolerance: {tolerance})
  left: {left:?}
 right: {right:?}"#
        );
    }
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// This macro functions identically to [`assert_eq!`], except in that it bounds the absolute
/// difference of the compared values instead of requiring exact equality. An optional third
/// argument overrides the tolerance, which defaults to
/// [`DEFAULT_TOLERANCE`][crate::approx::DEFAULT_TOLERANCE].
///
/// Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// ```
/// # use vec32::*;
/// let one = (0..10).fold(0.0f32, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// assert_approx_eq!(100.0f32, 99.0, 1.0);
/// assert_approx_eq!(vec2(3.0, 4.0).normalize(), vec2(0.6, 0.8));
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_eq!($left, $right, $crate::approx::DEFAULT_TOLERANCE)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        $crate::approx::assert_inner(&$left, &$right, $tolerance, true)
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// The counterpart of [`assert_approx_eq!`]; takes the same optional tolerance argument.
///
/// # Examples
///
/// ```
/// # use vec32::*;
/// assert_approx_ne!(100.0f32, 99.0);
/// assert_approx_ne!(vec2(0.0, 0.0), vec2(0.0, 0.5), 0.1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($left:expr, $right:expr $(,)?) => {
        $crate::assert_approx_ne!($left, $right, $crate::approx::DEFAULT_TOLERANCE)
    };
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        $crate::approx::assert_inner(&$left, &$right, $tolerance, false)
    };
}
