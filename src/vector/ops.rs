//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::ApproxEq;

use super::Vector;

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> PartialEq<[f32; N]> for Vector<N> {
    fn eq(&self, other: &[f32; N]) -> bool {
        self.0 == *other
    }
}

impl<const N: usize> PartialEq<Vector<N>> for [f32; N] {
    fn eq(&self, other: &Vector<N>) -> bool {
        *self == other.0
    }
}

impl<const N: usize> ApproxEq for Vector<N> {
    fn abs_diff_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance)
    }
}

/// Component-wise negation.
impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(f32::neg)
    }
}

/// Component-wise addition.
impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |l, r| l + r)
    }
}

/// Component-wise addition.
impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Component-wise subtraction.
impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |l, r| l - r)
    }
}

/// Component-wise subtraction.
impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Vector-scalar multiplication (scaling).
impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.map(|component| component * rhs)
    }
}

/// Vector-scalar multiplication (scaling).
impl<const N: usize> MulAssign<f32> for Vector<N> {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Vector-scalar division (scaling).
///
/// A zero divisor is not trapped; the components become IEEE infinities or NaN.
impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        self.map(|component| component / rhs)
    }
}

/// Vector-scalar division (scaling).
impl<const N: usize> DivAssign<f32> for Vector<N> {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

// NB: element-wise vector-vector `Mul`/`Div` are deliberately omitted; the public surface scales
// by scalars only, and leaving the impls out keeps the door open for either meaning later.
