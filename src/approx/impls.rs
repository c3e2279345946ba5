use super::ApproxEq;

impl ApproxEq for f32 {
    fn abs_diff_eq(&self, other: &Self, tolerance: f32) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        (self - other).abs() <= tolerance
    }
}

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    fn abs_diff_eq(&self, other: &U, tolerance: f32) -> bool {
        T::abs_diff_eq(self, other, tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    fn abs_diff_eq(&self, other: &[U], tolerance: f32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::abs_diff_eq(a, b, tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    fn abs_diff_eq(&self, other: &[U; N], tolerance: f32) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), tolerance)
    }
}
