use std::{array, fmt};

mod ops;
mod view;

/// A 2-dimensional vector of [`f32`] components.
pub type Vector2 = Vector<2>;
/// A 3-dimensional vector of [`f32`] components.
pub type Vector3 = Vector<3>;
/// A 4-dimensional vector of [`f32`] components.
pub type Vector4 = Vector<4>;

/// An `N`-component vector of single-precision floats.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided components.
/// - [`Vector::splat`] creates a vector by copying the given value into each component.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each component.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - [`Vector2::from_angle`] creates a unit vector pointing at an angle from the positive X axis.
///
/// # Component Access
///
/// Vector components can be accessed and inspected in a few different ways:
///
/// - Components can be read and written as fields `x`, `y` (and `z` for [`Vector3`], plus `w` for
///   [`Vector4`]). Writing through these fields is the only operation in this library that mutates
///   a vector in place; every arithmetic method returns a newly constructed vector instead.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   component buffer directly.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation of
///   vector buffers, e.g. when uploading vertex data.
///
/// # Numeric policy
///
/// No operation reports errors. Dividing by a zero scalar, or asking for the angle between
/// zero-length vectors, produces IEEE-754 infinities or NaN that propagate to the caller. The one
/// explicit guard is [`Vector::normalize`], which returns the zero vector unchanged instead of
/// producing NaN components.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<const N: usize>([f32; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// A vector with each component initialized to 0.
    pub const ZERO: Self = Self([0.0; N]);

    /// Creates a vector with each component initialized to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(Vector3::splat(2.0), vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub const fn splat(value: f32) -> Self {
        Self([value; N])
    }

    /// Creates a vector where each component is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> f32,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each component, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(vec2(1.0, 2.0).map(|c| c * 10.0), vec2(10.0, 20.0));
    /// ```
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        Self(self.0.map(f))
    }

    /// Combines `self` and `other` component by component.
    pub fn zip_map<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(f32, f32) -> f32,
    {
        Self::from_fn(|i| f(self.0[i], other.0[i]))
    }

    /// Returns a reference to the underlying components as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[f32; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying components as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying components as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Returns a mutable reference to the underlying components as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [f32; N] {
        self.0
    }

    /// Returns the squared Euclidean length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(vec2(4.0, 0.0).magnitude_squared(), 16.0);
    /// ```
    pub fn magnitude_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the Euclidean length of this vector.
    ///
    /// The zero vector has a magnitude of exactly 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f32 {
        self.magnitude_squared().sqrt()
    }

    /// Divides this vector by its magnitude, resulting in a unit vector.
    ///
    /// If the magnitude is exactly 0 the vector is returned unchanged. Scaling the zero vector to
    /// unit length is impossible, and returning it as-is keeps the components free of NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
    /// ```
    pub fn normalize(self) -> Self {
        let mag = self.magnitude();
        if mag == 0.0 {
            return self;
        }
        self / mag
    }

    /// Computes the dot product of `self` and `other`, summing over all `N` components.
    ///
    /// Geometrically, the dot product provides information about the relative angle of the two
    /// vectors:
    /// - If the dot product is greater than zero, the angle between the vectors is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Also see [`Vector::angle_between`] for computing the exact angle between them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> f32 {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Rounds every component down to the nearest integer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(vec2(1.7, -0.3).floor(), vec2(1.0, -1.0));
    /// ```
    pub fn floor(self) -> Self {
        self.map(f32::floor)
    }

    /// Rounds every component up to the nearest integer.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(vec2(1.2, 0.3).ceil(), vec2(2.0, 1.0));
    /// ```
    pub fn ceil(self) -> Self {
        self.map(f32::ceil)
    }

    /// Compares `self` and `other` for approximate equality with the default tolerance.
    ///
    /// Two vectors are approximately equal if the absolute difference of every corresponding
    /// component is at most [`DEFAULT_TOLERANCE`][crate::approx::DEFAULT_TOLERANCE], which
    /// accommodates single-precision round-off. Use
    /// [`ApproxEq::abs_diff_eq`][crate::approx::ApproxEq::abs_diff_eq] to supply a different
    /// tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert!(vec2(1.0, 2.0).approx_eq(vec2(1.000001, 2.0)));
    /// assert!(!vec2(1.0, 2.0).approx_eq(vec2(1.1, 2.0)));
    /// ```
    pub fn approx_eq(self, other: Self) -> bool {
        crate::approx::ApproxEq::abs_diff_eq(&self, &other, crate::approx::DEFAULT_TOLERANCE)
    }

    /// Computes `to - from`, the displacement that moves a point at `from` to `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(Vector2::displacement(vec2(1.0, 1.0), vec2(4.0, 5.0)), vec2(3.0, 4.0));
    /// ```
    pub fn displacement(from: Self, to: Self) -> Self {
        to - from
    }

    /// Computes the Euclidean distance between the points `from` and `to`.
    pub fn distance(from: Self, to: Self) -> f32 {
        Self::displacement(from, to).magnitude()
    }

    /// Computes the squared Euclidean distance between the points `from` and `to`.
    ///
    /// Cheaper than [`Vector::distance`] as it skips the square root; useful for comparisons.
    pub fn distance_squared(from: Self, to: Self) -> f32 {
        Self::displacement(from, to).magnitude_squared()
    }

    /// Returns the point halfway between `from` and `to`.
    ///
    /// Equivalent to [`Vector::lerp`] with `t = 0.5`.
    pub fn midpoint(from: Self, to: Self) -> Self {
        from + Self::displacement(from, to) * 0.5
    }

    /// Returns the unit vector pointing from `from` towards `to`.
    ///
    /// When the points coincide the displacement is the zero vector, and the zero-magnitude policy
    /// of [`Vector::normalize`] applies: the zero vector is returned.
    pub fn direction(from: Self, to: Self) -> Self {
        Self::displacement(from, to).normalize()
    }

    /// Linearly interpolates between the points `from` and `to`.
    ///
    /// Returns the point at fraction `t` along the displacement from `from` to `to`. `t` is not
    /// clamped: values outside `[0, 1]` extrapolate beyond the endpoints.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// let from = vec2(0.0, 0.0);
    /// let to = vec2(10.0, 0.0);
    /// assert_eq!(Vector2::lerp(from, to, 0.25), vec2(2.5, 0.0));
    /// assert_eq!(Vector2::lerp(from, to, 2.0), vec2(20.0, 0.0));
    /// ```
    pub fn lerp(from: Self, to: Self, t: f32) -> Self {
        from + Self::displacement(from, to) * t
    }

    /// Returns the point at an absolute `distance` from `from` along the direction towards `to`.
    ///
    /// Unlike [`Vector::lerp`], which moves by a fraction of the displacement, this moves by a
    /// fixed distance regardless of how far apart the points are.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// let from = vec2(0.0, 0.0);
    /// let to = vec2(100.0, 0.0);
    /// assert_eq!(Vector2::lerp_by_distance(from, to, 3.0), vec2(3.0, 0.0));
    /// ```
    pub fn lerp_by_distance(from: Self, to: Self, distance: f32) -> Self {
        from + Self::direction(from, to) * distance
    }

    /// Computes the smallest angle between `a` and `b`, in radians.
    ///
    /// The result is the arccosine of the normalized dot product. If either vector has zero
    /// magnitude the ratio is undefined and the result is NaN; this follows the crate-wide policy
    /// of letting IEEE-754 special values propagate instead of guarding them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let angle = Vector2::angle_between(vec2(1.0, 0.0), vec2(0.0, 1.0));
    /// assert!((angle - FRAC_PI_2).abs() < 1e-6);
    /// assert!(Vector2::angle_between(Vector2::ZERO, vec2(1.0, 0.0)).is_nan());
    /// ```
    pub fn angle_between(a: Self, b: Self) -> f32 {
        (a.dot(b) / (a.magnitude() * b.magnitude())).acos()
    }
}

impl Vector<2> {
    /// Creates a unit vector at `theta` radians counter-clockwise from the positive X axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert!(Vector2::from_angle(0.0).approx_eq(vec2(1.0, 0.0)));
    /// ```
    pub fn from_angle(theta: f32) -> Self {
        vec2(theta.cos(), theta.sin())
    }

    /// Returns the signed angle of this vector from the positive X axis, in radians.
    ///
    /// Computed with the two-argument arctangent of (y, x); the result is in (−π, π].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert_eq!(vec2(0.0, 3.0).angle(), FRAC_PI_2);
    /// ```
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    /// Rotates this vector by `theta` radians counter-clockwise about the origin.
    ///
    /// The result is reconstructed from the rotated angle at the original magnitude, so the
    /// magnitude is preserved by construction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// assert!(vec2(1.0, 0.0).rotate_by(FRAC_PI_2).approx_eq(vec2(0.0, 1.0)));
    /// ```
    pub fn rotate_by(self, theta: f32) -> Self {
        Self::from_angle(self.angle() + theta) * self.magnitude()
    }

    /// Rotates this vector by `theta` radians counter-clockwise about the point `about`.
    ///
    /// Translates so that `about` is the origin, rotates, and translates back.
    pub fn rotate_about(self, about: Self, theta: f32) -> Self {
        (self - about).rotate_by(theta) + about
    }

    /// Computes the cross product of `self` and `other`, treated as 3D vectors with z = 0.
    ///
    /// The cross product is only defined in three dimensions, so the result is a [`Vector3`]: its
    /// x and y components are always 0, and its z component is the scalar 2D cross product
    /// `self.x * other.y - other.x * self.y`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(vec2(1.0, 0.0).cross(vec2(0.0, 1.0)), vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(self, other: Self) -> Vector3 {
        vec3(0.0, 0.0, self.x * other.y - other.x * self.y)
    }
}

impl Vector<3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs; swapping the arguments negates it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(vec3(1.0, 0.0, 0.0).cross(vec3(0.0, 1.0, 0.0)), vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [ax, ay, az] = self.into_array();
        let [bx, by, bz] = other.into_array();

        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Returns the x and y components as a new [`Vector2`].
    ///
    /// The components are copied; mutating the result does not affect `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).xy(), vec2(1.0, 2.0));
    /// ```
    pub fn xy(self) -> Vector2 {
        vec2(self.x, self.y)
    }
}

impl Vector<4> {
    /// Returns the x, y, and z components as a new [`Vector3`].
    ///
    /// The components are copied; mutating the result does not affect `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vec32::*;
    /// assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).xyz(), vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn xyz(self) -> Vector3 {
        vec3(self.x, self.y, self.z)
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(value: [f32; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

/// Formats the vector as `Vector{N}(c0, c1, ...)`.
impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector{N}(")?;
        for (i, component) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{component}")?;
        }
        f.write_str(")")
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Constructs a [`Vector2`] from its two components.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vector2 {
    Vector([x, y])
}

/// Constructs a [`Vector3`] from its three components.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vector3 {
    Vector([x, y, z])
}

/// Constructs a [`Vector4`] from its four components.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vector4 {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        let v = vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 4.0);

        let mut v = vec2(0.0, 1.0);
        v.x = 777.0;
        assert_eq!(v.x, 777.0);
        assert_eq!(v[0], 777.0);
        assert_eq!(v.y, 1.0);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);

        let mut v = vec3(1.0, 2.0, 3.0);
        v.z = -3.0;
        assert_eq!(v, vec3(1.0, 2.0, -3.0));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec2(1.0, 2.0)), "Vector2(1, 2)");
        assert_eq!(format!("{}", vec3(0.5, -1.0, 2.25)), "Vector3(0.5, -1, 2.25)");
        assert_eq!(format!("{}", vec4(0.0, 0.0, 0.0, 1.0)), "Vector4(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", vec2(1.0, 2.0)), "Vector2(1, 2)");
    }

    #[test]
    fn magnitude() {
        assert_eq!(vec2(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(vec3(2.0, 3.0, 6.0).magnitude(), 7.0);
        assert_eq!(Vector4::ZERO.magnitude(), 0.0);
        assert_eq!(vec2(3.0, 4.0).magnitude_squared(), 25.0);
    }

    #[test]
    fn normalize_produces_unit_vectors() {
        for v in [vec2(3.0, 4.0), vec2(-0.1, 0.02), vec2(1e3, -1e3)] {
            assert_approx_eq!(v.normalize().magnitude(), 1.0);
        }
        assert_approx_eq!(vec3(1.0, -2.0, 2.5).normalize().magnitude(), 1.0);
        assert_approx_eq!(vec4(8.0, 1.0, -1.0, 3.0).normalize().magnitude(), 1.0);
    }

    #[test]
    fn normalize_zero_vector_is_identity() {
        assert_eq!(Vector2::ZERO.normalize(), Vector2::ZERO);
        assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
        assert_eq!(Vector4::ZERO.normalize(), Vector4::ZERO);
    }

    #[test]
    fn dot_commutes() {
        let a = vec3(1.0, 3.0, -5.0);
        let b = vec3(4.0, -2.0, -1.0);
        assert_eq!(a.dot(b), b.dot(a));
        assert_eq!(a.dot(b), 3.0);
    }

    // The original implementation dropped the z and w terms from some dot product paths; here
    // every component contributes.
    #[test]
    fn dot_includes_all_components() {
        assert_eq!(vec3(0.0, 0.0, 2.0).dot(vec3(0.0, 0.0, 3.0)), 6.0);
        assert_eq!(vec4(0.0, 0.0, 0.0, 2.0).dot(vec4(0.0, 0.0, 0.0, 3.0)), 6.0);
    }

    #[test]
    fn cross_3d() {
        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        let z = vec3(0.0, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(x), -z);

        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-2.0, 0.5, 4.0);
        assert_eq!(a.cross(b), -(b.cross(a)));
        assert_approx_eq!(a.dot(a.cross(b)), 0.0);
        assert_approx_eq!(b.dot(a.cross(b)), 0.0);
    }

    #[test]
    fn cross_2d_encodes_z_only() {
        let c = vec2(1.0, 0.0).cross(vec2(0.0, 1.0));
        assert_eq!(c, vec3(0.0, 0.0, 1.0));

        let c = vec2(3.0, 1.0).cross(vec2(2.0, 5.0));
        assert_eq!(c.x, 0.0);
        assert_eq!(c.y, 0.0);
        assert_eq!(c.z, 13.0);
    }

    #[test]
    fn angle() {
        assert_eq!(vec2(1.0, 0.0).angle(), 0.0);
        assert_eq!(vec2(0.0, 2.0).angle(), FRAC_PI_2);
        assert_eq!(vec2(-1.0, 0.0).angle(), PI);
        assert!(vec2(0.0, -1.0).angle() < 0.0);
    }

    #[test]
    fn rotate() {
        assert!(vec2(1.0, 0.0).rotate_by(FRAC_PI_2).approx_eq(vec2(0.0, 1.0)));
        assert!(vec2(1.0, 0.0).rotate_by(PI).approx_eq(vec2(-1.0, 0.0)));

        // Magnitude is preserved by construction.
        let v = vec2(3.0, -7.0);
        assert_approx_eq!(v.rotate_by(1.234).magnitude(), v.magnitude(), 1e-4);

        let rotated = vec2(2.0, 1.0).rotate_about(vec2(1.0, 1.0), FRAC_PI_2);
        assert!(rotated.approx_eq(vec2(1.0, 2.0)));
    }

    #[test]
    fn angle_between() {
        assert_approx_eq!(Vector2::angle_between(vec2(1.0, 0.0), vec2(0.0, 3.0)), FRAC_PI_2);
        assert_approx_eq!(
            Vector3::angle_between(vec3(1.0, 0.0, 0.0), vec3(-2.0, 0.0, 0.0)),
            PI
        );
        assert!(Vector2::angle_between(Vector2::ZERO, vec2(1.0, 0.0)).is_nan());
    }

    #[test]
    fn displacement_round_trips() {
        let from = vec3(1.0, -2.0, 0.5);
        let to = vec3(4.0, 4.0, -1.0);
        assert!((Vector3::displacement(from, to) + from).approx_eq(to));
        assert_eq!(Vector2::displacement(vec2(1.0, 1.0), vec2(4.0, 5.0)), vec2(3.0, 4.0));
    }

    #[test]
    fn distance() {
        let a = vec2(1.0, 1.0);
        let b = vec2(4.0, 5.0);
        assert_eq!(Vector2::distance(a, b), 5.0);
        assert_approx_eq!(Vector2::distance_squared(a, b), Vector2::distance(a, b).powi(2));
        assert_eq!(
            Vector4::distance(vec4(1.0, 0.0, 0.0, 0.0), vec4(1.0, 0.0, 0.0, 0.0)),
            0.0
        );
    }

    #[test]
    fn midpoint_matches_half_lerp() {
        let from = vec2(-2.0, 6.0);
        let to = vec2(4.0, -6.0);
        assert_eq!(Vector2::midpoint(from, to), vec2(1.0, 0.0));
        assert!(Vector2::midpoint(from, to).approx_eq(Vector2::lerp(from, to, 0.5)));
    }

    #[test]
    fn lerp() {
        let from = vec3(0.0, 0.0, 0.0);
        let to = vec3(10.0, -10.0, 5.0);
        assert_eq!(Vector3::lerp(from, to, 0.0), from);
        assert_eq!(Vector3::lerp(from, to, 1.0), to);
        assert_eq!(Vector3::lerp(from, to, 0.1), vec3(1.0, -1.0, 0.5));
        // Unclamped: extrapolates past the endpoints.
        assert_eq!(Vector3::lerp(from, to, 2.0), vec3(20.0, -20.0, 10.0));
    }

    #[test]
    fn lerp_by_distance() {
        let from = vec2(1.0, 0.0);
        let to = vec2(100.0, 0.0);
        assert_eq!(Vector2::lerp_by_distance(from, to, 3.0), vec2(4.0, 0.0));
        // Distance is absolute, not a fraction of the separation.
        assert_eq!(Vector2::lerp_by_distance(from, vec2(2.0, 0.0), 3.0), vec2(4.0, 0.0));
        // Coincident points have no direction; the zero policy leaves us at `from`.
        assert_eq!(Vector2::lerp_by_distance(from, from, 3.0), from);
    }

    #[test]
    fn direction() {
        assert_eq!(Vector2::direction(vec2(1.0, 1.0), vec2(5.0, 1.0)), vec2(1.0, 0.0));
        assert_eq!(Vector2::direction(vec2(1.0, 1.0), vec2(1.0, 1.0)), Vector2::ZERO);
    }

    #[test]
    fn floor_ceil_idempotent() {
        let v = vec3(1.7, -0.3, 2.0);
        assert_eq!(v.floor(), vec3(1.0, -1.0, 2.0));
        assert_eq!(v.ceil(), vec3(2.0, 0.0, 2.0));
        assert_eq!(v.floor().floor(), v.floor());
        assert_eq!(v.ceil().ceil(), v.ceil());
    }

    #[test]
    fn from_angle() {
        assert!(Vector2::from_angle(0.0).approx_eq(vec2(1.0, 0.0)));
        assert!(Vector2::from_angle(FRAC_PI_2).approx_eq(vec2(0.0, 1.0)));
        assert_approx_eq!(Vector2::from_angle(0.37).magnitude(), 1.0);
    }

    #[test]
    fn projections() {
        assert_eq!(vec3(1.0, 2.0, 3.0).xy(), vec2(1.0, 2.0));
        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).xyz(), vec3(1.0, 2.0, 3.0));

        // Projections copy; the source is unaffected by writes to the result.
        let v = vec3(1.0, 2.0, 3.0);
        let mut p = v.xy();
        p.x = 99.0;
        assert_eq!(v.x, 1.0);
    }

    #[test]
    fn zero_division_propagates() {
        let v = vec2(1.0, -1.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!((Vector2::ZERO / 0.0).x.is_nan());
    }
}
