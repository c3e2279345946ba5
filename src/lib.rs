//! Small single-precision vector algebra types.
//!
//! This crate provides [`Vector2`], [`Vector3`], and [`Vector4`] — fixed-size vectors of [`f32`]
//! components — together with the arithmetic and geometric operations commonly needed in graphics,
//! physics, and simulation code: addition and scaling, normalization, dot and cross products,
//! interpolation, rotation, and distance/angle queries.
//!
//! All three types are thin wrappers around one const-generic storage core, so the
//! dimension-agnostic operations (magnitude, normalization, interpolation, formatting, approximate
//! equality) are written once and monomorphized per dimension.
//!
//! # Goals & Non-Goals
//!
//! - Cover the handful of vector operations that small simulations actually use, with predictable
//!   IEEE-754 semantics: degenerate inputs produce NaN or infinities instead of errors, and the
//!   only guarded edge case is normalizing the zero vector (which is returned unchanged).
//! - Don't provide matrix or quaternion types, SIMD batching, or serialization; callers that
//!   outgrow plain vectors should reach for a full linear algebra library.
//! - Keep the API surface stable and small enough to expose in other crates' public APIs.
//!
//! # Examples
//!
//! ```
//! use vec32::{vec2, Vector2};
//! use std::f32::consts::FRAC_PI_2;
//!
//! let v = vec2(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//! assert!(v.rotate_by(FRAC_PI_2).approx_eq(vec2(-4.0, 3.0)));
//! assert_eq!(Vector2::midpoint(Vector2::ZERO, v), vec2(1.5, 2.0));
//! ```

pub mod approx;
mod vector;

pub use vector::*;
