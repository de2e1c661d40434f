//! Small fixed-size vector and matrix math with Cg standard library semantics.
//!
//! Element types are `f32` (`float`) and `f64` (`double`); vectors and
//! matrices are plain `Copy` values laid out exactly like the equivalent
//! shader types, so they can be handed to a graphics API as bytes.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`scalar`] | `Scalar` (sealed over `f32`/`f64`) |
//! | [`vector`] | `Vector`, `Float2..4`, `Double2..4` |
//! | [`matrix`] | `Matrix`, `Float1x1..4x4`, `Double1x1..4x4` |
//! | [`intrinsics`] | `abs`, `sign`, `frac`, `saturate`, `lerp`, `dot`, `cross`, ... |
//! | [`inverse`] | `inverse`, `try_inverse`, `determinant` |
//!
//! # Quick start
//!
//! ```rust
//! use cgstd_math::{inverse, Double2x2};
//!
//! let a = Double2x2::new([[4.0, 7.0], [2.0, 6.0]]);
//! let inv = inverse(a);
//! assert!((a * inv).approx_eq(&Double2x2::identity(), 1e-12));
//! ```

mod determinant;
pub mod intrinsics;
pub mod inverse;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use intrinsics::{abs, cross, dot, frac, length, lerp, normalize, saturate, sign};
pub use inverse::{determinant, inverse, try_inverse, InverseError, Invertible};
pub use matrix::{
    Double1x1, Double2x2, Double3x3, Double4x4, Float1x1, Float2x2, Float3x3, Float4x4, Matrix,
};
pub use scalar::Scalar;
pub use vector::{Double2, Double3, Double4, Float2, Float3, Float4, Vector};
