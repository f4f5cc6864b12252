//! Linear algebra for 3D graphics.
//!
//! Includes [3-vectors][self::vec], [4×4 matrices][mat] and the usual
//! transforms built from them, a [factory][ctx] for choosing the element
//! type, and utilities such as [approximate equality][approx] comparisons
//! and [pseudo-random numbers][rand].
//!
//! Vectors are treated as row vectors multiplied on the left of a matrix,
//! and matrices are stored row by row with the translation in the last row.
//! See the [`mat`] module for details.

pub use {
    approx::ApproxEq,
    ctx::Ctx,
    mat::{Mat4, frustum, look_at, ortho, scaling, translation},
    scalar::Scalar,
    vec::{Vec3, splat, vec3},
};
#[cfg(feature = "fp")]
pub use mat::{axis_rotation, perspective, rotation_x, rotation_y, rotation_z};

pub mod approx;
pub mod ctx;
pub mod float;
pub mod mat;
pub mod rand;
pub mod scalar;
pub mod vec;
