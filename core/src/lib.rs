//! Core functionality of the `gimbal` project.
//!
//! A small math library for real-time 3D graphics: three-component vectors,
//! 4×4 matrices, and the translation, rotation, scaling, projection and
//! camera transforms built from them. Results are plain values that can be
//! uploaded to a graphics backend as they are.
//!
//! ```
//! use gimbal_core::prelude::*;
//!
//! let model: Mat4 = translation(vec3(0.0, 0.0, -5.0)).scale(splat(2.0));
//! let p = model.transform_point(vec3(0.0, 0.0, 0.0));
//! assert_eq!(p, vec3(0.0, 0.0, -5.0));
//! ```
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of the standard library, in
//!   particular the trigonometric ones. Enabled by default.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! * `tracing`:
//!   Emits `trace`-level events through the
//!   [tracing](https://crates.io/crates/tracing) crate when an operation
//!   meets a degenerate input, such as inverting a singular matrix.
//!
//! Without any of `std`, `libm`, or `mm`, the crate is `no_std` and the
//! rotation and perspective constructors are unavailable.

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod math;

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::mat::{
        axis_rotation, perspective, rotation_x, rotation_y, rotation_z,
    };
    pub use crate::math::{
        approx::ApproxEq,
        ctx::Ctx,
        mat::{Mat4, frustum, look_at, ortho, scaling, translation},
        rand::Distrib,
        scalar::Scalar,
        vec::{Vec3, splat, vec3},
    };
}
