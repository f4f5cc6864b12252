//! Floating-point compatibility API.
//!
//! Most floating-point functions are currently unavailable in `no_std`.
//! This module provides the missing functions using either the `libm` or
//! `micromath` crate, depending on which feature is enabled. As a fallback,
//! it also implements `abs` and `sqrt` even if none of the features is
//! enabled, which is enough for everything except the trigonometric
//! constructors.
//!
//! Each backend comes in an `f32` and an `f64` flavor. The selected pair is
//! re-exported as `float::f32` and `float::f64`, so that calls read like
//! `f32::sqrt(x)` whichever backend is in use.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::fabsf as abs;
    pub use libm::sqrtf as sqrt;

    pub use libm::cosf as cos;
    pub use libm::sinf as sin;
    pub use libm::tanf as tan;
}

#[cfg(feature = "libm")]
pub mod libm64 {
    pub use libm::fabs as abs;
    pub use libm::sqrt;

    pub use libm::{cos, sin, tan};
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    #[inline]
    pub fn abs(x: f32) -> f32 {
        mm::abs(x)
    }
    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        let y = mm::sqrt(x);
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }

    #[inline]
    pub fn sin(x: f32) -> f32 {
        mm::sin(x)
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        mm::cos(x)
    }
    #[inline]
    pub fn tan(x: f32) -> f32 {
        mm::tan(x)
    }
}

/// `micromath` only supports `f32`; the trigonometric functions round-trip
/// through single precision.
#[cfg(feature = "mm")]
pub mod mm64 {
    use super::mm;

    #[inline]
    pub fn abs(x: f64) -> f64 {
        super::fallback64::abs(x)
    }
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        let y = mm::sqrt(x as f32) as f64;
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }

    #[inline]
    pub fn sin(x: f64) -> f64 {
        mm::sin(x as f32) as f64
    }
    #[inline]
    pub fn cos(x: f64) -> f64 {
        mm::cos(x as f32) as f64
    }
    #[inline]
    pub fn tan(x: f64) -> f64 {
        mm::tan(x as f32) as f64
    }
}

pub mod fallback {
    /// Returns the absolute value of `x`.
    #[inline]
    pub fn abs(x: f32) -> f32 {
        f32::from_bits(x.to_bits() & 0x7fff_ffff)
    }
    /// Returns a fast approximation of the reciprocal square root of `x`.
    #[inline]
    pub fn recip_sqrt(x: f32) -> f32 {
        // https://en.wikipedia.org/wiki/Fast_inverse_square_root
        const MAGIC: u32 = 0x5f37_5a86;
        let mut y = f32::from_bits(MAGIC.saturating_sub(x.to_bits() >> 1));
        // Two rounds of Newton's method
        y = y * (1.5 - 0.5 * x * y * y);
        y = y * (1.5 - 0.5 * x * y * y);
        y
    }
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        1.0 / recip_sqrt(x)
    }
}

pub mod fallback64 {
    use super::fallback::recip_sqrt;

    /// Returns the absolute value of `x`.
    #[inline]
    pub fn abs(x: f64) -> f64 {
        f64::from_bits(x.to_bits() & 0x7fff_ffff_ffff_ffff)
    }
    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f64) -> f64 {
        let mut y = 1.0 / recip_sqrt(x as f32) as f64;
        // Newton's method converges quadratically from the f32 estimate
        for _ in 0..3 {
            y = 0.5 * (y + (x / y));
        }
        y
    }
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f64 = core::primitive::f64;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use self::{libm as f32, libm64 as f64};

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use self::{mm as f32, mm64 as f64};

#[cfg(not(feature = "fp"))]
pub use self::{fallback as f32, fallback64 as f64};
