//! A factory for vectors and matrices of configurable element types.
//!
//! A [`Ctx`] carries the element type of the vectors it creates and,
//! separately, of the matrices it creates. It holds no data, so it can be
//! copied around freely and passed to code that should not care whether it
//! works in single or double precision.
//!
//! # Examples
//! ```
//! use gimbal_core::math::{Ctx, Mat4, Vec3, translation, vec3};
//!
//! let ctx = Ctx::new().with_mat_type::<f64>();
//!
//! let m: Mat4<f64> = ctx.identity();
//! let v: Vec3<f32> = ctx.vec3(1.0, 2.0, 3.0);
//!
//! // Reads from a matrix yield vectors of the vector element type
//! let t = ctx.translation_of(&translation(vec3(4.0, 5.0, 6.0)));
//! assert_eq!(t, vec3(4.0f32, 5.0, 6.0));
//! # let _ = (m, v);
//! ```

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;

use crate::math::mat::Mat4;
use crate::math::scalar::Scalar;
use crate::math::vec::Vec3;

/// Creates vectors with elements of type `V` and matrices with elements
/// of type `M`.
pub struct Ctx<V = f32, M = f32>(PhantomData<fn() -> (V, M)>);

impl Ctx {
    /// Returns a context that creates `f32` vectors and matrices.
    #[inline]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<V: Scalar, M: Scalar> Ctx<V, M> {
    /// Returns a context that creates vectors of element type `T`
    /// and the same matrices as `self`.
    #[inline]
    pub fn with_vec_type<T: Scalar>(self) -> Ctx<T, M> {
        Ctx(PhantomData)
    }

    /// Returns a context that creates matrices of element type `T`
    /// and the same vectors as `self`.
    #[inline]
    pub fn with_mat_type<T: Scalar>(self) -> Ctx<V, T> {
        Ctx(PhantomData)
    }

    /// Returns the zero vector.
    #[inline]
    pub fn zero_vec3(&self) -> Vec3<V> {
        Vec3::zero()
    }

    /// Returns a vector with the given components.
    #[inline]
    pub fn vec3(&self, x: V, y: V, z: V) -> Vec3<V> {
        Vec3([x, y, z])
    }

    /// Returns the all-zeroes matrix.
    #[inline]
    pub fn zero_mat4(&self) -> Mat4<M> {
        Mat4::zero()
    }

    /// Returns the identity matrix.
    #[inline]
    pub fn identity(&self) -> Mat4<M> {
        Mat4::identity()
    }

    /// Converts a vector of any element type to the vector element type.
    #[inline]
    pub fn vec_from<T: Scalar>(&self, v: Vec3<T>) -> Vec3<V> {
        v.cast()
    }

    /// Converts a matrix of any element type to the matrix element type.
    #[inline]
    pub fn mat_from<T: Scalar>(&self, m: &Mat4<T>) -> Mat4<M> {
        m.cast()
    }

    /// Returns the translation part of `m` as a vector of the vector
    /// element type.
    #[inline]
    pub fn translation_of<T: Scalar>(&self, m: &Mat4<T>) -> Vec3<V> {
        m.translation().cast()
    }

    /// Returns the basis vector on row `axis` of `m` as a vector of the
    /// vector element type.
    ///
    /// # Panics
    /// If `axis` is greater than 3.
    #[inline]
    pub fn axis_of<T: Scalar>(&self, m: &Mat4<T>, axis: usize) -> Vec3<V> {
        m.axis(axis).cast()
    }

    /// Transforms the point `v` by `m` as in [`Mat4::transform_point`],
    /// returning a vector of the vector element type.
    #[inline]
    pub fn transform_point_of<T, U>(&self, m: &Mat4<T>, v: Vec3<U>) -> Vec3<V>
    where
        T: Scalar,
        U: Scalar,
    {
        m.transform_point(v.cast()).cast()
    }

    /// Transforms the direction `v` by `m` as in
    /// [`Mat4::transform_direction`], returning a vector of the vector
    /// element type.
    #[inline]
    pub fn transform_direction_of<T, U>(
        &self,
        m: &Mat4<T>,
        v: Vec3<U>,
    ) -> Vec3<V>
    where
        T: Scalar,
        U: Scalar,
    {
        m.transform_direction(v.cast()).cast()
    }

    /// Transforms the normal `v` by `m` as in [`Mat4::transform_normal`],
    /// returning a vector of the vector element type.
    #[inline]
    pub fn transform_normal_of<T, U>(
        &self,
        m: &Mat4<T>,
        v: Vec3<U>,
    ) -> Vec3<V>
    where
        T: Scalar,
        U: Scalar,
    {
        m.transform_normal(v.cast()).cast()
    }
}

impl<V, M> Copy for Ctx<V, M> {}

impl<V, M> Clone for Ctx<V, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V, M> Default for Ctx<V, M> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<V, M> Debug for Ctx<V, M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ctx<{}, {}>",
            core::any::type_name::<V>(),
            core::any::type_name::<M>()
        )
    }
}
