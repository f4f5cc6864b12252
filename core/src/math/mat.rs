//! Matrices and linear transforms.
//!
//! A [`Mat4`] stores its sixteen elements row by row: the element on row `r`,
//! column `c` is at flat index `r * 4 + c`. Rows 0, 1, and 2 hold the images
//! of the x, y, and z basis vectors and row 3 holds the translation, so a
//! vector `v` is transformed as the row vector `v · M`. Read in column-major
//! order, the same sixteen numbers form the conventional column-vector
//! matrix, which is the layout graphics APIs expect when uploading uniforms.
//!
//! `a.multiply(&b)` returns the transform that applies `b` first and `a`
//! second. The incremental transforms such as [`Mat4::translate`] and
//! [`Mat4::rotate_x`] compose the same way: `m.rotate_x(t)` equals
//! `m.multiply(&rotation_x(t))`, that is, the rotation happens in the local
//! space of `m`.
//!
//! None of the functions in this module fail. Singular or otherwise
//! degenerate inputs produce infinities and NaNs instead.

use core::fmt::{self, Debug, Formatter};
use core::ops;

use crate::math::approx::ApproxEq;
use crate::math::scalar::Scalar;
use crate::math::vec::{Vec3, vec3};

/// A 4×4 matrix with elements of type `S`, stored in row-major order.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq)]
pub struct Mat4<S = f32>(pub [S; 16]);

impl<S> Mat4<S> {
    /// Returns a matrix with the given elements in row-major order.
    #[inline]
    pub const fn new(els: [S; 16]) -> Self {
        Self(els)
    }

    /// Returns the elements of `self` in row-major order.
    #[inline]
    pub const fn as_array(&self) -> &[S; 16] {
        &self.0
    }

    /// Returns the elements of `self` as a slice, ready for uploading
    /// to a graphics backend as a column-major `mat4`.
    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.0
    }
}

impl<S: Scalar> Mat4<S> {
    /// Returns the all-zeroes matrix.
    pub fn zero() -> Self {
        Self([S::ZERO; 16])
    }

    /// Returns the identity matrix.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::Mat4;
    ///
    /// let m: Mat4 = Mat4::identity();
    /// assert_eq!(m.as_array(), &[
    ///     1.0, 0.0, 0.0, 0.0,
    ///     0.0, 1.0, 0.0, 0.0,
    ///     0.0, 0.0, 1.0, 0.0,
    ///     0.0, 0.0, 0.0, 1.0,
    /// ]);
    /// ```
    pub fn identity() -> Self {
        let (o, l) = (S::ZERO, S::ONE);
        #[rustfmt::skip]
        let m = Self([
            l, o, o, o,
            o, l, o, o,
            o, o, l, o,
            o, o, o, l,
        ]);
        m
    }

    /// Returns a matrix with the given rows.
    pub fn from_rows(rows: [[S; 4]; 4]) -> Self {
        let [r0, r1, r2, r3] = rows;
        #[rustfmt::skip]
        let m = Self([
            r0[0], r0[1], r0[2], r0[3],
            r1[0], r1[1], r1[2], r1[3],
            r2[0], r2[1], r2[2], r2[3],
            r3[0], r3[1], r3[2], r3[3],
        ]);
        m
    }

    /// Returns the element on row `r`, column `c`.
    ///
    /// # Panics
    /// If `r` or `c` is greater than 3.
    #[inline]
    pub fn at(&self, r: usize, c: usize) -> S {
        assert!(c < 4, "column index out of bounds: {c}");
        self.0[r * 4 + c]
    }

    /// Returns row `i` of `self`.
    ///
    /// # Panics
    /// If `i` is greater than 3.
    #[inline]
    pub fn row(&self, i: usize) -> [S; 4] {
        let o = i * 4;
        [self.0[o], self.0[o + 1], self.0[o + 2], self.0[o + 3]]
    }

    //
    // Composition
    //

    /// Returns the matrix product that applies `other` first, then `self`.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::{Mat4, scaling, translation, vec3};
    ///
    /// let s: Mat4 = scaling(vec3(2.0, 2.0, 2.0));
    /// let t = translation(vec3(1.0, 0.0, 0.0));
    ///
    /// // Scale, then translate
    /// let m = t.multiply(&s);
    /// assert_eq!(m.transform_point(vec3(1.0, 1.0, 1.0)), vec3(3.0, 2.0, 2.0));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        #[rustfmt::skip]
        let [
            a00, a01, a02, a03,
            a10, a11, a12, a13,
            a20, a21, a22, a23,
            a30, a31, a32, a33,
        ] = self.0;
        #[rustfmt::skip]
        let [
            b00, b01, b02, b03,
            b10, b11, b12, b13,
            b20, b21, b22, b23,
            b30, b31, b32, b33,
        ] = other.0;

        Self([
            a00 * b00 + a10 * b01 + a20 * b02 + a30 * b03,
            a01 * b00 + a11 * b01 + a21 * b02 + a31 * b03,
            a02 * b00 + a12 * b01 + a22 * b02 + a32 * b03,
            a03 * b00 + a13 * b01 + a23 * b02 + a33 * b03,
            a00 * b10 + a10 * b11 + a20 * b12 + a30 * b13,
            a01 * b10 + a11 * b11 + a21 * b12 + a31 * b13,
            a02 * b10 + a12 * b11 + a22 * b12 + a32 * b13,
            a03 * b10 + a13 * b11 + a23 * b12 + a33 * b13,
            a00 * b20 + a10 * b21 + a20 * b22 + a30 * b23,
            a01 * b20 + a11 * b21 + a21 * b22 + a31 * b23,
            a02 * b20 + a12 * b21 + a22 * b22 + a32 * b23,
            a03 * b20 + a13 * b21 + a23 * b22 + a33 * b23,
            a00 * b30 + a10 * b31 + a20 * b32 + a30 * b33,
            a01 * b30 + a11 * b31 + a21 * b32 + a31 * b33,
            a02 * b30 + a12 * b31 + a22 * b32 + a32 * b33,
            a03 * b30 + a13 * b31 + a23 * b32 + a33 * b33,
        ])
    }

    /// Returns the transpose of `self`.
    pub fn transpose(&self) -> Self {
        #[rustfmt::skip]
        let [
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        ] = self.0;
        #[rustfmt::skip]
        let t = Self([
            m00, m10, m20, m30,
            m01, m11, m21, m31,
            m02, m12, m22, m32,
            m03, m13, m23, m33,
        ]);
        t
    }

    /// Transposes `self` in place by swapping the off-diagonal pairs,
    /// and returns `self`.
    pub fn transpose_in_place(&mut self) -> &mut Self {
        let m = &mut self.0;
        m.swap(1, 4);
        m.swap(2, 8);
        m.swap(3, 12);
        m.swap(6, 9);
        m.swap(7, 13);
        m.swap(11, 14);
        self
    }

    /// Returns the determinant of `self`.
    pub fn determinant(&self) -> S {
        let m = &self.0;
        let det3 = |j: usize, k: usize, l: usize| {
            let [a, b, c] = [m[4 + j], m[4 + k], m[4 + l]];
            let [d, e, f] = [m[8 + j], m[8 + k], m[8 + l]];
            let [g, h, i] = [m[12 + j], m[12 + k], m[12 + l]];

            a * (e * i - f * h) + b * (f * g - d * i) + c * (d * h - e * g)
        };
        let [a, b, c, d] = [m[0], m[1], m[2], m[3]];

        a * det3(1, 2, 3) - b * det3(0, 2, 3) + c * det3(0, 1, 3)
            - d * det3(0, 1, 2)
    }

    /// Returns the inverse of `self`.
    ///
    /// Computed by cofactor expansion. If `self` is singular, the result
    /// contains infinities or NaNs; see [`Self::checked_inverse`] for a
    /// variant that detects this.
    pub fn inverse(&self) -> Self {
        #[rustfmt::skip]
        let [
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        ] = self.0;

        // Products of pairs of elements in the bottom two rows...
        let tmp_0 = m22 * m33;
        let tmp_1 = m32 * m23;
        let tmp_2 = m12 * m33;
        let tmp_3 = m32 * m13;
        let tmp_4 = m12 * m23;
        let tmp_5 = m22 * m13;
        let tmp_6 = m02 * m33;
        let tmp_7 = m32 * m03;
        let tmp_8 = m02 * m23;
        let tmp_9 = m22 * m03;
        let tmp_10 = m02 * m13;
        let tmp_11 = m12 * m03;
        // ...and in the top two rows
        let tmp_12 = m20 * m31;
        let tmp_13 = m30 * m21;
        let tmp_14 = m10 * m31;
        let tmp_15 = m30 * m11;
        let tmp_16 = m10 * m21;
        let tmp_17 = m20 * m11;
        let tmp_18 = m00 * m31;
        let tmp_19 = m30 * m01;
        let tmp_20 = m00 * m21;
        let tmp_21 = m20 * m01;
        let tmp_22 = m00 * m11;
        let tmp_23 = m10 * m01;

        let t0 = (tmp_0 * m11 + tmp_3 * m21 + tmp_4 * m31)
            - (tmp_1 * m11 + tmp_2 * m21 + tmp_5 * m31);
        let t1 = (tmp_1 * m01 + tmp_6 * m21 + tmp_9 * m31)
            - (tmp_0 * m01 + tmp_7 * m21 + tmp_8 * m31);
        let t2 = (tmp_2 * m01 + tmp_7 * m11 + tmp_10 * m31)
            - (tmp_3 * m01 + tmp_6 * m11 + tmp_11 * m31);
        let t3 = (tmp_5 * m01 + tmp_8 * m11 + tmp_11 * m21)
            - (tmp_4 * m01 + tmp_9 * m11 + tmp_10 * m21);

        let det = m00 * t0 + m10 * t1 + m20 * t2 + m30 * t3;
        #[cfg(feature = "tracing")]
        if det == S::ZERO {
            tracing::trace!(m = ?self, "inverting a singular matrix");
        }
        let d = S::ONE / det;

        Self([
            d * t0,
            d * t1,
            d * t2,
            d * t3,
            d * ((tmp_1 * m10 + tmp_2 * m20 + tmp_5 * m30)
                - (tmp_0 * m10 + tmp_3 * m20 + tmp_4 * m30)),
            d * ((tmp_0 * m00 + tmp_7 * m20 + tmp_8 * m30)
                - (tmp_1 * m00 + tmp_6 * m20 + tmp_9 * m30)),
            d * ((tmp_3 * m00 + tmp_6 * m10 + tmp_11 * m30)
                - (tmp_2 * m00 + tmp_7 * m10 + tmp_10 * m30)),
            d * ((tmp_4 * m00 + tmp_9 * m10 + tmp_10 * m20)
                - (tmp_5 * m00 + tmp_8 * m10 + tmp_11 * m20)),
            d * ((tmp_12 * m13 + tmp_15 * m23 + tmp_16 * m33)
                - (tmp_13 * m13 + tmp_14 * m23 + tmp_17 * m33)),
            d * ((tmp_13 * m03 + tmp_18 * m23 + tmp_21 * m33)
                - (tmp_12 * m03 + tmp_19 * m23 + tmp_20 * m33)),
            d * ((tmp_14 * m03 + tmp_19 * m13 + tmp_22 * m33)
                - (tmp_15 * m03 + tmp_18 * m13 + tmp_23 * m33)),
            d * ((tmp_17 * m03 + tmp_20 * m13 + tmp_23 * m23)
                - (tmp_16 * m03 + tmp_21 * m13 + tmp_22 * m23)),
            d * ((tmp_14 * m22 + tmp_17 * m32 + tmp_13 * m12)
                - (tmp_16 * m32 + tmp_12 * m12 + tmp_15 * m22)),
            d * ((tmp_20 * m32 + tmp_12 * m02 + tmp_19 * m22)
                - (tmp_18 * m22 + tmp_21 * m32 + tmp_13 * m02)),
            d * ((tmp_18 * m12 + tmp_23 * m32 + tmp_15 * m02)
                - (tmp_22 * m32 + tmp_14 * m02 + tmp_19 * m12)),
            d * ((tmp_22 * m22 + tmp_16 * m02 + tmp_21 * m12)
                - (tmp_20 * m12 + tmp_23 * m22 + tmp_17 * m02)),
        ])
    }

    /// Returns the inverse of `self`, or `None` if `self` is singular or
    /// its determinant is not finite.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::{Mat4, scaling, vec3};
    ///
    /// let m: Mat4 = scaling(vec3(2.0, 4.0, 0.5));
    /// assert_eq!(m.checked_inverse(), Some(scaling(vec3(0.5, 0.25, 2.0))));
    ///
    /// let flat: Mat4 = scaling(vec3(1.0, 1.0, 0.0));
    /// assert_eq!(flat.checked_inverse(), None);
    /// ```
    pub fn checked_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        (det != S::ZERO && det.is_finite()).then(|| self.inverse())
    }

    /// Returns the additive inverse of `self`.
    pub fn neg(&self) -> Self {
        Self(self.0.map(|x| -x))
    }

    /// Writes the elements of `self` to `dst` and returns `dst`.
    #[inline]
    pub fn copy_to<'a>(&self, dst: &'a mut Self) -> &'a mut Self {
        *dst = *self;
        dst
    }

    //
    // Translation and basis rows
    //

    /// Returns the translation part of `self`, that is, row 3.
    #[inline]
    pub fn translation(&self) -> Vec3<S> {
        vec3(self.0[12], self.0[13], self.0[14])
    }

    /// Replaces the translation part of `self` with `v`, and returns `self`.
    ///
    /// Also resets the bottom-right element to one.
    pub fn set_translation(&mut self, v: Vec3<S>) -> &mut Self {
        let [v0, v1, v2] = v.0;
        let m = &mut self.0;
        m[12] = v0;
        m[13] = v1;
        m[14] = v2;
        m[15] = S::ONE;
        self
    }

    /// Returns a copy of `self` with its translation part replaced by `v`.
    pub fn with_translation(&self, v: Vec3<S>) -> Self {
        let mut m = *self;
        m.set_translation(v);
        m
    }

    /// Returns the basis vector on row `axis` of `self` (0 = x, 1 = y, 2 = z).
    ///
    /// # Panics
    /// If `axis` is greater than 3.
    #[inline]
    pub fn axis(&self, axis: usize) -> Vec3<S> {
        let o = axis * 4;
        vec3(self.0[o], self.0[o + 1], self.0[o + 2])
    }

    /// Replaces the basis vector on row `axis` with `v`, and returns `self`.
    ///
    /// # Panics
    /// If `axis` is greater than 3.
    pub fn set_axis(&mut self, v: Vec3<S>, axis: usize) -> &mut Self {
        let o = axis * 4;
        let [v0, v1, v2] = v.0;
        let m = &mut self.0;
        m[o] = v0;
        m[o + 1] = v1;
        m[o + 2] = v2;
        self
    }

    /// Returns a copy of `self` with the basis vector on row `axis`
    /// replaced by `v`.
    pub fn with_axis(&self, v: Vec3<S>, axis: usize) -> Self {
        let mut m = *self;
        m.set_axis(v, axis);
        m
    }

    //
    // Incremental transforms
    //

    /// Translates `self` by `v` in its local space, and returns `self`.
    pub fn translate_in_place(&mut self, v: Vec3<S>) -> &mut Self {
        let [v0, v1, v2] = v.0;
        let m = &mut self.0;
        #[rustfmt::skip]
        let [
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            m30, m31, m32, m33,
        ] = *m;

        m[12] = m00 * v0 + m10 * v1 + m20 * v2 + m30;
        m[13] = m01 * v0 + m11 * v1 + m21 * v2 + m31;
        m[14] = m02 * v0 + m12 * v1 + m22 * v2 + m32;
        m[15] = m03 * v0 + m13 * v1 + m23 * v2 + m33;
        self
    }

    /// Returns `self` translated by `v` in its local space.
    ///
    /// Equivalent to `self.multiply(&translation(v))`.
    pub fn translate(&self, v: Vec3<S>) -> Self {
        let mut m = *self;
        m.translate_in_place(v);
        m
    }

    /// Scales the basis rows of `self` by the components of `v`,
    /// and returns `self`.
    pub fn scale_in_place(&mut self, v: Vec3<S>) -> &mut Self {
        let [v0, v1, v2] = v.0;
        let m = &mut self.0;
        for (row, k) in [(0, v0), (4, v1), (8, v2)] {
            m[row] *= k;
            m[row + 1] *= k;
            m[row + 2] *= k;
            m[row + 3] *= k;
        }
        self
    }

    /// Returns `self` scaled by `v` in its local space.
    ///
    /// Equivalent to `self.multiply(&scaling(v))`.
    pub fn scale(&self, v: Vec3<S>) -> Self {
        let mut m = *self;
        m.scale_in_place(v);
        m
    }

    //
    // Application
    //

    /// Transforms the point `v` by `self`, including the homogeneous divide.
    ///
    /// # Examples
    /// ```
    /// use gimbal_core::math::{Mat4, translation, vec3};
    ///
    /// let m: Mat4 = translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m.transform_point(vec3(0.0, 0.0, 0.0)), vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn transform_point(&self, v: Vec3<S>) -> Vec3<S> {
        let [v0, v1, v2] = v.0;
        let m = &self.0;
        let w = v0 * m[3] + v1 * m[7] + v2 * m[11] + m[15];

        vec3(
            (v0 * m[0] + v1 * m[4] + v2 * m[8] + m[12]) / w,
            (v0 * m[1] + v1 * m[5] + v2 * m[9] + m[13]) / w,
            (v0 * m[2] + v1 * m[6] + v2 * m[10] + m[14]) / w,
        )
    }

    /// Transforms the direction `v` by the upper-left 3×3 part of `self`.
    ///
    /// Translation and projection are ignored.
    pub fn transform_direction(&self, v: Vec3<S>) -> Vec3<S> {
        let [v0, v1, v2] = v.0;
        let m = &self.0;

        vec3(
            v0 * m[0] + v1 * m[4] + v2 * m[8],
            v0 * m[1] + v1 * m[5] + v2 * m[9],
            v0 * m[2] + v1 * m[6] + v2 * m[10],
        )
    }

    /// Transforms the surface normal `v` by the inverse transpose of the
    /// upper-left 3×3 part of `self`.
    ///
    /// The inverse is recomputed on every call. To transform many normals
    /// by the same matrix, invert it once and use the rows of the inverse.
    pub fn transform_normal(&self, v: Vec3<S>) -> Vec3<S> {
        let [v0, v1, v2] = v.0;
        let mi = self.inverse().0;

        vec3(
            v0 * mi[0] + v1 * mi[1] + v2 * mi[2],
            v0 * mi[4] + v1 * mi[5] + v2 * mi[6],
            v0 * mi[8] + v1 * mi[9] + v2 * mi[10],
        )
    }

    /// Converts the elements of `self` to another scalar type.
    pub fn cast<T: Scalar>(&self) -> Mat4<T> {
        Mat4(self.0.map(S::cast))
    }
}

#[cfg(feature = "fp")]
impl<S: Scalar> Mat4<S> {
    /// Rotates `self` about its local x axis by `angle` radians,
    /// and returns `self`. Only rows 1 and 2 are modified.
    pub fn rotate_x_in_place(&mut self, angle: S) -> &mut Self {
        let (s, c) = (angle.sin(), angle.cos());
        let m = &mut self.0;
        let [m10, m11, m12, m13] = [m[4], m[5], m[6], m[7]];
        let [m20, m21, m22, m23] = [m[8], m[9], m[10], m[11]];

        m[4] = c * m10 + s * m20;
        m[5] = c * m11 + s * m21;
        m[6] = c * m12 + s * m22;
        m[7] = c * m13 + s * m23;
        m[8] = c * m20 - s * m10;
        m[9] = c * m21 - s * m11;
        m[10] = c * m22 - s * m12;
        m[11] = c * m23 - s * m13;
        self
    }

    /// Returns `self` rotated about its local x axis by `angle` radians.
    ///
    /// Equivalent to `self.multiply(&rotation_x(angle))`.
    pub fn rotate_x(&self, angle: S) -> Self {
        let mut m = *self;
        m.rotate_x_in_place(angle);
        m
    }

    /// Rotates `self` about its local y axis by `angle` radians,
    /// and returns `self`. Only rows 0 and 2 are modified.
    pub fn rotate_y_in_place(&mut self, angle: S) -> &mut Self {
        let (s, c) = (angle.sin(), angle.cos());
        let m = &mut self.0;
        let [m00, m01, m02, m03] = [m[0], m[1], m[2], m[3]];
        let [m20, m21, m22, m23] = [m[8], m[9], m[10], m[11]];

        m[0] = c * m00 - s * m20;
        m[1] = c * m01 - s * m21;
        m[2] = c * m02 - s * m22;
        m[3] = c * m03 - s * m23;
        m[8] = c * m20 + s * m00;
        m[9] = c * m21 + s * m01;
        m[10] = c * m22 + s * m02;
        m[11] = c * m23 + s * m03;
        self
    }

    /// Returns `self` rotated about its local y axis by `angle` radians.
    ///
    /// Equivalent to `self.multiply(&rotation_y(angle))`.
    pub fn rotate_y(&self, angle: S) -> Self {
        let mut m = *self;
        m.rotate_y_in_place(angle);
        m
    }

    /// Rotates `self` about its local z axis by `angle` radians,
    /// and returns `self`. Only rows 0 and 1 are modified.
    pub fn rotate_z_in_place(&mut self, angle: S) -> &mut Self {
        let (s, c) = (angle.sin(), angle.cos());
        let m = &mut self.0;
        let [m00, m01, m02, m03] = [m[0], m[1], m[2], m[3]];
        let [m10, m11, m12, m13] = [m[4], m[5], m[6], m[7]];

        m[0] = c * m00 + s * m10;
        m[1] = c * m01 + s * m11;
        m[2] = c * m02 + s * m12;
        m[3] = c * m03 + s * m13;
        m[4] = c * m10 - s * m00;
        m[5] = c * m11 - s * m01;
        m[6] = c * m12 - s * m02;
        m[7] = c * m13 - s * m03;
        self
    }

    /// Returns `self` rotated about its local z axis by `angle` radians.
    ///
    /// Equivalent to `self.multiply(&rotation_z(angle))`.
    pub fn rotate_z(&self, angle: S) -> Self {
        let mut m = *self;
        m.rotate_z_in_place(angle);
        m
    }

    /// Rotates `self` about `axis`, given in its local space, by `angle`
    /// radians, and returns `self`. The translation row is not modified.
    ///
    /// `axis` need not be normalized, but must not be zero.
    pub fn axis_rotate_in_place(
        &mut self,
        axis: Vec3<S>,
        angle: S,
    ) -> &mut Self {
        let [r0, r1, r2] = rotation_basis(axis, angle);
        let m = &mut self.0;
        #[rustfmt::skip]
        let [
            m00, m01, m02, m03,
            m10, m11, m12, m13,
            m20, m21, m22, m23,
            ..
        ] = *m;

        for (o, [r_0, r_1, r_2]) in [(0, r0), (4, r1), (8, r2)] {
            m[o] = r_0 * m00 + r_1 * m10 + r_2 * m20;
            m[o + 1] = r_0 * m01 + r_1 * m11 + r_2 * m21;
            m[o + 2] = r_0 * m02 + r_1 * m12 + r_2 * m22;
            m[o + 3] = r_0 * m03 + r_1 * m13 + r_2 * m23;
        }
        self
    }

    /// Returns `self` rotated about the local `axis` by `angle` radians.
    ///
    /// Equivalent to `self.multiply(&axis_rotation(axis, angle))`.
    pub fn axis_rotate(&self, axis: Vec3<S>, angle: S) -> Self {
        let mut m = *self;
        m.axis_rotate_in_place(axis, angle);
        m
    }
}

//
// Constructors
//

/// Returns a matrix that translates by `v`.
pub fn translation<S: Scalar>(v: Vec3<S>) -> Mat4<S> {
    let (o, l) = (S::ZERO, S::ONE);
    let [x, y, z] = v.0;
    #[rustfmt::skip]
    let m = Mat4([
        l, o, o, o,
        o, l, o, o,
        o, o, l, o,
        x, y, z, l,
    ]);
    m
}

/// Returns a matrix that scales each axis by the corresponding
/// component of `v`.
pub fn scaling<S: Scalar>(v: Vec3<S>) -> Mat4<S> {
    let (o, l) = (S::ZERO, S::ONE);
    let [x, y, z] = v.0;
    #[rustfmt::skip]
    let m = Mat4([
        x, o, o, o,
        o, y, o, o,
        o, o, z, o,
        o, o, o, l,
    ]);
    m
}

/// Returns a matrix that rotates by `angle` radians about the x axis.
///
/// Positive angles rotate y towards z.
#[cfg(feature = "fp")]
pub fn rotation_x<S: Scalar>(angle: S) -> Mat4<S> {
    let (o, l) = (S::ZERO, S::ONE);
    let (s, c) = (angle.sin(), angle.cos());
    #[rustfmt::skip]
    let m = Mat4([
        l,  o, o, o,
        o,  c, s, o,
        o, -s, c, o,
        o,  o, o, l,
    ]);
    m
}

/// Returns a matrix that rotates by `angle` radians about the y axis.
///
/// Positive angles rotate z towards x.
#[cfg(feature = "fp")]
pub fn rotation_y<S: Scalar>(angle: S) -> Mat4<S> {
    let (o, l) = (S::ZERO, S::ONE);
    let (s, c) = (angle.sin(), angle.cos());
    #[rustfmt::skip]
    let m = Mat4([
        c, o, -s, o,
        o, l,  o, o,
        s, o,  c, o,
        o, o,  o, l,
    ]);
    m
}

/// Returns a matrix that rotates by `angle` radians about the z axis.
///
/// Positive angles rotate x towards y.
///
/// # Examples
/// ```
/// use core::f32::consts::FRAC_PI_2;
/// use gimbal_core::{assert_approx_eq, math::{rotation_z, vec3}};
///
/// let m = rotation_z(FRAC_PI_2);
/// let v = m.transform_direction(vec3(1.0, 0.0, 0.0));
/// assert_approx_eq!(v, vec3(0.0, 1.0, 0.0));
/// ```
#[cfg(feature = "fp")]
pub fn rotation_z<S: Scalar>(angle: S) -> Mat4<S> {
    let (o, l) = (S::ZERO, S::ONE);
    let (s, c) = (angle.sin(), angle.cos());
    #[rustfmt::skip]
    let m = Mat4([
         c, s, o, o,
        -s, c, o, o,
         o, o, l, o,
         o, o, o, l,
    ]);
    m
}

/// Returns a matrix that rotates by `angle` radians about `axis`.
///
/// `axis` need not be normalized. A zero axis yields NaNs.
#[cfg(feature = "fp")]
pub fn axis_rotation<S: Scalar>(axis: Vec3<S>, angle: S) -> Mat4<S> {
    let o = S::ZERO;
    let [[r00, r01, r02], [r10, r11, r12], [r20, r21, r22]] =
        rotation_basis(axis, angle);
    #[rustfmt::skip]
    let m = Mat4([
        r00, r01, r02, o,
        r10, r11, r12, o,
        r20, r21, r22, o,
          o,   o,   o, S::ONE,
    ]);
    m
}

/// Returns the rows of the 3×3 rotation by `angle` about `axis`,
/// by Rodrigues' rotation formula.
#[cfg(feature = "fp")]
fn rotation_basis<S: Scalar>(axis: Vec3<S>, angle: S) -> [[S; 3]; 3] {
    let n = axis.len();
    #[cfg(feature = "tracing")]
    if n == S::ZERO {
        tracing::trace!("rotating about a zero-length axis");
    }
    let [x, y, z] = axis.div_scalar(n).0;
    let (xx, yy, zz) = (x * x, y * y, z * z);
    let (s, c) = (angle.sin(), angle.cos());
    let one_minus_cos = S::ONE - c;

    [
        [
            xx + (S::ONE - xx) * c,
            x * y * one_minus_cos + z * s,
            x * z * one_minus_cos - y * s,
        ],
        [
            x * y * one_minus_cos - z * s,
            yy + (S::ONE - yy) * c,
            y * z * one_minus_cos + x * s,
        ],
        [
            x * z * one_minus_cos + y * s,
            y * z * one_minus_cos - x * s,
            zz + (S::ONE - zz) * c,
        ],
    ]
}

/// Returns a perspective projection matrix.
///
/// Maps the symmetric view frustum with vertical field of view `fov_y`
/// radians and width-to-height ratio `aspect`, looking down the negative
/// z axis, onto the clip volume whose x and y span [-1, 1] and z spans
/// [0, 1]. `z_near` and `z_far` are positive distances to the near and far
/// planes; points on the near plane map to depth 0 and points on the far
/// plane to depth 1.
///
/// # Examples
/// ```
/// use core::f32::consts::FRAC_PI_2;
/// use gimbal_core::{assert_approx_eq, math::{perspective, vec3}};
///
/// let m = perspective(FRAC_PI_2, 1.0, 1.0, 100.0);
/// assert_approx_eq!(m.transform_point(vec3(0.0, 0.0, -1.0)).z(), 0.0);
/// assert_approx_eq!(m.transform_point(vec3(0.0, 0.0, -100.0)).z(), 1.0);
/// ```
#[cfg(feature = "fp")]
pub fn perspective<S: Scalar>(
    fov_y: S,
    aspect: S,
    z_near: S,
    z_far: S,
) -> Mat4<S> {
    let (o, half) = (S::ZERO, S::from_f64(0.5));
    let f = (S::from_f64(core::f64::consts::FRAC_PI_2) - half * fov_y).tan();
    let range_inv = S::ONE / (z_near - z_far);

    #[rustfmt::skip]
    let m = Mat4([
        f / aspect, o, o, o,
        o, f, o, o,
        o, o, z_far * range_inv, -S::ONE,
        o, o, z_near * z_far * range_inv, o,
    ]);
    m
}

/// Returns an orthographic projection matrix.
///
/// Maps the box bounded by `left`, `right`, `bottom`, and `top`, and by the
/// planes at distances `near` and `far` along the negative z axis, onto the
/// clip volume whose x and y span [-1, 1] and z spans [0, 1]. The near
/// plane maps to depth 0 and the far plane to depth 1.
pub fn ortho<S: Scalar>(
    left: S,
    right: S,
    bottom: S,
    top: S,
    near: S,
    far: S,
) -> Mat4<S> {
    let (o, l, two) = (S::ZERO, S::ONE, S::from_f64(2.0));

    #[rustfmt::skip]
    let m = Mat4([
        two / (right - left), o, o, o,
        o, two / (top - bottom), o, o,
        o, o, l / (near - far), o,
        (right + left) / (left - right),
        (top + bottom) / (bottom - top),
        near / (near - far),
        l,
    ]);
    m
}

/// Returns a perspective projection matrix for a general, possibly
/// off-axis, view frustum.
///
/// `left`, `right`, `bottom`, and `top` bound the frustum at the near
/// plane, which lies at distance `near` along the negative z axis. Depth
/// maps to [0, 1] as in [`perspective`].
pub fn frustum<S: Scalar>(
    left: S,
    right: S,
    bottom: S,
    top: S,
    near: S,
    far: S,
) -> Mat4<S> {
    let (o, two) = (S::ZERO, S::from_f64(2.0));
    let dx = right - left;
    let dy = top - bottom;
    let dz = near - far;

    #[rustfmt::skip]
    let m = Mat4([
        two * near / dx, o, o, o,
        o, two * near / dy, o, o,
        (left + right) / dx, (top + bottom) / dy, far / dz, -S::ONE,
        o, o, near * far / dz, o,
    ]);
    m
}

/// Returns a matrix that positions and orients a camera at `eye`,
/// looking at `target`, with `up` pointing roughly upwards.
///
/// This is a camera-to-world transform whose z axis points from `target`
/// towards `eye`: it is *not* a view matrix. Take its
/// [inverse][Mat4::inverse] to transform world space to view space.
///
/// # Examples
/// ```
/// use gimbal_core::math::{Mat4, look_at, vec3};
///
/// let eye = vec3(0.0f32, 0.0, 5.0);
/// let m = look_at(eye, vec3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
/// assert_eq!(m.translation(), eye);
/// assert_eq!(m.axis(2), vec3(0.0, 0.0, 1.0));
/// ```
pub fn look_at<S: Scalar>(
    eye: Vec3<S>,
    target: Vec3<S>,
    up: Vec3<S>,
) -> Mat4<S> {
    let z_axis = eye.sub(target).normalize();
    let x_axis = up.cross(z_axis).normalize();
    let y_axis = z_axis.cross(x_axis).normalize();

    let (o, l) = (S::ZERO, S::ONE);
    let [xx, xy, xz] = x_axis.0;
    let [yx, yy, yz] = y_axis.0;
    let [zx, zy, zz] = z_axis.0;
    let [ex, ey, ez] = eye.0;
    #[rustfmt::skip]
    let m = Mat4([
        xx, xy, xz, o,
        yx, yy, yz, o,
        zx, zy, zz, o,
        ex, ey, ez, l,
    ]);
    m
}

//
// Foreign trait impls
//

impl<S: Scalar> Default for Mat4<S> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Debug> Debug for Mat4<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4[")?;
        for row in self.0.chunks_exact(4) {
            writeln!(f, "    {:6.2?}", row)?;
        }
        write!(f, "]")
    }
}

impl<S> From<[S; 16]> for Mat4<S> {
    #[inline]
    fn from(els: [S; 16]) -> Self {
        Self(els)
    }
}

impl<S: Scalar> From<[[S; 4]; 4]> for Mat4<S> {
    #[inline]
    fn from(rows: [[S; 4]; 4]) -> Self {
        Self::from_rows(rows)
    }
}

impl<S> ops::Index<usize> for Mat4<S> {
    type Output = S;
    #[inline]
    fn index(&self, i: usize) -> &S {
        &self.0[i]
    }
}

impl<S> ops::IndexMut<usize> for Mat4<S> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut S {
        &mut self.0[i]
    }
}

impl<S: Scalar> ops::Mul for Mat4<S> {
    type Output = Self;
    /// Returns the matrix product that applies `rhs` first, then `self`.
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl<S: Scalar> ops::Mul<&Mat4<S>> for &Mat4<S> {
    type Output = Mat4<S>;
    #[inline]
    fn mul(self, rhs: &Mat4<S>) -> Mat4<S> {
        self.multiply(rhs)
    }
}

impl<S: Scalar> ops::Neg for Mat4<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Mat4::neg(&self)
    }
}

impl<S: ApproxEq> ApproxEq<Self, S> for Mat4<S> {
    fn approx_eq_eps(&self, other: &Self, eps: &S) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
    fn relative_epsilon() -> S {
        S::relative_epsilon()
    }
}
