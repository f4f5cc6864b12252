#![cfg(feature = "fp")]

use core::f32::consts::FRAC_PI_2;

use gimbal_core::assert_approx_eq;
use gimbal_core::math::rand::{Distrib, Uniform, UnitSphere, Xorshift64};
use gimbal_core::prelude::*;

const COUNT: usize = 200;

fn rng() -> Xorshift64 {
    Xorshift64::default()
}

fn vecs() -> impl Iterator<Item = Vec3> {
    Uniform(splat(-10.0f32)..splat(10.0)).iter(rng())
}

/// Random affine transforms that are well-conditioned enough
/// to invert in single precision.
fn transforms() -> impl Iterator<Item = Mat4> {
    let mut rng = rng();
    let angles = Uniform(-3.0f32..3.0);
    let offsets = Uniform(splat(-5.0f32)..splat(5.0));
    let scales = Uniform(splat(0.5f32)..splat(2.0));

    core::iter::repeat_with(move || {
        let axis = UnitSphere.sample(&mut rng);
        Mat4::identity()
            .translate(offsets.sample(&mut rng))
            .axis_rotate(axis, angles.sample(&mut rng))
            .scale(scales.sample(&mut rng))
    })
}

#[test]
fn normalized_vectors_have_unit_length() {
    for v in vecs().take(COUNT) {
        assert_approx_eq!(v.normalize().len(), 1.0, eps = 1e-5);
    }
}

#[test]
fn normalizing_tiny_vector_yields_zero() {
    let v = vec3(1e-6f32, -2e-6, 3e-6);
    assert_eq!(v.normalize(), Vec3::zero());
    assert_eq!(Vec3::<f32>::zero().normalize(), Vec3::zero());
}

#[test]
fn cross_product_is_anticommutative() {
    let us = vecs();
    let vs = vecs().skip(COUNT);
    for (u, v) in us.zip(vs).take(COUNT) {
        assert_eq!(u.cross(v), v.cross(u).neg());
    }
}

#[test]
fn cross_product_is_perpendicular() {
    let us = vecs();
    let vs = vecs().skip(COUNT);
    for (u, v) in us.zip(vs).take(COUNT) {
        let c = u.cross(v);
        // Components are up to ~100, so products up to ~1e4
        assert_approx_eq!(c.dot(u) / 1e4, 0.0, eps = 1e-5);
        assert_approx_eq!(c.dot(v) / 1e4, 0.0, eps = 1e-5);
    }
}

#[test]
fn vector_basics() {
    let sum = vec3(1.0f32, 2.0, 3.0) + vec3(4.0, 5.0, 6.0);
    assert_eq!(sum, vec3(5.0, 7.0, 9.0));

    let x: Vec3 = vec3(1.0, 0.0, 0.0);
    let y = vec3(0.0, 1.0, 0.0);
    assert_eq!(x.dot(y), 0.0);
    assert_eq!(x.cross(y), vec3(0.0, 0.0, 1.0));
}

#[test]
fn identity_elements() {
    #[rustfmt::skip]
    assert_eq!(Mat4::<f32>::identity().as_array(), &[
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);
}

#[test]
fn multiplying_by_identity_is_noop() {
    let id = Mat4::identity();
    for m in transforms().take(COUNT) {
        assert_eq!(m.multiply(&id), m);
        assert_eq!(id.multiply(&m), m);
    }
}

#[test]
fn matrix_times_inverse_is_identity() {
    let id = Mat4::identity();
    for m in transforms().take(COUNT) {
        let inv = m.inverse();
        assert_approx_eq!(m.multiply(&inv), id, eps = 1e-4);
        assert_approx_eq!(inv.multiply(&m), id, eps = 1e-4);
        assert!(m.checked_inverse().is_some());
    }
}

#[test]
fn transpose_is_involution() {
    for m in transforms().take(COUNT) {
        assert_eq!(m.transpose().transpose(), m);

        let mut t = m;
        t.transpose_in_place();
        assert_eq!(t, m.transpose());
    }
}

#[test]
fn transforming_by_product_equals_successive_transforms() {
    let ms = transforms();
    let ns = transforms().skip(COUNT);
    for ((m, n), v) in ms.zip(ns).zip(vecs()).take(COUNT) {
        let composite = m.multiply(&n).transform_point(v);
        let successive = m.transform_point(n.transform_point(v));
        assert_approx_eq!(composite, successive, eps = 1e-4);
    }
}

#[test]
fn incremental_transforms_equal_post_multiplication() {
    let angles = Uniform(-3.0f32..3.0);
    let mut rng = rng();
    for (m, v) in transforms().zip(vecs()).take(COUNT) {
        let t = angles.sample(&mut rng);
        assert_eq!(m.translate(v), m.multiply(&translation(v)));
        assert_eq!(m.scale(v), m.multiply(&scaling(v)));
        assert_approx_eq!(
            m.rotate_x(t),
            m.multiply(&rotation_x(t)),
            eps = 1e-5
        );
        assert_approx_eq!(
            m.rotate_y(t),
            m.multiply(&rotation_y(t)),
            eps = 1e-5
        );
        assert_approx_eq!(
            m.rotate_z(t),
            m.multiply(&rotation_z(t)),
            eps = 1e-5
        );
        assert_approx_eq!(
            m.axis_rotate(v, t),
            m.multiply(&axis_rotation(v, t)),
            eps = 1e-5
        );
    }
}

#[test]
fn translation_moves_origin() {
    for t in vecs().take(COUNT) {
        assert_eq!(translation(t).transform_point(Vec3::zero()), t);
        assert_eq!(translation(t).translation(), t);
    }
}

#[test]
fn quarter_turn_about_z() {
    let m = rotation_z(FRAC_PI_2);
    let y = m.transform_direction(vec3(1.0, 0.0, 0.0));
    assert_approx_eq!(y, vec3(0.0, 1.0, 0.0));
}

#[test]
fn look_at_from_positive_z() {
    let eye = vec3(0.0f32, 0.0, 5.0);
    let m = look_at(eye, Vec3::zero(), vec3(0.0, 1.0, 0.0));
    assert_eq!(m.translation(), eye);
    assert_eq!(m.axis(2), vec3(0.0, 0.0, 1.0));
}

#[test]
fn perspective_near_plane_at_depth_zero() {
    let m = perspective(FRAC_PI_2, 1.0, 1.0, 100.0);
    let p = m.transform_point(vec3(0.0, 0.0, -1.0));
    assert_approx_eq!(p.z(), 0.0);
}

#[test]
fn model_view_projection() {
    let ctx = Ctx::new();
    let eye = ctx.vec3(0.0, 0.0, 10.0);
    let camera = look_at(eye, ctx.zero_vec3(), vec3(0.0, 1.0, 0.0));
    let view = camera.inverse();
    let proj = perspective(FRAC_PI_2, 1.0, 1.0, 100.0);
    let model = translation(vec3(0.0, 0.0, -10.0));

    let mvp = proj.multiply(&view).multiply(&model);
    // The model origin is 20 units ahead of the camera, on the view axis
    let p = mvp.transform_point(ctx.zero_vec3());
    assert_approx_eq!(p.x(), 0.0, eps = 1e-5);
    assert_approx_eq!(p.y(), 0.0, eps = 1e-5);
    assert!(0.0 < p.z() && p.z() < 1.0, "not in depth range: {p:?}");
}

#[test]
fn normals_stay_perpendicular_to_tangents() {
    let ts = vecs();
    let ns = vecs().skip(COUNT);
    for ((m, t), n) in transforms().zip(ts).zip(ns).take(COUNT) {
        // Make n perpendicular to t
        let n = n.cross(t);
        let t2 = m.transform_direction(t);
        let n2 = m.transform_normal(n);
        let cos = t2.normalize().dot(n2.normalize());
        assert_approx_eq!(cos, 0.0, eps = 1e-4);
    }
}

#[test]
fn f64_matrices_invert_precisely() {
    let id = Mat4::<f64>::identity();
    for m in transforms().take(COUNT) {
        let m: Mat4<f64> = m.cast();
        assert_approx_eq!(m.multiply(&m.inverse()), id, eps = 1e-10);
    }
}
