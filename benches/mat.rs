//! Matrix operation benchmarks.

use divan::Bencher;
use divan::counter::ItemsCount;
use gimbal_core::math::{
    Mat4, Vec3,
    rand::{Distrib, Uniform, UnitSphere, Xorshift64},
    splat,
};

/// Returns a random, invertible affine transform.
fn transform(rng: &mut Xorshift64) -> Mat4 {
    let offset = Uniform(splat(-10.0f32)..splat(10.0)).sample(rng);
    let scale = Uniform(splat(0.5f32)..splat(2.0)).sample(rng);
    let angle = Uniform(-3.0f32..3.0).sample(rng);
    let axis = UnitSphere.sample(rng);

    Mat4::identity()
        .translate(offset)
        .axis_rotate(axis, angle)
        .scale(scale)
}

#[divan::bench]
fn multiply(b: Bencher) {
    let rng = &mut Xorshift64::default();

    b.with_inputs(|| (transform(rng), transform(rng)))
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|(m, n): (Mat4, Mat4)| m.multiply(&n));
}

#[divan::bench]
fn inverse(b: Bencher) {
    let rng = &mut Xorshift64::default();

    b.with_inputs(|| transform(rng))
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|m: Mat4| m.inverse());
}

#[divan::bench]
fn transpose_in_place(b: Bencher) {
    let rng = &mut Xorshift64::default();

    b.with_inputs(|| transform(rng))
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|mut m: Mat4| *m.transpose_in_place());
}

#[divan::bench]
fn rotate_x(b: Bencher) {
    let rng = &mut Xorshift64::default();

    b.with_inputs(|| transform(rng))
        .input_counter(|_| ItemsCount::new(1u32))
        .bench_local_values(|m: Mat4| m.rotate_x(0.1));
}

#[divan::bench(args = [1, 16, 256])]
fn transform_points(b: Bencher, n: usize) {
    let rng = &mut Xorshift64::default();
    let dist = Uniform(splat(-10.0f32)..splat(10.0));

    b.with_inputs(|| {
        let pts: Vec<Vec3> = dist.iter(*rng).take(n).collect();
        (transform(rng), pts)
    })
    .input_counter(move |_| ItemsCount::new(n))
    .bench_local_refs(|(m, pts)| {
        pts.iter()
            .map(|&p| m.transform_point(p))
            .fold(0.0, |acc, p| acc + p.x())
    });
}

fn main() {
    divan::main()
}
