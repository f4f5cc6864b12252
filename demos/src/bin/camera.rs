//! Orbits a camera around a cube and plots the projected corners as text.

use std::{env, f32::consts::TAU};

use gm::prelude::*;
use tracing::{Level, info, warn};

const COLS: usize = 64;
const ROWS: usize = 24;

const CORNERS: [Vec3; 8] = [
    vec3(-1.0, -1.0, -1.0),
    vec3(1.0, -1.0, -1.0),
    vec3(-1.0, 1.0, -1.0),
    vec3(1.0, 1.0, -1.0),
    vec3(-1.0, -1.0, 1.0),
    vec3(1.0, -1.0, 1.0),
    vec3(-1.0, 1.0, 1.0),
    vec3(1.0, 1.0, 1.0),
];

fn main() {
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .with_max_level(Level::TRACE)
        .init();

    let frames = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4_u32);

    let ctx = Ctx::new();
    let target = ctx.zero_vec3();
    let up = vec3(0.0, 1.0, 0.0);
    let aspect = COLS as f32 / ROWS as f32 / 2.0;
    let proj = perspective(1.0, aspect, 0.5, 50.0);

    let orbit = (0..frames).map(|frame| {
        let t = frame as f32 / frames as f32 * TAU;
        (t, vec3(6.0 * t.cos(), 2.0, 6.0 * t.sin()))
    });
    // Looking straight down along `up` leaves the camera with no side axis
    let overhead = (0.0, vec3(0.0, 6.0, 0.0));

    for (frame, (t, eye)) in orbit.chain([overhead]).enumerate() {
        let camera = look_at(eye, target, up);
        let Some(view) = camera.checked_inverse() else {
            warn!(?eye, "camera matrix is singular, skipping frame");
            continue;
        };
        let model = Mat4::identity().rotate_y(t).scale(splat(1.5));
        let mvp = proj.multiply(&view).multiply(&model);

        info!(frame, ?eye, "rendering");
        let mut grid = [[b' '; COLS]; ROWS];
        for (i, &c) in CORNERS.iter().enumerate() {
            let p = mvp.transform_point(c);
            let [x, y, z] = p.0;
            let visible = (-1.0..=1.0).contains(&x)
                && (-1.0..=1.0).contains(&y)
                && (0.0..=1.0).contains(&z);
            if !visible {
                warn!(corner = i, ?p, "corner clipped");
                continue;
            }
            let col = (x + 1.0) * 0.5 * (COLS - 1) as f32;
            let row = (1.0 - y) * 0.5 * (ROWS - 1) as f32;
            grid[row.round() as usize][col.round() as usize] = b'0' + i as u8;
        }
        for row in grid {
            println!("{}", String::from_utf8_lossy(&row));
        }
    }
}
