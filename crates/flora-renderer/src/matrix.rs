//! 4×4 matrix math for the camera transforms.
//!
//! Column-major layout matching WGSL `mat4x4<f32>`. Right-handed view
//! space looking down -Z, clip-space depth in `[0, 1]` as wgpu expects.

/// 4×4 column-major matrix stored as `[f32; 16]`.
pub type Mat4 = [f32; 16];

pub type Vec3 = [f32; 3];

/// Identity matrix.
pub const IDENTITY: Mat4 = [
    1.0, 0.0, 0.0, 0.0, // col 0
    0.0, 1.0, 0.0, 0.0, // col 1
    0.0, 0.0, 1.0, 0.0, // col 2
    0.0, 0.0, 0.0, 1.0, // col 3
];

/// Perspective projection matrix.
///
/// `fov_y` is vertical field of view in radians.
/// `near` and `far` are the clip planes (must be > 0).
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect,
        0.0,
        0.0,
        0.0,
        0.0,
        f,
        0.0,
        0.0,
        0.0,
        0.0,
        far * range_inv,
        -1.0,
        0.0,
        0.0,
        near * far * range_inv,
        0.0,
    ]
}

/// View matrix for a camera at `eye` looking at `target`.
///
/// When the view direction is parallel to `up` the direction is nudged
/// slightly along Z so the basis stays well defined.
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let mut f = normalize(sub(target, eye));
    let mut s = cross(f, up);
    if dot(s, s) < 1e-12 {
        f[2] += 1e-4;
        f = normalize(f);
        s = cross(f, up);
    }
    let s = normalize(s);
    let u = cross(s, f);

    [
        s[0],
        u[0],
        -f[0],
        0.0,
        s[1],
        u[1],
        -f[1],
        0.0,
        s[2],
        u[2],
        -f[2],
        0.0,
        -dot(s, eye),
        -dot(u, eye),
        dot(f, eye),
        1.0,
    ]
}

/// Multiply two 4×4 column-major matrices: result = a × b.
pub fn mul(a: &Mat4, b: &Mat4) -> Mat4 {
    let mut out = [0.0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            let mut sum = 0.0;
            for k in 0..4 {
                sum += a[k * 4 + row] * b[col * 4 + k];
            }
            out[col * 4 + row] = sum;
        }
    }
    out
}

/// Transform a point (w = 1), returning homogeneous coordinates.
pub fn transform_point(m: &Mat4, p: Vec3) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[row] * p[0] + m[4 + row] * p[1] + m[8 + row] * p[2] + m[12 + row];
    }
    out
}

pub fn lerp3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

pub fn length(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: Vec3) -> Vec3 {
    let len = length(v);
    if len <= f32::EPSILON {
        return v;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: &[f32], b: &[f32], eps: f32) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn identity_mul_identity() {
        let result = mul(&IDENTITY, &IDENTITY);
        assert!(approx_eq(&result, &IDENTITY, 1e-6));
    }

    #[test]
    fn perspective_basic() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
        let f = 1.0 / (std::f32::consts::FRAC_PI_4 * 0.5).tan();
        assert!((p[0] - f / (16.0 / 9.0)).abs() < 1e-5);
        assert!((p[5] - f).abs() < 1e-5);
        // p[11] should be -1 (perspective divide)
        assert!((p[11] - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let p = perspective(0.6, 1.5, 0.1, 100.0);
        let near = transform_point(&p, [0.0, 0.0, -0.1]);
        let far = transform_point(&p, [0.0, 0.0, -100.0]);
        assert!((near[2] / near[3]).abs() < 1e-5);
        assert!((far[2] / far[3] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn look_at_puts_eye_at_origin_and_target_ahead() {
        let eye = [3.0, 4.0, 5.0];
        let view = look_at(eye, [0.0; 3], [0.0, 1.0, 0.0]);

        let e = transform_point(&view, eye);
        assert!(approx_eq(&e[..3], &[0.0, 0.0, 0.0], 1e-5));

        let t = transform_point(&view, [0.0; 3]);
        assert!(t[0].abs() < 1e-5 && t[1].abs() < 1e-5);
        assert!((t[2] + length(eye)).abs() < 1e-4);
    }

    #[test]
    fn look_at_straight_down_is_finite() {
        let view = look_at([0.0, 8.0, 0.0], [0.0; 3], [0.0, 1.0, 0.0]);
        assert!(view.iter().all(|v| v.is_finite()));
        let t = transform_point(&view, [0.0; 3]);
        assert!(t[2] < 0.0);
    }

    #[test]
    fn transform_point_applies_translation() {
        let mut m = IDENTITY;
        m[12] = 1.0;
        m[13] = 2.0;
        m[14] = 3.0;
        assert_eq!(transform_point(&m, [1.0, 1.0, 1.0]), [2.0, 3.0, 4.0, 1.0]);
    }

    #[test]
    fn lerp_moves_fraction_of_the_way() {
        let p = lerp3([0.0, 0.0, 0.0], [10.0, -10.0, 5.0], 0.1);
        assert!(approx_eq(&p, &[1.0, -1.0, 0.5], 1e-6));
    }
}
