//! Interpolation helpers used by the move tasks:
//! - component-wise lerp for 2D/4D vectors
//! - quaternion NLERP with shortest-arc correction
//! - cubic smoothstep easing (unclamped)
//! - 8-bit color normalization

use serde::{Deserialize, Serialize};

pub type Vec2 = [f32; 2];
pub type Vec4 = [f32; 4];

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline]
pub fn lerp_vec2(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    [lerp_f32(a[0], b[0], t), lerp_f32(a[1], b[1], t)]
}

#[inline]
pub fn lerp_vec4(a: Vec4, b: Vec4, t: f32) -> Vec4 {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
        lerp_f32(a[3], b[3], t),
    ]
}

#[inline]
fn dot4(a: Vec4, b: Vec4) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[inline]
fn normalize4(mut q: Vec4) -> Vec4 {
    let len2 = dot4(q, q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        for c in q.iter_mut() {
            *c *= inv_len;
        }
    }
    q
}

/// Quaternion NLERP with shortest-arc correction.
/// If dot < 0, negate the second quaternion to ensure the shortest path.
/// Returns a normalized quaternion (x,y,z,w).
#[inline]
pub fn nlerp_quat(a: Vec4, mut b: Vec4, t: f32) -> Vec4 {
    if dot4(a, b) < 0.0 {
        b = [-b[0], -b[1], -b[2], -b[3]];
    }
    normalize4(lerp_vec4(a, b, t))
}

/// Cubic Hermite easing `3t² - 2t³`.
///
/// Deliberately not clamped: move tasks feed it the raw progress of the frame
/// that crosses 1.0, and that frame's output depends on the overshoot.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels mapped into `[0, 1]`.
    #[inline]
    pub fn normalize(self) -> Vec4 {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

impl From<Color> for Vec4 {
    fn from(color: Color) -> Self {
        color.normalize()
    }
}
