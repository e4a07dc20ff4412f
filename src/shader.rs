//! Paintable color descriptors.
//!
//! A [`Shader`] is a plain value describing how color varies across a filled
//! region. Backends translate it into their native gradient objects, and
//! [`Shader::color_at`] evaluates it directly for software rasterizers.
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::color::mix;
use crate::pixel::Pixel;

const EPSILON: f32 = 1e-6;

/// Lengths, radii and angle spans at or below this are treated as zero.
const DEGENERATE_THRESHOLD: f32 = 1.0 / (1 << 15) as f32;

/// How a shader extends beyond its `[0, 1]` gradient domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileMode {
    /// Repeat the edge colors.
    #[default]
    Clamp,
    /// Restart the gradient every period.
    Repeat,
    /// Reflect the gradient every period.
    Mirror,
    /// Transparent outside the domain.
    Decal,
}

impl TileMode {
    /// Map a raw gradient parameter into `[0, 1]`.
    ///
    /// Returns `None` where the shader paints nothing.
    pub fn apply(self, t: f32) -> Option<f32> {
        if t.is_nan() {
            return None;
        }
        match self {
            Self::Clamp => Some(t.clamp(0.0, 1.0)),
            Self::Repeat => t.is_finite().then(|| t - t.floor()),
            Self::Mirror => t.is_finite().then(|| {
                let period = t.rem_euclid(2.0);
                if period > 1.0 { 2.0 - period } else { period }
            }),
            Self::Decal => (0.0..=1.0).contains(&t).then_some(t),
        }
    }
}

/// A two-stop color descriptor bound to concrete pixel geometry.
///
/// `colors[0]` is painted at `t = 0` and `colors[1]` at `t = 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shader {
    /// A single flat color.
    Solid(Color),
    /// Color varies along the line from `start` to `end`.
    Linear {
        start: Pixel,
        end: Pixel,
        colors: [Color; 2],
        tile_mode: TileMode,
    },
    /// Color varies with distance from `center`.
    Radial {
        center: Pixel,
        radius: f32,
        colors: [Color; 2],
        tile_mode: TileMode,
    },
    /// Color varies with the clockwise angle around `center`, in degrees.
    Sweep {
        center: Pixel,
        start_angle: f32,
        end_angle: f32,
        colors: [Color; 2],
        tile_mode: TileMode,
    },
    /// Color varies across a family of circles interpolated between two circles.
    TwoPointConical {
        start: Pixel,
        start_radius: f32,
        end: Pixel,
        end_radius: f32,
        colors: [Color; 2],
        tile_mode: TileMode,
    },
}

impl Shader {
    pub fn tile_mode(&self) -> TileMode {
        match self {
            Self::Solid(_) => TileMode::Clamp,
            Self::Linear { tile_mode, .. }
            | Self::Radial { tile_mode, .. }
            | Self::Sweep { tile_mode, .. }
            | Self::TwoPointConical { tile_mode, .. } => *tile_mode,
        }
    }

    /// The `[first, last]` colors of this shader.
    pub fn colors(&self) -> [Color; 2] {
        match self {
            Self::Solid(color) => [*color, *color],
            Self::Linear { colors, .. }
            | Self::Radial { colors, .. }
            | Self::Sweep { colors, .. }
            | Self::TwoPointConical { colors, .. } => *colors,
        }
    }

    /// The raw, untiled gradient parameter at `p`.
    ///
    /// `None` where the geometry is undefined: degenerate shapes, and
    /// points outside every conical circle.
    pub fn parameter_at(&self, p: Pixel) -> Option<f32> {
        if self.is_degenerate() {
            return None;
        }
        let p = Vec2::from(p);
        match *self {
            Self::Solid(_) => Some(0.0),
            Self::Linear { start, end, .. } => {
                let start = Vec2::from(start);
                let axis = Vec2::from(end) - start;
                Some((p - start).dot(axis) / axis.length_squared())
            }
            Self::Radial { center, radius, .. } => Some(p.distance(Vec2::from(center)) / radius),
            Self::Sweep {
                center,
                start_angle,
                end_angle,
                ..
            } => Some((clockwise_angle(p, center) - start_angle) / (end_angle - start_angle)),
            Self::TwoPointConical {
                start,
                start_radius,
                end,
                end_radius,
                ..
            } => conical_parameter(p, start.into(), start_radius, end.into(), end_radius),
        }
    }

    /// True when the geometry collapses: a zero-length ramp, a zero radius,
    /// an empty sweep, or two coincident conical circles.
    pub fn is_degenerate(&self) -> bool {
        match *self {
            Self::Solid(_) => false,
            Self::Linear { start, end, .. } => start.distance_to(end) <= DEGENERATE_THRESHOLD,
            Self::Radial { radius, .. } => radius.abs() <= DEGENERATE_THRESHOLD,
            Self::Sweep {
                start_angle,
                end_angle,
                ..
            } => (end_angle - start_angle).abs() <= DEGENERATE_THRESHOLD,
            Self::TwoPointConical {
                start,
                start_radius,
                end,
                end_radius,
                ..
            } => {
                start.distance_to(end) <= DEGENERATE_THRESHOLD
                    && (start_radius - end_radius).abs() <= DEGENERATE_THRESHOLD
            }
        }
    }

    /// What a degenerate shader paints at `p`.
    ///
    /// Clamped shaders paint the last color, repeated and mirrored ones the
    /// average color, decals nothing. A clamped empty sweep ending above
    /// 0 degrees is a hard stop at its end angle instead.
    fn degenerate_color_at(&self, p: Pixel) -> Option<Color> {
        let [from, to] = self.colors();
        if let Self::Sweep {
            center,
            end_angle,
            tile_mode: TileMode::Clamp,
            ..
        } = *self
            && end_angle > DEGENERATE_THRESHOLD
        {
            let angle = clockwise_angle(p.into(), center);
            return Some(if angle < end_angle { from } else { to });
        }
        match self.tile_mode() {
            TileMode::Clamp => Some(to),
            TileMode::Repeat | TileMode::Mirror => Some(mix(from, to, 0.5)),
            TileMode::Decal => None,
        }
    }

    /// Evaluate the shader at `p`.
    ///
    /// `None` means the pixel is left transparent.
    pub fn color_at(&self, p: Pixel) -> Option<Color> {
        if let Self::Solid(color) = self {
            return Some(*color);
        }
        if self.is_degenerate() {
            return self.degenerate_color_at(p);
        }
        let t = self.tile_mode().apply(self.parameter_at(p)?)?;
        let [from, to] = self.colors();
        Some(mix(from, to, t))
    }
}

/// Angle of `p` around `center` in degrees, in `[0, 360)`.
///
/// Y grows downward, so this runs clockwise on screen.
fn clockwise_angle(p: Vec2, center: Pixel) -> f32 {
    let d = p - Vec2::from(center);
    d.y.atan2(d.x).to_degrees().rem_euclid(360.0)
}

/// Solve for the largest `t` such that `p` lies on the circle interpolated
/// between `(c0, r0)` and `(c1, r1)` with a non-negative radius.
///
/// Solved in f64; the quadratic cancels badly for thin rectangles in f32.
fn conical_parameter(p: Vec2, c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> Option<f32> {
    let (p, c0, c1) = (p.as_dvec2(), c0.as_dvec2(), c1.as_dvec2());
    let (r0, r1) = (f64::from(r0), f64::from(r1));
    let d = c1 - c0;
    let dr = r1 - r0;
    let q = p - c0;
    let a = d.dot(d) - dr * dr;
    let b = q.dot(d) + r0 * dr;
    let c = q.dot(q) - r0 * r0;

    let radius_ok = |t: f64| r0 + t * dr >= 0.0;

    let t = if a.abs() < f64::from(EPSILON) {
        if b.abs() < f64::from(EPSILON) {
            return None;
        }
        let t = c / (2.0 * b);
        radius_ok(t).then_some(t)?
    } else {
        let disc = b * b - a * c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let t0 = (b + root) / a;
        let t1 = (b - root) / a;
        let (hi, lo) = if t0 >= t1 { (t0, t1) } else { (t1, t0) };
        if radius_ok(hi) {
            hi
        } else if radius_ok(lo) {
            lo
        } else {
            return None;
        }
    };
    Some(t as f32)
}
