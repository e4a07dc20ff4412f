use serde::{Deserialize, Serialize};

use crate::Color;
use crate::error::StyleError;
use crate::pixel::{Alignment, PixelRect};
use crate::shader::{Shader, TileMode};

/// Geometry of a color gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GradientKind {
    /// Along a line between two anchors of the rectangle.
    #[default]
    Linear,
    /// Outward from the rectangle center.
    Radial,
    /// Around the rectangle center.
    Sweep,
    /// Between a circle at the top-left corner and one at the bottom-right corner.
    TwoPointConical,
}

/// A two-color gradient fill.
///
/// Blends from a background color to an accent color across whatever
/// rectangle it is asked to fill.
///
/// # Example
///
/// ```
/// use plot_primitives::{Color, Gradient, GradientKind, PixelRect, Shader};
///
/// let rect = PixelRect::try_new(0.0, 0.0, 40.0, 20.0).unwrap();
/// let shader = Gradient::new(GradientKind::Radial).shader(Color::BLACK, Color::WHITE, rect);
/// assert!(matches!(shader, Shader::Radial { radius, .. } if radius == 20.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gradient {
    /// Which geometry to use.
    pub kind: GradientKind,
    /// Start angle in degrees, for sweep gradients.
    pub start_angle: f32,
    /// End angle in degrees, for sweep gradients.
    pub end_angle: f32,
    /// How the shader behaves outside its defined domain.
    pub tile_mode: TileMode,
    /// Start anchor of linear gradients.
    pub alignment_start: Alignment,
    /// End anchor of linear gradients.
    pub alignment_end: Alignment,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            start_angle: 0.0,
            end_angle: 360.0,
            tile_mode: TileMode::Clamp,
            alignment_start: Alignment::UpperLeft,
            alignment_end: Alignment::LowerRight,
        }
    }
}

impl Gradient {
    pub fn new(kind: GradientKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Set the sweep angle range in degrees.
    pub fn with_angles(mut self, start: f32, end: f32) -> Self {
        self.start_angle = start;
        self.end_angle = end;
        self
    }

    pub fn with_tile_mode(mut self, tile_mode: TileMode) -> Self {
        self.tile_mode = tile_mode;
        self
    }

    /// Set the anchors of a linear gradient.
    pub fn with_alignment(mut self, start: Alignment, end: Alignment) -> Self {
        self.alignment_start = start;
        self.alignment_end = end;
        self
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if self.kind == GradientKind::Sweep
            && !((self.end_angle - self.start_angle).abs() > f32::EPSILON)
        {
            return Err(StyleError::EmptyAngleRange {
                start: self.start_angle,
                end: self.end_angle,
            });
        }
        Ok(())
    }

    /// Build a shader spanning `rect`, blending `background` into `accent`.
    pub fn shader(&self, background: Color, accent: Color, rect: PixelRect) -> Shader {
        if rect.is_degenerate() {
            log::debug!("gradient requested for degenerate rect {rect:?}");
        }
        let colors = [background, accent];
        let tile_mode = self.tile_mode;
        match self.kind {
            GradientKind::Radial => Shader::Radial {
                center: rect.center(),
                radius: rect.width().max(rect.height()) / 2.0,
                colors,
                tile_mode,
            },
            GradientKind::Sweep => Shader::Sweep {
                center: rect.center(),
                start_angle: self.start_angle,
                end_angle: self.end_angle,
                colors,
                tile_mode,
            },
            GradientKind::TwoPointConical => Shader::TwoPointConical {
                start: rect.top_left(),
                start_radius: rect.width().min(rect.height()),
                end: rect.bottom_right(),
                end_radius: rect.width().min(rect.height()),
                colors,
                tile_mode,
            },
            GradientKind::Linear => Shader::Linear {
                start: rect.aligned_pixel(self.alignment_start),
                end: rect.aligned_pixel(self.alignment_end),
                colors,
                tile_mode,
            },
        }
    }
}
