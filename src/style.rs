use serde::{Deserialize, Serialize};

use crate::Color;
use crate::color::serde_color;
use crate::error::StyleError;
use crate::gradient::Gradient;
use crate::paint::{LineCap, Paint, PaintStyle};
use crate::pixel::PixelRect;
use crate::shader::Shader;

/// Dash pattern of a stroked line.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum LinePattern {
    /// Solid continuous line.
    #[default]
    Solid,
    /// Dotted line with configurable spacing.
    Dotted { spacing: f32 },
    /// Dashed line with configurable dash length.
    Dashed { length: f32 },
}

impl LinePattern {
    /// On/off intervals for a stroke of the given width.
    pub fn intervals(self, width: f32) -> Option<Vec<f32>> {
        match self {
            Self::Solid => None,
            Self::Dotted { spacing } => Some(vec![width.max(1.0), spacing.max(0.0)]),
            Self::Dashed { length } => Some(vec![length.max(0.0), length.max(0.0)]),
        }
    }
}

/// Styling of a stroked outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    /// Line width in pixels. Zero disables the stroke.
    pub width: f32,
    #[serde(with = "serde_color")]
    pub color: Color,
    pub pattern: LinePattern,
    pub line_cap: LineCap,
    pub anti_alias: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::BLACK,
            pattern: LinePattern::Solid,
            line_cap: LineCap::Butt,
            anti_alias: true,
        }
    }
}

impl LineStyle {
    pub fn new(width: f32, color: Color) -> Self {
        Self {
            width,
            color,
            ..Self::default()
        }
    }

    /// A style that draws nothing.
    pub fn none() -> Self {
        Self {
            width: 0.0,
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_pattern(mut self, pattern: LinePattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_line_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    /// True when stroking with this style would produce visible output.
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.color.a > 0.0
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if !self.width.is_finite() || self.width < 0.0 {
            return Err(StyleError::InvalidLineWidth(self.width));
        }
        Ok(())
    }

    /// Configure `paint` to stroke with this style.
    pub fn apply_to_paint(&self, paint: &mut Paint) {
        paint.style = PaintStyle::Stroke;
        paint.color = self.color;
        paint.shader = None;
        paint.stroke_width = self.width;
        paint.dash = self.pattern.intervals(self.width);
        paint.line_cap = self.line_cap;
        paint.anti_alias = self.anti_alias;
    }
}

/// How the interior of a fill is painted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum FillPattern {
    /// The fill color alone.
    #[default]
    Solid,
    /// A gradient from the fill color to the hatch color.
    Gradient(Gradient),
}

impl FillPattern {
    /// Build the shader for this pattern over `rect`.
    pub fn shader(&self, background: Color, accent: Color, rect: PixelRect) -> Shader {
        match self {
            Self::Solid => Shader::Solid(background),
            Self::Gradient(gradient) => gradient.shader(background, accent, rect),
        }
    }
}

/// Styling of a filled region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillStyle {
    /// Background color of the fill.
    #[serde(with = "serde_color")]
    pub color: Color,
    /// Accent color used by patterned fills.
    #[serde(with = "serde_color")]
    pub hatch_color: Color,
    pub pattern: FillPattern,
    pub anti_alias: bool,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb(0.3, 0.3, 0.9),
            hatch_color: Color::TRANSPARENT,
            pattern: FillPattern::Solid,
            anti_alias: true,
        }
    }
}

impl FillStyle {
    /// A solid fill of the given color.
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// A gradient fill from `color` to `hatch_color`.
    pub fn gradient(color: Color, hatch_color: Color, gradient: Gradient) -> Self {
        Self {
            color,
            hatch_color,
            pattern: FillPattern::Gradient(gradient),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_hatch_color(mut self, color: Color) -> Self {
        self.hatch_color = color;
        self
    }

    pub fn with_pattern(mut self, pattern: FillPattern) -> Self {
        self.pattern = pattern;
        self
    }

    /// True when filling with this style would produce visible output.
    pub fn is_visible(&self) -> bool {
        match self.pattern {
            FillPattern::Solid => self.color.a > 0.0,
            FillPattern::Gradient(_) => self.color.a > 0.0 || self.hatch_color.a > 0.0,
        }
    }

    /// Configure `paint` to fill `rect` with this style.
    pub fn apply_to_paint(&self, paint: &mut Paint, rect: PixelRect) {
        paint.style = PaintStyle::Fill;
        paint.color = self.color;
        paint.shader = match self.pattern {
            FillPattern::Solid => None,
            pattern => Some(pattern.shader(self.color, self.hatch_color, rect)),
        };
        paint.dash = None;
        paint.anti_alias = self.anti_alias;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::GradientKind;

    #[test]
    fn test_line_style_applies_dash() {
        let style = LineStyle::new(2.0, Color::WHITE).with_pattern(LinePattern::Dashed { length: 6.0 });
        let mut paint = Paint::default();
        style.apply_to_paint(&mut paint);
        assert_eq!(paint.style, PaintStyle::Stroke);
        assert_eq!(paint.stroke_width, 2.0);
        assert_eq!(paint.color, Color::WHITE);
        assert_eq!(paint.dash, Some(vec![6.0, 6.0]));
    }

    #[test]
    fn test_line_style_sets_every_cap() {
        let mut paint = Paint::default();
        for cap in [LineCap::Square, LineCap::Round, LineCap::Butt] {
            LineStyle::default().with_line_cap(cap).apply_to_paint(&mut paint);
            assert_eq!(paint.line_cap, cap);
        }
    }

    #[test]
    fn test_line_style_clears_previous_shader() {
        let mut paint = Paint::default();
        FillStyle::gradient(Color::BLACK, Color::WHITE, Gradient::default())
            .apply_to_paint(&mut paint, PixelRect::try_new(0.0, 0.0, 4.0, 4.0).unwrap());
        assert!(paint.shader.is_some());
        LineStyle::default().apply_to_paint(&mut paint);
        assert!(paint.shader.is_none());
    }

    #[test]
    fn test_validate_line_width() {
        assert!(LineStyle::none().validate().is_ok());
        assert_eq!(
            LineStyle::default().with_width(-1.0).validate(),
            Err(StyleError::InvalidLineWidth(-1.0))
        );
        assert!(LineStyle::default().with_width(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_solid_fill_has_no_shader() {
        let mut paint = Paint::default();
        FillStyle::solid(Color::WHITE)
            .apply_to_paint(&mut paint, PixelRect::try_new(0.0, 0.0, 1.0, 1.0).unwrap());
        assert_eq!(paint.style, PaintStyle::Fill);
        assert_eq!(paint.shader, None);
        assert_eq!(paint.effective_shader(), Shader::Solid(Color::WHITE));
    }

    #[test]
    fn test_gradient_fill_uses_rect() {
        let rect = PixelRect::try_new(0.0, 0.0, 8.0, 2.0).unwrap();
        let fill = FillStyle::gradient(
            Color::BLACK,
            Color::WHITE,
            Gradient::new(GradientKind::Radial),
        );
        let mut paint = Paint::default();
        fill.apply_to_paint(&mut paint, rect);
        assert!(matches!(
            paint.shader,
            Some(Shader::Radial { radius, .. }) if radius == 4.0
        ));
    }
}
