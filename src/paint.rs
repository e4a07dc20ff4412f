use serde::{Deserialize, Serialize};

use crate::Color;
use crate::shader::Shader;

/// Whether a draw call fills the interior of a path or strokes its outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Shape of stroke end points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// The mutable paint context styles are applied to before each draw.
///
/// When `shader` is set it takes precedence over `color`.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub style: PaintStyle,
    pub color: Color,
    pub shader: Option<Shader>,
    pub stroke_width: f32,
    /// Alternating on/off lengths in pixels. `None` draws a continuous stroke.
    pub dash: Option<Vec<f32>>,
    pub line_cap: LineCap,
    pub anti_alias: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            style: PaintStyle::Fill,
            color: Color::BLACK,
            shader: None,
            stroke_width: 1.0,
            dash: None,
            line_cap: LineCap::Butt,
            anti_alias: true,
        }
    }
}

impl Paint {
    /// The shader this paint effectively draws with.
    pub fn effective_shader(&self) -> Shader {
        self.shader.unwrap_or(Shader::Solid(self.color))
    }
}
