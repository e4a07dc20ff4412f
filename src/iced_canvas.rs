//! [`Canvas`] backend for the iced canvas widget.
//!
//! iced only supports linear gradients, so the other shader kinds are
//! approximated: radial and conical shaders become a linear ramp along
//! their main axis, and sweep shaders become the midpoint color. Degenerate
//! shaders become their flat fallback color.
use iced::widget::canvas::{self, Frame};

use crate::Color;
use crate::canvas::Canvas;
use crate::color::mix;
use crate::paint::{LineCap, Paint, PaintStyle};
use crate::path::{Path, PathCommand};
use crate::shader::Shader;

impl Canvas for Frame {
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let native = to_native_path(path);
        let style = to_style(&paint.effective_shader());
        match paint.style {
            PaintStyle::Fill => {
                self.fill(
                    &native,
                    canvas::Fill {
                        style,
                        ..canvas::Fill::default()
                    },
                );
            }
            PaintStyle::Stroke => self.stroke(&native, to_stroke(paint, style)),
        }
    }
}

fn to_stroke(paint: &Paint, style: canvas::Style) -> canvas::Stroke<'_> {
    canvas::Stroke {
        style,
        width: paint.stroke_width,
        line_cap: to_line_cap(paint.line_cap),
        line_dash: canvas::LineDash {
            segments: paint.dash.as_deref().unwrap_or(&[]),
            offset: 0,
        },
        ..canvas::Stroke::default()
    }
}

fn to_native_path(path: &Path) -> canvas::Path {
    canvas::Path::new(|builder| {
        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(p) => builder.move_to(p.into()),
                PathCommand::LineTo(p) => builder.line_to(p.into()),
                PathCommand::Circle { center, radius } => builder.circle(center.into(), radius),
                PathCommand::Close => builder.close(),
            }
        }
    })
}

fn to_line_cap(cap: LineCap) -> canvas::LineCap {
    match cap {
        LineCap::Butt => canvas::LineCap::Butt,
        LineCap::Round => canvas::LineCap::Round,
        LineCap::Square => canvas::LineCap::Square,
    }
}

fn to_style(shader: &Shader) -> canvas::Style {
    let [from, to] = shader.colors();
    let linear = |start: crate::Pixel, end: crate::Pixel| {
        canvas::Style::Gradient(canvas::Gradient::Linear(
            canvas::gradient::Linear::new(start.into(), end.into())
                .add_stop(0.0, from)
                .add_stop(1.0, to),
        ))
    };
    if shader.is_degenerate() && !matches!(shader, Shader::Sweep { .. }) {
        let flat = shader
            .color_at(crate::Pixel::new(0.0, 0.0))
            .unwrap_or(Color::TRANSPARENT);
        return canvas::Style::Solid(flat);
    }
    match *shader {
        Shader::Solid(color) => canvas::Style::Solid(color),
        Shader::Linear { start, end, .. } => linear(start, end),
        Shader::Radial { center, radius, .. } => {
            log::debug!("approximating radial shader with a linear ramp");
            linear(center, center.translate(radius, 0.0))
        }
        Shader::TwoPointConical { start, end, .. } => {
            log::debug!("approximating conical shader with a linear ramp");
            linear(start, end)
        }
        Shader::Sweep { .. } => {
            log::debug!("approximating sweep shader with its midpoint color");
            canvas::Style::Solid(mix(from, to, 0.5))
        }
    }
}
