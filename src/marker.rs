use core::fmt;
use core::str::FromStr;
use std::f32::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::canvas::Canvas;
use crate::error::StyleError;
use crate::paint::Paint;
use crate::path::Path;
use crate::pixel::{Pixel, PixelRect};
use crate::style::{FillPattern, FillStyle, LineStyle};

/// Ratio of a star's inner radius to its outer radius.
const STAR_INNER_RATIO: f32 = 0.382;

fn is_drawable_size(size: f32) -> bool {
    size.is_finite() && size > 0.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Marker shapes for data points.
///
/// Determines the glyph drawn at each data point. `size` is the side length
/// of the bounding square for most shapes, the diameter for circles, and the
/// side length of the inscribing triangle for the triangle family.
pub enum MarkerShape {
    /// Draws nothing.
    None,
    /// A filled circle.
    #[default]
    FilledCircle,
    /// An empty circle (ring).
    OpenCircle,
    FilledSquare,
    OpenSquare,
    /// A filled triangle pointing up.
    FilledTriangleUp,
    OpenTriangleUp,
    /// A filled triangle pointing down.
    FilledTriangleDown,
    OpenTriangleDown,
    FilledDiamond,
    OpenDiamond,
    /// A filled five-pointed star.
    Star,
    /// A `+` shape.
    Cross,
    /// An `x` shape.
    Eks,
    /// `+` and `x` overlaid.
    Asterisk,
    VerticalBar,
    HorizontalBar,
    /// Three spokes from the center: one down, two toward the upper corners.
    TriUp,
    /// Three spokes from the center: one up, two toward the lower corners.
    TriDown,
}

impl MarkerShape {
    /// Every shape, in declaration order.
    pub const ALL: [MarkerShape; 19] = [
        Self::None,
        Self::FilledCircle,
        Self::OpenCircle,
        Self::FilledSquare,
        Self::OpenSquare,
        Self::FilledTriangleUp,
        Self::OpenTriangleUp,
        Self::FilledTriangleDown,
        Self::OpenTriangleDown,
        Self::FilledDiamond,
        Self::OpenDiamond,
        Self::Star,
        Self::Cross,
        Self::Eks,
        Self::Asterisk,
        Self::VerticalBar,
        Self::HorizontalBar,
        Self::TriUp,
        Self::TriDown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::FilledCircle => "FilledCircle",
            Self::OpenCircle => "OpenCircle",
            Self::FilledSquare => "FilledSquare",
            Self::OpenSquare => "OpenSquare",
            Self::FilledTriangleUp => "FilledTriangleUp",
            Self::OpenTriangleUp => "OpenTriangleUp",
            Self::FilledTriangleDown => "FilledTriangleDown",
            Self::OpenTriangleDown => "OpenTriangleDown",
            Self::FilledDiamond => "FilledDiamond",
            Self::OpenDiamond => "OpenDiamond",
            Self::Star => "Star",
            Self::Cross => "Cross",
            Self::Eks => "Eks",
            Self::Asterisk => "Asterisk",
            Self::VerticalBar => "VerticalBar",
            Self::HorizontalBar => "HorizontalBar",
            Self::TriUp => "TriUp",
            Self::TriDown => "TriDown",
        }
    }

    /// Whether the shape has an interior painted with the fill style.
    pub fn is_filled(self) -> bool {
        matches!(
            self,
            Self::FilledCircle
                | Self::FilledSquare
                | Self::FilledTriangleUp
                | Self::FilledTriangleDown
                | Self::FilledDiamond
                | Self::Star
        )
    }

    /// Build the glyph outline centered on `center`.
    pub fn path(self, center: Pixel, size: f32) -> Path {
        let mut path = Path::new();
        let half = size / 2.0;
        match self {
            Self::None => {}
            Self::FilledCircle | Self::OpenCircle => {
                path.circle(center, half);
            }
            Self::FilledSquare | Self::OpenSquare => {
                let r = PixelRect::centered_square(center, size);
                path.polygon(&[r.top_left(), r.top_right(), r.bottom_right(), r.bottom_left()]);
            }
            Self::FilledTriangleUp | Self::OpenTriangleUp => {
                let t = TriangleOffsets::new(size);
                path.polygon(&[
                    center.translate(0.0, -t.radius),
                    center.translate(-t.x_offset, t.y_offset),
                    center.translate(t.x_offset, t.y_offset),
                ]);
            }
            Self::FilledTriangleDown | Self::OpenTriangleDown => {
                let t = TriangleOffsets::new(size);
                path.polygon(&[
                    center.translate(0.0, t.radius),
                    center.translate(-t.x_offset, -t.y_offset),
                    center.translate(t.x_offset, -t.y_offset),
                ]);
            }
            Self::FilledDiamond | Self::OpenDiamond => {
                path.polygon(&[
                    center.translate(0.0, -half),
                    center.translate(half, 0.0),
                    center.translate(0.0, half),
                    center.translate(-half, 0.0),
                ]);
            }
            Self::Star => {
                let points = star_points(center, half, half * STAR_INNER_RATIO);
                path.polygon(&points);
            }
            Self::Cross => cross(&mut path, center, half),
            Self::Eks => eks(&mut path, center, half),
            Self::Asterisk => {
                cross(&mut path, center, half);
                eks(&mut path, center, half);
            }
            Self::VerticalBar => {
                path.segment(center.translate(0.0, -half), center.translate(0.0, half));
            }
            Self::HorizontalBar => {
                path.segment(center.translate(-half, 0.0), center.translate(half, 0.0));
            }
            Self::TriUp => {
                let t = TriangleOffsets::new(size);
                path.segment(center, center.translate(0.0, t.radius))
                    .segment(center, center.translate(-t.x_offset, -t.y_offset))
                    .segment(center, center.translate(t.x_offset, -t.y_offset));
            }
            Self::TriDown => {
                let t = TriangleOffsets::new(size);
                path.segment(center, center.translate(0.0, -t.radius))
                    .segment(center, center.translate(-t.x_offset, t.y_offset))
                    .segment(center, center.translate(t.x_offset, t.y_offset));
            }
        }
        path
    }

    /// Draw this shape at `center` onto `canvas`.
    ///
    /// Filled shapes are filled with `fill` over their bounding square, then
    /// outlined with `outline` when it is visible. All other shapes are only
    /// stroked with `outline`. Both styles are applied to `paint`, which is
    /// left in its stroked state afterwards.
    pub fn render<C: Canvas + ?Sized>(
        self,
        canvas: &mut C,
        paint: &mut Paint,
        center: Pixel,
        size: f32,
        fill: &FillStyle,
        outline: &LineStyle,
    ) {
        if self == Self::None {
            return;
        }
        if !is_drawable_size(size) {
            log::debug!("drawing degenerate {self} marker with size {size}");
        }
        let path = self.path(center, size);
        log::trace!("{self} marker at ({}, {}) size {size}", center.x, center.y);

        if self.is_filled() {
            if fill.is_visible() {
                fill.apply_to_paint(paint, PixelRect::centered_square(center, size));
                canvas.draw_path(&path, paint);
            }
            if !outline.is_visible() {
                return;
            }
        }

        outline.apply_to_paint(paint);
        canvas.draw_path(&path, paint);
    }
}

impl fmt::Display for MarkerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MarkerShape {
    type Err = StyleError;

    /// Parse a shape name, ignoring case, spaces, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|shape| shape.name().eq_ignore_ascii_case(&key))
            .ok_or_else(|| StyleError::UnknownMarker(s.to_string()))
    }
}

/// Offsets of an equilateral triangle whose side length is `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleOffsets {
    /// Distance from the center to each vertex: `size / sqrt(3)`.
    pub radius: f32,
    /// Horizontal offset of the two side vertices: `radius * sqrt(3) / 2`.
    pub x_offset: f32,
    /// Vertical offset of the two side vertices: `radius / 2`.
    pub y_offset: f32,
}

impl TriangleOffsets {
    pub fn new(size: f32) -> Self {
        let sqrt_3 = 3.0_f32.sqrt();
        let radius = size / sqrt_3;
        Self {
            radius,
            x_offset: radius * sqrt_3 / 2.0,
            y_offset: radius / 2.0,
        }
    }
}

fn cross(path: &mut Path, center: Pixel, half: f32) {
    path.segment(center.translate(-half, 0.0), center.translate(half, 0.0))
        .segment(center.translate(0.0, -half), center.translate(0.0, half));
}

fn eks(path: &mut Path, center: Pixel, half: f32) {
    // Diagonal arms have the same length as the cross arms.
    let d = half * FRAC_1_SQRT_2;
    path.segment(center.translate(-d, -d), center.translate(d, d))
        .segment(center.translate(-d, d), center.translate(d, -d));
}

fn star_points(center: Pixel, outer: f32, inner: f32) -> Vec<Pixel> {
    let c = Vec2::from(center);
    (0..10)
        .map(|i| {
            // First point straight up; Y grows downward.
            let angle = -FRAC_PI_2 + i as f32 * PI / 5.0;
            let r = if i % 2 == 0 { outer } else { inner };
            Pixel::from(c + Vec2::from_angle(angle) * r)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
/// Marker styling options for data points.
///
/// Bundles a shape with its size and the styles used to paint it.
pub struct MarkerStyle {
    /// Shape of the marker.
    pub shape: MarkerShape,
    /// Size of the marker in pixels.
    pub size: f32,
    /// Interior styling, used by filled shapes.
    pub fill: FillStyle,
    /// Outline styling.
    pub outline: LineStyle,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            shape: MarkerShape::FilledCircle,
            size: 5.0,
            fill: FillStyle::default(),
            outline: LineStyle::none(),
        }
    }
}

impl MarkerStyle {
    pub fn new(size: f32, shape: MarkerShape) -> Self {
        let outline = if shape.is_filled() {
            LineStyle::none()
        } else {
            LineStyle::default().with_color(FillStyle::default().color)
        };
        Self {
            shape,
            size,
            outline,
            ..Self::default()
        }
    }

    pub fn circle(size: f32) -> Self {
        Self::new(size, MarkerShape::FilledCircle)
    }

    pub fn ring(size: f32) -> Self {
        Self::new(size, MarkerShape::OpenCircle)
    }

    pub fn square(size: f32) -> Self {
        Self::new(size, MarkerShape::FilledSquare)
    }

    pub fn star(size: f32) -> Self {
        Self::new(size, MarkerShape::Star)
    }

    pub fn triangle(size: f32) -> Self {
        Self::new(size, MarkerShape::FilledTriangleUp)
    }

    pub fn tri_up(size: f32) -> Self {
        Self::new(size, MarkerShape::TriUp)
    }

    /// Set both the fill and outline color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.fill.color = color;
        self.outline.color = color;
        self
    }

    pub fn with_fill(mut self, fill: FillStyle) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_outline(mut self, outline: LineStyle) -> Self {
        self.outline = outline;
        self
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if !is_drawable_size(self.size) {
            return Err(StyleError::InvalidMarkerSize(self.size));
        }
        if let FillPattern::Gradient(gradient) = &self.fill.pattern {
            gradient.validate()?;
        }
        self.outline.validate()
    }

    /// Draw one marker at `center` with a fresh paint.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C, center: Pixel) {
        let mut paint = Paint::default();
        self.shape
            .render(canvas, &mut paint, center, self.size, &self.fill, &self.outline);
    }

    /// Draw a marker at each center, sharing one paint.
    pub fn render_all<C, I>(&self, canvas: &mut C, centers: I)
    where
        C: Canvas + ?Sized,
        I: IntoIterator<Item = Pixel>,
    {
        let mut paint = Paint::default();
        for center in centers {
            self.shape
                .render(canvas, &mut paint, center, self.size, &self.fill, &self.outline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::gradient::{Gradient, GradientKind};
    use crate::paint::PaintStyle;
    use crate::path::PathCommand;

    fn close(a: Pixel, b: Pixel) -> bool {
        a.distance_to(b) < 1e-3
    }

    #[test]
    fn test_tri_up_example() {
        let center = Pixel::new(10.0, 10.0);
        let segments = MarkerShape::TriUp.path(center, 3.0).segments();
        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|(from, _)| *from == center));
        assert!(close(segments[0].1, Pixel::new(10.0, 11.732)));
        assert!(close(segments[1].1, Pixel::new(8.5, 9.134)));
        assert!(close(segments[2].1, Pixel::new(11.5, 9.134)));
    }

    #[test]
    fn test_tri_up_is_not_closed() {
        let path = MarkerShape::TriUp.path(Pixel::new(0.0, 0.0), 6.0);
        assert!(!path.commands().contains(&PathCommand::Close));
        let moves = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count();
        assert_eq!(moves, 3);
    }

    #[test]
    fn test_tri_up_strokes_with_outline() {
        let mut canvas = RecordingCanvas::new();
        let mut paint = Paint::default();
        let outline = LineStyle::new(2.5, Color::WHITE);
        MarkerShape::TriUp.render(
            &mut canvas,
            &mut paint,
            Pixel::new(5.0, 5.0),
            4.0,
            &FillStyle::default(),
            &outline,
        );
        assert_eq!(canvas.commands().len(), 1);
        let cmd = &canvas.commands()[0];
        assert_eq!(cmd.paint.style, PaintStyle::Stroke);
        assert_eq!(cmd.paint.stroke_width, 2.5);
        assert_eq!(cmd.paint.color, Color::WHITE);
        assert_eq!(paint, cmd.paint);
    }

    #[test]
    fn test_filled_marker_fills_then_strokes() {
        let mut canvas = RecordingCanvas::new();
        let style = MarkerStyle::square(4.0).with_outline(LineStyle::new(1.0, Color::BLACK));
        style.render(&mut canvas, Pixel::new(0.0, 0.0));
        let styles: Vec<_> = canvas.commands().iter().map(|c| c.paint.style).collect();
        assert_eq!(styles, vec![PaintStyle::Fill, PaintStyle::Stroke]);
    }

    #[test]
    fn test_filled_marker_skips_invisible_outline() {
        let mut canvas = RecordingCanvas::new();
        MarkerStyle::circle(4.0).render(&mut canvas, Pixel::new(0.0, 0.0));
        assert_eq!(canvas.commands().len(), 1);
        assert_eq!(
            canvas.commands()[0].path.commands(),
            &[PathCommand::Circle {
                center: Pixel::new(0.0, 0.0),
                radius: 2.0
            }]
        );
    }

    #[test]
    fn test_none_draws_nothing() {
        let mut canvas = RecordingCanvas::new();
        MarkerStyle::new(4.0, MarkerShape::None).render(&mut canvas, Pixel::new(1.0, 1.0));
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_star_vertices() {
        let center = Pixel::new(0.0, 0.0);
        let points = MarkerShape::Star.path(center, 10.0).points();
        assert_eq!(points.len(), 10);
        assert!(close(points[0], Pixel::new(0.0, -5.0)));
        assert!((points[1].distance_to(center) - 5.0 * STAR_INNER_RATIO).abs() < 1e-4);
    }

    #[test]
    fn test_line_shapes_have_arm_length_half_size() {
        let center = Pixel::new(3.0, 4.0);
        for shape in [MarkerShape::Cross, MarkerShape::Eks, MarkerShape::Asterisk] {
            for (from, to) in shape.path(center, 8.0).segments() {
                assert!((from.distance_to(center) - 4.0).abs() < 1e-4, "{shape}");
                assert!((to.distance_to(center) - 4.0).abs() < 1e-4, "{shape}");
            }
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("TriUp".parse::<MarkerShape>(), Ok(MarkerShape::TriUp));
        assert_eq!("tri_up".parse::<MarkerShape>(), Ok(MarkerShape::TriUp));
        assert_eq!(
            "filled-circle".parse::<MarkerShape>(),
            Ok(MarkerShape::FilledCircle)
        );
        assert_eq!(
            "hexagon".parse::<MarkerShape>(),
            Err(StyleError::UnknownMarker("hexagon".into()))
        );
        for shape in MarkerShape::ALL {
            assert_eq!(shape.to_string().parse::<MarkerShape>(), Ok(shape));
        }
    }

    #[test]
    fn test_validate_size() {
        assert!(MarkerStyle::tri_up(3.0).validate().is_ok());
        assert_eq!(
            MarkerStyle::tri_up(0.0).validate(),
            Err(StyleError::InvalidMarkerSize(0.0))
        );
        assert!(MarkerStyle::tri_up(f32::INFINITY).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_sweep_fill() {
        let fill = FillStyle::gradient(
            Color::BLACK,
            Color::WHITE,
            Gradient::new(GradientKind::Sweep).with_angles(45.0, 45.0),
        );
        assert_eq!(
            MarkerStyle::circle(4.0).with_fill(fill).validate(),
            Err(StyleError::EmptyAngleRange {
                start: 45.0,
                end: 45.0
            })
        );
        let swept = fill.with_pattern(FillPattern::Gradient(
            Gradient::new(GradientKind::Sweep).with_angles(0.0, 90.0),
        ));
        assert!(MarkerStyle::circle(4.0).with_fill(swept).validate().is_ok());
    }

    #[test]
    fn test_non_finite_sizes_are_degenerate() {
        assert!(is_drawable_size(0.5));
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(!is_drawable_size(size), "{size}");
        }
        assert!(MarkerStyle::tri_up(f32::NAN).validate().is_err());

        let mut canvas = RecordingCanvas::new();
        MarkerStyle::tri_up(f32::INFINITY).render(&mut canvas, Pixel::new(0.0, 0.0));
        assert_eq!(canvas.strokes().count(), 1);
    }

    #[test]
    fn test_render_all_draws_each_center() {
        let mut canvas = RecordingCanvas::new();
        let centers = (0..4).map(|i| Pixel::new(i as f32, 0.0));
        MarkerStyle::tri_up(2.0).render_all(&mut canvas, centers);
        assert_eq!(canvas.strokes().count(), 4);
    }
}
