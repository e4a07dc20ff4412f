//! Rendering primitives for 2D plots: marker glyphs and fill styles.
//!
//! - Marker shapes (circles, squares, triangles, stars, spokes...) drawn at data points
//! - Solid and gradient fills (linear, radial, sweep, two-point conical)
//! - A small [`Canvas`] trait so any 2D backend can receive the draw calls
//! - A [`RecordingCanvas`] display list, and an iced canvas backend behind the `canvas` feature
//!
//! Quick start:
//!
//! ```
//! use plot_primitives::{Color, LineStyle, MarkerShape, MarkerStyle, Pixel, RecordingCanvas};
//!
//! let style = MarkerStyle::new(6.0, MarkerShape::TriUp)
//!     .with_outline(LineStyle::new(1.5, Color::from_rgb(0.2, 0.6, 1.0)));
//!
//! let mut canvas = RecordingCanvas::new();
//! style.render(&mut canvas, Pixel::new(10.0, 10.0));
//! assert_eq!(canvas.commands().len(), 1);
//! ```
pub mod canvas;
pub mod error;
pub mod gradient;
pub mod marker;
pub mod paint;
pub mod path;
pub mod pixel;
pub mod shader;
pub mod style;

pub(crate) mod color;
#[cfg(feature = "canvas")]
mod iced_canvas;

// Iced re-exports.
pub use iced::Color;

// Re-exports of public types.
pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use error::StyleError;
pub use gradient::{Gradient, GradientKind};
pub use marker::{MarkerShape, MarkerStyle, TriangleOffsets};
pub use paint::{LineCap, Paint, PaintStyle};
pub use path::{Path, PathCommand};
pub use pixel::{Alignment, Pixel, PixelRect};
pub use shader::{Shader, TileMode};
pub use style::{FillPattern, FillStyle, LinePattern, LineStyle};
