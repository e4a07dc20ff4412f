use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::StyleError;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[derive(Serialize, Deserialize)]
/// A position in device pixel space.
///
/// X grows to the right and Y grows downward, as on screen.
pub struct Pixel {
    pub x: f32,
    pub y: f32,
}

impl Pixel {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset this pixel by `dx`, `dy`.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance_to(self, other: Pixel) -> f32 {
        Vec2::from(self).distance(Vec2::from(other))
    }
}

impl From<Vec2> for Pixel {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Pixel> for Vec2 {
    fn from(p: Pixel) -> Self {
        Vec2::new(p.x, p.y)
    }
}

impl From<iced::Point> for Pixel {
    fn from(p: iced::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Pixel> for iced::Point {
    fn from(p: Pixel) -> Self {
        iced::Point::new(p.x, p.y)
    }
}

/// A named anchor within a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    LowerLeft,
    LowerCenter,
    LowerRight,
}

/// An axis-aligned rectangle in pixel space.
///
/// `top` is the smaller Y value since Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PixelRect {
    /// Create a rectangle from its top-left corner and size.
    ///
    /// Fails when `width` or `height` is negative.
    pub fn try_new(left: f32, top: f32, width: f32, height: f32) -> Result<Self, StyleError> {
        if width < 0.0 || height < 0.0 || width.is_nan() || height.is_nan() {
            return Err(StyleError::NegativeExtent { width, height });
        }
        Ok(Self {
            left,
            right: left + width,
            top,
            bottom: top + height,
        })
    }

    /// Create a rectangle spanning two opposite corners, in any order.
    pub fn from_corners(a: Pixel, b: Pixel) -> Self {
        Self {
            left: a.x.min(b.x),
            right: a.x.max(b.x),
            top: a.y.min(b.y),
            bottom: a.y.max(b.y),
        }
    }

    /// A square of side `size` centered on `center`.
    ///
    /// Negative sizes collapse to a zero-area rectangle at `center`.
    pub fn centered_square(center: Pixel, size: f32) -> Self {
        let half = size.max(0.0) / 2.0;
        Self {
            left: center.x - half,
            right: center.x + half,
            top: center.y - half,
            bottom: center.y + half,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn horizontal_center(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn vertical_center(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }

    pub fn center(&self) -> Pixel {
        Pixel::new(self.horizontal_center(), self.vertical_center())
    }

    pub fn top_left(&self) -> Pixel {
        Pixel::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Pixel {
        Pixel::new(self.right, self.top)
    }

    pub fn bottom_left(&self) -> Pixel {
        Pixel::new(self.left, self.bottom)
    }

    pub fn bottom_right(&self) -> Pixel {
        Pixel::new(self.right, self.bottom)
    }

    /// True when the rectangle covers no area.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// The pixel at the given anchor.
    pub fn aligned_pixel(&self, alignment: Alignment) -> Pixel {
        let x = match alignment {
            Alignment::UpperLeft | Alignment::MiddleLeft | Alignment::LowerLeft => self.left,
            Alignment::UpperCenter | Alignment::MiddleCenter | Alignment::LowerCenter => {
                self.horizontal_center()
            }
            Alignment::UpperRight | Alignment::MiddleRight | Alignment::LowerRight => self.right,
        };
        let y = match alignment {
            Alignment::UpperLeft | Alignment::UpperCenter | Alignment::UpperRight => self.top,
            Alignment::MiddleLeft | Alignment::MiddleCenter | Alignment::MiddleRight => {
                self.vertical_center()
            }
            Alignment::LowerLeft | Alignment::LowerCenter | Alignment::LowerRight => self.bottom,
        };
        Pixel::new(x, y)
    }
}

impl From<iced::Rectangle> for PixelRect {
    fn from(r: iced::Rectangle) -> Self {
        Self {
            left: r.x,
            right: r.x + r.width,
            top: r.y,
            bottom: r.y + r.height,
        }
    }
}
