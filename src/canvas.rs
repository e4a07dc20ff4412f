//! Drawing backends.
use crate::paint::{Paint, PaintStyle};
use crate::path::Path;
use crate::pixel::PixelRect;

/// A surface that paths can be drawn onto.
///
/// Implementors fill or stroke `path` according to `paint.style`, using
/// `paint.shader` when set and `paint.color` otherwise.
pub trait Canvas {
    fn draw_path(&mut self, path: &Path, paint: &Paint);

    /// Draw an axis-aligned rectangle.
    fn draw_rect(&mut self, rect: PixelRect, paint: &Paint) {
        let mut path = Path::new();
        path.polygon(&[
            rect.top_left(),
            rect.top_right(),
            rect.bottom_right(),
            rect.bottom_left(),
        ]);
        self.draw_path(&path, paint);
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        (**self).draw_path(path, paint);
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub path: Path,
    pub paint: Paint,
}

/// A canvas that keeps every draw call as a display list.
///
/// Useful for deferred rendering and for inspecting what was drawn.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded stroke calls only.
    pub fn strokes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| c.paint.style == PaintStyle::Stroke)
    }

    /// Recorded fill calls only.
    pub fn fills(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| c.paint.style == PaintStyle::Fill)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Issue every recorded draw call against `target`, in order.
    pub fn replay<C: Canvas + ?Sized>(&self, target: &mut C) {
        for cmd in &self.commands {
            target.draw_path(&cmd.path, &cmd.paint);
        }
    }
}

impl Canvas for RecordingCanvas {
    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        if path.is_empty() {
            return;
        }
        self.commands.push(DrawCommand {
            path: path.clone(),
            paint: paint.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    #[test]
    fn test_draw_rect_records_closed_polygon() {
        let mut canvas = RecordingCanvas::new();
        let rect = PixelRect::try_new(0.0, 0.0, 2.0, 3.0).unwrap();
        canvas.draw_rect(rect, &Paint::default());
        assert_eq!(canvas.commands().len(), 1);
        let segments = canvas.commands()[0].path.segments();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], (Pixel::new(0.0, 0.0), Pixel::new(2.0, 0.0)));
    }

    #[test]
    fn test_empty_path_is_skipped() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_path(&Path::new(), &Paint::default());
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_replay_copies_display_list() {
        let mut source = RecordingCanvas::new();
        let mut path = Path::new();
        path.segment(Pixel::new(0.0, 0.0), Pixel::new(1.0, 1.0));
        let stroke = Paint {
            style: PaintStyle::Stroke,
            ..Paint::default()
        };
        source.draw_path(&path, &stroke);
        source.draw_rect(PixelRect::default(), &Paint::default());

        let mut target = RecordingCanvas::new();
        source.replay(&mut target);
        assert_eq!(target.commands(), source.commands());
        assert_eq!(target.strokes().count(), 1);
        assert_eq!(target.fills().count(), 1);

        source.clear();
        assert!(source.commands().is_empty());
    }
}
