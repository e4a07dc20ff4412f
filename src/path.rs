use crate::pixel::Pixel;

/// A single path construction step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new contour at the given pixel.
    MoveTo(Pixel),
    /// Straight segment from the current point.
    LineTo(Pixel),
    /// A full circle as its own closed contour.
    Circle { center: Pixel, radius: f32 },
    /// Close the current contour back to its start.
    Close,
}

/// An ordered list of path commands in pixel space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Pixel) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Pixel) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn circle(&mut self, center: Pixel, radius: f32) -> &mut Self {
        self.commands.push(PathCommand::Circle { center, radius });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Add a single segment as its own contour.
    pub fn segment(&mut self, from: Pixel, to: Pixel) -> &mut Self {
        self.move_to(from).line_to(to)
    }

    /// Add a closed polygon through `points`.
    pub fn polygon(&mut self, points: &[Pixel]) -> &mut Self {
        if let Some((first, rest)) = points.split_first() {
            self.move_to(*first);
            for p in rest {
                self.line_to(*p);
            }
            self.close();
        }
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every explicit vertex of the path, in order. Circles contribute their center.
    pub fn points(&self) -> Vec<Pixel> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
                PathCommand::Circle { center, .. } => Some(center),
                PathCommand::Close => None,
            })
            .collect()
    }

    /// Straight segments `(from, to)` drawn by this path, including closing edges.
    pub fn segments(&self) -> Vec<(Pixel, Pixel)> {
        let mut out = Vec::new();
        let mut start = None;
        let mut current = None;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    start = Some(p);
                    current = Some(p);
                }
                PathCommand::LineTo(p) => {
                    if let Some(c) = current {
                        out.push((c, p));
                    }
                    current = Some(p);
                }
                PathCommand::Close => {
                    if let (Some(c), Some(s)) = (current, start)
                        && c != s
                    {
                        out.push((c, s));
                    }
                    current = start;
                }
                PathCommand::Circle { .. } => {}
            }
        }
        out
    }

    /// The path vertices as raw `f32` pairs, ready to upload to a vertex buffer.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        let points = self.points();
        bytemuck::cast_slice::<Pixel, u8>(&points).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_closes() {
        let mut path = Path::new();
        path.polygon(&[
            Pixel::new(0.0, 0.0),
            Pixel::new(1.0, 0.0),
            Pixel::new(0.0, 1.0),
        ]);
        assert_eq!(path.commands().len(), 4);
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
        let segments = path.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], (Pixel::new(0.0, 1.0), Pixel::new(0.0, 0.0)));
    }

    #[test]
    fn test_empty_polygon_adds_nothing() {
        let mut path = Path::new();
        path.polygon(&[]);
        assert!(path.is_empty());
    }

    #[test]
    fn test_disjoint_segments() {
        let mut path = Path::new();
        let o = Pixel::new(0.0, 0.0);
        path.segment(o, Pixel::new(1.0, 0.0))
            .segment(o, Pixel::new(0.0, 1.0));
        assert_eq!(
            path.segments(),
            vec![(o, Pixel::new(1.0, 0.0)), (o, Pixel::new(0.0, 1.0))]
        );
    }

    #[test]
    fn test_vertex_bytes() {
        let mut path = Path::new();
        path.segment(Pixel::new(1.0, 2.0), Pixel::new(3.0, 4.0));
        let bytes = path.vertex_bytes();
        assert_eq!(bytes.len(), 4 * std::mem::size_of::<f32>());
        assert_eq!(&bytes[..4], &1.0f32.to_ne_bytes());
    }
}
