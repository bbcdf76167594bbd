use crate::diagram::{CanvasSize, DiagramParameters};
use crate::math::{Point2, Vector2};

use super::{CanvasSurface, Color, Stroke};

/// Baseline circle and centerlines drawn under every diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    center: Point2,
    radius: f64,
    canvas: CanvasSize,
    circle_stroke: Stroke,
    axis_stroke: Stroke,
}

impl Frame {
    /// Creates the frame for a parameter snapshot.
    #[must_use]
    pub fn new(params: &DiagramParameters) -> Self {
        Self {
            center: params.projector().center(),
            radius: params.baseline_radius(),
            canvas: params.canvas,
            circle_stroke: Stroke::new(Color::BLACK, 4.0),
            axis_stroke: Stroke::new(Color::BLACK, 1.0),
        }
    }

    /// Radius of the baseline circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Bounding box of the baseline circle as `(top_left, bottom_right)`.
    #[must_use]
    pub fn circle_bounds(&self) -> (Point2, Point2) {
        let half = Vector2::new(self.radius, self.radius);
        (self.center - half, self.center + half)
    }

    /// Vertical centerline, top to bottom.
    #[must_use]
    pub fn vertical_axis(&self) -> (Point2, Point2) {
        (
            Point2::new(self.center.x, 0.0),
            Point2::new(self.center.x, self.canvas.height),
        )
    }

    /// Horizontal centerline, left to right.
    #[must_use]
    pub fn horizontal_axis(&self) -> (Point2, Point2) {
        (
            Point2::new(0.0, self.center.y),
            Point2::new(self.canvas.width, self.center.y),
        )
    }

    /// Draws the circle and both centerlines.
    pub fn draw(&self, surface: &mut impl CanvasSurface) {
        let (top_left, bottom_right) = self.circle_bounds();
        surface.oval(top_left, bottom_right, self.circle_stroke);

        let (from, to) = self.vertical_axis();
        surface.line(from, to, self.axis_stroke);
        let (from, to) = self.horizontal_axis();
        surface.line(from, to, self.axis_stroke);
    }
}
