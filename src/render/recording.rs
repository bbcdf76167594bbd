use crate::math::Point2;

use super::{CanvasSurface, Color, Font, Stroke};

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Oval {
        top_left: Point2,
        bottom_right: Point2,
        stroke: Stroke,
    },
    Line {
        from: Point2,
        to: Point2,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<Point2>,
        stroke: Stroke,
    },
    Text {
        anchor: Point2,
        text: String,
        font: Font,
        color: Color,
    },
}

/// A surface that keeps every primitive as a display list.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    primitives: Vec<Primitive>,
}

impl RecordingSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Primitives in draw order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Takes the display list, leaving the surface empty.
    pub fn take(&mut self) -> Vec<Primitive> {
        std::mem::take(&mut self.primitives)
    }

    /// Number of recorded primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Returns `true` if nothing has been drawn since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

impl CanvasSurface for RecordingSurface {
    fn clear(&mut self) {
        self.primitives.clear();
    }

    fn oval(&mut self, top_left: Point2, bottom_right: Point2, stroke: Stroke) {
        self.primitives.push(Primitive::Oval {
            top_left,
            bottom_right,
            stroke,
        });
    }

    fn line(&mut self, from: Point2, to: Point2, stroke: Stroke) {
        self.primitives.push(Primitive::Line { from, to, stroke });
    }

    fn polyline(&mut self, points: &[Point2], stroke: Stroke) {
        self.primitives.push(Primitive::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn text(&mut self, anchor: Point2, text: &str, font: &Font, color: Color) {
        self.primitives.push(Primitive::Text {
            anchor,
            text: text.to_owned(),
            font: font.clone(),
            color,
        });
    }
}
