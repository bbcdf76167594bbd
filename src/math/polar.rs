//! Polar-to-canvas projection.
//!
//! Angles are measured counter-clockwise from the positive x axis in the
//! diagram's own frame. The canvas uses screen convention (origin top-left,
//! y growing downward), so whether positive angles rotate up or down on
//! screen depends on [`YAxisDirection`].

use super::{Point2, Vector2};

/// A radius/angle pair. The radius may be negative (raw formula output).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    pub radius: f64,
    /// Angle in radians.
    pub angle: f64,
}

impl PolarPoint {
    /// Creates a new polar point.
    #[must_use]
    pub fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }

    /// Returns the offset from the pole in a y-up frame.
    #[must_use]
    pub fn to_offset(self) -> Vector2 {
        let (sin, cos) = self.angle.sin_cos();
        Vector2::new(cos, sin) * self.radius
    }
}

/// Direction in which positive angles sweep on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YAxisDirection {
    /// `y = -radius * sin(angle) + cy`: positive angles rotate upward
    /// (counter-clockwise as seen on screen).
    #[default]
    Up,
    /// `y = radius * sin(angle) + cy`: positive angles rotate downward.
    Down,
}

impl YAxisDirection {
    /// Sign applied to the `sin` term of the projection.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Up => -1.0,
            Self::Down => 1.0,
        }
    }
}

/// Maps polar coordinates onto a canvas, centered on the canvas midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarProjector {
    center: Point2,
    y_axis: YAxisDirection,
}

impl PolarProjector {
    /// Creates a projector for a canvas of `width` x `height` pixels.
    #[must_use]
    pub fn new(width: f64, height: f64, y_axis: YAxisDirection) -> Self {
        Self {
            center: Point2::new(width / 2.0, height / 2.0),
            y_axis,
        }
    }

    /// Returns the canvas center (the pole of the diagram).
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Projects `(radius, angle)` to a canvas point.
    ///
    /// `x = radius * cos(angle) + width / 2`,
    /// `y = ±radius * sin(angle) + height / 2`.
    #[must_use]
    pub fn project(&self, radius: f64, angle: f64) -> Point2 {
        let offset = PolarPoint::new(radius, angle).to_offset();
        Point2::new(
            self.center.x + offset.x,
            self.center.y + self.y_axis.sign() * offset.y,
        )
    }

    /// Projects a [`PolarPoint`].
    #[must_use]
    pub fn project_point(&self, point: PolarPoint) -> Point2 {
        self.project(point.radius, point.angle)
    }
}
