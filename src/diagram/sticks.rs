use crate::error::Result;
use crate::math::{Point2, TOLERANCE};

use super::{DiagramCurve, DiagramParameters, ForceKind};

/// Radial ordinate from the baseline circle to the envelope at one angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stick {
    /// Point on the baseline circle.
    pub base: Point2,
    /// Matching envelope point.
    pub tip: Point2,
}

impl Stick {
    /// Signed length along the outward radial direction.
    ///
    /// Positive when the envelope lies outside the baseline circle.
    #[must_use]
    pub fn signed_length(&self, center: Point2) -> f64 {
        let radial = self.base - center;
        let delta = self.tip - self.base;
        let norm = radial.norm();
        if norm < TOLERANCE {
            return delta.norm();
        }
        delta.dot(&radial) / norm
    }
}

impl From<Stick> for (Point2, Point2) {
    fn from(stick: Stick) -> Self {
        (stick.base, stick.tip)
    }
}

/// Builds the stick ordinates that fill a diagram.
///
/// Baseline and envelope are walked in lock-step over the same angle
/// sequence, so stick `i` always ends on envelope point `i`.
#[derive(Debug, Clone, Copy)]
pub struct StickRenderer<'a> {
    curve: &'a DiagramCurve,
}

impl<'a> StickRenderer<'a> {
    /// Creates a renderer over an existing curve.
    #[must_use]
    pub fn new(curve: &'a DiagramCurve) -> Self {
        Self { curve }
    }

    /// Baseline circle points, one per sampled angle.
    pub fn baseline(&self) -> impl ExactSizeIterator<Item = Point2> + Clone + 'a {
        let params = self.curve.params();
        let radius = params.baseline_radius();
        let projector = params.projector();
        self.curve
            .sampler()
            .angles()
            .map(move |angle| projector.project(radius, angle))
    }

    /// Sticks in increasing angle order.
    pub fn sticks(&self) -> impl ExactSizeIterator<Item = Stick> + Clone + 'a {
        self.baseline()
            .zip(self.curve.points())
            .map(|(base, tip)| Stick { base, tip })
    }
}

/// Computes the sticks of `kind` under `params` in one call.
///
/// # Errors
///
/// Returns an error if `params` fails [`DiagramParameters::validate`].
pub fn sticks(kind: ForceKind, params: DiagramParameters) -> Result<Vec<(Point2, Point2)>> {
    let curve = DiagramCurve::new(kind, params)?;
    Ok(StickRenderer::new(&curve).sticks().map(Into::into).collect())
}
