use crate::error::Result;
use crate::math::polar::{PolarPoint, PolarProjector};
use crate::math::Point2;

use super::{AngleSampler, DiagramParameters, ForceKind};

/// The envelope of one force diagram for one parameter snapshot.
///
/// Holds no mutable state: a new curve is built for every redraw.
#[derive(Debug, Clone, Copy)]
pub struct DiagramCurve {
    kind: ForceKind,
    params: DiagramParameters,
    sampler: AngleSampler,
}

impl DiagramCurve {
    /// Creates the curve for `kind` under `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails [`DiagramParameters::validate`].
    pub fn new(kind: ForceKind, params: DiagramParameters) -> Result<Self> {
        params.validate()?;
        let sampler = AngleSampler::new(params.angle_start, params.angle_end, params.angle_step)?;
        Ok(Self {
            kind,
            params,
            sampler,
        })
    }

    /// Returns the force kind.
    #[must_use]
    pub fn kind(&self) -> ForceKind {
        self.kind
    }

    /// Returns the parameter snapshot.
    #[must_use]
    pub fn params(&self) -> &DiagramParameters {
        &self.params
    }

    /// Returns the angle sampler shared by the envelope and the sticks.
    #[must_use]
    pub fn sampler(&self) -> &AngleSampler {
        &self.sampler
    }

    /// Number of envelope points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sampler.len()
    }

    /// Returns `true` if the sweep yields no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sampler.is_empty()
    }

    /// Envelope in polar form, one point per sampled angle.
    pub fn polar_points(&self) -> impl ExactSizeIterator<Item = PolarPoint> + Clone + '_ {
        let DiagramParameters {
            scale_factor,
            base_radius,
            ref constants,
            ..
        } = self.params;
        self.sampler.angles().map(move |angle| {
            let radius = self.kind.evaluate(angle, scale_factor, base_radius, constants);
            PolarPoint::new(radius, angle)
        })
    }

    /// Envelope in canvas coordinates, in increasing angle order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point2> + Clone + '_ {
        let projector: PolarProjector = self.params.projector();
        self.polar_points()
            .map(move |point| projector.project_point(point))
    }
}

/// Computes the envelope of `kind` under `params` in one call.
///
/// # Errors
///
/// Returns an error if `params` fails [`DiagramParameters::validate`].
pub fn points(kind: ForceKind, params: DiagramParameters) -> Result<Vec<Point2>> {
    let curve = DiagramCurve::new(kind, params)?;
    Ok(curve.points().collect())
}
