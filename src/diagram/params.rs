use crate::error::{ParameterError, Result};
use crate::math::polar::{PolarProjector, YAxisDirection};

use super::AngleSampler;

/// Physical constants of the loaded ring.
///
/// `p` and `t` are carried for completeness; the closed forms in
/// [`ForceKind`](super::ForceKind) only use `h` and `r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// Applied load `P`.
    pub p: f64,
    /// Horizontal thrust `H`.
    pub h: f64,
    /// Member radius `r`.
    pub r: f64,
    /// Torque `T`.
    pub t: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            p: 780.0,
            h: 29_670.0,
            r: 1.35,
            t: 172.0,
        }
    }
}

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    /// Creates a new canvas size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(820.0, 820.0)
    }
}

/// Immutable snapshot of everything a redraw depends on.
///
/// Angles are in degrees. The sweep is half-open: `[angle_start, angle_end)`.
/// Values are rebuilt with the `with_*` methods and checked with
/// [`DiagramParameters::validate`] before any geometry is derived from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramParameters {
    pub base_radius: f64,
    pub scale_factor: f64,
    pub angle_start: f64,
    pub angle_end: f64,
    pub angle_step: f64,
    pub constants: PhysicalConstants,
    pub canvas: CanvasSize,
    pub y_axis: YAxisDirection,
}

impl Default for DiagramParameters {
    fn default() -> Self {
        Self {
            base_radius: 100.0,
            scale_factor: 0.0,
            angle_start: 0.0,
            angle_end: 181.0,
            angle_step: 1.0,
            constants: PhysicalConstants::default(),
            canvas: CanvasSize::default(),
            y_axis: YAxisDirection::Up,
        }
    }
}

impl DiagramParameters {
    /// Returns a copy with a new base radius.
    #[must_use]
    pub fn with_base_radius(self, base_radius: f64) -> Self {
        Self {
            base_radius,
            ..self
        }
    }

    /// Returns a copy with a new scale factor.
    #[must_use]
    pub fn with_scale_factor(self, scale_factor: f64) -> Self {
        Self {
            scale_factor,
            ..self
        }
    }

    /// Returns a copy with a new sweep, in degrees.
    #[must_use]
    pub fn with_sweep(self, angle_start: f64, angle_end: f64, angle_step: f64) -> Self {
        Self {
            angle_start,
            angle_end,
            angle_step,
            ..self
        }
    }

    /// Returns a copy with new physical constants.
    #[must_use]
    pub fn with_constants(self, constants: PhysicalConstants) -> Self {
        Self { constants, ..self }
    }

    /// Returns a copy with a new canvas size.
    #[must_use]
    pub fn with_canvas(self, canvas: CanvasSize) -> Self {
        Self { canvas, ..self }
    }

    /// Returns a copy with a new y-axis direction.
    #[must_use]
    pub fn with_y_axis(self, y_axis: YAxisDirection) -> Self {
        Self { y_axis, ..self }
    }

    /// Radius of the baseline circle, `base_radius * r`.
    #[must_use]
    pub fn baseline_radius(&self) -> f64 {
        self.base_radius * self.constants.r
    }

    /// Builds the projector for this canvas and axis convention.
    #[must_use]
    pub fn projector(&self) -> PolarProjector {
        PolarProjector::new(self.canvas.width, self.canvas.height, self.y_axis)
    }

    /// Checks the invariants every redraw relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if any value is non-finite, the step or
    /// base radius is non-positive, the sweep is empty or holds more than
    /// [`MAX_SAMPLES`](super::MAX_SAMPLES) angles, or the canvas has no area.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("base_radius", self.base_radius),
            ("scale_factor", self.scale_factor),
            ("angle_start", self.angle_start),
            ("angle_end", self.angle_end),
            ("angle_step", self.angle_step),
            ("P", self.constants.p),
            ("H", self.constants.h),
            ("r", self.constants.r),
            ("T", self.constants.t),
            ("canvas_width", self.canvas.width),
            ("canvas_height", self.canvas.height),
        ];
        if let Some(&(parameter, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParameterError::NonFinite { parameter }.into());
        }

        if self.angle_step <= 0.0 {
            return Err(ParameterError::NonPositiveStep {
                step: self.angle_step,
            }
            .into());
        }
        if self.angle_start >= self.angle_end {
            return Err(ParameterError::EmptySweep {
                start: self.angle_start,
                end: self.angle_end,
            }
            .into());
        }
        AngleSampler::new(self.angle_start, self.angle_end, self.angle_step)?;
        if self.base_radius <= 0.0 {
            return Err(ParameterError::NonPositiveRadius {
                radius: self.base_radius,
            }
            .into());
        }
        if self.canvas.width <= 0.0 || self.canvas.height <= 0.0 {
            return Err(ParameterError::NonPositiveCanvas {
                width: self.canvas.width,
                height: self.canvas.height,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PolarisError;

    fn parameter_error(params: DiagramParameters) -> ParameterError {
        match params.validate() {
            Err(PolarisError::Parameter(e)) => e,
            other => panic!("expected a parameter error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(DiagramParameters::default().validate().is_ok());
    }

    #[test]
    fn baseline_radius_scales_by_member_radius() {
        let params = DiagramParameters::default().with_base_radius(200.0);
        assert!((params.baseline_radius() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn zero_step_is_rejected() {
        let params = DiagramParameters::default().with_sweep(0.0, 90.0, 0.0);
        assert_eq!(
            parameter_error(params),
            ParameterError::NonPositiveStep { step: 0.0 }
        );
    }

    #[test]
    fn negative_step_is_rejected() {
        let params = DiagramParameters::default().with_sweep(0.0, 90.0, -5.0);
        assert!(matches!(
            parameter_error(params),
            ParameterError::NonPositiveStep { .. }
        ));
    }

    #[test]
    fn reversed_sweep_is_rejected() {
        let params = DiagramParameters::default().with_sweep(90.0, 90.0, 1.0);
        assert_eq!(
            parameter_error(params),
            ParameterError::EmptySweep {
                start: 90.0,
                end: 90.0
            }
        );
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let params = DiagramParameters::default().with_base_radius(0.0);
        assert!(matches!(
            parameter_error(params),
            ParameterError::NonPositiveRadius { .. }
        ));
    }

    #[test]
    fn nan_is_rejected_before_range_checks() {
        let params = DiagramParameters::default().with_scale_factor(f64::NAN);
        assert_eq!(
            parameter_error(params),
            ParameterError::NonFinite {
                parameter: "scale_factor"
            }
        );
    }

    #[test]
    fn oversized_sweep_is_rejected() {
        let params = DiagramParameters::default().with_sweep(0.0, 1e30, 1e-10);
        assert!(matches!(
            parameter_error(params),
            ParameterError::TooManySamples { .. }
        ));
    }

    #[test]
    fn empty_canvas_is_rejected() {
        let params = DiagramParameters::default().with_canvas(CanvasSize::new(0.0, 400.0));
        assert!(matches!(
            parameter_error(params),
            ParameterError::NonPositiveCanvas { .. }
        ));
    }

    #[test]
    fn builders_leave_other_fields_alone() {
        let base = DiagramParameters::default();
        let changed = base.with_scale_factor(0.5);
        assert!((changed.scale_factor - 0.5).abs() < f64::EPSILON);
        assert_eq!(changed.with_scale_factor(base.scale_factor), base);
    }
}
