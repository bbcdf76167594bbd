//! Interactive state a GUI host drives with slider and key events.
//!
//! Every update builds a candidate [`DiagramParameters`] and validates it.
//! Rejected updates are logged and leave the session unchanged, so the
//! last valid diagram stays on screen.

use tracing::{debug, warn};

use crate::diagram::{DiagramParameters, ForceKind};
use crate::error::{Result, SessionError};
use crate::render::{CanvasSurface, Color, DiagramStyle, Painter, Scene};

/// Ranges of the two sliders and the scale slider's divisor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    pub scale_min: f64,
    pub scale_max: f64,
    /// Slider value is divided by this to get the scale factor.
    pub scale_divisor: f64,
    pub radius_min: f64,
    pub radius_max: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            scale_min: -1.0,
            scale_max: 1.0,
            scale_divisor: 50.0,
            radius_min: 100.0,
            radius_max: 250.0,
        }
    }
}

fn check_range(slider: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(SessionError::SliderOutOfRange {
            slider,
            value,
            min,
            max,
        }
        .into())
    }
}

/// Current diagram selection, parameters and style.
#[derive(Debug, Clone)]
pub struct DiagramSession {
    kind: ForceKind,
    params: DiagramParameters,
    style: DiagramStyle,
    sliders: SliderConfig,
}

impl Default for DiagramSession {
    fn default() -> Self {
        Self {
            kind: ForceKind::Normal,
            params: DiagramParameters::default(),
            style: DiagramStyle::default(),
            sliders: SliderConfig::default(),
        }
    }
}

impl DiagramSession {
    /// Creates a session starting from `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation.
    pub fn new(kind: ForceKind, params: DiagramParameters, sliders: SliderConfig) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            kind,
            params,
            style: DiagramStyle::default(),
            sliders,
        })
    }

    /// Active force kind.
    #[must_use]
    pub fn kind(&self) -> ForceKind {
        self.kind
    }

    /// Current parameter snapshot.
    #[must_use]
    pub fn params(&self) -> &DiagramParameters {
        &self.params
    }

    /// Current drawing style.
    #[must_use]
    pub fn style(&self) -> &DiagramStyle {
        &self.style
    }

    /// Slider configuration.
    #[must_use]
    pub fn sliders(&self) -> &SliderConfig {
        &self.sliders
    }

    /// Switches to `kind`.
    pub fn select(&mut self, kind: ForceKind) {
        debug!(%kind, "diagram selected");
        self.kind = kind;
    }

    /// Handles a key press, selecting the bound force kind.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownKey`] if nothing is bound to `key`.
    pub fn press_key(&mut self, key: char) -> Result<ForceKind> {
        let kind = ForceKind::from_key(key).ok_or(SessionError::UnknownKey(key))?;
        self.select(kind);
        Ok(kind)
    }

    /// Applies a full parameter snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation; the session keeps its
    /// previous parameters.
    pub fn update(&mut self, params: DiagramParameters) -> Result<()> {
        if let Err(e) = params.validate() {
            warn!(error = %e, "rejected parameter update");
            return Err(e);
        }
        self.params = params;
        Ok(())
    }

    /// Handles the scale slider. The scale factor becomes `value / divisor`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` lies outside the slider range.
    pub fn set_scale_slider(&mut self, value: f64) -> Result<()> {
        let SliderConfig {
            scale_min,
            scale_max,
            scale_divisor,
            ..
        } = self.sliders;
        if let Err(e) = check_range("scale", value, scale_min, scale_max) {
            warn!(error = %e, "rejected scale slider value");
            return Err(e);
        }
        self.update(self.params.with_scale_factor(value / scale_divisor))
    }

    /// Handles the radius slider, setting the base radius directly.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` lies outside the slider range.
    pub fn set_radius_slider(&mut self, value: f64) -> Result<()> {
        let SliderConfig {
            radius_min,
            radius_max,
            ..
        } = self.sliders;
        if let Err(e) = check_range("radius", value, radius_min, radius_max) {
            warn!(error = %e, "rejected radius slider value");
            return Err(e);
        }
        self.update(self.params.with_base_radius(value))
    }

    /// Changes the sweep, in degrees.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting sweep is invalid.
    pub fn set_sweep(&mut self, start: f64, end: f64, step: f64) -> Result<()> {
        self.update(self.params.with_sweep(start, end, step))
    }

    /// Changes the color of the curve and its sticks.
    pub fn set_curve_color(&mut self, color: Color) {
        self.style = self.style.clone().with_color(color);
    }

    /// Clears `surface` and draws the current diagram onto it.
    ///
    /// # Errors
    ///
    /// Propagates validation errors; the session only ever holds valid
    /// parameters, so this does not fail in practice.
    pub fn redraw(&self, surface: &mut impl CanvasSurface) -> Result<Scene> {
        Painter::new(self.style.clone()).redraw(self.kind, &self.params, surface)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::{ParameterError, PolarisError};
    use crate::render::RecordingSurface;

    #[test]
    fn keys_select_kinds() {
        let mut session = DiagramSession::default();
        assert_eq!(session.press_key('0').unwrap(), ForceKind::Moment);
        assert_eq!(session.kind(), ForceKind::Moment);
        session.press_key('2').unwrap();
        assert_eq!(session.kind(), ForceKind::Shear);
    }

    #[test]
    fn unknown_key_keeps_selection() {
        let mut session = DiagramSession::default();
        let before = session.kind();
        let err = session.press_key('x').unwrap_err();
        assert!(matches!(err, PolarisError::Session(SessionError::UnknownKey('x'))));
        assert_eq!(session.kind(), before);
    }

    #[test]
    fn scale_slider_divides_by_fifty() {
        let mut session = DiagramSession::default();
        session.set_scale_slider(0.5).unwrap();
        assert_relative_eq!(session.params().scale_factor, 0.01);
    }

    #[test]
    fn out_of_range_slider_is_a_no_op() {
        let mut session = DiagramSession::default();
        session.set_scale_slider(0.25).unwrap();
        let before = *session.params();
        assert!(session.set_scale_slider(3.0).is_err());
        assert!(session.set_radius_slider(50.0).is_err());
        assert!(session.set_radius_slider(f64::NAN).is_err());
        assert_eq!(*session.params(), before);
    }

    #[test]
    fn radius_slider_sets_base_radius() {
        let mut session = DiagramSession::default();
        session.set_radius_slider(250.0).unwrap();
        assert_relative_eq!(session.params().base_radius, 250.0);
    }

    #[test]
    fn invalid_sweep_is_rejected() {
        let mut session = DiagramSession::default();
        let err = session.set_sweep(0.0, 180.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            PolarisError::Parameter(ParameterError::NonPositiveStep { .. })
        ));
        assert_eq!(*session.params(), DiagramParameters::default());
    }

    #[test]
    fn oversized_sweep_is_a_no_op() {
        let mut session = DiagramSession::default();
        session.set_sweep(0.0, 90.0, 1.0).unwrap();
        let before = *session.params();

        let err = session.set_sweep(0.0, 1e30, 1e-10).unwrap_err();
        assert!(matches!(
            err,
            PolarisError::Parameter(ParameterError::TooManySamples { .. })
        ));
        assert_eq!(*session.params(), before);

        let mut surface = RecordingSurface::new();
        let scene = session.redraw(&mut surface).unwrap();
        assert_eq!(scene.envelope.len(), 90);
    }

    #[test]
    fn new_rejects_invalid_params() {
        let params = DiagramParameters::default().with_base_radius(-3.0);
        assert!(DiagramSession::new(ForceKind::Moment, params, SliderConfig::default()).is_err());
    }

    #[test]
    fn color_change_reaches_style() {
        let mut session = DiagramSession::default();
        session.set_curve_color(Color::BLACK);
        assert_eq!(session.style().curve.color, Color::BLACK);
        assert_eq!(session.style().sticks.color, Color::BLACK);
    }

    #[test]
    fn redraw_uses_active_kind() {
        let mut session = DiagramSession::default();
        session.press_key('2').unwrap();
        let mut surface = RecordingSurface::new();
        let scene = session.redraw(&mut surface).unwrap();
        assert_eq!(scene.label, ForceKind::Shear.display_name());
        assert!(!surface.is_empty());
    }
}
