use tracing::debug;

use crate::diagram::{DiagramCurve, DiagramParameters, ForceKind, Stick, StickRenderer};
use crate::error::Result;
use crate::math::Point2;

use super::{CanvasSurface, Color, Font, Frame, Stroke};

/// Colors, widths and label placement for a redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramStyle {
    pub curve: Stroke,
    pub sticks: Stroke,
    pub label_anchor: Point2,
    pub label_font: Font,
    pub label_color: Color,
}

impl DiagramStyle {
    /// Returns a copy with both curve and sticks drawn in `color`.
    #[must_use]
    pub fn with_color(self, color: Color) -> Self {
        Self {
            curve: Stroke { color, ..self.curve },
            sticks: Stroke {
                color,
                ..self.sticks
            },
            ..self
        }
    }
}

impl Default for DiagramStyle {
    fn default() -> Self {
        Self {
            curve: Stroke::new(Color::RED, 2.0),
            sticks: Stroke::new(Color::RED, 2.0),
            label_anchor: Point2::new(150.0, 50.0),
            label_font: Font::default(),
            label_color: Color::BLACK,
        }
    }
}

/// Everything one redraw puts on the canvas, computed up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub frame: Frame,
    pub envelope: Vec<Point2>,
    pub sticks: Vec<Stick>,
    pub label: &'static str,
}

impl Scene {
    /// Computes the scene for `kind` under `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation. Nothing is computed
    /// in that case.
    pub fn build(kind: ForceKind, params: &DiagramParameters) -> Result<Self> {
        let curve = DiagramCurve::new(kind, *params)?;
        let envelope: Vec<Point2> = curve.points().collect();
        let sticks: Vec<Stick> = StickRenderer::new(&curve).sticks().collect();
        debug!(%kind, samples = envelope.len(), "computed diagram scene");

        Ok(Self {
            frame: Frame::new(params),
            envelope,
            sticks,
            label: kind.display_name(),
        })
    }
}

/// Draws scenes onto a [`CanvasSurface`].
#[derive(Debug, Clone, Default)]
pub struct Painter {
    style: DiagramStyle,
}

impl Painter {
    /// Creates a painter with the given style.
    #[must_use]
    pub fn new(style: DiagramStyle) -> Self {
        Self { style }
    }

    /// Returns the style.
    #[must_use]
    pub fn style(&self) -> &DiagramStyle {
        &self.style
    }

    /// Clears the surface and draws frame, sticks, envelope and label.
    pub fn paint(&self, scene: &Scene, surface: &mut impl CanvasSurface) {
        surface.clear();
        scene.frame.draw(surface);
        for stick in &scene.sticks {
            surface.line(stick.base, stick.tip, self.style.sticks);
        }
        surface.polyline(&scene.envelope, self.style.curve);
        surface.text(
            self.style.label_anchor,
            scene.label,
            &self.style.label_font,
            self.style.label_color,
        );
    }

    /// Computes and paints the diagram in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` fails validation; the surface is left
    /// untouched so the previous diagram stays visible.
    pub fn redraw(
        &self,
        kind: ForceKind,
        params: &DiagramParameters,
        surface: &mut impl CanvasSurface,
    ) -> Result<Scene> {
        let scene = Scene::build(kind, params)?;
        self.paint(&scene, surface);
        Ok(scene)
    }
}
