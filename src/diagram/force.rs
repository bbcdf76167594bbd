use std::f64::consts::PI;
use std::fmt;

use super::params::PhysicalConstants;

/// Internal force plotted around the ring.
///
/// Each kind is a closed-form beam-theory expression in the angle `θ`
/// (radians). The drawn radius is
/// `base_radius * r + scale_factor * term(θ)`, so a zero scale factor
/// collapses every diagram onto the baseline circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForceKind {
    /// Bending moment: `-H / (2π) * (2θ sin θ - θ)`.
    Moment,
    /// Shear force: `-H / (2π r) * (2 cos θ - 1)`.
    Shear,
    /// Normal force: `H / (π r) * sin θ`.
    Normal,
}

impl ForceKind {
    /// All kinds, in key-binding order (`'0'`, `'1'`, `'2'`).
    pub const ALL: [ForceKind; 3] = [ForceKind::Moment, ForceKind::Normal, ForceKind::Shear];

    /// Label drawn next to the diagram.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Moment => "ЭMΣ",
            Self::Shear => "ЭQ",
            Self::Normal => "ЭN",
        }
    }

    /// Key that selects this kind.
    #[must_use]
    pub fn key(self) -> char {
        match self {
            Self::Moment => '0',
            Self::Normal => '1',
            Self::Shear => '2',
        }
    }

    /// Looks up the kind bound to `key`.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// The scale-dependent part of the formula at `angle`.
    #[must_use]
    pub fn term(self, angle: f64, constants: &PhysicalConstants) -> f64 {
        let PhysicalConstants { h, r, .. } = *constants;
        match self {
            Self::Moment => -h / (2.0 * PI) * (2.0 * angle * angle.sin() - angle),
            Self::Shear => -h / (2.0 * PI * r) * (2.0 * angle.cos() - 1.0),
            Self::Normal => h / (PI * r) * angle.sin(),
        }
    }

    /// Radial magnitude at `angle` for the given scale factor.
    ///
    /// Total over the reals; never fails.
    #[must_use]
    pub fn evaluate(
        self,
        angle: f64,
        scale_factor: f64,
        base_radius: f64,
        constants: &PhysicalConstants,
    ) -> f64 {
        base_radius * constants.r + scale_factor * self.term(angle, constants)
    }
}

impl fmt::Display for ForceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
