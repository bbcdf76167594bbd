//! Drawing primitives and the surface they are drawn onto.
//!
//! The kernel never rasterizes. It emits primitives through
//! [`CanvasSurface`]; a GUI host implements the trait over its own canvas,
//! and [`RecordingSurface`] keeps them as a display list.

mod frame;
mod painter;
mod recording;

pub use frame::Frame;
pub use painter::{DiagramStyle, Painter, Scene};
pub use recording::{Primitive, RecordingSurface};

use crate::math::Point2;

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Pure red, the default diagram color.
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb`, the format color pickers usually return.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Formats as `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Outline color and line width in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    /// Creates a new stroke.
    #[must_use]
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Font used for the diagram label.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "Times".to_owned(),
            size: 30.0,
            bold: true,
            italic: true,
        }
    }
}

/// A target for drawing primitives, in canvas pixel coordinates.
pub trait CanvasSurface {
    /// Removes everything drawn so far.
    fn clear(&mut self);

    /// Draws the outline of the ellipse inscribed in the given box.
    fn oval(&mut self, top_left: Point2, bottom_right: Point2, stroke: Stroke);

    /// Draws a straight segment.
    fn line(&mut self, from: Point2, to: Point2, stroke: Stroke);

    /// Draws an open polyline through `points` in order.
    fn polyline(&mut self, points: &[Point2], stroke: Stroke);

    /// Draws `text` centered on `anchor`.
    fn text(&mut self, anchor: Point2, text: &str, font: &Font, color: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let color = Color::rgb(0x12, 0xab, 0xff);
        assert_eq!(color.to_hex(), "#12abff");
        assert_eq!(Color::from_hex("#12abff"), Some(color));
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(Color::from_hex("ff0000"), None);
        assert_eq!(Color::from_hex("#ff00"), None);
        assert_eq!(Color::from_hex("#gg0000"), None);
        assert_eq!(Color::from_hex("#ff00é"), None);
        assert_eq!(Color::from_hex("#+f+f+f"), None);
    }
}
