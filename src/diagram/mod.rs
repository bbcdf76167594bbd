pub mod curve;
mod force;
mod params;
mod sampler;
pub mod sticks;

pub use curve::DiagramCurve;
pub use force::ForceKind;
pub use params::{CanvasSize, DiagramParameters, PhysicalConstants};
pub use sampler::{AngleSampler, Angles, MAX_SAMPLES};
pub use sticks::{Stick, StickRenderer};
