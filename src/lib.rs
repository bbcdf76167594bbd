pub mod diagram;
pub mod error;
pub mod math;
pub mod render;
pub mod session;

pub use diagram::{DiagramCurve, DiagramParameters, ForceKind, StickRenderer};
pub use error::{PolarisError, Result};
pub use session::DiagramSession;
