//! Application-Layer: Intents, Editier-Session und Viewport-Umrechnung.

mod intent;
mod session;
mod viewport;

pub use intent::CurveIntent;
pub use session::{CurveSession, PointHandle};
pub use viewport::Viewport;
