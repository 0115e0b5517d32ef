// The single report page: state machine, HTML rendering, and route handlers.

pub mod handlers;
pub mod model;
pub mod render;

pub use model::{SharedSurface, Surface};
