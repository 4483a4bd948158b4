pub mod input;
pub mod math;
pub mod trackball;
pub mod viewport;

pub use input::{PointerButton, PointerEvent, WinitPointerAdapter};
pub use trackball::Trackball;
pub use viewport::ViewportExtent;
