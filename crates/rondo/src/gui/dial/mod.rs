pub mod model;
pub mod view;

pub use model::{DialModel, Face};
pub use view::draw;

pub const ICON_SIZE: i32 = 256;
pub const MARGIN: f64 = 24.0; // free space around the ring
pub const RING_WIDTH: f64 = 2.0;
pub const CENTER_CIRCLE_FACTOR: f64 = 0.3; // relative to the ring radius
pub const FOCUS_MARK_RADIUS: f64 = 4.0;
pub const ICON_INACTIVE_ALPHA: f64 = 0.6;
pub const TAP_SLOP: f64 = 8.0; // px a press may travel and still be a tap
