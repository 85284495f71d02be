//! Radial navigation dial: a continuously rotating ring of destinations that
//! can be dragged, flung or tapped, and always comes to rest on exactly one
//! of them.
//!
//! [`DialController`] is the entry point. Hosts feed it pointer events and
//! frame ticks; it calls back into a [`Navigator`] once per committed
//! selection.

pub mod macros;

pub mod angle;
pub mod config;
pub mod control;
pub mod controller;
pub mod geometry;
pub mod gesture;
pub mod layout;
pub mod motion;
pub mod route;

pub use angle::AngleState;
pub use config::{ConfigurationError, DialConfig, DragModel};
pub use controller::{DialController, Frame, Generation, Navigator, Phase};
pub use geometry::Point;
pub use gesture::{GestureSample, Velocity};
pub use layout::ButtonSlot;
pub use motion::Easing;
pub use route::{RouteId, RouteTable};
