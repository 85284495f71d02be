use super::{ICON_SIZE, MARGIN, TAP_SLOP};
use crate::config::{Config, Destination};
use crate::icon;
use gdk_pixbuf::Pixbuf;
use rondo_dial::{ConfigurationError, DialController, GestureSample, Navigator, Point};
use std::time::Duration;

/// What a button shows: its icon when one resolves, its label otherwise.
#[derive(Debug, Clone)]
pub struct Face {
    pub label: String,
    pub pixbuf: Option<Pixbuf>,
}

impl Face {
    pub fn new(destination: &Destination) -> Self {
        let pixbuf = destination
            .icon
            .as_ref()
            .and_then(icon::find_icon_path)
            .and_then(|path| {
                Pixbuf::from_file_at_scale(&path, ICON_SIZE, ICON_SIZE, true)
                    .map_err(|e| log::warn!("Failed to load icon {}: {}", path.display(), e))
                    .ok()
            });
        Self {
            label: destination.label.clone(),
            pixbuf,
        }
    }

    fn text_only(destination: &Destination) -> Self {
        Self {
            label: destination.label.clone(),
            pixbuf: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    center: Point,
    slot: Option<usize>,
    travel: f64,
}

/// Turns raw widget input into dial operations. A press that stays within
/// `TAP_SLOP` of where it started and began on a button is a tap on that
/// button; anything else is a drag.
pub struct DialModel<N> {
    pub controller: DialController<N>,
    pub faces: Vec<Face>,
    press: Option<Press>,
}

impl<N: Navigator> DialModel<N> {
    pub fn new(config: &Config, navigator: N) -> Result<Self, ConfigurationError> {
        let faces = config.destinations.iter().map(Face::new).collect();
        Self::with_faces(config, navigator, faces)
    }

    /// Builds the model without touching the icon theme.
    pub fn without_icons(config: &Config, navigator: N) -> Result<Self, ConfigurationError> {
        let faces = config.destinations.iter().map(Face::text_only).collect();
        Self::with_faces(config, navigator, faces)
    }

    fn with_faces(
        config: &Config,
        navigator: N,
        faces: Vec<Face>,
    ) -> Result<Self, ConfigurationError> {
        let controller = DialController::new(config.dial_config(), config.routes(), navigator)?;
        Ok(Self {
            controller,
            faces,
            press: None,
        })
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.faces.get(index).map(|f| f.label.as_str())
    }

    /// Side of the square the dial needs, margins included.
    pub fn size(&self) -> i32 {
        ((self.controller.config().circle_radius + MARGIN) * 2.0).ceil() as i32
    }

    pub fn press(&mut self, at: Point, center: Point, time: Duration) {
        let slot = self.controller.hit_test(center, at);
        self.controller.pointer_down(at.relative_to(center), time);
        self.press = Some(Press {
            center,
            slot,
            travel: 0.0,
        });
    }

    pub fn drag(&mut self, dx: f64, dy: f64, time: Duration) {
        let Some(press) = self.press.as_mut() else {
            return;
        };
        press.travel = press.travel.max(dx.hypot(dy));
        self.controller.pointer_move(&GestureSample::new(dx, dy, time));
    }

    pub fn release(&mut self, time: Duration) {
        let Some(press) = self.press.take() else {
            return;
        };
        match press.slot {
            Some(index) if press.travel <= TAP_SLOP => {
                log::debug!("Press on button {index} around {:?} is a tap", press.center);
                self.controller.pointer_tap(index);
            }
            _ => self.controller.pointer_up(time),
        }
    }

    pub fn cancel(&mut self) {
        if self.press.take().is_some() {
            self.controller.pointer_cancel();
        }
    }
}
