//! Drag-to-rotation mapping and release velocity estimation.

use crate::angle::signed_delta_degrees;
use crate::config::{DialConfig, DragModel};
use crate::geometry::Point;
use std::collections::VecDeque;
use std::time::Duration;

/// Only samples this recent count towards the release velocity.
pub const VELOCITY_WINDOW: Duration = Duration::from_millis(100);
const VELOCITY_SAMPLES: usize = 8;
/// Contacts closer than this to the dial center have no usable tangent.
const MIN_LEVER: f64 = 1.0;

/// Pointer velocity in px/s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One pointer-move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Displacement since pointer-down, accumulated by the host.
    pub displacement: Point,
    /// Velocity measured by the host, when the platform reports one.
    pub velocity: Option<Velocity>,
    /// Event time on any monotonic clock shared with pointer-down/up.
    pub time: Duration,
}

impl GestureSample {
    pub fn new(dx: f64, dy: f64, time: Duration) -> Self {
        Self {
            displacement: Point::new(dx, dy),
            velocity: None,
            time,
        }
    }

    pub fn horizontal(dx: f64, time: Duration) -> Self {
        Self::new(dx, 0.0, time)
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity = Some(Velocity::new(vx, vy));
        self
    }
}

/// Finite-difference velocity over a short trailing window.
#[derive(Debug, Clone, Default)]
pub struct VelocityTracker {
    history: VecDeque<(Duration, Point)>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(VELOCITY_SAMPLES + 1),
        }
    }

    pub fn record(&mut self, time: Duration, position: Point) {
        // Out-of-order timestamps restart the estimate.
        if self.history.back().is_some_and(|(t, _)| *t > time) {
            self.history.clear();
        }
        self.history.push_back((time, position));
        if self.history.len() > VELOCITY_SAMPLES {
            self.history.pop_front();
        }
    }

    /// Velocity as of `now`. Samples older than [`VELOCITY_WINDOW`] are
    /// ignored, so a pointer held still before release reports zero.
    pub fn estimate(&self, now: Duration) -> Velocity {
        let mut recent = self
            .history
            .iter()
            .filter(|(t, _)| now.saturating_sub(*t) <= VELOCITY_WINDOW);

        let Some(&(t0, p0)) = recent.next() else {
            return Velocity::default();
        };
        let Some(&(t1, p1)) = recent.last() else {
            return Velocity::default();
        };

        let dt = t1.saturating_sub(t0).as_secs_f64();
        if dt <= f64::EPSILON {
            return Velocity::default();
        }
        Velocity::new((p1.x - p0.x) / dt, (p1.y - p0.y) / dt)
    }
}

#[derive(Debug, Clone)]
struct Drag {
    baseline: f64,
    /// Contact point at pointer-down, relative to the dial center.
    origin: Point,
    /// Tangent model: accumulated rotation and the last contact angle.
    rotation: f64,
    last_polar: Option<f64>,
    displacement: Point,
    reported_velocity: Option<Velocity>,
    tracker: VelocityTracker,
}

impl Drag {
    fn contact(&self) -> Point {
        self.origin.offset(self.displacement.x, self.displacement.y)
    }
}

/// Turns one pointer drag at a time into dial angles.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    model: DragModel,
    circle_radius: f64,
    drag: Option<Drag>,
}

impl GestureInterpreter {
    pub fn new(config: &DialConfig) -> Self {
        Self {
            model: config.drag_model,
            circle_radius: config.circle_radius,
            drag: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts a drag whose rotation is measured from `baseline`.
    pub fn begin(&mut self, baseline: f64, origin: Point, time: Duration) {
        let mut tracker = VelocityTracker::new();
        tracker.record(time, Point::default());
        self.drag = Some(Drag {
            baseline,
            origin,
            rotation: 0.0,
            last_polar: (origin.magnitude() >= MIN_LEVER).then(|| origin.degrees()),
            displacement: Point::default(),
            reported_velocity: None,
            tracker,
        });
    }

    /// Applies a move and returns the new absolute dial angle, or `None`
    /// when no drag is in progress or the displacement is not finite.
    /// Skipped samples leave the drag untouched.
    pub fn update(&mut self, sample: &GestureSample) -> Option<f64> {
        let model = self.model;
        let radius = self.circle_radius;
        let drag = self.drag.as_mut()?;
        if !sample.displacement.is_finite() {
            return None;
        }

        drag.displacement = sample.displacement;
        drag.tracker.record(sample.time, sample.displacement);
        if sample.velocity.is_some() {
            drag.reported_velocity = sample.velocity;
        }

        let delta = match model {
            DragModel::Horizontal => arc_degrees(sample.displacement.x, radius),
            DragModel::Tangent => {
                let contact = drag.contact();
                if contact.magnitude() >= MIN_LEVER {
                    let polar = contact.degrees();
                    if let Some(last) = drag.last_polar {
                        drag.rotation += signed_delta_degrees(polar, last);
                    }
                    drag.last_polar = Some(polar);
                }
                drag.rotation
            }
        };
        Some(drag.baseline + delta)
    }

    /// Ends the drag and returns the release speed in degrees per second
    /// (positive is clockwise), or `None` when no drag was in progress.
    pub fn finish(&mut self, time: Duration) -> Option<f64> {
        let drag = self.drag.take()?;
        let velocity = drag
            .reported_velocity
            .unwrap_or_else(|| drag.tracker.estimate(time));

        let angular = match self.model {
            DragModel::Horizontal => arc_degrees(velocity.x, self.circle_radius),
            DragModel::Tangent => {
                let contact = drag.contact();
                let lever = contact.magnitude();
                if lever < MIN_LEVER {
                    0.0
                } else {
                    // Unit tangent in the direction of increasing screen angle.
                    let (tx, ty) = (-contact.y / lever, contact.x / lever);
                    arc_degrees(velocity.x * tx + velocity.y * ty, lever)
                }
            }
        };
        Some(if angular.is_finite() { angular } else { 0.0 })
    }

    /// Drops the drag without producing a velocity. Returns whether one was
    /// in progress.
    pub fn cancel(&mut self) -> bool {
        self.drag.take().is_some()
    }
}

/// Central angle, in degrees, subtended by an arc of `length` on a circle of
/// `radius`.
fn arc_degrees(length: f64, radius: f64) -> f64 {
    (length / radius).to_degrees()
}
