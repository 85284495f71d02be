use crate::angle::AngleState;
use crate::config::{ConfigurationError, DialConfig};
use crate::geometry::Point;
use crate::gesture::{GestureInterpreter, GestureSample};
use crate::layout::{self, ButtonSlot};
use crate::motion::Motion;
use crate::route::{RouteId, RouteTable};
use std::time::Duration;
use strum::Display as StrumDisplay;

/// The routing collaborator. Called exactly once per change of the
/// committed index.
pub trait Navigator {
    fn navigate_to(&mut self, route: &RouteId);
}

impl<F> Navigator for F
where
    F: FnMut(&RouteId),
{
    fn navigate_to(&mut self, route: &RouteId) {
        self(route)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum Phase {
    Idle,
    Dragging,
    /// Decay after release, then the final snap.
    Settling,
    /// Fixed-duration tween toward a tapped button.
    Animating,
    /// Unmounted; every input is ignored.
    Disposed,
}

/// Identifies the animation a frame tick was scheduled for. Bumped whenever
/// an animation starts or is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Outcome of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// The tick belongs to an animation that was cancelled or replaced, or
    /// nothing is animating. Nothing changed.
    Stale,
    Running,
    /// The dial came to rest on `index` and is idle again.
    Settled { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Purpose {
    Settle,
    Tap,
}

#[derive(Debug, Clone)]
struct Animation {
    generation: Generation,
    purpose: Purpose,
    motion: Motion,
    ticks: u32,
}

type CommitListener = Box<dyn FnMut(usize)>;

/// Owns the dial's rotation and reconciles drags, flings and taps into
/// committed selections.
pub struct DialController<N> {
    config: DialConfig,
    routes: RouteTable,
    navigator: N,
    listeners: Vec<CommitListener>,
    angle: AngleState,
    gesture: GestureInterpreter,
    animation: Option<Animation>,
    generation: Generation,
    disposed: bool,
}

impl<N: Navigator> DialController<N> {
    /// Validates the configuration and mounts the dial at angle 0 with
    /// index 0 selected. Nothing is navigated on mount.
    pub fn new(
        config: DialConfig,
        routes: RouteTable,
        navigator: N,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        if routes.len() != config.button_count {
            return Err(ConfigurationError::RouteCountMismatch {
                expected: config.button_count,
                actual: routes.len(),
            });
        }

        Ok(Self {
            angle: AngleState::new(config.button_count),
            gesture: GestureInterpreter::new(&config),
            config,
            routes,
            navigator,
            listeners: Vec::new(),
            animation: None,
            generation: Generation::default(),
            disposed: false,
        })
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Current continuous rotation in degrees.
    pub fn angle(&self) -> f64 {
        self.angle.degrees()
    }

    /// Last committed selection.
    pub fn selected_index(&self) -> usize {
        self.angle.committed_index()
    }

    pub fn selected_route(&self) -> Option<&RouteId> {
        self.routes.get(self.selected_index())
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn phase(&self) -> Phase {
        if self.disposed {
            Phase::Disposed
        } else if self.gesture.is_active() {
            Phase::Dragging
        } else {
            match self.animation.as_ref().map(|a| a.purpose) {
                Some(Purpose::Settle) => Phase::Settling,
                Some(Purpose::Tap) => Phase::Animating,
                None => Phase::Idle,
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Registers a callback fired after each navigation, with the new index.
    pub fn on_index_committed(&mut self, listener: impl FnMut(usize) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn slots(&self, center: Point) -> Vec<ButtonSlot> {
        layout::layout_slots(&self.angle, &self.config, center)
    }

    pub fn hit_test(&self, center: Point, point: Point) -> Option<usize> {
        layout::hit_test(&self.slots(center), point)
    }

    /// Starts a drag. `contact` is relative to the dial center. Any running
    /// animation is cancelled and its current angle becomes the baseline.
    pub fn pointer_down(&mut self, contact: Point, time: Duration) {
        if self.disposed {
            return;
        }
        if self.gesture.is_active() {
            log::debug!("Ignoring pointer-down during an active drag");
            return;
        }
        if !contact.is_finite() {
            log::debug!("Ignoring pointer-down at non-finite contact {:?}", contact);
            return;
        }
        self.cancel_animation();
        log::debug!("Drag started at {:.2} degrees", self.angle.degrees());
        self.gesture.begin(self.angle.degrees(), contact, time);
    }

    pub fn pointer_move(&mut self, sample: &GestureSample) {
        if self.disposed {
            return;
        }
        if !sample.displacement.is_finite() {
            log::debug!("Ignoring non-finite pointer-move {:?}", sample.displacement);
            return;
        }
        match self.gesture.update(sample) {
            Some(degrees) => self.angle.set_angle(degrees),
            None => log::debug!("Ignoring pointer-move without pointer-down"),
        }
    }

    /// Releases the drag and hands its velocity to the decay engine.
    pub fn pointer_up(&mut self, time: Duration) {
        if self.disposed {
            return;
        }
        match self.gesture.finish(time) {
            Some(velocity) => self.start_settle(velocity * self.config.velocity_amplification),
            None => log::debug!("Ignoring pointer-up without pointer-down"),
        }
    }

    /// Aborts the drag without momentum; the dial snaps to the nearest button.
    pub fn pointer_cancel(&mut self) {
        if self.disposed {
            return;
        }
        if self.gesture.cancel() {
            self.start_settle(0.0);
        }
    }

    /// Rotates to `index` with a fixed-duration tween and commits on arrival.
    pub fn tap(&mut self, index: usize) {
        if self.disposed {
            return;
        }
        if index >= self.config.button_count {
            log::warn!(
                "Ignoring tap on index {index}, dial has {} buttons",
                self.config.button_count
            );
            return;
        }
        if self.gesture.is_active() {
            log::debug!("Ignoring tap on index {index} during a drag");
            return;
        }

        self.cancel_animation();
        let from = self.angle.degrees();
        let to = self.angle.target_angle_for(index);
        if from == to {
            self.finish();
            return;
        }
        log::debug!("Animating tap from {from:.2} to {to:.2} degrees");
        self.animation = Some(Animation {
            generation: self.generation,
            purpose: Purpose::Tap,
            motion: Motion::ease(from, to, self.config.tap_duration, self.config.tap_easing),
            ticks: 0,
        });
    }

    /// Turns the drag in progress into a tap on `index`, for presses that
    /// never travelled far enough to count as a drag.
    pub fn pointer_tap(&mut self, index: usize) {
        if self.disposed {
            return;
        }
        if !self.gesture.cancel() {
            log::debug!("Ignoring pointer-tap without pointer-down");
            return;
        }
        self.tap(index);
    }

    /// Selects the neighbour of the committed index, `offset` buttons away.
    pub fn step(&mut self, offset: isize) {
        let count = self.config.button_count as isize;
        let index = (self.selected_index() as isize + offset).rem_euclid(count);
        self.tap(index as usize);
    }

    /// Advances the current animation by `dt`, provided `generation` still
    /// identifies it.
    pub fn advance(&mut self, generation: Generation, dt: Duration) -> Frame {
        if self.disposed || generation != self.generation {
            return Frame::Stale;
        }
        let Some(mut animation) = self.animation.take() else {
            return Frame::Stale;
        };
        debug_assert_eq!(animation.generation, generation);

        animation.ticks += 1;
        let (degrees, at_rest) = animation
            .motion
            .step(self.angle.degrees(), dt, &self.config);
        self.angle.set_angle(degrees);

        if animation.ticks >= self.config.max_settle_ticks {
            let target = animation
                .motion
                .target()
                .unwrap_or_else(|| self.angle.snapped_angle());
            log::debug!(
                "Animation hit the {} tick bound, jumping to {target:.2} degrees",
                self.config.max_settle_ticks
            );
            self.angle.set_angle(target);
            return self.finish();
        }

        if !at_rest {
            self.animation = Some(animation);
            return Frame::Running;
        }

        if let (Purpose::Settle, Motion::Decay { .. }) = (animation.purpose, animation.motion)
            && let Some(snap) = self.snap_motion()
        {
            animation.motion = snap;
            self.animation = Some(animation);
            return Frame::Running;
        }
        self.finish()
    }

    /// Advances the current animation, whatever its generation.
    pub fn tick(&mut self, dt: Duration) -> Frame {
        self.advance(self.generation, dt)
    }

    /// Runs the current animation to completion at the configured frame
    /// interval. Returns [`Frame::Stale`] when nothing was animating.
    pub fn settle(&mut self) -> Frame {
        let interval = self.config.frame_interval;
        let mut frame = self.tick(interval);
        while frame == Frame::Running {
            frame = self.tick(interval);
        }
        frame
    }

    /// Unmounts the dial: cancels any animation and drag, and suppresses all
    /// further navigation.
    pub fn dispose(&mut self) {
        self.cancel_animation();
        self.gesture.cancel();
        self.disposed = true;
    }

    fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            log::debug!("Cancelled animation at {:.2} degrees", self.angle.degrees());
        }
        self.generation = self.generation.next();
    }

    fn start_settle(&mut self, velocity: f64) {
        self.cancel_animation();
        let motion = if velocity.abs() >= self.config.settle_velocity_threshold {
            Some(Motion::decay(velocity))
        } else {
            self.snap_motion()
        };

        match motion {
            Some(motion) => {
                log::debug!("Settling from {:.2} degrees", self.angle.degrees());
                self.animation = Some(Animation {
                    generation: self.generation,
                    purpose: Purpose::Settle,
                    motion,
                    ticks: 0,
                });
            }
            None => {
                self.finish();
            }
        }
    }

    fn snap_motion(&self) -> Option<Motion> {
        let from = self.angle.degrees();
        let to = self.angle.snapped_angle();
        (from != to).then(|| {
            Motion::ease(
                from,
                to,
                self.config.snap_duration,
                self.config.snap_easing,
            )
        })
    }

    /// Commits the index the angle rests on. Only reached once no drag or
    /// animation is in flight.
    fn finish(&mut self) -> Frame {
        let index = self.angle.nearest_index();
        self.commit_index(index);
        Frame::Settled { index }
    }

    fn commit_index(&mut self, index: usize) {
        let Some(index) = self.angle.commit_index(index) else {
            log::debug!("Index {index} already committed");
            return;
        };
        if let Some(route) = self.routes.get(index) {
            log::info!("Committed index {index}, navigating to '{route}'");
            self.navigator.navigate_to(route);
        }
        for listener in &mut self.listeners {
            listener(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DragModel;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Recorder(Vec<RouteId>);

    impl Navigator for Recorder {
        fn navigate_to(&mut self, route: &RouteId) {
            self.0.push(route.clone());
        }
    }

    fn routes(count: usize) -> RouteTable {
        (0..count).map(|i| RouteId::new(format!("route-{i}"))).collect()
    }

    fn dial(config: DialConfig) -> DialController<Recorder> {
        let count = config.button_count;
        DialController::new(config, routes(count), Recorder::default()).unwrap()
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn navigated(dial: &DialController<Recorder>) -> Vec<&str> {
        dial.navigator().0.iter().map(|r| r.as_str()).collect()
    }

    /// Rotates the dial to `degrees` by dragging along the top of a 100 px ring.
    fn drag_to(dial: &mut DialController<Recorder>, degrees: f64, time: Duration) {
        let start = dial.angle();
        let dx = (degrees - start).to_radians() * dial.config().circle_radius;
        dial.pointer_down(Point::new(0.0, -100.0), time);
        dial.pointer_move(&GestureSample::horizontal(dx, time + ms(16)).with_velocity(0.0, 0.0));
    }

    #[test]
    fn test_rejects_bad_construction() {
        let err = DialController::new(DialConfig::new(1, 100.0), routes(1), Recorder::default())
            .err()
            .unwrap();
        assert_eq!(err, ConfigurationError::TooFewButtons(1));

        let err = DialController::new(DialConfig::new(4, 100.0), routes(3), Recorder::default())
            .err()
            .unwrap();
        assert_eq!(
            err,
            ConfigurationError::RouteCountMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_mount_state() {
        let dial = dial(DialConfig::new(4, 100.0));
        assert_eq!(dial.angle(), 0.0);
        assert_eq!(dial.selected_index(), 0);
        assert_eq!(dial.phase(), Phase::Idle);
        assert!(navigated(&dial).is_empty());
    }

    #[test]
    fn test_tap_animates_to_target_and_navigates_once() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        let committed = Rc::new(RefCell::new(Vec::new()));
        let sink = committed.clone();
        dial.on_index_committed(move |index| sink.borrow_mut().push(index));

        dial.tap(2);
        assert_eq!(dial.phase(), Phase::Animating);

        let frame = dial.tick(ms(100));
        assert_eq!(frame, Frame::Running);
        assert!(dial.angle() > 0.0 && dial.angle() < 180.0);
        assert!(navigated(&dial).is_empty(), "navigated before arrival");
        assert!(committed.borrow().is_empty());

        assert_eq!(dial.settle(), Frame::Settled { index: 2 });
        assert_eq!(dial.angle(), 180.0);
        assert_eq!(dial.selected_index(), 2);
        assert_eq!(dial.phase(), Phase::Idle);
        assert_eq!(navigated(&dial), vec!["route-2"]);
        assert_eq!(*committed.borrow(), vec![2]);
    }

    #[test]
    fn test_repeat_commit_does_not_navigate() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        dial.tap(1);
        dial.settle();
        dial.tap(1);
        assert_eq!(dial.phase(), Phase::Idle);
        dial.settle();
        dial.tap(2);
        dial.settle();
        dial.tap(2);
        dial.settle();

        assert_eq!(navigated(&dial), vec!["route-1", "route-2"]);
    }

    #[test]
    fn test_zero_gesture_keeps_selection() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        dial.pointer_down(Point::new(0.0, -100.0), ms(0));
        dial.pointer_move(&GestureSample::horizontal(0.0, ms(16)));
        dial.pointer_up(ms(32));

        assert_eq!(dial.phase(), Phase::Idle);
        assert_eq!(dial.angle(), 0.0);
        assert_eq!(dial.selected_index(), 0);
        assert!(navigated(&dial).is_empty());
    }

    #[test]
    fn test_drag_beyond_full_turn_normalizes() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        drag_to(&mut dial, 430.0, ms(0));
        assert_eq!(dial.phase(), Phase::Dragging);
        assert!((dial.angle() - 430.0).abs() < 1e-9);
        assert_eq!(dial.selected_index(), 0, "committed during drag");

        dial.pointer_up(ms(40));
        assert_eq!(dial.phase(), Phase::Settling);
        assert_eq!(dial.settle(), Frame::Settled { index: 1 });
        assert!((dial.angle() - 450.0).abs() < 1e-9);
        assert_eq!(navigated(&dial), vec!["route-1"]);
    }

    #[test]
    fn test_fling_terminates_within_tick_bound() {
        let config = DialConfig {
            deceleration_rate: 0.997,
            max_settle_ticks: 240,
            ..DialConfig::new(4, 100.0)
        };
        for run in 0..20 {
            let mut dial = dial(config.clone());
            let velocity = if run % 2 == 0 { 500.0 } else { -500.0 };
            dial.pointer_down(Point::new(0.0, -100.0), ms(0));
            dial.pointer_move(
                &GestureSample::horizontal(run as f64, ms(16)).with_velocity(velocity, 0.0),
            );
            dial.pointer_up(ms(16));

            let generation = dial.generation();
            let mut ticks = 0;
            let index = loop {
                match dial.advance(generation, config.frame_interval) {
                    Frame::Running => ticks += 1,
                    Frame::Settled { index } => break index,
                    Frame::Stale => panic!("animation vanished"),
                }
                assert!(ticks < config.max_settle_ticks, "exceeded tick bound");
            };

            assert!(index < 4);
            assert_eq!(index, dial.selected_index());
            assert_eq!(dial.angle(), dial.angle().round());
            assert_eq!(crate::angle::index_for_angle(dial.angle(), 4), index);
        }
    }

    #[test]
    fn test_tick_bound_forces_rest() {
        let config = DialConfig {
            deceleration_rate: 0.999_999,
            max_settle_ticks: 5,
            ..DialConfig::new(4, 100.0)
        };
        let mut dial = dial(config);
        dial.pointer_down(Point::new(0.0, -100.0), ms(0));
        dial.pointer_move(&GestureSample::horizontal(0.0, ms(16)).with_velocity(5000.0, 0.0));
        dial.pointer_up(ms(16));

        for _ in 0..4 {
            assert_eq!(dial.tick(ms(16)), Frame::Running);
        }
        let Frame::Settled { index } = dial.tick(ms(16)) else {
            panic!("tick bound not enforced");
        };
        assert_eq!(index, dial.selected_index());
        assert_eq!(dial.angle() % 90.0, 0.0);
    }

    #[test]
    fn test_drag_interrupts_settle_without_jump() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        dial.pointer_down(Point::new(0.0, -100.0), ms(0));
        dial.pointer_move(&GestureSample::horizontal(20.0, ms(16)).with_velocity(800.0, 0.0));
        dial.pointer_up(ms(16));

        let stale = dial.generation();
        for _ in 0..5 {
            assert_eq!(dial.tick(ms(16)), Frame::Running);
        }
        let before = dial.angle();

        dial.pointer_down(Point::new(0.0, -100.0), ms(200));
        assert_eq!(dial.phase(), Phase::Dragging);
        assert_eq!(dial.angle(), before);

        // The superseded animation's frames no longer move the dial.
        assert_eq!(dial.advance(stale, ms(16)), Frame::Stale);
        assert_eq!(dial.angle(), before);

        dial.pointer_move(&GestureSample::horizontal(0.0, ms(216)));
        assert_eq!(dial.angle(), before);
        assert!(navigated(&dial).is_empty());
    }

    #[test]
    fn test_drag_interrupts_tap_animation() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        dial.tap(2);
        dial.tick(ms(150));
        let mid = dial.angle();

        dial.pointer_down(Point::new(0.0, -100.0), ms(0));
        dial.pointer_move(&GestureSample::horizontal(0.0, ms(16)));
        dial.pointer_cancel();
        assert_eq!(dial.phase(), Phase::Settling);
        let Frame::Settled { index } = dial.settle() else {
            panic!("expected a settle");
        };
        assert_eq!(index, crate::angle::index_for_angle(mid, 4));
    }

    #[test]
    fn test_press_without_travel_becomes_tap() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        dial.pointer_down(Point::new(-75.0, 0.0), ms(0));
        dial.pointer_tap(1);
        assert_eq!(dial.phase(), Phase::Animating);
        assert_eq!(dial.settle(), Frame::Settled { index: 1 });

        dial.pointer_tap(2);
        assert_eq!(dial.phase(), Phase::Idle);
        assert_eq!(navigated(&dial), vec!["route-1"]);
    }

    #[test]
    fn test_tap_retargets_running_animation() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        dial.tap(2);
        dial.tick(ms(100));
        dial.tap(1);
        assert_eq!(dial.settle(), Frame::Settled { index: 1 });
        assert_eq!(navigated(&dial), vec!["route-1"]);
    }

    #[test]
    fn test_anomalies_are_ignored() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        dial.pointer_move(&GestureSample::horizontal(300.0, ms(0)));
        dial.pointer_up(ms(10));
        dial.tap(9);
        assert_eq!(dial.angle(), 0.0);
        assert_eq!(dial.phase(), Phase::Idle);
        assert_eq!(dial.tick(ms(16)), Frame::Stale);

        dial.pointer_down(Point::new(0.0, -100.0), ms(20));
        dial.tap(1);
        dial.pointer_down(Point::new(0.0, -100.0), ms(30));
        assert_eq!(dial.phase(), Phase::Dragging);
        assert!(navigated(&dial).is_empty());
    }

    #[test]
    fn test_non_finite_drag_is_ignored() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        dial.pointer_down(Point::new(f64::NAN, -100.0), ms(0));
        assert_eq!(dial.phase(), Phase::Idle);

        dial.pointer_down(Point::new(0.0, -100.0), ms(0));
        dial.pointer_move(&GestureSample::horizontal(f64::INFINITY, ms(16)));
        dial.pointer_move(&GestureSample::new(f64::NAN, 0.0, ms(32)));
        dial.pointer_move(
            &GestureSample::horizontal(0.0, ms(40)).with_velocity(f64::INFINITY, 0.0),
        );
        assert_eq!(dial.angle(), 0.0);

        dial.pointer_up(ms(48));
        dial.settle();
        assert_eq!(dial.angle(), 0.0);
        assert_eq!(dial.selected_index(), 0);
        assert!(navigated(&dial).is_empty());

        // the dial still responds afterwards
        dial.tap(1);
        assert_eq!(dial.settle(), Frame::Settled { index: 1 });
        assert!((dial.angle() - 90.0).abs() < 1e-9);
        assert_eq!(navigated(&dial), vec!["route-1"]);
    }

    #[test]
    fn test_dispose_stops_navigation() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        dial.tap(3);
        let generation = dial.generation();
        dial.tick(ms(16));
        dial.dispose();

        assert_eq!(dial.phase(), Phase::Disposed);
        assert_eq!(dial.advance(generation, ms(1000)), Frame::Stale);
        dial.tap(1);
        assert_eq!(dial.settle(), Frame::Stale);
        assert!(navigated(&dial).is_empty());
    }

    #[test]
    fn test_step_wraps_around() {
        let mut dial = dial(DialConfig::new(4, 100.0));
        dial.step(-1);
        assert_eq!(dial.settle(), Frame::Settled { index: 3 });
        assert_eq!(dial.angle(), -90.0);
        dial.step(1);
        dial.settle();
        assert_eq!(dial.selected_index(), 0);
        assert_eq!(navigated(&dial), vec!["route-3", "route-0"]);
    }

    #[test]
    fn test_tangent_model_drag() {
        let mut dial = dial(DialConfig {
            drag_model: DragModel::Tangent,
            ..DialConfig::new(4, 100.0)
        });
        // Drag from 3 o'clock down to 6 o'clock: a clockwise quarter turn.
        dial.pointer_down(Point::new(100.0, 0.0), ms(0));
        dial.pointer_move(&GestureSample::new(-30.0, 70.0, ms(10)));
        dial.pointer_move(&GestureSample::new(-100.0, 100.0, ms(20)).with_velocity(0.0, 0.0));
        dial.pointer_up(ms(20));
        dial.settle();

        assert_eq!(dial.phase(), Phase::Idle);
        assert_eq!(dial.selected_index(), 1);
        assert_eq!(navigated(&dial), vec!["route-1"]);
    }

    #[test]
    fn test_closure_navigator() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut dial = DialController::new(
            DialConfig::new(3, 80.0),
            routes(3),
            move |route: &RouteId| sink.borrow_mut().push(route.to_string()),
        )
        .unwrap();

        dial.tap(1);
        dial.settle();
        assert_eq!(*seen.borrow(), vec!["route-1".to_string()]);
        assert_eq!(dial.selected_route(), Some(&RouteId::from("route-1")));
    }
}
