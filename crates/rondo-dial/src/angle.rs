/// Angular width of one button, in degrees.
pub fn step_degrees(button_count: usize) -> f64 {
    360.0 / button_count as f64
}

/// Quantizes a continuous dial angle to a button index in `[0, button_count)`.
///
/// Halfway angles round away from zero. Any real angle is accepted; multiple
/// turns and negative angles wrap around.
pub fn index_for_angle(degrees: f64, button_count: usize) -> usize {
    let steps = (degrees / step_degrees(button_count)).round() as i64;
    steps.rem_euclid(button_count as i64) as usize
}

/// Shortest signed rotation from `from` to `to`, in `(-180, 180]`.
/// Non-finite input yields 0 so a bad sample cannot poison the angle.
pub fn signed_delta_degrees(to: f64, from: f64) -> f64 {
    let delta = to - from;
    if !delta.is_finite() {
        return 0.0;
    }
    let wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Rotation of the dial. The continuous angle is the only stored rotation;
/// the focused index is always derived from it. `committed` only remembers
/// which index was last announced to the router.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleState {
    degrees: f64,
    committed: usize,
    button_count: usize,
}

impl AngleState {
    pub fn new(button_count: usize) -> Self {
        Self {
            degrees: 0.0,
            committed: 0,
            button_count,
        }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn set_angle(&mut self, degrees: f64) {
        self.degrees = degrees;
    }

    pub fn button_count(&self) -> usize {
        self.button_count
    }

    pub fn step_degrees(&self) -> f64 {
        step_degrees(self.button_count)
    }

    /// Index the dial would settle on if it stopped right now.
    pub fn nearest_index(&self) -> usize {
        index_for_angle(self.degrees, self.button_count)
    }

    pub fn committed_index(&self) -> usize {
        self.committed
    }

    /// The angle resting exactly on the nearest button, without unwrapping.
    pub fn snapped_angle(&self) -> f64 {
        let step = self.step_degrees();
        (self.degrees / step).round() * step
    }

    /// Closest continuous angle that rests on `index`, reached the short way
    /// round.
    pub fn target_angle_for(&self, index: usize) -> f64 {
        let goal = index as f64 * self.step_degrees();
        self.degrees + signed_delta_degrees(goal, self.degrees)
    }

    /// Records `index` as committed. Returns it when it differs from the
    /// previous commit, `None` for a repeat.
    pub(crate) fn commit_index(&mut self, index: usize) -> Option<usize> {
        debug_assert!(index < self.button_count);
        if self.committed == index {
            return None;
        }
        self.committed = index;
        Some(index)
    }
}
