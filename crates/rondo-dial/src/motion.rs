//! Frame-stepped motion models that move the dial between rest positions:
//! velocity decay after a fling, and fixed-duration easing toward a known
//! target (final snap, taps).

use crate::config::DialConfig;
use serde::Serialize;
use serde_with::DeserializeFromStr;
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Named easing curves.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material "standard" curve.
    FastOutSlowIn,
}

impl Easing {
    /// Maps a linear progress fraction in `[0, 1]` onto the curve.
    pub fn transform(&self, fraction: f64) -> f64 {
        match self {
            Self::Linear => fraction.clamp(0.0, 1.0),
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, fraction),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, fraction),
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// CSS-style cubic bezier through (0,0), (x1,y1), (x2,y2), (1,1).
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, fraction: f64) -> f64 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;
    let slope = |t: f64| (3.0 * ax * t + 2.0 * bx) * t + cx;

    // Newton-Raphson for the curve parameter, bisection if it stalls.
    let mut t = fraction;
    let mut solved = false;
    for _ in 0..8 {
        let error = sample(ax, bx, cx, t) - fraction;
        if error.abs() < 1e-7 {
            solved = true;
            break;
        }
        let d = slope(t);
        if d.abs() < 1e-7 {
            break;
        }
        t = (t - error / d).clamp(0.0, 1.0);
    }

    if !solved {
        let (mut lo, mut hi) = (0.0, 1.0);
        t = fraction;
        for _ in 0..24 {
            let error = sample(ax, bx, cx, t) - fraction;
            if error.abs() < 1e-7 {
                break;
            }
            if error > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Free spin losing speed exponentially. Velocity in degrees per second.
    Decay { velocity: f64 },
    /// Fixed-duration tween between two angles.
    Ease {
        from: f64,
        to: f64,
        elapsed: Duration,
        duration: Duration,
        easing: Easing,
    },
}

impl Motion {
    pub fn decay(velocity: f64) -> Self {
        Self::Decay { velocity }
    }

    pub fn ease(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self::Ease {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
            easing,
        }
    }

    /// Resting angle known in advance, if any.
    pub fn target(&self) -> Option<f64> {
        match self {
            Self::Decay { .. } => None,
            Self::Ease { to, .. } => Some(*to),
        }
    }

    /// Advances the motion by `dt` from `angle`. Returns the new angle and
    /// whether the motion has come to rest.
    ///
    /// Decay retains `deceleration_rate` of its speed per elapsed
    /// millisecond, then moves by the reduced speed, so a 1 ms tick is
    /// exactly `v *= rate; angle += v * dt`.
    pub fn step(&mut self, angle: f64, dt: Duration, config: &DialConfig) -> (f64, bool) {
        match self {
            Self::Decay { velocity } => {
                let millis = dt.as_secs_f64() * 1000.0;
                *velocity *= config.deceleration_rate.powf(millis);
                let next = angle + *velocity * dt.as_secs_f64();
                (next, velocity.abs() < config.settle_velocity_threshold)
            }
            Self::Ease {
                from,
                to,
                elapsed,
                duration,
                easing,
            } => {
                *elapsed += dt;
                if *elapsed >= *duration {
                    return (*to, true);
                }
                let progress = elapsed.as_secs_f64() / duration.as_secs_f64();
                (*from + (*to - *from) * easing.transform(progress), false)
            }
        }
    }
}
