use crate::angle;
use crate::motion::Easing;
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, DurationMilliSeconds, serde_as};
use std::time::Duration;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// How a drag displacement becomes a rotation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DragModel {
    /// Horizontal displacement is treated as arc length along the ring,
    /// whatever the pointer's position on the circle. Only exact near the
    /// 12 o'clock contact point; drags near 6 o'clock rotate the "wrong" way.
    #[default]
    #[strum(to_string = "horizontal", serialize = "h")]
    Horizontal,
    /// The pointer's polar angle around the dial center drives the rotation.
    #[strum(to_string = "tangent", serialize = "t")]
    Tangent,
}

/// Construction parameters of a dial. Validated once by
/// [`DialController::new`](crate::DialController::new) and never changed
/// afterwards.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    pub button_count: usize,
    /// Radius of the dial ring, also the lever arm of horizontal drags.
    pub circle_radius: f64,
    /// Orbit radius of the icon centers.
    pub icon_radius: f64,
    /// Fraction of angular velocity retained per millisecond of decay.
    pub deceleration_rate: f64,
    /// Multiplier applied to the release velocity before decay.
    pub velocity_amplification: f64,
    /// Decay stops below this angular speed (degrees per second).
    pub settle_velocity_threshold: f64,
    /// Upper bound on frames spent in any single animation.
    pub max_settle_ticks: u32,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "snap_duration_ms")]
    pub snap_duration: Duration,
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "tap_duration_ms")]
    pub tap_duration: Duration,
    /// Tick length used when settling without a host frame clock.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    #[serde(rename = "frame_interval_ms")]
    pub frame_interval: Duration,
    pub tap_easing: Easing,
    pub snap_easing: Easing,
    pub drag_model: DragModel,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            button_count: 4,
            circle_radius: 120.0,
            icon_radius: 90.0,
            deceleration_rate: 0.997,
            velocity_amplification: 1.5,
            settle_velocity_threshold: 5.0,
            max_settle_ticks: 600,
            snap_duration: Duration::from_millis(180),
            tap_duration: Duration::from_millis(300),
            frame_interval: Duration::from_millis(16),
            tap_easing: Easing::FastOutSlowIn,
            snap_easing: Easing::EaseOut,
            drag_model: DragModel::Horizontal,
        }
    }
}

impl DialConfig {
    /// Default tuning for `button_count` buttons on a ring of `circle_radius`,
    /// with icons orbiting at three quarters of the ring.
    pub fn new(button_count: usize, circle_radius: f64) -> Self {
        Self {
            button_count,
            circle_radius,
            icon_radius: circle_radius * 0.75,
            ..Self::default()
        }
    }

    pub fn step_degrees(&self) -> f64 {
        angle::step_degrees(self.button_count)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.button_count < 2 {
            return Err(ConfigurationError::TooFewButtons(self.button_count));
        }
        positive("circle_radius", self.circle_radius)?;
        positive("icon_radius", self.icon_radius)?;
        if self.icon_radius > self.circle_radius {
            return Err(ConfigurationError::IconRadiusTooLarge {
                icon_radius: self.icon_radius,
                circle_radius: self.circle_radius,
            });
        }
        if !(self.deceleration_rate > 0.0 && self.deceleration_rate < 1.0) {
            return Err(ConfigurationError::DecelerationOutOfRange(
                self.deceleration_rate,
            ));
        }
        positive("velocity_amplification", self.velocity_amplification)?;
        positive("settle_velocity_threshold", self.settle_velocity_threshold)?;
        if self.max_settle_ticks == 0 {
            return Err(ConfigurationError::NoSettleTicks);
        }
        for (field, duration) in [
            ("snap_duration", self.snap_duration),
            ("tap_duration", self.tap_duration),
            ("frame_interval", self.frame_interval),
        ] {
            if duration.is_zero() {
                return Err(ConfigurationError::ZeroDuration(field));
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::NotPositive { field, value })
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("A dial needs at least 2 buttons, got {0}")]
    TooFewButtons(usize),
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("icon_radius {icon_radius} exceeds circle_radius {circle_radius}")]
    IconRadiusTooLarge {
        icon_radius: f64,
        circle_radius: f64,
    },
    #[error("deceleration_rate must lie strictly between 0 and 1, got {0}")]
    DecelerationOutOfRange(f64),
    #[error("max_settle_ticks must be at least 1")]
    NoSettleTicks,
    #[error("{0} must be longer than zero")]
    ZeroDuration(&'static str),
    #[error("Route table has {actual} routes for {expected} buttons")]
    RouteCountMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(DialConfig::default().validate(), Ok(()));
        assert_eq!(DialConfig::new(8, 200.0).validate(), Ok(()));
    }

    #[test]
    fn test_rejects_malformed_config() {
        let cases = vec![
            (
                DialConfig::new(1, 100.0),
                ConfigurationError::TooFewButtons(1),
            ),
            (
                DialConfig::new(4, 0.0),
                ConfigurationError::NotPositive {
                    field: "circle_radius",
                    value: 0.0,
                },
            ),
            (
                DialConfig {
                    icon_radius: 150.0,
                    ..DialConfig::new(4, 100.0)
                },
                ConfigurationError::IconRadiusTooLarge {
                    icon_radius: 150.0,
                    circle_radius: 100.0,
                },
            ),
            (
                DialConfig {
                    deceleration_rate: 1.0,
                    ..DialConfig::default()
                },
                ConfigurationError::DecelerationOutOfRange(1.0),
            ),
            (
                DialConfig {
                    max_settle_ticks: 0,
                    ..DialConfig::default()
                },
                ConfigurationError::NoSettleTicks,
            ),
            (
                DialConfig {
                    tap_duration: Duration::ZERO,
                    ..DialConfig::default()
                },
                ConfigurationError::ZeroDuration("tap_duration"),
            ),
        ];

        for (config, expected) in cases {
            assert_eq!(config.validate(), Err(expected));
        }
    }

    #[test]
    fn test_nan_radius_is_rejected() {
        let config = DialConfig {
            circle_radius: f64::NAN,
            ..DialConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::NotPositive {
                field: "circle_radius",
                ..
            })
        ));
    }

    #[test]
    fn test_config_deserialization_fills_defaults() {
        let json = r#"{
            "button_count": 6,
            "deceleration_rate": 0.995,
            "tap_duration_ms": 250,
            "tap_easing": "Ease-In-Out",
            "drag_model": "T"
        }"#;
        let config: DialConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.button_count, 6);
        assert_eq!(config.deceleration_rate, 0.995);
        assert_eq!(config.tap_duration, Duration::from_millis(250));
        assert_eq!(config.tap_easing, Easing::EaseInOut);
        assert_eq!(config.drag_model, DragModel::Tangent);
        assert_eq!(config.circle_radius, DialConfig::default().circle_radius);
    }

    #[test]
    fn test_drag_model_deserialization() {
        let cases = vec![
            ("\"horizontal\"", DragModel::Horizontal),
            ("\"Horizontal\"", DragModel::Horizontal),
            ("\"h\"", DragModel::Horizontal),
            ("\"TANGENT\"", DragModel::Tangent),
            ("\"t\"", DragModel::Tangent),
        ];

        for (json, expected) in cases {
            let deserialized: DragModel = serde_json::from_str(json).unwrap();
            assert_eq!(deserialized, expected);
        }
    }
}
