use crate::angle::AngleState;
use crate::config::DialConfig;
use crate::geometry::Point;

/// Screen angle of the focus position (12 o'clock).
pub const FOCUS_DEGREES: f64 = -90.0;
/// Fraction of the gap between neighbouring icons a slot disc may fill.
const SLOT_FILL: f64 = 0.8;
/// Slot discs never exceed this fraction of the ring radius.
const MAX_SLOT_FRACTION: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSlot {
    pub index: usize,
    /// Icon center in host pixels.
    pub position: Point,
    /// Screen angle of the icon around the dial center, in degrees.
    pub degrees: f64,
    /// Radius of the slot disc; also the tap target.
    pub radius: f64,
    pub is_focused: bool,
}

/// Screen angle of button `index` when the dial is rotated by `dial_degrees`.
/// Rotating the dial by one step brings the previous button to the top.
pub fn slot_degrees(index: usize, dial_degrees: f64, step: f64) -> f64 {
    FOCUS_DEGREES + dial_degrees - index as f64 * step
}

/// Disc radius that keeps neighbouring slots apart.
pub fn slot_radius(config: &DialConfig) -> f64 {
    let half_step = config.step_degrees().to_radians() / 2.0;
    let spacing = config.icon_radius * half_step.sin();
    (spacing * SLOT_FILL).min(config.circle_radius * MAX_SLOT_FRACTION)
}

/// Projects every button onto the screen around `center`. Exactly one slot,
/// the one nearest the focus position, is focused.
pub fn layout_slots(angle: &AngleState, config: &DialConfig, center: Point) -> Vec<ButtonSlot> {
    let step = angle.step_degrees();
    let focused = angle.nearest_index();
    let radius = slot_radius(config);

    (0..angle.button_count())
        .map(|index| {
            let degrees = slot_degrees(index, angle.degrees(), step);
            ButtonSlot {
                index,
                position: Point::polar(center, config.icon_radius, degrees),
                degrees,
                radius,
                is_focused: index == focused,
            }
        })
        .collect()
}

/// Slot under `point`, preferring the closest one when discs overlap.
pub fn hit_test(slots: &[ButtonSlot], point: Point) -> Option<usize> {
    slots
        .iter()
        .map(|slot| (slot, slot.position.distance_to(point)))
        .filter(|(slot, distance)| *distance <= slot.radius)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(slot, _)| slot.index)
}
