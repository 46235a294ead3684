use bevy::prelude::*;

/// Triggered on a bar entity when its value changed.
///
/// Fired once per mutation that changed the value, carrying the clamped
/// value. Listen with an observer, globally or on the bar entity:
///
/// ```ignore
/// commands.entity(bar).observe(|trigger: Trigger<StatBarValueChanged>| {
///     info!("hp is now {}", trigger.event().value);
/// });
/// ```
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct StatBarValueChanged {
    pub value: f32,
}
