use bevy::prelude::*;

use crate::settings::StatBarSettings;

/// Crate-wide defaults.
#[derive(Resource, Debug, Clone)]
pub struct StatBarConfig {
    /// Fill color restored when a bar leaves [`Transition::ColorTint`](crate::transition::Transition::ColorTint).
    pub untinted_color: Color,
    /// Settings used by [`spawn_default_stat_bar`](crate::spawn::spawn_default_stat_bar).
    pub default_settings: StatBarSettings,
    /// Root box size of spawned bars, in pixels.
    pub bar_size: Vec2,
    pub background_color: Color,
    pub fill_color: Color,
}

impl Default for StatBarConfig {
    fn default() -> Self {
        Self {
            untinted_color: Color::WHITE,
            default_settings: StatBarSettings::default(),
            bar_size: Vec2::new(160.0, 20.0),
            background_color: Color::srgb(0.2, 0.2, 0.2),
            fill_color: Color::srgb(1.0, 0.0, 0.0),
        }
    }
}

impl StatBarConfig {
    pub fn with_untinted_color(mut self, color: Color) -> Self {
        self.untinted_color = color;
        self
    }

    pub fn with_default_settings(mut self, settings: StatBarSettings) -> Self {
        self.default_settings = settings;
        self
    }
}
