use bevy::color::Color;
use serde::{Deserialize, Serialize};

/// How the fill color reacts to the bar's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transition {
    /// The fill color is left alone.
    #[default]
    None,
    /// The fill is tinted by the [`ColorTints`] threshold rules.
    ColorTint,
}

/// A threshold rule: at or below `percent` of the range, tint with `color`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorTint {
    pub percent: f32,
    pub color: Color,
}

impl ColorTint {
    pub fn new(percent: f32, color: Color) -> Self {
        Self {
            percent: percent.clamp(0.0, 100.0),
            color,
        }
    }

    /// The threshold as a normalized value in [0, 1].
    pub fn threshold(&self) -> f32 {
        self.percent.clamp(0.0, 100.0) / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TintTier {
    Normal,
    Low,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorTints {
    pub normal: ColorTint,
    pub low: ColorTint,
    pub critical: ColorTint,
}

impl Default for ColorTints {
    fn default() -> Self {
        Self {
            normal: ColorTint::new(100.0, Color::srgb(0.2, 0.8, 0.2)),
            low: ColorTint::new(30.0, Color::srgb(0.95, 0.75, 0.1)),
            critical: ColorTint::new(10.0, Color::srgb(0.85, 0.1, 0.1)),
        }
    }
}

impl ColorTints {
    pub fn get(&self, tier: TintTier) -> &ColorTint {
        match tier {
            TintTier::Normal => &self.normal,
            TintTier::Low => &self.low,
            TintTier::Critical => &self.critical,
        }
    }

    pub fn get_mut(&mut self, tier: TintTier) -> &mut ColorTint {
        match tier {
            TintTier::Normal => &mut self.normal,
            TintTier::Low => &mut self.low,
            TintTier::Critical => &mut self.critical,
        }
    }

    /// The tier whose threshold `normalized` falls under, checked from the
    /// most restrictive rule to the least.
    ///
    /// Returns `None` above the normal threshold; the fill keeps whatever
    /// color it already has.
    pub fn tier_for(&self, normalized: f32) -> Option<TintTier> {
        [TintTier::Critical, TintTier::Low, TintTier::Normal]
            .into_iter()
            .find(|tier| normalized <= self.get(*tier).threshold())
    }

    pub fn evaluate(&self, normalized: f32) -> Option<Color> {
        self.tier_for(normalized).map(|tier| self.get(tier).color)
    }
}
