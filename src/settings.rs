use serde::{Deserialize, Serialize};

use crate::direction::FillDirection;
use crate::stat_bar::{MAX_MIN_DIGITS, StatBar};
use crate::stat_bar_error::{StatBarError, StatBarResult};
use crate::transition::{ColorTint, ColorTints, Transition};

/// A serializable description of a bar, without entity references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatBarSettings {
    pub min_value: f32,
    pub max_value: f32,
    pub whole_numbers: bool,
    /// Starting value; `None` starts full.
    pub value: Option<f32>,
    pub direction: FillDirection,
    pub min_digits: usize,
    pub transition: Transition,
    pub tints: ColorTints,
}

impl Default for StatBarSettings {
    fn default() -> Self {
        Self {
            min_value: 0.0,
            max_value: 1.0,
            whole_numbers: false,
            value: None,
            direction: FillDirection::LeftToRight,
            min_digits: 2,
            transition: Transition::None,
            tints: ColorTints::default(),
        }
    }
}

fn finite(field: &'static str, value: f32) -> StatBarResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(StatBarError::InvalidSettings {
            field,
            details: format!("expected a finite number, got {value}"),
        })
    }
}

fn percent(field: &'static str, tint: &ColorTint) -> StatBarResult<()> {
    finite(field, tint.percent)?;
    if (0.0..=100.0).contains(&tint.percent) {
        Ok(())
    } else {
        Err(StatBarError::InvalidSettings {
            field,
            details: format!("threshold {} is outside 0..=100", tint.percent),
        })
    }
}

impl StatBarSettings {
    /// Rejects values a bar would silently degrade.
    pub fn validate(&self) -> StatBarResult<()> {
        finite("min_value", self.min_value)?;
        finite("max_value", self.max_value)?;
        if let Some(value) = self.value {
            finite("value", value)?;
        }
        if self.min_digits > MAX_MIN_DIGITS {
            return Err(StatBarError::InvalidSettings {
                field: "min_digits",
                details: format!("{} exceeds the maximum of {MAX_MIN_DIGITS}", self.min_digits),
            });
        }
        percent("tints.normal", &self.tints.normal)?;
        percent("tints.low", &self.tints.low)?;
        percent("tints.critical", &self.tints.critical)?;
        Ok(())
    }

    /// A bar with these settings and no references yet.
    pub fn to_stat_bar(&self) -> StatBar {
        StatBar::new()
            .with_range(self.min_value, self.max_value)
            .with_whole_numbers(self.whole_numbers)
            .with_value(self.value.unwrap_or(self.max_value))
            .with_direction(self.direction)
            .with_min_digits(self.min_digits)
            .with_transition(self.transition)
            .with_tints(self.tints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(StatBarSettings::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let settings = StatBarSettings {
            max_value: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(StatBarError::InvalidSettings { field: "max_value", .. })
        ));

        let mut settings = StatBarSettings::default();
        settings.tints.low.percent = 130.0;
        assert!(matches!(
            settings.validate(),
            Err(StatBarError::InvalidSettings { field: "tints.low", .. })
        ));

        let settings = StatBarSettings {
            min_digits: 9,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn starts_full_without_value() {
        let settings = StatBarSettings {
            max_value: 40.0,
            ..Default::default()
        };
        let mut bar = settings.to_stat_bar();
        bar.set_active(true);
        assert_eq!(bar.value(), 40.0);
    }

    #[test]
    fn reads_partial_json() {
        let settings: StatBarSettings = serde_json::from_str(
            r#"{ "max_value": 100.0, "whole_numbers": true, "direction": "BottomToTop" }"#,
        )
        .unwrap();

        assert_eq!(settings.max_value, 100.0);
        assert!(settings.whole_numbers);
        assert_eq!(settings.direction, FillDirection::BottomToTop);
        assert_eq!(settings.min_digits, 2);
        assert_eq!(settings.transition, Transition::None);
    }
}
