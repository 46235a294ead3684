use bevy::prelude::*;

use crate::anchor_box::{AnchorBox, FillImage, FillImageKind};
use crate::direction::FillDirection;
use crate::label::format_value;
use crate::stat_bar::StatBar;
use crate::transition::Transition;

/// Where the fill box goes for a given normalized value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillProjection {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    /// Set when the fill image renders by amount instead of by anchors.
    pub fill_amount: Option<f32>,
}

impl FillProjection {
    pub fn new(direction: FillDirection, normalized: f32, fill_kind: Option<FillImageKind>) -> Self {
        let mut anchor_min = Vec2::ZERO;
        let mut anchor_max = Vec2::ONE;

        if fill_kind == Some(FillImageKind::Filled) {
            return Self {
                anchor_min,
                anchor_max,
                fill_amount: Some(normalized),
            };
        }

        let axis = direction.axis().index();
        if direction.is_reversed() {
            anchor_min[axis] = 1.0 - normalized;
        } else {
            anchor_max[axis] = normalized;
        }

        Self {
            anchor_min,
            anchor_max,
            fill_amount: None,
        }
    }

    /// The normalized value a fill currently shows.
    pub fn displayed(direction: FillDirection, fill_box: &AnchorBox, image: Option<&FillImage>) -> f32 {
        if let Some(image) = image.filter(|image| image.kind == FillImageKind::Filled) {
            return image.fill_amount;
        }
        let axis = direction.axis().index();
        if direction.is_reversed() {
            1.0 - fill_box.anchor_min[axis]
        } else {
            fill_box.anchor_max[axis]
        }
    }
}

/// The complete visual output of a bar.
///
/// A pure function of the bar's state: projecting twice without a change in
/// between gives identical results.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// `None` without a fill box laid out in a parent box.
    pub fill: Option<FillProjection>,
    pub label: Option<String>,
    /// `None` leaves the fill color as it is.
    pub tint: Option<Color>,
}

impl Projection {
    pub fn of(bar: &StatBar, fill_kind: Option<FillImageKind>) -> Self {
        let refs = bar.references();
        let normalized = bar.normalized_value();

        let fill = refs
            .fill_container
            .map(|_| FillProjection::new(bar.direction(), normalized, fill_kind));

        let label = match (bar.value_label(), refs.label_text) {
            (Some(_), Some(_)) => Some(format_value(
                bar.value(),
                bar.whole_numbers(),
                refs.digits_format.len(),
            )),
            _ => None,
        };

        let tint = match (bar.transition(), refs.fill_image) {
            (Transition::ColorTint, Some(_)) => bar.tints().evaluate(normalized),
            _ => None,
        };

        Self { fill, label, tint }
    }
}
