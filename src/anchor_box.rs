use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::direction::Axis;

/// A box placed relative to its parent box.
///
/// `anchor_min` and `anchor_max` are fractions of the parent rectangle, with
/// y pointing up (0 is the bottom edge). `size_delta` and `anchored_position`
/// are pixel offsets on top of the anchored rectangle, measured from `pivot`.
///
/// The box is synced into the entity's [`Node`] as an absolutely positioned
/// node: percentage insets for the anchors, margins for the pixel offsets.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[require(Node)]
pub struct AnchorBox {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub pivot: Vec2,
    pub anchored_position: Vec2,
    pub size_delta: Vec2,
}

impl Default for AnchorBox {
    fn default() -> Self {
        Self {
            anchor_min: Vec2::splat(0.5),
            anchor_max: Vec2::splat(0.5),
            pivot: Vec2::splat(0.5),
            anchored_position: Vec2::ZERO,
            size_delta: Vec2::splat(100.0),
        }
    }
}

impl AnchorBox {
    /// A box filling its parent.
    pub fn stretched() -> Self {
        Self {
            anchor_min: Vec2::ZERO,
            anchor_max: Vec2::ONE,
            size_delta: Vec2::ZERO,
            ..default()
        }
    }

    /// A box of a fixed pixel size, centered in its parent.
    pub fn sized(size: Vec2) -> Self {
        Self {
            size_delta: size,
            ..default()
        }
    }

    /// Pixel offset of the lower-left corner from the lower-left anchor.
    pub fn offset_min(&self) -> Vec2 {
        self.anchored_position - self.size_delta * self.pivot
    }

    /// Pixel offset of the upper-right corner from the upper-right anchor.
    pub fn offset_max(&self) -> Vec2 {
        self.anchored_position + self.size_delta * (Vec2::ONE - self.pivot)
    }

    /// Swaps the horizontal and vertical layout.
    ///
    /// With `keep_positioning` only the pivot and size are swapped, so the
    /// box stays where it is.
    pub fn flip_axes(&mut self, keep_positioning: bool) {
        self.pivot = swapped(self.pivot);
        self.size_delta = swapped(self.size_delta);
        if keep_positioning {
            return;
        }
        self.anchored_position = swapped(self.anchored_position);
        self.anchor_min = swapped(self.anchor_min);
        self.anchor_max = swapped(self.anchor_max);
    }

    /// Mirrors the layout along `axis`.
    pub fn flip_on_axis(&mut self, axis: Axis, keep_positioning: bool) {
        let i = axis.index();
        self.pivot[i] = 1.0 - self.pivot[i];
        if keep_positioning {
            return;
        }
        self.anchored_position[i] = -self.anchored_position[i];
        let min = self.anchor_min[i];
        self.anchor_min[i] = 1.0 - self.anchor_max[i];
        self.anchor_max[i] = 1.0 - min;
    }

    /// Writes the box into a bevy_ui node.
    pub fn apply_to_node(&self, node: &mut Node) {
        let offset_min = self.offset_min();
        let offset_max = self.offset_max();

        node.position_type = PositionType::Absolute;
        node.left = Val::Percent(self.anchor_min.x * 100.0);
        node.right = Val::Percent((1.0 - self.anchor_max.x) * 100.0);
        node.bottom = Val::Percent(self.anchor_min.y * 100.0);
        node.top = Val::Percent((1.0 - self.anchor_max.y) * 100.0);
        node.margin = UiRect {
            left: Val::Px(offset_min.x),
            right: Val::Px(-offset_max.x),
            bottom: Val::Px(offset_min.y),
            top: Val::Px(-offset_max.y),
        };
    }
}

fn swapped(v: Vec2) -> Vec2 {
    Vec2::new(v.y, v.x)
}

/// Marks the anchors of a box as written by code.
///
/// While present, the anchors belong to `driver` and hand edits to them will
/// be overwritten on the next projection.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrivenAnchors {
    pub driver: Entity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillImageKind {
    /// The image stretches over its box; the bar drives the box's anchors.
    #[default]
    Simple,
    /// The image renders a `fill_amount` fraction of itself.
    Filled,
}

/// An image that can render the filled part of a bar.
///
/// `color` is synced into the entity's [`BackgroundColor`].
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[require(BackgroundColor)]
pub struct FillImage {
    pub kind: FillImageKind,
    pub fill_amount: f32,
    pub color: Color,
}

impl Default for FillImage {
    fn default() -> Self {
        Self {
            kind: FillImageKind::Simple,
            fill_amount: 1.0,
            color: Color::WHITE,
        }
    }
}

impl FillImage {
    pub fn simple(color: Color) -> Self {
        Self { color, ..default() }
    }

    pub fn filled(color: Color) -> Self {
        Self {
            kind: FillImageKind::Filled,
            color,
            ..default()
        }
    }
}
