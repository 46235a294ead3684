use bevy::prelude::*;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::anchor_box::{AnchorBox, FillImageKind};
use crate::direction::{FillDirection, LayoutFlip};
use crate::host::HostLookup;
use crate::projection::Projection;
use crate::references::CachedReferences;
use crate::transition::{ColorTint, ColorTints, TintTier, Transition};

/// Upper bound for [`StatBar::min_digits`].
pub const MAX_MIN_DIGITS: usize = 8;

/// A display-driven bar showing a value between a minimum and a maximum.
///
/// The bar drives the anchors of an optional fill box (or the fill amount of
/// a [`FillImage`](crate::anchor_box::FillImage) in
/// [`FillImageKind::Filled`] mode), the text of an optional value label and,
/// with [`Transition::ColorTint`], the color of the fill.
///
/// Setters record what changed. The systems in
/// [`StatBarUpdate`](crate::schedule::StatBarUpdate) resolve references,
/// write the projection into the referenced entities and trigger
/// [`StatBarValueChanged`](crate::events::StatBarValueChanged) once for every
/// mutation that changed the value.
#[derive(Component, Debug, Clone)]
#[require(AnchorBox)]
pub struct StatBar {
    value: f32,
    min_value: f32,
    max_value: f32,
    whole_numbers: bool,
    direction: FillDirection,
    fill: Option<Entity>,
    value_label: Option<Entity>,
    min_digits: usize,
    transition: Transition,
    tints: ColorTints,

    active: bool,
    refs: CachedReferences,
    claimed: Option<Entity>,
    pending: PendingEffects,
}

/// Work recorded by setters and lifecycle hooks, drained by the systems.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PendingEffects {
    pub refresh_references: bool,
    pub update_visuals: bool,
    /// Projection postponed to the next tick.
    pub delayed_update_visuals: bool,
    pub animated: bool,
    pub reset_tint: bool,
    pub release_claims: bool,
    pub notifications: Vec<f32>,
    pub layout_flips: Vec<LayoutFlip>,
}

/// The visual part of [`PendingEffects`], taken in one go by the projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct VisualWork {
    pub update_visuals: bool,
    pub animated: bool,
    pub reset_tint: bool,
    pub release_claims: bool,
}

impl Default for StatBar {
    fn default() -> Self {
        Self {
            value: 0.0,
            min_value: 0.0,
            max_value: 1.0,
            whole_numbers: false,
            direction: FillDirection::LeftToRight,
            fill: None,
            value_label: None,
            min_digits: 2,
            transition: Transition::None,
            tints: ColorTints::default(),
            active: false,
            refs: CachedReferences::default(),
            claimed: None,
            pending: PendingEffects::default(),
        }
    }
}

/// A serializable mutation of a [`StatBar`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StatBarCommand {
    SetValue(f32),
    SetValueWithoutNotify(f32),
    SetNormalizedValue(f32),
    /// Adds to the current value; negative amounts drain the bar.
    AddValue(f32),
    SetMinValue(f32),
    SetMaxValue(f32),
    SetWholeNumbers(bool),
    SetDirection {
        direction: FillDirection,
        include_layout_flip: bool,
    },
    SetFill(Option<Entity>),
    SetValueLabel(Option<Entity>),
    SetMinDigits(usize),
    SetTransition(Transition),
    SetTint {
        tier: TintTier,
        tint: ColorTint,
    },
}

fn approximately(a: f32, b: f32) -> bool {
    (b - a).abs() < (1e-6 * a.abs().max(b.abs())).max(f32::MIN_POSITIVE * 8.0)
}

impl StatBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, min_value: f32, max_value: f32) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Initial value; clamped when the bar activates.
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }

    pub fn with_whole_numbers(mut self, whole_numbers: bool) -> Self {
        self.whole_numbers = whole_numbers;
        self
    }

    pub fn with_direction(mut self, direction: FillDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_fill(mut self, fill: Entity) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_value_label(mut self, value_label: Entity) -> Self {
        self.value_label = Some(value_label);
        self
    }

    pub fn with_min_digits(mut self, min_digits: usize) -> Self {
        self.min_digits = min_digits.min(MAX_MIN_DIGITS);
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_tints(mut self, tints: ColorTints) -> Self {
        self.tints = tints;
        self
    }

    // ---------------------------------------------------------------------
    // Value
    // ---------------------------------------------------------------------

    /// The current value, rounded when the bar uses whole numbers.
    pub fn value(&self) -> f32 {
        if self.whole_numbers {
            self.round_into_range(self.value)
        } else {
            self.value
        }
    }

    pub fn min_value(&self) -> f32 {
        self.min_value
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    pub fn whole_numbers(&self) -> bool {
        self.whole_numbers
    }

    /// The value mapped from `[min_value, max_value]` onto `[0, 1]`.
    ///
    /// A zero-width range maps every value to 0.
    pub fn normalized_value(&self) -> f32 {
        if approximately(self.min_value, self.max_value) {
            return 0.0;
        }
        ((self.value() - self.min_value) / (self.max_value - self.min_value)).clamp(0.0, 1.0)
    }

    fn clamp_value(&self, input: f32) -> f32 {
        // An inverted range pins everything to `min_value`.
        let clamped = input.min(self.max_value).max(self.min_value);
        if self.whole_numbers {
            self.round_into_range(clamped)
        } else {
            clamped
        }
    }

    /// Rounds half to even, then pulls the result back onto the nearest
    /// integer inside the range. Ranges holding no integer pin to `min_value`.
    fn round_into_range(&self, value: f32) -> f32 {
        let rounded = value.round_ties_even();
        let pulled = if rounded > self.max_value {
            self.max_value.floor()
        } else if rounded < self.min_value {
            self.min_value.ceil()
        } else {
            rounded
        };
        if pulled < self.min_value || pulled > self.max_value {
            self.min_value
        } else {
            pulled
        }
    }

    /// Sets the value and notifies listeners if it changed.
    pub fn set_value(&mut self, input: f32) -> bool {
        self.set_value_with(input, true)
    }

    /// Sets the value without notifying listeners.
    pub fn set_value_without_notify(&mut self, input: f32) -> bool {
        self.set_value_with(input, false)
    }

    /// Clamps `input` into the range and stores it.
    ///
    /// Returns false, and does nothing else, when the clamped value equals
    /// the stored one. Otherwise a projection is requested and, with
    /// `notify`, exactly one notification carrying the clamped value is
    /// queued.
    pub fn set_value_with(&mut self, input: f32, notify: bool) -> bool {
        let new_value = self.clamp_value(input);
        if self.value == new_value {
            return false;
        }

        self.value = new_value;
        if !self.pending.delayed_update_visuals {
            self.pending.update_visuals = true;
        }
        if notify {
            self.pending.notifications.push(new_value);
        }
        true
    }

    pub fn set_normalized_value(&mut self, normalized: f32) -> bool {
        let t = normalized.clamp(0.0, 1.0);
        self.set_value(self.min_value + (self.max_value - self.min_value) * t)
    }

    pub fn set_min_value(&mut self, min_value: f32) -> bool {
        if self.min_value == min_value {
            return false;
        }
        self.min_value = min_value;
        self.revalidate_range();
        true
    }

    pub fn set_max_value(&mut self, max_value: f32) -> bool {
        if self.max_value == max_value {
            return false;
        }
        self.max_value = max_value;
        self.revalidate_range();
        true
    }

    pub fn set_whole_numbers(&mut self, whole_numbers: bool) -> bool {
        if self.whole_numbers == whole_numbers {
            return false;
        }
        self.whole_numbers = whole_numbers;
        self.revalidate_range();
        true
    }

    // The normalization changes with the range even when the value doesn't.
    fn revalidate_range(&mut self) {
        self.set_value(self.value);
        self.pending.update_visuals = true;
    }

    // ---------------------------------------------------------------------
    // Direction
    // ---------------------------------------------------------------------

    pub fn direction(&self) -> FillDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: FillDirection) -> bool {
        if self.direction == direction {
            return false;
        }
        self.direction = direction;
        self.pending.update_visuals = true;
        true
    }

    /// Sets the direction, optionally flipping the bar's layout to match.
    ///
    /// Never touches the value.
    pub fn set_direction_with_layout(&mut self, direction: FillDirection, include_layout_flip: bool) {
        let old = self.direction;
        self.set_direction(direction);

        if include_layout_flip {
            self.pending
                .layout_flips
                .extend(LayoutFlip::between(old, direction));
        }
    }

    // ---------------------------------------------------------------------
    // References
    // ---------------------------------------------------------------------

    pub fn fill(&self) -> Option<Entity> {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Option<Entity>) -> bool {
        if self.fill == fill {
            return false;
        }
        self.fill = fill;
        self.request_refresh();
        true
    }

    pub fn value_label(&self) -> Option<Entity> {
        self.value_label
    }

    pub fn set_value_label(&mut self, value_label: Option<Entity>) -> bool {
        if self.value_label == value_label {
            return false;
        }
        self.value_label = value_label;
        self.request_refresh();
        true
    }

    pub fn min_digits(&self) -> usize {
        self.min_digits
    }

    pub fn set_min_digits(&mut self, min_digits: usize) -> bool {
        let min_digits = min_digits.min(MAX_MIN_DIGITS);
        if self.min_digits == min_digits {
            return false;
        }
        self.min_digits = min_digits;
        self.request_refresh();
        true
    }

    /// The zero-padding pattern the label uses for whole numbers.
    pub fn digits_format(&self) -> &str {
        &self.refs.digits_format
    }

    pub fn references(&self) -> &CachedReferences {
        &self.refs
    }

    fn request_refresh(&mut self) {
        self.pending.refresh_references = true;
        self.pending.update_visuals = true;
    }

    /// Resolves the fill and label handles against the host.
    ///
    /// Invalid handles are cleared. No visuals are written.
    pub fn refresh_references(&mut self, owner: Entity, host: &impl HostLookup) {
        let resolved = self
            .refs
            .resolve(owner, self.fill, self.value_label, self.min_digits, host);
        self.fill = resolved.fill;
        self.value_label = resolved.value_label;
        self.pending.refresh_references = false;
    }

    // ---------------------------------------------------------------------
    // Transition
    // ---------------------------------------------------------------------

    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Switches the transition mode.
    ///
    /// Switching to [`Transition::None`] resets the fill to the untinted
    /// color. Switching to [`Transition::ColorTint`] runs a full projection,
    /// so the tint always matches the current value.
    pub fn set_transition_mode(&mut self, transition: Transition) -> bool {
        if self.transition == transition {
            return false;
        }
        self.transition = transition;
        if transition == Transition::None {
            self.pending.reset_tint = true;
        }
        self.pending.update_visuals = true;
        true
    }

    pub fn tints(&self) -> &ColorTints {
        &self.tints
    }

    pub fn set_tint(&mut self, tier: TintTier, tint: ColorTint) {
        *self.tints.get_mut(tier) = ColorTint::new(tint.percent, tint.color);
        self.pending.update_visuals = true;
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activates or deactivates the bar.
    ///
    /// Activation re-resolves references, re-clamps the value silently and
    /// projects. Deactivation releases the drive claim on the fill box.
    pub fn set_active(&mut self, active: bool) {
        if active {
            self.active = true;
            self.pending.refresh_references = true;
            self.set_value_without_notify(self.value);
            self.pending.update_visuals = true;
        } else {
            self.active = false;
            self.pending.release_claims = true;
        }
    }

    /// Re-checks the bar after its fields were edited by tooling.
    ///
    /// Rounds the range for whole numbers and, when active, re-resolves
    /// references and postpones the projection to the next [`tick`](Self::tick).
    pub fn validate(&mut self) {
        if self.whole_numbers {
            self.min_value = self.min_value.round_ties_even();
            self.max_value = self.max_value.round_ties_even();
        }

        if self.active {
            self.pending.refresh_references = true;
            self.pending.delayed_update_visuals = true;
            self.set_value_without_notify(self.value);
        }
    }

    /// Runs a postponed projection. Returns true if one was pending.
    pub fn tick(&mut self) -> bool {
        if !self.pending.delayed_update_visuals {
            return false;
        }
        trace!("stat bar: running deferred projection");
        self.pending.delayed_update_visuals = false;
        self.pending.update_visuals = true;
        true
    }

    pub fn has_deferred_visuals(&self) -> bool {
        self.pending.delayed_update_visuals
    }

    /// The size of the bar's box changed.
    pub fn dimensions_changed(&mut self) {
        if self.active {
            self.pending.update_visuals = true;
        }
    }

    /// Writes a value produced by an animation.
    ///
    /// The value is clamped on the next projection; listeners are notified if
    /// the displayed fill moved.
    pub fn apply_animated_value(&mut self, value: f32) {
        self.value = value;
        self.pending.animated = true;
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Applies a [`StatBarCommand`]. Returns false if it changed nothing.
    pub fn apply(&mut self, command: StatBarCommand) -> bool {
        match command {
            StatBarCommand::SetValue(value) => self.set_value(value),
            StatBarCommand::SetValueWithoutNotify(value) => self.set_value_without_notify(value),
            StatBarCommand::SetNormalizedValue(value) => self.set_normalized_value(value),
            StatBarCommand::AddValue(amount) => self.set_value(self.value() + amount),
            StatBarCommand::SetMinValue(value) => self.set_min_value(value),
            StatBarCommand::SetMaxValue(value) => self.set_max_value(value),
            StatBarCommand::SetWholeNumbers(value) => self.set_whole_numbers(value),
            StatBarCommand::SetDirection {
                direction,
                include_layout_flip,
            } => {
                let changed = self.direction != direction;
                self.set_direction_with_layout(direction, include_layout_flip);
                changed
            }
            StatBarCommand::SetFill(fill) => self.set_fill(fill),
            StatBarCommand::SetValueLabel(label) => self.set_value_label(label),
            StatBarCommand::SetMinDigits(digits) => self.set_min_digits(digits),
            StatBarCommand::SetTransition(transition) => self.set_transition_mode(transition),
            StatBarCommand::SetTint { tier, tint } => {
                let changed = *self.tints.get(tier) != tint;
                self.set_tint(tier, tint);
                changed
            }
        }
    }

    // ---------------------------------------------------------------------
    // Projection
    // ---------------------------------------------------------------------

    /// The visuals for the current state. `fill_kind` is the kind of the
    /// resolved fill image, if any.
    pub fn projection(&self, fill_kind: Option<FillImageKind>) -> Projection {
        Projection::of(self, fill_kind)
    }

    /// Notifications queued since the last emission, oldest first.
    pub fn pending_notifications(&self) -> &[f32] {
        &self.pending.notifications
    }

    pub(crate) fn needs_refresh(&self) -> bool {
        self.pending.refresh_references
    }

    pub(crate) fn take_visual_work(&mut self) -> VisualWork {
        let pending = &mut self.pending;
        let work = VisualWork {
            update_visuals: pending.update_visuals,
            animated: pending.animated,
            reset_tint: pending.reset_tint,
            release_claims: pending.release_claims,
        };
        pending.update_visuals = false;
        pending.animated = false;
        pending.reset_tint = false;
        pending.release_claims = false;
        work
    }

    pub(crate) fn has_visual_work(&self) -> bool {
        let pending = &self.pending;
        pending.update_visuals || pending.animated || pending.reset_tint || pending.release_claims
    }

    /// Clamps a raw animated value in place.
    pub(crate) fn settle_animated_value(&mut self) {
        self.value = self.clamp_value(self.value);
    }

    pub(crate) fn claimed(&self) -> Option<Entity> {
        self.claimed
    }

    pub(crate) fn set_claimed(&mut self, claimed: Option<Entity>) {
        self.claimed = claimed;
    }

    pub(crate) fn queue_notification(&mut self, value: f32) {
        self.pending.notifications.push(value);
    }

    pub(crate) fn take_notifications(&mut self) -> Vec<f32> {
        std::mem::take(&mut self.pending.notifications)
    }

    pub(crate) fn has_layout_flips(&self) -> bool {
        !self.pending.layout_flips.is_empty()
    }

    pub(crate) fn take_layout_flips(&mut self) -> Vec<LayoutFlip> {
        std::mem::take(&mut self.pending.layout_flips)
    }
}
