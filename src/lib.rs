//! A display-driven stat bar for bevy_ui.
//!
//! A [`StatBar`](stat_bar::StatBar) owns a clamped value and a range. It maps
//! the normalized value onto the anchors (or fill amount) of a fill box in
//! one of four directions, writes a zero-padded value label and tints the
//! fill at configurable thresholds. Add [`plugin`] to an `App`, spawn a bar
//! with [`spawn_stat_bar`](spawn::spawn_stat_bar) (or build one by hand) and
//! set its value from any system.

pub mod anchor_box;
pub mod config;
pub mod direction;
pub mod events;
pub mod host;
pub mod label;
pub mod prelude;
pub mod projection;
pub mod references;
pub mod schedule;
pub mod settings;
pub mod spawn;
pub mod stat_accessor;
pub mod stat_bar;
pub mod stat_bar_error;
pub mod transition;
mod systems;

pub use schedule::plugin;
