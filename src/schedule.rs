use bevy::{app::MainScheduleOrder, ecs::schedule::ScheduleLabel, prelude::*};

use crate::config::StatBarConfig;
use crate::systems::{
    activate_stat_bar, apply_layout_flips, deactivate_stat_bar, detect_dimension_changes,
    emit_value_changes, project_stat_bars, resolve_stat_bar_references, sync_anchor_nodes,
    sync_fill_colors, tick_deferred_visuals,
};

/// Sets up the [`StatBarUpdate`] schedule, its systems and the lifecycle
/// observers.
///
/// Bars are mutated in `Update` (or earlier). `StatBarUpdate` runs right
/// after it, so by `PostUpdate`, when bevy_ui lays out nodes, every bar has
/// written its fill, label and tint for the frame.
pub fn plugin(app: &mut App) {
    app.init_schedule(StatBarUpdate)
        .world_mut()
        .resource_mut::<MainScheduleOrder>()
        .insert_after(Update, StatBarUpdate);

    app.init_resource::<StatBarConfig>()
        .add_observer(activate_stat_bar)
        .add_observer(deactivate_stat_bar)
        .add_systems(
            StatBarUpdate,
            (
                tick_deferred_visuals,
                detect_dimension_changes,
                // Before projecting, so the fill lands on the flipped layout.
                apply_layout_flips,
                resolve_stat_bar_references,
                project_stat_bars,
                emit_value_changes,
                (sync_anchor_nodes, sync_fill_colors),
            )
                .chain()
                .in_set(StatBarSystems),
        );
}

/// Custom Bevy schedule label for applying bar mutations to the entities the
/// bars reference.
///
/// Runs after `Update` and before `PostUpdate`.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatBarUpdate;

/// All stat bar systems inside [`StatBarUpdate`], for ordering user systems
/// around them.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatBarSystems;
