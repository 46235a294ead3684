use bevy::prelude::*;

use crate::anchor_box::{AnchorBox, FillImage};
use crate::config::StatBarConfig;
use crate::settings::StatBarSettings;
use crate::stat_bar_error::StatBarResult;

/// The entities making up a spawned bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBarEntities {
    pub bar: Entity,
    pub background: Entity,
    pub fill_area: Entity,
    pub fill: Entity,
}

/// A box matching its parent's height and stretching over its width.
fn horizontal_band() -> AnchorBox {
    AnchorBox {
        anchor_min: Vec2::new(0.0, 0.5),
        anchor_max: Vec2::new(1.0, 0.5),
        ..AnchorBox::stretched()
    }
}

/// Spawns a ready-to-use bar:
///
/// ```text
/// StatBar (root box)
/// ├── Background
/// └── Fill Area
///     └── Fill (driven by the bar)
/// ```
///
/// The bar starts at `settings.value`, or full when unset.
pub fn spawn_stat_bar(
    commands: &mut Commands,
    config: &StatBarConfig,
    settings: &StatBarSettings,
    parent: Option<Entity>,
) -> StatBarResult<StatBarEntities> {
    settings.validate()?;

    let bar = commands
        .spawn((Name::new("StatBar"), AnchorBox::sized(config.bar_size)))
        .id();
    if let Some(parent) = parent {
        commands.entity(bar).insert(ChildOf(parent));
    }

    let band = AnchorBox {
        size_delta: Vec2::new(0.0, config.bar_size.y),
        ..horizontal_band()
    };

    let background = commands
        .spawn((
            Name::new("Background"),
            band,
            BackgroundColor(config.background_color),
            ChildOf(bar),
        ))
        .id();

    let fill_area = commands
        .spawn((Name::new("Fill Area"), band, ChildOf(bar)))
        .id();

    let fill = commands
        .spawn((
            Name::new("Fill"),
            AnchorBox::stretched(),
            FillImage::simple(config.fill_color),
            ChildOf(fill_area),
        ))
        .id();

    // Inserted last so activation sees the finished hierarchy.
    commands
        .entity(bar)
        .insert(settings.to_stat_bar().with_fill(fill));

    Ok(StatBarEntities {
        bar,
        background,
        fill_area,
        fill,
    })
}

/// [`spawn_stat_bar`] with [`StatBarConfig::default_settings`].
pub fn spawn_default_stat_bar(
    commands: &mut Commands,
    config: &StatBarConfig,
    parent: Option<Entity>,
) -> StatBarResult<StatBarEntities> {
    spawn_stat_bar(commands, config, &config.default_settings, parent)
}
