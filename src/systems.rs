use bevy::prelude::*;
use bevy::text::Text2d;
use bevy::ui::ComputedNode;
use bevy::ui::widget::Text;
use log::trace;

use crate::anchor_box::{AnchorBox, DrivenAnchors, FillImage};
use crate::config::StatBarConfig;
use crate::direction::LayoutFlip;
use crate::events::StatBarValueChanged;
use crate::host::{StatBarHost, TextTarget};
use crate::projection::{FillProjection, Projection};
use crate::stat_bar::StatBar;

pub(crate) fn activate_stat_bar(trigger: Trigger<OnAdd, StatBar>, mut bars: Query<&mut StatBar>) {
    if let Ok(mut bar) = bars.get_mut(trigger.target()) {
        bar.set_active(true);
    }
}

pub(crate) fn deactivate_stat_bar(
    trigger: Trigger<OnRemove, StatBar>,
    bars: Query<&StatBar>,
    mut commands: Commands,
) {
    if let Some(fill) = bars.get(trigger.target()).ok().and_then(StatBar::claimed) {
        release_claim(&mut commands, fill);
    }
}

fn release_claim(commands: &mut Commands, fill: Entity) {
    trace!("releasing anchor claim on {fill}");
    if let Ok(mut entity) = commands.get_entity(fill) {
        entity.try_remove::<DrivenAnchors>();
    }
}

fn claim(commands: &mut Commands, fill: Entity, driver: Entity) {
    trace!("{driver} claims the anchors of {fill}");
    if let Ok(mut entity) = commands.get_entity(fill) {
        entity.try_insert(DrivenAnchors { driver });
    }
}

pub(crate) fn tick_deferred_visuals(mut bars: Query<&mut StatBar>) {
    for mut bar in &mut bars {
        if bar.has_deferred_visuals() {
            bar.tick();
        }
    }
}

pub(crate) fn detect_dimension_changes(mut bars: Query<&mut StatBar, Changed<ComputedNode>>) {
    for mut bar in &mut bars {
        bar.dimensions_changed();
    }
}

pub(crate) fn resolve_stat_bar_references(mut bars: Query<(Entity, &mut StatBar)>, host: StatBarHost) {
    for (entity, mut bar) in &mut bars {
        if bar.needs_refresh() {
            bar.refresh_references(entity, &host);
        }
    }
}

/// Writes every pending projection into the fill, label and tint targets.
pub(crate) fn project_stat_bars(
    mut bars: Query<(Entity, &mut StatBar)>,
    mut boxes: Query<&mut AnchorBox>,
    mut images: Query<&mut FillImage>,
    mut ui_texts: Query<&mut Text>,
    mut world_texts: Query<&mut Text2d>,
    config: Res<StatBarConfig>,
    mut commands: Commands,
) {
    for (entity, mut bar) in &mut bars {
        if !bar.has_visual_work() {
            continue;
        }
        let work = bar.take_visual_work();
        let fill_image = bar.references().fill_image;

        if work.release_claims {
            if let Some(fill) = bar.claimed() {
                release_claim(&mut commands, fill);
            }
            bar.set_claimed(None);
        }

        if let (true, Some(fill)) = (work.reset_tint, fill_image) {
            if let Ok(mut image) = images.get_mut(fill) {
                image.color = config.untinted_color;
            }
        }

        if !(work.update_visuals || work.animated) {
            continue;
        }

        let mut displayed = None;
        if work.animated {
            bar.settle_animated_value();
            displayed = Some(bar.normalized_value());
            if let (Some(fill), Some(_)) = (bar.fill(), bar.references().fill_container) {
                if let Ok(fill_box) = boxes.get(fill) {
                    let image = images.get(fill).ok();
                    displayed = Some(FillProjection::displayed(bar.direction(), fill_box, image));
                }
            }
        }

        let fill_kind = fill_image.and_then(|fill| images.get(fill).ok().map(|image| image.kind));
        let projection = bar.projection(fill_kind);

        if let Some(previous) = bar.claimed() {
            release_claim(&mut commands, previous);
            bar.set_claimed(None);
        }
        if let (Some(fill), Some(_), true) = (bar.fill(), projection.fill, bar.is_active()) {
            claim(&mut commands, fill, entity);
            bar.set_claimed(Some(fill));
        }

        write_projection(&bar, &projection, &mut boxes, &mut images, &mut ui_texts, &mut world_texts);

        if let Some(displayed) = displayed {
            if displayed != bar.normalized_value() {
                let value = bar.value();
                bar.queue_notification(value);
            }
        }
    }
}

fn write_projection(
    bar: &StatBar,
    projection: &Projection,
    boxes: &mut Query<&mut AnchorBox>,
    images: &mut Query<&mut FillImage>,
    ui_texts: &mut Query<&mut Text>,
    world_texts: &mut Query<&mut Text2d>,
) {
    if let (Some(fill), Some(fill_projection)) = (bar.fill(), projection.fill) {
        if let Ok(mut fill_box) = boxes.get_mut(fill) {
            let driven = AnchorBox {
                anchor_min: fill_projection.anchor_min,
                anchor_max: fill_projection.anchor_max,
                ..*fill_box
            };
            fill_box.set_if_neq(driven);
        }
        if let (Some(amount), Ok(mut image)) = (fill_projection.fill_amount, images.get_mut(fill)) {
            if image.fill_amount != amount {
                image.fill_amount = amount;
            }
        }
    }

    if let (Some(tint), Some(fill)) = (projection.tint, bar.references().fill_image) {
        if let Ok(mut image) = images.get_mut(fill) {
            if image.color != tint {
                image.color = tint;
            }
        }
    }

    let (Some(label), Some(text)) = (bar.value_label(), projection.label.as_ref()) else {
        return;
    };
    match bar.references().label_text {
        Some(TextTarget::Ui) => {
            if let Ok(mut ui_text) = ui_texts.get_mut(label) {
                if ui_text.0 != *text {
                    ui_text.0.clone_from(text);
                }
            }
        }
        Some(TextTarget::World2d) => {
            if let Ok(mut world_text) = world_texts.get_mut(label) {
                if world_text.0 != *text {
                    world_text.0.clone_from(text);
                }
            }
        }
        None => {}
    }
}

pub(crate) fn emit_value_changes(mut bars: Query<(Entity, &mut StatBar)>, mut commands: Commands) {
    for (entity, mut bar) in &mut bars {
        if bar.pending_notifications().is_empty() {
            continue;
        }
        for value in bar.take_notifications() {
            commands.trigger_targets(StatBarValueChanged { value }, entity);
        }
    }
}

/// Flips the bar's own box in place and mirrors every box below it.
pub(crate) fn apply_layout_flips(
    mut bars: Query<(Entity, &mut StatBar)>,
    mut boxes: Query<&mut AnchorBox>,
    children: Query<&Children>,
) {
    for (entity, mut bar) in &mut bars {
        if !bar.has_layout_flips() {
            continue;
        }

        let descendants = descendants_of(entity, &children);
        for flip in bar.take_layout_flips() {
            trace!("{entity}: applying {flip:?}");
            if let Ok(mut root) = boxes.get_mut(entity) {
                flip_box(&mut root, flip, true);
            }
            for descendant in &descendants {
                if let Ok(mut child) = boxes.get_mut(*descendant) {
                    flip_box(&mut child, flip, false);
                }
            }
        }
    }
}

fn flip_box(anchor_box: &mut AnchorBox, flip: LayoutFlip, keep_positioning: bool) {
    match flip {
        LayoutFlip::Axes => anchor_box.flip_axes(keep_positioning),
        LayoutFlip::OnAxis(axis) => anchor_box.flip_on_axis(axis, keep_positioning),
    }
}

fn descendants_of(root: Entity, children: &Query<&Children>) -> Vec<Entity> {
    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(entity) = stack.pop() {
        if let Ok(entity_children) = children.get(entity) {
            let entity_children: &[Entity] = entity_children;
            for &child in entity_children {
                found.push(child);
                stack.push(child);
            }
        }
    }
    found
}

pub(crate) fn sync_anchor_nodes(mut nodes: Query<(&AnchorBox, &mut Node), Changed<AnchorBox>>) {
    for (anchor_box, mut node) in &mut nodes {
        anchor_box.apply_to_node(&mut node);
    }
}

pub(crate) fn sync_fill_colors(mut images: Query<(&FillImage, &mut BackgroundColor), Changed<FillImage>>) {
    for (image, mut background) in &mut images {
        if background.0 != image.color {
            background.0 = image.color;
        }
    }
}
