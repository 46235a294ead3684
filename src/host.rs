use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::text::Text2d;
use bevy::ui::widget::Text;

use crate::anchor_box::{AnchorBox, FillImage, FillImageKind};

/// The kind of text component a label entity carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextTarget {
    /// bevy_ui [`Text`].
    Ui,
    /// World-space [`Text2d`].
    World2d,
}

/// Capability lookups a stat bar needs from the objects it references.
///
/// Handles are never owned. A lookup on an entity that no longer exists, or
/// that lost the capability, answers `None`.
pub trait HostLookup {
    /// The parent of `entity`, when that parent is itself an anchor box.
    fn parent_box(&self, entity: Entity) -> Option<Entity>;

    fn fill_image_kind(&self, entity: Entity) -> Option<FillImageKind>;

    /// The text component on `entity`, UI text taking precedence.
    fn text_target(&self, entity: Entity) -> Option<TextTarget>;
}

/// [`HostLookup`] over the ECS world.
#[derive(SystemParam)]
pub struct StatBarHost<'w, 's> {
    parents: Query<'w, 's, &'static ChildOf>,
    boxes: Query<'w, 's, (), With<AnchorBox>>,
    images: Query<'w, 's, &'static FillImage>,
    ui_texts: Query<'w, 's, (), With<Text>>,
    world_texts: Query<'w, 's, (), With<Text2d>>,
}

impl HostLookup for StatBarHost<'_, '_> {
    fn parent_box(&self, entity: Entity) -> Option<Entity> {
        let parent = self.parents.get(entity).ok()?.parent();
        self.boxes.contains(parent).then_some(parent)
    }

    fn fill_image_kind(&self, entity: Entity) -> Option<FillImageKind> {
        self.images.get(entity).ok().map(|image| image.kind)
    }

    fn text_target(&self, entity: Entity) -> Option<TextTarget> {
        if self.ui_texts.contains(entity) {
            Some(TextTarget::Ui)
        } else if self.world_texts.contains(entity) {
            Some(TextTarget::World2d)
        } else {
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;

    use super::*;

    /// An in-memory host for unit tests.
    #[derive(Default)]
    pub(crate) struct FakeHost {
        pub parents: HashMap<Entity, Entity>,
        pub images: HashMap<Entity, FillImageKind>,
        pub texts: HashMap<Entity, TextTarget>,
    }

    impl HostLookup for FakeHost {
        fn parent_box(&self, entity: Entity) -> Option<Entity> {
            self.parents.get(&entity).copied()
        }

        fn fill_image_kind(&self, entity: Entity) -> Option<FillImageKind> {
            self.images.get(&entity).copied()
        }

        fn text_target(&self, entity: Entity) -> Option<TextTarget> {
            self.texts.get(&entity).copied()
        }
    }
}
