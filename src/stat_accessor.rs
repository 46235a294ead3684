use bevy::prelude::*;
use log::debug;

use crate::stat_bar::{StatBar, StatBarCommand};
use crate::stat_bar_error::{StatBarError, StatBarResult};

/// Direct access to bars from exclusive world code and tests.
pub trait StatBarWorldExt {
    fn stat_bar(&self, entity: Entity) -> StatBarResult<&StatBar>;

    fn stat_bar_mut(&mut self, entity: Entity) -> StatBarResult<Mut<'_, StatBar>>;
}

impl StatBarWorldExt for World {
    fn stat_bar(&self, entity: Entity) -> StatBarResult<&StatBar> {
        let entity_ref = self
            .get_entity(entity)
            .map_err(|_| StatBarError::EntityNotFound { entity })?;
        entity_ref
            .get::<StatBar>()
            .ok_or(StatBarError::MissingStatBar { entity })
    }

    fn stat_bar_mut(&mut self, entity: Entity) -> StatBarResult<Mut<'_, StatBar>> {
        let entity_mut = self
            .get_entity_mut(entity)
            .map_err(|_| StatBarError::EntityNotFound { entity })?;
        entity_mut
            .into_mut::<StatBar>()
            .ok_or(StatBarError::MissingStatBar { entity })
    }
}

/// Deferred bar mutations through [`EntityCommands`].
pub trait StatBarCommandsExt {
    /// Queues `command` for the bar on this entity. Entities without a bar
    /// are skipped.
    fn stat_bar_command(&mut self, command: StatBarCommand) -> &mut Self;
}

impl StatBarCommandsExt for EntityCommands<'_> {
    fn stat_bar_command(&mut self, command: StatBarCommand) -> &mut Self {
        let entity = self.id();
        self.commands().queue(move |world: &mut World| {
            match world.stat_bar_mut(entity) {
                Ok(mut bar) => {
                    bar.apply(command);
                }
                Err(error) => debug!("dropping {command:?}: {error}"),
            }
        });
        self
    }
}
