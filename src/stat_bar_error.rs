use bevy::prelude::*;

/// Error type for the fallible edges of the crate.
///
/// The bar itself never fails: bad ranges degrade and invalid references are
/// dropped. Errors only come from looking bars up and from settings.
#[derive(Debug, Clone, PartialEq)]
pub enum StatBarError {
    /// Entity not found
    EntityNotFound { entity: Entity },

    /// The entity exists but has no `StatBar`
    MissingStatBar { entity: Entity },

    /// A settings field holds an unusable value
    InvalidSettings { field: &'static str, details: String },
}

impl std::fmt::Display for StatBarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatBarError::EntityNotFound { entity } => {
                write!(f, "Entity {:?} not found", entity)
            }
            StatBarError::MissingStatBar { entity } => {
                write!(f, "Entity {:?} has no stat bar", entity)
            }
            StatBarError::InvalidSettings { field, details } => {
                write!(f, "Invalid stat bar setting '{}': {}", field, details)
            }
        }
    }
}

impl std::error::Error for StatBarError {}

// Type alias for Result with StatBarError
pub type StatBarResult<T> = Result<T, StatBarError>;
