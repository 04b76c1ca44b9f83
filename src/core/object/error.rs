//=========================================================================
// Object Errors
//=========================================================================

use thiserror::Error;

use super::ObjectId;

/// Invalid structural or capability operation on an object.
///
/// Object names are captured when the error is raised so messages stay
/// meaningful after the objects are gone.
#[derive(Debug, Error)]
pub enum ObjectError {
    #[error("object {0} is not alive")]
    NotFound(ObjectId),

    #[error("{parent}: can't attach `{child}`, it already has a parent")]
    AlreadyAttached { parent: String, child: String },

    #[error("{parent}: can't detach `{child}`, it is not a child of this object")]
    NotAChild { parent: String, child: String },

    #[error("{parent}: attaching `{child}` would make the object its own ancestor")]
    Cycle { parent: String, child: String },

    #[error("{object}: could not find a {requested}")]
    MissingCapability { object: String, requested: String },

    #[error("{object}: no component at index {index} ({count} attached)")]
    ComponentOutOfRange {
        object: String,
        index: usize,
        count: usize,
    },

    #[error("{object}: no behavior named `{name}` is attached")]
    BehaviorNotFound { object: String, name: String },
}
