//=========================================================================
// Scene Errors
//=========================================================================

use thiserror::Error;

use crate::core::components::ComponentError;
use crate::core::object::ObjectError;
use crate::core::parser::ParseError;
use crate::core::resources::ResourceError;

/// Any failure surfaced by a `Runtime` operation.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Object(#[from] ObjectError),

    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}
