//=========================================================================
// Component Errors
//=========================================================================

use thiserror::Error;

use crate::core::parser::ParseError;
use crate::core::resources::ResourceError;

/// Failure to construct or reconfigure a component.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// An animation file could not be read.
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("tileset `{path}` cannot be cut into {tile_width}x{tile_height} tiles")]
    InvalidTileset {
        path: String,
        tile_width: i32,
        tile_height: i32,
    },
}
