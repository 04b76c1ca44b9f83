//=========================================================================
// Parse Errors
//=========================================================================

//=== Standard Library Imports ============================================

use std::io;
use std::path::PathBuf;

//=== External Crates =====================================================

use thiserror::Error;

//=== ParseError ==========================================================

/// Failure while reading or interpreting a block file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The file could not be opened or read.
    #[error("failed to open `{}`: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A property exists but its value does not parse as the requested type.
    #[error("property `{key}` has value `{value}`, which is not a valid {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// A source that must describe at least one block describes none.
    #[error("`{origin}` does not contain any block")]
    NoBlock { origin: String },

    /// A file transcludes itself through a chain of `path` children.
    #[error("`{}` includes itself through its `path` children", path.display())]
    TransclusionCycle { path: PathBuf },
}
