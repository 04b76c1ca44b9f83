//=========================================================================
// Resource Errors
//=========================================================================

use std::path::PathBuf;

use thiserror::Error;

/// Failure to locate or decode an external resource.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("resource `{}` not found", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to load `{}`: {reason}", path.display())]
    Invalid { path: PathBuf, reason: String },
}
