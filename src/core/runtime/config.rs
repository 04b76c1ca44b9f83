//=========================================================================
// Runtime Configuration
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::resources::ResourceRoot;

//=== RuntimeConfig =======================================================

/// Settings for a `Runtime` built without the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory every resource-relative path is resolved against.
    pub resource_root: ResourceRoot,

    /// When `true`, the engine ticks with measured wall-clock time
    /// (`Runtime::advance`); otherwise with the fixed tick duration.
    pub internal_clock: bool,
}

impl RuntimeConfig {
    pub fn new(resource_root: impl Into<std::path::PathBuf>) -> Self {
        Self {
            resource_root: ResourceRoot::new(resource_root),
            ..Self::default()
        }
    }

    pub fn with_internal_clock(mut self, internal_clock: bool) -> Self {
        self.internal_clock = internal_clock;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            resource_root: ResourceRoot::default(),
            internal_clock: true,
        }
    }
}
