//! Trait abstraction for the persisted repositories root.
//!
//! `ConfigStore` lets the interactive setup flow run against the real config
//! file or an in-memory mock.

use std::path::{Path, PathBuf};

use crate::Result;

/// Storage for the single configured repositories root.
#[allow(clippy::missing_errors_doc)]
pub trait ConfigStore {
    /// Location of the backing file (shown to the user on reset).
    fn path(&self) -> &Path;

    /// Load the configured root, or `None` if nothing usable is stored.
    fn load(&self) -> Result<Option<PathBuf>>;

    /// Overwrite the stored root.
    fn save(&self, root: &Path) -> Result<()>;

    /// Forget the stored root. Returns whether anything was removed.
    fn reset(&self) -> Result<bool>;
}
