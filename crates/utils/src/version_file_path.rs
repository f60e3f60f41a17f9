use std::path::{Path, PathBuf};

use anyhow::Result;
use buildver_core::store::VERSION_FILE;

/// Resolve the backing file for a module.
///
/// Conventionally `<module>/version.properties`; the root project (no module)
/// keeps its file at `version.properties` directly.
///
/// # Errors
/// Returns error if the module name is empty or contains a path separator.
pub fn version_file_path(root: &Path, module: Option<&str>) -> Result<PathBuf> {
    match module {
        None => Ok(root.join(VERSION_FILE)),
        Some(module) => {
            if module.is_empty() || module.contains('/') || module.contains('\\') {
                anyhow::bail!("Invalid module name: {:?}", module);
            }
            Ok(root.join(module).join(VERSION_FILE))
        }
    }
}
