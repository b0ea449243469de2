//! Manifest file I/O service.
//!
//! Generated manifests are consumed by a front-end build, so a failed run must
//! never leave a truncated file behind. Every write goes to a sibling temp file
//! first and is renamed into place.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Service for writing generated manifest files.
pub struct ManifestService;

impl ManifestService {
    /// Writes `contents` to `path` atomically, creating parent directories.
    ///
    /// # Arguments
    ///
    /// * `path` - Destination of the manifest
    /// * `contents` - Fully rendered manifest text
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use keyboard_catalog::services::ManifestService;
    ///
    /// ManifestService::write(Path::new("src/keyboards.js"), "export { keyboards };\n")?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn write(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }

        let temp_path = Self::temp_path(path);

        fs::write(&temp_path, contents)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

        if let Err(e) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e)
                .with_context(|| format!("Failed to rename temp file to: {}", path.display()));
        }

        Ok(())
    }

    /// Returns true if `path` already holds exactly `contents`.
    #[must_use]
    pub fn is_up_to_date(path: &Path, contents: &str) -> bool {
        fs::read_to_string(path).is_ok_and(|existing| existing == contents)
    }

    fn temp_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        path.with_file_name(name)
    }
}
