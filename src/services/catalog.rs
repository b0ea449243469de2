//! Catalog scanning service.
//!
//! Walks the root configuration directory, one subdirectory per keyboard, and
//! builds a [`Catalog`] from what the filenames say about each keyboard.
//! Directories are visited in name order so that repeated runs over the same
//! tree produce identical output.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Catalog, KeyboardRecord, MissingConfig};
use crate::parser::{expected_config_names, ConfigNameParser};

/// Errors that abort a catalog scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// No filename in the keyboard directory yielded a layout
    #[error("wrong file names in {keyboard}")]
    NoLayouts {
        /// Offending keyboard directory name
        keyboard: String,
        /// Full path of the directory
        dir: PathBuf,
    },
    /// A directory could not be listed
    #[error("Failed to read directory: {}", path.display())]
    Io {
        /// Directory being listed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Any other failure (pattern compilation, record construction)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScanError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Scanner over a root directory of per-keyboard configuration folders.
#[derive(Debug, Clone)]
pub struct CatalogScanner {
    root: PathBuf,
    parser: ConfigNameParser,
}

impl CatalogScanner {
    /// Creates a scanner rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ScanError> {
        Ok(Self {
            root: root.into(),
            parser: ConfigNameParser::new()?,
        })
    }

    /// Root directory being scanned.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Scans the whole tree, collecting missing-file warnings in the catalog.
    pub fn scan(&self) -> Result<Catalog, ScanError> {
        self.scan_with(|_| {})
    }

    /// Scans the whole tree, reporting each missing companion file to
    /// `on_missing` as soon as it is found.
    ///
    /// The first keyboard directory without any recognizable filename aborts
    /// the scan; nothing collected so far is returned.
    pub fn scan_with(
        &self,
        mut on_missing: impl FnMut(&MissingConfig),
    ) -> Result<Catalog, ScanError> {
        info!("Scanning keyboard configs in {}", self.root.display());

        let mut catalog = Catalog::default();

        for keyboard in list_keyboard_dirs(&self.root)? {
            let (record, missing) = self.scan_keyboard(&keyboard)?;

            for entry in missing {
                on_missing(&entry);
                catalog.missing.push(entry);
            }
            catalog.keyboards.push(record);
        }

        info!(
            "Found {} keyboards ({} missing config files)",
            catalog.keyboards.len(),
            catalog.missing.len()
        );

        Ok(catalog)
    }

    /// Scans a single keyboard directory under the root.
    pub fn scan_keyboard(
        &self,
        keyboard: &str,
    ) -> Result<(KeyboardRecord, Vec<MissingConfig>), ScanError> {
        let dir = self.root.join(keyboard);
        let file_names = list_file_names(&dir)?;

        let inferred = self.parser.infer(keyboard, &file_names);
        if inferred.layouts.is_empty() {
            return Err(ScanError::NoLayouts {
                keyboard: keyboard.to_string(),
                dir,
            });
        }

        debug!(
            "{}: layouts={:?} split={} lpme={}",
            keyboard, inferred.layouts, inferred.split, inferred.lpme
        );

        let mut missing = Vec::new();
        for layout in &inferred.layouts {
            for name in expected_config_names(keyboard, layout, inferred.split, inferred.lpme) {
                let path = dir.join(&name);
                if !path.exists() {
                    missing.push(MissingConfig {
                        keyboard: keyboard.to_string(),
                        layout: layout.clone(),
                        path,
                    });
                }
            }
        }

        let record = KeyboardRecord::new(keyboard, inferred.layouts, inferred.split, inferred.lpme)?;

        Ok((record, missing))
    }
}

/// Lists keyboard directory names under `root`, sorted. Other entries are skipped.
fn list_keyboard_dirs(root: &Path) -> Result<Vec<String>, ScanError> {
    let entries = fs::read_dir(root).map_err(|e| ScanError::io(root, e))?;

    let mut keyboards = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::io(root, e))?;
        let path = entry.path();

        if !path.is_dir() {
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => keyboards.push(name),
            Err(name) => warn!("Skipping non UTF-8 directory name: {:?}", name),
        }
    }

    keyboards.sort();
    Ok(keyboards)
}

/// Lists every entry name directly inside `dir`, sorted.
fn list_file_names(dir: &Path) -> Result<Vec<String>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::io(dir, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn keyboard_dir(root: &Path, name: &str, files: &[&str]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for file in files {
            fs::write(dir.join(file), "{}").unwrap();
        }
    }

    #[test]
    fn test_scan_default_layout() {
        let temp = TempDir::new().unwrap();
        keyboard_dir(temp.path(), "kbd1", &["kbd1_config.json"]);

        let catalog = CatalogScanner::new(temp.path()).unwrap().scan().unwrap();

        let kbd1 = catalog.get("kbd1").unwrap();
        assert_eq!(kbd1.layouts, vec![""]);
        assert!(kbd1.keymap.is_empty());
        assert!(!kbd1.split);
        assert!(!kbd1.lpme);
        assert!(catalog.is_complete());
    }

    #[test]
    fn test_scan_split_keyboard() {
        let temp = TempDir::new().unwrap();
        keyboard_dir(
            temp.path(),
            "kbd2",
            &[
                "kbd2_ansi_master_left_config.json",
                "kbd2_ansi_slave_right_config.json",
            ],
        );

        let catalog = CatalogScanner::new(temp.path()).unwrap().scan().unwrap();

        let kbd2 = catalog.get("kbd2").unwrap();
        assert_eq!(kbd2.layouts, vec!["ansi"]);
        assert!(kbd2.split);
        assert!(!kbd2.lpme);
        assert!(catalog.missing.is_empty());
    }

    #[test]
    fn test_scan_reports_missing_slave() {
        let temp = TempDir::new().unwrap();
        keyboard_dir(temp.path(), "kbd3", &["kbd3_iso_master_left_config.json"]);

        let mut reported = Vec::new();
        let catalog = CatalogScanner::new(temp.path())
            .unwrap()
            .scan_with(|m| reported.push(m.clone()))
            .unwrap();

        let kbd3 = catalog.get("kbd3").unwrap();
        assert_eq!(kbd3.layouts, vec!["iso"]);
        assert!(kbd3.split);

        assert_eq!(catalog.missing.len(), 1);
        assert_eq!(reported, catalog.missing);
        assert_eq!(
            catalog.missing[0].path,
            temp.path().join("kbd3").join("kbd3_iso_slave_right_config.json")
        );
        assert_eq!(catalog.missing[0].layout, "iso");
    }

    #[test]
    fn test_scan_lpme_expects_lpme_file() {
        let temp = TempDir::new().unwrap();
        keyboard_dir(
            temp.path(),
            "crkbd",
            &[
                "crkbd_rev1_master_left_config.json",
                "crkbd_rev1_slave_right_config.json",
                "crkbd_rev2_lpme_left_config.json",
            ],
        );

        let catalog = CatalogScanner::new(temp.path()).unwrap().scan().unwrap();

        let crkbd = catalog.get("crkbd").unwrap();
        assert_eq!(crkbd.layouts, vec!["rev1", "rev2"]);
        assert!(crkbd.split);
        assert!(crkbd.lpme);

        let missing: Vec<String> = catalog
            .missing
            .iter()
            .map(|m| m.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            missing,
            vec![
                "crkbd_rev1_lpme_left_config.json",
                "crkbd_rev2_master_left_config.json",
                "crkbd_rev2_slave_right_config.json",
            ]
        );
    }

    #[test]
    fn test_scan_aborts_on_unrecognized_directory() {
        let temp = TempDir::new().unwrap();
        keyboard_dir(temp.path(), "kbd1", &["kbd1_config.json"]);
        keyboard_dir(temp.path(), "kbd4", &["readme.txt"]);

        let err = CatalogScanner::new(temp.path()).unwrap().scan().unwrap_err();

        assert!(matches!(err, ScanError::NoLayouts { ref keyboard, .. } if keyboard == "kbd4"));
        assert_eq!(err.to_string(), "wrong file names in kbd4");
    }

    #[test]
    fn test_scan_empty_keyboard_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        keyboard_dir(temp.path(), "empty", &[]);

        let err = CatalogScanner::new(temp.path()).unwrap().scan().unwrap_err();
        assert!(matches!(err, ScanError::NoLayouts { .. }));
    }

    #[test]
    fn test_scan_skips_files_in_root_and_sorts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "notes").unwrap();
        keyboard_dir(temp.path(), "zeta", &["zeta_config.json"]);
        keyboard_dir(temp.path(), "alpha", &["alpha_config.json"]);

        let catalog = CatalogScanner::new(temp.path()).unwrap().scan().unwrap();

        let names: Vec<&str> = catalog.keyboards.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_scan_missing_root() {
        let temp = TempDir::new().unwrap();
        let err = CatalogScanner::new(temp.path().join("nope"))
            .unwrap()
            .scan()
            .unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
    }

    #[test]
    fn test_scan_empty_root() {
        let temp = TempDir::new().unwrap();
        let catalog = CatalogScanner::new(temp.path()).unwrap().scan().unwrap();
        assert!(catalog.keyboards.is_empty());
    }
}
