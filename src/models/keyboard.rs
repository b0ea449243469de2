//! Keyboard records produced by a catalog scan.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// One keyboard entry of the generated manifest.
///
/// # Validation
///
/// - `name` must be non-empty
/// - `layouts` must contain at least one entry (the empty string counts as the
///   default layout)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardRecord {
    /// Keyboard identifier (the configuration directory name)
    pub name: String,
    /// Layout variants, sorted lexicographically
    #[serde(rename = "layout")]
    pub layouts: Vec<String>,
    /// Reserved for the front-end; always empty
    pub keymap: Vec<String>,
    /// True when any configuration file names a master half
    pub split: bool,
    /// True when any configuration file names an LPME variant
    pub lpme: bool,
}

impl KeyboardRecord {
    /// Creates a record from an inferred layout set.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the layout set is empty.
    pub fn new(
        name: impl Into<String>,
        layouts: BTreeSet<String>,
        split: bool,
        lpme: bool,
    ) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            anyhow::bail!("Keyboard name cannot be empty");
        }
        if layouts.is_empty() {
            anyhow::bail!("Keyboard '{name}' has no layouts");
        }

        Ok(Self {
            name,
            layouts: layouts.into_iter().collect(),
            keymap: Vec::new(),
            split,
            lpme,
        })
    }
}

/// An expected companion configuration file that is absent on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingConfig {
    /// Keyboard the file belongs to
    pub keyboard: String,
    /// Layout the file was expected for (empty for the default layout)
    pub layout: String,
    /// Full path that was checked
    pub path: PathBuf,
}

impl std::fmt::Display for MissingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} does not exist", self.path.display())
    }
}

/// Result of scanning a configuration tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Keyboard records in output order
    pub keyboards: Vec<KeyboardRecord>,
    /// Missing companion files, in the order they were found
    pub missing: Vec<MissingConfig>,
}

impl Catalog {
    /// Returns true if every expected companion file was found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Looks up a keyboard record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&KeyboardRecord> {
        self.keyboards.iter().find(|kb| kb.name == name)
    }
}
