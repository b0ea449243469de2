//! Inference of layout variants and capabilities from configuration filenames.
//!
//! Configuration files follow the loose convention
//! `<keyboard>[_<layout>]_<role>_config.json`, where `<role>` is one of
//! `master_left`, `slave_right`, `lpme_left`, or absent for non-split keyboards.
//! Nothing enforces the convention, so inference is permissive: filenames that
//! do not fit contribute nothing instead of failing.

use anyhow::{Context, Result};
use regex::Regex;
use std::collections::BTreeSet;

/// Substring marking the master half of a split keyboard.
pub const MASTER_MARKER: &str = "master";

/// Substring marking a low-power mouse-emulation variant.
pub const LPME_MARKER: &str = "lpme";

/// Everything up to the first role or config token, case-insensitive.
const LAYOUT_PATTERN: &str = r"(?i)^(.*?)(?:_config|_master|_slave|_lpme)";

/// Metadata inferred from the filenames of one keyboard directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InferredConfig {
    /// Distinct layout names (empty string = default layout)
    pub layouts: BTreeSet<String>,
    /// Any filename contains `master`
    pub split: bool,
    /// Any filename contains `lpme`
    pub lpme: bool,
}

/// Parser for configuration filenames.
#[derive(Debug, Clone)]
pub struct ConfigNameParser {
    layout_pattern: Regex,
}

impl ConfigNameParser {
    /// Compiles the layout pattern.
    pub fn new() -> Result<Self> {
        let layout_pattern =
            Regex::new(LAYOUT_PATTERN).context("Failed to compile layout pattern")?;
        Ok(Self { layout_pattern })
    }

    /// Extracts the layout name from a single filename.
    ///
    /// Every occurrence of the keyboard name is removed first, then the text
    /// before the first `_config`, `_master`, `_slave` or `_lpme` token is
    /// taken, minus one leading underscore.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyboard_catalog::parser::ConfigNameParser;
    ///
    /// let parser = ConfigNameParser::new().unwrap();
    /// assert_eq!(parser.layout_name("kbd2", "kbd2_ansi_master_left_config.json").as_deref(), Some("ansi"));
    /// assert_eq!(parser.layout_name("kbd1", "kbd1_config.json").as_deref(), Some(""));
    /// assert_eq!(parser.layout_name("kbd4", "readme.txt"), None);
    /// ```
    #[must_use]
    pub fn layout_name(&self, keyboard: &str, file_name: &str) -> Option<String> {
        let stripped = if keyboard.is_empty() {
            file_name.to_string()
        } else {
            file_name.replace(keyboard, "")
        };

        let captures = self.layout_pattern.captures(&stripped)?;
        let prefix = captures.get(1).map_or("", |m| m.as_str());
        Some(prefix.strip_prefix('_').unwrap_or(prefix).to_string())
    }

    /// Infers layouts and capability flags for one keyboard directory.
    #[must_use]
    pub fn infer<S: AsRef<str>>(&self, keyboard: &str, file_names: &[S]) -> InferredConfig {
        let mut inferred = InferredConfig {
            layouts: BTreeSet::new(),
            split: is_split(file_names),
            lpme: is_lpme_available(file_names),
        };

        for file_name in file_names {
            if let Some(layout) = self.layout_name(keyboard, file_name.as_ref()) {
                inferred.layouts.insert(layout);
            }
        }

        inferred
    }
}

/// Returns true if any filename names a master half.
pub fn is_split<S: AsRef<str>>(file_names: &[S]) -> bool {
    file_names
        .iter()
        .any(|name| name.as_ref().contains(MASTER_MARKER))
}

/// Returns true if any filename names an LPME variant.
pub fn is_lpme_available<S: AsRef<str>>(file_names: &[S]) -> bool {
    file_names
        .iter()
        .any(|name| name.as_ref().contains(LPME_MARKER))
}

/// Builds the filenames a keyboard is expected to ship for one layout.
///
/// # Examples
///
/// ```
/// use keyboard_catalog::parser::expected_config_names;
///
/// assert_eq!(expected_config_names("kbd1", "", false, false), vec!["kbd1_config.json"]);
/// assert_eq!(
///     expected_config_names("kbd2", "ansi", true, true),
///     vec![
///         "kbd2_ansi_master_left_config.json",
///         "kbd2_ansi_slave_right_config.json",
///         "kbd2_ansi_lpme_left_config.json",
///     ]
/// );
/// ```
#[must_use]
pub fn expected_config_names(keyboard: &str, layout: &str, split: bool, lpme: bool) -> Vec<String> {
    let suffix = if layout.is_empty() {
        String::new()
    } else {
        format!("_{layout}")
    };

    if !split {
        return vec![format!("{keyboard}{suffix}_config.json")];
    }

    let mut names = vec![
        format!("{keyboard}{suffix}_master_left_config.json"),
        format!("{keyboard}{suffix}_slave_right_config.json"),
    ];
    if lpme {
        names.push(format!("{keyboard}{suffix}_lpme_left_config.json"));
    }
    names
}
