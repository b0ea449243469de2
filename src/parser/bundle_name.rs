//! Filename conventions for prebuilt firmware bundles.
//!
//! Bundles are named `<keyboard>_<role>_config.bin` in a flat directory, with
//! the default keymap shipped as `<keyboard>_default.bin`.

/// Marker every configuration bundle filename contains.
pub const BUNDLE_MARKER: &str = "_config.bin";

/// Role of a configuration bundle, derived from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleRole {
    /// `..._lpme_config.bin`: LPME half of a split keyboard
    Lpme,
    /// `..._master_config.bin`: master half of a split keyboard
    Master,
    /// Any other configuration bundle
    Other,
}

impl BundleRole {
    /// Classifies a bundle filename. LPME takes precedence over master.
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.contains("lpme_config.bin") {
            Self::Lpme
        } else if file_name.contains("master_config.bin") {
            Self::Master
        } else {
            Self::Other
        }
    }
}

/// Derives the keyboard name from a configuration bundle filename.
///
/// The name is everything before the last two `_`-separated segments. Returns
/// `None` for filenames that are not configuration bundles or that leave no
/// name behind.
///
/// # Examples
///
/// ```
/// use keyboard_catalog::parser::bundle_keyboard_name;
///
/// assert_eq!(bundle_keyboard_name("crkbd_rev1_master_config.bin").as_deref(), Some("crkbd_rev1"));
/// assert_eq!(bundle_keyboard_name("bat43_config.bin"), None);
/// assert_eq!(bundle_keyboard_name("crkbd_default.bin"), None);
/// ```
#[must_use]
pub fn bundle_keyboard_name(file_name: &str) -> Option<String> {
    if !file_name.contains(BUNDLE_MARKER) {
        return None;
    }

    let segments: Vec<&str> = file_name.split('_').collect();
    if segments.len() <= 2 {
        return None;
    }

    let name = segments[..segments.len() - 2].join("_");
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Filename of the default keymap bundle for a keyboard.
#[must_use]
pub fn default_keymap_name(keyboard: &str) -> String {
    format!("{keyboard}_default.bin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_role() {
        assert_eq!(
            BundleRole::from_file_name("crkbd_rev1_lpme_config.bin"),
            BundleRole::Lpme
        );
        assert_eq!(
            BundleRole::from_file_name("crkbd_rev1_master_config.bin"),
            BundleRole::Master
        );
        assert_eq!(
            BundleRole::from_file_name("crkbd_rev1_slave_config.bin"),
            BundleRole::Other
        );
    }

    #[test]
    fn test_bundle_keyboard_name_keeps_inner_underscores() {
        assert_eq!(
            bundle_keyboard_name("ergodash_mini_rev1_slave_config.bin"),
            Some("ergodash_mini_rev1".to_string())
        );
    }

    #[test]
    fn test_bundle_keyboard_name_rejects_non_bundles() {
        assert_eq!(bundle_keyboard_name("crkbd_rev1_master_config.json"), None);
        assert_eq!(bundle_keyboard_name("_x_config.bin"), None);
    }

    #[test]
    fn test_default_keymap_name() {
        assert_eq!(default_keymap_name("dozen0"), "dozen0_default.bin");
    }
}
