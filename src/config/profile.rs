//! Built-in profile tables
//!
//! Accessibility profiles are fixed partial patches - applying one merges
//! its overrides and records the name. Colorblind profiles are not patches:
//! each name selects one mutually exclusive visual filter in the projection.

use crate::config::settings::ConfigPatch;
use crate::constants::classes;

/// The six built-in accessibility profiles
pub const PROFILE_NAMES: [&str; 6] = [
    "epilepsy",
    "learning",
    "visual-impairment",
    "elderly",
    "tdah",
    "dyslexia",
];

/// The six colorblindness filter names
pub const COLORBLIND_PROFILES: [&str; 6] = [
    "deuteranopia",
    "deuteranomaly",
    "protanopia",
    "tritanopia",
    "tritanomaly",
    "achromatopsia",
];

/// Fixed override patch for a named profile.
///
/// Unrecognized names yield the empty patch; the store still records the
/// name in `active_profile`. Note that a profile only defines the fields it
/// cares about - switching profiles does not clear what the previous
/// profile turned on unless the new profile mentions the same field.
pub fn profile_patch(name: &str) -> ConfigPatch {
    match name {
        "epilepsy" => ConfigPatch {
            block_flashing: Some(true),
            mute_sounds: Some(true),
            low_saturation: Some(true),
            saturation: Some(50),
            ..ConfigPatch::default()
        },
        "learning" => ConfigPatch {
            easy_reading: Some(true),
            reading_guide: Some(true),
            highlight_titles: Some(true),
            highlight_links: Some(true),
            font_size: Some(110),
            ..ConfigPatch::default()
        },
        "visual-impairment" => ConfigPatch {
            font_size: Some(120),
            line_height: Some(160),
            magnifier: Some(true),
            high_contrast: Some(true),
            cursor_black: Some(true),
            highlight_links: Some(true),
            ..ConfigPatch::default()
        },
        "elderly" => ConfigPatch {
            font_size: Some(110),
            cursor_black: Some(true),
            readable_font: Some(true),
            highlight_links: Some(true),
            high_brightness: Some(true),
            ..ConfigPatch::default()
        },
        "tdah" => ConfigPatch {
            reading_guide: Some(true),
            focus_mode: Some(true),
            block_flashing: Some(true),
            easy_reading: Some(true),
            highlight_titles: Some(true),
            ..ConfigPatch::default()
        },
        "dyslexia" => ConfigPatch {
            dyslexia_font: Some(true),
            letter_spacing: Some(2),
            word_spacing: Some(4),
            line_height: Some(170),
            ..ConfigPatch::default()
        },
        _ => ConfigPatch::default(),
    }
}

/// Filter class for a colorblind profile name, case-normalized.
///
/// Only the six known filters map to a class. Anything else yields `None`,
/// keeping the managed class universe statically enumerable - a class the
/// projector cannot enumerate is a class it cannot reliably remove.
pub fn colorblind_filter_class(name: &str) -> Option<String> {
    let normalized = name.to_lowercase();
    COLORBLIND_PROFILES
        .iter()
        .find(|p| **p == normalized)
        .map(|p| format!("{}{}", classes::FILTER_PREFIX, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tdah_patch_contents() {
        let patch = profile_patch("tdah");
        let expected = ConfigPatch {
            reading_guide: Some(true),
            focus_mode: Some(true),
            block_flashing: Some(true),
            easy_reading: Some(true),
            highlight_titles: Some(true),
            ..ConfigPatch::default()
        };
        assert_eq!(patch, expected);
    }

    #[test]
    fn test_every_known_profile_has_overrides() {
        for name in PROFILE_NAMES {
            assert_ne!(profile_patch(name), ConfigPatch::default(), "profile {name}");
        }
    }

    #[test]
    fn test_unknown_profile_yields_empty_patch() {
        assert_eq!(profile_patch("zen-mode"), ConfigPatch::default());
    }

    #[test]
    fn test_epilepsy_does_not_mention_dyslexia_font() {
        // Profile switching accumulates; the dyslexia->epilepsy sequence
        // relies on epilepsy leaving dyslexia_font undefined
        assert_eq!(profile_patch("epilepsy").dyslexia_font, None);
    }

    #[test]
    fn test_colorblind_filter_class_normalizes_case() {
        assert_eq!(
            colorblind_filter_class("Protanopia").as_deref(),
            Some("a11y-filter-protanopia")
        );
    }

    #[test]
    fn test_colorblind_filter_class_unknown_name() {
        assert_eq!(colorblind_filter_class("sepia"), None);
    }

    #[test]
    fn test_all_filter_classes_are_managed() {
        for name in COLORBLIND_PROFILES {
            let class = colorblind_filter_class(name).unwrap();
            assert!(
                classes::MANAGED.contains(&class.as_str()),
                "{class} missing from managed universe"
            );
        }
    }
}
