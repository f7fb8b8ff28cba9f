//! Settings store
//!
//! Owns the configuration value and exposes the five mutation operations
//! plus a read accessor. Every mutation is a total function - no operation
//! can fail, return an error, or panic on any input, so UI interaction is
//! never interrupted. Subscribers are notified synchronously after each
//! mutation, once per operation.

use tracing::{debug, info};

use crate::config::profile::profile_patch;
use crate::config::settings::{AccessibilityConfig, ConfigPatch};
use crate::persistence;

type Subscriber = Box<dyn FnMut(&AccessibilityConfig)>;

/// The single writer of the configuration.
///
/// Callers only ever see owned snapshots via [`get`](Self::get); no mutable
/// reference to the live value escapes, so all mutation goes through the
/// operations below by construction.
pub struct SettingsStore {
    config: AccessibilityConfig,
    subscribers: Vec<Subscriber>,
}

impl SettingsStore {
    /// Create a store holding the default configuration.
    ///
    /// Always starts from the default constant: any settings file persisted
    /// by earlier releases is discarded here, deliberately - configuration
    /// does not survive a restart.
    pub fn new() -> Self {
        persistence::discard_legacy_config();
        Self {
            config: AccessibilityConfig::default(),
            subscribers: Vec::new(),
        }
    }

    /// Register a subscriber, invoked synchronously after every mutation
    pub fn subscribe(&mut self, subscriber: Subscriber) {
        self.subscribers.push(subscriber);
    }

    /// Owned snapshot of the current configuration
    pub fn get(&self) -> AccessibilityConfig {
        self.config.clone()
    }

    /// Shallow-merge a patch: defined fields overwrite, absent fields stay.
    /// Values are stored as given - no range validation.
    pub fn update(&mut self, patch: &ConfigPatch) {
        patch.apply_to(&mut self.config);
        debug!(patch = ?patch, "configuration updated");
        self.notify();
    }

    /// Replace the whole configuration with the default constant
    pub fn reset_all(&mut self) {
        self.config = AccessibilityConfig::default();
        info!("configuration reset to defaults");
        self.notify();
    }

    /// Restore font size, letter spacing, line height and word spacing to
    /// their defaults; everything else stays as is
    pub fn reset_content(&mut self) {
        ConfigPatch::content_defaults().apply_to(&mut self.config);
        debug!("content metrics reset");
        self.notify();
    }

    /// Restore the contrast, saturation and brightness sliders to their
    /// defaults. The saturation/contrast toggles and the colorblind
    /// reference are intentionally left alone - this resets the three
    /// numeric sliders, nothing more.
    pub fn reset_color(&mut self) {
        ConfigPatch::color_defaults().apply_to(&mut self.config);
        debug!("color metrics reset");
        self.notify();
    }

    /// Merge the named profile's overrides and record the name.
    ///
    /// Unknown names contribute an empty patch but are still recorded.
    /// Fields a previous profile turned on survive unless the new profile
    /// mentions them - profile application accumulates, it does not swap.
    pub fn apply_profile(&mut self, name: &str) {
        let mut patch = profile_patch(name);
        patch.active_profile = Some(name.to_string());
        patch.apply_to(&mut self.config);
        info!(profile = %name, "applied accessibility profile");
        self.notify();
    }

    /// Select a colorblind filter by name.
    ///
    /// Single-valued replacement: the new name fully displaces the previous
    /// one, so filters are mutually exclusive by construction. No other
    /// field changes.
    pub fn apply_colorblind_profile(&mut self, name: &str) {
        self.config.active_colorblind_profile = Some(name.to_string());
        info!(profile = %name, "applied colorblind profile");
        self.notify();
    }

    fn notify(&mut self) {
        let snapshot = self.config.clone();
        for subscriber in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_store_starts_at_default() {
        let store = SettingsStore::new();
        assert!(store.get().is_default());
    }

    #[test]
    fn test_update_merges_patch() {
        let mut store = SettingsStore::new();
        store.update(&ConfigPatch {
            font_size: Some(150),
            cursor_black: Some(true),
            ..ConfigPatch::default()
        });

        let expected = AccessibilityConfig {
            font_size: 150,
            cursor_black: true,
            ..AccessibilityConfig::default()
        };
        assert_eq!(store.get(), expected);
    }

    #[test]
    fn test_get_returns_pure_fold_of_operations() {
        // Replaying the same operations against a bare config must land on
        // the same value: the store carries no hidden state
        let mut store = SettingsStore::new();
        let patch_a = ConfigPatch {
            font_size: Some(130),
            hide_images: Some(true),
            ..ConfigPatch::default()
        };
        let patch_b = ConfigPatch {
            contrast: Some(140),
            ..ConfigPatch::default()
        };
        store.update(&patch_a);
        store.apply_profile("dyslexia");
        store.update(&patch_b);
        store.reset_content();

        let mut folded = AccessibilityConfig::default();
        patch_a.apply_to(&mut folded);
        let mut dyslexia = profile_patch("dyslexia");
        dyslexia.active_profile = Some("dyslexia".to_string());
        dyslexia.apply_to(&mut folded);
        patch_b.apply_to(&mut folded);
        ConfigPatch::content_defaults().apply_to(&mut folded);

        assert_eq!(store.get(), folded);
    }

    #[test]
    fn test_reset_all_restores_default_constant() {
        let mut store = SettingsStore::new();
        store.apply_profile("visual-impairment");
        store.apply_colorblind_profile("tritanopia");
        store.update(&ConfigPatch {
            monochrome: Some(true),
            brightness: Some(30),
            ..ConfigPatch::default()
        });

        store.reset_all();
        assert_eq!(store.get(), AccessibilityConfig::default());

        // Idempotent
        store.reset_all();
        assert_eq!(store.get(), AccessibilityConfig::default());
    }

    #[test]
    fn test_reset_content_changes_only_content_fields() {
        let mut store = SettingsStore::new();
        store.update(&ConfigPatch {
            font_size: Some(160),
            letter_spacing: Some(3),
            line_height: Some(200),
            word_spacing: Some(6),
            contrast: Some(70),
            monochrome: Some(true),
            active_profile: Some("custom".to_string()),
            ..ConfigPatch::default()
        });
        let before = store.get();

        store.reset_content();
        let after = store.get();

        assert_eq!(after.font_size, 100);
        assert_eq!(after.letter_spacing, 0);
        assert_eq!(after.line_height, 150);
        assert_eq!(after.word_spacing, 0);

        // Every other field byte-for-byte untouched
        let expected = AccessibilityConfig {
            font_size: 100,
            letter_spacing: 0,
            line_height: 150,
            word_spacing: 0,
            ..before
        };
        assert_eq!(after, expected);
    }

    #[test]
    fn test_reset_color_leaves_toggles_and_references() {
        let mut store = SettingsStore::new();
        store.update(&ConfigPatch {
            contrast: Some(180),
            saturation: Some(20),
            brightness: Some(60),
            high_saturation: Some(true),
            dark_contrast: Some(true),
            ..ConfigPatch::default()
        });
        store.apply_colorblind_profile("deuteranopia");
        let before = store.get();

        store.reset_color();
        let after = store.get();

        assert_eq!(after.contrast, 100);
        assert_eq!(after.saturation, 100);
        assert_eq!(after.brightness, 100);
        // Narrow by design: toggles and both references survive
        let expected = AccessibilityConfig {
            contrast: 100,
            saturation: 100,
            brightness: 100,
            ..before
        };
        assert_eq!(after, expected);
        assert!(after.high_saturation);
        assert!(after.dark_contrast);
        assert_eq!(after.active_colorblind_profile.as_deref(), Some("deuteranopia"));
    }

    #[test]
    fn test_apply_profile_tdah_scenario() {
        let mut store = SettingsStore::new();
        store.apply_profile("tdah");

        let expected = AccessibilityConfig {
            reading_guide: true,
            focus_mode: true,
            block_flashing: true,
            easy_reading: true,
            highlight_titles: true,
            active_profile: Some("tdah".to_string()),
            ..AccessibilityConfig::default()
        };
        assert_eq!(store.get(), expected);
    }

    #[test]
    fn test_profile_switch_accumulates() {
        // Pinned behavior: epilepsy does not mention dyslexia_font, so the
        // flag survives the switch
        let mut store = SettingsStore::new();
        store.apply_profile("dyslexia");
        store.apply_profile("epilepsy");

        let config = store.get();
        assert!(config.dyslexia_font);
        assert!(config.block_flashing);
        assert_eq!(config.active_profile.as_deref(), Some("epilepsy"));
    }

    #[test]
    fn test_unknown_profile_recorded_with_empty_patch() {
        let mut store = SettingsStore::new();
        store.apply_profile("does-not-exist");

        let expected = AccessibilityConfig {
            active_profile: Some("does-not-exist".to_string()),
            ..AccessibilityConfig::default()
        };
        assert_eq!(store.get(), expected);
    }

    #[test]
    fn test_colorblind_profile_replaces_previous() {
        let mut store = SettingsStore::new();
        store.apply_colorblind_profile("protanopia");
        store.apply_colorblind_profile("tritanopia");

        let config = store.get();
        assert_eq!(config.active_colorblind_profile.as_deref(), Some("tritanopia"));
        // Nothing else moved
        let expected = AccessibilityConfig {
            active_colorblind_profile: Some("tritanopia".to_string()),
            ..AccessibilityConfig::default()
        };
        assert_eq!(config, expected);
    }

    #[test]
    fn test_subscribers_notified_once_per_operation() {
        let mut store = SettingsStore::new();
        let seen: Rc<RefCell<Vec<AccessibilityConfig>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(Box::new(move |config| {
            sink.borrow_mut().push(config.clone());
        }));

        store.apply_profile("learning");
        store.reset_all();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].active_profile.as_deref(), Some("learning"));
        assert!(seen[0].easy_reading);
        assert!(seen[1].is_default());
    }
}
