//! Configuration model: the settings aggregate, partial patches, and the
//! built-in profile tables.

pub mod profile;
pub mod settings;

pub use profile::{colorblind_filter_class, profile_patch, COLORBLIND_PROFILES, PROFILE_NAMES};
pub use settings::{AccessibilityConfig, ConfigPatch, TextAlignment};
