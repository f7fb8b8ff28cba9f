//! Observable accessibility-settings engine.
//!
//! A [`SettingsStore`] owns the configuration and exposes five total
//! mutation operations; every change notifies subscribers synchronously.
//! The projector maps the current configuration to a complete set of style
//! variables and marker classes and applies it to an injected
//! [`RenderTarget`] by full replacement, so re-applying any state is
//! idempotent and switching states leaves no residue.
//!
//! ```
//! use a11y_settings::{project, ConfigPatch, DocumentSurface, SettingsStore};
//!
//! let mut store = SettingsStore::new();
//! store.update(&ConfigPatch {
//!     font_size: Some(150),
//!     ..ConfigPatch::default()
//! });
//!
//! let mut surface = DocumentSurface::new();
//! project(&store.get()).apply(&mut surface);
//! assert_eq!(surface.style_var("--a11y-font-size"), Some("150%"));
//! ```

pub mod config;
pub mod constants;
pub mod persistence;
pub mod projector;
pub mod store;

pub use config::{
    colorblind_filter_class, profile_patch, AccessibilityConfig, ConfigPatch, TextAlignment,
    COLORBLIND_PROFILES, PROFILE_NAMES,
};
pub use projector::{project, DocumentSurface, Projection, RenderTarget, StyleVarOp};
pub use store::SettingsStore;
