//! Effect projector
//!
//! Pure mapping from a configuration to the complete set of style-variable
//! operations and marker classes, plus the full-replacement application
//! step. The projection is recomputed from scratch on every change and
//! reasserts every managed name - set or explicitly cleared - so no
//! sequence of prior states can leave residue on the surface. Re-applying
//! the same projection is a no-op by construction: there is no retained
//! previous output to diff against.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::profile::colorblind_filter_class;
use crate::config::settings::{defaults, AccessibilityConfig};
use crate::constants::{classes, style_vars};

/// One managed style variable, either asserted to a value or cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleVarOp {
    Set(&'static str, String),
    Clear(&'static str),
}

impl StyleVarOp {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Set(name, _) => name,
            Self::Clear(name) => name,
        }
    }
}

/// Complete projection of one configuration: all 7 style variables plus the
/// full class set. Never a delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub style_vars: Vec<StyleVarOp>,
    pub classes: BTreeSet<String>,
}

/// The shared rendering surface, injected rather than ambient.
///
/// `set_class_set` replaces the *managed* subset wholesale: implementations
/// remove every class in [`classes::MANAGED`] and then add exactly the
/// given set, leaving classes outside the universe alone.
pub trait RenderTarget {
    fn set_style_var(&mut self, name: &str, value: &str);
    fn clear_style_var(&mut self, name: &str);
    fn set_class_set(&mut self, class_set: &BTreeSet<String>);
}

fn percent(name: &'static str, value: i32, neutral: i32) -> StyleVarOp {
    if value != neutral {
        StyleVarOp::Set(name, format!("{value}%"))
    } else {
        StyleVarOp::Clear(name)
    }
}

fn pixels(name: &'static str, value: i32, neutral: i32) -> StyleVarOp {
    if value != neutral {
        StyleVarOp::Set(name, format!("{value}px"))
    } else {
        StyleVarOp::Clear(name)
    }
}

/// Compute the projection for a configuration.
///
/// Pure function of the current value alone. Each numeric field emits a set
/// when it differs from its neutral default and an explicit clear when it
/// does not - "unchanged" is still re-asserted at application time.
pub fn project(config: &AccessibilityConfig) -> Projection {
    let style_vars = vec![
        percent(style_vars::FONT_SIZE, config.font_size, defaults::FONT_SIZE),
        percent(style_vars::LINE_HEIGHT, config.line_height, defaults::LINE_HEIGHT),
        pixels(style_vars::LETTER_SPACING, config.letter_spacing, defaults::LETTER_SPACING),
        pixels(style_vars::WORD_SPACING, config.word_spacing, defaults::WORD_SPACING),
        percent(style_vars::CONTRAST, config.contrast, defaults::CONTRAST),
        percent(style_vars::BRIGHTNESS, config.brightness, defaults::BRIGHTNESS),
        percent(style_vars::SATURATION, config.saturation, defaults::SATURATION),
    ];

    let mut class_set = BTreeSet::new();
    for (enabled, class) in config.toggle_classes() {
        if enabled {
            class_set.insert(class.to_string());
        }
    }
    class_set.insert(config.text_alignment.class().to_string());
    if let Some(name) = &config.active_colorblind_profile {
        // Unrecognized filter names contribute no class
        if let Some(filter) = colorblind_filter_class(name) {
            class_set.insert(filter);
        }
    }

    Projection {
        style_vars,
        classes: class_set,
    }
}

impl Projection {
    /// Apply this projection to a target by full replacement.
    ///
    /// Every managed style variable is either set or cleared, and the
    /// managed class subset is replaced with the freshly computed set.
    pub fn apply(&self, target: &mut dyn RenderTarget) {
        for op in &self.style_vars {
            match op {
                StyleVarOp::Set(name, value) => target.set_style_var(name, value),
                StyleVarOp::Clear(name) => target.clear_style_var(name),
            }
        }
        target.set_class_set(&self.classes);
    }
}

/// In-memory model of the shared surface.
///
/// Holds style variables and the full class list, including classes other
/// components own; only the managed universe is ever rewritten. Backs the
/// demo binary and headless testing.
#[derive(Debug, Default)]
pub struct DocumentSurface {
    style_vars: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

impl DocumentSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style_var(&self, name: &str) -> Option<&str> {
        self.style_vars.get(name).map(String::as_str)
    }

    pub fn style_vars(&self) -> &BTreeMap<String, String> {
        &self.style_vars
    }

    pub fn classes(&self) -> &BTreeSet<String> {
        &self.classes
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Add a class the projector does not manage (another component's)
    pub fn add_foreign_class(&mut self, name: &str) {
        self.classes.insert(name.to_string());
    }
}

impl RenderTarget for DocumentSurface {
    fn set_style_var(&mut self, name: &str, value: &str) {
        self.style_vars.insert(name.to_string(), value.to_string());
    }

    fn clear_style_var(&mut self, name: &str) {
        self.style_vars.remove(name);
    }

    fn set_class_set(&mut self, class_set: &BTreeSet<String>) {
        for managed in classes::MANAGED {
            self.classes.remove(managed);
        }
        self.classes.extend(class_set.iter().cloned());
    }
}
