//! The accessibility configuration aggregate and partial patches
//!
//! `AccessibilityConfig` is always a complete value - every field defined,
//! never partially constructed. Mutation happens exclusively through
//! `ConfigPatch::apply_to`, which overwrites only the fields a patch
//! defines and leaves everything else untouched.

use serde::{Deserialize, Serialize};

use crate::constants::classes;

/// Neutral defaults for the numeric fields.
///
/// A numeric field equal to its neutral default projects an explicit
/// style-variable clear instead of a value.
pub mod defaults {
    pub const FONT_SIZE: i32 = 100;
    pub const LINE_HEIGHT: i32 = 150;
    pub const LETTER_SPACING: i32 = 0;
    pub const WORD_SPACING: i32 = 0;
    pub const CONTRAST: i32 = 100;
    pub const BRIGHTNESS: i32 = 100;
    pub const SATURATION: i32 = 100;
}

/// Text alignment applied to the whole surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlignment {
    /// Parse a user-facing alignment name. Unknown strings yield `None`;
    /// callers treat that as "leave the current alignment unchanged".
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justify" => Some(Self::Justify),
            _ => None,
        }
    }

    /// The alignment marker class for this variant
    pub fn class(self) -> &'static str {
        match self {
            Self::Left => classes::ALIGN_LEFT,
            Self::Center => classes::ALIGN_CENTER,
            Self::Right => classes::ALIGN_RIGHT,
            Self::Justify => classes::ALIGN_JUSTIFY,
        }
    }
}

/// The complete settings aggregate
///
/// Numeric values are stored as given - no clamping, no range validation.
/// Range enforcement belongs to the input widgets, not the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityConfig {
    // Content metrics
    pub font_size: i32,
    pub line_height: i32,
    pub letter_spacing: i32,
    pub word_spacing: i32,

    // Color metrics
    pub contrast: i32,
    pub brightness: i32,
    pub saturation: i32,

    // Text layout
    pub text_alignment: TextAlignment,

    // Boolean toggles
    pub cursor_black: bool,
    pub cursor_white: bool,
    pub reading_guide: bool,
    pub magnifier: bool,
    pub block_flashing: bool,
    pub focus_mode: bool,
    pub dyslexia_font: bool,
    pub readable_font: bool,
    pub easy_reading: bool,
    pub reading_mode: bool,
    pub hide_images: bool,
    pub highlight_links: bool,
    pub highlight_titles: bool,
    pub mute_sounds: bool,
    pub high_brightness: bool,
    pub low_brightness: bool,
    pub high_contrast: bool,
    pub light_contrast: bool,
    pub inverted_contrast: bool,
    pub dark_contrast: bool,
    pub monochrome: bool,
    pub high_saturation: bool,
    pub low_saturation: bool,
    pub keyboard_navigation: bool,

    // Profile references (bookkeeping only - applying a profile merges its
    // patch; the name itself drives nothing except the colorblind filter)
    pub active_profile: Option<String>,
    pub active_colorblind_profile: Option<String>,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            font_size: defaults::FONT_SIZE,
            line_height: defaults::LINE_HEIGHT,
            letter_spacing: defaults::LETTER_SPACING,
            word_spacing: defaults::WORD_SPACING,
            contrast: defaults::CONTRAST,
            brightness: defaults::BRIGHTNESS,
            saturation: defaults::SATURATION,
            text_alignment: TextAlignment::Left,
            cursor_black: false,
            cursor_white: false,
            reading_guide: false,
            magnifier: false,
            block_flashing: false,
            focus_mode: false,
            dyslexia_font: false,
            readable_font: false,
            easy_reading: false,
            reading_mode: false,
            hide_images: false,
            highlight_links: false,
            highlight_titles: false,
            mute_sounds: false,
            high_brightness: false,
            low_brightness: false,
            high_contrast: false,
            light_contrast: false,
            inverted_contrast: false,
            dark_contrast: false,
            monochrome: false,
            high_saturation: false,
            low_saturation: false,
            keyboard_navigation: false,
            active_profile: None,
            active_colorblind_profile: None,
        }
    }
}

impl AccessibilityConfig {
    /// True when the configuration equals the default constant
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Every boolean toggle paired with its marker class, in fixed order
    pub fn toggle_classes(&self) -> [(bool, &'static str); 24] {
        [
            (self.cursor_black, classes::CURSOR_BLACK),
            (self.cursor_white, classes::CURSOR_WHITE),
            (self.reading_guide, classes::READING_GUIDE),
            (self.magnifier, classes::MAGNIFIER),
            (self.block_flashing, classes::BLOCK_FLASHING),
            (self.focus_mode, classes::FOCUS_MODE),
            (self.dyslexia_font, classes::DYSLEXIA_FONT),
            (self.readable_font, classes::READABLE_FONT),
            (self.easy_reading, classes::EASY_READING),
            (self.reading_mode, classes::READING_MODE),
            (self.hide_images, classes::HIDE_IMAGES),
            (self.highlight_links, classes::HIGHLIGHT_LINKS),
            (self.highlight_titles, classes::HIGHLIGHT_TITLES),
            (self.mute_sounds, classes::MUTE_SOUNDS),
            (self.high_brightness, classes::HIGH_BRIGHTNESS),
            (self.low_brightness, classes::LOW_BRIGHTNESS),
            (self.high_contrast, classes::HIGH_CONTRAST),
            (self.light_contrast, classes::LIGHT_CONTRAST),
            (self.inverted_contrast, classes::INVERTED_CONTRAST),
            (self.dark_contrast, classes::DARK_CONTRAST),
            (self.monochrome, classes::MONOCHROME),
            (self.high_saturation, classes::HIGH_SATURATION),
            (self.low_saturation, classes::LOW_SATURATION),
            (self.keyboard_navigation, classes::KEYBOARD_NAVIGATION),
        ]
    }
}

/// A partial configuration: every field optional
///
/// Shallow-merge semantics - a defined field overwrites the current value,
/// an undefined field is untouched. Shared by `update`, profile application,
/// and the scoped resets, so there is exactly one merge path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigPatch {
    pub font_size: Option<i32>,
    pub line_height: Option<i32>,
    pub letter_spacing: Option<i32>,
    pub word_spacing: Option<i32>,
    pub contrast: Option<i32>,
    pub brightness: Option<i32>,
    pub saturation: Option<i32>,
    pub text_alignment: Option<TextAlignment>,
    pub cursor_black: Option<bool>,
    pub cursor_white: Option<bool>,
    pub reading_guide: Option<bool>,
    pub magnifier: Option<bool>,
    pub block_flashing: Option<bool>,
    pub focus_mode: Option<bool>,
    pub dyslexia_font: Option<bool>,
    pub readable_font: Option<bool>,
    pub easy_reading: Option<bool>,
    pub reading_mode: Option<bool>,
    pub hide_images: Option<bool>,
    pub highlight_links: Option<bool>,
    pub highlight_titles: Option<bool>,
    pub mute_sounds: Option<bool>,
    pub high_brightness: Option<bool>,
    pub low_brightness: Option<bool>,
    pub high_contrast: Option<bool>,
    pub light_contrast: Option<bool>,
    pub inverted_contrast: Option<bool>,
    pub dark_contrast: Option<bool>,
    pub monochrome: Option<bool>,
    pub high_saturation: Option<bool>,
    pub low_saturation: Option<bool>,
    pub keyboard_navigation: Option<bool>,
    pub active_profile: Option<String>,
    pub active_colorblind_profile: Option<String>,
}

impl ConfigPatch {
    /// Overwrite `config` with every field this patch defines.
    /// Fields left `None` are not touched.
    pub fn apply_to(&self, config: &mut AccessibilityConfig) {
        // Copy fields merge through one macro so the field list exists once
        macro_rules! merge {
            ($($field:ident),* $(,)?) => {
                $( if let Some(v) = self.$field { config.$field = v; } )*
            };
        }
        merge!(
            font_size,
            line_height,
            letter_spacing,
            word_spacing,
            contrast,
            brightness,
            saturation,
            text_alignment,
            cursor_black,
            cursor_white,
            reading_guide,
            magnifier,
            block_flashing,
            focus_mode,
            dyslexia_font,
            readable_font,
            easy_reading,
            reading_mode,
            hide_images,
            highlight_links,
            highlight_titles,
            mute_sounds,
            high_brightness,
            low_brightness,
            high_contrast,
            light_contrast,
            inverted_contrast,
            dark_contrast,
            monochrome,
            high_saturation,
            low_saturation,
            keyboard_navigation,
        );

        // Reference fields: a patch can set a name but never clear one.
        // Only reset_all drops the references, by replacing the whole value.
        if let Some(name) = &self.active_profile {
            config.active_profile = Some(name.clone());
        }
        if let Some(name) = &self.active_colorblind_profile {
            config.active_colorblind_profile = Some(name.clone());
        }
    }

    /// Patch restoring the content-metric fields to their defaults
    pub fn content_defaults() -> Self {
        Self {
            font_size: Some(defaults::FONT_SIZE),
            letter_spacing: Some(defaults::LETTER_SPACING),
            line_height: Some(defaults::LINE_HEIGHT),
            word_spacing: Some(defaults::WORD_SPACING),
            ..Self::default()
        }
    }

    /// Patch restoring the three color sliders to their defaults.
    /// Deliberately narrow: the saturation/contrast toggles and the
    /// colorblind reference are not part of this patch.
    pub fn color_defaults() -> Self {
        Self {
            contrast: Some(defaults::CONTRAST),
            saturation: Some(defaults::SATURATION),
            brightness: Some(defaults::BRIGHTNESS),
            ..Self::default()
        }
    }
}
