//! Application-wide constants
//!
//! Single source of truth for the names the engine projects onto the shared
//! rendering surface: the managed style-variable names, the managed class
//! universe, and the legacy storage layout discarded at startup.

/// Configuration storage constants (legacy, discard-only)
pub mod storage {
    /// Directory under the platform config dir used by earlier releases
    pub const APP_DIR: &str = "a11y-settings";

    /// Settings file written by earlier releases; removed at initialization
    pub const LEGACY_FILE: &str = "settings.json";
}

/// Managed style-variable names (one per numeric configuration field)
pub mod style_vars {
    pub const FONT_SIZE: &str = "--a11y-font-size";
    pub const LINE_HEIGHT: &str = "--a11y-line-height";
    pub const LETTER_SPACING: &str = "--a11y-letter-spacing";
    pub const WORD_SPACING: &str = "--a11y-word-spacing";
    pub const CONTRAST: &str = "--a11y-contrast";
    pub const BRIGHTNESS: &str = "--a11y-brightness";
    pub const SATURATION: &str = "--a11y-saturation";

    /// Every style variable the projector manages, in projection order.
    /// Each one is either set or explicitly cleared on every application.
    pub const ALL: [&str; 7] = [
        FONT_SIZE,
        LINE_HEIGHT,
        LETTER_SPACING,
        WORD_SPACING,
        CONTRAST,
        BRIGHTNESS,
        SATURATION,
    ];
}

/// Managed class names
pub mod classes {
    // Toggle classes (one per boolean flag)
    pub const CURSOR_BLACK: &str = "a11y-cursor-black";
    pub const CURSOR_WHITE: &str = "a11y-cursor-white";
    pub const READING_GUIDE: &str = "a11y-reading-guide";
    pub const MAGNIFIER: &str = "a11y-magnifier";
    pub const BLOCK_FLASHING: &str = "a11y-block-flashing";
    pub const FOCUS_MODE: &str = "a11y-focus-mode";
    pub const DYSLEXIA_FONT: &str = "a11y-dyslexia-font";
    pub const READABLE_FONT: &str = "a11y-readable-font";
    pub const EASY_READING: &str = "a11y-easy-reading";
    pub const READING_MODE: &str = "a11y-reading-mode";
    pub const HIDE_IMAGES: &str = "a11y-hide-images";
    pub const HIGHLIGHT_LINKS: &str = "a11y-highlight-links";
    pub const HIGHLIGHT_TITLES: &str = "a11y-highlight-titles";
    pub const MUTE_SOUNDS: &str = "a11y-mute-sounds";
    pub const HIGH_BRIGHTNESS: &str = "a11y-high-brightness";
    pub const LOW_BRIGHTNESS: &str = "a11y-low-brightness";
    pub const HIGH_CONTRAST: &str = "a11y-high-contrast";
    pub const LIGHT_CONTRAST: &str = "a11y-light-contrast";
    pub const INVERTED_CONTRAST: &str = "a11y-inverted-contrast";
    pub const DARK_CONTRAST: &str = "a11y-dark-contrast";
    pub const MONOCHROME: &str = "a11y-monochrome";
    pub const HIGH_SATURATION: &str = "a11y-high-saturation";
    pub const LOW_SATURATION: &str = "a11y-low-saturation";
    pub const KEYBOARD_NAVIGATION: &str = "a11y-keyboard-navigation";

    // Alignment classes (exactly one is always present)
    pub const ALIGN_LEFT: &str = "a11y-align-left";
    pub const ALIGN_CENTER: &str = "a11y-align-center";
    pub const ALIGN_RIGHT: &str = "a11y-align-right";
    pub const ALIGN_JUSTIFY: &str = "a11y-align-justify";

    /// Prefix for colorblind filter classes (`a11y-filter-protanopia` etc.)
    pub const FILTER_PREFIX: &str = "a11y-filter-";

    /// The complete managed class universe: 24 toggle classes, 4 alignment
    /// classes, 6 colorblind filter classes. Full-replacement application
    /// removes all of these before re-adding the freshly computed set, so
    /// nothing outside this list is ever touched.
    pub const MANAGED: [&str; 34] = [
        CURSOR_BLACK,
        CURSOR_WHITE,
        READING_GUIDE,
        MAGNIFIER,
        BLOCK_FLASHING,
        FOCUS_MODE,
        DYSLEXIA_FONT,
        READABLE_FONT,
        EASY_READING,
        READING_MODE,
        HIDE_IMAGES,
        HIGHLIGHT_LINKS,
        HIGHLIGHT_TITLES,
        MUTE_SOUNDS,
        HIGH_BRIGHTNESS,
        LOW_BRIGHTNESS,
        HIGH_CONTRAST,
        LIGHT_CONTRAST,
        INVERTED_CONTRAST,
        DARK_CONTRAST,
        MONOCHROME,
        HIGH_SATURATION,
        LOW_SATURATION,
        KEYBOARD_NAVIGATION,
        ALIGN_LEFT,
        ALIGN_CENTER,
        ALIGN_RIGHT,
        ALIGN_JUSTIFY,
        "a11y-filter-deuteranopia",
        "a11y-filter-deuteranomaly",
        "a11y-filter-protanopia",
        "a11y-filter-tritanopia",
        "a11y-filter-tritanomaly",
        "a11y-filter-achromatopsia",
    ];
}
