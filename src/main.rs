#![forbid(unsafe_code)]

//! Interactive driver for the settings engine.
//!
//! Reads line-oriented commands from stdin (or a script file), mutates the
//! store, and shows the resulting configuration snapshot and surface state.
//! Every store change re-projects onto an in-memory document surface via a
//! subscriber, the same wiring a real host would use.

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use a11y_settings::{
    project, ConfigPatch, DocumentSurface, SettingsStore, TextAlignment, COLORBLIND_PROFILES,
    PROFILE_NAMES,
};

#[derive(Parser)]
#[command(name = "a11y-settings", about = "Accessibility settings engine demo")]
struct Cli {
    /// Log level: trace, debug, info, warn, error
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Read commands from a script file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut store = SettingsStore::new();
    let surface = Rc::new(RefCell::new(DocumentSurface::new()));

    // Re-project the whole state on every change - full replacement, never a diff
    let target = Rc::clone(&surface);
    store.subscribe(Box::new(move |config| {
        project(config).apply(&mut *target.borrow_mut());
    }));

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => {
            info!("reading commands from stdin (type 'help' for a list)");
            Box::new(BufReader::new(io::stdin()))
        }
    };

    for line in reader.lines() {
        let line = line.context("failed to read command line")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !run_command(line, &mut store, &surface)? {
            break;
        }
    }

    Ok(())
}

/// Execute one command. Returns false on `quit`.
fn run_command(
    line: &str,
    store: &mut SettingsStore,
    surface: &Rc<RefCell<DocumentSurface>>,
) -> Result<bool> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let args: Vec<&str> = parts.collect();

    match (command, args.as_slice()) {
        ("set", [field, value]) => match build_patch(field, value) {
            Some(patch) => store.update(&patch),
            None => warn!(field = %field, value = %value, "unrecognized field or value"),
        },
        ("profile", [name]) => {
            if !PROFILE_NAMES.contains(name) {
                warn!(profile = %name, "unknown profile name, applying empty patch");
            }
            store.apply_profile(name);
        }
        ("colorblind", [name]) => {
            if !COLORBLIND_PROFILES.contains(&name.to_lowercase().as_str()) {
                warn!(profile = %name, "unknown colorblind profile, no filter will project");
            }
            store.apply_colorblind_profile(name);
        }
        ("reset", ["all"]) => store.reset_all(),
        ("reset", ["content"]) => store.reset_content(),
        ("reset", ["color"]) => store.reset_color(),
        ("show", []) => {
            let json = serde_json::to_string_pretty(&store.get())
                .context("failed to serialize configuration snapshot")?;
            println!("{json}");
        }
        ("surface", []) => {
            let surface = surface.borrow();
            for (name, value) in surface.style_vars() {
                println!("{name}: {value}");
            }
            for class in surface.classes() {
                println!(".{class}");
            }
        }
        ("help", []) => print_help(),
        ("quit" | "exit", []) => return Ok(false),
        _ => warn!(command = %line, "unrecognized command (try 'help')"),
    }
    Ok(true)
}

/// Build a single-field patch from a `set` command.
///
/// Unknown fields or unparsable values yield `None` - the driver warns and
/// carries on, interaction is never interrupted.
fn build_patch(field: &str, value: &str) -> Option<ConfigPatch> {
    let mut patch = ConfigPatch::default();
    match field {
        "font-size" => patch.font_size = Some(value.parse().ok()?),
        "line-height" => patch.line_height = Some(value.parse().ok()?),
        "letter-spacing" => patch.letter_spacing = Some(value.parse().ok()?),
        "word-spacing" => patch.word_spacing = Some(value.parse().ok()?),
        "contrast" => patch.contrast = Some(value.parse().ok()?),
        "brightness" => patch.brightness = Some(value.parse().ok()?),
        "saturation" => patch.saturation = Some(value.parse().ok()?),
        "alignment" => patch.text_alignment = Some(TextAlignment::parse(value)?),
        _ => {
            let enabled = parse_toggle_value(value)?;
            match field {
                "cursor-black" => patch.cursor_black = Some(enabled),
                "cursor-white" => patch.cursor_white = Some(enabled),
                "reading-guide" => patch.reading_guide = Some(enabled),
                "magnifier" => patch.magnifier = Some(enabled),
                "block-flashing" => patch.block_flashing = Some(enabled),
                "focus-mode" => patch.focus_mode = Some(enabled),
                "dyslexia-font" => patch.dyslexia_font = Some(enabled),
                "readable-font" => patch.readable_font = Some(enabled),
                "easy-reading" => patch.easy_reading = Some(enabled),
                "reading-mode" => patch.reading_mode = Some(enabled),
                "hide-images" => patch.hide_images = Some(enabled),
                "highlight-links" => patch.highlight_links = Some(enabled),
                "highlight-titles" => patch.highlight_titles = Some(enabled),
                "mute-sounds" => patch.mute_sounds = Some(enabled),
                "high-brightness" => patch.high_brightness = Some(enabled),
                "low-brightness" => patch.low_brightness = Some(enabled),
                "high-contrast" => patch.high_contrast = Some(enabled),
                "light-contrast" => patch.light_contrast = Some(enabled),
                "inverted-contrast" => patch.inverted_contrast = Some(enabled),
                "dark-contrast" => patch.dark_contrast = Some(enabled),
                "monochrome" => patch.monochrome = Some(enabled),
                "high-saturation" => patch.high_saturation = Some(enabled),
                "low-saturation" => patch.low_saturation = Some(enabled),
                "keyboard-navigation" => patch.keyboard_navigation = Some(enabled),
                _ => return None,
            }
        }
    }
    Some(patch)
}

fn parse_toggle_value(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "1" => Some(true),
        "off" | "false" | "0" => Some(false),
        _ => None,
    }
}

fn print_help() {
    println!("commands:");
    println!("  set <field> <value>    e.g. 'set font-size 150', 'set reading-guide on',");
    println!("                         'set alignment justify'");
    println!("  profile <name>         one of: {}", PROFILE_NAMES.join(", "));
    println!("  colorblind <name>      one of: {}", COLORBLIND_PROFILES.join(", "));
    println!("  reset all|content|color");
    println!("  show                   print the configuration snapshot as JSON");
    println!("  surface                print projected style variables and classes");
    println!("  quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_patch_numeric_field() {
        let patch = build_patch("font-size", "150").unwrap();
        assert_eq!(patch.font_size, Some(150));
    }

    #[test]
    fn test_build_patch_toggle_field() {
        let patch = build_patch("reading-guide", "on").unwrap();
        assert_eq!(patch.reading_guide, Some(true));
    }

    #[test]
    fn test_build_patch_alignment() {
        let patch = build_patch("alignment", "justify").unwrap();
        assert_eq!(patch.text_alignment, Some(TextAlignment::Justify));
    }

    #[test]
    fn test_build_patch_rejects_unknown_field() {
        assert_eq!(build_patch("zoom", "120"), None);
    }

    #[test]
    fn test_build_patch_rejects_bad_toggle_value() {
        assert_eq!(build_patch("monochrome", "maybe"), None);
    }
}
