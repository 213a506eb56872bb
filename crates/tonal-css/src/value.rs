//! The color-value parser — one declaration value in, one hex out.
//!
//! Recognizes literal hex (`#abc`, `#aabbcc`), `rgb()`/`rgba()`,
//! `hsl()`/`hsla()`, and a fixed dictionary of common CSS named colors.
//! `var(...)` references are explicitly refused — resolving them needs a
//! second pass the pipeline deliberately does not do — and anything else
//! is unparseable. Unparseable means `None`, never an error: the caller
//! skips the fragment and moves on.

use std::sync::LazyLock;

use regex::Regex;
use tonal_color::{Hsl, Rgb, normalize_hex};

static HEX_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("static pattern")
});

static RGB_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)(?:\s*,\s*[\d.]+)?\s*\)")
        .expect("static pattern")
});

static HSL_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"hsla?\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%(?:\s*,\s*[\d.]+)?\s*\)")
        .expect("static pattern")
});

/// Common CSS color keywords and their hex values.
const NAMED_COLORS: [(&str, &str); 30] = [
    ("red", "#ff0000"),
    ("green", "#008000"),
    ("blue", "#0000ff"),
    ("white", "#ffffff"),
    ("black", "#000000"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("silver", "#c0c0c0"),
    ("maroon", "#800000"),
    ("navy", "#000080"),
    ("aqua", "#00ffff"),
    ("teal", "#008080"),
    ("lime", "#00ff00"),
    ("olive", "#808000"),
    ("yellow", "#ffff00"),
    ("fuchsia", "#ff00ff"),
    ("purple", "#800080"),
    ("orange", "#ffa500"),
    ("pink", "#ffc0cb"),
    ("brown", "#a52a2a"),
    ("cyan", "#00ffff"),
    ("magenta", "#ff00ff"),
    ("tan", "#d2b48c"),
    ("beige", "#f5f5dc"),
    ("gold", "#ffd700"),
    ("coral", "#ff7f50"),
    ("salmon", "#fa8072"),
    ("khaki", "#f0e68c"),
    ("violet", "#ee82ee"),
    ("indigo", "#4b0082"),
];

/// Resolve a declaration value to a canonical hex color.
///
/// Returns `None` for `var(...)` references and anything else the
/// parser does not recognize.
#[must_use]
pub fn parse_color_value(value: &str) -> Option<String> {
    let clean = value.trim();

    if let Some(m) = HEX_VALUE.find(clean) {
        return Some(normalize_hex(m.as_str()));
    }

    if let Some(caps) = RGB_VALUE.captures(clean) {
        let r: f64 = caps[1].parse().ok()?;
        let g: f64 = caps[2].parse().ok()?;
        let b: f64 = caps[3].parse().ok()?;
        return Some(Rgb::new(r, g, b).to_hex());
    }

    if let Some(caps) = HSL_VALUE.captures(clean) {
        let h: f64 = caps[1].parse().ok()?;
        let s: f64 = caps[2].parse().ok()?;
        let l: f64 = caps[3].parse().ok()?;
        return Some(Hsl::new(h, s, l).to_hex());
    }

    let lower = clean.to_lowercase();
    if let Some((_, hex)) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
        return Some((*hex).to_owned());
    }

    // var(...) and everything else: unparseable by contract.
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
