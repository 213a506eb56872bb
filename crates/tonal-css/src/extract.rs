//! The extraction stages — ordered rules over normalized stylesheet text.
//!
//! Each stage is one bounded pattern: it scans the normalized text,
//! resolves candidate values through the color-value parser, and emits
//! `(identifier, hex, origin)` matches. Stage order doubles as the
//! precedence order the grouping pass relies on: variable declarations
//! (`--x`, `$x`) outrank generic property and utility-class matches.
//!
//! All patterns run on the non-backtracking `regex` engine over text the
//! scanner has already flattened, so cost stays linear even on
//! adversarial input.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::scan::normalize_css;
use crate::value::parse_color_value;

/// Where a match came from — the precedence signal for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOrigin {
    /// `--custom-property: value;`
    CssVar,
    /// `$sass-variable: value;` or a Sass map entry.
    SassVar,
    /// A color-bearing declaration inside an ordinary rule.
    Property,
    /// A Tailwind/Bootstrap-style utility class.
    ClassBased,
}

impl MatchOrigin {
    /// Variable declarations are authoritative: they may overwrite an
    /// already-recorded family + shade, other origins may not.
    #[must_use]
    pub const fn is_authoritative(self) -> bool {
        matches!(self, Self::CssVar | Self::SassVar)
    }
}

/// One extracted identifier with its resolved hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMatch {
    pub name: String,
    pub hex: String,
    pub origin: MatchOrigin,
}

type Stage = fn(&str, &mut Vec<ColorMatch>);

/// The extraction pipeline, in precedence order.
const PIPELINE: [(&str, Stage); 6] = [
    ("css-var", extract_css_variables),
    ("sass-var", extract_sass_variables),
    ("sass-map", extract_sass_maps),
    ("property", extract_rule_properties),
    ("utility-class", extract_utility_classes),
    ("css-in-js", extract_css_in_js),
];

/// Run every extraction stage over raw stylesheet text.
///
/// Never fails; a stylesheet with nothing recognizable yields an empty
/// vector.
#[must_use]
pub fn scan_matches(css: &str) -> Vec<ColorMatch> {
    let normalized = normalize_css(css);
    let mut matches = Vec::new();

    for (label, stage) in PIPELINE {
        let before = matches.len();
        stage(&normalized, &mut matches);
        debug!(stage = label, found = matches.len() - before, "extraction stage done");
    }

    matches
}

// ─── Stage: CSS custom properties ───────────────────────────────────────────

static CSS_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"--([a-zA-Z][\w-]*)\s*:\s*([^;{}]+?)\s*(?:[;}]|$)").expect("static pattern")
});

fn extract_css_variables(css: &str, out: &mut Vec<ColorMatch>) {
    for caps in CSS_VAR.captures_iter(css) {
        if let Some(hex) = parse_color_value(&caps[2]) {
            out.push(ColorMatch {
                name: caps[1].to_owned(),
                hex,
                origin: MatchOrigin::CssVar,
            });
        }
    }
}

// ─── Stage: Sass variables ──────────────────────────────────────────────────

static SASS_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([a-zA-Z][\w-]*)\s*:\s*([^;{}!]+)").expect("static pattern")
});

fn extract_sass_variables(css: &str, out: &mut Vec<ColorMatch>) {
    for caps in SASS_VAR.captures_iter(css) {
        let value = caps[2].trim();
        // References to other variables are not resolved — dropped.
        if value.starts_with('$') {
            continue;
        }
        if let Some(hex) = parse_color_value(value) {
            out.push(ColorMatch {
                name: caps[1].to_owned(),
                hex,
                origin: MatchOrigin::SassVar,
            });
        }
    }
}

// ─── Stage: Sass maps ───────────────────────────────────────────────────────

static SASS_MAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([a-zA-Z][\w-]*)\s*:\s*\(\s*(.*?)\s*\)\s*;").expect("static pattern")
});

static MAP_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]?([^'":,\s]+)['"]?\s*:\s*([^,)]+)"#).expect("static pattern")
});

fn extract_sass_maps(css: &str, out: &mut Vec<ColorMatch>) {
    for caps in SASS_MAP.captures_iter(css) {
        let map_name = &caps[1];
        for entry in MAP_ENTRY.captures_iter(&caps[2]) {
            if let Some(hex) = parse_color_value(entry[2].trim()) {
                out.push(ColorMatch {
                    name: format!("{map_name}-{}", &entry[1]),
                    hex,
                    origin: MatchOrigin::SassVar,
                });
            }
        }
    }
}

// ─── Stage: rule declarations ───────────────────────────────────────────────

static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^{}]+?)\s*\{\s*([^{}]*)\}").expect("static pattern"));

// Longer property names come first so the alternation picks the full
// name, not a prefix of it.
static COLOR_PROP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:^|[\s;{])(background-color|background|border-top-color|border-right-color|border-bottom-color|border-left-color|border-color|outline-color|text-decoration-color|column-rule-color|stop-color|flood-color|lighting-color|color|fill|stroke)\s*:\s*([^;{}]+?)\s*(?:[;}]|$)",
    )
    .expect("static pattern")
});

static PSEUDO_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)hover|focus|active|visited|disabled|before|after|first|last|nth")
        .expect("static pattern")
});

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("static pattern"));

fn extract_rule_properties(css: &str, out: &mut Vec<ColorMatch>) {
    for caps in RULE.captures_iter(css) {
        let selector = caps[1].trim().to_owned();

        // Keyframe frames and anything that looks like one are skipped.
        if selector.contains('%') || selector.contains("from") || selector.contains("to") {
            continue;
        }

        for decl in COLOR_PROP.captures_iter(&caps[2]) {
            let value = decl[2].trim();
            // Variable and computed values need a resolution pass the
            // pipeline does not do.
            if value.starts_with("var(") || value.starts_with("calc(") {
                continue;
            }
            let Some(hex) = parse_color_value(value) else {
                continue;
            };
            if let Some(name) = color_name_from_rule(&selector, &decl[1].to_lowercase()) {
                out.push(ColorMatch {
                    name,
                    hex,
                    origin: MatchOrigin::Property,
                });
            }
        }
    }
}

/// Generic selectors that never name a color family.
const GENERIC_SELECTORS: [&str; 13] = [
    "body", "html", "*", "div", "span", "p", "a", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Derive a color name from a rule's selector and the property matched.
fn color_name_from_rule(selector: &str, property: &str) -> Option<String> {
    let spaced: String = selector
        .chars()
        .map(|c| if matches!(c, '.' | '#' | ':') { ' ' } else { c })
        .collect();
    let cleaned = PSEUDO_WORDS.replace_all(&spaced, "");
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if GENERIC_SELECTORS.contains(&cleaned.to_lowercase().as_str()) {
        return None;
    }

    for part in cleaned.split_whitespace().filter(|p| p.len() > 2) {
        if !part.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        let kebab = CAMEL_BOUNDARY.replace_all(part, "$1-$2").to_lowercase();
        let name: String = kebab
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .collect();
        if name.len() > 1 {
            let prefix = if property.contains("background") {
                "bg"
            } else if property.contains("border") {
                "border"
            } else if property.contains("text") || property == "color" {
                "text"
            } else {
                ""
            };
            return Some(if prefix.is_empty() {
                name
            } else {
                format!("{prefix}-{name}")
            });
        }
    }

    None
}

// ─── Stage: utility classes ─────────────────────────────────────────────────

static TAILWIND_UTILITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\.(?:bg|text|border|ring|outline|decoration|divide|placeholder|caret|accent|fill|stroke)-([a-z]+)(-\d+)?\s*\{\s*[^}]*?(?:background-color|color|border-color|outline-color|text-decoration-color|fill|stroke)\s*:\s*([^;{}]+)",
    )
    .expect("static pattern")
});

static BOOTSTRAP_UTILITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\.(?:bg|text|border)-([a-z]+)\s*\{\s*[^}]*?(?:background-color|color|border-color)\s*:\s*([^;{}]+)",
    )
    .expect("static pattern")
});

fn extract_utility_classes(css: &str, out: &mut Vec<ColorMatch>) {
    for caps in TAILWIND_UTILITY.captures_iter(css) {
        if let Some(hex) = parse_color_value(caps[3].trim()) {
            let name = caps.get(2).map_or_else(
                || caps[1].to_owned(),
                |shade| format!("{}-{}", &caps[1], &shade.as_str()[1..]),
            );
            out.push(ColorMatch {
                name,
                hex,
                origin: MatchOrigin::ClassBased,
            });
        }
    }

    for caps in BOOTSTRAP_UTILITY.captures_iter(css) {
        if let Some(hex) = parse_color_value(caps[2].trim()) {
            out.push(ColorMatch {
                name: caps[1].to_owned(),
                hex,
                origin: MatchOrigin::ClassBased,
            });
        }
    }
}

// ─── Stage: CSS-in-JS objects ───────────────────────────────────────────────

static CSS_IN_JS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"]?([a-zA-Z][a-zA-Z0-9]*)['"]?\s*:\s*['"]([^'"]+)['"]"#)
        .expect("static pattern")
});

fn extract_css_in_js(css: &str, out: &mut Vec<ColorMatch>) {
    for caps in CSS_IN_JS.captures_iter(css) {
        let prop = caps[1].to_lowercase();
        if !prop.contains("color") && !prop.contains("background") {
            continue;
        }
        if let Some(hex) = parse_color_value(&caps[2]) {
            out.push(ColorMatch {
                name: caps[1].to_owned(),
                hex,
                origin: MatchOrigin::Property,
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
