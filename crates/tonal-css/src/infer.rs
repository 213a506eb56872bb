//! Name and shade inference — from a raw identifier to a color family.
//!
//! `--tw-brand-500`, `$primary-dark`, `.bg-sky-300`'s captured `sky-300`,
//! `accentColor` — identifiers arrive in every convention. Inference
//! strips the framework noise, then tries, in order:
//!
//! 1. a trailing 2–3-digit numeric shade (`brand-500`)
//! 2. a trailing intensity word (`brand-dark`, `sky-lightest`)
//! 3. an implicit-shade word anywhere in the name (`primary`, `main`)
//!
//! Anything that still has no shade gets bucketed by lightness later
//! (see `tonal_palette::assign_shade_by_lightness`). A numeric suffix
//! that is not one of the 11 canonical steps lands on `500`.

use std::sync::LazyLock;

use regex::Regex;
use tonal_palette::ShadeKey;

static LEADING_ROLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:color|clr|bg|background|border|text|fill|stroke|primary|secondary|accent|surface|on)-?",
    )
    .expect("static pattern")
});

static LEADING_VENDOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:tw|tailwind|bs|bootstrap|mui|material)-?").expect("static pattern")
});

static TRAILING_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)-?(?:color|clr)$").expect("static pattern"));

static NUMERIC_SHADE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)-?([0-9]{2,3})$").expect("static pattern"));

static WORD_SHADE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)-(light|dark|lighter|darker|lightest|darkest|pale|deep|bright|muted)$")
        .expect("static pattern")
});

/// Words that imply a shade when they appear anywhere in a name, in
/// match-priority order.
const IMPLICIT_SHADES: [(&str, ShadeKey); 12] = [
    ("lightest", ShadeKey::S50),
    ("lighter", ShadeKey::S200),
    ("light", ShadeKey::S300),
    ("dark", ShadeKey::S700),
    ("darker", ShadeKey::S800),
    ("darkest", ShadeKey::S900),
    ("primary", ShadeKey::S500),
    ("secondary", ShadeKey::S600),
    ("accent", ShadeKey::S500),
    ("main", ShadeKey::S500),
    ("base", ShadeKey::S500),
    ("default", ShadeKey::S500),
];

/// Split an identifier into a family name and an inferred shade.
///
/// Returns `None` for the shade when nothing in the name implies one.
#[must_use]
pub fn extract_color_and_shade(raw: &str) -> (String, Option<ShadeKey>) {
    let clean = LEADING_ROLE.replace(raw, "");
    let clean = LEADING_VENDOR.replace(&clean, "");
    let clean = TRAILING_COLOR.replace(&clean, "").into_owned();

    if let Some(caps) = NUMERIC_SHADE.captures(&clean) {
        let name = tidy(&caps[1]);
        let shade = normalize_shade(&caps[2]);
        return (fallback(name, "color"), Some(shade));
    }

    if let Some(caps) = WORD_SHADE.captures(&clean) {
        let name = tidy(&caps[1]);
        let shade = normalize_shade(&caps[2]);
        return (fallback(name, "color"), Some(shade));
    }

    let lower = clean.to_lowercase();
    for (word, shade) in IMPLICIT_SHADES {
        if lower.contains(word) {
            let name = tidy(&remove_word(&clean, word));
            return (fallback(name, word), Some(shade));
        }
    }

    (fallback(tidy(&clean), "color"), None)
}

/// Map a captured shade token to a canonical key.
///
/// Intensity words map through a fixed table (including the Material
/// `A100`-style aliases); a numeric token that is a canonical step maps
/// to itself; everything else defaults to `500`.
fn normalize_shade(token: &str) -> ShadeKey {
    match token {
        "lightest" => ShadeKey::S50,
        "pale" => ShadeKey::S100,
        "lighter" => ShadeKey::S200,
        "light" => ShadeKey::S300,
        "bright" => ShadeKey::S400,
        "muted" => ShadeKey::S600,
        "dark" => ShadeKey::S700,
        "darker" | "deep" => ShadeKey::S800,
        "darkest" => ShadeKey::S900,
        "A100" => ShadeKey::S100,
        "A200" => ShadeKey::S200,
        "A400" => ShadeKey::S400,
        "A700" => ShadeKey::S700,
        t => ShadeKey::from_name(t).unwrap_or(ShadeKey::S500),
    }
}

/// Remove the first (case-insensitive) occurrence of `word`.
fn remove_word(name: &str, word: &str) -> String {
    let lower = name.to_lowercase();
    let Some(pos) = lower.find(word) else {
        return name.to_owned();
    };
    if name.is_ascii() {
        format!("{}{}", &name[..pos], &name[pos + word.len()..])
    } else {
        // Byte offsets into the lowercased copy are only safe there.
        let mut out = lower;
        out.replace_range(pos..pos + word.len(), "");
        out
    }
}

/// Collapse dash runs and trim dashes off both ends.
fn tidy(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_dash = true; // treat leading dashes as a run to drop
    for ch in name.chars() {
        if ch == '-' {
            if !prev_dash {
                out.push('-');
            }
            prev_dash = true;
        } else {
            out.push(ch);
            prev_dash = false;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

fn fallback(name: String, default: &str) -> String {
    if name.is_empty() {
        default.to_owned()
    } else {
        name
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Canonical numeric suffixes map to their own key.
    #[test]
    fn numeric_shade() {
        assert_eq!(
            extract_color_and_shade("brand-500"),
            ("brand".to_owned(), Some(ShadeKey::S500))
        );
        assert_eq!(
            extract_color_and_shade("brand-50"),
            ("brand".to_owned(), Some(ShadeKey::S50))
        );
    }

    /// Non-canonical numeric suffixes default to 500.
    #[test]
    fn odd_numeric_defaults() {
        assert_eq!(
            extract_color_and_shade("brand-42"),
            ("brand".to_owned(), Some(ShadeKey::S500))
        );
    }

    /// Intensity words map through the fixed table.
    #[test]
    fn word_shades() {
        assert_eq!(
            extract_color_and_shade("sky-dark"),
            ("sky".to_owned(), Some(ShadeKey::S700))
        );
        assert_eq!(
            extract_color_and_shade("sky-lightest"),
            ("sky".to_owned(), Some(ShadeKey::S50))
        );
        assert_eq!(
            extract_color_and_shade("sea-muted"),
            ("sea".to_owned(), Some(ShadeKey::S600))
        );
    }

    /// Framework prefixes are stripped before inference.
    #[test]
    fn prefixes_stripped() {
        assert_eq!(
            extract_color_and_shade("tw-sky-300"),
            ("sky".to_owned(), Some(ShadeKey::S300))
        );
        assert_eq!(
            extract_color_and_shade("text-ocean-700"),
            ("ocean".to_owned(), Some(ShadeKey::S700))
        );
    }

    /// A trailing `-color` suffix is noise.
    #[test]
    fn suffix_stripped() {
        assert_eq!(
            extract_color_and_shade("ocean-color"),
            ("ocean".to_owned(), None)
        );
    }

    /// Implicit words imply a shade and name the family when alone.
    #[test]
    fn implicit_words() {
        // "primary" is stripped as a leading role prefix; the remainder
        // is empty, so the generic fallback name applies.
        assert_eq!(
            extract_color_and_shade("brand-main"),
            ("brand".to_owned(), Some(ShadeKey::S500))
        );
        assert_eq!(
            extract_color_and_shade("ocean-default"),
            ("ocean".to_owned(), Some(ShadeKey::S500))
        );
    }

    /// No hint at all → no shade, tidied name.
    #[test]
    fn no_hint() {
        assert_eq!(extract_color_and_shade("ocean"), ("ocean".to_owned(), None));
    }

    /// Degenerate names fall back instead of vanishing.
    #[test]
    fn degenerate_names() {
        let (name, shade) = extract_color_and_shade("-50");
        assert_eq!(name, "color");
        assert_eq!(shade, Some(ShadeKey::S50));
    }

    /// Dash runs collapse and ends are trimmed.
    #[test]
    fn tidy_dashes() {
        assert_eq!(tidy("--a--b-"), "a-b");
        assert_eq!(tidy("---"), "");
    }
}
