//! Seeded harmonious-palette generation and display naming.
//!
//! One strategy + one base hue + one seed produces a whole multi-color
//! palette: per-strategy hue placement, jittered saturation/lightness
//! fills, a shade ramp per color, semantic role names, and a display
//! name read back off the *actual* hue spread of what was generated
//! (not the strategy that was asked for — a jittered "tetradic" run can
//! legitimately come out reading as "Mixed").

use tonal_color::{Hsl, Rgb, normalize_hex, wrap_hue};

use crate::model::{BaseColor, Palette};
use crate::ramp::generate_shades;
use crate::rng::Xorshift32;

/// The harmony strategies the generator can follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyKind {
    /// ±30°-stepped hues around the base.
    Analogous,
    /// Exact 120° divisions, then jittered fills.
    Triadic,
    /// Exact 90° divisions, then jittered fills.
    Tetradic,
    /// Base + 180°, then jittered split-complements.
    Complementary,
    /// One hue, jittered saturation/lightness.
    Monochromatic,
}

impl HarmonyKind {
    /// All strategies, in selection order.
    pub const ALL: [Self; 5] = [
        Self::Analogous,
        Self::Triadic,
        Self::Tetradic,
        Self::Complementary,
        Self::Monochromatic,
    ];

    /// Machine name (CLI flag value).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Complementary => "complementary",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Parse a strategy from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
            .copied()
    }
}

/// Options for [`create_harmonious_palette`]. Every `None` is filled
/// from the injected RNG.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// Harmony strategy; random when absent.
    pub harmony: Option<HarmonyKind>,
    /// Number of colors; random 3–10 when absent.
    pub count: Option<usize>,
    /// Base hex; random mid-saturation mid-lightness color when absent.
    pub base_hex: Option<String>,
}

/// Semantic role names assigned to generated colors, in order.
const ROLE_NAMES: [&str; 10] = [
    "Primary", "Secondary", "Accent", "Neutral", "Support", "Highlight", "Muted", "Vibrant",
    "Soft", "Bold",
];

/// A random base color in the comfortable middle of the gamut:
/// saturation 50–80, lightness 40–60.
#[must_use]
pub fn random_base_color(rng: &mut Xorshift32) -> String {
    let hue = f64::from(rng.range_u32(0, 359));
    let saturation = f64::from(50 + rng.range_u32(0, 29));
    let lightness = f64::from(40 + rng.range_u32(0, 19));
    Hsl::new(hue, saturation, lightness).to_hex()
}

/// Generate `count` hex colors around a base, following a strategy.
///
/// The analogous strategy caps itself at 5 colors and never pads, so it
/// can return fewer than requested; every other strategy fills to
/// `count` with jittered variations and truncates any overshoot.
#[must_use]
pub fn generate_harmonious_colors(
    base_hex: &str,
    kind: HarmonyKind,
    count: usize,
    rng: &mut Xorshift32,
) -> Vec<String> {
    let base = normalize_hex(base_hex);
    let hsl = Rgb::from_hex(&base).to_hsl();
    let mut colors: Vec<String> = Vec::with_capacity(count);

    match kind {
        HarmonyKind::Analogous => {
            let n = count.min(5);
            for i in 0..n {
                let offset = (i as f64 - (n / 2) as f64) * 30.0;
                let s = (hsl.s + rng.jitter(20.0)).clamp(20.0, 90.0);
                let l = (hsl.l + rng.jitter(20.0)).clamp(25.0, 75.0);
                colors.push(Hsl::new(wrap_hue(hsl.h + offset), s, l).to_hex());
            }
        }
        HarmonyKind::Triadic => {
            colors.push(base);
            for i in 1..3 {
                let h = wrap_hue(hsl.h + f64::from(i) * 120.0);
                colors.push(Hsl::new(h, hsl.s, hsl.l).to_hex());
            }
            fill_with_variations(&mut colors, count, 60.0, 30.0, 30.0, rng);
        }
        HarmonyKind::Tetradic => {
            colors.push(base);
            for i in 1..4 {
                let h = wrap_hue(hsl.h + f64::from(i) * 90.0);
                colors.push(Hsl::new(h, hsl.s, hsl.l).to_hex());
            }
            fill_with_variations(&mut colors, count, 45.0, 25.0, 25.0, rng);
        }
        HarmonyKind::Complementary => {
            colors.push(base);
            let comp_hue = wrap_hue(hsl.h + 180.0);
            colors.push(Hsl::new(comp_hue, hsl.s, hsl.l).to_hex());
            while colors.len() < count {
                let h = wrap_hue(comp_hue + rng.jitter(60.0));
                let s = (hsl.s + rng.jitter(20.0)).clamp(20.0, 90.0);
                let l = (hsl.l + rng.jitter(20.0)).clamp(25.0, 75.0);
                colors.push(Hsl::new(h, s, l).to_hex());
            }
        }
        HarmonyKind::Monochromatic => {
            colors.push(base);
            while colors.len() < count {
                let s = (hsl.s + rng.jitter(40.0)).clamp(10.0, 100.0);
                let l = (hsl.l + rng.jitter(40.0)).clamp(15.0, 85.0);
                colors.push(Hsl::new(hsl.h, s, l).to_hex());
            }
        }
    }

    colors.truncate(count);
    colors
}

/// Pad a harmony out to `count` by re-jittering random existing members.
fn fill_with_variations(
    colors: &mut Vec<String>,
    count: usize,
    hue_spread: f64,
    sat_spread: f64,
    light_spread: f64,
    rng: &mut Xorshift32,
) {
    while colors.len() < count {
        let seed_hex = rng.pick(colors).clone();
        let hsl = Rgb::from_hex(&seed_hex).to_hsl();
        let h = wrap_hue(hsl.h + rng.jitter(hue_spread));
        let s = (hsl.s + rng.jitter(sat_spread)).clamp(20.0, 90.0);
        let l = (hsl.l + rng.jitter(light_spread)).clamp(25.0, 75.0);
        colors.push(Hsl::new(h, s, l).to_hex());
    }
}

// ─── Display naming ─────────────────────────────────────────────────────────

/// Hue bands and their family words: (upper bound, vivid, muted). The
/// vivid word applies above 70% saturation.
const HUE_FAMILIES: [(f64, &str, &str); 14] = [
    (15.0, "Crimson", "Rust"),
    (30.0, "Coral", "Terra"),
    (45.0, "Amber", "Marmalade"),
    (60.0, "Gold", "Honey"),
    (75.0, "Sunshine", "Butter"),
    (90.0, "Lime", "Sage"),
    (120.0, "Emerald", "Forest"),
    (150.0, "Jade", "Olive"),
    (180.0, "Teal", "Seafoam"),
    (210.0, "Azure", "Sky"),
    (240.0, "Cobalt", "Navy"),
    (270.0, "Violet", "Lavender"),
    (300.0, "Royal", "Plum"),
    (360.0, "Fuchsia", "Rose"),
];

/// Synthesize a display name for a set of generated colors.
///
/// The harmony label comes from the actual hue spread of the set; the
/// family word from the first color's hue band and saturation.
#[must_use]
pub fn palette_name(colors: &[String]) -> String {
    if colors.is_empty() {
        return "New Palette".to_owned();
    }

    let hsl: Vec<_> = colors
        .iter()
        .map(|hex| Rgb::from_hex(hex).to_hsl())
        .collect();

    let max_hue = hsl.iter().map(|c| c.h).fold(f64::MIN, f64::max);
    let min_hue = hsl.iter().map(|c| c.h).fold(f64::MAX, f64::min);
    let hue_range = max_hue - min_hue;

    let harmony_label = if hue_range < 30.0 {
        "Monochromatic"
    } else if hue_range < 90.0 {
        "Analogous"
    } else if hue_range > 150.0 && hue_range < 210.0 {
        "Complementary"
    } else if colors.len() == 3 && hue_range > 100.0 {
        "Triadic"
    } else if colors.len() == 4 && hue_range > 200.0 {
        "Tetradic"
    } else {
        "Mixed"
    };

    let family = hue_family_word(hsl[0].h, hsl[0].s);
    format!("{harmony_label} {family}")
}

fn hue_family_word(hue: f64, saturation: f64) -> &'static str {
    let hue = wrap_hue(hue);
    for (bound, vivid, muted) in HUE_FAMILIES {
        if hue < bound {
            return if saturation > 70.0 { vivid } else { muted };
        }
    }
    // hue is always < 360 after wrapping; the last band covers it.
    if saturation > 70.0 { "Fuchsia" } else { "Rose" }
}

// ─── Palette assembly ───────────────────────────────────────────────────────

/// Generate a complete harmonious palette: colors, ramps, role names,
/// display name. Deterministic for a given options + seed.
#[must_use]
pub fn create_harmonious_palette(options: &GeneratorOptions, rng: &mut Xorshift32) -> Palette {
    let kind = options
        .harmony
        .unwrap_or_else(|| *rng.pick(&HarmonyKind::ALL));
    let count = options.count.unwrap_or_else(|| rng.range_u32(3, 10) as usize);
    let base = options
        .base_hex
        .as_deref()
        .map_or_else(|| random_base_color(rng), normalize_hex);

    let colors = generate_harmonious_colors(&base, kind, count, rng);
    let name = palette_name(&colors);

    let base_colors = colors
        .iter()
        .enumerate()
        .map(|(i, hex)| BaseColor {
            id: new_id(rng),
            name: ROLE_NAMES
                .get(i)
                .map_or_else(|| format!("Color {}", i + 1), |role| (*role).to_owned()),
            base_hex: hex.clone(),
            shades: generate_shades(hex),
        })
        .collect();

    Palette {
        id: new_id(rng),
        name,
        description: String::new(),
        base_colors,
    }
}

/// A 16-hex-digit identifier drawn from the palette's own RNG stream.
fn new_id(rng: &mut Xorshift32) -> String {
    format!("{:08x}{:08x}", rng.next_u32(), rng.next_u32())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hue(hex: &str) -> f64 {
        Rgb::from_hex(hex).to_hsl().h
    }

    /// Same options + same seed → identical palette.
    #[test]
    fn deterministic_under_seed() {
        let opts = GeneratorOptions::default();
        let a = create_harmonious_palette(&opts, &mut Xorshift32::new(42));
        let b = create_harmonious_palette(&opts, &mut Xorshift32::new(42));
        assert_eq!(a, b);
    }

    /// Different seeds produce different palettes.
    #[test]
    fn seeds_vary_output() {
        let opts = GeneratorOptions::default();
        let a = create_harmonious_palette(&opts, &mut Xorshift32::new(42));
        let b = create_harmonious_palette(&opts, &mut Xorshift32::new(99));
        assert_ne!(a, b);
    }

    /// Strategy names round-trip through parsing.
    #[test]
    fn kind_name_roundtrip() {
        for kind in HarmonyKind::ALL {
            assert_eq!(HarmonyKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(HarmonyKind::from_name("Triadic"), Some(HarmonyKind::Triadic));
        assert_eq!(HarmonyKind::from_name("cubist"), None);
    }

    /// Triadic keeps the base color literal at position 0.
    #[test]
    fn triadic_keeps_base() {
        let mut rng = Xorshift32::new(1);
        let colors =
            generate_harmonious_colors("#3B82F6", HarmonyKind::Triadic, 3, &mut rng);
        assert_eq!(colors[0], "#3b82f6");
        assert_eq!(colors.len(), 3);
    }

    /// Triadic pads to the requested count with variations.
    #[test]
    fn triadic_pads_to_count() {
        let mut rng = Xorshift32::new(1);
        let colors =
            generate_harmonious_colors("#3b82f6", HarmonyKind::Triadic, 7, &mut rng);
        assert_eq!(colors.len(), 7);
    }

    /// The analogous strategy caps itself at 5 and never pads.
    #[test]
    fn analogous_caps_at_five() {
        let mut rng = Xorshift32::new(1);
        let colors =
            generate_harmonious_colors("#3b82f6", HarmonyKind::Analogous, 9, &mut rng);
        assert_eq!(colors.len(), 5);
    }

    /// Monochromatic variants never leave the base hue.
    #[test]
    fn monochromatic_single_hue() {
        let mut rng = Xorshift32::new(5);
        let colors =
            generate_harmonious_colors("#7c3aed", HarmonyKind::Monochromatic, 6, &mut rng);
        let base_hue = hue(&colors[0]);
        for hex in &colors {
            assert!((hue(hex) - base_hue).abs() < 2.0, "hue drifted: {hex}");
        }
    }

    /// Complementary's second color sits 180° from the base.
    #[test]
    fn complementary_opposite() {
        let mut rng = Xorshift32::new(5);
        let colors =
            generate_harmonious_colors("#ff0000", HarmonyKind::Complementary, 2, &mut rng);
        let diff = (hue(&colors[1]) - hue(&colors[0]) - 180.0).abs();
        assert!(diff < 2.0, "complement off by {diff}");
    }

    /// Generated palettes carry role names in order.
    #[test]
    fn role_names_in_order() {
        let opts = GeneratorOptions {
            harmony: Some(HarmonyKind::Tetradic),
            count: Some(5),
            base_hex: Some("#3b82f6".to_owned()),
        };
        let palette = create_harmonious_palette(&opts, &mut Xorshift32::new(42));
        let names: Vec<&str> = palette.base_colors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Primary", "Secondary", "Accent", "Neutral", "Support"]);
    }

    /// Every generated color's ramp anchors its own base hex.
    #[test]
    fn ramps_anchor_their_base() {
        let opts = GeneratorOptions {
            harmony: Some(HarmonyKind::Triadic),
            count: Some(4),
            base_hex: Some("#10b981".to_owned()),
        };
        let palette = create_harmonious_palette(&opts, &mut Xorshift32::new(7));
        for color in &palette.base_colors {
            let anchored = color
                .shades
                .iter()
                .any(|(_, hex)| hex == color.base_hex);
            assert!(anchored, "{} not anchored in its ramp", color.base_hex);
        }
    }

    /// Monochromatic sets read back as monochromatic.
    #[test]
    fn name_reflects_spread() {
        let colors = vec![
            "#7c3aed".to_owned(),
            "#8b5cf6".to_owned(),
            "#6d28d9".to_owned(),
        ];
        let name = palette_name(&colors);
        assert!(name.starts_with("Monochromatic"), "got {name}");
    }

    /// An empty set gets the placeholder name.
    #[test]
    fn empty_set_name() {
        assert_eq!(palette_name(&[]), "New Palette");
    }

    /// First-color hue drives the family word.
    #[test]
    fn family_word_by_hue() {
        // Saturated red → Crimson.
        let name = palette_name(&["#ff0000".to_owned()]);
        assert!(name.ends_with("Crimson"), "got {name}");
        // Desaturated blue → Navy.
        let name = palette_name(&["#4a5f78".to_owned()]);
        assert!(name.ends_with("Navy"), "got {name}");
    }
}
