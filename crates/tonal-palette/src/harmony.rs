//! Harmony sets and tint/shade/tone variations.
//!
//! Harmonies rotate the base hue by fixed angular offsets while holding
//! saturation and lightness; variations interpolate a single HSL axis
//! toward its extreme while holding the other two. Both are pure hue/axis
//! math layered on `tonal-color` — nothing here touches the shade ramp.

use tonal_color::{Hsl, Rgb, wrap_hue};

/// Default number of steps for tint/shade/tone rows.
pub const DEFAULT_VARIATION_STEPS: usize = 5;

/// The four fixed-offset harmony sets derived from one base color.
///
/// Every entry is a canonical hex reconstructed from the rotated HSL, so
/// even the zero-offset entries are the HSL-space rendering of the base
/// rather than the literal input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Harmonies {
    /// Base and its 180° opposite.
    pub complementary: [String; 2],
    /// −30°, base, +30°.
    pub analogous: [String; 3],
    /// Base, +120°, +240°.
    pub triadic: [String; 3],
    /// Base, +90°, +180°, +270°.
    pub tetradic: [String; 4],
}

/// Generate all four harmony sets for a base hex.
#[must_use]
pub fn generate_harmonies(base_hex: &str) -> Harmonies {
    let hsl = Rgb::from_hex(base_hex).to_hsl();
    let rotate = |offset: f64| {
        Hsl::new(wrap_hue(hsl.h + offset), hsl.s.clamp(0.0, 100.0), hsl.l.clamp(0.0, 100.0)).to_hex()
    };

    Harmonies {
        complementary: [rotate(0.0), rotate(180.0)],
        analogous: [rotate(-30.0), rotate(0.0), rotate(30.0)],
        triadic: [rotate(0.0), rotate(120.0), rotate(240.0)],
        tetradic: [rotate(0.0), rotate(90.0), rotate(180.0), rotate(270.0)],
    }
}

/// Lighten toward 100 in even increments: `l_i = l + (100-l) · i/(steps+1)`.
///
/// Ordered closest-to-base first; callers render the row left-to-right
/// as a gradient, so the ordering is part of the contract.
#[must_use]
pub fn generate_tints(hex: &str, steps: usize) -> Vec<String> {
    let hsl = Rgb::from_hex(hex).to_hsl();
    variation_row(steps, |t| {
        Hsl::new(hsl.h, hsl.s, (hsl.l + (100.0 - hsl.l) * t).clamp(0.0, 100.0))
    })
}

/// Darken toward 0 by the symmetric formula: `l_i = l - l · i/(steps+1)`.
#[must_use]
pub fn generate_shades_only(hex: &str, steps: usize) -> Vec<String> {
    let hsl = Rgb::from_hex(hex).to_hsl();
    variation_row(steps, |t| {
        Hsl::new(hsl.h, hsl.s, (hsl.l - hsl.l * t).clamp(0.0, 100.0))
    })
}

/// Desaturate toward gray: `s_i = s - s · i/(steps+1)`, lightness held.
#[must_use]
pub fn generate_tones(hex: &str, steps: usize) -> Vec<String> {
    let hsl = Rgb::from_hex(hex).to_hsl();
    variation_row(steps, |t| {
        Hsl::new(hsl.h, (hsl.s - hsl.s * t).clamp(0.0, 100.0), hsl.l)
    })
}

fn variation_row(steps: usize, at: impl Fn(f64) -> Hsl) -> Vec<String> {
    (1..=steps)
        .map(|i| at(i as f64 / (steps + 1) as f64).to_hex())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
