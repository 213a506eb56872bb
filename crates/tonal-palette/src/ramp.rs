//! Shade-ramp generation — one base hex in, eleven shades out.
//!
//! The ramp keeps two promises at once:
//!
//! 1. Lightness runs monotonically from key `50` (lightest) to `950`
//!    (darkest) under normal conditions.
//! 2. The exact input hex — not an HSL-reconstructed approximation —
//!    appears unchanged at the key whose canonical target lightness is
//!    closest to the base color's own lightness.
//!
//! A single linear interpolation cannot hold both extremes and the exact
//! base anchored without visible discontinuities, so generation picks one
//! of three regimes by base lightness: a fixed descending sequence for
//! very light bases, the mirrored ascending sequence for very dark bases,
//! and a canonical-plus-offset gradient for everything in between.
//!
//! Hue never moves across a ramp; only lightness and saturation do.

use tonal_color::{Hsl, Rgb, normalize_hex};

use crate::model::{ShadeKey, ShadeMap};

/// Fixed lightness sequence for very light bases, key 50 → 950.
const LIGHT_BASE_SEQUENCE: [f64; 11] = [
    97.0, 94.0, 88.0, 81.0, 69.0, 56.0, 48.0, 40.0, 32.0, 25.0, 15.0,
];

/// Fixed lightness sequence for very dark bases, key 50 → 950.
const DARK_BASE_SEQUENCE: [f64; 11] = [
    15.0, 25.0, 32.0, 40.0, 48.0, 56.0, 69.0, 81.0, 88.0, 94.0, 97.0,
];

/// A base below this saturation is neutral: its ramp must stay gray.
const NEUTRAL_SATURATION: f64 = 5.0;

/// Generate the full 11-step shade ramp for a base color.
///
/// Always returns a complete map. Unparseable input degrades through hex
/// normalization into a valid black ramp rather than an error.
///
/// The anchor key — where the literal normalized base hex lands — is the
/// key with the closest canonical target lightness, except that a base
/// lighter than 95 is forced to key `50` and one darker than 10 to `950`.
#[must_use]
pub fn generate_shades(base_hex: &str) -> ShadeMap {
    let base = normalize_hex(base_hex);
    let hsl = Rgb::from_hex(&base).to_hsl();

    let anchor = anchor_key(hsl.l);
    let is_neutral = hsl.s < NEUTRAL_SATURATION;

    let mut shades = if hsl.l > 90.0 {
        fixed_sequence_ramp(&hsl, &LIGHT_BASE_SEQUENCE, is_neutral)
    } else if hsl.l < 20.0 {
        fixed_sequence_ramp(&hsl, &DARK_BASE_SEQUENCE, is_neutral)
    } else {
        midtone_ramp(&hsl, anchor, is_neutral)
    };

    // The anchor carries the literal input hex, not an HSL reconstruction,
    // so the base survives a generate round-trip bit-for-bit.
    shades.set(anchor, base);
    shades
}

/// The key whose canonical lightness sits closest to `lightness`, with
/// the very-light/very-dark overrides applied.
fn anchor_key(lightness: f64) -> ShadeKey {
    if lightness > 95.0 {
        return ShadeKey::S50;
    }
    if lightness < 10.0 {
        return ShadeKey::S950;
    }

    let mut best = ShadeKey::S500;
    let mut min_diff = 100.0;
    for key in ShadeKey::ALL {
        let diff = (lightness - key.target_lightness()).abs();
        // Strict comparison: a tie keeps the earlier (lighter) key.
        if diff < min_diff {
            min_diff = diff;
            best = key;
        }
    }
    best
}

/// Extreme-regime ramp: walk a fixed lightness sequence, stepping
/// saturation up by 2 per index so the far end doesn't wash out.
fn fixed_sequence_ramp(base: &Hsl, sequence: &[f64; 11], is_neutral: bool) -> ShadeMap {
    ShadeMap::from_fn(|key| {
        let i = key.index();
        let saturation = step_saturation(base.s, i, is_neutral, 2.0, false);
        Hsl::new(base.h, saturation, sequence[i]).to_hex()
    })
}

/// Mid-tone ramp: shift every canonical lightness by the base color's
/// offset from its anchor, clamped to [2, 98], stepping saturation by
/// 1.5 per index.
fn midtone_ramp(base: &Hsl, anchor: ShadeKey, is_neutral: bool) -> ShadeMap {
    let light_diff = base.l - anchor.target_lightness();

    ShadeMap::from_fn(|key| {
        let i = key.index();
        let lightness = (key.target_lightness() + light_diff).clamp(2.0, 98.0);
        let saturation = step_saturation(base.s, i, is_neutral, 1.5, true);
        Hsl::new(base.h, saturation, lightness).to_hex()
    })
}

/// Per-step saturation. Neutral bases are clamped to ≤ 2 throughout so a
/// gray ramp never picks up a hue tint; colored bases step upward with
/// the index, floored at 5. Only the mid-tone regime caps at 100 — the
/// extreme regimes leave the top open and let the hex-encode clamp
/// resolve it.
fn step_saturation(base_s: f64, index: usize, is_neutral: bool, step: f64, cap: bool) -> f64 {
    if is_neutral {
        return base_s.clamp(0.0, 2.0);
    }
    let s = base_s + index as f64 * step;
    if cap { s.clamp(5.0, 100.0) } else { s.max(5.0) }
}

/// Bucket a color into a shade key by lightness alone.
///
/// Used when an extracted color carries no shade hint in its name: the
/// 11 buckets mirror the canonical lightness table, finest at the
/// extremes.
#[must_use]
pub fn assign_shade_by_lightness(hex: &str) -> ShadeKey {
    let l = Rgb::from_hex(hex).to_hsl().l;
    match l {
        l if l >= 95.0 => ShadeKey::S50,
        l if l >= 90.0 => ShadeKey::S100,
        l if l >= 80.0 => ShadeKey::S200,
        l if l >= 70.0 => ShadeKey::S300,
        l if l >= 60.0 => ShadeKey::S400,
        l if l >= 50.0 => ShadeKey::S500,
        l if l >= 40.0 => ShadeKey::S600,
        l if l >= 30.0 => ShadeKey::S700,
        l if l >= 20.0 => ShadeKey::S800,
        l if l >= 10.0 => ShadeKey::S900,
        _ => ShadeKey::S950,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tonal_color::Rgb;

    fn lightness(hex: &str) -> f64 {
        Rgb::from_hex(hex).to_hsl().l
    }

    fn saturation(hex: &str) -> f64 {
        Rgb::from_hex(hex).to_hsl().s
    }

    /// Every ramp has 11 valid lowercase 7-char hex entries.
    #[test]
    fn ramp_is_complete() {
        for base in ["#7c3aed", "#ffffff", "#000000", "#808080", "oops", ""] {
            let shades = generate_shades(base);
            for (_, hex) in shades.iter() {
                assert_eq!(hex.len(), 7, "bad entry {hex} for base {base}");
                assert!(hex.starts_with('#'));
                assert_eq!(hex, hex.to_lowercase());
            }
        }
    }

    /// The exact normalized base appears at exactly one key.
    #[test]
    fn base_anchored_exactly_once() {
        for base in ["#7c3aed", "#3B82F6", "#10b981", "#f59e0b"] {
            let normalized = normalize_hex(base);
            let shades = generate_shades(base);
            let hits = shades.iter().filter(|(_, hex)| *hex == normalized).count();
            assert_eq!(hits, 1, "base {base} anchored {hits} times");
        }
    }

    /// The anchor key obeys the closest-canonical-lightness rule.
    #[test]
    fn anchor_matches_closest_lightness() {
        let base = "#7c3aed"; // lightness ≈ 58 → closest canonical is 56 → key 500
        let shades = generate_shades(base);
        assert_eq!(shades.get(ShadeKey::S500), base);
    }

    /// Pure white is forced to key 50 and survives exactly.
    #[test]
    fn white_forced_to_50() {
        let shades = generate_shades("#ffffff");
        assert_eq!(shades.get(ShadeKey::S50), "#ffffff");
    }

    /// Near-black is forced to key 950 and survives exactly.
    #[test]
    fn black_forced_to_950() {
        let shades = generate_shades("#000000");
        assert_eq!(shades.get(ShadeKey::S950), "#000000");
    }

    /// Mid-tone ramps descend in lightness from 50 to 950.
    #[test]
    fn midtone_monotonic() {
        let shades = generate_shades("#3b82f6");
        let values: Vec<f64> = shades.iter().map(|(_, hex)| lightness(hex)).collect();
        for (i, pair) in values.windows(2).enumerate() {
            assert!(
                pair[0] >= pair[1] - 0.5,
                "lightness rises at step {i}: {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    /// A gray base yields a fully gray ramp — saturation ≤ 2 everywhere.
    #[test]
    fn neutral_stays_gray() {
        let shades = generate_shades("#808080");
        for (key, hex) in shades.iter() {
            assert!(
                saturation(hex) <= 2.0,
                "shade {key} picked up tint: {hex}"
            );
        }
    }

    /// Unparseable input degrades to a valid black-anchored ramp.
    #[test]
    fn garbage_input_black_ramp() {
        let shades = generate_shades("");
        assert_eq!(shades.get(ShadeKey::S950), "#000000");
    }

    /// Very light non-white bases still use the fixed light sequence.
    #[test]
    fn very_light_regime() {
        // #fdf8dd has lightness ≈ 93: light regime, but anchor is 100
        // (closest to 94), not 50.
        let shades = generate_shades("#fdf8dd");
        assert_eq!(shades.get(ShadeKey::S100), "#fdf8dd");
        assert!(lightness(shades.get(ShadeKey::S950)) < 20.0);
    }

    /// Very dark bases use the ascending sequence: key 50 holds the dark
    /// end and the anchor snaps the base back onto key 950.
    #[test]
    fn very_dark_regime() {
        // #1c1917 has lightness 10: dark regime, anchor 950.
        let shades = generate_shades("#1c1917");
        assert_eq!(shades.get(ShadeKey::S950), "#1c1917");
        assert!(lightness(shades.get(ShadeKey::S50)) < 20.0);
        assert!(lightness(shades.get(ShadeKey::S900)) > 90.0);
    }

    /// Lightness buckets map to the expected keys.
    #[test]
    fn lightness_buckets() {
        assert_eq!(assign_shade_by_lightness("#ffffff"), ShadeKey::S50);
        assert_eq!(assign_shade_by_lightness("#000000"), ShadeKey::S950);
        assert_eq!(assign_shade_by_lightness("#808080"), ShadeKey::S500);
    }
}
