// SPDX-License-Identifier: MIT
//
// WCAG 2.1 relative luminance and contrast ratio.

//! Contrast math per WCAG 2.1.
//!
//! - [`relative_luminance`]: sRGB channel → linear via the 0.03928
//!   threshold piecewise gamma, combined with the 0.2126/0.7152/0.0722
//!   weights.
//! - [`contrast_ratio`]: `(L_lighter + 0.05) / (L_darker + 0.05)`,
//!   symmetric in its arguments, in `[1, 21]`.
//! - [`contrast_text`]: a cheap light-or-dark text heuristic. It is NOT
//!   a WCAG pass/fail check — callers needing compliance compare
//!   [`contrast_ratio`] against the AA/AAA thresholds directly.

use crate::convert::Rgb;
use crate::hex::hex_to_rgb;

/// WCAG AA minimum contrast for normal text.
pub const WCAG_AA: f64 = 4.5;

/// WCAG AAA minimum contrast for normal text.
pub const WCAG_AAA: f64 = 7.0;

/// WCAG AA minimum contrast for large text.
pub const WCAG_AA_LARGE: f64 = 3.0;

/// Relative luminance of a color per WCAG 2.1, in `[0, 1]`.
#[must_use]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let r = linearize(rgb.r / 255.0);
    let g = linearize(rgb.g / 255.0);
    let b = linearize(rgb.b / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// sRGB gamma → linear, piecewise at the 0.03928 threshold.
fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG 2.1 contrast ratio between two hex colors.
///
/// Always `>= 1.0` regardless of argument order; black on white is 21.
#[must_use]
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> f64 {
    let la = relative_luminance(hex_to_rgb(hex_a));
    let lb = relative_luminance(hex_to_rgb(hex_b));
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick a readable text color for a swatch background.
///
/// Luminance above 0.5 gets near-black text, otherwise white. A
/// heuristic, deliberately simpler than a WCAG threshold check.
#[must_use]
pub fn contrast_text(hex: &str) -> &'static str {
    if relative_luminance(hex_to_rgb(hex)) > 0.5 {
        "#111111"
    } else {
        "#ffffff"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
