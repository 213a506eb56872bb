// SPDX-License-Identifier: MIT
//
// tonal-color — color-space primitives for the tonal palette engine.

//! # tonal-color
//!
//! The numeric foundation of the palette engine: hex string normalization,
//! conversions between sRGB, HSL and HSV, and WCAG contrast math.
//!
//! Two conversion families live here and they are deliberately independent:
//!
//! - **HSL** drives everything ramp-related (shade generation, harmonies,
//!   tints/tones). Lightness and saturation are the axes a tonal ramp moves
//!   along.
//! - **HSV** exists only for interactive picker math (a saturation/value
//!   panel plus a hue slider). Dragging a picker must never route through
//!   the HSL family, so the two never perturb each other's semantics.
//!
//! Every function is pure and total. Malformed input degrades instead of
//! failing: an empty hex string normalizes to `#000000`, out-of-range
//! channels are clamped at the hex-encode boundary, and nothing in this
//! crate panics.
//!
//! Channel values stay `f64` between conversions; rounding happens exactly
//! once, when a color is encoded back to hex. Doing it earlier accumulates
//! error across chained conversions.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod contrast;
pub mod convert;
pub mod format;
pub mod hex;

pub use contrast::{
    WCAG_AA, WCAG_AA_LARGE, WCAG_AAA, contrast_ratio, contrast_text, relative_luminance,
};
pub use convert::{Hsl, Hsv, Rgb, wrap_hue};
pub use format::{ColorFormat, format_color};
pub use hex::{FALLBACK_HEX, normalize_hex};
