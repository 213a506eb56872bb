// SPDX-License-Identifier: MIT
//
// Display formatting for color values.

//! Render a hex color in the notation a display surface wants: plain
//! uppercase hex, `rgb()`, `hsl()`, a Tailwind arbitrary-value literal,
//! or a CSS declaration. Pure string formatting — no new color math.

use crate::convert::Rgb;
use crate::hex::normalize_hex;

/// The output notations the formatter knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Tailwind,
    Css,
}

impl ColorFormat {
    /// All formats, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Hex, Self::Rgb, Self::Hsl, Self::Tailwind, Self::Css]
    }

    /// Human-readable name of this format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "HEX",
            Self::Rgb => "RGB",
            Self::Hsl => "HSL",
            Self::Tailwind => "Tailwind",
            Self::Css => "CSS",
        }
    }

    /// Parse a format from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
            .copied()
    }
}

/// Format a hex color in the requested notation.
///
/// The input is normalized first, so shorthand and uppercase input are
/// fine. Numeric components are rounded for display.
#[must_use]
pub fn format_color(hex: &str, format: ColorFormat) -> String {
    let hex = normalize_hex(hex);
    let rgb = Rgb::from_hex(&hex);

    match format {
        ColorFormat::Hex => hex.to_uppercase(),
        ColorFormat::Rgb => {
            format!("rgb({}, {}, {})", rgb.r.round(), rgb.g.round(), rgb.b.round())
        }
        ColorFormat::Hsl => {
            let hsl = rgb.to_hsl();
            format!(
                "hsl({}, {}%, {}%)",
                hsl.h.round(),
                hsl.s.round(),
                hsl.l.round()
            )
        }
        ColorFormat::Tailwind => format!("[{hex}]"),
        ColorFormat::Css => format!("color: {hex};"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Hex display is uppercase with the hash kept.
    #[test]
    fn hex_display() {
        assert_eq!(format_color("#7c3aed", ColorFormat::Hex), "#7C3AED");
    }

    /// RGB display uses rounded integer channels.
    #[test]
    fn rgb_display() {
        assert_eq!(format_color("#3b82f6", ColorFormat::Rgb), "rgb(59, 130, 246)");
    }

    /// HSL display rounds each component and marks percentages.
    #[test]
    fn hsl_display() {
        assert_eq!(format_color("#ff0000", ColorFormat::Hsl), "hsl(0, 100%, 50%)");
    }

    /// Tailwind arbitrary-value literal wraps the normalized hex.
    #[test]
    fn tailwind_display() {
        assert_eq!(format_color("#ABC", ColorFormat::Tailwind), "[#aabbcc]");
    }

    /// CSS declaration form.
    #[test]
    fn css_display() {
        assert_eq!(format_color("1e3a8a", ColorFormat::Css), "color: #1e3a8a;");
    }

    /// Format names parse back case-insensitively.
    #[test]
    fn name_roundtrip() {
        for f in ColorFormat::all() {
            assert_eq!(ColorFormat::from_name(f.name()), Some(*f));
            assert_eq!(ColorFormat::from_name(&f.name().to_lowercase()), Some(*f));
        }
    }
}
