//! Export formatters — palettes out as CSS variables or Tailwind config.
//!
//! Plain string builders over the palette model. Names are slugified so
//! the output is always a valid identifier regardless of what the user
//! called their palette.

use std::fmt::Write;

use tonal_palette::Palette;

/// Lowercase, replace every non-alphanumeric run with a single dash,
/// trim dashes off both ends.
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_dash = true;
    for ch in input.trim().to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
            prev_dash = false;
        } else if !prev_dash {
            out.push('-');
            prev_dash = true;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

/// Render a palette as a `:root` block of CSS custom properties, one
/// variable per color per shade, plus a usage hint.
#[must_use]
pub fn palette_to_css_vars(palette: &Palette) -> String {
    let key = slugify(&palette.name);
    let mut out = String::from(":root {\n");

    for color in &palette.base_colors {
        let color_key = slugify(&color.name);
        for (shade, hex) in color.shades.iter() {
            let _ = writeln!(out, "  --{key}-{color_key}-{shade}: {hex};");
        }
    }

    out.push_str("}\n\n/* usage */\n.selector {\n");
    let _ = writeln!(out, "  /* background-color: var(--{key}-primary-500); */");
    out.push_str("}\n");
    out
}

/// Render a palette as a `theme.extend.colors` snippet for a Tailwind
/// config file.
#[must_use]
pub fn palette_to_tailwind(palette: &Palette) -> String {
    let key = slugify(&palette.name);
    let mut out = String::from("// Paste into theme.extend.colors in tailwind.config.ts\n");
    out.push_str("// e.g. export default { theme: { extend: { colors: /* here */ } } }\n");
    let _ = writeln!(out, "\"{key}\": {{");

    let blocks: Vec<String> = palette
        .base_colors
        .iter()
        .map(|color| {
            let color_key = slugify(&color.name);
            let pairs: Vec<String> = color
                .shades
                .iter()
                .map(|(shade, hex)| format!("    \"{shade}\": \"{hex}\""))
                .collect();
            format!("  \"{color_key}\": {{\n{}\n  }}", pairs.join(",\n"))
        })
        .collect();

    out.push_str(&blocks.join(",\n"));
    out.push_str("\n}\n");
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
