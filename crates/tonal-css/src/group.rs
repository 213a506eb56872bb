//! Grouping — turn loose matches into families with complete shade maps.
//!
//! Matches sharing an inferred family name collapse into one family.
//! Explicitly observed shades always win; every gap is synthesized by
//! seeding the ramp generator from the best observed anchor — `500`
//! preferred, then `600`, then `400`, then whatever arrived first.
//!
//! Precedence between matches for the same family + shade follows the
//! origin: variable declarations overwrite, everything else is
//! first-match-wins.

use std::collections::HashSet;

use tracing::debug;

use tonal_palette::{
    BaseColor, Palette, ShadeKey, ShadeMap, assign_shade_by_lightness, generate_shades,
};

use crate::error::ImportError;
use crate::export::slugify;
use crate::extract::{ColorMatch, scan_matches};
use crate::infer::extract_color_and_shade;

/// A named color family recovered from a stylesheet, with a complete
/// 11-step shade map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorFamily {
    pub name: String,
    pub shades: ShadeMap,
}

/// Shades observed for one family, in arrival order.
struct Observed {
    name: String,
    entries: Vec<(ShadeKey, String)>,
}

impl Observed {
    fn get(&self, key: ShadeKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, hex)| hex.as_str())
    }

    fn set(&mut self, key: ShadeKey, hex: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = hex,
            None => self.entries.push((key, hex)),
        }
    }

    /// The hex to seed ramp synthesis from: 500, else 600, else 400,
    /// else the first shade that arrived.
    fn anchor(&self) -> Option<&str> {
        self.get(ShadeKey::S500)
            .or_else(|| self.get(ShadeKey::S600))
            .or_else(|| self.get(ShadeKey::S400))
            .or_else(|| self.entries.first().map(|(_, hex)| hex.as_str()))
    }
}

/// Group extracted matches into complete color families.
///
/// Families come back in discovery order. Never fails; no matches means
/// no families.
#[must_use]
pub fn group_matches(matches: &[ColorMatch]) -> Vec<ColorFamily> {
    let mut groups: Vec<Observed> = Vec::new();
    let mut processed: HashSet<(String, ShadeKey)> = HashSet::new();

    for m in matches {
        let (family, inferred) = extract_color_and_shade(&m.name);
        let shade = inferred.unwrap_or_else(|| assign_shade_by_lightness(&m.hex));

        // First match wins unless a variable declaration overrides it.
        let seen = processed.contains(&(family.clone(), shade));
        if seen && !m.origin.is_authoritative() {
            continue;
        }

        let group = match groups.iter().position(|g| g.name == family) {
            Some(i) => &mut groups[i],
            None => {
                groups.push(Observed {
                    name: family.clone(),
                    entries: Vec::new(),
                });
                let last = groups.len() - 1;
                &mut groups[last]
            }
        };
        group.set(shade, m.hex.clone());
        processed.insert((family, shade));
    }

    groups
        .into_iter()
        .filter_map(|group| {
            let anchor = group.anchor()?.to_owned();
            let generated = generate_shades(&anchor);
            let shades = ShadeMap::from_fn(|key| {
                group
                    .get(key)
                    .map_or_else(|| generated.get(key).to_owned(), ToOwned::to_owned)
            });
            Some(ColorFamily {
                name: group.name,
                shades,
            })
        })
        .collect()
}

/// Extract a stylesheet straight into a palette.
///
/// The one place extraction surfaces an error: an input with zero
/// recognizable colors cannot become a palette.
///
/// # Errors
///
/// [`ImportError::NoColorsFound`] when no family could be recovered.
pub fn create_palette_from_css(
    css: &str,
    name: &str,
    filename: Option<&str>,
) -> Result<Palette, ImportError> {
    let matches = scan_matches(css);
    let families = group_matches(&matches);
    debug!(matches = matches.len(), families = families.len(), "css import");

    if families.is_empty() {
        return Err(ImportError::NoColorsFound);
    }

    let base_colors = families
        .into_iter()
        .map(|family| BaseColor {
            id: slugify(&family.name),
            base_hex: family.shades.get(ShadeKey::S500).to_owned(),
            name: family.name,
            shades: family.shades,
        })
        .collect();

    Ok(Palette {
        id: slugify(name),
        name: name.to_owned(),
        description: format!("Imported from {}", filename.unwrap_or("CSS")),
        base_colors,
    })
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

    /// The documented extraction round-trip: two observed shades stay
    /// exact, the other nine are synthesized into a descending ramp.
    #[test]
    fn brand_roundtrip() {
        let matches =
            scan_matches(":root{--brand-500:#7c3aed;--brand-700:#4c1d95;}");
        let families = group_matches(&matches);
        assert_eq!(families.len(), 1);

        let brand = &families[0];
        assert_eq!(brand.name, "brand");
        assert_eq!(brand.shades.get(ShadeKey::S500), "#7c3aed");
        assert_eq!(brand.shades.get(ShadeKey::S700), "#4c1d95");

        // All eleven present and monotonically darkening (the observed
        // 700 is darker than its synthesized neighbors by construction).
        let values: Vec<f64> = brand.shades.iter().map(|(_, hex)| lightness(hex)).collect();
        assert_eq!(values.len(), 11);
        for pair in values.windows(2) {
            assert!(pair[0] >= pair[1] - 2.0, "ramp rises: {values:?}");
        }
    }

    /// Shades without an explicit number bucket by lightness.
    #[test]
    fn shade_assigned_by_lightness() {
        let matches = scan_matches("$ink: #111827;");
        let families = group_matches(&matches);
        assert_eq!(families.len(), 1);
        // #111827 has lightness ~11 → bucket 900, and it stays exact there.
        assert_eq!(families[0].shades.get(ShadeKey::S900), "#111827");
    }

    /// A variable declaration overrides a utility-class match for the
    /// same family + shade; a later non-variable match does not.
    #[test]
    fn variable_precedence() {
        let css = ".bg-sky-500 { background-color: #038bd3; }\n:root { --sky-500: #0ea5e9; }";
        let families = group_matches(&scan_matches(css));
        let sky = families
            .iter()
            .find(|f| f.name == "sky")
            .expect("sky family");
        // css-var stage runs first and is authoritative either way.
        assert_eq!(sky.shades.get(ShadeKey::S500), "#0ea5e9");
    }

    /// Families preserve discovery order.
    #[test]
    fn discovery_order() {
        let css = ":root { --alpha-500: #ef4444; --beta-500: #3b82f6; }";
        let families = group_matches(&scan_matches(css));
        let names: Vec<&str> = families.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["alpha", "beta"]);
    }

    /// Palette import carries family names and errors on empty input.
    #[test]
    fn palette_from_css() {
        let palette =
            create_palette_from_css(":root { --brand-500: #7c3aed; }", "Site", None)
                .expect("palette");
        assert_eq!(palette.name, "Site");
        assert_eq!(palette.id, "site");
        assert_eq!(palette.base_colors.len(), 1);
        assert_eq!(palette.base_colors[0].name, "brand");
        assert_eq!(palette.base_colors[0].base_hex, "#7c3aed");
        assert_eq!(palette.description, "Imported from CSS");
    }

    /// Zero colors is the boundary error, not a panic.
    #[test]
    fn empty_css_errors() {
        let err = create_palette_from_css(".a { margin: 0; }", "Empty", None);
        assert!(matches!(err, Err(ImportError::NoColorsFound)));
    }

    /// The filename lands in the description when given.
    #[test]
    fn filename_in_description() {
        let palette = create_palette_from_css(
            "$brand: #10b981;",
            "Site",
            Some("theme.scss"),
        )
        .expect("palette");
        assert_eq!(palette.description, "Imported from theme.scss");
    }
}
