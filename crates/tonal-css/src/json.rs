//! JSON interchange — palettes out to and back from a JSON document.
//!
//! Export is plain serde. Import is deliberately lenient, walking the
//! document value-by-value: missing names, ids, or shade entries fall
//! back to defaults (`#888888` for absent colors) instead of failing a
//! whole palette over one field. Only two things are fatal: JSON that
//! does not parse, and a document whose top level is not an array.
//!
//! Older exports carried a flat `colors` map instead of `base_colors`;
//! those import as a single "Primary" color.

use serde_json::Value;
use tonal_color::normalize_hex;
use tonal_palette::{BaseColor, Palette, ShadeMap};

use crate::error::ImportError;
use crate::export::slugify;

/// Fallback hex for absent color fields in foreign documents.
const MISSING_HEX: &str = "#888888";

/// Serialize palettes as pretty-printed JSON.
#[must_use]
pub fn palettes_to_json(palettes: &[Palette]) -> String {
    serde_json::to_string_pretty(palettes).unwrap_or_default()
}

/// Parse a palettes JSON document, leniently.
///
/// # Errors
///
/// [`ImportError::Json`] when the text is not JSON at all;
/// [`ImportError::NotAPaletteArray`] when the top level is not an array.
pub fn parse_palettes_json(json: &str) -> Result<Vec<Palette>, ImportError> {
    let value: Value = serde_json::from_str(json)?;
    let items = value.as_array().ok_or(ImportError::NotAPaletteArray)?;

    Ok(items.iter().filter_map(parse_palette).collect())
}

fn parse_palette(item: &Value) -> Option<Palette> {
    let obj = item.as_object()?;

    let name = str_or(obj.get("name"), "Imported");
    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .map_or_else(|| slugify(&name), ToOwned::to_owned);
    let description = str_or(obj.get("description"), "");

    let base_colors = match obj.get("base_colors").and_then(Value::as_array) {
        Some(colors) => colors.iter().map(parse_base_color).collect(),
        // Legacy flat shape: one color family under "colors".
        None => vec![legacy_base_color(obj.get("colors"))],
    };

    Some(Palette {
        id,
        name,
        description,
        base_colors,
    })
}

fn parse_base_color(value: &Value) -> BaseColor {
    let obj = value.as_object();

    let name = str_or(obj.and_then(|o| o.get("name")), "Color");
    let id = obj
        .and_then(|o| o.get("id"))
        .and_then(Value::as_str)
        .map_or_else(|| slugify(&name), ToOwned::to_owned);
    let base_hex = normalize_hex(&str_or(obj.and_then(|o| o.get("base_hex")), MISSING_HEX));

    let shades = obj.and_then(|o| o.get("shades"));
    let shades = ShadeMap::from_fn(|key| {
        normalize_hex(&str_or(
            shades.and_then(|s| s.get(key.name())),
            MISSING_HEX,
        ))
    });

    BaseColor {
        id,
        name,
        base_hex,
        shades,
    }
}

fn legacy_base_color(colors: Option<&Value>) -> BaseColor {
    let base_hex = normalize_hex(&str_or(
        colors.and_then(|c| c.get("500")),
        MISSING_HEX,
    ));
    let shades = ShadeMap::from_fn(|key| {
        normalize_hex(&str_or(
            colors.and_then(|c| c.get(key.name())),
            MISSING_HEX,
        ))
    });

    BaseColor {
        id: "primary".to_owned(),
        name: "Primary".to_owned(),
        base_hex,
        shades,
    }
}

fn str_or(value: Option<&Value>, default: &str) -> String {
    value
        .and_then(Value::as_str)
        .map_or_else(|| default.to_owned(), ToOwned::to_owned)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tonal_palette::{
        GeneratorOptions, HarmonyKind, ShadeKey, Xorshift32, create_harmonious_palette,
    };

    fn sample() -> Vec<Palette> {
        let opts = GeneratorOptions {
            harmony: Some(HarmonyKind::Triadic),
            count: Some(3),
            base_hex: Some("#7c3aed".to_owned()),
        };
        vec![create_harmonious_palette(&opts, &mut Xorshift32::new(42))]
    }

    /// A generated palette survives the JSON round-trip exactly.
    #[test]
    fn roundtrip() {
        let palettes = sample();
        let json = palettes_to_json(&palettes);
        let parsed = parse_palettes_json(&json).expect("parse");
        assert_eq!(parsed, palettes);
    }

    /// Syntactically broken JSON is a Json error.
    #[test]
    fn broken_json() {
        assert!(matches!(
            parse_palettes_json("{ nope"),
            Err(ImportError::Json(_))
        ));
    }

    /// A non-array top level is rejected.
    #[test]
    fn non_array_rejected() {
        assert!(matches!(
            parse_palettes_json(r#"{"name": "x"}"#),
            Err(ImportError::NotAPaletteArray)
        ));
    }

    /// Missing fields fall back instead of failing.
    #[test]
    fn lenient_defaults() {
        let parsed = parse_palettes_json(r#"[{}]"#).expect("parse");
        assert_eq!(parsed.len(), 1);
        let p = &parsed[0];
        assert_eq!(p.name, "Imported");
        assert_eq!(p.id, "imported");
        assert_eq!(p.base_colors.len(), 1);
        assert_eq!(p.base_colors[0].name, "Primary");
        assert_eq!(p.base_colors[0].base_hex, "#888888");
        assert_eq!(p.base_colors[0].shades.get(ShadeKey::S500), "#888888");
    }

    /// The legacy flat `colors` shape imports as a single Primary.
    #[test]
    fn legacy_colors_shape() {
        let json = r##"[{"name": "Old", "colors": {"500": "#7C3AED", "900": "#2e1065"}}]"##;
        let parsed = parse_palettes_json(json).expect("parse");
        let color = &parsed[0].base_colors[0];
        assert_eq!(color.name, "Primary");
        assert_eq!(color.base_hex, "#7c3aed");
        assert_eq!(color.shades.get(ShadeKey::S500), "#7c3aed");
        assert_eq!(color.shades.get(ShadeKey::S900), "#2e1065");
        assert_eq!(color.shades.get(ShadeKey::S100), "#888888");
    }

    /// Malformed hex entries normalize instead of erroring.
    #[test]
    fn hex_normalized_on_import() {
        let json = r#"[{"name": "N", "base_colors": [{"name": "C", "base_hex": "ABC"}]}]"#;
        let parsed = parse_palettes_json(json).expect("parse");
        assert_eq!(parsed[0].base_colors[0].base_hex, "#aabbcc");
    }
}
