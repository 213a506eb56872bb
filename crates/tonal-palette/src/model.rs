//! The palette data model.
//!
//! A [`ShadeMap`] is a *total* map: exactly one hex string per
//! [`ShadeKey`], no gaps, ever. Construction APIs make an incomplete map
//! unrepresentable. [`BaseColor`] pairs a base hex with its generated
//! ramp; [`Palette`] is an ordered set of base colors.
//!
//! Serialization follows the interchange JSON format: shade maps
//! serialize as `{"50": "#…", …, "950": "#…"}` objects. Lenient parsing
//! of foreign JSON lives at the import boundary, not here.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One of the 11 canonical ramp steps, ordered light → dark.
///
/// Each key carries a canonical target lightness used as the generation
/// anchor; see [`Self::target_lightness`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShadeKey {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl ShadeKey {
    /// All keys in canonical light → dark order.
    pub const ALL: [Self; 11] = [
        Self::S50,
        Self::S100,
        Self::S200,
        Self::S300,
        Self::S400,
        Self::S500,
        Self::S600,
        Self::S700,
        Self::S800,
        Self::S900,
        Self::S950,
    ];

    /// The numeric label of this key (`"50"` … `"950"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::S50 => "50",
            Self::S100 => "100",
            Self::S200 => "200",
            Self::S300 => "300",
            Self::S400 => "400",
            Self::S500 => "500",
            Self::S600 => "600",
            Self::S700 => "700",
            Self::S800 => "800",
            Self::S900 => "900",
            Self::S950 => "950",
        }
    }

    /// Parse a key from its numeric label.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|k| k.name() == name).copied()
    }

    /// Canonical target lightness for this step — the anchor the ramp
    /// generator aims each step at.
    #[must_use]
    pub const fn target_lightness(self) -> f64 {
        match self {
            Self::S50 => 97.0,
            Self::S100 => 94.0,
            Self::S200 => 88.0,
            Self::S300 => 81.0,
            Self::S400 => 69.0,
            Self::S500 => 56.0,
            Self::S600 => 48.0,
            Self::S700 => 40.0,
            Self::S800 => 32.0,
            Self::S900 => 25.0,
            Self::S950 => 15.0,
        }
    }

    /// Position of this key in the canonical order (0 = `50`).
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|k| *k == self).unwrap_or(0)
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ShadeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A total map from [`ShadeKey`] to hex color — exactly 11 entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadeMap([String; 11]);

impl ShadeMap {
    /// Build a map by computing each key's hex in canonical order.
    pub fn from_fn(f: impl FnMut(ShadeKey) -> String) -> Self {
        Self(ShadeKey::ALL.map(f))
    }

    /// Build a map with the same hex at every key.
    #[must_use]
    pub fn uniform(hex: &str) -> Self {
        Self::from_fn(|_| hex.to_owned())
    }

    /// The hex at `key`.
    #[must_use]
    pub fn get(&self, key: ShadeKey) -> &str {
        &self.0[key.index()]
    }

    /// Replace the hex at `key`.
    pub fn set(&mut self, key: ShadeKey, hex: String) {
        self.0[key.index()] = hex;
    }

    /// Iterate `(key, hex)` pairs in canonical light → dark order.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, &str)> {
        ShadeKey::ALL.iter().map(|k| (*k, self.get(*k)))
    }
}

impl Serialize for ShadeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(11))?;
        for (key, hex) in self.iter() {
            map.serialize_entry(key.name(), hex)?;
        }
        map.end()
    }
}

/// A user-chosen base color plus its generated shade ramp.
///
/// Invariant: `shades` is always fully populated and consistent with
/// `base_hex` per the ramp algorithm — re-derived whenever `base_hex`
/// changes, with the exact base hex at its anchor key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseColor {
    pub id: String,
    pub name: String,
    pub base_hex: String,
    pub shades: ShadeMap,
}

/// An ordered set of base colors with identity and a display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_colors: Vec<BaseColor>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
