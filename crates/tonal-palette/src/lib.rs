//! # tonal-palette — the palette model and its generators
//!
//! Everything between a single hex string and a finished palette:
//!
//! ```text
//! base hex
//!     │
//!     ▼
//! ramp.rs:      11-step tonal shade ramp (50 … 950), exact base anchored
//!     │
//!     ▼
//! harmony.rs:   hue-rotated harmony sets, tint/shade/tone variations
//!     │
//!     ▼
//! generator.rs: seeded multi-color palette synthesis + display naming
//!     │
//!     ▼
//! model.rs:     ShadeKey / ShadeMap / BaseColor / Palette records
//! ```
//!
//! All generation happens in HSL; hue is held constant across a ramp and
//! only lightness and saturation move. That is a deliberate simplification
//! (professional tonal systems bend hue toward the extremes) — downstream
//! behavior like duplicate-hex detection and exact anchor preservation
//! depends on this algorithm's output, so it stays as is.
//!
//! The only randomness lives in [`rng::Xorshift32`], which callers seed
//! and inject; every function here is deterministic given its inputs.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Mathematical code uses small integer-to-float casts (loop indices, angles).
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/saturation variable names are inherently similar.
#![allow(clippy::similar_names)]
// u32→usize index casts are lossless on every supported target.
#![allow(clippy::cast_possible_truncation)]

pub mod generator;
pub mod harmony;
pub mod model;
pub mod ramp;
pub mod rng;

pub use generator::{GeneratorOptions, HarmonyKind, create_harmonious_palette};
pub use harmony::{Harmonies, generate_harmonies};
pub use model::{BaseColor, Palette, ShadeKey, ShadeMap};
pub use ramp::{assign_shade_by_lightness, generate_shades};
pub use rng::Xorshift32;
