//! # tonal-css — stylesheet color extraction and interchange formats
//!
//! The import side recovers named color families from arbitrary CSS/SCSS
//! text; the export side renders palettes back out as CSS custom
//! properties, Tailwind config snippets, or JSON.
//!
//! Extraction is a fixed pipeline — a normalizing scanner followed by an
//! ordered list of extractor stages, each a small bounded rule:
//!
//! ```text
//! raw CSS text
//!     │
//!     ▼
//! scan.rs:    strip comments, collapse whitespace around { } ; :
//!     │
//!     ▼
//! extract.rs: css-var → sass-var → sass-map → property → utility → css-in-js
//!     │             (each resolving values through value.rs)
//!     ▼
//! infer.rs:   family name + shade number from each identifier
//!     │
//!     ▼
//! group.rs:   families with complete 11-step maps (gaps synthesized)
//! ```
//!
//! The stage order is a precedence order: custom-property and Sass
//! variable declarations are authoritative over generic property and
//! utility-class matches for the same family + shade.
//!
//! The whole pipeline is best-effort and never fails: unparseable
//! fragments are skipped, `var(...)` references and transitive Sass
//! aliases are deliberately not resolved, and a stylesheet with no
//! recognizable colors yields an empty family list. The only errors are
//! boundary ones — "no colors found" when building a palette, and
//! malformed JSON on palette import.

pub mod error;
pub mod export;
pub mod extract;
pub mod group;
pub mod infer;
pub mod json;
pub mod scan;
pub mod value;

pub use error::ImportError;
pub use export::{palette_to_css_vars, palette_to_tailwind, slugify};
pub use extract::{ColorMatch, MatchOrigin, scan_matches};
pub use group::{ColorFamily, create_palette_from_css, group_matches};
pub use infer::extract_color_and_shade;
pub use json::{palettes_to_json, parse_palettes_json};
pub use value::parse_color_value;
