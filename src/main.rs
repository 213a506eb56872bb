// SPDX-License-Identifier: MIT
//
// tonal — a terminal color-palette designer.
//
// This is the main binary that wires together all the crates:
//
//   tonal-color   → hex/RGB/HSL/HSV conversions, WCAG contrast
//   tonal-palette → shade ramps, harmonies, seeded palette generation
//   tonal-css     → stylesheet extraction, CSS/Tailwind/JSON export
//
// The binary itself is thin glue: parse arguments, read files, call the
// engine, print. Each subcommand maps onto one engine entry point:
//
//   shades    <hex>             → ramp.rs      generate_shades
//   harmonies <hex>             → harmony.rs   generate_harmonies + variations
//   generate  [--seed N] […]    → generator.rs create_harmonious_palette
//   import    <file> [--format] → group.rs     create_palette_from_css
//   contrast  <hexA> <hexB>     → contrast.rs  contrast_ratio
//
// Swatches print as 24-bit ANSI background runs; anything that can't
// render truecolor still gets the hex text next to every swatch.

use std::env;
use std::fs;
use std::process;

use tonal_color::{contrast_ratio, contrast_text, normalize_hex, Rgb, WCAG_AA, WCAG_AAA, WCAG_AA_LARGE};
use tonal_css::{create_palette_from_css, palette_to_css_vars, palette_to_tailwind, palettes_to_json};
use tonal_palette::harmony::{
    generate_harmonies, generate_shades_only, generate_tints, generate_tones,
    DEFAULT_VARIATION_STEPS,
};
use tonal_palette::{
    create_harmonious_palette, generate_shades, GeneratorOptions, HarmonyKind, Palette, Xorshift32,
};

fn main() {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        usage();
        process::exit(2);
    };

    let result = match command.as_str() {
        "shades" => cmd_shades(&args[1..]),
        "harmonies" => cmd_harmonies(&args[1..]),
        "generate" => cmd_generate(&args[1..]),
        "import" => cmd_import(&args[1..]),
        "contrast" => cmd_contrast(&args[1..]),
        "help" | "--help" | "-h" => {
            usage();
            Ok(())
        }
        other => Err(format!("unknown command `{other}` (try `tonal help`)")),
    };

    if let Err(message) = result {
        eprintln!("tonal: {message}");
        process::exit(1);
    }
}

/// Logging goes to stderr, filtered by RUST_LOG (default: warnings).
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn usage() {
    eprintln!(
        "tonal — a terminal color-palette designer

USAGE:
  tonal shades <hex>                     print the 11-step shade ramp
  tonal harmonies <hex>                  print harmony sets and variations
  tonal generate [--harmony KIND] [--count N] [--base HEX] [--seed N]
                                         generate a harmonious palette
  tonal import <file> [--name NAME] [--format css|tailwind|json]
                                         extract colors from a stylesheet
  tonal contrast <hexA> <hexB>           WCAG contrast ratio and verdicts

KINDS: analogous, triadic, tetradic, complementary, monochromatic"
    );
}

// ─── Subcommands ────────────────────────────────────────────────────────────

fn cmd_shades(args: &[String]) -> Result<(), String> {
    let hex = positional(args, 0).ok_or("shades: missing <hex> argument")?;
    let base = normalize_hex(hex);
    let shades = generate_shades(&base);

    println!("ramp for {base}");
    for (key, shade) in shades.iter() {
        let marker = if shade == base { "  ← base" } else { "" };
        println!("  {:>4}  {}  {shade}{marker}", key.name(), swatch(shade));
    }
    Ok(())
}

fn cmd_harmonies(args: &[String]) -> Result<(), String> {
    let hex = positional(args, 0).ok_or("harmonies: missing <hex> argument")?;
    let base = normalize_hex(hex);
    let sets = generate_harmonies(&base);

    print_row("complementary", &sets.complementary);
    print_row("analogous", &sets.analogous);
    print_row("triadic", &sets.triadic);
    print_row("tetradic", &sets.tetradic);
    println!();
    print_row("tints", &generate_tints(&base, DEFAULT_VARIATION_STEPS));
    print_row("shades", &generate_shades_only(&base, DEFAULT_VARIATION_STEPS));
    print_row("tones", &generate_tones(&base, DEFAULT_VARIATION_STEPS));
    Ok(())
}

fn cmd_generate(args: &[String]) -> Result<(), String> {
    let harmony = match flag(args, "--harmony") {
        Some(name) => Some(
            HarmonyKind::from_name(name)
                .ok_or_else(|| format!("generate: unknown harmony `{name}`"))?,
        ),
        None => None,
    };
    let count = match flag(args, "--count") {
        Some(raw) => Some(
            raw.parse::<usize>()
                .map_err(|_| format!("generate: bad count `{raw}`"))?,
        ),
        None => None,
    };
    let seed = match flag(args, "--seed") {
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| format!("generate: bad seed `{raw}`"))?,
        None => entropy_seed(),
    };

    let options = GeneratorOptions {
        harmony,
        count,
        base_hex: flag(args, "--base").map(ToOwned::to_owned),
    };

    let mut rng = Xorshift32::new(seed);
    let palette = create_harmonious_palette(&options, &mut rng);

    println!("{}  (seed {seed})", palette.name);
    print_palette(&palette);
    Ok(())
}

fn cmd_import(args: &[String]) -> Result<(), String> {
    let path = positional(args, 0).ok_or("import: missing <file> argument")?;
    let css = fs::read_to_string(path).map_err(|e| format!("import: {path}: {e}"))?;

    let name = flag(args, "--name").unwrap_or("Imported");
    let filename = std::path::Path::new(path)
        .file_name()
        .and_then(|n| n.to_str());
    let palette =
        create_palette_from_css(&css, name, filename).map_err(|e| format!("import: {e}"))?;

    match flag(args, "--format") {
        None => print_palette(&palette),
        Some("css") => print!("{}", palette_to_css_vars(&palette)),
        Some("tailwind") => print!("{}", palette_to_tailwind(&palette)),
        Some("json") => println!("{}", palettes_to_json(&[palette])),
        Some(other) => return Err(format!("import: unknown format `{other}`")),
    }
    Ok(())
}

fn cmd_contrast(args: &[String]) -> Result<(), String> {
    let a = normalize_hex(positional(args, 0).ok_or("contrast: missing <hexA>")?);
    let b = normalize_hex(positional(args, 1).ok_or("contrast: missing <hexB>")?);

    let ratio = contrast_ratio(&a, &b);
    println!("{}  on  {}  →  {ratio:.2}:1", swatch(&a), swatch(&b));
    println!("  AA  normal text (≥ {WCAG_AA}):       {}", verdict(ratio >= WCAG_AA));
    println!("  AA  large text  (≥ {WCAG_AA_LARGE}):       {}", verdict(ratio >= WCAG_AA_LARGE));
    println!("  AAA normal text (≥ {WCAG_AAA}):       {}", verdict(ratio >= WCAG_AAA));
    Ok(())
}

// ─── Output helpers ─────────────────────────────────────────────────────────

/// A two-cell truecolor swatch followed by its hex.
fn swatch(hex: &str) -> String {
    let rgb = Rgb::from_hex(hex);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (r, g, b) = (
        rgb.r.round().clamp(0.0, 255.0) as u8,
        rgb.g.round().clamp(0.0, 255.0) as u8,
        rgb.b.round().clamp(0.0, 255.0) as u8,
    );
    format!("\x1b[48;2;{r};{g};{b}m  \x1b[0m {hex}")
}

fn print_row(label: &str, hexes: &[String]) {
    print!("  {label:>13}  ");
    for hex in hexes {
        print!("{}  ", swatch(hex));
    }
    println!();
}

fn print_palette(palette: &Palette) {
    for color in &palette.base_colors {
        println!(
            "  {:<10} {}  (text {})",
            color.name,
            swatch(&color.base_hex),
            contrast_text(&color.base_hex)
        );
        print!("    ");
        for (_, shade) in color.shades.iter() {
            print!("{} ", swatch(shade));
        }
        println!();
    }
}

const fn verdict(pass: bool) -> &'static str {
    if pass { "pass" } else { "fail" }
}

/// The `index`-th argument that is neither a flag nor a flag's value.
fn positional(args: &[String], index: usize) -> Option<&str> {
    let mut seen = 0;
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg.starts_with("--") {
            skip_next = true;
            continue;
        }
        if seen == index {
            return Some(arg);
        }
        seen += 1;
    }
    None
}

/// Value of `--name value` style flags.
fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// A seed from the clock for unseeded runs — printed so the result can
/// be reproduced with `--seed`.
fn entropy_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |d| d.subsec_nanos() | 1)
}
