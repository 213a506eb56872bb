//! Stylesheet normalization — the scanner in front of the rule stages.
//!
//! Raw stylesheets arrive minified, multi-line, or commented in ways
//! that break naive pattern matching. A single linear pass rewrites the
//! text into a predictable shape the extraction rules can rely on:
//!
//! - `/* … */` and `//` comments removed
//! - every whitespace run collapsed to one space
//! - `{` and `}` always surrounded by single spaces
//! - `;` and `:` attached to the preceding token, one space after
//!
//! String literals are not honored — a `//` inside a quoted value is
//! treated as a comment, matching the best-effort contract of the whole
//! pipeline. No backtracking, no recursion: cost is linear in the input.

/// Normalize stylesheet text for the extraction stages.
#[must_use]
pub fn normalize_css(input: &str) -> String {
    let stripped = strip_comments(input);

    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;

    for ch in stripped.chars() {
        match ch {
            c if c.is_whitespace() => pending_space = true,
            '{' | '}' => {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push(ch);
                pending_space = true;
            }
            ';' | ':' => {
                // Attach to the previous token, drop any space before.
                out.push(ch);
                pending_space = true;
            }
            _ => {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                out.push(ch);
                pending_space = false;
            }
        }
    }

    out
}

/// Remove block and line comments in one pass.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '/' {
            match chars.peek() {
                Some('*') => {
                    chars.next();
                    // Skip to the closing */ (or end of input).
                    let mut prev = '\0';
                    for c in chars.by_ref() {
                        if prev == '*' && c == '/' {
                            break;
                        }
                        prev = c;
                    }
                    // A comment separates tokens like whitespace would.
                    out.push(' ');
                }
                Some('/') => {
                    chars.next();
                    // Line comment: skip to end of line, keep the newline.
                    for c in chars.by_ref() {
                        if c == '\n' {
                            out.push('\n');
                            break;
                        }
                    }
                }
                _ => out.push(ch),
            }
        } else {
            out.push(ch);
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Multi-line rules collapse to the canonical single-space shape.
    #[test]
    fn collapses_structure() {
        let css = ".btn {\n    color:   #fff;\n    background : red ;\n}";
        assert_eq!(
            normalize_css(css),
            ".btn { color: #fff; background: red; }"
        );
    }

    /// Minified input gains the spacing the rules expect.
    #[test]
    fn expands_minified() {
        let css = ".a{color:#fff}.b{color:#000}";
        assert_eq!(
            normalize_css(css),
            ".a { color: #fff } .b { color: #000 }"
        );
    }

    /// Block comments vanish, including multi-line ones. (The `:` in
    /// `:root` is re-spaced like any other colon; the variable rules
    /// don't read selector text, so this is harmless.)
    #[test]
    fn strips_block_comments() {
        let css = "/* brand\n colors */ :root { --x: #fff; /* inline */ }";
        assert_eq!(normalize_css(css), ": root { --x: #fff; }");
    }

    /// Line comments vanish up to the newline.
    #[test]
    fn strips_line_comments() {
        let css = "// header\n$brand: #7c3aed; // note\n$other: #000;";
        assert_eq!(normalize_css(css), "$brand: #7c3aed; $other: #000;");
    }

    /// An unterminated block comment swallows the rest without panicking.
    #[test]
    fn unterminated_comment() {
        let css = ".a { color: red; } /* dangling";
        assert_eq!(normalize_css(css), ".a { color: red; }");
    }

    /// Empty input stays empty.
    #[test]
    fn empty_input() {
        assert_eq!(normalize_css(""), "");
    }
}
