//! Input normalization ahead of parsing.
//!
//! Line endings are unified to `\n` and, unless the markup already
//! declares its encoding, a `<meta charset="utf-8">` is injected so the
//! document states the encoding it is actually in.

use once_cell::sync::Lazy;
use regex::Regex;

/// Meta element injected when no declaration is present
pub const ENCODING_DECLARATION: &str = r#"<meta charset="utf-8">"#;

static XML_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*<\?xml\b[^>]*\?>").expect("valid regex"));

static META_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<meta\b[^>]*\bcharset\s*=").expect("valid regex"));

// Doctype, <html> and <head> must stay ahead of the injected meta, or the
// tree builder reports it as misplaced.
static PREAMBLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:<!doctype\b[^>]*>\s*)?(?:<html\b[^>]*>\s*)?(?:<head\b[^>]*>)?")
        .expect("valid regex")
});

/// Replace `\r\n` and lone `\r` with `\n`.
pub fn normalize_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Whether the markup opens with an XML declaration.
pub fn has_xml_declaration(input: &str) -> bool {
    XML_DECLARATION.is_match(input)
}

/// Whether the markup carries an XML declaration or a charset meta.
pub fn has_encoding_declaration(input: &str) -> bool {
    has_xml_declaration(input) || META_CHARSET.is_match(input)
}

/// Remove a leading `<?xml ...?>` declaration, if any.
pub fn strip_xml_declaration(input: &str) -> &str {
    match XML_DECLARATION.find(input) {
        Some(found) => &input[found.end()..],
        None => input,
    }
}

/// Inject [`ENCODING_DECLARATION`] unless one is already present.
pub fn ensure_encoding_declaration(input: &str) -> String {
    if has_encoding_declaration(input) {
        return input.to_string();
    }

    let at = PREAMBLE.find(input).map_or(0, |found| found.end());
    let mut output = String::with_capacity(input.len() + ENCODING_DECLARATION.len());
    output.push_str(&input[..at]);
    output.push_str(ENCODING_DECLARATION);
    output.push_str(&input[at..]);
    output
}

/// Full normalization: line endings first, then the encoding declaration.
pub fn normalize_input(input: &str) -> String {
    ensure_encoding_declaration(&normalize_line_endings(input))
}
