//! Utility functions and constants for plain-text rendering.

/// Parents that swallow the trailing newlines of their last element child.
pub const BLOCK_ELEMENTS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "h7", "h8", "h9", "div", "p",
    "blockquote", "pre", "ul", "ol", "li", "dl", "dd", "dt",
];

/// Elements whose content never reaches the output
pub const HIDDEN_ELEMENTS: &[&str] = &["style", "head", "title", "meta", "link", "script"];

/// Check if a tag is a block-level element
pub fn is_block(tag: &str) -> bool {
    BLOCK_ELEMENTS.contains(&tag)
}

/// Repeat a character n times
pub fn repeat(c: char, n: usize) -> String {
    c.to_string().repeat(n)
}

/// Collapse every run of ASCII whitespace, newlines included, to one space.
///
/// Non-breaking spaces are content and are left alone.
pub fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_whitespace = false;

    for c in s.chars() {
        if c.is_ascii_whitespace() {
            if !prev_was_whitespace {
                result.push(' ');
                prev_was_whitespace = true;
            }
        } else {
            result.push(c);
            prev_was_whitespace = false;
        }
    }

    result
}

/// Prefix every line, empty ones included, with a tab.
pub fn indent(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("\t{}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
