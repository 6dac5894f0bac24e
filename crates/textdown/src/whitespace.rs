//! Final whitespace pass over rendered text.

/// Tidy the rendered output line by line.
///
/// Leading spaces are removed while leading indent tabs are kept, trailing
/// spaces are removed, every tab then becomes `tab_width` spaces, and
/// finally leading and trailing newlines of the whole text are trimmed.
/// Interior blank lines are left as they are.
pub fn post_process(text: &str, tab_width: usize) -> String {
    let tab = " ".repeat(tab_width);
    let mut output = String::with_capacity(text.len());

    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            output.push('\n');
        }

        let body_start = line
            .find(|c: char| c != ' ' && c != '\t')
            .unwrap_or(line.len());
        let (margin, body) = line.split_at(body_start);

        for _ in margin.matches('\t') {
            output.push_str(&tab);
        }

        let body = body.trim_end_matches(' ');
        for c in body.chars() {
            if c == '\t' {
                output.push_str(&tab);
            } else {
                output.push(c);
            }
        }
    }

    output.trim_matches('\n').to_string()
}
