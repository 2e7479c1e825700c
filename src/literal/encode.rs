//! Literal encoding

use super::{ESCAPE, QUOTE};

/// Whether a character must be escaped inside a literal
fn needs_escape(c: char) -> bool {
    c == ESCAPE || c == QUOTE
}

/// Wrap content in quotes, escaping backslashes and quotes
pub fn encode(content: &str) -> String {
    let mut encoded = String::with_capacity(content.len() + 2);
    encoded.push(QUOTE);
    for c in content.chars() {
        if needs_escape(c) {
            encoded.push(ESCAPE);
        }
        encoded.push(c);
    }
    encoded.push(QUOTE);
    encoded
}

/// Length in characters of `encode(content)`, without building it
pub fn encoded_len(content: &str) -> usize {
    content
        .chars()
        .map(|c| if needs_escape(c) { 2 } else { 1 })
        .sum::<usize>()
        + 2
}
