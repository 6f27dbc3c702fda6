//! Candidate location: finds the JSON payload embedded in a raw completion.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalizer::shape::Container;

static FENCED_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").expect("valid regex"));
static FENCED_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(\[.*?\])\s*```").expect("valid regex"));

/// Where the candidate payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Inside a ``` / ```json fence.
    Fenced(&'a str),
    /// First balanced bracket span in free text.
    Scanned(&'a str),
    /// Nothing resembling the container was found.
    Missing,
}

/// Locates the candidate span for `container`.
///
/// Fenced blocks win over bare spans; the fence match is lazy so trailing prose
/// and later fences are never swallowed.
pub fn locate(raw: &str, container: Container) -> Candidate<'_> {
    let fenced = match container {
        Container::Object => &*FENCED_OBJECT,
        Container::Array => &*FENCED_ARRAY,
    };
    if let Some(m) = fenced.captures(raw).and_then(|c| c.get(1)) {
        return Candidate::Fenced(m.as_str());
    }
    match balanced_span(raw, container) {
        Some(span) => Candidate::Scanned(span),
        None => Candidate::Missing,
    }
}

/// Returns the span from the first opener of `container` to its matching closer.
///
/// Brackets of either kind inside JSON string literals are ignored. The scan
/// stops at the first depth zero-crossing; an opener that never closes
/// (truncated output) yields `None`.
pub fn balanced_span(raw: &str, container: Container) -> Option<&str> {
    let (open, close) = container.delimiters();
    let start = raw.find(open)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&raw[start..end]);
                }
            }
            _ => {}
        }
    }
    None
}
