//! Code Fence Stripping
//!
//! Generative services often wrap structured output in a markdown code
//! fence. Stripping is an explicit, order-sensitive match:
//!
//! 1. a fence labeled `json` (```` ```json ````)
//! 2. a plain fence (```` ``` ````)
//! 3. otherwise nothing is removed
//!
//! Only the markers and the whitespace touching them are removed; interior
//! content is returned as a borrowed slice of the input.

const FENCE: &str = "```";
const LABELED_FENCE: &str = "```json";

/// Which fence form was found at the start of a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Labeled,
    Plain,
    None,
}

impl std::fmt::Display for FenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FenceKind::Labeled => write!(f, "labeled"),
            FenceKind::Plain => write!(f, "plain"),
            FenceKind::None => write!(f, "none"),
        }
    }
}

/// Trim the response and remove a surrounding code fence if present.
pub fn strip_code_fence(raw: &str) -> (FenceKind, &str) {
    let text = raw.trim();

    if let Some(rest) = text.strip_prefix(LABELED_FENCE) {
        return (FenceKind::Labeled, strip_closing(rest.trim_start()));
    }

    if let Some(rest) = text.strip_prefix(FENCE) {
        return (FenceKind::Plain, strip_closing(rest.trim_start()));
    }

    (FenceKind::None, text)
}

/// Remove a trailing fence and the whitespace before it
fn strip_closing(text: &str) -> &str {
    match text.strip_suffix(FENCE) {
        Some(inner) => inner.trim_end(),
        None => text,
    }
}
