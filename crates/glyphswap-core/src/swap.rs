// Transform results and their presentation markup

use serde::{Deserialize, Serialize};

use crate::key::EncoderKey;

/// A successful word replacement.
///
/// The original word is kept alongside the produced text so that callers
/// can always show what was replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swap {
    pub encoder: EncoderKey,
    pub original: String,
    pub text: String,
}

impl Swap {
    pub fn new(encoder: EncoderKey, original: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            encoder,
            original: original.into(),
            text: text.into(),
        }
    }

    /// Render the swap as an HTML span carrying the original word.
    pub fn markup(&self) -> String {
        format!(
            "<span class=\"{} glyphswap-swapped glyphswap-tooltip\" data-glyphswap-original=\"{}\">{}</span>",
            self.encoder.css_class(),
            escape_html(&self.original),
            escape_html(&self.text),
        )
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
