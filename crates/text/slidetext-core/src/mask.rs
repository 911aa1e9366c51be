//! Placeholder masks.
//!
//! A mask keeps the whitespace layout of a string and hides everything else
//! behind a single placeholder glyph per grapheme cluster, so the masked text
//! occupies the same slots as the unmasked text when rendered.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// U+00A0, used where an "empty" text still needs to hold its line height.
pub const NO_BREAK_SPACE: char = '\u{a0}';

/// Glyph substituted for non-whitespace clusters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    /// `_`, the "typing" scaffold.
    #[default]
    Underscore,
    /// U+00A0, renders as nothing but keeps the layout.
    Invisible,
}

impl Placeholder {
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Placeholder::Underscore => '_',
            Placeholder::Invisible => NO_BREAK_SPACE,
        }
    }
}

#[inline]
fn is_whitespace_cluster(cluster: &str) -> bool {
    cluster.chars().all(char::is_whitespace)
}

/// Number of extended grapheme clusters in `text`.
#[inline]
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Replace every non-whitespace grapheme cluster with `placeholder`.
///
/// The result has the same grapheme count as `text` and whitespace clusters at
/// the same positions, copied verbatim.
pub fn mask_to_placeholder(text: &str, placeholder: Placeholder) -> String {
    let glyph = placeholder.as_char();
    let mut out = String::with_capacity(text.len());
    for cluster in text.graphemes(true) {
        if is_whitespace_cluster(cluster) {
            out.push_str(cluster);
        } else {
            out.push(glyph);
        }
    }
    out
}

/// `mask_to_placeholder(text, Placeholder::Underscore)`
#[inline]
pub fn to_underscores(text: &str) -> String {
    mask_to_placeholder(text, Placeholder::Underscore)
}

/// `mask_to_placeholder(text, Placeholder::Invisible)`
#[inline]
pub fn to_invisible(text: &str) -> String {
    mask_to_placeholder(text, Placeholder::Invisible)
}
