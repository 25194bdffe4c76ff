//! Text normalization applied to utterances and trigger phrases.
//!
//! Both sides of every comparison go through [`normalize`], so the matcher
//! only ever sees canonical text. The pipeline:
//! - Unicode lowercasing
//! - canonical decomposition (NFD) followed by removal of combining marks,
//!   so "módulo" and "modulo" compare equal
//! - removal of punctuation and symbols (alphanumerics, underscores and
//!   whitespace survive)
//! - trimming and collapsing of internal whitespace runs to single spaces

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize `text` for matching.
///
/// The function is idempotent: normalizing already-normalized text returns
/// it unchanged.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
