//! Trigger matching cascade.
//!
//! A single trigger phrase is compared against an utterance in three
//! stages, cheapest first: exact equality, substring containment, then
//! Levenshtein similarity. The first stage that passes decides the match
//! kind, so a phrase that is both a substring and highly similar is always
//! reported as a substring match.

use crate::similarity::similarity;

/// How a trigger phrase matched the utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Utterance and trigger are equal after normalization.
    Exact,
    /// The trigger appears verbatim inside the utterance.
    Substring,
    /// Similarity between utterance and trigger exceeds the threshold.
    Fuzzy,
}

/// Compare a normalized utterance against a normalized trigger phrase.
///
/// Both inputs must already be canonical (see [`crate::normalize`]); the
/// cascade itself never rewrites them. Returns `None` when either side is
/// empty or no stage passes. The fuzzy stage requires similarity strictly
/// greater than `threshold`, so a score exactly at the threshold does not
/// match.
pub fn match_trigger(utterance: &str, trigger: &str, threshold: f64) -> Option<MatchKind> {
    if utterance.is_empty() || trigger.is_empty() {
        return None;
    }

    if utterance == trigger {
        return Some(MatchKind::Exact);
    }

    if utterance.contains(trigger) {
        return Some(MatchKind::Substring);
    }

    if similarity(utterance, trigger) > threshold {
        return Some(MatchKind::Fuzzy);
    }

    None
}
