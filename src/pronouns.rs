// src/pronouns.rs

use std::collections::HashMap;

use fancy_regex::Regex;
use lazy_static::lazy_static;
use once_cell::sync::Lazy;

/// The only candidate matched with its exact casing.
pub const CASE_SENSITIVE_PRONOUN: &str = "I";

/// Built-in pronoun groups: canonical key followed by its surface forms, in scan order.
pub static PRONOUN_GROUPS: &[(&str, &[&str])] = &[
    ("i", &["I", "me", "my", "mine", "myself"]),
    ("we", &["we", "us", "our", "ours", "ourselves"]),
    ("you", &["you", "your", "yourself"]),
];

// Lower-cased variant -> the full group it belongs to.
static VARIANT_INDEX: Lazy<HashMap<String, &'static [&'static str]>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for &(_, variants) in PRONOUN_GROUPS {
        for &variant in variants {
            index.entry(variant.to_lowercase()).or_insert(variants);
        }
    }
    index
});

lazy_static! {
    /// Whole-word patterns for every built-in variant, compiled once.
    pub static ref VARIANT_PATTERNS: HashMap<&'static str, Regex> = {
        let mut patterns = HashMap::new();
        for &(_, variants) in PRONOUN_GROUPS {
            for &variant in variants {
                let source = word_pattern(&fancy_regex::escape(variant), is_case_sensitive(variant));
                let re = Regex::new(&source)
                    .unwrap_or_else(|e| panic!("Pronoun pattern compile error for '{}': {}", variant, e));
                patterns.insert(variant, re);
            }
        }
        patterns
    };
}

/// Builds the whole-word pattern source for `body`.
pub fn word_pattern(body: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        format!(r"\b{}\b", body)
    } else {
        format!(r"(?i)\b{}\b", body)
    }
}

pub fn is_case_sensitive(candidate: &str) -> bool {
    candidate == CASE_SENSITIVE_PRONOUN
}

/// Returns the full variant list to scan for `term`, if it names a pronoun.
///
/// A canonical key wins first; otherwise any variant pulls in its whole group.
/// Both lookups ignore the casing of `term`.
pub fn expansion_for(term: &str) -> Option<&'static [&'static str]> {
    let lowered = term.to_lowercase();
    PRONOUN_GROUPS
        .iter()
        .find(|(key, _)| *key == lowered)
        .map(|&(_, variants)| variants)
        .or_else(|| VARIANT_INDEX.get(&lowered).copied())
}
