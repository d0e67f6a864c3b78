// src/matcher.rs

use std::collections::HashSet;

use fancy_regex::{Regex, RegexBuilder};
use log::{debug, warn};

use crate::config::MatcherConfig;
use crate::error::{MatchError, Result};
use crate::pronouns::{self, VARIANT_PATTERNS};

/// Matched substrings, unique by exact string equality, kept in first-seen order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl MatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if `matched` was already present.
    pub fn insert(&mut self, matched: &str) -> bool {
        if self.seen.contains(matched) {
            return false;
        }
        self.seen.insert(matched.to_string());
        self.ordered.push(matched.to_string());
        true
    }

    pub fn contains(&self, matched: &str) -> bool {
        self.seen.contains(matched)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// What a single query term resolves to before scanning.
#[derive(Debug, PartialEq, Eq)]
enum Expansion<'a> {
    Pronouns(&'static [&'static str]),
    Term(&'a str),
}

/// Finds whole-word occurrences of query terms (and their pronoun groups) in text.
#[derive(Clone, Debug, Default)]
pub struct TermMatcher {
    config: MatcherConfig,
}

impl TermMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatcherConfig) -> Self {
        TermMatcher { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Returns each distinct matched substring once, in the order first found.
    ///
    /// Terms that fail to compile or scan are logged and skipped.
    pub fn find_term_instances(&self, text: &str, terms: &str) -> Vec<String> {
        let mut found = MatchSet::new();
        self.collect_matches(text, terms, &mut found, false)
            .map(|_| found.into_vec())
            .unwrap_or_default()
    }

    /// Like [`find_term_instances`](Self::find_term_instances), but the first
    /// term that fails to compile or scan aborts the call.
    pub fn try_find_term_instances(&self, text: &str, terms: &str) -> Result<Vec<String>> {
        let mut found = MatchSet::new();
        self.collect_matches(text, terms, &mut found, true)?;
        Ok(found.into_vec())
    }

    fn collect_matches(
        &self,
        text: &str,
        terms: &str,
        found: &mut MatchSet,
        strict: bool,
    ) -> Result<()> {
        if text.is_empty() || terms.is_empty() {
            return Ok(());
        }

        for term in terms.split(self.config.delimiter).map(str::trim) {
            // An empty piece would match the empty string at every boundary; it is not a word.
            if term.is_empty() {
                continue;
            }
            let outcome = match expand(term) {
                Expansion::Pronouns(variants) => {
                    debug!("'{}' expands to pronoun group {:?}", term, variants);
                    self.scan_variants(text, variants, found)
                }
                Expansion::Term(term) => self
                    .compile_term(term)
                    .and_then(|re| scan(text, term, &re, found)),
            };
            if let Err(e) = outcome {
                if strict {
                    return Err(e);
                }
                warn!("Skipping term: {}", e);
            }
        }
        Ok(())
    }

    fn scan_variants(
        &self,
        text: &str,
        variants: &[&'static str],
        found: &mut MatchSet,
    ) -> Result<()> {
        for &variant in variants {
            // Every built-in variant is compiled into VARIANT_PATTERNS.
            if let Some(re) = VARIANT_PATTERNS.get(variant) {
                scan(text, variant, re, found)?;
            }
        }
        Ok(())
    }

    fn compile_term(&self, term: &str) -> Result<Regex> {
        let body = if self.config.literal_terms {
            fancy_regex::escape(term)
        } else {
            term.into()
        };
        // Ordinary terms are never the case-sensitive "I"; that one is always a pronoun.
        let pattern = pronouns::word_pattern(&body, false);
        let mut builder = RegexBuilder::new(&pattern);
        builder.backtrack_limit(self.config.backtrack_limit);
        builder.build().map_err(|source| MatchError::InvalidPattern {
            term: term.to_string(),
            source,
        })
    }
}

fn expand(term: &str) -> Expansion<'_> {
    match pronouns::expansion_for(term) {
        Some(variants) => Expansion::Pronouns(variants),
        None => Expansion::Term(term),
    }
}

fn scan(text: &str, candidate: &str, re: &Regex, found: &mut MatchSet) -> Result<()> {
    for mat in re.find_iter(text) {
        let mat = mat.map_err(|source| MatchError::Scan {
            term: candidate.to_string(),
            source,
        })?;
        if mat.as_str().is_empty() {
            continue;
        }
        if found.insert(mat.as_str()) {
            debug!("'{}' matched '{}' at byte {}", candidate, mat.as_str(), mat.start());
        }
    }
    Ok(())
}

/// Runs [`TermMatcher::find_term_instances`] with the default configuration.
pub fn find_term_instances(text: &str, terms: &str) -> Vec<String> {
    TermMatcher::new().find_term_instances(text, terms)
}
