// src/config.rs

/// Default bound on backtracking steps for user-supplied term patterns.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Knobs for [`TermMatcher`](crate::TermMatcher). Defaults reproduce plain
/// `find_term_instances` behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Separator between query terms.
    pub delimiter: char,
    /// Escape non-pronoun terms so pattern metacharacters match literally.
    /// Off by default: terms are used as raw pattern source.
    pub literal_terms: bool,
    /// Backtracking steps allowed per scan of a non-pronoun term before it fails.
    pub backtrack_limit: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        MatcherConfig {
            delimiter: ',',
            literal_terms: false,
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

impl MatcherConfig {
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn literal_terms(mut self, literal: bool) -> Self {
        self.literal_terms = literal;
        self
    }

    pub fn backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }
}
