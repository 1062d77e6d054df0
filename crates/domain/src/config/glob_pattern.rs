// crates/domain/src/config/glob_pattern.rs
use globset::{Glob, GlobMatcher};

/// A compiled glob, matched against root-relative path strings.
///
/// `globset` semantics apply: `*` crosses `/` and `{a,b}` alternation is
/// available. Matching always runs on the normalized relative string, never
/// on OS-specific paths.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    original: String,
    matcher: GlobMatcher,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self, globset::Error> {
        let matcher = Glob::new(pattern)?.compile_matcher();
        Ok(Self {
            original: pattern.to_string(),
            matcher,
        })
    }

    pub fn matches(&self, value: &str) -> bool {
        self.matcher.is_match(value)
    }

    /// The source text the pattern was compiled from.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.original
    }
}
