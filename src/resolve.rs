use thiserror::Error;

/// How the query matched: as a syntactically valid tag, or via the
/// English-name fallback search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Tag,
    Name,
}

/// One related tag, paired with its display name ("Unknown" when the
/// tag cannot be described).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedCode {
    pub tag: String,
    pub name: String,
}

/// The full answer for one query.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Standardized BCP 47 tag, e.g. `en-US`.
    pub tag: String,
    /// Display name, e.g. `French (Canada)`.
    pub description: String,
    /// Likely script per CLDR likely subtags; `None` when no data exists.
    pub likely_script: Option<String>,
    /// Identical or near-identical codes, ordered, deduplicated, and
    /// never containing `tag` itself.
    pub related: Vec<RelatedCode>,
    pub matched_by: MatchKind,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("expected a non-empty query")]
    EmptyQuery,
    #[error("no language matches `{0}`")]
    UnknownLanguage(String),
}
