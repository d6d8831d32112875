//! Core data structures for the poem corpus.
//!
//! This module defines the fundamental types used throughout the library:
//! - The validated poem record
//! - Filter criteria and search scope
//! - Pagination requests and results
//! - Aggregate corpus statistics

use std::collections::HashMap;

/// A single validated poem entry.
///
/// A record is only admitted into a corpus when `title`, `author`, `content`
/// and `dynasty` are all non-empty after cleaning. `id` is an opaque string:
/// it is not required to be unique, numeric, or present at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poem {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    /// Categorical grouping key for the historical period.
    pub dynasty: String,
    /// Columns beyond the five named ones, preserved verbatim.
    /// The core never reads them.
    pub extra: HashMap<String, String>,
}

/// Which record fields a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchScope {
    #[default]
    All,
    Title,
    Author,
    Content,
}

impl SearchScope {
    /// Parses a scope name. Unknown or empty names behave as [`SearchScope::All`],
    /// matching the fallthrough behaviour expected of the filter engine.
    pub fn parse(name: &str) -> Self {
        match name {
            "title" => SearchScope::Title,
            "author" => SearchScope::Author,
            "content" => SearchScope::Content,
            _ => SearchScope::All,
        }
    }
}

impl std::fmt::Display for SearchScope {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SearchScope::All => write!(f, "all"),
            SearchScope::Title => write!(f, "title"),
            SearchScope::Author => write!(f, "author"),
            SearchScope::Content => write!(f, "content"),
        }
    }
}

/// The current search/dynasty/scope constraint.
///
/// Criteria are replaced wholesale on every filter change; there are no
/// partial-update semantics. The default value matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Lower-cased substring match against the fields selected by `scope`.
    /// Empty means no search constraint.
    pub search_term: String,
    /// Exact, case-sensitive dynasty match. Empty means no constraint.
    pub dynasty: String,
    pub scope: SearchScope,
}

/// A request for one fixed-size window of a filtered view.
///
/// `page_number` is 1-based and expected to be ≥ 1; `page_size` must be > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: usize,
    pub page_size: usize,
}

/// One page of poems plus pagination metadata.
///
/// The paginator never clamps: a `page_number` beyond `total_pages` yields an
/// empty `poems` slice, and clamping (if desired) is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult<'a> {
    pub poems: &'a [Poem],
    pub total_items: usize,
    pub current_page: usize,
    /// Always ≥ 1, even for an empty view.
    pub total_pages: usize,
    /// Whether at least one item exists past this page's window.
    pub has_more: bool,
}

/// Summary statistics over the full (unfiltered) corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusStats {
    pub poem_count: usize,
    pub author_count: usize,
    pub dynasty_count: usize,
    /// Coarse human label for the corpus' historical span, e.g. "1500+ 年".
    pub time_span: &'static str,
}
