//! The corpus session: load once, query for the rest of the session.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::info;

use super::types::error::{CorpusError, Result};
use super::types::models::{CorpusStats, FilterCriteria, PageRequest, PageResult, Poem};
use super::{filter, page, parser, stats};

/// The default page size, matching the dashboard's listing.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One loaded poem corpus plus its session-scoped view state.
///
/// The record set is parsed and aggregated once at construction and is
/// read-only afterwards; a reload means constructing a fresh session. The
/// mutable parts are the filter criteria, the filtered view derived from
/// them, and the pagination cursor — single-writer, recomputed fully and
/// synchronously on every change.
#[derive(Debug)]
pub struct PoemSession {
    poems: Vec<Poem>,
    filtered: Vec<Poem>,
    dynasty_stats: HashMap<String, usize>,
    author_stats: HashMap<String, usize>,
    filters: FilterCriteria,
    current_page: usize,
    page_size: usize,
}

impl PoemSession {
    /// Builds a session from raw CSV text.
    ///
    /// Parses the records, computes the frequency maps, and starts with
    /// default (match-everything) criteria on page 1.
    ///
    /// # Errors
    /// Returns [`CorpusError::EmptyInput`] when the text has no header
    /// line. Malformed data rows are dropped, not errors.
    pub fn from_csv(raw: &str) -> Result<Self> {
        let poems = parser::parse(raw)?;
        let dynasty_stats = stats::dynasty_counts(&poems);
        let author_stats = stats::author_counts(&poems);
        info!(
            "Session ready: {} poems, {} dynasties, {} authors",
            poems.len(),
            dynasty_stats.len(),
            author_stats.len()
        );
        Ok(Self {
            filtered: poems.clone(),
            poems,
            dynasty_stats,
            author_stats,
            filters: FilterCriteria::default(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    /// Builds a session from a local CSV file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading corpus from file: {}", path.display());
        let raw = fs::read_to_string(path)?;
        Self::from_csv(&raw)
    }

    /// Builds a session by fetching CSV text over HTTP.
    ///
    /// The fetch is the only blocking I/O of the session; everything after
    /// it is synchronous computation.
    ///
    /// # Errors
    /// Returns [`CorpusError::Fetch`] on transport failure and
    /// [`CorpusError::HttpStatus`] on a non-success status code.
    pub fn load_from_url(url: &str) -> Result<Self> {
        info!("Fetching corpus from: {}", url);
        let response = reqwest::blocking::get(url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(CorpusError::HttpStatus(status.as_u16()));
        }
        let raw = response.text()?;
        Self::from_csv(&raw)
    }

    /// Summary statistics over the unfiltered corpus.
    pub fn stats(&self) -> CorpusStats {
        stats::summarize(&self.poems, &self.dynasty_stats, &self.author_stats)
    }

    /// Per-dynasty record counts over the unfiltered corpus.
    pub fn dynasty_stats(&self) -> &HashMap<String, usize> {
        &self.dynasty_stats
    }

    /// Per-author record counts over the unfiltered corpus.
    pub fn author_stats(&self) -> &HashMap<String, usize> {
        &self.author_stats
    }

    /// Dynasty counts ordered chronologically, for distribution displays.
    pub fn ordered_dynasty_stats(&self) -> Vec<(String, usize)> {
        stats::ordered_dynasty_counts(&self.dynasty_stats)
    }

    /// Replaces the criteria wholesale, recomputes the filtered view, and
    /// resets the pagination cursor to page 1.
    pub fn apply_filters(&mut self, criteria: FilterCriteria) -> &[Poem] {
        self.filters = criteria;
        self.filtered = filter::apply(&self.poems, &self.filters);
        self.current_page = 1;
        &self.filtered
    }

    /// Clears the criteria back to defaults and resets to page 1.
    pub fn reset_filters(&mut self) -> &[Poem] {
        self.apply_filters(FilterCriteria::default())
    }

    /// One page of the current filtered view.
    ///
    /// Records the requested page and page size as the session cursor, then
    /// slices without clamping: an out-of-range page yields an empty slice.
    pub fn paginated(&mut self, page_number: usize, page_size: usize) -> PageResult<'_> {
        self.current_page = page_number;
        self.page_size = page_size;
        page::paginate(&self.filtered, PageRequest { page_number, page_size })
    }

    /// The full unfiltered record set, in source order.
    pub fn all_poems(&self) -> &[Poem] {
        &self.poems
    }

    /// The current filtered view, in source-relative order.
    pub fn filtered_poems(&self) -> &[Poem] {
        &self.filtered
    }

    /// The criteria currently in effect.
    pub fn current_filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
