//! Aggregate statistics over the full corpus.
//!
//! Everything here is computed once from the unfiltered record set and is
//! unaffected by the current filter criteria: the stats feed the
//! distribution chart and filter-option labels, which always show the whole
//! corpus.

use std::collections::HashMap;

use log::debug;

use super::types::models::{CorpusStats, Poem};

/// Chronological rank for the known dynasty keys. Unknown dynasties sort
/// after these, alphabetically.
const DYNASTY_ORDER: &[&str] = &["六朝", "唐", "宋", "元", "明", "清", "当代"];

/// Time-span lookup table: key membership among the distinct dynasties
/// decides the label, no arithmetic involved.
const EARLIEST_DYNASTY: &str = "六朝";
const LATEST_DYNASTY: &str = "当代";
const SPAN_WIDE: &str = "1500+ 年";
const SPAN_MEDIUM: &str = "1000+ 年";
const SPAN_GENERIC: &str = "数百年";

/// Counts records per dynasty, one count per record under its exact
/// post-clean key. No normalization or case folding.
pub fn dynasty_counts(poems: &[Poem]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for poem in poems {
        *counts.entry(poem.dynasty.clone()).or_insert(0) += 1;
    }
    counts
}

/// Counts records per author, same rules as [`dynasty_counts`].
pub fn author_counts(poems: &[Poem]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for poem in poems {
        *counts.entry(poem.author.clone()).or_insert(0) += 1;
    }
    counts
}

/// Derives the summary statistics from the corpus and its frequency maps.
pub fn summarize(
    poems: &[Poem],
    dynasty_stats: &HashMap<String, usize>,
    author_stats: &HashMap<String, usize>,
) -> CorpusStats {
    let stats = CorpusStats {
        poem_count: poems.len(),
        author_count: author_stats.len(),
        dynasty_count: dynasty_stats.len(),
        time_span: time_span(dynasty_stats),
    };
    debug!(
        "Corpus summary: {} poems, {} authors, {} dynasties, span '{}'",
        stats.poem_count, stats.author_count, stats.dynasty_count, stats.time_span
    );
    stats
}

/// Coarse human label for the corpus' historical span.
///
/// Pure key-membership lookup: both the earliest and the latest known
/// dynasty present gives the widest label, the earliest alone a medium one,
/// anything else the generic label.
pub fn time_span(dynasty_stats: &HashMap<String, usize>) -> &'static str {
    let has_earliest = dynasty_stats.contains_key(EARLIEST_DYNASTY);
    let has_latest = dynasty_stats.contains_key(LATEST_DYNASTY);
    match (has_earliest, has_latest) {
        (true, true) => SPAN_WIDE,
        (true, false) => SPAN_MEDIUM,
        _ => SPAN_GENERIC,
    }
}

/// Chronological rank of a dynasty key, for presentation ordering.
pub fn dynasty_rank(name: &str) -> usize {
    DYNASTY_ORDER
        .iter()
        .position(|d| *d == name)
        .unwrap_or(DYNASTY_ORDER.len())
}

/// Dynasty counts as an ordered listing: known dynasties in chronological
/// order, unknown ones after them alphabetically.
pub fn ordered_dynasty_counts(dynasty_stats: &HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = dynasty_stats
        .iter()
        .map(|(k, v)| (k.clone(), *v))
        .collect();
    entries.sort_by(|a, b| {
        dynasty_rank(&a.0)
            .cmp(&dynasty_rank(&b.0))
            .then_with(|| a.0.cmp(&b.0))
    });
    entries
}
