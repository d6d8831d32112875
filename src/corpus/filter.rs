//! Compound filtering of the record set.

use super::types::models::{FilterCriteria, Poem, SearchScope};

/// Computes the filtered view of `poems` under `criteria`.
///
/// The view keeps the source's relative order (stable filter, no re-sort)
/// and every item is an unmodified copy of a source record. Recomputation
/// is total: each call re-scans the whole record set.
pub fn apply(poems: &[Poem], criteria: &FilterCriteria) -> Vec<Poem> {
    poems
        .iter()
        .filter(|poem| matches(poem, criteria))
        .cloned()
        .collect()
}

/// The matching predicate, all clauses ANDed.
///
/// The dynasty clause is an exact, case-sensitive string match; the search
/// clause lower-cases both term and field and tests substring containment
/// over the fields selected by the scope.
fn matches(poem: &Poem, criteria: &FilterCriteria) -> bool {
    if !criteria.dynasty.is_empty() && poem.dynasty != criteria.dynasty {
        return false;
    }
    if criteria.search_term.is_empty() {
        return true;
    }

    let term = criteria.search_term.to_lowercase();
    let in_field = |field: &str| field.to_lowercase().contains(&term);
    match criteria.scope {
        SearchScope::Title => in_field(&poem.title),
        SearchScope::Author => in_field(&poem.author),
        SearchScope::Content => in_field(&poem.content),
        SearchScope::All => {
            in_field(&poem.title) || in_field(&poem.author) || in_field(&poem.content)
        }
    }
}
