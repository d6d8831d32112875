//! # poem-corpus
//!
//! An in-memory tabular data engine for a corpus of classical poems:
//! parse a delimited source file into validated records, derive aggregate
//! statistics, apply compound filters, and paginate the results
//! deterministically.
//!
//! Rendering is somebody else's job: this crate only produces the data a
//! dashboard consumes (summary stats, dynasty distribution, filtered and
//! paginated poem lists, word frequencies).
pub mod corpus;

// Re-export the main types for convenience
pub use corpus::{
    session::PoemSession,
    types::{
        error::{CorpusError, Result},
        models::{CorpusStats, FilterCriteria, PageRequest, PageResult, Poem, SearchScope},
    },
};
