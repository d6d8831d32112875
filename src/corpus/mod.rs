//! Core poem-corpus module
//!
//! Pipeline: raw CSV text → [`parser`] → record set → [`stats`] /
//! [`filter`] → filtered view → [`page`] → page payload. The
//! [`session::PoemSession`] ties the pieces together behind the query
//! surface consumed by a presentation layer.

pub mod types;

pub mod filter;
pub mod page;
pub mod parser;
pub mod session;
pub mod stats;
pub mod words;

pub use types::error::{CorpusError, Result};
