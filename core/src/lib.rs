//! TF-IDF ranking of a small in-memory document collection.
//!
//! Every call tokenizes the documents, builds an inverted index, weights it
//! with a probabilistic IDF and answers the query. Nothing is cached between
//! calls.

pub mod document;
pub mod index;
pub mod profile;
pub mod scoring;
pub mod search;
pub mod tokenizer;

pub use document::{Document, DocumentError};
pub use index::{InvertedIndex, Posting};
pub use profile::{DocumentProfile, ProfileEntry};
pub use search::{search, search_values, ScoredDocument, SearchEngine};
