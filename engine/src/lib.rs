//! In-memory inverted-index search engine.
//!
//! The pipeline is the classic one: tokenize each document, emit
//! `(term, doc id)` pairs, sort them by term then doc id, and collapse
//! the sorted run into per-term postings lists. [`DocumentStore`] owns
//! a document collection and the index built from it, and answers
//! free-text queries by independent per-term lookup.

pub mod index;
pub mod store;
pub mod tokenizer;

pub use index::{DocId, Document, Entry, InvertedIndex};
pub use store::DocumentStore;

use thiserror::Error;

/// Errors surfaced by the engine.
///
/// Tokenization and indexing are total; the only failure is a document
/// lookup miss.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("document not found: {0}")]
    DocumentNotFound(DocId),
}

pub type Result<T> = std::result::Result<T, EngineError>;
