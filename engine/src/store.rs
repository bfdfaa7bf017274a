use std::collections::HashMap;

use crate::index::{index_into, DocId, Document, Entry, InvertedIndex};
use crate::tokenizer::tokenize;
use crate::{EngineError, Result};

/// Owns a document collection and the inverted index derived from it.
///
/// The index is only as fresh as the last [`build_index`] call: adding
/// documents afterwards does not re-index, and the store does not track
/// staleness. [`search`] works in any state, returning empty or stale
/// results when no up-to-date index exists.
///
/// Single-threaded by design. Embedding in a concurrent host requires
/// the caller to serialize `add`/`build_index` against each other and
/// against concurrent `search` calls.
///
/// [`build_index`]: DocumentStore::build_index
/// [`search`]: DocumentStore::search
#[derive(Debug, Default)]
pub struct DocumentStore {
    docs: HashMap<DocId, Document>,
    index: InvertedIndex,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert documents, overwriting any existing document with the same
    /// id (last write wins).
    pub fn add(&mut self, docs: impl IntoIterator<Item = Document>) {
        for doc in docs {
            self.docs.insert(doc.id, doc);
        }
    }

    pub fn get(&self, id: DocId) -> Result<&Document> {
        self.docs.get(&id).ok_or(EngineError::DocumentNotFound(id))
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    /// Rebuild the inverted index from every stored document.
    ///
    /// The previous index is discarded wholesale, so rebuilding over the
    /// same collection always produces the same index. Map iteration
    /// order does not matter: the indexer's sort stage fixes the final
    /// postings order.
    pub fn build_index(&mut self) {
        self.index.clear();
        let docs: Vec<Document> = self.docs.values().cloned().collect();
        index_into(&mut self.index, &docs);
        tracing::info!(docs = docs.len(), terms = self.index.len(), "index built");
    }

    /// Look up each query term independently in the index.
    ///
    /// Terms absent from the index are silently dropped. A multi-term
    /// query returns the UNION of the per-term postings, not documents
    /// containing every term; there is no conjunctive matching. Returned
    /// entries are borrowed from the index and must not be mutated;
    /// postings may repeat a doc id, once per occurrence of the term in
    /// that document.
    pub fn search(&self, query: &str) -> HashMap<&str, &Entry> {
        let mut results = HashMap::new();
        for term in tokenize(query) {
            if let Some((term, entry)) = self.index.get_key_value(term.as_str()) {
                results.insert(term.as_str(), entry);
            }
        }
        tracing::debug!(query, matched = results.len(), "query executed");
        results
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}
