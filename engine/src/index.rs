use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::tokenizer::tokenize;

pub type DocId = u32;

/// A document as supplied by the caller. Ids are caller-assigned and
/// never generated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub text: String,
}

impl Document {
    pub fn new(id: DocId, text: impl Into<String>) -> Self {
        Self { id, text: text.into() }
    }
}

/// Postings for one term.
///
/// `postings` holds one doc id per OCCURRENCE of the term, so a document
/// containing the term twice appears twice. The list is non-decreasing in
/// doc id, and `doc_freq` always equals `postings.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub doc_freq: u32,
    pub postings: Vec<DocId>,
}

/// Term -> postings mapping.
pub type InvertedIndex = HashMap<String, Entry>;

/// Stage 1: emit one `(term, doc id)` pair per term occurrence, keeping
/// each document's internal term order.
pub fn emit_terms(docs: &[Document]) -> Vec<(String, DocId)> {
    docs.iter()
        .flat_map(|doc| {
            let id = doc.id;
            tokenize(&doc.text).into_iter().map(move |term| (term, id))
        })
        .collect()
}

/// Stage 2: sort by term (byte order), then doc id ascending. This
/// composite key is what groups postings by term and keeps them sorted,
/// with no separate grouping pass needed.
pub fn sort_pairs(pairs: &mut [(String, DocId)]) {
    pairs.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));
}

/// Run all three stages over `docs`, writing into `index`.
///
/// Stage 3 is a single left-to-right scan of the sorted pairs: a new term
/// opens a new [`Entry`], a repeated term appends to the current postings
/// and bumps `doc_freq`. The build MERGES into whatever entries already
/// exist; callers wanting a clean rebuild must clear `index` first.
pub fn index_into(index: &mut InvertedIndex, docs: &[Document]) {
    let mut pairs = emit_terms(docs);
    sort_pairs(&mut pairs);
    tracing::debug!(docs = docs.len(), pairs = pairs.len(), "collapsing sorted term pairs");
    for (term, doc_id) in pairs {
        let entry = index.entry(term).or_default();
        entry.doc_freq += 1;
        entry.postings.push(doc_id);
    }
}
