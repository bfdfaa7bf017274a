use engine::index::emit_terms;
use engine::{Document, DocumentStore, Entry};

fn sample_docs() -> Vec<Document> {
    vec![
        Document::new(0, "The big sharks of Belgium drink beer."),
        Document::new(1, "Belgium has great beer. They drink beer all the time."),
    ]
}

fn indexed_store() -> DocumentStore {
    let mut store = DocumentStore::new();
    store.add(sample_docs());
    store.build_index();
    store
}

#[test]
fn single_term_query_finds_every_document() {
    let store = indexed_store();
    let results = store.search("Belgium");
    assert_eq!(results["Belgium"].postings, vec![0, 1]);
    assert_eq!(results["Belgium"].doc_freq, 2);
}

#[test]
fn lookup_is_case_sensitive() {
    let store = indexed_store();
    assert!(store.search("belgium").is_empty());
    assert!(!store.search("Belgium").is_empty());
}

#[test]
fn postings_count_every_occurrence() {
    let store = indexed_store();
    let beer = &store.search("beer")["beer"];
    // Document 1 contains "beer" twice, so its id appears twice.
    assert_eq!(beer.postings, vec![0, 1, 1]);
    assert_eq!(beer.doc_freq, 3);
}

#[test]
fn empty_query_returns_empty_mapping() {
    let store = indexed_store();
    assert!(store.search("").is_empty());
    assert!(store.search("   ").is_empty());
}

#[test]
fn no_stemming_means_exact_terms_only() {
    let store = indexed_store();
    assert!(store.search("shark").is_empty());
    assert_eq!(store.search("sharks")["sharks"].postings, vec![0]);
}

#[test]
fn multi_term_query_returns_per_term_union() {
    let store = indexed_store();
    let results = store.search("drink beer");
    // Independent lookups, one entry per matched term, no AND across terms.
    assert_eq!(results.len(), 2);
    assert_eq!(results["drink"].postings, vec![0, 1]);
    assert_eq!(results["beer"].postings, vec![0, 1, 1]);
}

#[test]
fn unknown_terms_are_dropped_not_errors() {
    let store = indexed_store();
    let results = store.search("beer on draught");
    assert_eq!(results.len(), 1);
    assert!(results.contains_key("beer"));
}

#[test]
fn rebuild_is_deterministic() {
    let mut store = indexed_store();
    let first = Entry::clone(store.search("beer")["beer"]);
    for _ in 0..3 {
        store.build_index();
        assert_eq!(*store.search("beer")["beer"], first);
    }
}

#[test]
fn every_entry_upholds_frequency_and_ordering_invariants() {
    let store = indexed_store();
    for (term, entry) in store.index() {
        assert_eq!(
            entry.doc_freq as usize,
            entry.postings.len(),
            "doc_freq out of sync for {term:?}"
        );
        assert!(
            entry.postings.windows(2).all(|w| w[0] <= w[1]),
            "postings not sorted for {term:?}"
        );
    }
}

#[test]
fn index_covers_every_tokenized_occurrence_exactly_once() {
    let docs = sample_docs();
    let store = indexed_store();
    let emitted = emit_terms(&docs);
    let indexed: usize = store.index().values().map(|e| e.postings.len()).sum();
    assert_eq!(indexed, emitted.len());
    for (term, doc_id) in &emitted {
        let count_emitted = emitted.iter().filter(|(t, d)| t == term && d == doc_id).count();
        let count_indexed = store.index()[term]
            .postings
            .iter()
            .filter(|id| *id == doc_id)
            .count();
        assert_eq!(count_indexed, count_emitted, "coverage mismatch for {term:?}");
    }
}
