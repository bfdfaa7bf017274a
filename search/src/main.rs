use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use engine::{DocId, Document, DocumentStore};
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct InputDoc {
    id: DocId,
    text: String,
}

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Query an in-memory inverted index over a document collection", long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index documents from a JSON/JSONL file and run a query
    Query {
        /// Input path: a JSON array or JSONL stream of {"id", "text"} records
        #[arg(long)]
        input: PathBuf,
        /// Print the raw term -> entry mapping as JSON instead of highlighted text
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Free-text query
        query: String,
    },
    /// Run a query against a built-in two-document sample collection
    Demo {
        #[arg(default_value = "drink beer")]
        query: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    match cli.command {
        Commands::Query { input, json, query } => {
            let store = build_store(read_docs(&input)?);
            if json {
                print_json(&store, &query)?;
            } else {
                render(&store, &query);
            }
        }
        Commands::Demo { query } => {
            let store = build_store(sample_docs());
            render(&store, &query);
        }
    }
    Ok(())
}

fn sample_docs() -> Vec<Document> {
    vec![
        Document::new(0, "The big sharks of Belgium drink beer."),
        Document::new(1, "Belgium has great beer. They drink beer all the time."),
    ]
}

fn build_store(docs: Vec<Document>) -> DocumentStore {
    let mut store = DocumentStore::new();
    store.add(docs);
    store.build_index();
    store
}

fn read_docs(path: &Path) -> Result<Vec<Document>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(f);
    let mut docs = Vec::new();
    if path.extension().and_then(|s| s.to_str()) == Some("jsonl") {
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let doc: InputDoc = serde_json::from_str(&line)?;
            docs.push(Document::new(doc.id, doc.text));
        }
    } else {
        let parsed: Vec<InputDoc> = serde_json::from_reader(reader)?;
        docs.extend(parsed.into_iter().map(|d| Document::new(d.id, d.text)));
    }
    tracing::info!(docs = docs.len(), input = %path.display(), "loaded documents");
    Ok(docs)
}

fn print_json(store: &DocumentStore, query: &str) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&store.search(query))?);
    Ok(())
}

/// Print each matched term's documents with the term highlighted.
///
/// Postings carry one doc id per occurrence, so they are deduplicated
/// here before rendering; the engine hands them over as-is.
fn render(store: &DocumentStore, query: &str) {
    let mut results: Vec<_> = store.search(query).into_iter().collect();
    results.sort_by_key(|(term, _)| *term);
    for (term, entry) in results {
        let doc_ids: BTreeSet<DocId> = entry.postings.iter().copied().collect();
        for doc_id in doc_ids {
            match store.get(doc_id) {
                Ok(doc) => {
                    let highlighted = doc.text.replace(term, &style(term).magenta().to_string());
                    println!("{highlighted}");
                }
                Err(err) => tracing::warn!(%err, doc_id, "skipping unrenderable posting"),
            }
        }
        println!("-----");
    }
}
