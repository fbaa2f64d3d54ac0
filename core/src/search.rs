use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::document::{Document, DocumentError};
use crate::index::InvertedIndex;
use crate::tokenizer::tokenize_query;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub id: String,
    pub score: f64,
}

/// A weighted index over one corpus, answering queries read-only.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: InvertedIndex,
}

impl SearchEngine {
    pub fn new(docs: &[Document]) -> Self {
        Self { index: InvertedIndex::build(docs) }
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Ranked document ids, highest score first.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.search_scored(query).into_iter().map(|d| d.id).collect()
    }

    /// Ranked documents with their summed TF-IDF scores.
    ///
    /// Ties keep the reverse of the order in which documents were first seen
    /// while scanning query terms and their posting lists: scores are sorted
    /// ascending with a stable sort and the whole sequence is then reversed.
    pub fn search_scored(&self, query: &str) -> Vec<ScoredDocument> {
        let terms = tokenize_query(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut selected: Vec<&str> = Vec::new();
        for term in &terms {
            if !selected.contains(&term.as_str()) {
                selected.push(term.as_str());
            }
        }

        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut ranked: Vec<ScoredDocument> = Vec::new();
        for term in &selected {
            let Some(list) = self.index.postings(term) else { continue };
            for posting in list {
                match slots.get(posting.doc_id.as_str()) {
                    Some(&i) => ranked[i].score += posting.tf_idf,
                    None => {
                        slots.insert(posting.doc_id.as_str(), ranked.len());
                        ranked.push(ScoredDocument {
                            id: posting.doc_id.clone(),
                            score: posting.tf_idf,
                        });
                    }
                }
            }
        }

        ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
        ranked.reverse();
        debug!(query_terms = selected.len(), hits = ranked.len(), "answered query");
        ranked
    }
}

/// Build a fresh engine over `docs` and answer a single query.
pub fn search(docs: &[Document], query: &str) -> Vec<String> {
    SearchEngine::new(docs).search(query)
}

/// Like [`search`], for untyped records. The first malformed record aborts the call.
pub fn search_values(records: &[Value], query: &str) -> Result<Vec<String>, DocumentError> {
    let docs = records.iter().map(Document::from_value).collect::<Result<Vec<_>, _>>()?;
    Ok(search(&docs, query))
}
