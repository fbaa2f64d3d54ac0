use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::document::Document;
use crate::profile::DocumentProfile;
use crate::scoring::{idf, tf_idf};
use crate::tokenizer::tokenize;

/// One (term, document) statistic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Posting {
    pub doc_id: String,
    pub term_frequency: f64,
    pub count: u32,
    /// Zero until [`InvertedIndex::apply_weights`] runs.
    pub tf_idf: f64,
}

/// Term to posting list. Lists are ordered by the order documents were merged in.
#[derive(Debug, Default, Clone, Serialize)]
pub struct InvertedIndex {
    postings: HashMap<String, Vec<Posting>>,
    num_docs: usize,
    weighted: bool,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize, profile and merge every document in order, then weight the result.
    pub fn build(docs: &[Document]) -> Self {
        let mut index = Self::new();
        for doc in docs {
            let terms = tokenize(&doc.text);
            index.merge_profile(DocumentProfile::from_terms(doc.id.as_str(), &terms));
        }
        index.apply_weights();
        debug!(num_docs = index.num_docs, num_terms = index.postings.len(), "built inverted index");
        index
    }

    /// Build an unweighted single-document index.
    pub fn from_profile(profile: DocumentProfile) -> Self {
        let mut index = Self::new();
        index.merge_profile(profile);
        index
    }

    /// Append one posting per profile term. The document counts toward the
    /// corpus size even when its profile is empty.
    pub fn merge_profile(&mut self, profile: DocumentProfile) {
        let (doc_id, entries) = profile.into_entries();
        for (term, entry) in entries {
            self.postings.entry(term).or_default().push(Posting {
                doc_id: doc_id.clone(),
                term_frequency: entry.term_frequency,
                count: entry.count,
                tf_idf: 0.0,
            });
        }
        self.num_docs += 1;
        self.weighted = false;
    }

    /// Union of both key sets; a shared term gets `self`'s postings followed by `other`'s.
    pub fn merge(mut self, other: InvertedIndex) -> InvertedIndex {
        for (term, list) in other.postings {
            self.postings.entry(term).or_default().extend(list);
        }
        self.num_docs += other.num_docs;
        self.weighted = false;
        self
    }

    /// Set every posting's `tf_idf` from its term frequency and the term's IDF.
    pub fn apply_weights(&mut self) {
        let num_docs = self.num_docs;
        for (term, list) in self.postings.iter_mut() {
            let term_idf = idf(num_docs, list.len());
            trace!(term = %term, df = list.len(), idf = term_idf, "weighting term");
            for posting in list.iter_mut() {
                posting.tf_idf = tf_idf(posting.term_frequency, term_idf);
            }
        }
        self.weighted = true;
    }

    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// Indexed terms, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    pub fn num_terms(&self) -> usize {
        self.postings.len()
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }
}
