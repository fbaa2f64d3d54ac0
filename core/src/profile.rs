use std::collections::HashMap;

/// Occurrence statistics for one term within one document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileEntry {
    pub count: u32,
    /// `count / total_terms`, always in `(0, 1]`.
    pub term_frequency: f64,
}

/// Per-document term statistics, the unit folded into the global index.
#[derive(Debug, Clone)]
pub struct DocumentProfile {
    pub doc_id: String,
    pub total_terms: usize,
    // first-occurrence order
    entries: Vec<(String, ProfileEntry)>,
}

impl DocumentProfile {
    pub fn from_terms(doc_id: impl Into<String>, terms: &[String]) -> Self {
        let mut slots: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, u32)> = Vec::new();
        for term in terms {
            match slots.get(term.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    slots.insert(term.as_str(), counts.len());
                    counts.push((term.as_str(), 1));
                }
            }
        }

        let total_terms = terms.len();
        let entries = counts
            .into_iter()
            .map(|(term, count)| {
                let term_frequency = count as f64 / total_terms as f64;
                (term.to_string(), ProfileEntry { count, term_frequency })
            })
            .collect();
        Self { doc_id: doc_id.into(), total_terms, entries }
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, term: &str) -> Option<&ProfileEntry> {
        self.entries.iter().find(|(t, _)| t == term).map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProfileEntry)> {
        self.entries.iter().map(|(t, e)| (t.as_str(), e))
    }

    pub(crate) fn into_entries(self) -> (String, Vec<(String, ProfileEntry)>) {
        (self.doc_id, self.entries)
    }
}
