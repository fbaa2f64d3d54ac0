/// Probabilistic IDF: `log2(1 + (N - df + 1) / (df + 0.5))`.
///
/// `num_docs` is the corpus size and `doc_freq` the number of documents
/// containing the term (the posting list length).
pub fn idf(num_docs: usize, doc_freq: usize) -> f64 {
    let n = num_docs as f64;
    let df = doc_freq as f64;
    (1.0 + (n - df + 1.0) / (df + 0.5)).log2()
}

pub fn tf_idf(term_frequency: f64, idf: f64) -> f64 {
    term_frequency * idf
}
