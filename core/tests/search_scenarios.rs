use std::fs;
use std::path::Path;

use tfidf_core::{search, Document, DocumentProfile, InvertedIndex, SearchEngine};

const GARBAGE_PATCH: [&str; 3] = [
    "garbage_patch_NG",
    "garbage_patch_ocean_clean",
    "garbage_patch_wiki",
];
const SPAM: &str = "garbage_patch_spam";

fn fixture(id: &str) -> Document {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(id);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("fixture {id} not readable: {e}"));
    Document::new(id, text)
}

fn short_texts() -> Vec<Document> {
    vec![
        Document::new("doc1", "I can't shoot straight unless I've had a pint!"),
        Document::new("doc2", "Don't shoot shoot shoot that thing at me."),
        Document::new("doc3", "I'm your shooter."),
    ]
}

#[test]
fn search_with_short_text() {
    assert_eq!(search(&short_texts(), "shoot at me, nerd"), vec!["doc2", "doc1"]);
}

#[test]
fn distinct_terms_do_not_match_by_prefix() {
    assert_eq!(search(&short_texts(), "shooter I"), vec!["doc3", "doc1"]);
    // "I'm" normalizes to "im", so only doc1 has the bare term
    assert_eq!(search(&short_texts(), "i"), vec!["doc1"]);
}

#[test]
fn search_fixtures() {
    let docs: Vec<Document> = GARBAGE_PATCH.iter().map(|id| fixture(id)).collect();
    assert_eq!(search(&docs, "trash island"), GARBAGE_PATCH.to_vec());
}

#[test]
fn search_fixtures_with_spam() {
    let mut docs: Vec<Document> = GARBAGE_PATCH.iter().map(|id| fixture(id)).collect();
    docs.push(fixture(SPAM));

    let mut expected = GARBAGE_PATCH.to_vec();
    expected.push(SPAM);
    assert_eq!(search(&docs, "the trash island is a"), expected);
}

#[test]
fn empty_corpus_yields_nothing() {
    assert!(search(&[], "").is_empty());
    assert!(search(&[], "trash island").is_empty());
}

#[test]
fn empty_or_punctuation_query_yields_nothing() {
    let docs = short_texts();
    assert!(search(&docs, "").is_empty());
    assert!(search(&docs, "  , ! ?").is_empty());
}

#[test]
fn unknown_terms_yield_nothing() {
    let docs = short_texts();
    assert!(search(&docs, "nerd geek").is_empty());

    let index = InvertedIndex::build(&docs);
    assert!(index.terms().all(|t| t != "nerd"));
}

#[test]
fn search_is_deterministic() {
    let mut docs: Vec<Document> = GARBAGE_PATCH.iter().map(|id| fixture(id)).collect();
    docs.push(fixture(SPAM));
    let engine = SearchEngine::new(&docs);

    let first = engine.search_scored("the great pacific trash island");
    for _ in 0..5 {
        assert_eq!(SearchEngine::new(&docs).search_scored("the great pacific trash island"), first);
        assert_eq!(engine.search_scored("the great pacific trash island"), first);
    }
}

#[test]
fn reordering_documents_keeps_ids_and_scores() {
    let mut docs: Vec<Document> = GARBAGE_PATCH.iter().map(|id| fixture(id)).collect();
    docs.push(fixture(SPAM));
    let query = "floating plastic trash island";

    let mut forward = SearchEngine::new(&docs).search_scored(query);
    docs.reverse();
    let mut backward = SearchEngine::new(&docs).search_scored(query);

    forward.sort_by(|a, b| a.id.cmp(&b.id));
    backward.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(forward.len(), backward.len());
    for (f, b) in forward.iter().zip(&backward) {
        assert_eq!(f.id, b.id);
        assert!((f.score - b.score).abs() < 1e-12);
    }
}

#[test]
fn extra_occurrence_keeps_top_document_first() {
    let mut docs = short_texts();
    docs[1].text = "Don't shoot shoot shoot shoot that thing at me.".to_string();
    assert_eq!(search(&docs, "shoot at me, nerd"), vec!["doc2", "doc1"]);
}

#[test]
fn profile_counts_reconstruct_document_length() {
    for id in GARBAGE_PATCH.iter().chain([&SPAM]) {
        let doc = fixture(id);
        let terms = tfidf_core::tokenizer::tokenize(&doc.text);
        let profile = DocumentProfile::from_terms(doc.id.as_str(), &terms);

        let total: u32 = profile.iter().map(|(_, e)| e.count).sum();
        assert_eq!(total as usize, profile.total_terms);
        assert!(profile.iter().all(|(_, e)| e.term_frequency > 0.0 && e.term_frequency <= 1.0));
    }
}

#[test]
fn posting_lists_hold_one_entry_per_document() {
    let docs: Vec<Document> = GARBAGE_PATCH.iter().map(|id| fixture(id)).collect();
    let index = InvertedIndex::build(&docs);

    let ids: Vec<&str> = index
        .postings("trash")
        .unwrap()
        .iter()
        .map(|p| p.doc_id.as_str())
        .collect();
    assert_eq!(ids, GARBAGE_PATCH.to_vec());
    for term in index.terms() {
        let list = index.postings(term).unwrap();
        let mut seen: Vec<&str> = list.iter().map(|p| p.doc_id.as_str()).collect();
        seen.dedup();
        assert_eq!(seen.len(), list.len());
    }
}
