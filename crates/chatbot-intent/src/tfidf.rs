//! TF-IDF (Term Frequency-Inverse Document Frequency) index.
//!
//! The index is built in two phases:
//! 1. `add_document` tokenizes each corpus text and grows the vocabulary
//! 2. `calculate_tfidf` computes per-document term frequencies and the IDF
//!    table
//!
//! After that the vocabulary is closed: `vector` weights any text against it
//! and silently drops tokens the corpus never contained.

use std::collections::{BTreeMap, BTreeSet};

use crate::tokenizer::tokenize;

/// Computes term frequency for a token list.
///
/// Term frequency is calculated as: count(term) / total_terms, so the
/// frequencies of a non-empty list sum to 1.
pub fn term_frequency(tokens: &[String]) -> BTreeMap<String, f64> {
    if tokens.is_empty() {
        return BTreeMap::new();
    }

    let total = tokens.len() as f64;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(term, count)| (term, count as f64 / total))
        .collect()
}

/// Set of stems seen in the corpus, with the number of documents containing
/// each.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    document_frequencies: BTreeMap<String, usize>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one document's tokens, counting each distinct term once.
    pub fn observe(&mut self, tokens: &[String]) {
        let unique_terms: BTreeSet<&String> = tokens.iter().collect();
        for term in unique_terms {
            *self.document_frequencies.entry(term.clone()).or_insert(0) += 1;
        }
    }

    /// Whether the term was seen in any document.
    pub fn contains(&self, term: &str) -> bool {
        self.document_frequencies.contains_key(term)
    }

    /// Number of documents containing the term.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.document_frequencies.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.document_frequencies.len()
    }

    /// Whether no term has been seen.
    pub fn is_empty(&self) -> bool {
        self.document_frequencies.is_empty()
    }

    /// Iterates over the terms in lexical order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.document_frequencies.keys().map(String::as_str)
    }
}

/// Sparse TF-IDF weighted vector. Absent terms weigh 0.
///
/// Weights are kept in term order so that sums always run in the same
/// order: equal token multisets give bit-identical scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    /// Map from stem to TF-IDF weight
    pub weights: BTreeMap<String, f64>,
}

impl TermVector {
    /// Weight of a term, 0 if absent.
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Computes the L2 norm (magnitude) of the vector.
    pub fn magnitude(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Computes the dot product with another vector.
    ///
    /// Terms present in only one vector multiply by 0, so only the shared
    /// terms are visited.
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };

        small
            .weights
            .iter()
            .filter_map(|(term, weight)| large.weights.get(term).map(|w| weight * w))
            .sum()
    }

    /// Computes cosine similarity with another vector.
    ///
    /// Returns 0.0 if either vector has zero magnitude.
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        let mag_self = self.magnitude();
        let mag_other = other.magnitude();

        if mag_self == 0.0 || mag_other == 0.0 {
            return 0.0;
        }

        self.dot(other) / (mag_self * mag_other)
    }

    /// Number of stored terms.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Checks if the vector has no terms.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// TF-IDF index over a fixed set of documents.
#[derive(Debug, Clone, Default)]
pub struct TfIdfIndex {
    /// Token list per document, in insertion order.
    documents: Vec<Vec<String>>,
    vocabulary: Vocabulary,
    /// Relative term frequency per document.
    tf: Vec<BTreeMap<String, f64>>,
    idf: BTreeMap<String, f64>,
}

impl TfIdfIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes a document and adds its stems to the vocabulary.
    pub fn add_document(&mut self, text: &str) {
        let tokens = tokenize(text);
        self.vocabulary.observe(&tokens);
        self.documents.push(tokens);
    }

    /// Computes term frequencies for every document and the IDF table.
    ///
    /// IDF = ln(N / df). A term found in every document gets 0 and adds
    /// nothing to any similarity. `df` is never 0 because the vocabulary is
    /// built from the same documents.
    pub fn calculate_tfidf(&mut self) {
        self.tf = self
            .documents
            .iter()
            .map(|tokens| term_frequency(tokens))
            .collect();

        let total = self.documents.len() as f64;
        self.idf = self
            .vocabulary
            .terms()
            .map(|term| {
                let df = self.vocabulary.document_frequency(term) as f64;
                (term.to_string(), (total / df).ln())
            })
            .collect();
    }

    /// IDF weight of a term, 0 if unknown.
    pub fn idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    /// Vectorizes free text against the closed vocabulary.
    pub fn vector(&self, text: &str) -> TermVector {
        self.vector_for_tokens(&tokenize(text))
    }

    /// Vectorizes an already tokenized text.
    ///
    /// Frequencies are relative to the full token list, out-of-vocabulary
    /// tokens included; those tokens are then dropped.
    pub fn vector_for_tokens(&self, tokens: &[String]) -> TermVector {
        let weights = term_frequency(tokens)
            .into_iter()
            .filter(|(term, _)| self.vocabulary.contains(term))
            .map(|(term, freq)| {
                let weight = freq * self.idf(&term);
                (term, weight)
            })
            .collect();

        TermVector { weights }
    }

    /// Precomputed vector of the document at `index`.
    pub fn document_vector(&self, index: usize) -> Option<TermVector> {
        let tf = self.tf.get(index)?;
        let weights = tf
            .iter()
            .map(|(term, freq)| (term.clone(), freq * self.idf(term)))
            .collect();

        Some(TermVector { weights })
    }

    /// Vectors of all documents, index-aligned with insertion order.
    pub fn document_vectors(&self) -> Vec<TermVector> {
        (0..self.tf.len())
            .filter_map(|index| self.document_vector(index))
            .collect()
    }

    /// Number of distinct stems.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents added.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(texts: &[&str]) -> TfIdfIndex {
        let mut index = TfIdfIndex::new();
        for text in texts {
            index.add_document(text);
        }
        index.calculate_tfidf();
        index
    }

    fn vector(pairs: &[(&str, f64)]) -> TermVector {
        TermVector {
            weights: pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect(),
        }
    }

    #[test]
    fn term_frequency_basic() {
        let tokens = vec!["cat".into(), "dog".into(), "cat".into(), "bird".into()];
        let tf = term_frequency(&tokens);

        assert!((tf["cat"] - 0.5).abs() < 0.001);
        assert!((tf["dog"] - 0.25).abs() < 0.001);
        assert!((tf["bird"] - 0.25).abs() < 0.001);
        assert!((tf.values().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn term_frequency_empty() {
        let tokens: Vec<String> = vec![];
        assert!(term_frequency(&tokens).is_empty());
    }

    #[test]
    fn vocabulary_counts_documents_not_occurrences() {
        let mut vocab = Vocabulary::new();
        vocab.observe(&["cat".into(), "dog".into(), "cat".into()]);
        vocab.observe(&["cat".into(), "bird".into()]);

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.document_frequency("cat"), 2);
        assert_eq!(vocab.document_frequency("dog"), 1);
        assert_eq!(vocab.document_frequency("fish"), 0);
        assert!(vocab.contains("bird"));
        assert!(!vocab.contains("fish"));
    }

    #[test]
    fn idf_computation() {
        let index = build(&["cat dog", "cat bird", "fish bird"]);

        // cat appears in 2 of 3 docs: ln(3/2) ~ 0.405
        assert!((index.idf("cat") - 0.405).abs() < 0.01);
        // dog appears in 1 of 3 docs: ln(3/1) ~ 1.099
        assert!((index.idf("dog") - 1.099).abs() < 0.01);
        assert_eq!(index.idf("unknown"), 0.0);
    }

    #[test]
    fn term_in_every_document_has_zero_idf() {
        let index = build(&["cat dog", "cat bird"]);
        assert_eq!(index.idf("cat"), 0.0);
    }

    #[test]
    fn vector_drops_out_of_vocabulary_tokens() {
        let index = build(&["cat dog", "cat bird"]);
        let v = index.vector("dog zebra");

        assert_eq!(v.len(), 1);
        // tf is relative to both tokens: 1/2 * ln(2)
        assert!((v.weight("dog") - 0.5 * 2f64.ln()).abs() < 1e-12);
        assert_eq!(v.weight("zebra"), 0.0);
    }

    #[test]
    fn vector_of_unknown_text_is_empty() {
        let index = build(&["cat dog", "cat bird"]);
        assert!(index.vector("xyzxyz qwqwq").is_empty());
        assert!(index.vector("").is_empty());
    }

    #[test]
    fn document_vector_matches_text_vector() {
        let texts = ["How can I donate?", "Where is your office?", "Who is the CEO?"];
        let index = build(&texts);

        for (i, text) in texts.iter().enumerate() {
            let precomputed = index.document_vector(i).unwrap();
            assert_eq!(precomputed, index.vector(text));
        }
        assert!(index.document_vector(texts.len()).is_none());
        assert_eq!(index.document_vectors().len(), texts.len());
    }

    #[test]
    fn sizes_reported() {
        let index = build(&["cat dog", "cat bird"]);
        assert_eq!(index.document_count(), 2);
        assert_eq!(index.vocabulary_size(), 3);
    }

    #[test]
    fn cosine_similarity_identical() {
        let v = vector(&[("cat", 0.3), ("dog", 0.7)]);
        assert!((v.cosine_similarity(&v.clone()) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cosine_similarity_orthogonal() {
        let a = vector(&[("cat", 1.0)]);
        let b = vector(&[("dog", 1.0)]);
        assert_eq!(a.cosine_similarity(&b), 0.0);
    }

    #[test]
    fn cosine_similarity_partial_overlap() {
        let a = vector(&[("cat", 1.0), ("dog", 1.0)]);
        let b = vector(&[("cat", 1.0)]);
        let expected = 1.0 / 2f64.sqrt();
        assert!((a.cosine_similarity(&b) - expected).abs() < 1e-9);
        assert!((b.cosine_similarity(&a) - expected).abs() < 1e-9);
    }

    #[test]
    fn cosine_similarity_zero_norm_is_zero() {
        let empty = TermVector::default();
        let zeros = vector(&[("cat", 0.0)]);
        let a = vector(&[("cat", 1.0)]);

        assert_eq!(empty.cosine_similarity(&a), 0.0);
        assert_eq!(a.cosine_similarity(&empty), 0.0);
        assert_eq!(zeros.cosine_similarity(&a), 0.0);
        assert!(!empty.cosine_similarity(&empty).is_nan());
    }

    #[test]
    fn sums_are_order_independent_of_insertion() {
        let terms = ["zeta", "alpha", "mid", "beta", "omega", "kappa"];
        let weights = [0.1, 0.7, 0.333, 1e-9, 2.5, 0.0625];
        let forward = vector(&terms.iter().copied().zip(weights).collect::<Vec<_>>());
        let reversed = vector(&terms.iter().copied().zip(weights).rev().collect::<Vec<_>>());

        assert_eq!(forward.magnitude().to_bits(), reversed.magnitude().to_bits());
        let query = vector(&[("alpha", 0.3), ("omega", 0.9), ("zeta", 0.01)]);
        assert_eq!(
            query.cosine_similarity(&forward).to_bits(),
            query.cosine_similarity(&reversed).to_bits()
        );
    }

    #[test]
    fn identical_documents_have_identical_vectors() {
        let text = "Do you run mental health awareness programs for students in rural schools?";
        let index = build(&[text, text, "Where is the office?"]);
        let query = index.vector("mental health programs for rural students and schools");

        let first = index.document_vector(0).unwrap();
        let second = index.document_vector(1).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            query.cosine_similarity(&first).to_bits(),
            query.cosine_similarity(&second).to_bits()
        );
    }
}
