//! Nearest-neighbour intent matching over a built TF-IDF index.
//!
//! ## Algorithm
//!
//! 1. Vectorize the message against the corpus vocabulary
//! 2. Scan every precomputed document vector and keep the highest cosine
//!    similarity; equal scores keep the earlier document
//! 3. Map the winning document's intent to its canned reply
//!
//! The scan is linear. The corpus is a few hundred questions at most, so
//! O(documents x vocabulary) per message is acceptable.

use chatbot_core::{Corpus, FALLBACK_REPLY, MatchResult};

use crate::tfidf::{TermVector, TfIdfIndex};

/// A corpus document and its similarity to a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    /// Position of the document in the corpus.
    pub index: usize,
    /// Cosine similarity to the query.
    pub score: f64,
}

/// A fully built, read-only matcher: corpus, TF-IDF weights and one vector
/// per corpus document.
#[derive(Debug, Clone)]
pub struct IntentIndex {
    corpus: Corpus,
    tfidf: TfIdfIndex,
    document_vectors: Vec<TermVector>,
}

impl IntentIndex {
    /// Builds the vocabulary, IDF table and document vectors for a corpus.
    pub fn build(corpus: Corpus) -> Self {
        let mut tfidf = TfIdfIndex::new();
        for doc in &corpus.documents {
            tfidf.add_document(&doc.text);
        }
        tfidf.calculate_tfidf();

        let document_vectors = tfidf.document_vectors();

        Self {
            corpus,
            tfidf,
            document_vectors,
        }
    }

    /// The corpus this index was built from.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Number of distinct stems in the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.tfidf.vocabulary_size()
    }

    /// Number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.document_vectors.len()
    }

    /// Vectorizes text with the index weights.
    pub fn vectorize(&self, text: &str) -> TermVector {
        self.tfidf.vector(text)
    }

    /// Precomputed vector of the document at `index`.
    pub fn document_vector(&self, index: usize) -> Option<&TermVector> {
        self.document_vectors.get(index)
    }

    /// Finds the most similar document.
    ///
    /// Returns `None` when nothing scores above 0: an empty corpus, or a
    /// message with no in-vocabulary stems.
    pub fn best_match(&self, message: &str) -> Option<ScoredDocument> {
        let query = self.vectorize(message);
        if query.is_empty() {
            return None;
        }

        let mut best: Option<ScoredDocument> = None;
        let mut best_score = 0.0;

        for (index, doc_vector) in self.document_vectors.iter().enumerate() {
            let score = query.cosine_similarity(doc_vector);
            // Strict comparison: ties keep the lowest index.
            if score > best_score {
                best_score = score;
                best = Some(ScoredDocument { index, score });
            }
        }

        best
    }

    /// Classifies a message into an intent and its canned reply.
    ///
    /// Without any match the default intent is returned with confidence 0.
    /// An intent without a configured reply gets the default intent's reply.
    pub fn classify(&self, message: &str) -> MatchResult {
        let (intent, confidence) = match self.best_match(message) {
            Some(hit) => (self.corpus.documents[hit.index].intent.as_str(), hit.score),
            None => (self.corpus.default_intent.as_str(), 0.0),
        };

        let response = match self.corpus.response(intent) {
            Some(response) => response,
            None => {
                tracing::warn!(
                    intent,
                    default_intent = %self.corpus.default_intent,
                    "Intent has no configured response, using default"
                );
                self.corpus.default_response().unwrap_or(FALLBACK_REPLY)
            }
        };

        MatchResult::matched(intent, response, confidence)
    }
}
