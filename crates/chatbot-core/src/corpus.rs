//! Training corpus: questions, their intents and the reply table.
//!
//! A corpus is plain data. It can come from the built-in foundation corpus
//! or from a JSON file shaped like:
//!
//! ```json
//! {
//!   "documents": [{ "text": "How can I donate?", "intent": "donation" }],
//!   "responses": { "donation": "...", "general": "..." },
//!   "defaultIntent": "general"
//! }
//! ```
//!
//! `defaultIntent` is optional and defaults to `"general"`.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builtin::DEFAULT_INTENT;

/// Intent label -> canned reply, in authored order.
pub type IntentResponses = IndexMap<String, String>;

/// Result type alias for corpus operations.
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Errors raised while loading or validating a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus file could not be read.
    #[error("failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The corpus file is not valid JSON for a corpus.
    #[error("failed to parse corpus: {0}")]
    Parse(#[from] serde_json::Error),

    /// A document has no question text.
    #[error("document {index} has empty text")]
    EmptyText { index: usize },

    /// A document has no intent label.
    #[error("document {index} has an empty intent")]
    EmptyIntent { index: usize },

    /// The designated default intent has no reply configured.
    #[error("default intent '{0}' has no configured response")]
    MissingDefaultResponse(String),
}

/// One training question and the intent it expresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusDocument {
    /// The question text as authored.
    pub text: String,
    /// Intent label shared by semantically similar questions.
    pub intent: String,
}

impl CorpusDocument {
    /// Creates a document from text and intent.
    pub fn new(text: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            intent: intent.into(),
        }
    }
}

fn default_intent() -> String {
    DEFAULT_INTENT.to_string()
}

/// A full training corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Corpus {
    /// Training questions in corpus order.
    pub documents: Vec<CorpusDocument>,
    /// Reply per intent.
    pub responses: IntentResponses,
    /// Intent whose reply is used when nothing better applies.
    #[serde(default = "default_intent")]
    pub default_intent: String,
}

impl Corpus {
    /// Creates a corpus from its parts.
    pub fn new(
        documents: Vec<CorpusDocument>,
        responses: IntentResponses,
        default_intent: impl Into<String>,
    ) -> Self {
        Self {
            documents,
            responses,
            default_intent: default_intent.into(),
        }
    }

    /// Parses and validates a corpus from JSON text.
    pub fn from_json_str(json: &str) -> CorpusResult<Self> {
        let corpus: Corpus = serde_json::from_str(json)?;
        corpus.validate()?;
        Ok(corpus)
    }

    /// Reads, parses and validates a corpus file.
    pub fn from_path(path: impl AsRef<Path>) -> CorpusResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Number of training documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus has no training documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Checks structural integrity.
    ///
    /// Documents must carry non-blank text and intent, and the default
    /// intent must have a reply. An empty document list is allowed.
    pub fn validate(&self) -> CorpusResult<()> {
        for (index, doc) in self.documents.iter().enumerate() {
            if doc.text.trim().is_empty() {
                return Err(CorpusError::EmptyText { index });
            }
            if doc.intent.trim().is_empty() {
                return Err(CorpusError::EmptyIntent { index });
            }
        }

        if !self.responses.contains_key(&self.default_intent) {
            return Err(CorpusError::MissingDefaultResponse(
                self.default_intent.clone(),
            ));
        }

        Ok(())
    }

    /// Reply configured for `intent`, if any.
    pub fn response(&self, intent: &str) -> Option<&str> {
        self.responses.get(intent).map(String::as_str)
    }

    /// Reply of the default intent.
    pub fn default_response(&self) -> Option<&str> {
        self.response(&self.default_intent)
    }

    /// Intents that have a configured reply, in authored order.
    pub fn available_intents(&self) -> Vec<String> {
        self.responses.keys().cloned().collect()
    }

    /// Intents used by documents that have no reply configured.
    pub fn unmapped_intents(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = Vec::new();
        for doc in &self.documents {
            let intent = doc.intent.as_str();
            if !self.responses.contains_key(intent) && !missing.contains(&intent) {
                missing.push(intent);
            }
        }
        missing
    }

    /// Pairs `(earlier, later)` of documents whose text is the same (ignoring
    /// case and surrounding whitespace) but whose intents differ.
    ///
    /// The later document of each pair can never win a match.
    pub fn conflicting_duplicates(&self) -> Vec<(usize, usize)> {
        let mut first_seen: IndexMap<String, usize> = IndexMap::new();
        let mut conflicts = Vec::new();

        for (index, doc) in self.documents.iter().enumerate() {
            let key = doc.text.trim().to_lowercase();
            match first_seen.get(&key) {
                Some(&earlier) if self.documents[earlier].intent != doc.intent => {
                    conflicts.push((earlier, index));
                }
                Some(_) => {}
                None => {
                    first_seen.insert(key, index);
                }
            }
        }

        conflicts
    }
}
