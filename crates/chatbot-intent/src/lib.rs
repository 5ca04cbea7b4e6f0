//! chatbot-intent: TF-IDF intent matching for the foundation chatbot
//!
//! This crate provides:
//! - Tokenization with Unicode word boundaries and English stemming
//! - A TF-IDF index over a fixed question corpus
//! - Nearest-neighbour intent matching by cosine similarity
//! - `ChatService`, which owns the published index and never fails a message
//!
//! # Usage
//!
//! ```rust,ignore
//! use chatbot_intent::{ChatService, CorpusSource};
//!
//! let service = ChatService::new(CorpusSource::Builtin);
//! service.initialize()?;
//!
//! let result = service.process_message("How can I donate?");
//! assert_eq!(result.intent, "donation");
//! ```

pub mod matcher;
pub mod service;
pub mod tfidf;
pub mod tokenizer;

pub use matcher::{IntentIndex, ScoredDocument};
pub use service::{ChatError, ChatService, CorpusSource, IndexSummary};
pub use tfidf::{TermVector, TfIdfIndex, Vocabulary};
pub use tokenizer::tokenize;

// Re-export the data model for downstream crates
pub use chatbot_core;
