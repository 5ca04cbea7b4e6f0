//! chatbot-core: data model for the foundation chatbot
//!
//! This crate provides:
//! - `CorpusDocument` and `Corpus`, the training questions and their intents
//! - `IntentResponses`, the canned reply per intent
//! - `MatchResult` and `ChatStatus`, the values handed back to callers
//! - The built-in Mwalimu Hope Foundation corpus
//!
//! Nothing here depends on the matcher or on HTTP; see `chatbot-intent` for
//! the TF-IDF index and `chatbot-server` for the REST surface.

pub mod builtin;
pub mod corpus;
pub mod types;

pub use builtin::{DEFAULT_INTENT, FALLBACK_REPLY, foundation_corpus};
pub use corpus::{Corpus, CorpusDocument, CorpusError, CorpusResult, IntentResponses};
pub use types::{ChatStatus, ERROR_INTENT, MatchResult};
