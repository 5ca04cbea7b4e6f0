//! Chat service: owns the published index and answers messages.
//!
//! The service moves from uninitialized to initialized on the first
//! successful [`ChatService::initialize`]. Every further call rebuilds the
//! index from the corpus source and swaps it in whole; a failed rebuild
//! leaves the previous index published.
//!
//! Readers clone the `Arc` of the current index and drop the lock before
//! matching, so concurrent messages never wait on each other. Rebuilds are
//! serialized: the index published last is always built from the source
//! that was current when that rebuild started.

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, RwLock};

use chatbot_core::{ChatStatus, Corpus, CorpusError, CorpusResult, MatchResult, foundation_corpus};

use crate::matcher::IntentIndex;

/// Errors raised by the chat service.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// A message arrived before any index was published.
    #[error("Chatbot not initialized")]
    NotInitialized,

    /// The corpus could not be loaded or failed validation.
    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    /// A previous holder of the index lock panicked.
    #[error("chat index lock poisoned")]
    LockPoisoned,
}

/// Where `initialize` reads the corpus from.
#[derive(Debug, Clone)]
pub enum CorpusSource {
    /// The foundation corpus compiled into the binary.
    Builtin,
    /// A JSON corpus file, re-read on every initialization.
    File(PathBuf),
    /// A corpus supplied in memory.
    Inline(Arc<Corpus>),
}

impl CorpusSource {
    /// Loads and validates the corpus.
    pub fn load(&self) -> CorpusResult<Corpus> {
        let corpus = match self {
            Self::Builtin => foundation_corpus(),
            Self::File(path) => return Corpus::from_path(path),
            Self::Inline(corpus) => corpus.as_ref().clone(),
        };
        corpus.validate()?;
        Ok(corpus)
    }
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::File(path) => write!(f, "file:{}", path.display()),
            Self::Inline(corpus) => write!(f, "inline({} documents)", corpus.len()),
        }
    }
}

/// Figures reported after a successful initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexSummary {
    /// Distinct stems in the vocabulary.
    pub vocabulary_size: usize,
    /// Indexed corpus documents.
    pub training_documents: usize,
    /// Intents with a configured reply.
    pub intents: usize,
}

/// The chatbot: corpus source plus the currently published index.
///
/// Construct once at startup and share behind an `Arc`.
pub struct ChatService {
    source: RwLock<CorpusSource>,
    index: RwLock<Option<Arc<IntentIndex>>>,
    /// Held from reading the source until the new index is published.
    rebuild: Mutex<()>,
}

impl ChatService {
    /// Creates an uninitialized service reading from `source`.
    pub fn new(source: CorpusSource) -> Self {
        Self {
            source: RwLock::new(source),
            index: RwLock::new(None),
            rebuild: Mutex::new(()),
        }
    }

    /// Creates an uninitialized service over an in-memory corpus.
    pub fn with_corpus(corpus: Corpus) -> Self {
        Self::new(CorpusSource::Inline(Arc::new(corpus)))
    }

    /// Replaces the corpus source. Takes effect on the next `initialize`.
    pub fn set_source(&self, source: CorpusSource) -> Result<(), ChatError> {
        let mut current = self.source.write().map_err(|_| ChatError::LockPoisoned)?;
        tracing::debug!(from = %*current, to = %source, "Corpus source replaced");
        *current = source;
        Ok(())
    }

    /// Builds a fresh index from the corpus source and publishes it.
    ///
    /// On error nothing is published and the previous state is kept.
    pub fn initialize(&self) -> Result<IndexSummary, ChatError> {
        let _rebuild = self.rebuild.lock().map_err(|_| ChatError::LockPoisoned)?;

        let source = self
            .source
            .read()
            .map_err(|_| ChatError::LockPoisoned)?
            .clone();

        tracing::info!(source = %source, "Initializing chatbot");

        let corpus = source.load().inspect_err(|e| {
            tracing::error!(source = %source, error = %e, "Failed to load chatbot corpus");
        })?;

        for (earlier, later) in corpus.conflicting_duplicates() {
            tracing::warn!(
                earlier,
                later,
                text = %corpus.documents[later].text,
                "Duplicate question with a different intent can never match"
            );
        }
        for intent in corpus.unmapped_intents() {
            tracing::warn!(intent, "Intent has no configured response");
        }

        let index = IntentIndex::build(corpus);
        let summary = IndexSummary {
            vocabulary_size: index.vocabulary_size(),
            training_documents: index.document_count(),
            intents: index.corpus().responses.len(),
        };

        *self.index.write().map_err(|_| ChatError::LockPoisoned)? = Some(Arc::new(index));

        tracing::info!(
            vocabulary_size = summary.vocabulary_size,
            training_documents = summary.training_documents,
            intents = summary.intents,
            "Chatbot initialized"
        );

        Ok(summary)
    }

    /// Whether an index has been published.
    pub fn is_initialized(&self) -> bool {
        self.index.read().map(|index| index.is_some()).unwrap_or(false)
    }

    /// The currently published index.
    pub fn current_index(&self) -> Result<Arc<IntentIndex>, ChatError> {
        self.index
            .read()
            .map_err(|_| ChatError::LockPoisoned)?
            .clone()
            .ok_or(ChatError::NotInitialized)
    }

    /// Classifies a message, surfacing failures as errors.
    pub fn try_process_message(&self, message: &str) -> Result<MatchResult, ChatError> {
        let index = self.current_index()?;
        let result = index.classify(message);

        tracing::debug!(
            intent = %result.intent,
            confidence = result.confidence,
            "Message classified"
        );

        Ok(result)
    }

    /// Classifies a message. Never fails: errors become the contact-us
    /// fallback with `success: false`.
    pub fn process_message(&self, message: &str) -> MatchResult {
        match self.try_process_message(message) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "Error processing chat message");
                MatchResult::failure(e.to_string())
            }
        }
    }

    /// Introspection snapshot.
    ///
    /// Until an index is published the vocabulary is empty, but the document
    /// count and intents still describe the configured corpus. A source that
    /// cannot be loaded reports none.
    pub fn status(&self) -> ChatStatus {
        if let Ok(index) = self.current_index() {
            return ChatStatus {
                initialized: true,
                vocabulary_size: index.vocabulary_size(),
                training_documents: index.document_count(),
                available_intents: index.corpus().available_intents(),
            };
        }

        let corpus = self
            .source
            .read()
            .ok()
            .and_then(|source| source.load().ok());

        ChatStatus {
            initialized: false,
            vocabulary_size: 0,
            training_documents: corpus.as_ref().map_or(0, Corpus::len),
            available_intents: corpus
                .map(|corpus| corpus.available_intents())
                .unwrap_or_default(),
        }
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new(CorpusSource::Builtin)
    }
}

impl fmt::Debug for ChatService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatService")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
