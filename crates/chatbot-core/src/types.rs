//! Values returned by the chatbot to its callers.

use serde::{Deserialize, Serialize};

use crate::builtin::FALLBACK_REPLY;

/// Intent label reported when the chatbot could not answer.
pub const ERROR_INTENT: &str = "error";

/// Outcome of classifying one chat message.
///
/// `success` tells a real answer apart from the contact-us fallback; both are
/// user-displayable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Matched intent, or `"error"` on failure.
    pub intent: String,
    /// Canned reply to show the user.
    pub response: String,
    /// Cosine similarity of the winning document, in `[0, 1]`.
    pub confidence: f64,
    /// Whether the reply came from the matcher.
    pub success: bool,
    /// Failure reason, present only when `success` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MatchResult {
    /// A successful match.
    pub fn matched(intent: impl Into<String>, response: impl Into<String>, confidence: f64) -> Self {
        Self {
            intent: intent.into(),
            response: response.into(),
            confidence: confidence.clamp(0.0, 1.0),
            success: true,
            error: None,
        }
    }

    /// The fixed contact-us fallback.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            intent: ERROR_INTENT.to_string(),
            response: FALLBACK_REPLY.to_string(),
            confidence: 0.0,
            success: false,
            error: Some(reason.into()),
        }
    }
}

/// Introspection snapshot of the chat service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatStatus {
    /// Whether an index has been published.
    pub initialized: bool,
    /// Distinct stems in the published vocabulary (0 when uninitialized).
    pub vocabulary_size: usize,
    /// Number of corpus documents.
    pub training_documents: usize,
    /// Intents with a configured reply, in authored order.
    pub available_intents: Vec<String>,
}
