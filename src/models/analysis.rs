use serde::{Deserialize, Serialize};

/// Outcome of an analyzer run.
///
/// Serialized untagged: a completed run writes the summary itself, a failed
/// run writes `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Analysis<T> {
    Complete(T),
    Failed { error: String },
}

impl<T> Analysis<T> {
    pub fn failed(error: impl Into<String>) -> Self {
        Analysis::Failed {
            error: error.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Analysis::Complete(_))
    }

    pub fn summary(&self) -> Option<&T> {
        match self {
            Analysis::Complete(s) => Some(s),
            Analysis::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Analysis::Complete(_) => None,
            Analysis::Failed { error } => Some(error),
        }
    }

    /// Convert into a plain `Result`, with the error message as the `Err` value.
    pub fn into_result(self) -> std::result::Result<T, String> {
        match self {
            Analysis::Complete(s) => Ok(s),
            Analysis::Failed { error } => Err(error),
        }
    }
}
