//! Query value object

use serde::{Deserialize, Serialize};

/// Returns `true` when the text contains something other than whitespace.
///
/// Absent text (`None`) is treated like an empty string.
pub fn validate_query(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.trim().is_empty())
}

/// A query submitted from the dashboard (Value Object)
///
/// The text is carried along for display and logging only; no computation
/// reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    content: String,
}

impl Query {
    /// Try to create a new query, returning None if it is empty or only whitespace
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if validate_query(Some(&content)) {
            Some(Self { content })
        } else {
            None
        }
    }

    /// Get the query content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
