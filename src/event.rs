//! Session events and the raw host records they are built from.

use serde_json::{Map, Value};

/// One unit of host-reported activity to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A tool is about to run.
    ToolCallStart {
        tool: String,
        params: Map<String, Value>,
    },
    /// A tool finished. `result` is a string or a structured value.
    ToolCallResult {
        tool: String,
        result: Value,
        success: bool,
    },
    /// A thinking/reasoning content block opened.
    ThinkingStarted,
    /// The full text of a thinking block.
    Thinking { text: String },
    /// Token accounting for a completed response.
    TokenSummary {
        input_tokens: u64,
        /// Share of `input_tokens` served from the prompt cache, `0.0..=1.0`.
        cached_fraction: f64,
        output_tokens: u64,
        /// The turn wrote to the prompt cache without reading from it.
        caching: bool,
    },
    /// A file edit, as ordered removed/added pairs.
    FileEdit { path: String, edits: Vec<EditPair> },
}

/// One replacement within a [`Event::FileEdit`]. Either side may span lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPair {
    pub removed: String,
    pub added: String,
}

impl EditPair {
    pub fn new(removed: impl Into<String>, added: impl Into<String>) -> Self {
        Self {
            removed: removed.into(),
            added: added.into(),
        }
    }
}

/// Token usage as reported by the host after a response.
///
/// With prompt caching, `input_tokens` is only the uncached portion; cache
/// reads and writes are reported separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_read_input_tokens: u64,
    pub cache_creation_input_tokens: u64,
}

impl TokenUsage {
    /// Parse a usage record, treating missing or malformed fields as zero.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_u64).unwrap_or(0);
        Self {
            input_tokens: field("input_tokens"),
            output_tokens: field("output_tokens"),
            cache_read_input_tokens: field("cache_read_input_tokens"),
            cache_creation_input_tokens: field("cache_creation_input_tokens"),
        }
    }

    /// Total input tokens, cached or not.
    pub fn total_input(&self) -> u64 {
        self.input_tokens
            .saturating_add(self.cache_read_input_tokens)
            .saturating_add(self.cache_creation_input_tokens)
    }

    /// Convert to a [`Event::TokenSummary`].
    pub fn summary(&self) -> Event {
        let total = self.total_input();
        let cached_fraction = if total > 0 {
            self.cache_read_input_tokens as f64 / total as f64
        } else {
            0.0
        };
        Event::TokenSummary {
            input_tokens: total,
            cached_fraction,
            output_tokens: self.output_tokens,
            caching: self.cache_read_input_tokens == 0 && self.cache_creation_input_tokens > 0,
        }
    }
}

/// Extract a sub-agent name from a session id like `abc123_foundation:explorer`.
///
/// Top-level sessions (`session_...` or ids without `_`) yield `None`.
pub fn agent_from_session_id(session_id: &str) -> Option<&str> {
    if session_id.starts_with("session_") {
        return None;
    }
    match session_id.rsplit_once('_') {
        Some((_, name)) if !name.is_empty() => Some(name),
        _ => None,
    }
}
