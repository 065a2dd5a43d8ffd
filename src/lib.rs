//! Concise terminal display for agent session events.
//!
//! concise-display is a display hook for an agent runtime. The host hands it
//! session events (tool calls and results, thinking blocks, token usage, file
//! edits) and it prints a condensed, colorized line or small block for each:
//!
//! ```text
//! → bash: cargo test
//! ✓ test result: ok. 42 passed
//! └─ 54k tokens in (97% cached) · 646 out
//! ```
//!
//! # Modules
//!
//! - [`hook`] - Host entry point: payload in, rendered output to a sink
//! - [`render`] - Pure `Event -> Option<String>` rendering
//! - [`tools`] - Per-tool call/result summaries
//! - [`diff`] - Edit diffs and write previews
//! - [`mod@format`] - Truncation, number formatting, named styles
//! - [`event`] - Event and token usage types
//! - [`config`] - Display configuration
//! - [`sink`] - Output sinks

pub mod config;
pub mod diff;
pub mod error;
pub mod event;
pub mod format;
pub mod hook;
pub mod render;
pub mod sink;
pub mod tools;

// Re-export commonly used types
pub use config::DisplayConfig;
pub use error::ConfigError;
pub use event::{EditPair, Event, TokenUsage, agent_from_session_id};
pub use hook::{ConciseDisplay, HookAction, HookEvent};
pub use render::{Formatter, render};
pub use sink::{OutputSink, StdoutSink};
pub use tools::KNOWN_TOOLS;
