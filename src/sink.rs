//! Output sinks for rendered events.
//!
//! The hook writes through an [`OutputSink`] it owns, so the host (or a test)
//! decides where display output goes.
//!
//! # Usage
//!
//! ```no_run
//! use concise_display::{ConciseDisplay, OutputSink};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! struct StderrSink;
//!
//! impl OutputSink for StderrSink {
//!     fn emit(&self, message: &str) {
//!         // Block with trailing blank line for visual separation
//!         eprintln!("{}\n", message);
//!     }
//!     fn emit_line(&self, message: &str) {
//!         eprintln!("{}", message);
//!     }
//! }
//!
//! let hook = ConciseDisplay::mount(&json!({"show_thinking": false}), Arc::new(StderrSink));
//! hook.handle("tool:pre", &json!({"tool_name": "bash", "tool_input": {"command": "ls"}}));
//! ```

use std::io::{self, Write};

/// Destination for rendered display output.
///
/// # Methods
///
/// * `emit` - For complete blocks that should have visual separation (trailing blank line)
/// * `emit_line` - For continuous output without separation
pub trait OutputSink: Send + Sync {
    /// Emit a complete block with trailing blank line for visual separation.
    fn emit(&self, message: &str);
    /// Emit a line (or multi-line block) without trailing blank line.
    fn emit_line(&self, message: &str);
}

/// Writes to standard output.
///
/// Write errors (e.g., a closed pipe) are ignored: display output must never
/// fail the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, message: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{message}\n");
        let _ = out.flush();
    }

    fn emit_line(&self, message: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{message}");
        let _ = out.flush();
    }
}
