//! Shared test helpers for concise-display tests.
//!
//! This module provides common utilities used across test files to reduce
//! duplication and ensure consistent test behavior.

// Allow dead code since not all test files use all helpers
#![allow(dead_code)]

use concise_display::{ConciseDisplay, OutputSink};
use serde_json::Value;
use std::sync::{Arc, Mutex};

// =============================================================================
// ANSI Stripping
// =============================================================================

/// Strip ANSI escape codes for content verification in tests.
///
/// This allows tests to verify text content without being affected by
/// color codes or other terminal formatting.
pub fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // Skip the escape sequence
            if chars.peek() == Some(&'[') {
                chars.next(); // consume '['
                // Skip until we hit a letter (the terminator)
                while let Some(&next) = chars.peek() {
                    chars.next();
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

// =============================================================================
// RAII Guards
// =============================================================================

/// RAII guard that disables colored output for tests.
///
/// Colors are restored when the guard is dropped, even if the test panics.
/// Assertions should still compare through [`strip_ansi`], since other tests
/// in the same binary may toggle the global override concurrently.
pub struct DisableColors;

impl DisableColors {
    /// Create a new guard that disables colored output.
    pub fn new() -> Self {
        colored::control::set_override(false);
        Self
    }
}

impl Default for DisableColors {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DisableColors {
    fn drop(&mut self) {
        colored::control::unset_override();
    }
}

// =============================================================================
// Test Capture Sink
// =============================================================================

/// A test sink that captures everything the hook writes, in order.
///
/// Blocks written with `emit` get their trailing blank line appended, the
/// way a terminal sink would print them, so the captured stream reads like
/// the terminal transcript.
///
/// # Example
///
/// ```ignore
/// let (sink, captured) = CaptureSink::new();
/// let hook = ConciseDisplay::mount(&Value::Null, Arc::new(sink));
/// hook.handle("tool:pre", &json!({"tool_name": "bash"}));
/// let lines = captured.lock().unwrap();
/// ```
pub struct CaptureSink {
    /// The captured messages, wrapped in Arc<Mutex> for thread safety.
    pub captured: Arc<Mutex<Vec<String>>>,
}

impl CaptureSink {
    /// Create a new capture sink and return both the sink and a handle
    /// to the captured messages.
    pub fn new() -> (Self, Arc<Mutex<Vec<String>>>) {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let sink = Self {
            captured: captured.clone(),
        };
        (sink, captured)
    }
}

impl OutputSink for CaptureSink {
    fn emit(&self, message: &str) {
        self.captured.lock().unwrap().push(format!("{message}\n"));
    }

    fn emit_line(&self, message: &str) {
        self.captured.lock().unwrap().push(message.to_string());
    }
}

// =============================================================================
// Hook Helpers
// =============================================================================

/// A mounted hook plus the transcript it writes.
pub struct Session {
    pub hook: ConciseDisplay,
    captured: Arc<Mutex<Vec<String>>>,
}

impl Session {
    /// Mount a hook with `config` and a fixed wrap width of 80 columns.
    pub fn mount(config: Value) -> Self {
        let (sink, captured) = CaptureSink::new();
        let hook = ConciseDisplay::mount(&config, Arc::new(sink)).with_width(80);
        Self { hook, captured }
    }

    /// Send one host event to the hook.
    pub fn send(&self, event: &str, data: Value) -> concise_display::HookAction {
        self.hook.handle(event, &data)
    }

    /// The transcript so far with ANSI codes stripped, one entry per line.
    pub fn transcript(&self) -> Vec<String> {
        self.captured
            .lock()
            .unwrap()
            .iter()
            .map(|m| strip_ansi(m))
            .flat_map(|m| m.split('\n').map(str::to_string).collect::<Vec<_>>())
            .collect()
    }

    /// The transcript as a single string.
    pub fn text(&self) -> String {
        self.transcript().join("\n")
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that output contains a tool call line for `tool_name`.
pub fn assert_has_tool_call(output: &str, tool_name: &str) {
    assert!(
        output.contains(&format!("→ {}:", tool_name)),
        "Output should contain tool call marker for '{}'. Output:\n{}",
        tool_name,
        output
    );
}

/// Assert that output contains exactly `count` lines equal to `line` after
/// trimming leading indentation.
pub fn assert_line_count(output: &str, line: &str, count: usize) {
    let found = output.lines().filter(|l| l.trim_start() == line).count();
    assert_eq!(
        found, count,
        "Expected {} line(s) '{}', found {}. Output:\n{}",
        count, line, found, output
    );
}
