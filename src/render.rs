//! Event rendering.
//!
//! [`Formatter`] turns one [`Event`] into the text to print for it, or `None`
//! when the event should not produce output. Rendering is pure: the same
//! event, config and width always give the same text.

use crate::config::DisplayConfig;
use crate::diff::{render_diff_block, render_write_preview};
use crate::event::{EditPair, Event};
use crate::format::{
    format_compact_number, format_count, icon, style_dim, style_fail, style_ok, style_tool,
    style_warn, truncate,
};
use crate::tools::{CallDetail, Status, summarize_call, summarize_result};

use serde_json::{Map, Value};

// ============================================================================
// Constants
// ============================================================================

/// Wrapped thinking lines shown before `(+N more lines)`.
pub const THINKING_PREVIEW_LINES: usize = 5;

/// Default width when terminal size cannot be detected (e.g., piped output).
const DEFAULT_WIDTH: usize = 120;

/// Columns reserved for indent and the thinking margin.
const THINKING_MARGIN: usize = 7;

/// Indent applied to thinking text.
const THINKING_INDENT: &str = "   ";

/// Detect the current terminal width, falling back to [`DEFAULT_WIDTH`].
pub(crate) fn detect_terminal_width() -> usize {
    let (width, _) = termimad::terminal_size();
    let width = width as usize;
    if width == 0 { DEFAULT_WIDTH } else { width }
}

// ============================================================================
// Formatter
// ============================================================================

/// Renders session events according to a fixed [`DisplayConfig`].
///
/// By default, thinking text is wrapped to the terminal width (auto-detected
/// at each render). Use [`Formatter::with_width`] to pin a width.
///
/// # Example
///
/// ```
/// use concise_display::{DisplayConfig, Event, Formatter};
///
/// colored::control::set_override(false);
/// let formatter = Formatter::new(DisplayConfig::default());
/// let line = formatter.render(&Event::TokenSummary {
///     input_tokens: 54_000,
///     cached_fraction: 0.97,
///     output_tokens: 646,
///     caching: false,
/// });
/// assert_eq!(line.as_deref(), Some("└─ 54k tokens in (97% cached) · 646 out"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    config: DisplayConfig,
    width: Option<usize>,
}

impl Formatter {
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            config,
            width: None,
        }
    }

    /// Pin the wrap width instead of detecting the terminal width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Render an event from the top-level session.
    pub fn render(&self, event: &Event) -> Option<String> {
        self.render_as(event, None)
    }

    /// Render an event, attributing it to `agent` when it comes from a
    /// sub-agent session.
    ///
    /// Returns `None` when display is disabled, when the event kind is
    /// switched off, or when there is nothing to show.
    pub fn render_as(&self, event: &Event, agent: Option<&str>) -> Option<String> {
        if !self.config.enabled {
            return None;
        }
        let prefix = AgentPrefix::new(agent, &self.config);
        match event {
            Event::ToolCallStart { tool, params } => Some(self.render_call(tool, params, &prefix)),
            Event::ToolCallResult {
                tool,
                result,
                success,
            } => Some(self.render_result(tool, result, *success, &prefix)),
            Event::ThinkingStarted => self.render_thinking_started(&prefix),
            Event::Thinking { text } => self.render_thinking(text, &prefix),
            Event::TokenSummary {
                input_tokens,
                cached_fraction,
                output_tokens,
                caching,
            } => self.render_tokens(
                *input_tokens,
                *cached_fraction,
                *output_tokens,
                *caching,
                &prefix,
            ),
            Event::FileEdit { path, edits } => Some(self.render_file_edit(path, edits, &prefix)),
        }
    }

    fn render_call(
        &self,
        tool: &str,
        params: &Map<String, Value>,
        prefix: &AgentPrefix,
    ) -> String {
        let summary = summarize_call(tool, params, &self.config);
        let text = truncate(&summary.text, self.config.max_param_len);

        let mut line = format!(
            "{}{}",
            prefix.head,
            style_tool(&format!("{} {tool}:", icon::TOOL))
        );
        if !text.is_empty() {
            line.push(' ');
            line.push_str(&style_dim(&text));
        }

        let block = match &summary.detail {
            CallDetail::None => Vec::new(),
            CallDetail::Diff { old, new } => {
                render_diff_block(old, new, self.config.max_result_len)
                    .into_iter()
                    .map(|l| format!("{}  {l}", prefix.indent))
                    .collect()
            }
            CallDetail::WritePreview(content) => {
                render_write_preview(content, self.config.max_result_len)
                    .into_iter()
                    .map(|l| format!("{}{l}", prefix.indent))
                    .collect()
            }
        };

        std::iter::once(line)
            .chain(block)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_result(
        &self,
        tool: &str,
        result: &Value,
        success: bool,
        prefix: &AgentPrefix,
    ) -> String {
        let mut summary = summarize_result(tool, result, &self.config);
        if !success {
            summary.status = Status::Fail;
        }

        let status = summary.status;
        let mark = match status {
            Status::Ok => style_ok(icon::OK),
            Status::Warn => style_warn(icon::WARN),
            Status::Fail => style_fail(icon::FAIL),
        };
        let style = |text: &str| match status {
            Status::Ok => style_dim(text),
            Status::Warn => style_warn(text),
            Status::Fail => style_fail(text),
        };

        let max = self.config.max_result_len;
        let mut lines = Vec::with_capacity(summary.lines.len() + 1);
        let mut shown = summary.lines.iter().map(|l| truncate(l, max));
        let first = match shown.next() {
            Some(text) => format!("{}{mark} {}", prefix.head, style(&text)),
            None => format!("{}{mark}", prefix.head),
        };
        lines.push(first);
        lines.extend(shown.map(|text| format!("{}  {}", prefix.indent, style(&text))));
        if summary.hidden_lines > 0 {
            lines.push(format!(
                "{}  {}",
                prefix.indent,
                style_dim(&format!("(+{} more)", summary.hidden_lines))
            ));
        }
        lines.join("\n")
    }

    fn render_thinking_started(&self, prefix: &AgentPrefix) -> Option<String> {
        if !self.config.show_thinking {
            return None;
        }
        Some(format!(
            "{}{}",
            prefix.head,
            style_tool(&format!("{} Thinking...", icon::THINK))
        ))
    }

    fn render_thinking(&self, text: &str, prefix: &AgentPrefix) -> Option<String> {
        if !self.config.show_thinking || text.trim().is_empty() {
            return None;
        }

        let width = self
            .width
            .unwrap_or_else(detect_terminal_width)
            .saturating_sub(THINKING_MARGIN)
            .max(1);
        let wrapped: Vec<String> = text
            .trim()
            .split('\n')
            .flat_map(|line| {
                let pieces = textwrap::wrap(line, width);
                if pieces.is_empty() {
                    vec![String::new()]
                } else {
                    pieces.into_iter().map(|p| p.into_owned()).collect()
                }
            })
            .collect();

        let indent = format!("{}{THINKING_INDENT}", prefix.indent);
        let mut lines: Vec<String> = wrapped
            .iter()
            .take(THINKING_PREVIEW_LINES)
            .map(|l| style_dim(&format!("{indent}{l}")))
            .collect();
        let hidden = wrapped.len().saturating_sub(THINKING_PREVIEW_LINES);
        if hidden > 0 {
            lines.push(style_dim(&format!("{indent}(+{hidden} more lines)")));
        }
        Some(lines.join("\n"))
    }

    fn render_tokens(
        &self,
        input_tokens: u64,
        cached_fraction: f64,
        output_tokens: u64,
        caching: bool,
        prefix: &AgentPrefix,
    ) -> Option<String> {
        if !self.config.show_token_usage {
            return None;
        }

        let cache_info = if cached_fraction > 0.0 {
            // Truncated: 100% only when every input token was cached
            let pct = (cached_fraction.clamp(0.0, 1.0) * 100.0) as u64;
            format!(" ({pct}% cached)")
        } else if caching {
            " (caching...)".to_string()
        } else {
            String::new()
        };

        Some(format!(
            "{}{}",
            prefix.indent,
            style_dim(&format!(
                "└─ {} tokens in{cache_info} · {} out",
                format_compact_number(input_tokens),
                format_compact_number(output_tokens)
            ))
        ))
    }

    fn render_file_edit(&self, path: &str, edits: &[EditPair], prefix: &AgentPrefix) -> String {
        let header = format!(
            "{}{}",
            prefix.head,
            style_tool(&format!(
                "{} {}",
                icon::FILE,
                truncate(path, self.config.max_param_len)
            ))
        );

        let mut lines = vec![header];
        for edit in edits {
            lines.extend(
                render_diff_block(&edit.removed, &edit.added, self.config.max_result_len)
                    .into_iter()
                    .map(|l| format!("{}  {l}", prefix.indent)),
            );
        }
        lines.push(format!(
            "{}{} {}",
            prefix.head,
            style_ok(icon::OK),
            style_dim(&format_count(edits.len() as u64, "edit", None))
        ));
        lines.join("\n")
    }
}

/// Render `event` with a one-off formatter for `config`.
pub fn render(event: &Event, config: &DisplayConfig) -> Option<String> {
    Formatter::new(config.clone()).render(event)
}

// ============================================================================
// Sub-agent Prefix
// ============================================================================

/// Line prefixes for events coming from a sub-agent session.
struct AgentPrefix {
    /// Prefix for the first line of an event: indent plus `[agent] `.
    head: String,
    /// Prefix for continuation lines: indent only.
    indent: &'static str,
}

impl AgentPrefix {
    fn new(agent: Option<&str>, config: &DisplayConfig) -> Self {
        match agent {
            Some(name) if config.indent_sub_agents => {
                let head = if config.show_agent_name {
                    format!("  {} ", style_dim(&format!("[{name}]")))
                } else {
                    "  ".to_string()
                };
                Self { head, indent: "  " }
            }
            _ => Self {
                head: String::new(),
                indent: "",
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
