//! Hook entry point for the host runtime.
//!
//! The host calls [`ConciseDisplay::handle`] once per lifecycle event with a
//! loosely-typed JSON payload. The hook builds an [`Event`] from the payload,
//! renders it, writes it to its sink, and tells the host how to proceed.
//! Malformed payloads degrade to empty fields; nothing here returns an error.

use std::sync::Arc;

use serde_json::{Map, Value, json};

use crate::config::DisplayConfig;
use crate::event::{Event, TokenUsage, agent_from_session_id};
use crate::format::{icon, style_warn};
use crate::render::Formatter;
use crate::sink::OutputSink;

/// Tools whose events are left to a dedicated UI hook.
const PASSTHROUGH_TOOLS: &[&str] = &["todo"];

/// Content block types rendered as thinking.
const THINKING_BLOCK_TYPES: &[&str] = &["thinking", "reasoning"];

/// Lifecycle events the hook registers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    ToolPre,
    ToolPost,
    ContentBlockStart,
    ContentBlockEnd,
}

impl HookEvent {
    pub const ALL: [HookEvent; 4] = [
        HookEvent::ToolPre,
        HookEvent::ToolPost,
        HookEvent::ContentBlockStart,
        HookEvent::ContentBlockEnd,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tool:pre" => Some(Self::ToolPre),
            "tool:post" => Some(Self::ToolPost),
            "content_block:start" => Some(Self::ContentBlockStart),
            "content_block:end" => Some(Self::ContentBlockEnd),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ToolPre => "tool:pre",
            Self::ToolPost => "tool:post",
            Self::ContentBlockStart => "content_block:start",
            Self::ContentBlockEnd => "content_block:end",
        }
    }
}

/// What the host should do after the hook ran.
#[derive(Debug, Clone, PartialEq)]
pub enum HookAction {
    /// Proceed with the payload unchanged.
    Continue,
    /// Proceed with this payload instead. Carries
    /// `hook_metadata.concise_displayed = true` so later hooks can skip
    /// their own display of the same tool event.
    Modify(Value),
}

/// The concise display hook.
pub struct ConciseDisplay {
    formatter: Formatter,
    sink: Arc<dyn OutputSink>,
}

impl ConciseDisplay {
    pub fn new(config: DisplayConfig, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            formatter: Formatter::new(config),
            sink,
        }
    }

    /// Build the hook from the host's module configuration.
    ///
    /// An invalid configuration falls back to the defaults and is reported
    /// as a warning line on the sink.
    pub fn mount(config: &Value, sink: Arc<dyn OutputSink>) -> Self {
        let config = match DisplayConfig::from_value(config) {
            Ok(config) => config,
            Err(err) => {
                sink.emit_line(&format_config_warning(&err.to_string()));
                DisplayConfig::default()
            }
        };
        Self::new(config, sink)
    }

    /// Pin the wrap width used for thinking text.
    pub fn with_width(mut self, width: usize) -> Self {
        self.formatter = self.formatter.with_width(width);
        self
    }

    pub fn config(&self) -> &DisplayConfig {
        self.formatter.config()
    }

    /// Handle one host event. Unknown event names pass through.
    pub fn handle(&self, event_name: &str, data: &Value) -> HookAction {
        if !self.config().enabled {
            return HookAction::Continue;
        }
        match HookEvent::from_name(event_name) {
            Some(HookEvent::ToolPre) => self.on_tool_pre(data),
            Some(HookEvent::ToolPost) => self.on_tool_post(data),
            Some(HookEvent::ContentBlockStart) => self.on_block_start(data),
            Some(HookEvent::ContentBlockEnd) => self.on_block_end(data),
            None => HookAction::Continue,
        }
    }

    fn on_tool_pre(&self, data: &Value) -> HookAction {
        if is_passthrough(data) {
            return HookAction::Continue;
        }
        let event = tool_call_from_payload(data);
        if let Some(text) = self.formatter.render_as(&event, session_agent(data)) {
            // Blank line separates each tool call from what came before.
            self.sink.emit_line("");
            self.sink.emit_line(&text);
        }
        mark_displayed(data)
    }

    fn on_tool_post(&self, data: &Value) -> HookAction {
        if is_passthrough(data) {
            return HookAction::Continue;
        }
        let event = tool_result_from_payload(data);
        if let Some(text) = self.formatter.render_as(&event, session_agent(data)) {
            self.sink.emit_line(&text);
        }
        mark_displayed(data)
    }

    fn on_block_start(&self, data: &Value) -> HookAction {
        if is_thinking_type(data.get("block_type"))
            && let Some(text) = self
                .formatter
                .render_as(&Event::ThinkingStarted, session_agent(data))
        {
            self.sink.emit_line("");
            self.sink.emit_line(&text);
        }
        HookAction::Continue
    }

    /// Thinking text is rendered from the end payload alone; a matching
    /// `content_block:start` is not required.
    fn on_block_end(&self, data: &Value) -> HookAction {
        let agent = session_agent(data);
        let block = data.get("block");

        if is_thinking_type(block.and_then(|b| b.get("type"))) {
            let text = ["thinking", "text"]
                .iter()
                .filter_map(|key| block.and_then(|b| b.get(*key)).and_then(Value::as_str))
                .find(|s| !s.is_empty())
                .unwrap_or("");
            let event = Event::Thinking {
                text: text.to_string(),
            };
            if let Some(rendered) = self.formatter.render_as(&event, agent) {
                self.sink.emit_line(&rendered);
            }
        }

        if is_last_block(data)
            && let Some(usage) = data
                .get("usage")
                .filter(|u| u.as_object().is_some_and(|m| !m.is_empty()))
            && let Some(rendered) = self
                .formatter
                .render_as(&TokenUsage::from_value(usage).summary(), agent)
        {
            self.sink.emit(&rendered);
        }

        HookAction::Continue
    }
}

// ============================================================================
// Payload Parsing
// ============================================================================

fn str_field<'a>(data: &'a Value, key: &str) -> &'a str {
    data.get(key).and_then(Value::as_str).unwrap_or("")
}

fn tool_name(data: &Value) -> &str {
    data.get("tool_name")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
}

fn session_agent(data: &Value) -> Option<&str> {
    agent_from_session_id(str_field(data, "session_id"))
}

fn is_passthrough(data: &Value) -> bool {
    PASSTHROUGH_TOOLS.contains(&tool_name(data))
}

fn is_thinking_type(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .is_some_and(|t| THINKING_BLOCK_TYPES.contains(&t))
}

fn is_last_block(data: &Value) -> bool {
    let index = data.get("block_index").and_then(Value::as_u64);
    let total = data.get("total_blocks").and_then(Value::as_u64);
    match (index, total) {
        (Some(index), Some(total)) if total > 0 => index == total - 1,
        _ => false,
    }
}

/// Build a [`Event::ToolCallStart`] from a `tool:pre` payload.
pub fn tool_call_from_payload(data: &Value) -> Event {
    Event::ToolCallStart {
        tool: tool_name(data).to_string(),
        params: data
            .get("tool_input")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
    }
}

/// Build a [`Event::ToolCallResult`] from a `tool:post` payload.
///
/// The result is `tool_response` (or `result`), unwrapped from an
/// `{"output": ...}` envelope when present. `success` defaults to true.
pub fn tool_result_from_payload(data: &Value) -> Event {
    let response = data
        .get("tool_response")
        .or_else(|| data.get("result"))
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    let success = response
        .get("success")
        .or_else(|| data.get("success"))
        .and_then(Value::as_bool)
        .unwrap_or(true);

    let result = match response {
        Value::Object(mut obj) if obj.contains_key("output") => {
            obj.remove("output").unwrap_or(Value::Null)
        }
        other => other,
    };

    Event::ToolCallResult {
        tool: tool_name(data).to_string(),
        result,
        success,
    }
}

fn mark_displayed(data: &Value) -> HookAction {
    match data {
        Value::Object(map) => {
            let mut modified = map.clone();
            modified.insert(
                "hook_metadata".to_string(),
                json!({"concise_displayed": true}),
            );
            HookAction::Modify(Value::Object(modified))
        }
        _ => HookAction::Continue,
    }
}

fn format_config_warning(message: &str) -> String {
    style_warn(&format!("{} config: {message}", icon::WARN))
}
