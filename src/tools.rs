//! Per-tool summaries for tool calls and tool results.
//!
//! Each known tool gets a rule that picks the one or two things worth seeing
//! from its parameters or its result. Unknown tools fall back to a generic
//! rule. Summaries are plain text; styling happens in [`crate::render`].

use serde_json::{Map, Value};

use crate::config::DisplayConfig;
use crate::format::{format_count, format_thousands, preview_lines, truncate};

/// Result lines shown for text output before `(+N more)`.
pub const RESULT_PREVIEW_LINES: usize = 3;

/// Parameter keys tried, in order, by the generic call rule.
const GENERIC_PARAM_KEYS: &[&str] = &[
    "file_path",
    "path",
    "pattern",
    "command",
    "query",
    "url",
    "instruction",
];

/// Tools with a dedicated rule.
pub const KNOWN_TOOLS: &[&str] = &[
    "read_file",
    "write_file",
    "edit_file",
    "grep",
    "glob",
    "bash",
    "python_check",
    "todo",
    "task",
    "web_fetch",
    "web_search",
    "recipes",
    "shadow",
    "load_skill",
];

// ============================================================================
// Summary Types
// ============================================================================

/// Outcome shown by the result icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Ok,
    Warn,
    Fail,
}

/// Extra block rendered below a call line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CallDetail {
    #[default]
    None,
    /// Old/new strings of an in-place edit.
    Diff { old: String, new: String },
    /// Content about to be written.
    WritePreview(String),
}

/// One-line summary of a tool call's parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallSummary {
    pub text: String,
    pub detail: CallDetail,
}

impl CallSummary {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detail: CallDetail::None,
        }
    }
}

/// Summary of a tool result: shown lines, omitted line count, and status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultSummary {
    pub lines: Vec<String>,
    pub hidden_lines: usize,
    pub status: Status,
}

impl ResultSummary {
    fn line(text: impl Into<String>) -> Self {
        Self {
            lines: vec![text.into()],
            ..Self::default()
        }
    }

    fn preview(text: &str, max_lines: usize, max_len: usize) -> Self {
        let (lines, hidden_lines) = preview_lines(text, max_lines, max_len);
        Self {
            lines,
            hidden_lines,
            status: Status::Ok,
        }
    }

    fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

// ============================================================================
// Value Helpers
// ============================================================================

fn str_param<'a>(params: &'a Map<String, Value>, key: &str) -> &'a str {
    params.get(key).and_then(Value::as_str).unwrap_or("")
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

fn u64_field(value: &Value, key: &str) -> u64 {
    value.get(key).and_then(Value::as_u64).unwrap_or(0)
}

/// First of `keys` holding a non-zero count.
fn first_count(value: &Value, keys: &[&str]) -> Option<u64> {
    keys.iter()
        .map(|k| u64_field(value, k))
        .find(|&n| n > 0)
}

/// A scalar as display text; strings without quotes.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The first `n` chars of `s` followed by `…`.
fn short_id(s: &str, n: usize) -> String {
    let head: String = s.chars().take(n).collect();
    format!("{head}…")
}

// ============================================================================
// Call Summaries
// ============================================================================

/// Summarize a tool call's parameters.
///
/// The text is not yet bounded by `max_param_len`; the renderer applies the
/// final cut.
pub fn summarize_call(
    tool: &str,
    params: &Map<String, Value>,
    config: &DisplayConfig,
) -> CallSummary {
    let max = config.max_param_len;
    match tool {
        "read_file" => CallSummary::text(truncate(str_param(params, "file_path"), max)),
        "write_file" => {
            let content = str_param(params, "content");
            CallSummary {
                text: truncate(str_param(params, "file_path"), max),
                detail: if content.is_empty() {
                    CallDetail::None
                } else {
                    CallDetail::WritePreview(content.to_string())
                },
            }
        }
        "edit_file" => {
            let old = str_param(params, "old_string");
            let new = str_param(params, "new_string");
            CallSummary {
                text: truncate(str_param(params, "file_path"), max),
                detail: if old.is_empty() && new.is_empty() {
                    CallDetail::None
                } else {
                    CallDetail::Diff {
                        old: old.to_string(),
                        new: new.to_string(),
                    }
                },
            }
        }
        "grep" | "glob" => {
            let pattern = str_param(params, "pattern");
            let path = str_param(params, "path");
            let text = if path.is_empty() {
                pattern.to_string()
            } else {
                format!("{pattern} in {path}")
            };
            CallSummary::text(truncate(&text, max))
        }
        "bash" => CallSummary::text(truncate(str_param(params, "command"), max)),
        "python_check" => {
            let paths: Vec<&str> = params
                .get("paths")
                .and_then(Value::as_array)
                .map(|a| a.iter().filter_map(Value::as_str).collect())
                .unwrap_or_default();
            match paths.as_slice() {
                [] => CallSummary::default(),
                [one] => CallSummary::text(truncate(one, max)),
                many => CallSummary::text(format_count(many.len() as u64, "path", None)),
            }
        }
        "todo" => CallSummary::text(str_param(params, "action")),
        "task" => {
            let agent = str_param(params, "agent");
            let instruction = str_param(params, "instruction");
            if agent.is_empty() {
                CallSummary::text(truncate(instruction, max))
            } else {
                let room = max.saturating_sub(agent.chars().count() + 2);
                CallSummary::text(format!("{agent}: {}", truncate(instruction, room)))
            }
        }
        "web_fetch" => CallSummary::text(truncate(str_param(params, "url"), max)),
        "web_search" => CallSummary::text(format!(
            "\"{}\"",
            truncate(str_param(params, "query"), max.saturating_sub(2))
        )),
        "recipes" => {
            let op = str_param(params, "operation");
            let recipe = str_param(params, "recipe_path");
            let session = str_param(params, "session_id");
            if !recipe.is_empty() {
                let room = max.saturating_sub(op.chars().count() + 1);
                CallSummary::text(format!("{op} {}", truncate(recipe, room)))
            } else if !session.is_empty() {
                CallSummary::text(format!("{op} {}", short_id(session, 12)))
            } else {
                CallSummary::text(op)
            }
        }
        "shadow" => {
            let op = str_param(params, "operation");
            let shadow_id = str_param(params, "shadow_id");
            let command = str_param(params, "command");
            if !command.is_empty() {
                let room = max.saturating_sub(op.chars().count() + 2);
                CallSummary::text(format!("{op}: {}", truncate(command, room)))
            } else if !shadow_id.is_empty() {
                CallSummary::text(format!("{op} {shadow_id}"))
            } else {
                CallSummary::text(op)
            }
        }
        "load_skill" => {
            let skill = str_param(params, "skill_name");
            let flag = |key: &str| {
                params.get(key).filter(|v| match v {
                    Value::Null | Value::Bool(false) => false,
                    Value::String(s) => !s.is_empty(),
                    _ => true,
                })
            };
            if !skill.is_empty() {
                CallSummary::text(skill)
            } else if flag("list").is_some() {
                CallSummary::text("list")
            } else if let Some(search) = flag("search") {
                CallSummary::text(format!("search \"{}\"", scalar_text(search)))
            } else if let Some(info) = flag("info") {
                CallSummary::text(format!("info \"{}\"", scalar_text(info)))
            } else {
                CallSummary::default()
            }
        }
        _ => summarize_generic_call(params, max),
    }
}

/// Generic call rule: the first well-known string parameter, otherwise all
/// parameters as `key=value` pairs.
fn summarize_generic_call(params: &Map<String, Value>, max: usize) -> CallSummary {
    if let Some(value) = GENERIC_PARAM_KEYS
        .iter()
        .find_map(|key| params.get(*key).and_then(Value::as_str))
    {
        return CallSummary::text(truncate(value, max));
    }

    let parts: Vec<String> = params
        .iter()
        .map(|(k, v)| {
            let val = match v {
                Value::String(s) => format!("\"{}\"", s.replace('\n', " ")),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => "null".to_string(),
                _ => "...".to_string(),
            };
            format!("{k}={val}")
        })
        .collect();
    CallSummary::text(truncate(&parts.join(" "), max))
}

// ============================================================================
// Result Summaries
// ============================================================================

/// Summarize a tool result.
///
/// `result` is the tool's output after unwrapping any `{"output": ...}`
/// envelope. An empty summary renders as the bare status icon.
pub fn summarize_result(tool: &str, result: &Value, config: &DisplayConfig) -> ResultSummary {
    let max = config.max_result_len;
    let is_object = result.is_object();
    match tool {
        "read_file" if is_object => first_count(result, &["lines_read", "total_lines"])
            .map(|n| ResultSummary::line(format_count(n, "line", None)))
            .unwrap_or_default(),
        "write_file" if is_object => first_count(result, &["bytes_written", "bytes"])
            .map(|n| ResultSummary::line(format!("{} bytes", format_thousands(n))))
            .unwrap_or_default(),
        "edit_file" if is_object => {
            let n = result
                .get("replacements_made")
                .and_then(Value::as_u64)
                .unwrap_or(1);
            ResultSummary::line(format_count(n, "edit", None))
        }
        "grep" if is_object => {
            let n = first_count(result, &["total_matches", "matches_count"]).unwrap_or(0);
            ResultSummary::line(format_count(n, "match", Some("matches")))
        }
        "glob" if is_object => {
            let n = result
                .get("total_files")
                .and_then(Value::as_u64)
                .or_else(|| {
                    result
                        .get("files")
                        .and_then(Value::as_array)
                        .map(|f| f.len() as u64)
                })
                .unwrap_or(0);
            ResultSummary::line(format_count(n, "file", None))
        }
        "bash" if is_object => summarize_bash(result, max),
        "python_check" if is_object => {
            let files = u64_field(result, "files_checked");
            let errors = u64_field(result, "error_count");
            let warnings = u64_field(result, "warning_count");
            if errors > 0 {
                ResultSummary::line(format!("{errors} errors, {warnings} warnings ({files} files)"))
                    .with_status(Status::Fail)
            } else if warnings > 0 {
                ResultSummary::line(format!("{warnings} warnings ({files} files)"))
                    .with_status(Status::Warn)
            } else {
                ResultSummary::line(format!("clean ({files} files)"))
            }
        }
        "todo" if is_object => summarize_todo(result),
        "task" => {
            let response = str_field(result, "response");
            if response.is_empty() {
                ResultSummary::line("done")
            } else {
                ResultSummary::preview(response, 1, max)
            }
        }
        "web_fetch" if is_object => {
            let status = result
                .get("status_code")
                .filter(|v| !v.is_null())
                .or_else(|| result.get("status"))
                .filter(|v| !v.is_null());
            match status {
                Some(status) => {
                    let chars = str_field(result, "content").chars().count() as u64;
                    ResultSummary::line(format!(
                        "[{}] {} chars",
                        scalar_text(status),
                        format_thousands(chars)
                    ))
                }
                None => ResultSummary::default(),
            }
        }
        "web_search" if is_object => {
            let n = result
                .get("results")
                .and_then(Value::as_array)
                .map_or(0, |r| r.len() as u64);
            ResultSummary::line(format_count(n, "result", None))
        }
        "recipes" if is_object => {
            let status = str_field(result, "status");
            let session = str_field(result, "session_id");
            match (status.is_empty(), session.is_empty()) {
                (false, false) => ResultSummary::line(format!("{status} ({})", short_id(session, 12))),
                (false, true) => ResultSummary::line(status),
                _ => ResultSummary::default(),
            }
        }
        "shadow" if is_object => summarize_shadow(result, max),
        "load_skill" => match result.get("skills").and_then(Value::as_array) {
            Some(skills) => ResultSummary::line(format_count(skills.len() as u64, "skill", None)),
            None => ResultSummary::line("loaded"),
        },
        _ if KNOWN_TOOLS.contains(&tool) => ResultSummary::default(),
        _ => summarize_generic_result(result, max),
    }
}

fn summarize_bash(result: &Value, max: usize) -> ResultSummary {
    let rc = result.get("returncode").and_then(Value::as_i64).unwrap_or(0);
    let stdout = str_field(result, "stdout");
    let stderr = str_field(result, "stderr");

    if rc != 0 {
        let err = [stderr, stdout]
            .into_iter()
            .map(str::trim)
            .find(|s| !s.is_empty())
            .unwrap_or("failed");
        let (first, _) = preview_lines(err, 1, max.saturating_sub(10));
        let first = first.into_iter().next().unwrap_or_default();
        return ResultSummary::line(format!("exit {rc}: {first}")).with_status(Status::Fail);
    }

    if stdout.trim().is_empty() {
        return ResultSummary::line("(no output)");
    }
    ResultSummary::preview(stdout, RESULT_PREVIEW_LINES, max)
}

fn summarize_todo(result: &Value) -> ResultSummary {
    let count = u64_field(result, "count");
    let completed = u64_field(result, "completed");
    let in_progress = u64_field(result, "in_progress");
    let pending = u64_field(result, "pending");

    if count == completed {
        return ResultSummary::line(format!("{count}/{count} done"));
    }

    let mut parts = Vec::new();
    if in_progress > 0 {
        parts.push(format!("{in_progress} active"));
    }
    if pending > 0 {
        parts.push(format!("{pending} pending"));
    }
    if completed > 0 {
        parts.push(format!("{completed} done"));
    }
    ResultSummary::line(format!("{count} ({})", parts.join(", ")))
}

fn summarize_shadow(result: &Value, max: usize) -> ResultSummary {
    let stdout = str_field(result, "stdout");
    match result.get("exit_code").and_then(Value::as_i64) {
        Some(code) if code != 0 => {
            let stderr = str_field(result, "stderr");
            let source = if stderr.is_empty() { stdout } else { stderr };
            let (first, _) = preview_lines(source, 1, 40);
            let first = first.into_iter().next().unwrap_or_default();
            ResultSummary::line(format!("exit {code}: {first}")).with_status(Status::Fail)
        }
        Some(_) if !stdout.trim().is_empty() => ResultSummary::preview(stdout, 1, max),
        Some(_) => ResultSummary::line("(no output)"),
        None => {
            let shadow_id = str_field(result, "shadow_id");
            if shadow_id.is_empty() {
                ResultSummary::default()
            } else {
                ResultSummary::line(shadow_id)
            }
        }
    }
}

/// Generic result rule: text is previewed; objects report an `error` as a
/// failure or a `count` as an item total.
fn summarize_generic_result(result: &Value, max: usize) -> ResultSummary {
    match result {
        Value::String(text) => ResultSummary::preview(text, RESULT_PREVIEW_LINES, max),
        Value::Object(obj) => {
            if let Some(error) = obj.get("error") {
                ResultSummary::line(truncate(&scalar_text(error), max)).with_status(Status::Fail)
            } else if let Some(count) = obj.get("count") {
                ResultSummary::line(format!("{} items", scalar_text(count)))
            } else {
                ResultSummary::default()
            }
        }
        _ => ResultSummary::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn call(tool: &str, value: Value) -> CallSummary {
        summarize_call(tool, &params(value), &DisplayConfig::default())
    }

    fn result(tool: &str, value: Value) -> ResultSummary {
        summarize_result(tool, &value, &DisplayConfig::default())
    }

    // =========================================
    // Call summary tests
    // =========================================

    #[test]
    fn test_call_file_ops() {
        assert_eq!(call("read_file", json!({"file_path": "src/lib.rs"})).text, "src/lib.rs");

        let write = call("write_file", json!({"file_path": "a.txt", "content": "hi"}));
        assert_eq!(write.text, "a.txt");
        assert_eq!(write.detail, CallDetail::WritePreview("hi".into()));

        let empty_write = call("write_file", json!({"file_path": "a.txt"}));
        assert_eq!(empty_write.detail, CallDetail::None);
    }

    #[test]
    fn test_call_edit_file_carries_diff() {
        let edit = call(
            "edit_file",
            json!({"file_path": "a.rs", "old_string": "x", "new_string": "y"}),
        );
        assert_eq!(edit.text, "a.rs");
        assert_eq!(
            edit.detail,
            CallDetail::Diff {
                old: "x".into(),
                new: "y".into()
            }
        );
        assert_eq!(call("edit_file", json!({"file_path": "a.rs"})).detail, CallDetail::None);
    }

    #[test]
    fn test_call_search() {
        assert_eq!(call("grep", json!({"pattern": "TODO"})).text, "TODO");
        assert_eq!(
            call("grep", json!({"pattern": "TODO", "path": "src/"})).text,
            "TODO in src/"
        );
        assert_eq!(call("glob", json!({"pattern": "**/*.rs"})).text, "**/*.rs");
    }

    #[test]
    fn test_call_python_check() {
        assert_eq!(call("python_check", json!({"paths": ["a.py"]})).text, "a.py");
        assert_eq!(
            call("python_check", json!({"paths": ["a.py", "b.py"]})).text,
            "2 paths"
        );
        assert_eq!(call("python_check", json!({})).text, "");
    }

    #[test]
    fn test_call_task_budgets_instruction() {
        let summary = call(
            "task",
            json!({"agent": "explorer", "instruction": "x".repeat(100)}),
        );
        assert!(summary.text.starts_with("explorer: "));
        assert_eq!(summary.text.chars().count(), 50);
        assert_eq!(call("task", json!({"instruction": "survey"})).text, "survey");
    }

    #[test]
    fn test_call_web() {
        assert_eq!(
            call("web_fetch", json!({"url": "https://example.com"})).text,
            "https://example.com"
        );
        assert_eq!(
            call("web_search", json!({"query": "rust enums"})).text,
            "\"rust enums\""
        );
        let long = call("web_search", json!({"query": "q".repeat(80)}));
        assert_eq!(long.text.chars().count(), 50);
    }

    #[test]
    fn test_call_recipes_and_shadow() {
        assert_eq!(
            call("recipes", json!({"operation": "execute", "recipe_path": "r.yaml"})).text,
            "execute r.yaml"
        );
        assert_eq!(
            call("recipes", json!({"operation": "resume", "session_id": "0123456789abcdef"})).text,
            "resume 0123456789ab…"
        );
        assert_eq!(call("recipes", json!({"operation": "list"})).text, "list");

        assert_eq!(
            call("shadow", json!({"operation": "exec", "command": "make"})).text,
            "exec: make"
        );
        assert_eq!(
            call("shadow", json!({"operation": "destroy", "shadow_id": "sh-1"})).text,
            "destroy sh-1"
        );
    }

    #[test]
    fn test_call_load_skill() {
        assert_eq!(call("load_skill", json!({"skill_name": "pdf"})).text, "pdf");
        assert_eq!(call("load_skill", json!({"list": true})).text, "list");
        assert_eq!(
            call("load_skill", json!({"search": "excel"})).text,
            "search \"excel\""
        );
        assert_eq!(call("load_skill", json!({"info": "pdf"})).text, "info \"pdf\"");
        assert_eq!(call("load_skill", json!({"list": false})).text, "");
    }

    #[test]
    fn test_call_generic_prefers_known_keys() {
        assert_eq!(
            call("custom", json!({"limit": 3, "query": "needle"})).text,
            "needle"
        );
    }

    #[test]
    fn test_call_generic_joins_params() {
        // serde_json::Map is sorted by key
        assert_eq!(
            call("custom", json!({"b": true, "a": 1, "c": "x\ny", "d": [1]})).text,
            "a=1 b=true c=\"x y\" d=..."
        );
        assert_eq!(call("custom", json!({})).text, "");
    }

    // =========================================
    // Result summary tests
    // =========================================

    #[test]
    fn test_result_file_ops() {
        assert_eq!(result("read_file", json!({"lines_read": 42})).lines, vec!["42 lines"]);
        assert_eq!(result("read_file", json!({"total_lines": 1})).lines, vec!["1 line"]);
        assert!(result("read_file", json!("raw text")).lines.is_empty());
        assert_eq!(
            result("write_file", json!({"bytes_written": 12345})).lines,
            vec!["12,345 bytes"]
        );
        assert_eq!(result("edit_file", json!({})).lines, vec!["1 edit"]);
        assert_eq!(
            result("edit_file", json!({"replacements_made": 3})).lines,
            vec!["3 edits"]
        );
    }

    #[test]
    fn test_result_search() {
        assert_eq!(result("grep", json!({"total_matches": 7})).lines, vec!["7 matches"]);
        assert_eq!(result("grep", json!({})).lines, vec!["0 matches"]);
        assert_eq!(
            result("glob", json!({"files": ["a", "b", "c"]})).lines,
            vec!["3 files"]
        );
        assert_eq!(result("glob", json!({"total_files": 1})).lines, vec!["1 file"]);
    }

    #[test]
    fn test_result_bash_success() {
        let summary = result("bash", json!({"returncode": 0, "stdout": "a\nb\nc\nd\ne\n"}));
        assert_eq!(summary.lines, vec!["a", "b", "c"]);
        assert_eq!(summary.hidden_lines, 2);
        assert_eq!(summary.status, Status::Ok);

        assert_eq!(result("bash", json!({"stdout": "  "})).lines, vec!["(no output)"]);
    }

    #[test]
    fn test_result_bash_failure() {
        let summary = result(
            "bash",
            json!({"returncode": 2, "stdout": "", "stderr": "ls: cannot access\nmore"}),
        );
        assert_eq!(summary.lines, vec!["exit 2: ls: cannot access"]);
        assert_eq!(summary.status, Status::Fail);

        let silent = result("bash", json!({"returncode": 1}));
        assert_eq!(silent.lines, vec!["exit 1: failed"]);
    }

    #[test]
    fn test_result_python_check() {
        let fail = result(
            "python_check",
            json!({"files_checked": 3, "error_count": 2, "warning_count": 1}),
        );
        assert_eq!(fail.lines, vec!["2 errors, 1 warnings (3 files)"]);
        assert_eq!(fail.status, Status::Fail);

        let warn = result("python_check", json!({"files_checked": 3, "warning_count": 4}));
        assert_eq!(warn.status, Status::Warn);

        let clean = result("python_check", json!({"files_checked": 3}));
        assert_eq!(clean.lines, vec!["clean (3 files)"]);
    }

    #[test]
    fn test_result_todo() {
        assert_eq!(
            result("todo", json!({"count": 3, "completed": 3})).lines,
            vec!["3/3 done"]
        );
        assert_eq!(
            result(
                "todo",
                json!({"count": 5, "completed": 1, "in_progress": 1, "pending": 3})
            )
            .lines,
            vec!["5 (1 active, 3 pending, 1 done)"]
        );
    }

    #[test]
    fn test_result_task() {
        let summary = result("task", json!({"response": "Found it\nline two\nline three"}));
        assert_eq!(summary.lines, vec!["Found it"]);
        assert_eq!(summary.hidden_lines, 2);
        assert_eq!(result("task", json!("whatever")).lines, vec!["done"]);
    }

    #[test]
    fn test_result_web() {
        assert_eq!(
            result("web_fetch", json!({"status_code": 200, "content": "x".repeat(1500)})).lines,
            vec!["[200] 1,500 chars"]
        );
        assert!(result("web_fetch", json!({"content": "x"})).lines.is_empty());
        assert_eq!(
            result("web_search", json!({"results": [1, 2]})).lines,
            vec!["2 results"]
        );
    }

    #[test]
    fn test_result_recipes_and_shadow() {
        assert_eq!(
            result("recipes", json!({"status": "running", "session_id": "0123456789abcdef"})).lines,
            vec!["running (0123456789ab…)"]
        );
        assert_eq!(result("recipes", json!({"status": "ok"})).lines, vec!["ok"]);

        let failed = result("shadow", json!({"exit_code": 3, "stderr": "boom"}));
        assert_eq!(failed.lines, vec!["exit 3: boom"]);
        assert_eq!(failed.status, Status::Fail);
        assert_eq!(
            result("shadow", json!({"exit_code": 0, "stdout": ""})).lines,
            vec!["(no output)"]
        );
        assert_eq!(result("shadow", json!({"shadow_id": "sh-9"})).lines, vec!["sh-9"]);
    }

    #[test]
    fn test_result_load_skill() {
        assert_eq!(
            result("load_skill", json!({"skills": ["a", "b"]})).lines,
            vec!["2 skills"]
        );
        assert_eq!(result("load_skill", json!({})).lines, vec!["loaded"]);
    }

    #[test]
    fn test_result_generic() {
        let text = result("custom", json!("one\ntwo\nthree\nfour"));
        assert_eq!(text.lines, vec!["one", "two", "three"]);
        assert_eq!(text.hidden_lines, 1);

        let error = result("custom", json!({"error": "not found"}));
        assert_eq!(error.lines, vec!["not found"]);
        assert_eq!(error.status, Status::Fail);

        assert_eq!(result("custom", json!({"count": 4})).lines, vec!["4 items"]);
        assert!(result("custom", json!({"other": 1})).lines.is_empty());
        assert!(result("custom", json!(42)).lines.is_empty());
    }
}
