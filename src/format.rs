//! Pure formatting primitives for display output.
//!
//! Everything that touches color lives in the `style_*` functions here, and
//! everything that touches length lives in the text helpers. Renderers
//! truncate first and style last, so truncation is testable without ANSI
//! codes in the way.
//!
//! # Categories
//!
//! ## Text Helpers
//! - [`truncate`] - Single-line truncation with a `…` marker
//! - [`truncate_line`] - Same, keeping leading indentation
//! - [`preview_lines`] - First N lines of a block plus the omitted count
//! - [`format_count`] - `1 edit` / `3 edits`
//! - [`format_compact_number`] - `646`, `54k`, `1.2M`
//! - [`format_thousands`] - `12,345`
//!
//! ## Styles
//! - [`style_tool`], [`style_ok`], [`style_fail`], [`style_warn`]
//! - [`style_dim`], [`style_diff_add`], [`style_diff_remove`]

use colored::Colorize;

// ============================================================================
// Constants
// ============================================================================

/// Marker appended to truncated text.
pub const TRUNCATION_MARKER: char = '…';

/// Status icons.
pub mod icon {
    pub const TOOL: &str = "→";
    pub const OK: &str = "✓";
    pub const FAIL: &str = "✗";
    pub const WARN: &str = "!";
    pub const FILE: &str = "◇";
    pub const THINK: &str = "💭";
}

// ============================================================================
// Text Helpers
// ============================================================================

/// Collapse `text` onto one line and cut it to at most `max_len` chars.
///
/// Newlines become spaces and surrounding whitespace is trimmed. When the
/// result is longer than `max_len`, the first `max_len - 1` chars are kept and
/// [`TRUNCATION_MARKER`] is appended, so the output never exceeds `max_len`.
///
/// # Example
///
/// ```
/// use concise_display::format::truncate;
///
/// assert_eq!(truncate("hello world", 6), "hello…");
/// assert_eq!(truncate("short", 10), "short");
/// ```
pub fn truncate(text: &str, max_len: usize) -> String {
    cut(text.replace('\n', " ").trim(), max_len)
}

/// Like [`truncate`], but keeps leading indentation. Used for code lines.
pub fn truncate_line(text: &str, max_len: usize) -> String {
    cut(text.replace('\n', " ").trim_end(), max_len)
}

fn cut(flat: &str, max_len: usize) -> String {
    if flat.chars().count() <= max_len {
        return flat.to_string();
    }
    if max_len == 0 {
        return String::new();
    }
    let mut out: String = flat.chars().take(max_len - 1).collect();
    out.push(TRUNCATION_MARKER);
    out
}

/// Take up to `max_lines` lines of `text`, each truncated to `max_len`.
///
/// Returns the kept lines and the number of lines left out. Leading and
/// trailing whitespace of the whole block is ignored.
pub fn preview_lines(text: &str, max_lines: usize, max_len: usize) -> (Vec<String>, usize) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return (Vec::new(), 0);
    }
    let lines: Vec<&str> = trimmed.split('\n').collect();
    let shown = lines
        .iter()
        .take(max_lines)
        .map(|line| truncate(line, max_len))
        .collect();
    (shown, lines.len().saturating_sub(max_lines))
}

/// Format a count with a pluralized noun.
pub fn format_count(n: u64, singular: &str, plural: Option<&str>) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        match plural {
            Some(p) => format!("{n} {p}"),
            None => format!("{n} {singular}s"),
        }
    }
}

/// Format a number compactly: `646`, `54k`, `1.2M`.
///
/// Thousands round half-up to a whole `k`; millions keep one decimal, with a
/// trailing `.0` dropped.
///
/// # Example
///
/// ```
/// use concise_display::format::format_compact_number;
///
/// assert_eq!(format_compact_number(646), "646");
/// assert_eq!(format_compact_number(54_000), "54k");
/// assert_eq!(format_compact_number(1_250_000), "1.3M");
/// ```
pub fn format_compact_number(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    let thousands = n / 1_000 + u64::from(n % 1_000 >= 500);
    if thousands < 1_000 {
        return format!("{thousands}k");
    }
    let tenths = n / 100_000 + u64::from(n % 100_000 >= 50_000);
    let (whole, frac) = (tenths / 10, tenths % 10);
    if frac == 0 {
        format!("{whole}M")
    } else {
        format!("{whole}.{frac}M")
    }
}

/// Format a number with `,` thousands separators.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Styles
// ============================================================================

/// Tool and thinking markers (blue).
pub fn style_tool(text: &str) -> String {
    text.blue().to_string()
}

/// Success marker (green).
pub fn style_ok(text: &str) -> String {
    text.green().to_string()
}

/// Failure marker and failure text (red).
pub fn style_fail(text: &str) -> String {
    text.red().to_string()
}

/// Warning marker and warning text (yellow).
pub fn style_warn(text: &str) -> String {
    text.yellow().to_string()
}

/// Secondary annotations: params, summaries, `(+N more)`.
pub fn style_dim(text: &str) -> String {
    text.dimmed().to_string()
}

/// Added diff line (bold green).
pub fn style_diff_add(text: &str) -> String {
    text.green().bold().to_string()
}

/// Removed diff line (bold red).
pub fn style_diff_remove(text: &str) -> String {
    text.red().bold().to_string()
}

/// Strip ANSI escape codes so unit tests can compare plain text regardless of
/// the global color override.
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                for next in chars.by_ref() {
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

// ============================================================================
// Tests
// ============================================================================
