//! Multi-line blocks shown under a tool call: edit diffs and write previews.
//!
//! Both return styled lines without the caller's indent prefix.

use crate::format::{style_diff_add, style_diff_remove, style_dim, style_fail, style_ok, truncate_line};

/// Unchanged lines shown on each side of a change.
pub const DIFF_CONTEXT_LINES: usize = 2;

/// Changed lines shown per side before eliding the rest.
pub const DIFF_MAX_CHANGED_LINES: usize = 4;

/// Leading lines shown in a write preview.
pub const WRITE_PREVIEW_HEAD: usize = 7;

/// Trailing lines shown in a write preview.
pub const WRITE_PREVIEW_TAIL: usize = 2;

/// An old/new pair split around the lines both sides share.
struct Hunk<'a> {
    leading: &'a [&'a str],
    removed: &'a [&'a str],
    added: &'a [&'a str],
    trailing: &'a [&'a str],
}

impl<'a> Hunk<'a> {
    fn split(old: &'a [&'a str], new: &'a [&'a str]) -> Self {
        let min_len = old.len().min(new.len());
        let prefix = old
            .iter()
            .zip(new.iter())
            .take_while(|(a, b)| a == b)
            .count();
        // The suffix may not overlap the prefix.
        let suffix = old
            .iter()
            .rev()
            .zip(new.iter().rev())
            .take(min_len - prefix)
            .take_while(|(a, b)| a == b)
            .count();
        Self {
            leading: &old[..prefix],
            removed: &old[prefix..old.len() - suffix],
            added: &new[prefix..new.len() - suffix],
            trailing: &old[old.len() - suffix..],
        }
    }
}

/// Render a unified-diff style block for replacing `old` with `new`.
///
/// Shared leading/trailing lines are kept as dim context (at most
/// [`DIFF_CONTEXT_LINES`] each, nearest to the change). Each side shows at most
/// [`DIFF_MAX_CHANGED_LINES`] changed lines followed by `... (+N)`.
pub fn render_diff_block(old: &str, new: &str, max_width: usize) -> Vec<String> {
    let old_lines: Vec<&str> = old.split('\n').collect();
    let new_lines: Vec<&str> = new.split('\n').collect();
    let hunk = Hunk::split(&old_lines, &new_lines);

    let text_width = max_width.saturating_sub(2);
    let leading = &hunk.leading[hunk.leading.len().saturating_sub(DIFF_CONTEXT_LINES)..];
    let trailing = &hunk.trailing[..hunk.trailing.len().min(DIFF_CONTEXT_LINES)];

    let mut lines = Vec::new();
    for line in leading {
        lines.push(style_dim(&format!("  {}", truncate_line(line, text_width))));
    }

    for line in hunk.removed.iter().take(DIFF_MAX_CHANGED_LINES) {
        lines.push(style_diff_remove(&format!("- {}", truncate_line(line, text_width))));
    }
    if hunk.removed.len() > DIFF_MAX_CHANGED_LINES {
        let hidden = hunk.removed.len() - DIFF_MAX_CHANGED_LINES;
        lines.push(style_fail(&format!("  ... (+{hidden})")));
    }

    for line in hunk.added.iter().take(DIFF_MAX_CHANGED_LINES) {
        lines.push(style_diff_add(&format!("+ {}", truncate_line(line, text_width))));
    }
    if hunk.added.len() > DIFF_MAX_CHANGED_LINES {
        let hidden = hunk.added.len() - DIFF_MAX_CHANGED_LINES;
        lines.push(style_ok(&format!("  ... (+{hidden})")));
    }

    for line in trailing {
        lines.push(style_dim(&format!("  {}", truncate_line(line, text_width))));
    }
    lines
}

/// Render a preview of content about to be written: the first
/// [`WRITE_PREVIEW_HEAD`] lines, an elision marker, then the last
/// [`WRITE_PREVIEW_TAIL`] lines. Short content is shown whole.
pub fn render_write_preview(content: &str, max_width: usize) -> Vec<String> {
    let content_lines: Vec<&str> = content.split('\n').collect();
    let total = content_lines.len();
    let line = |text: &str| style_dim(&format!("  {}", truncate_line(text, max_width)));

    if total <= WRITE_PREVIEW_HEAD + WRITE_PREVIEW_TAIL {
        return content_lines.iter().map(|l| line(l)).collect();
    }

    let elided = total - WRITE_PREVIEW_HEAD - WRITE_PREVIEW_TAIL;
    let mut lines: Vec<String> = content_lines[..WRITE_PREVIEW_HEAD]
        .iter()
        .map(|l| line(l))
        .collect();
    lines.push(style_dim(&format!("  ... ({elided} lines elided) ...")));
    lines.extend(content_lines[total - WRITE_PREVIEW_TAIL..].iter().map(|l| line(l)));
    lines
}
