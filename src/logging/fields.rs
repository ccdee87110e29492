//! Field extraction helpers for structured logging

/// Maximum characters of task text included in log previews
pub const TASK_PREVIEW_CHARS: usize = 100;

/// Truncate task text for a log preview (privacy-safe)
///
/// Returns None if task previews are disabled or the task is blank.
/// Truncation counts characters, not bytes, so Cyrillic text is never split
/// mid-codepoint.
///
/// # Examples
///
/// ```
/// use delegator::logging::task_preview;
///
/// assert_eq!(task_preview("исправить баг", true).as_deref(), Some("исправить баг"));
/// assert!(task_preview("исправить баг", false).is_none());
/// ```
pub fn task_preview(task: &str, enabled: bool) -> Option<String> {
    if !enabled {
        return None;
    }

    let task = task.trim();
    if task.is_empty() {
        return None;
    }

    Some(truncate_chars(task, TASK_PREVIEW_CHARS))
}

/// Render a chain as "a → b → c" for log fields
pub fn format_chain(chain: &[String]) -> String {
    chain.join(" → ")
}

fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}
