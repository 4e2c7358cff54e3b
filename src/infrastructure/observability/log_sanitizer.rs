const MAX_VISIBLE_LENGTH: usize = 100;
const MAX_DUMP_LENGTH: usize = 300;

/// Sanitizes free-text user input for safe logging.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let sanitized = if total > MAX_VISIBLE_LENGTH {
        format!(
            "{}... ({} chars total)",
            take_chars(trimmed, MAX_VISIBLE_LENGTH),
            total
        )
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized)
}

/// Shortens a serialized request or response body for a DEBUG dump.
pub fn truncate_for_log(body: &str) -> String {
    let redacted = redact_sensitive_patterns(body);
    if redacted.chars().count() > MAX_DUMP_LENGTH {
        format!("{} ...", take_chars(&redacted, MAX_DUMP_LENGTH))
    } else {
        redacted
    }
}

fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("\"password\":\"", "\"password\":\"[REDACTED]"),
        ("\"access_token\":\"", "\"access_token\":\"[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        // Resume after each replacement so the inserted marker is never rescanned.
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(pattern) {
            let idx = search_from + found;
            let value_start = idx + pattern.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(idx..end, replacement);
            search_from = idx + replacement.len();
        }
    }

    result
}
