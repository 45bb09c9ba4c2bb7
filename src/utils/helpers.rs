//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Split text into chunks of at most `max_chars` characters, breaking at
/// newlines where possible. Whitespace-only chunks are dropped since
/// Telegram rejects blank messages.
pub fn split_message(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.chars().count() > max_chars {
        let limit = rest
            .char_indices()
            .nth(max_chars)
            .map(|(index, _)| index)
            .unwrap_or(rest.len());
        let split_at = rest[..limit].rfind('\n').filter(|&index| index > 0).unwrap_or(limit);
        let chunk = &rest[..split_at];
        if !chunk.trim().is_empty() {
            chunks.push(chunk.to_string());
        }
        rest = rest[split_at..].trim_start_matches('\n');
    }

    if !rest.trim().is_empty() {
        chunks.push(rest.to_string());
    }

    chunks
}

/// Split callback data of the form `action:argument`
pub fn parse_callback_data(data: &str) -> (&str, Option<&str>) {
    match data.split_once(':') {
        Some((action, argument)) => (action, Some(argument)),
        None => (data, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Hello", 10), "Hello");
        assert_eq!(truncate_text("Hello, World!", 10), "Hello, ...");
        assert_eq!(truncate_text("Привет, мир!", 8), "Приве...");
    }

    #[test]
    fn test_split_message() {
        assert_eq!(split_message("Hello!", 4096), vec!["Hello!"]);
        assert_eq!(split_message("aaaa\nbbbb", 6), vec!["aaaa", "bbbb"]);
        assert_eq!(split_message("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(split_message("abc\n", 3), vec!["abc"]);
    }

    #[test]
    fn test_split_message_skips_blank_chunks() {
        let text = format!("a\n{}\nb", " ".repeat(5));
        let chunks = split_message(&text, 4);

        assert_eq!(chunks, vec!["a".to_string(), " \nb".to_string()]);
        assert!(chunks.iter().all(|chunk| !chunk.trim().is_empty()));
        assert!(split_message("  \n\n  ", 4096).is_empty());
    }

    #[test]
    fn test_parse_callback_data() {
        assert_eq!(parse_callback_data("scenario:job"), ("scenario", Some("job")));
        assert_eq!(parse_callback_data("menu:settings"), ("menu", Some("settings")));
        assert_eq!(parse_callback_data("bogus"), ("bogus", None));
    }
}
