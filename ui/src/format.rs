//! Pure string helpers shared by the views.

/// Uppercase the first letter, leaving the rest untouched.
pub fn capitalize_first_letter(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Normalise a quote for display: trim, strip one layer of surrounding
/// quote marks, and wrap in typographic ones.
pub fn format_quote(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    format!("\u{201C}{}\u{201D}", strip_outer_quotes(trimmed))
}

fn strip_outer_quotes(text: &str) -> &str {
    for (open, close) in [("\"", "\""), ("\u{201C}", "\u{201D}"), ("'", "'")] {
        if text.len() > open.len() + close.len() && text.starts_with(open) && text.ends_with(close)
        {
            return &text[open.len()..text.len() - close.len()];
        }
    }
    text
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_ascii() {
        assert_eq!(capitalize_first_letter("happy"), "Happy");
        assert_eq!(capitalize_first_letter("already Upper"), "Already Upper");
    }

    #[test]
    fn test_capitalize_empty_and_unicode() {
        assert_eq!(capitalize_first_letter(""), "");
        assert_eq!(capitalize_first_letter("émile"), "Émile");
    }

    #[test]
    fn test_format_quote_wraps_plain_text() {
        assert_eq!(
            format_quote("Excitement beats discipline"),
            "\u{201C}Excitement beats discipline\u{201D}"
        );
    }

    #[test]
    fn test_format_quote_strips_existing_marks() {
        assert_eq!(
            format_quote("\"keep going\""),
            "\u{201C}keep going\u{201D}"
        );
        assert_eq!(
            format_quote("\u{201C}keep going\u{201D}"),
            "\u{201C}keep going\u{201D}"
        );
    }

    #[test]
    fn test_format_quote_trims_and_handles_empty() {
        assert_eq!(format_quote("  spaced  "), "\u{201C}spaced\u{201D}");
        assert_eq!(format_quote("   "), "");
    }
}
