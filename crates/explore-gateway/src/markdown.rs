//! Heuristic markdown detection for outbound `message` events, so the
//! frontend knows whether to run a markdown renderer over the content.

const LINE_PREFIXES: &[&str] = &["## ", "- ", "* ", "> "];

/// True if `text` looks like it contains markdown formatting.
pub fn looks_like_markdown(text: &str) -> bool {
    if text.contains("```") || text.contains("**") || text.contains("__") {
        return true;
    }
    if text.contains("---") || text.contains("===") {
        return true;
    }
    if text.contains('|') && text.lines().count() > 1 {
        return true;
    }
    if has_markdown_link(text) {
        return true;
    }
    if text
        .lines()
        .any(|line| LINE_PREFIXES.iter().any(|p| line.trim_start() == *p || line.trim_start().starts_with(p)))
    {
        return true;
    }
    if text.lines().any(is_ordered_list_item) {
        return true;
    }
    false
}

fn has_markdown_link(text: &str) -> bool {
    let Some(bracket) = text.find('[') else {
        return false;
    };
    let Some(close) = text[bracket..].find(']') else {
        return false;
    };
    text[bracket + close..].starts_with("](")
}

fn is_ordered_list_item(line: &str) -> bool {
    let trimmed = line.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return false;
    }
    trimmed[digits.len()..].starts_with(". ")
}
