// Telegram HTML message bodies.
use crate::model::Article;
use crate::utils::{clean_summary, escape_html};

/// Telegram rejects messages longer than this many characters.
pub const MAX_MESSAGE_CHARS: usize = 4096;

pub const NOTHING_FOUND: &str =
    "I scraped the arXiv RSS but found nothing of interest for you. Sorry.";

pub fn found_summary(count: usize) -> String {
    format!(
        "You are going to be happy. I found {} article(s) of potential interest.",
        count
    )
}

/// Longest escaped title, author or link kept in the header.
pub const MAX_FIELD_CHARS: usize = 512;

pub fn article_message(article: &Article) -> String {
    let header = format!(
        "<strong>Title</strong>: {}\n<strong>Authors</strong>: {}\n<strong>Link</strong>: {}\n<strong>Abstract:</strong>\n",
        escape_within(&article.title, MAX_FIELD_CHARS),
        escape_within(article.first_author().unwrap_or("Unknown"), MAX_FIELD_CHARS),
        escape_within(&article.id, MAX_FIELD_CHARS),
    );

    let budget = MAX_MESSAGE_CHARS.saturating_sub(header.chars().count());
    header + &escape_within(&clean_summary(&article.summary), budget)
}

/// HTML-escapes `text`, cutting it with a trailing `…` so the escaped result
/// has at most `max_chars` characters. Entities are never cut in half.
fn escape_within(text: &str, max_chars: usize) -> String {
    let escaped = escape_html(text);
    if escaped.chars().count() <= max_chars {
        return escaped;
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    let mut buf = [0u8; 4];
    for c in text.chars() {
        let piece = escape_html(c.encode_utf8(&mut buf));
        let width = piece.chars().count();
        // Keep one char for the ellipsis.
        if used + width + 1 > max_chars {
            break;
        }
        out.push_str(&piece);
        used += width;
    }
    out.push('…');
    out
}
