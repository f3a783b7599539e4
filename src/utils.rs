// Utility functions
use chrono::{Datelike, Local, NaiveDate, Weekday};
use regex::Regex;
use std::sync::LazyLock;

// Paragraph and line-break tags only; anything else is abstract text.
static BREAK_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?p\s*>|<br\s*/?>").unwrap());

/// Source of "today" for the run-date gate.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Returns the weekday if no run should happen today.
pub fn skip_day(clock: &impl Clock) -> Option<Weekday> {
    match clock.today().weekday() {
        day @ (Weekday::Sat | Weekday::Sun) => Some(day),
        _ => None,
    }
}

/// Removes paragraph and line-break tags from an abstract and collapses all
/// whitespace runs, line breaks included, into single spaces. Other `<`/`>`
/// characters are kept verbatim.
pub fn clean_summary(summary: &str) -> String {
    let text = BREAK_TAGS.replace_all(summary, " ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Escapes the characters Telegram's HTML parse mode treats as markup.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
