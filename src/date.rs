//! Date interpretation for card subtitles.
//!
//! Subtitles are free text (`"Shot on 2024-03-09 in Kyoto"`, `"March 9, 2024"`,
//! `"gelatin silver print"`). This module pulls an optional calendar date out
//! of that text for the date sort. It is a pure function and never fails:
//! unparseable input means "no date", which the orderer handles, not an error.
//!
//! Four formats are recognized, tried in fixed priority order:
//!
//! 1. ISO `YYYY-MM-DD`
//! 2. Month-name `Month D, YYYY` (full or abbreviated month)
//! 3. Day-first `D Month YYYY`
//! 4. Numeric `MM/DD/YYYY`
//!
//! The first pattern that matches *syntactically* wins. If its calendar parse
//! then fails (say `2024-13-40`), the result is no date — later patterns are
//! not tried, even if one of them would have succeeded. Keep it that way: the
//! upstream gallery generator relies on this exact rule.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static ISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("invalid ISO date regex"));

static MONTH_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z]{3,9}\s+\d{1,2},\s*\d{4}").expect("invalid month-first regex")
});

static DAY_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,2}\s+[A-Za-z]{3,9}\s+\d{4}").expect("invalid day-first regex")
});

static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}/\d{1,2}/\d{4}").expect("invalid numeric date regex"));

/// Interpret a date from subtitle text. `None` means no usable date.
pub fn parse_card_date(sub: &str) -> Option<NaiveDate> {
    if sub.is_empty() {
        return None;
    }
    let norm = normalize_dashes(sub);
    if let Some(m) = ISO_RE.find(&norm) {
        return NaiveDate::parse_from_str(m.as_str(), "%Y-%m-%d").ok();
    }
    if let Some(m) = MONTH_FIRST_RE.find(&norm) {
        // Chrono's %B accepts abbreviated month names too, so "Mar 9, 2024"
        // parses here without a second format string.
        return NaiveDate::parse_from_str(m.as_str(), "%B %d, %Y").ok();
    }
    if let Some(m) = DAY_FIRST_RE.find(&norm) {
        return NaiveDate::parse_from_str(m.as_str(), "%d %B %Y").ok();
    }
    if let Some(m) = NUMERIC_RE.find(&norm) {
        return NaiveDate::parse_from_str(m.as_str(), "%m/%d/%Y").ok();
    }
    None
}

/// Replace Unicode hyphen/dash variants (U+2010..U+2014) with ASCII `-` so
/// dates typed with typographic dashes still match the ISO pattern.
fn normalize_dashes(text: &str) -> String {
    text.replace(['\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}'], "-")
}
