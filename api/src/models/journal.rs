//! # Journal model and latest-entry selection
//!
//! A [`Journal`] is a user's dated entry aggregate. Besides the entry ids and
//! the date, the backend attaches a set of AI-derived fields (summary, mood,
//! quote, haiku, ...), all optional and all read-only on the client.
//!
//! The dashboard never shows more than one journal: the *latest* one, defined
//! as the journal with the maximum date among the [`RECENT_WINDOW`] most
//! recent journals the backend returned. The selection helpers here are pure
//! so that property can be tested without a network:
//!
//! - [`parse_journal_date`] — lenient date parsing (RFC 3339, then a naive
//!   datetime, then a bare date). Unparseable dates order last.
//! - [`recent_journals`] — descending sort + truncation to the window.
//! - [`latest_journal`] — head of the recent window, `None` when the user
//!   has no journals.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// How many of the most recent journals the dashboard considers.
pub const RECENT_WINDOW: usize = 7;

/// A user's dated entry aggregate with its AI-derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journal {
    pub user: String,
    #[serde(default)]
    pub entries: Vec<String>,
    /// Backend-formatted date string; see [`parse_journal_date`].
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_insight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub haiku: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Parse a backend date string, trying the formats the backend has been
/// observed to emit, from most to least specific.
pub fn parse_journal_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Sort journals newest-first and keep the [`RECENT_WINDOW`] most recent.
///
/// Journals whose date does not parse sort after every dated journal.
pub fn recent_journals(mut journals: Vec<Journal>) -> Vec<Journal> {
    journals.sort_by(|a, b| parse_journal_date(&b.date).cmp(&parse_journal_date(&a.date)));
    journals.truncate(RECENT_WINDOW);
    journals
}

/// The journal the dashboard shows: maximum date within the recent window.
pub fn latest_journal(journals: Vec<Journal>) -> Option<Journal> {
    recent_journals(journals).into_iter().next()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn journal(date: &str) -> Journal {
        Journal {
            user: "u1".to_string(),
            entries: Vec::new(),
            date: date.to_string(),
            key_insight: None,
            quote: None,
            ai_summary: None,
            color: None,
            conversation_summary: None,
            emoji: None,
            haiku: None,
            highlight: None,
            mood: None,
            sentiment: None,
            title: None,
        }
    }

    #[test]
    fn test_parse_bare_date() {
        let parsed = parse_journal_date("2024-03-10").unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-03-10T00:00:00+00:00");
    }

    #[test]
    fn test_parse_rfc3339() {
        assert!(parse_journal_date("2024-03-10T08:30:00Z").is_some());
        assert!(parse_journal_date("2024-03-10T08:30:00+02:00").is_some());
    }

    #[test]
    fn test_parse_naive_datetime() {
        assert!(parse_journal_date("2024-03-10T08:30:00").is_some());
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_journal_date("yesterday"), None);
        assert_eq!(parse_journal_date(""), None);
    }

    #[test]
    fn test_latest_picks_maximum_date() {
        let journals = vec![
            journal("2024-01-01"),
            journal("2024-03-10"),
            journal("2024-02-05"),
        ];
        let latest = latest_journal(journals).unwrap();
        assert_eq!(latest.date, "2024-03-10");
    }

    #[test]
    fn test_latest_of_empty_is_none() {
        assert_eq!(latest_journal(Vec::new()), None);
    }

    #[test]
    fn test_recent_window_truncates_to_seven() {
        let journals: Vec<Journal> = (1..=10)
            .map(|day| journal(&format!("2024-05-{day:02}")))
            .collect();
        let recent = recent_journals(journals);
        assert_eq!(recent.len(), RECENT_WINDOW);
        assert_eq!(recent[0].date, "2024-05-10");
        assert_eq!(recent[6].date, "2024-05-04");
    }

    #[test]
    fn test_latest_dominates_window() {
        let journals: Vec<Journal> = (1..=9)
            .map(|day| journal(&format!("2024-05-{day:02}")))
            .collect();
        let latest = latest_journal(journals.clone()).unwrap();
        let latest_date = parse_journal_date(&latest.date).unwrap();
        for other in recent_journals(journals) {
            assert!(latest_date >= parse_journal_date(&other.date).unwrap());
        }
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let journals = vec![journal("not-a-date"), journal("2024-02-05")];
        let recent = recent_journals(journals);
        assert_eq!(recent[0].date, "2024-02-05");
        assert_eq!(recent[1].date, "not-a-date");
    }

    #[test]
    fn test_journal_wire_format() {
        let raw = r#"{
            "user": "u1",
            "entries": ["e1", "e2"],
            "date": "2024-03-10",
            "keyInsight": "walks help",
            "aiSummary": "a calm day",
            "mood": "happy"
        }"#;
        let parsed: Journal = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.key_insight.as_deref(), Some("walks help"));
        assert_eq!(parsed.ai_summary.as_deref(), Some("a calm day"));
        assert_eq!(parsed.quote, None);

        let back = serde_json::to_value(&parsed).unwrap();
        assert_eq!(back["keyInsight"], "walks help");
        assert!(back.get("haiku").is_none());
    }
}
