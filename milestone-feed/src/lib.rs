//! Events document (`{"events": [...]}`) to `MilestoneEvent` converter.

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use milestone_core::{Category, MilestoneError, MilestoneEvent};
use serde::Deserialize;
use serde_json::Value;

/// Field holding the event collection in the source document.
pub const EVENTS_FIELD: &str = "events";

/// Parse the events document from a JSON string.
pub fn parse_events_str(document: &str) -> Result<Vec<MilestoneEvent>, MilestoneError> {
    let value: Value =
        serde_json::from_str(document).map_err(|err| MilestoneError::Parse(err.to_string()))?;
    parse_events_value(&value)
}

/// Parse the events document from a `serde_json::Value`.
///
/// Every entry is validated; the first malformed entry aborts the whole parse
/// so bad data is surfaced instead of silently dropped.
pub fn parse_events_value(document: &Value) -> Result<Vec<MilestoneEvent>, MilestoneError> {
    let entries = document
        .get(EVENTS_FIELD)
        .and_then(Value::as_array)
        .ok_or(MilestoneError::MissingData)?;

    let mut seen = HashSet::with_capacity(entries.len());
    let mut events = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        let raw = RawEvent::deserialize(entry)
            .map_err(|err| MilestoneError::Parse(format!("events[{index}]: {err}")))?;
        let event = raw.validate()?;

        if !seen.insert(event.id.clone()) {
            return Err(MilestoneError::DuplicateId(event.id));
        }
        events.push(event);
    }

    Ok(events)
}

/// Entry as it appears on the wire; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawEvent {
    id: String,
    name: String,
    date: String,
    description: String,
    category: String,
}

impl RawEvent {
    fn validate(self) -> Result<MilestoneEvent, MilestoneError> {
        let date = parse_event_date(&self.date).ok_or_else(|| MilestoneError::InvalidDate {
            id: self.id.clone(),
            value: self.date.clone(),
        })?;

        let category =
            Category::from_token(&self.category).ok_or_else(|| MilestoneError::UnknownCategory {
                id: Some(self.id.clone()),
                value: self.category.clone(),
            })?;

        Ok(MilestoneEvent {
            id: self.id,
            name: self.name,
            date,
            description: self.description,
            category,
        })
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (reduced to its UTC date).
pub fn parse_event_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    parse_date(value).or_else(|| parse_datetime(value).map(|dt| dt.date_naive()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_are_reduced_to_utc_dates() {
        assert_eq!(
            parse_event_date("2024-09-12T23:30:00-02:00"),
            NaiveDate::from_ymd_opt(2024, 9, 13)
        );
        assert_eq!(
            parse_event_date(" 2022-11-30 "),
            NaiveDate::from_ymd_opt(2022, 11, 30)
        );
        assert_eq!(parse_event_date("30/11/2022"), None);
        assert_eq!(parse_event_date("2023-02-30"), None);
    }
}
