//! The record produced when a data entry form is submitted.
//!
//! Records are logged and then discarded; nothing is stored.

use crate::metric::MetricKind;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Date format of `<input type="date">` values.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw text of the three form inputs, exactly as typed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub date: String,
    pub amount: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmittedRecord {
    pub metric_type: MetricKind,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SubmittedRecord {
    /// Build a record from whatever the user typed. Never fails: an
    /// unparseable date falls back to `now`, an unparseable amount and blank
    /// notes are left out.
    pub fn from_input(kind: MetricKind, input: &FormInput, now: DateTime<Utc>) -> Self {
        let date = NaiveDate::parse_from_str(input.date.trim(), INPUT_DATE_FORMAT)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .unwrap_or(now);

        let amount = input
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite());

        let notes = Some(input.notes.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Self {
            metric_type: kind,
            date,
            amount,
            notes,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// "Submitting water data:" prefix shared by the log facade and the browser console.
    pub fn log_prefix(&self) -> String {
        format!("Submitting {} data:", self.metric_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_from_full_input() {
        let input = FormInput {
            date: "2024-03-01".to_string(),
            amount: "2750.5".to_string(),
            notes: "  north field  ".to_string(),
        };
        let record = SubmittedRecord::from_input(MetricKind::Water, &input, now());
        assert_eq!(record.metric_type, MetricKind::Water);
        assert_eq!(record.date, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(record.amount, Some(2750.5));
        assert_eq!(record.notes.as_deref(), Some("north field"));
    }

    #[test]
    fn test_empty_input_uses_now() {
        let record = SubmittedRecord::from_input(MetricKind::Yield, &FormInput::default(), now());
        assert_eq!(record.date, now());
        assert_eq!(record.amount, None);
        assert_eq!(record.notes, None);
    }

    #[test]
    fn test_garbage_input_never_fails() {
        let input = FormInput {
            date: "03/01/2024".to_string(),
            amount: "lots".to_string(),
            notes: "   ".to_string(),
        };
        let record = SubmittedRecord::from_input(MetricKind::Fertilizer, &input, now());
        assert_eq!(record.date, now());
        assert_eq!(record.amount, None);
        assert_eq!(record.notes, None);

        let nan = FormInput {
            amount: "NaN".to_string(),
            ..FormInput::default()
        };
        assert_eq!(SubmittedRecord::from_input(MetricKind::Water, &nan, now()).amount, None);
    }

    #[test]
    fn test_json_shape() {
        let record =
            SubmittedRecord::from_input(MetricKind::Fertilizer, &FormInput::default(), now());
        let json: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();
        assert_eq!(json["metric_type"], "fertilizer");
        assert_eq!(json["date"], "2024-03-15T09:30:00Z");
        assert!(json.get("amount").is_none());
        assert!(json.get("notes").is_none());
        assert_eq!(record.log_prefix(), "Submitting fertilizer data:");
    }
}
