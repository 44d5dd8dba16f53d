use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use crate::utils::date::{format_short_date, parse_loose_date};

/// A completed assessment and its score, in the 0-100 range.
#[serde_as]
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TestHistoryEntry {
    pub name: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub date: String,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub score: f64,
}

impl TestHistoryEntry {
    pub fn completed_on(&self) -> Option<NaiveDate> {
        parse_loose_date(&self.date)
    }

    pub fn completed_on_label(&self) -> String {
        match self.completed_on() {
            Some(date) => format!("Completed on {}", format_short_date(date)),
            None => format!("Completed on {}", self.date),
        }
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}%", self.score)
    }
}

/// Response of the `api/users/test-history` endpoint.
///
/// A missing or `null` `history` field means no test was taken.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct TestHistoryResponse {
    #[serde(default)]
    pub history: Option<Vec<TestHistoryEntry>>,
}

impl From<TestHistoryResponse> for Vec<TestHistoryEntry> {
    fn from(response: TestHistoryResponse) -> Self {
        response.history.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    fn entry(date: &str, score: f64) -> TestHistoryEntry {
        TestHistoryEntry {
            name: "Big Five".to_string(),
            date: date.to_string(),
            score,
        }
    }

    #[rstest]
    fn test_decode_test_history_response() {
        let response: TestHistoryResponse = serde_json::from_value(json!({
            "history": [{ "name": "Big Five", "date": "2024-01-01", "score": 82 }]
        }))
        .unwrap();

        assert_eq!(
            Vec::<TestHistoryEntry>::from(response),
            vec![entry("2024-01-01", 82.0)]
        );
    }

    #[rstest]
    fn test_decode_test_history_response_with_null_fields() {
        let response: TestHistoryResponse = serde_json::from_value(json!({
            "history": [
                { "name": "Big Five", "date": "2024-01-01", "score": 82 },
                { "name": "Big Five", "date": null, "score": 71 },
                { "name": "Big Five", "date": "2024-02-01", "score": null }
            ]
        }))
        .unwrap();

        assert_eq!(
            Vec::<TestHistoryEntry>::from(response),
            vec![
                entry("2024-01-01", 82.0),
                entry("", 71.0),
                entry("2024-02-01", 0.0)
            ]
        );
    }

    #[rstest]
    #[case::missing_field(json!({}))]
    #[case::null_field(json!({ "history": null }))]
    fn test_decode_test_history_response_without_list(#[case] payload: serde_json::Value) {
        let response: TestHistoryResponse = serde_json::from_value(payload).unwrap();

        assert_eq!(
            Vec::<TestHistoryEntry>::from(response),
            Vec::<TestHistoryEntry>::new()
        );
    }

    #[rstest]
    #[case::integer(82.0, "Score: 82%")]
    #[case::fractional(67.5, "Score: 67.5%")]
    #[case::zero(0.0, "Score: 0%")]
    fn test_score_label(#[case] score: f64, #[case] expected: &str) {
        assert_eq!(entry("2024-01-01", score).score_label(), expected);
    }

    #[rstest]
    #[case::plain_date("2024-01-01", "Completed on 1/1/2024")]
    #[case::timestamp("2023-11-20T14:02:11.000Z", "Completed on 11/20/2023")]
    #[case::unparseable("yesterday", "Completed on yesterday")]
    fn test_completed_on_label(#[case] date: &str, #[case] expected: &str) {
        assert_eq!(entry(date, 50.0).completed_on_label(), expected);
    }
}
