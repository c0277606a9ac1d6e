//! Correspondence record model and identifier normalization.
//!
//! A [`Record`] is one row of the tabular form of a source document: who
//! wrote it, who received it, and which other persons it mentions. Records
//! are produced by an external extractor; this crate only consumes them.
//!
//! Person identifiers are free-text tokens and case-insensitive. All
//! comparisons in the pipeline happen on the normalized form: surrounding
//! whitespace stripped, then lowercased. The archive uses the single-letter
//! identifier `"u"` as a placeholder for an unknown person; it is excluded
//! from the network downstream.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Placeholder identifier for an unidentified person.
pub const UNKNOWN_PERSON: &str = "u";

/// One correspondence document in tabular form.
///
/// `references` and `people` are multi-valued columns; individual elements
/// may themselves contain comma- or semicolon-delimited lists, exactly as
/// the extractor emits them. [`crate::expand::expand_records`] flattens
/// both shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier of the source document.
    pub document_id: String,
    /// Sender of the letter.
    #[serde(default)]
    pub source: String,
    /// Recipient of the letter.
    #[serde(default)]
    pub target: String,
    /// Persons referenced in the letter body.
    #[serde(default)]
    pub references: Vec<String>,
    /// Subject-heading persons attached to the document.
    #[serde(default)]
    pub people: Vec<String>,
    /// Letter date, when the extractor could determine one. Unused in
    /// filtering by default.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Normalize a person identifier: strip surrounding whitespace, lowercase.
#[must_use]
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Return `true` if `id` is the unknown-person placeholder.
#[must_use]
pub fn is_unknown(id: &str) -> bool {
    id == UNKNOWN_PERSON
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_and_lowercases() {
        assert_eq!(normalize_id("  Adams-John "), "adams-john");
        assert_eq!(normalize_id("SEDGWICK-theodoreI"), "sedgwick-theodorei");
    }

    #[test]
    fn normalize_empty_stays_empty() {
        assert_eq!(normalize_id("   "), "");
        assert_eq!(normalize_id(""), "");
    }

    #[test]
    fn unknown_sentinel_matches_after_normalization() {
        assert!(is_unknown(&normalize_id(" U ")));
        assert!(!is_unknown("unknown"));
    }

    #[test]
    fn record_deserializes_with_missing_optional_fields() {
        let record: Record = serde_json::from_str(
            r#"{"document_id": "cms-0001", "source": "A", "target": "B"}"#,
        )
        .expect("minimal record");
        assert!(record.references.is_empty());
        assert!(record.people.is_empty());
        assert!(record.date.is_none());
    }

    #[test]
    fn record_roundtrips_through_json() {
        let record = Record {
            document_id: "cms-0002".to_string(),
            source: "adams-abigail".to_string(),
            target: "adams-john".to_string(),
            references: vec!["jefferson-thomas, franklin-benjamin".to_string()],
            people: Vec::new(),
            date: NaiveDate::from_ymd_opt(1797, 3, 4),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        let back: Record = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, back);
    }
}
