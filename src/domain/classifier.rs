//! Transcript classification
//!
//! Buckets a patient's transcribed answer by keyword. Matching is a plain
//! case-insensitive substring search evaluated in a fixed order: the
//! confirmation keywords are checked before the unclear keywords, so a
//! transcript containing both is always `Confirmed`.

use serde::{Deserialize, Serialize};

use super::call_record::CallRecord;

/// Keywords that mark a transcript as a confirmed dose
const CONFIRMED_KEYWORDS: [&str; 2] = ["yes", "taken"];

/// Keywords that mark a transcript as unclear
const UNCLEAR_KEYWORDS: [&str; 2] = ["no", "unclear"];

/// Bucket assigned to a single transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Confirmed,
    Unclear,
    /// Neither keyword group present
    Unmatched,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Confirmed => "confirmed",
            Classification::Unclear => "unclear",
            Classification::Unmatched => "unmatched",
        }
    }
}

/// Classify one transcript
pub fn classify(transcript: &str) -> Classification {
    let normalized = transcript.to_lowercase();

    if CONFIRMED_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        Classification::Confirmed
    } else if UNCLEAR_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        Classification::Unclear
    } else {
        Classification::Unmatched
    }
}

/// Aggregate over a set of stored responses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub total_responses: usize,
    pub confirmed_count: usize,
    pub unclear_count: usize,
}

impl ClassificationResult {
    /// Classify every transcript and tally the buckets.
    ///
    /// `confirmed_count + unclear_count` never exceeds `total_responses`;
    /// unmatched transcripts only count towards the total.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CallRecord>,
    {
        records
            .into_iter()
            .fold(Self::default(), |mut acc, record| {
                acc.total_responses += 1;
                match classify(&record.transcription) {
                    Classification::Confirmed => acc.confirmed_count += 1,
                    Classification::Unclear => acc.unclear_count += 1,
                    Classification::Unmatched => {}
                }
                acc
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::call_record::NO_TRANSCRIPTION_PLACEHOLDER;

    fn record(call_id: &str, transcription: &str) -> CallRecord {
        CallRecord::new(
            "+15550001111".to_string(),
            call_id.to_string(),
            Some(transcription.to_string()),
            "completed".to_string(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_confirmed_keywords() {
        assert_eq!(classify("yes"), Classification::Confirmed);
        assert_eq!(classify("I have TAKEN my pills"), Classification::Confirmed);
        assert_eq!(classify("YES!"), Classification::Confirmed);
    }

    #[test]
    fn test_unclear_keywords() {
        assert_eq!(classify("No, I forgot"), Classification::Unclear);
        assert_eq!(classify("That was UNCLEAR"), Classification::Unclear);
    }

    #[test]
    fn test_unmatched() {
        assert_eq!(classify("Okay"), Classification::Unmatched);
        assert_eq!(classify(""), Classification::Unmatched);
    }

    #[test]
    fn test_confirmed_checked_before_unclear() {
        assert_eq!(classify("yes, no, unclear"), Classification::Confirmed);
    }

    // Known ambiguity: a negated "taken" still reads as a confirmation
    // because the confirmed keywords are matched first.
    #[test]
    fn test_negated_taken_is_still_confirmed() {
        assert_eq!(classify("I have not taken it"), Classification::Confirmed);
    }

    #[test]
    fn test_substring_not_whole_word() {
        // "know" contains "no"
        assert_eq!(classify("I don't know"), Classification::Unclear);
        // "eyes" contains "yes"
        assert_eq!(classify("my eyes hurt"), Classification::Confirmed);
    }

    #[test]
    fn test_placeholder_transcription_is_unclear() {
        assert_eq!(
            classify(NO_TRANSCRIPTION_PLACEHOLDER),
            Classification::Unclear
        );
    }

    #[test]
    fn test_aggregate_mixed_responses() {
        let records = vec![
            record("CA1", "Yes, I have taken it"),
            record("CA2", "No, I forgot"),
            record("CA3", "Unclear response"),
            record("CA4", "Okay"),
        ];

        let result = ClassificationResult::from_records(&records);
        assert_eq!(
            result,
            ClassificationResult {
                total_responses: 4,
                confirmed_count: 1,
                unclear_count: 2,
            }
        );
        assert!(result.confirmed_count + result.unclear_count <= result.total_responses);
    }

    #[test]
    fn test_aggregate_empty() {
        let records: Vec<CallRecord> = Vec::new();
        let result = ClassificationResult::from_records(&records);
        assert_eq!(result, ClassificationResult::default());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = ClassificationResult {
            total_responses: 3,
            confirmed_count: 1,
            unclear_count: 1,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["totalResponses"], 3);
        assert_eq!(json["confirmedCount"], 1);
        assert_eq!(json["unclearCount"], 1);
    }
}
