use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// MatchResult represents one matched (candidate, reference) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Id of the matched candidate detection.
    pub candidate_id: Uuid,
    /// Id of the matched reference detection.
    pub reference_id: Uuid,
    /// Intersection over union of the pair, rounded to 4 decimal digits.
    /// Always at least the matching threshold.
    pub iou: f64,
    /// True iff both sides carry a class label and the labels are equal
    /// ignoring case. Absent labels never match.
    pub class_match: bool,
    /// Candidate class label, passed through for display.
    pub candidate_class_label: Option<String>,
    /// Reference class label, passed through for display.
    pub reference_class_label: Option<String>,
    /// Reference confidence, passed through for display.
    pub reference_confidence: Option<f64>,
}

/// UnmatchedCandidate represents a candidate detection that found no
/// acceptable reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedCandidate {
    pub id: Uuid,
    pub class_label: Option<String>,
    /// Best intersection over union found against the references still
    /// unconsumed when this candidate was processed, rounded to 4 decimal
    /// digits. 0.0 when no references remained.
    pub best_iou: f64,
}

/// UnmatchedReference represents a reference detection no candidate matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedReference {
    pub id: Uuid,
    pub class_label: Option<String>,
    pub confidence: Option<f64>,
}

/// ComparisonSummary holds the input/outcome counts of a comparison and four
/// convenience flags describing which sides were populated at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub candidate_count: usize,
    pub reference_count: usize,
    pub matched_count: usize,
    pub unmatched_candidate_count: usize,
    pub unmatched_reference_count: usize,
    /// Neither side submitted any detection.
    pub both_empty: bool,
    /// Both sides submitted at least one detection.
    pub both_nonempty: bool,
    /// Only the candidate side submitted detections.
    pub candidate_only: bool,
    /// Only the reference side submitted detections.
    pub reference_only: bool,
}

impl ComparisonSummary {
    /// Returns a new ComparisonSummary with the unmatched counts and flags
    /// derived from the three base counts. The unmatched counts clamp at
    /// zero if `matched_count` exceeds a side's total.
    pub fn new(
        candidate_count: usize,
        reference_count: usize,
        matched_count: usize,
    ) -> ComparisonSummary {
        ComparisonSummary {
            candidate_count,
            reference_count,
            matched_count,
            unmatched_candidate_count: candidate_count.saturating_sub(matched_count),
            unmatched_reference_count: reference_count.saturating_sub(matched_count),
            both_empty: candidate_count == 0 && reference_count == 0,
            both_nonempty: candidate_count > 0 && reference_count > 0,
            candidate_only: candidate_count > 0 && reference_count == 0,
            reference_only: candidate_count == 0 && reference_count > 0,
        }
    }
}

/// IouMetrics holds the spatial-overlap statistics of a comparison. Every
/// value except the echoed threshold is rounded to 4 decimal digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IouMetrics {
    /// Mean intersection over union across matched pairs, 0.0 without
    /// matches.
    pub avg_iou: f64,
    /// The matching threshold the comparison ran with.
    pub iou_threshold: f64,
    /// Fraction of candidates that found a match, 0.0 without candidates.
    pub precision: f64,
    /// Fraction of references that were matched, 0.0 without references.
    pub recall: f64,
    /// Harmonic mean of precision and recall, 0.0 when their sum is 0.
    pub f1_score: f64,
}

/// ClassificationMetrics holds the label-agreement statistics among matched
/// pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    /// Matched pairs whose class labels agree.
    pub correct_count: usize,
    /// Matched pairs whose class labels disagree or are absent on either
    /// side.
    pub incorrect_count: usize,
    /// `correct_count / matched_count` rounded to 4 decimal digits, 0.0
    /// without matches.
    pub accuracy: f64,
}

/// ComparisonReport is the full output of one comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub summary: ComparisonSummary,
    pub iou_metrics: IouMetrics,
    pub classification_metrics: ClassificationMetrics,
    /// Matched pairs in the order the candidates were processed.
    pub matches: Vec<MatchResult>,
    /// Unmatched candidates in input order.
    pub unmatched_candidates: Vec<UnmatchedCandidate>,
    /// Unmatched references in input order.
    pub unmatched_references: Vec<UnmatchedReference>,
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn summary_flags() {
        let summary = ComparisonSummary::new(0, 0, 0);
        assert!(summary.both_empty);
        assert!(!summary.both_nonempty);
        assert!(!summary.candidate_only);
        assert!(!summary.reference_only);

        let summary = ComparisonSummary::new(2, 3, 1);
        assert!(!summary.both_empty);
        assert!(summary.both_nonempty);
        assert_eq!(summary.unmatched_candidate_count, 1);
        assert_eq!(summary.unmatched_reference_count, 2);

        let summary = ComparisonSummary::new(2, 0, 0);
        assert!(summary.candidate_only);
        assert!(!summary.reference_only);

        let summary = ComparisonSummary::new(0, 4, 0);
        assert!(summary.reference_only);
        assert!(!summary.candidate_only);
    }

    #[test]
    fn summary_clamps_excess_matched_count() {
        let summary = ComparisonSummary::new(1, 0, 3);
        assert_eq!(summary.unmatched_candidate_count, 0);
        assert_eq!(summary.unmatched_reference_count, 0);
        assert!(summary.candidate_only);
    }

    #[test]
    fn report_field_names() {
        let candidate_id = uuid::Uuid::new_v4();
        let reference_id = uuid::Uuid::new_v4();

        let report = ComparisonReport {
            summary: ComparisonSummary::new(1, 1, 1),
            iou_metrics: IouMetrics {
                avg_iou: 1.0,
                iou_threshold: 0.3,
                precision: 1.0,
                recall: 1.0,
                f1_score: 1.0,
            },
            classification_metrics: ClassificationMetrics {
                correct_count: 1,
                incorrect_count: 0,
                accuracy: 1.0,
            },
            matches: vec![MatchResult {
                candidate_id,
                reference_id,
                iou: 1.0,
                class_match: true,
                candidate_class_label: Some("spiral".to_string()),
                reference_class_label: Some("Spiral".to_string()),
                reference_confidence: Some(0.92),
            }],
            unmatched_candidates: vec![],
            unmatched_references: vec![],
        };

        let value = serde_json::to_value(&report).unwrap();
        for key in [
            "summary",
            "iou_metrics",
            "classification_metrics",
            "matches",
            "unmatched_candidates",
            "unmatched_references",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }

        let summary = &value["summary"];
        for key in [
            "candidate_count",
            "reference_count",
            "matched_count",
            "unmatched_candidate_count",
            "unmatched_reference_count",
            "both_empty",
            "both_nonempty",
            "candidate_only",
            "reference_only",
        ] {
            assert!(summary.get(key).is_some(), "missing summary key {key}");
        }

        for key in ["avg_iou", "iou_threshold", "precision", "recall", "f1_score"] {
            assert!(value["iou_metrics"].get(key).is_some(), "missing iou key {key}");
        }

        for key in ["correct_count", "incorrect_count", "accuracy"] {
            assert!(
                value["classification_metrics"].get(key).is_some(),
                "missing classification key {key}"
            );
        }

        let match_result = &value["matches"][0];
        for key in [
            "candidate_id",
            "reference_id",
            "iou",
            "class_match",
            "candidate_class_label",
            "reference_class_label",
            "reference_confidence",
        ] {
            assert!(match_result.get(key).is_some(), "missing match key {key}");
        }
        assert_eq!(match_result["candidate_id"], candidate_id.to_string());
        assert_eq!(match_result["reference_id"], reference_id.to_string());
    }

    #[test]
    fn report_round_trips() {
        let report = ComparisonReport {
            summary: ComparisonSummary::new(1, 2, 0),
            iou_metrics: IouMetrics {
                avg_iou: 0.0,
                iou_threshold: 0.5,
                precision: 0.0,
                recall: 0.0,
                f1_score: 0.0,
            },
            classification_metrics: ClassificationMetrics {
                correct_count: 0,
                incorrect_count: 0,
                accuracy: 0.0,
            },
            matches: vec![],
            unmatched_candidates: vec![UnmatchedCandidate {
                id: uuid::Uuid::new_v4(),
                class_label: None,
                best_iou: 0.1234,
            }],
            unmatched_references: vec![UnmatchedReference {
                id: uuid::Uuid::new_v4(),
                class_label: Some("oblique".to_string()),
                confidence: Some(0.66),
            }],
        };

        let json = serde_json::to_string(&report).unwrap();
        let parsed: ComparisonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
