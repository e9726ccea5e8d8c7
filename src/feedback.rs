use crate::*;
use serde::{Deserialize, Serialize};

/// How closely the two annotation sets agree, graded on the F1 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgreementBand {
    /// F1 of 0.7 or better.
    Close,
    /// F1 of 0.4 or better.
    Partial,
    /// F1 below 0.4.
    Divergent,
}

impl AgreementBand {
    /// Return the band an F1 score falls in.
    pub fn from_f1(f1_score: f64) -> AgreementBand {
        if f1_score >= 0.7 {
            AgreementBand::Close
        } else if f1_score >= 0.4 {
            AgreementBand::Partial
        } else {
            AgreementBand::Divergent
        }
    }
}

/// Overall reading of a comparison. The one-sided and empty situations are
/// kept apart from the graded bands because an F1 of 0.0 means something
/// different when one side drew nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agreement {
    /// Neither side submitted any detection.
    BothEmpty,
    /// Only the candidate side submitted detections.
    CandidateOnly,
    /// Only the reference side submitted detections.
    ReferenceOnly,
    /// Both sides submitted detections; the band grades the agreement.
    Graded(AgreementBand),
}

impl Agreement {
    /// Return the overall reading of a comparison report.
    pub fn from_report(report: &ComparisonReport) -> Agreement {
        if report.summary.both_empty {
            Agreement::BothEmpty
        } else if report.summary.candidate_only {
            Agreement::CandidateOnly
        } else if report.summary.reference_only {
            Agreement::ReferenceOnly
        } else {
            Agreement::Graded(AgreementBand::from_f1(report.iou_metrics.f1_score))
        }
    }
}

/// A concrete area to work on, derived from a comparison report. Wording is
/// left to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suggestion {
    /// Some candidate annotations matched no reference.
    ReviewFalsePositives,
    /// Some reference detections were not annotated.
    ReviewMissedDetections,
    /// Some matched pairs disagree on the class label.
    ReviewClassDefinitions,
    /// Matches exist but their mean overlap is below 0.5.
    RefineLocalization,
}

/// Derive the suggestions a comparison report warrants, in a fixed order.
///
/// # Parameters
///
/// * `report`: The report to read.
///
/// # Returns
///
/// Every triggered Suggestion, ordered as declared. Empty for a clean
/// comparison.
pub fn suggestions(report: &ComparisonReport) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if !report.unmatched_candidates.is_empty() {
        suggestions.push(Suggestion::ReviewFalsePositives);
    }
    if !report.unmatched_references.is_empty() {
        suggestions.push(Suggestion::ReviewMissedDetections);
    }
    if report.classification_metrics.incorrect_count > 0 {
        suggestions.push(Suggestion::ReviewClassDefinitions);
    }
    if !report.matches.is_empty() && report.iou_metrics.avg_iou < 0.5 {
        suggestions.push(Suggestion::RefineLocalization);
    }

    suggestions
}
