use crate::*;
use anyhow::Result;
use fixedbitset::FixedBitSet;
use ndarray::*;

/// Minimum intersection over union for a candidate/reference pair to count
/// as a match when no threshold is supplied.
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.3;

/// Compare candidate detections against reference detections by greedy
/// intersection-over-union matching.
///
/// Candidates are processed in input order. Each candidate takes the
/// not-yet-consumed reference with the highest intersection over union,
/// provided that value meets the threshold; the reference is then consumed
/// and unavailable to every later candidate. Ties go to the earliest
/// reference, and the resulting pairing depends on candidate order rather
/// than being globally optimal.
///
/// # Parameters
///
/// * `candidates`: The detections under assessment, e.g. student annotations.
/// * `references`: The detections compared against, e.g. model predictions.
/// * `iou_threshold`: Minimum intersection over union for a pair to match.
///   Must lie within `0.0..=1.0`. Defaults to `DEFAULT_IOU_THRESHOLD`.
///
/// # Returns
///
/// A ComparisonReport carrying the matched pairs, the unmatched detections
/// of both sides and the aggregate metrics, or an error if `iou_threshold`
/// is outside `0.0..=1.0`.
///
/// # Examples
///
/// ```
/// use annotation_compare::{compare, BoundingBox, Detection};
///
/// // a student annotation and the model detection it should line up with
/// let student = Detection::new(
///     None,
///     BoundingBox::new(10, 10, 60, 60),
///     Some("transverse".to_string()),
///     None,
/// );
/// let model = Detection::new(
///     None,
///     BoundingBox::new(12, 10, 62, 60),
///     Some("transverse".to_string()),
///     Some(0.93),
/// );
///
/// // match with the default threshold
/// let report = compare(&[student], &[model], None).unwrap();
///
/// assert_eq!(report.summary.matched_count, 1);
/// assert!(report.matches[0].class_match);
/// assert!(report.iou_metrics.f1_score > 0.9);
/// ```
pub fn compare(
    candidates: &[Detection],
    references: &[Detection],
    iou_threshold: Option<f64>,
) -> Result<ComparisonReport> {
    let iou_threshold = iou_threshold.unwrap_or(DEFAULT_IOU_THRESHOLD);
    if !(0.0..=1.0).contains(&iou_threshold) {
        anyhow::bail!(
            "iou_threshold must be within 0.0..=1.0, got {}",
            iou_threshold
        );
    }

    let scores = score_matrix(candidates, references);
    let mut consumed = FixedBitSet::with_capacity(references.len());

    let mut matches: Vec<MatchResult> = Vec::new();
    let mut unmatched_candidates: Vec<UnmatchedCandidate> = Vec::new();

    for (row, candidate) in candidates.iter().enumerate() {
        match find_best_reference(scores.row(row), &consumed) {
            Some((col, best_iou)) if best_iou >= iou_threshold => {
                consumed.insert(col);
                let reference = &references[col];
                matches.push(MatchResult {
                    candidate_id: *candidate.id(),
                    reference_id: *reference.id(),
                    iou: round4(best_iou),
                    class_match: labels_match(candidate.class_label(), reference.class_label()),
                    candidate_class_label: candidate.class_label().clone(),
                    reference_class_label: reference.class_label().clone(),
                    reference_confidence: reference.confidence(),
                });
            }
            below_threshold => {
                let best_iou = below_threshold.map_or(0.0, |(_, best_iou)| best_iou);
                unmatched_candidates.push(UnmatchedCandidate {
                    id: *candidate.id(),
                    class_label: candidate.class_label().clone(),
                    best_iou: round4(best_iou),
                });
            }
        }
    }

    let unmatched_references = references
        .iter()
        .enumerate()
        .filter(|(col, _)| !consumed.contains(*col))
        .map(|(_, reference)| UnmatchedReference {
            id: *reference.id(),
            class_label: reference.class_label().clone(),
            confidence: reference.confidence(),
        })
        .collect();

    let candidate_count = candidates.len();
    let reference_count = references.len();
    let matched_count = matches.len();

    let precision = if candidate_count > 0 {
        matched_count as f64 / candidate_count as f64
    } else {
        0.0
    };
    let recall = if reference_count > 0 {
        matched_count as f64 / reference_count as f64
    } else {
        0.0
    };
    let f1_score = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };
    // mean of the already rounded per-match values
    let avg_iou = if matched_count > 0 {
        matches.iter().map(|m| m.iou).sum::<f64>() / matched_count as f64
    } else {
        0.0
    };

    let correct_count = matches.iter().filter(|m| m.class_match).count();
    let incorrect_count = matched_count - correct_count;
    let accuracy = if matched_count > 0 {
        correct_count as f64 / matched_count as f64
    } else {
        0.0
    };

    Ok(ComparisonReport {
        summary: ComparisonSummary::new(candidate_count, reference_count, matched_count),
        iou_metrics: IouMetrics {
            avg_iou: round4(avg_iou),
            iou_threshold,
            precision: round4(precision),
            recall: round4(recall),
            f1_score: round4(f1_score),
        },
        classification_metrics: ClassificationMetrics {
            correct_count,
            incorrect_count,
            accuracy: round4(accuracy),
        },
        matches,
        unmatched_candidates,
        unmatched_references,
    })
}

/// Compute the intersection over union of every (candidate, reference) pair
/// as a matrix with one row per candidate and one column per reference.
fn score_matrix(candidates: &[Detection], references: &[Detection]) -> Array2<f64> {
    Array2::from_shape_fn((candidates.len(), references.len()), |(row, col)| {
        iou::calculate_iou(candidates[row].bbox(), references[col].bbox())
    })
}

/// Find the unconsumed reference with the highest score. Only scores
/// strictly above 0.0 qualify, so a candidate overlapping nothing has no
/// best reference.
fn find_best_reference(scores: ArrayView1<f64>, consumed: &FixedBitSet) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut best_iou = 0.0;

    for (col, &score) in scores.iter().enumerate() {
        if consumed.contains(col) {
            continue;
        }
        if score > best_iou {
            best_iou = score;
            best = Some((col, score));
        }
    }

    best
}

/// Both labels present and equal ignoring case. A label missing on either
/// side never matches.
fn labels_match(candidate: &Option<String>, reference: &Option<String>) -> bool {
    match (candidate, reference) {
        (Some(candidate), Some(reference)) => candidate.to_lowercase() == reference.to_lowercase(),
        _ => false,
    }
}

/// Round to four decimal places, ties to even.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round_ties_even() / 10_000.0
}
