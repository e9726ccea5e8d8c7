mod bounding_box;
mod detection;
mod feedback;
mod greedy_matching;
mod iou;
mod report;

pub use bounding_box::BoundingBox;
pub use detection::Detection;
pub use feedback::suggestions;
pub use feedback::Agreement;
pub use feedback::AgreementBand;
pub use feedback::Suggestion;
pub use greedy_matching::compare;
pub use greedy_matching::DEFAULT_IOU_THRESHOLD;
pub use iou::calculate_iou;
pub use iou::center_distance;
pub use report::ClassificationMetrics;
pub use report::ComparisonReport;
pub use report::ComparisonSummary;
pub use report::IouMetrics;
pub use report::MatchResult;
pub use report::UnmatchedCandidate;
pub use report::UnmatchedReference;
