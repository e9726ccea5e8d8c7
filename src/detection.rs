use crate::BoundingBox;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Detection represents one annotated bounding box in a single image, either
/// a candidate (e.g. student-submitted) or a reference (e.g. model-produced).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Unique detection identifier
    id: Uuid,
    /// Bounding box in min/max corner format.
    bbox: BoundingBox,
    /// Optional classification label. `None` means unclassified.
    class_label: Option<String>,
    /// Optional confidence score in [0.0, 1.0]. Student annotations carry
    /// none; model detections usually do.
    confidence: Option<f64>,
}

impl Detection {
    /// Returns a new Detection
    ///
    /// # Parameters
    ///
    /// * `id`: Unique identifier, generated when `None`. Used only for
    ///   traceability in comparison output, never for matching.
    /// * `bbox`: A bounding box object.
    /// * `class_label`: An optional classification label.
    /// * `confidence`: An optional detection confidence score.
    pub fn new(
        id: Option<Uuid>,
        bbox: BoundingBox,
        class_label: Option<String>,
        confidence: Option<f64>,
    ) -> Detection {
        Detection {
            id: id.unwrap_or_else(Uuid::new_v4),
            bbox,
            class_label,
            confidence,
        }
    }

    /// Returns the unique id of the detection
    pub fn id(&self) -> &Uuid {
        &self.id
    }

    /// Returns the bounding box of the detection
    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Returns the classification label of the detection
    pub fn class_label(&self) -> &Option<String> {
        &self.class_label
    }

    /// Returns the confidence of the detection
    pub fn confidence(&self) -> Option<f64> {
        self.confidence
    }
}
