use crate::BoundingBox;

/// Compute intersection over union.
///
/// # Parameters
///
/// * `a`: A bounding box in min/max corner format.
/// * `b`: A bounding box in the same coordinate space as `a`.
///
/// # Returns
///
/// The intersection over union in [0.0, 1.0] between the two boxes. Boxes
/// that do not overlap, touch only at an edge or corner, or enclose no area
/// score exactly 0.0.
pub fn calculate_iou(a: &BoundingBox, b: &BoundingBox) -> f64 {
    let x_left = a.x_min().max(b.x_min());
    let y_top = a.y_min().max(b.y_min());
    let x_right = a.x_max().min(b.x_max());
    let y_bottom = a.y_max().min(b.y_max());

    if x_right <= x_left || y_bottom <= y_top {
        return 0.0;
    }

    let intersection_area = (i128::from(x_right) - i128::from(x_left))
        * (i128::from(y_bottom) - i128::from(y_top));
    let union_area = a.area() + b.area() - intersection_area;

    if union_area == 0 {
        return 0.0;
    }

    intersection_area as f64 / union_area as f64
}

/// Compute the Euclidean distance between the centers of two bounding boxes.
///
/// # Parameters
///
/// * `a`: A bounding box in min/max corner format.
/// * `b`: A bounding box in the same coordinate space as `a`.
///
/// # Returns
///
/// The center-to-center distance in pixels.
pub fn center_distance(a: &BoundingBox, b: &BoundingBox) -> f64 {
    let (a_x, a_y) = a.center();
    let (b_x, b_y) = b.center();

    ((a_x - b_x).powi(2) + (a_y - b_y).powi(2)).sqrt()
}
