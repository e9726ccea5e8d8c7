use serde::{Deserialize, Serialize};

/// BoundingBox represents an axis-aligned rectangle in pixel coordinates,
/// stored as its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge of the bounding box (i.e. min-x)
    x_min: i32,
    /// Top edge of the bounding box (i.e. min-y)
    y_min: i32,
    /// Right edge of the bounding box (i.e. max-x)
    x_max: i32,
    /// Bottom edge of the bounding box (i.e. max-y)
    y_max: i32,
}

impl BoundingBox {
    /// Returns a new BoundingBox
    ///
    /// # Parameters
    ///
    /// * `x_min`: Bounding box left edge.
    /// * `y_min`: Bounding box top edge.
    /// * `x_max`: Bounding box right edge.
    /// * `y_max`: Bounding box bottom edge.
    ///
    /// A box with `x_max <= x_min` or `y_max <= y_min` is degenerate; it is a
    /// legal value and scores an intersection over union of 0.0 against any
    /// other box.
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> BoundingBox {
        BoundingBox {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Returns the left edge of the bounding box
    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    /// Returns the top edge of the bounding box
    pub fn y_min(&self) -> i32 {
        self.y_min
    }

    /// Returns the right edge of the bounding box
    pub fn x_max(&self) -> i32 {
        self.x_max
    }

    /// Returns the bottom edge of the bounding box
    pub fn y_max(&self) -> i32 {
        self.y_max
    }

    /// Returns the width of the bounding box, `x_max - x_min`. Zero or
    /// negative for degenerate boxes.
    pub fn width(&self) -> i64 {
        i64::from(self.x_max) - i64::from(self.x_min)
    }

    /// Returns the height of the bounding box, `y_max - y_min`. Zero or
    /// negative for degenerate boxes.
    pub fn height(&self) -> i64 {
        i64::from(self.y_max) - i64::from(self.y_min)
    }

    /// Returns the area of the bounding box. Widened to i128: corner spans
    /// reach 2^32 - 1 and their product exceeds i64.
    pub fn area(&self) -> i128 {
        i128::from(self.width()) * i128::from(self.height())
    }

    /// Returns the center of the bounding box as `(x, y)`
    pub fn center(&self) -> (f64, f64) {
        (
            self.x_min as f64 + self.width() as f64 / 2.0,
            self.y_min as f64 + self.height() as f64 / 2.0,
        )
    }

    /// Returns true when the box encloses no area
    pub fn is_degenerate(&self) -> bool {
        self.x_max <= self.x_min || self.y_max <= self.y_min
    }
}
