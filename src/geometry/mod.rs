//! Geometry primitives - points, sizes, rectangles and item transforms
//!
//! # Module Structure
//!
//! - `shift`: circular rotation of ordered sequences
//! - `arc`: sagitta-based arc radius solver and arc translation

pub mod arc;
pub mod shift;

use serde::Serialize;

pub use arc::{arc_translation, arc_translation_origin, solve_arc_radius};
pub use shift::{circular_shift, circular_shift_in_place, circular_shift_into};

/// A point in layout coordinates (x grows right, y grows down).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Zero-sized value.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Scale both dimensions uniformly.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }

    /// True when either dimension is zero or negative.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle described by its origin (top-left) and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent.
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from raw coordinates.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Rectangle of `size` centered on `center`.
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Left edge.
    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Horizontal center.
    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    /// Top edge.
    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Vertical center.
    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// True if the two rectangles overlap with a non-empty area.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.size.is_degenerate() || other.size.is_degenerate() {
            return false;
        }
        self.min_x() < other.max_x()
            && other.min_x() < self.max_x()
            && self.min_y() < other.max_y()
            && other.min_y() < self.max_y()
    }

    /// True if `point` lies inside the rectangle (right/bottom edges exclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }
}

/// Visual transform applied to an item on top of its frame.
///
/// The translation is applied first, then the scale about the item's center,
/// so the translation itself is never scaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform3D {
    /// Translation along x, y and z.
    pub translation: [f64; 3],
    /// Scale factors along x, y and z.
    pub scale: [f64; 3],
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform3D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translation: [0.0, 0.0, 0.0],
        scale: [1.0, 1.0, 1.0],
    };

    /// Pure translation.
    pub const fn translation(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            translation: [tx, ty, tz],
            scale: [1.0, 1.0, 1.0],
        }
    }

    /// Compose a scale onto this transform.
    pub fn scaled(mut self, sx: f64, sy: f64, sz: f64) -> Self {
        self.scale = [self.scale[0] * sx, self.scale[1] * sy, self.scale[2] * sz];
        self
    }

    /// True if this transform leaves geometry untouched.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Vertical translation component.
    pub fn translation_y(&self) -> f64 {
        self.translation[1]
    }

    /// Horizontal scale component.
    pub fn scale_x(&self) -> f64 {
        self.scale[0]
    }

    /// Map an untransformed frame to its on-screen bounding rectangle.
    pub fn apply_to_rect(&self, rect: &Rect) -> Rect {
        let center = Point::new(
            rect.mid_x() + self.translation[0],
            rect.mid_y() + self.translation[1],
        );
        let size = Size::new(
            rect.size.width * self.scale[0],
            rect.size.height * self.scale[1],
        );
        Rect::centered_at(center, size)
    }
}
