//! Arc ("dial") geometry
//!
//! Items follow a circular arc whose chord spans the viewport width and whose
//! sagitta is a fraction of the viewport height.

/// Radius of the circle through a chord of `viewport_width` with a sagitta of
/// `viewport_height * arc_intersect_fraction`.
///
/// Uses the sagitta relation `r = h/2 + w²/(8h)`.
///
/// # Preconditions
/// The arc height must be positive. A zero-height viewport makes the layout
/// meaningless and is not checked in release builds.
///
/// # Examples
///
/// ```
/// # use loop_layout::geometry::solve_arc_radius;
/// let r = solve_arc_radius(100.0, 300.0, 1.0);
/// assert_eq!(r, 162.5);
/// ```
pub fn solve_arc_radius(viewport_height: f64, viewport_width: f64, arc_intersect_fraction: f64) -> f64 {
    let arc_height = viewport_height * arc_intersect_fraction;
    debug_assert!(arc_height > 0.0, "arc height must be positive (got {arc_height})");
    (arc_height / 2.0) + (viewport_width * viewport_width) / (8.0 * arc_height)
}

/// Radius used for item translation: the sagitta radius pushed down by the arc
/// height so the arc's origin sits below the viewport.
pub fn arc_translation_origin(
    viewport_height: f64,
    viewport_width: f64,
    arc_intersect_fraction: f64,
) -> f64 {
    let arc_height = viewport_height * arc_intersect_fraction;
    solve_arc_radius(viewport_height, viewport_width, arc_intersect_fraction) + arc_height
}

/// Vertical drop of a point `distance` away from the arc's apex.
///
/// Returns `0.0` when the distance reaches or exceeds the radius (edge of the arc).
pub fn arc_translation(radius: f64, distance: f64) -> f64 {
    let distance = distance.abs();
    if distance >= radius {
        return 0.0;
    }
    radius - (radius * radius - distance * distance).sqrt()
}
