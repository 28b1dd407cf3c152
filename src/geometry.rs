//! Resolution of box descriptions into absolute-unit geometry metrics.
//!
//! [`BoxMetrics`] is the ephemeral, derived description that drives all line
//! generation: per-corner effective radii, arc segment counts and cropped
//! flags, plus the outer/inner/center quads. It is computed fresh for every
//! generation call, owns no external references, and never fails — empty or
//! degenerate inputs resolve to simpler geometry.

use crate::arc::segments_for_radius;
use crate::metrics::{BorderWidths, BoxShape};
use crate::util::SHARP_RADIUS;
use crate::MathRect;
use lyon::math::{point, vector, Point, Vector};

// Corner indices, clockwise from top-left.
pub(crate) const TOP_LEFT: usize = 0;
pub(crate) const TOP_RIGHT: usize = 1;
pub(crate) const BOTTOM_RIGHT: usize = 2;
pub(crate) const BOTTOM_LEFT: usize = 3;

// Edge indices, clockwise from the top. Edge `e` runs from corner `e` to
// corner `(e + 1) % 4`.
pub(crate) const TOP: usize = 0;
pub(crate) const RIGHT: usize = 1;
pub(crate) const BOTTOM: usize = 2;
pub(crate) const LEFT: usize = 3;

/// Resolved geometry of one corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerMetrics {
    /// Ellipse center shared by the outer and inner arcs.
    pub center: Point,
    /// Outer arc radii, clipped to half the box dimensions.
    pub outer_radius: Vector,
    /// Inner arc radii: outer radii minus the adjacent border widths,
    /// floored at zero.
    pub inner_radius: Vector,
    /// Arc subdivision count for this corner.
    pub segments: u32,
    /// The border consumed the whole radius: no elliptical interior remains.
    pub cropped: bool,
    /// The outer radius itself is ~0; the corner renders square.
    pub sharp: bool,
}

impl CornerMetrics {
    /// Lines the border ribbon emits for this corner.
    pub(crate) fn border_lines(&self) -> usize {
        if self.sharp {
            1
        } else {
            self.segments as usize + 1
        }
    }

    /// Points this corner contributes to the fill contour.
    pub(crate) fn contour_points(&self) -> usize {
        if self.sharp || self.cropped {
            1
        } else {
            self.segments as usize + 1
        }
    }
}

/// Resolved absolute-unit description of a box, driving line generation.
///
/// Computed by [`BoxMetrics::resolve`]; lives for one generation call.
///
/// # Examples
///
/// ```
/// use kadro::{BorderWidths, BoxMetrics, BoxShape, MathRect};
/// use lyon::math::point;
///
/// let rect = MathRect::new(point(0.0, 0.0), point(100.0, 60.0));
/// let metrics = BoxMetrics::resolve(&rect, &BoxShape::uniform(8.0), &BorderWidths::uniform(2.0));
/// assert!(metrics.radius_regular);
/// assert!(metrics.border_regular);
/// assert!(!metrics.totally_cropped);
/// assert!(metrics.inner.width() >= 0.0 && metrics.inner.height() >= 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoxMetrics {
    /// The outer bound; equal to the input rectangle.
    pub outer: MathRect,
    /// The fill region bound: outer minus border widths, never inverted.
    pub inner: MathRect,
    /// Intersection of the opposing corner-center spans.
    pub center_quad: MathRect,
    /// Corner metrics, clockwise from top-left.
    pub corners: [CornerMetrics; 4],
    /// Resolved border widths, clockwise from the top edge.
    pub border: [f32; 4],
    /// All corners share one radius pair.
    pub radius_regular: bool,
    /// All edges share one border width.
    pub border_regular: bool,
    /// Every corner renders square; the box is a plain rectangle.
    pub rectangle: bool,
    /// A border is present and every rounded corner is cropped: no
    /// elliptical interior remains anywhere.
    pub totally_cropped: bool,
}

impl BoxMetrics {
    /// Resolves a rectangle plus shape and border-width metrics into
    /// generation-ready geometry. Total: degenerate inputs produce
    /// degenerate (possibly empty) metrics, never an error.
    pub fn resolve(rect: &MathRect, shape: &BoxShape, widths: &BorderWidths) -> BoxMetrics {
        let shape = shape.to_absolute(rect);
        let widths = widths.to_absolute(rect);

        let half_width = (rect.width().max(0.0)) / 2.0;
        let half_height = (rect.height().max(0.0)) / 2.0;

        let mut radii = [Vector::zero(); 4];
        for (corner, radius) in radii.iter_mut().enumerate() {
            let requested = shape.radius(corner);
            *radius = vector(
                requested.x.min(half_width),
                requested.y.min(half_height),
            );
        }

        let centers = [
            point(rect.min.x + radii[TOP_LEFT].x, rect.min.y + radii[TOP_LEFT].y),
            point(rect.max.x - radii[TOP_RIGHT].x, rect.min.y + radii[TOP_RIGHT].y),
            point(
                rect.max.x - radii[BOTTOM_RIGHT].x,
                rect.max.y - radii[BOTTOM_RIGHT].y,
            ),
            point(
                rect.min.x + radii[BOTTOM_LEFT].x,
                rect.max.y - radii[BOTTOM_LEFT].y,
            ),
        ];

        let center_quad = Self::center_quad(&centers);
        let border = [widths.top, widths.right, widths.bottom, widths.left];
        let inner = Self::inner_quad(rect, &border, &center_quad);

        let inner_radii = [
            vector(
                (radii[TOP_LEFT].x - widths.left).max(0.0),
                (radii[TOP_LEFT].y - widths.top).max(0.0),
            ),
            vector(
                (radii[TOP_RIGHT].x - widths.right).max(0.0),
                (radii[TOP_RIGHT].y - widths.top).max(0.0),
            ),
            vector(
                (radii[BOTTOM_RIGHT].x - widths.right).max(0.0),
                (radii[BOTTOM_RIGHT].y - widths.bottom).max(0.0),
            ),
            vector(
                (radii[BOTTOM_LEFT].x - widths.left).max(0.0),
                (radii[BOTTOM_LEFT].y - widths.bottom).max(0.0),
            ),
        ];

        let mut corners = [CornerMetrics {
            center: point(0.0, 0.0),
            outer_radius: Vector::zero(),
            inner_radius: Vector::zero(),
            segments: 0,
            cropped: false,
            sharp: true,
        }; 4];

        for corner in 0..4 {
            let outer_radius = radii[corner];
            let inner_radius = inner_radii[corner];
            let center = centers[corner];
            let sharp = outer_radius.x.max(outer_radius.y) < SHARP_RADIUS;
            // A corner is cropped when its center sits at or beyond an inner
            // quad edge: the border consumed the whole elliptical interior.
            let center_inside = center.x > inner.min.x
                && center.x < inner.max.x
                && center.y > inner.min.y
                && center.y < inner.max.y;
            let cropped = !sharp
                && (inner_radius.x <= 0.0 || inner_radius.y <= 0.0 || !center_inside);
            corners[corner] = CornerMetrics {
                center,
                outer_radius,
                inner_radius,
                segments: segments_for_radius(outer_radius.x.max(outer_radius.y)),
                cropped,
                sharp,
            };
        }

        let rectangle = corners.iter().all(|c| c.sharp);
        let totally_cropped = !widths.is_none()
            && corners.iter().all(|c| c.sharp || c.cropped)
            && corners.iter().any(|c| c.cropped);
        let radius_regular = radii[1..].iter().all(|r| *r == radii[0]);
        let border_regular = widths.is_uniform();

        BoxMetrics {
            outer: *rect,
            inner,
            center_quad,
            corners,
            border,
            radius_regular,
            border_regular,
            rectangle,
            totally_cropped,
        }
    }

    fn center_quad(centers: &[Point; 4]) -> MathRect {
        let mut left = centers[TOP_LEFT].x.max(centers[BOTTOM_LEFT].x);
        let mut right = centers[TOP_RIGHT].x.min(centers[BOTTOM_RIGHT].x);
        let mut top = centers[TOP_LEFT].y.max(centers[TOP_RIGHT].y);
        let mut bottom = centers[BOTTOM_LEFT].y.min(centers[BOTTOM_RIGHT].y);
        if right < left {
            let mid = (left + right) / 2.0;
            left = mid;
            right = mid;
        }
        if bottom < top {
            let mid = (top + bottom) / 2.0;
            top = mid;
            bottom = mid;
        }
        MathRect::new(point(left, top), point(right, bottom))
    }

    /// Inner quad: the outer rect inset by the border widths, with edges
    /// clamped so they never cross past the center quad, collapsing to a
    /// midpoint instead of inverting when borders exceed the available
    /// space.
    fn inner_quad(rect: &MathRect, border: &[f32; 4], center_quad: &MathRect) -> MathRect {
        let mut left = (rect.min.x + border[LEFT]).min(center_quad.max.x);
        let mut right = (rect.max.x - border[RIGHT]).max(center_quad.min.x);
        let mut top = (rect.min.y + border[TOP]).min(center_quad.max.y);
        let mut bottom = (rect.max.y - border[BOTTOM]).max(center_quad.min.y);
        if right < left {
            let mid = ((left + right) / 2.0).clamp(rect.min.x, rect.max.x.max(rect.min.x));
            left = mid;
            right = mid;
        }
        if bottom < top {
            let mid = ((top + bottom) / 2.0).clamp(rect.min.y, rect.max.y.max(rect.min.y));
            top = mid;
            bottom = mid;
        }
        MathRect::new(point(left, top), point(right, bottom))
    }

    /// True when any edge has a positive border width.
    pub fn has_border(&self) -> bool {
        self.border.iter().any(|w| *w > 0.0)
    }

    /// Point on a corner's outer arc for the given unit-circle sample.
    ///
    /// With a non-inverted [`crate::ArcIterator`] every corner sweeps
    /// clockwise: top-left from its left-edge tangent up to the top edge,
    /// and so on around the box.
    pub(crate) fn outer_corner_point(&self, corner: usize, cos: f32, sin: f32) -> Point {
        let c = &self.corners[corner];
        corner_point(c.center, c.outer_radius, corner, cos, sin)
    }

    /// Point on a corner's inner arc, clamped into the inner quad so that
    /// cropped corners pin to the quad corner instead of escaping it.
    pub(crate) fn inner_corner_point(&self, corner: usize, cos: f32, sin: f32) -> Point {
        let c = &self.corners[corner];
        let p = corner_point(c.center, c.inner_radius, corner, cos, sin);
        let inner = &self.inner;
        match corner {
            TOP_LEFT => point(p.x.max(inner.min.x), p.y.max(inner.min.y)),
            TOP_RIGHT => point(p.x.min(inner.max.x), p.y.max(inner.min.y)),
            BOTTOM_RIGHT => point(p.x.min(inner.max.x), p.y.min(inner.max.y)),
            _ => point(p.x.max(inner.min.x), p.y.min(inner.max.y)),
        }
    }

    /// The inner-quad corner point nearest the given corner; where sharp and
    /// cropped corners collapse to.
    pub(crate) fn inner_quad_corner(&self, corner: usize) -> Point {
        match corner {
            TOP_LEFT => point(self.inner.min.x, self.inner.min.y),
            TOP_RIGHT => point(self.inner.max.x, self.inner.min.y),
            BOTTOM_RIGHT => point(self.inner.max.x, self.inner.max.y),
            _ => point(self.inner.min.x, self.inner.max.y),
        }
    }

    /// The outer rect corner point nearest the given corner.
    pub(crate) fn outer_quad_corner(&self, corner: usize) -> Point {
        match corner {
            TOP_LEFT => point(self.outer.min.x, self.outer.min.y),
            TOP_RIGHT => point(self.outer.max.x, self.outer.min.y),
            BOTTOM_RIGHT => point(self.outer.max.x, self.outer.max.y),
            _ => point(self.outer.min.x, self.outer.max.y),
        }
    }

    /// A copy with every corner squared off; the plain-rectangle fast path
    /// runs the ordinary generators over these metrics.
    pub(crate) fn degenerate_to_rect(&self) -> BoxMetrics {
        let mut metrics = self.clone();
        for corner in 0..4 {
            let quad_corner = match corner {
                TOP_LEFT => point(self.outer.min.x, self.outer.min.y),
                TOP_RIGHT => point(self.outer.max.x, self.outer.min.y),
                BOTTOM_RIGHT => point(self.outer.max.x, self.outer.max.y),
                _ => point(self.outer.min.x, self.outer.max.y),
            };
            metrics.corners[corner] = CornerMetrics {
                center: quad_corner,
                outer_radius: Vector::zero(),
                inner_radius: Vector::zero(),
                segments: 0,
                cropped: false,
                sharp: true,
            };
        }
        metrics.rectangle = true;
        metrics.totally_cropped = false;
        metrics.radius_regular = true;
        metrics
    }
}

#[inline]
fn corner_point(center: Point, radius: Vector, corner: usize, cos: f32, sin: f32) -> Point {
    match corner {
        TOP_LEFT => point(center.x - radius.x * cos, center.y - radius.y * sin),
        TOP_RIGHT => point(center.x + radius.x * sin, center.y - radius.y * cos),
        BOTTOM_RIGHT => point(center.x + radius.x * cos, center.y + radius.y * sin),
        _ => point(center.x - radius.x * sin, center.y + radius.y * cos),
    }
}
