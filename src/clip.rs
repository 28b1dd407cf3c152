//! Position-only clip geometry for stencil masks.
//!
//! Clipping children to a rounded box uses the same metrics resolution as
//! the color paths but emits only positions: a triangle fan around the fill
//! contour's center plus a `u16` index buffer of (center, boundary) pairs.
//! Plain rectangles short-circuit to a rectangular clip so callers can use
//! scissor rects instead of the stencil.

use crate::arc::ArcIterator;
use crate::geometry::BoxMetrics;
use crate::metrics::{BorderWidths, BoxShape};
use crate::vertex::PositionVertex;
use crate::MathRect;
use tracing::trace;

/// Fan geometry for a stencil clip: `vertices[0]` is the contour center,
/// followed by the fill contour clockwise from the top-left corner.
///
/// The index buffer holds (center, boundary) pairs in fan order, closing
/// back onto the first boundary point; consecutive pairs share the center
/// and span one fan triangle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipFan {
    vertices: Vec<PositionVertex>,
    indices: Vec<u16>,
}

impl ClipFan {
    pub fn vertices(&self) -> &[PositionVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Vertex buffer bytes for upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer bytes for upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Clip geometry for a box: either a plain rectangle (use a scissor or a
/// rectangular stencil quad) or a triangle fan tracing the fill contour.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipGeometry {
    /// The shape clips to this rectangle; no fan needed.
    Rectangle(MathRect),
    Fan(ClipFan),
}

/// Exact (vertex, index) counts of [`tessellate_clip`] for these inputs.
/// `(0, 0)` for shapes that short-circuit to a rectangular clip.
pub fn clip_counts(rect: &MathRect, shape: &BoxShape, widths: &BorderWidths) -> (usize, usize) {
    let metrics = BoxMetrics::resolve(rect, shape, widths);
    if clips_to_rectangle(&metrics) {
        return (0, 0);
    }
    let boundary: usize = metrics.corners.iter().map(|c| c.contour_points()).sum();
    (1 + boundary, 2 * (boundary + 1))
}

fn clips_to_rectangle(metrics: &BoxMetrics) -> bool {
    metrics.rectangle || metrics.totally_cropped || metrics.outer.is_empty()
}

/// Builds clip geometry for a box's fill contour.
///
/// # Examples
///
/// ```
/// use kadro::{clip_counts, tessellate_clip, BorderWidths, BoxShape, ClipGeometry, MathRect};
/// use lyon::math::point;
///
/// let rect = MathRect::new(point(0.0, 0.0), point(100.0, 60.0));
///
/// // Plain rectangles short-circuit
/// let clip = tessellate_clip(&rect, &BoxShape::rectangle(), &BorderWidths::none());
/// assert!(matches!(clip, ClipGeometry::Rectangle(_)));
///
/// // Rounded shapes produce a fan with the predicted counts
/// let shape = BoxShape::uniform(8.0);
/// let (vertex_count, index_count) = clip_counts(&rect, &shape, &BorderWidths::none());
/// match tessellate_clip(&rect, &shape, &BorderWidths::none()) {
///     ClipGeometry::Fan(fan) => {
///         assert_eq!(fan.vertices().len(), vertex_count);
///         assert_eq!(fan.indices().len(), index_count);
///     }
///     ClipGeometry::Rectangle(_) => unreachable!(),
/// }
/// ```
pub fn tessellate_clip(
    rect: &MathRect,
    shape: &BoxShape,
    widths: &BorderWidths,
) -> ClipGeometry {
    let metrics = BoxMetrics::resolve(rect, shape, widths);
    if clips_to_rectangle(&metrics) {
        trace!("clip short-circuits to a plain rectangle");
        return ClipGeometry::Rectangle(metrics.inner);
    }

    let boundary: usize = metrics.corners.iter().map(|c| c.contour_points()).sum();
    let mut vertices = Vec::with_capacity(1 + boundary);
    let mut indices = Vec::with_capacity(2 * (boundary + 1));
    vertices.push(PositionVertex::new(metrics.inner.center()));

    for corner in 0..4 {
        let c = &metrics.corners[corner];
        if c.sharp || c.cropped {
            vertices.push(PositionVertex::new(metrics.inner_quad_corner(corner)));
        } else {
            let mut arc = ArcIterator::new(c.segments, false);
            loop {
                vertices.push(PositionVertex::new(metrics.inner_corner_point(
                    corner,
                    arc.cos(),
                    arc.sin(),
                )));
                if arc.is_done() {
                    break;
                }
                arc.increment();
            }
        }
    }

    for boundary_index in 1..=boundary as u16 {
        indices.push(0);
        indices.push(boundary_index);
    }
    // Close the fan onto the first boundary point.
    indices.push(0);
    indices.push(1);

    debug_assert_eq!(vertices.len(), 1 + boundary);
    debug_assert_eq!(indices.len(), 2 * (boundary + 1));
    ClipGeometry::Fan(ClipFan { vertices, indices })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::math::point;

    fn rect(width: f32, height: f32) -> MathRect {
        MathRect::new(point(0.0, 0.0), point(width, height))
    }

    #[test]
    fn rectangle_shapes_short_circuit() {
        let clip = tessellate_clip(
            &rect(100.0, 60.0),
            &BoxShape::rectangle(),
            &BorderWidths::uniform(4.0),
        );
        match clip {
            ClipGeometry::Rectangle(r) => {
                assert_eq!(r, MathRect::new(point(4.0, 4.0), point(96.0, 56.0)));
            }
            ClipGeometry::Fan(_) => panic!("expected rectangular clip"),
        }
        assert_eq!(
            clip_counts(&rect(100.0, 60.0), &BoxShape::rectangle(), &BorderWidths::none()),
            (0, 0)
        );
    }

    #[test]
    fn fully_cropped_boxes_short_circuit() {
        let clip = tessellate_clip(
            &rect(100.0, 60.0),
            &BoxShape::uniform(6.0),
            &BorderWidths::uniform(10.0),
        );
        assert!(matches!(clip, ClipGeometry::Rectangle(_)));
    }

    #[test]
    fn fan_counts_match_prediction() {
        let shape = BoxShape::uniform(10.0);
        let widths = BorderWidths::uniform(2.0);
        let (vertex_count, index_count) = clip_counts(&rect(100.0, 60.0), &shape, &widths);
        match tessellate_clip(&rect(100.0, 60.0), &shape, &widths) {
            ClipGeometry::Fan(fan) => {
                assert_eq!(fan.vertices().len(), vertex_count);
                assert_eq!(fan.indices().len(), index_count);
                // 4 corners at 6 segments each
                assert_eq!(vertex_count, 1 + 4 * 7);
            }
            ClipGeometry::Rectangle(_) => panic!("expected fan"),
        }
    }

    #[test]
    fn fan_indices_pair_center_with_the_boundary() {
        let shape = BoxShape::uniform(10.0);
        let ClipGeometry::Fan(fan) =
            tessellate_clip(&rect(100.0, 60.0), &shape, &BorderWidths::none())
        else {
            panic!("expected fan");
        };
        let pairs: Vec<_> = fan.indices().chunks(2).collect();
        assert!(pairs.iter().all(|pair| pair[0] == 0));
        assert_eq!(pairs[0][1], 1);
        assert_eq!(pairs.last().unwrap()[1], 1, "fan closes on the first point");
        let boundary = fan.vertices().len() - 1;
        assert_eq!(pairs[boundary - 1][1] as usize, boundary);
    }

    #[test]
    fn fan_boundary_matches_the_fill_contour() {
        // Borderless: the fill contour is the outer rounded contour.
        let shape = BoxShape::uniform(10.0);
        let metrics = BoxMetrics::resolve(&rect(100.0, 60.0), &shape, &BorderWidths::none());
        let ClipGeometry::Fan(fan) =
            tessellate_clip(&rect(100.0, 60.0), &shape, &BorderWidths::none())
        else {
            panic!("expected fan");
        };
        // First boundary point is the top-left arc's left tangent
        assert_eq!(fan.vertices()[1].position, [0.0, 10.0]);
        // All boundary points stay inside the outer rect
        for vertex in &fan.vertices()[1..] {
            assert!(vertex.position[0] >= metrics.outer.min.x - 1e-4);
            assert!(vertex.position[0] <= metrics.outer.max.x + 1e-4);
            assert!(vertex.position[1] >= metrics.outer.min.y - 1e-4);
            assert!(vertex.position[1] <= metrics.outer.max.y + 1e-4);
        }
    }
}
