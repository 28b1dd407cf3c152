//! Border ribbon generation.
//!
//! The border is traced as one closed loop of colored lines (outer point,
//! inner point), clockwise from the top-left corner's left-edge tangent:
//! corner arc, edge, corner arc, ... and finally a duplicate of the first
//! line to close the ring. Multi-stop edge gradients insert extra
//! interpolated lines along their edge; corner arcs blend the incoming
//! edge's end color into the outgoing edge's start color.

use crate::arc::ArcIterator;
use crate::color::Color;
use crate::geometry::BoxMetrics;
use crate::gradient::BorderColors;
use crate::util::lerp_point;
use crate::vertex::LineWriter;
use lyon::math::Point;

/// Color source for one corner's arc steps.
///
/// The polymorphic strategy behind border coloring: corners where the
/// border is absent, a single color, or a blend between the two adjacent
/// edge colors. Built per corner by [`BorderColorMap::for_corner`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderColorMap {
    /// No visible border at this corner.
    None,
    /// Both adjacent edges agree on one color.
    Solid(Color),
    /// Blend from the incoming edge's end color to the outgoing edge's
    /// start color across the arc steps.
    Gradient { from: Color, to: Color },
}

impl BorderColorMap {
    /// The color map for a corner given the box's border colors. Corner `c`
    /// joins edge `(c + 3) % 4` (incoming) to edge `c` (outgoing).
    pub fn for_corner(colors: &BorderColors, corner: usize) -> Self {
        let incoming = colors.edge((corner + 3) % 4);
        let outgoing = colors.edge(corner);
        if !incoming.is_visible() && !outgoing.is_visible() {
            return BorderColorMap::None;
        }
        let from = incoming.last_color();
        let to = outgoing.first_color();
        if from == to {
            BorderColorMap::Solid(from)
        } else {
            BorderColorMap::Gradient { from, to }
        }
    }

    /// Color at an arc step. Sharp corners pass `segments == 0` and get the
    /// outgoing color so the following edge ribbon starts from it.
    pub fn color_at(&self, step: u32, segments: u32) -> Color {
        match self {
            BorderColorMap::None => Color::TRANSPARENT,
            BorderColorMap::Solid(color) => *color,
            BorderColorMap::Gradient { from, to } => {
                if segments == 0 {
                    *to
                } else {
                    from.lerp(*to, step as f32 / segments as f32)
                }
            }
        }
    }
}

/// Whether any border geometry should be emitted at all. A zero-width
/// border is skipped even when its colors are visible, and vice versa.
pub(crate) fn border_visible(metrics: &BoxMetrics, colors: &BorderColors) -> bool {
    metrics.has_border() && colors.is_visible()
}

/// Exact number of lines [`generate_border`] emits.
pub(crate) fn border_line_count(metrics: &BoxMetrics, colors: &BorderColors) -> usize {
    if !border_visible(metrics, colors) {
        return 0;
    }
    let arc_lines: usize = metrics.corners.iter().map(|c| c.border_lines()).sum();
    let edge_lines: usize = (0..4)
        .map(|edge| colors.edge(edge).stops().len().saturating_sub(2))
        .sum();
    arc_lines + edge_lines + 1
}

/// Emits the border ring into `writer`. The writer's buffer must already be
/// sized to hold [`border_line_count`] lines from the current cursor.
pub(crate) fn generate_border(
    writer: &mut LineWriter<'_>,
    metrics: &BoxMetrics,
    colors: &BorderColors,
) {
    if !border_visible(metrics, colors) {
        return;
    }

    let first_line = writer.cursor();
    for corner in 0..4 {
        let map = BorderColorMap::for_corner(colors, corner);
        let c = &metrics.corners[corner];
        if c.sharp {
            let color = map.color_at(0, 0);
            writer.put(
                metrics.outer_quad_corner(corner),
                color,
                metrics.inner_quad_corner(corner),
                color,
            );
        } else {
            let mut arc = ArcIterator::new(c.segments, false);
            loop {
                let color = map.color_at(arc.step(), c.segments);
                writer.put(
                    metrics.outer_corner_point(corner, arc.cos(), arc.sin()),
                    color,
                    metrics.inner_corner_point(corner, arc.cos(), arc.sin()),
                    color,
                );
                if arc.is_done() {
                    break;
                }
                arc.increment();
            }
        }

        emit_edge_stops(writer, metrics, colors, corner);
    }

    // Close the ring with a duplicate of the first line.
    let (a, b) = writer.get_line(first_line);
    writer.put_pair(a, b);
}

/// Extra lines for the internal stops of a multi-stop edge gradient,
/// emitted between the edge's two corner arcs.
pub(crate) fn emit_edge_stops(
    writer: &mut LineWriter<'_>,
    metrics: &BoxMetrics,
    colors: &BorderColors,
    edge: usize,
) {
    let stops = colors.edge(edge).stops();
    if stops.len() <= 2 {
        return;
    }
    let (outer_start, outer_end, inner_start, inner_end) = edge_span(metrics, edge);
    for stop in &stops[1..stops.len() - 1] {
        writer.put(
            lerp_point(outer_start, outer_end, stop.position),
            stop.color,
            lerp_point(inner_start, inner_end, stop.position),
            stop.color,
        );
    }
}

/// The straight run of an edge: from the preceding corner's arc end to the
/// following corner's arc start, on both the outer and inner contours.
pub(crate) fn edge_span(metrics: &BoxMetrics, edge: usize) -> (Point, Point, Point, Point) {
    let from = edge;
    let to = (edge + 1) % 4;
    (
        corner_outer_end(metrics, from),
        corner_outer_start(metrics, to),
        corner_inner_end(metrics, from),
        corner_inner_start(metrics, to),
    )
}

fn corner_outer_start(metrics: &BoxMetrics, corner: usize) -> Point {
    if metrics.corners[corner].sharp {
        metrics.outer_quad_corner(corner)
    } else {
        metrics.outer_corner_point(corner, 1.0, 0.0)
    }
}

fn corner_outer_end(metrics: &BoxMetrics, corner: usize) -> Point {
    if metrics.corners[corner].sharp {
        metrics.outer_quad_corner(corner)
    } else {
        metrics.outer_corner_point(corner, 0.0, 1.0)
    }
}

fn corner_inner_start(metrics: &BoxMetrics, corner: usize) -> Point {
    if metrics.corners[corner].sharp {
        metrics.inner_quad_corner(corner)
    } else {
        metrics.inner_corner_point(corner, 1.0, 0.0)
    }
}

fn corner_inner_end(metrics: &BoxMetrics, corner: usize) -> Point {
    if metrics.corners[corner].sharp {
        metrics.inner_quad_corner(corner)
    } else {
        metrics.inner_corner_point(corner, 0.0, 1.0)
    }
}
