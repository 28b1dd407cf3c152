//! Interior fill generation.
//!
//! Two paths produce the fill's line strip:
//!
//! - **Random/uniform** (`generate_random_fill`): two lines spanning the
//!   inner quad. Valid for monochrome fills and full-span two-stop
//!   axis-aligned gradients on radius-regular boxes; at rounded corners the
//!   small overdraw lands inside the border ribbon region.
//! - **Ordered** (`generate_ordered_fill`): walks the fill contour with two
//!   monotone chains and merges contour vertices with gradient stops in
//!   increasing parametric order, so arbitrary stop sequences and diagonal
//!   gradients color exactly.
//!
//! Both paths emit a line count that is pre-computed in closed form; the
//! ordered path pads exact-coincidence shortfalls with duplicate lines so
//! the prediction always holds.

use crate::arc::ArcIterator;
use crate::geometry::{BoxMetrics, BOTTOM_LEFT, BOTTOM_RIGHT, TOP_LEFT, TOP_RIGHT};
use crate::gradient::{FillGradient, GradientDirection, GradientStop};
use crate::util::lerp_point;
use crate::vertex::LineWriter;
use crate::MathRect;
use lyon::math::{point, Point};
use smallvec::SmallVec;

/// Scan axis of the ordered fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanOrientation {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
    /// Along the top-left to bottom-right diagonal.
    Diagonal,
}

pub(crate) fn scan_orientation(direction: GradientDirection) -> ScanOrientation {
    match direction {
        GradientDirection::Horizontal => ScanOrientation::Horizontal,
        GradientDirection::Diagonal => ScanOrientation::Diagonal,
        _ => ScanOrientation::Vertical,
    }
}

/// Which fill path a gradient takes on the given metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FillStrategy {
    Random,
    Ordered(ScanOrientation),
}

pub(crate) fn fill_strategy(metrics: &BoxMetrics, gradient: &FillGradient) -> FillStrategy {
    if gradient.is_fast_fill() && metrics.radius_regular {
        FillStrategy::Random
    } else {
        FillStrategy::Ordered(scan_orientation(gradient.direction()))
    }
}

/// Exact number of lines the fill emits for these metrics.
pub(crate) fn fill_line_count(metrics: &BoxMetrics, gradient: &FillGradient) -> usize {
    if !gradient.is_visible() {
        return 0;
    }
    match fill_strategy(metrics, gradient) {
        FillStrategy::Random => 2,
        FillStrategy::Ordered(orientation) => {
            ordered_fill_line_count(metrics, gradient, orientation)
        }
    }
}

/// Closed-form line count of the ordered path.
///
/// The merge emits one cap line, one line per chain advance, and one line
/// per interior gradient stop. Vertically and horizontally the two chains
/// partition the contour points; diagonally the two split corners each
/// contribute their shared sample to both chains.
pub(crate) fn ordered_fill_line_count(
    metrics: &BoxMetrics,
    gradient: &FillGradient,
    orientation: ScanOrientation,
) -> usize {
    let points: usize = metrics.corners.iter().map(|c| c.contour_points()).sum();
    let stops = gradient.inner_stop_count();
    match orientation {
        ScanOrientation::Diagonal => points + 1 + stops,
        _ => points - 1 + stops,
    }
}

/// Emits the whole fill for these metrics, dispatching on strategy.
pub(crate) fn generate_fill(
    writer: &mut LineWriter<'_>,
    metrics: &BoxMetrics,
    gradient: &FillGradient,
) {
    if !gradient.is_visible() {
        return;
    }
    match fill_strategy(metrics, gradient) {
        FillStrategy::Random => generate_random_fill(writer, metrics, gradient),
        FillStrategy::Ordered(orientation) => {
            let expected = ordered_fill_line_count(metrics, gradient, orientation);
            generate_ordered_fill(writer, metrics, gradient, orientation, expected);
        }
    }
}

/// The two-line fast path: boundary lines spanning the inner quad with
/// interpolated endpoint colors.
pub(crate) fn generate_random_fill(
    writer: &mut LineWriter<'_>,
    metrics: &BoxMetrics,
    gradient: &FillGradient,
) {
    let inner = &metrics.inner;
    let start = gradient.color_at(0.0);
    let end = gradient.color_at(1.0);
    if gradient.direction() == GradientDirection::Horizontal {
        writer.put(
            point(inner.min.x, inner.min.y),
            start,
            point(inner.min.x, inner.max.y),
            start,
        );
        writer.put(
            point(inner.max.x, inner.min.y),
            end,
            point(inner.max.x, inner.max.y),
            end,
        );
    } else {
        writer.put(
            point(inner.min.x, inner.min.y),
            start,
            point(inner.max.x, inner.min.y),
            start,
        );
        writer.put(
            point(inner.min.x, inner.max.y),
            end,
            point(inner.max.x, inner.max.y),
            end,
        );
    }
}

/// Parametric value of a point along the scan axis, normalized over the
/// inner quad. Total: degenerate quads map everything to 0.
pub(crate) fn scan_value(orientation: ScanOrientation, inner: &MathRect, p: Point) -> f32 {
    match orientation {
        ScanOrientation::Vertical => {
            let h = inner.height();
            if h <= 0.0 {
                0.0
            } else {
                (p.y - inner.min.y) / h
            }
        }
        ScanOrientation::Horizontal => {
            let w = inner.width();
            if w <= 0.0 {
                0.0
            } else {
                (p.x - inner.min.x) / w
            }
        }
        ScanOrientation::Diagonal => {
            let span = inner.width() + inner.height();
            if span <= 0.0 {
                0.0
            } else {
                ((p.x - inner.min.x) + (p.y - inner.min.y)) / span
            }
        }
    }
}

/// One step of the uniform single-pass fill: the top-section line at
/// `fill_base + step` and its mirrored bottom-section line, sharing arc
/// samples with the border pass of the same iterator. Horizontal gradients
/// swap the axis roles. Mirroring is exact because the caller guarantees
/// radius-regular metrics.
#[allow(clippy::too_many_arguments)]
pub(crate) fn emit_uniform_fill_step(
    writer: &mut LineWriter<'_>,
    metrics: &BoxMetrics,
    gradient: &FillGradient,
    fill_base: usize,
    segments: usize,
    step: usize,
    cos: f32,
    sin: f32,
) {
    let inner = metrics.inner;
    if gradient.direction() == GradientDirection::Horizontal {
        let top_left = metrics.inner_corner_point(TOP_LEFT, cos, sin);
        let bottom_left = point(top_left.x, inner.min.y + (inner.max.y - top_left.y));
        let color = gradient.color_at(scan_value(ScanOrientation::Horizontal, &inner, top_left));
        writer.put_at(fill_base + step, top_left, color, bottom_left, color);

        let top_right = metrics.inner_corner_point(TOP_RIGHT, cos, sin);
        let bottom_right = point(top_right.x, inner.min.y + (inner.max.y - top_right.y));
        let color = gradient.color_at(scan_value(ScanOrientation::Horizontal, &inner, top_right));
        writer.put_at(
            fill_base + segments + 1 + step,
            top_right,
            color,
            bottom_right,
            color,
        );
    } else {
        let top_right = metrics.inner_corner_point(TOP_RIGHT, cos, sin);
        let top_left = point(inner.min.x + (inner.max.x - top_right.x), top_right.y);
        let color = gradient.color_at(scan_value(ScanOrientation::Vertical, &inner, top_right));
        writer.put_at(fill_base + step, top_left, color, top_right, color);

        let bottom_right = metrics.inner_corner_point(BOTTOM_RIGHT, cos, sin);
        let bottom_left = point(inner.min.x + (inner.max.x - bottom_right.x), bottom_right.y);
        let color = gradient.color_at(scan_value(ScanOrientation::Vertical, &inner, bottom_right));
        writer.put_at(
            fill_base + segments + 1 + step,
            bottom_left,
            color,
            bottom_right,
            color,
        );
    }
}

/// One contour walk over a corner.
#[derive(Debug, Clone, Copy)]
struct ChainWalk {
    corner: usize,
    kind: WalkKind,
}

#[derive(Debug, Clone, Copy)]
enum WalkKind {
    /// Sharp or cropped corner: the single pinned inner-quad point.
    Point,
    /// Full quarter walk; `inverted` reverses the rotational direction.
    Arc { inverted: bool },
    /// Partial walk over samples `from..=to` of a non-inverted iterator;
    /// `from > to` walks backward.
    ArcRange { from: u32, to: u32 },
}

fn corner_walk(metrics: &BoxMetrics, corner: usize, inverted: bool) -> ChainWalk {
    let c = &metrics.corners[corner];
    if c.sharp || c.cropped {
        ChainWalk {
            corner,
            kind: WalkKind::Point,
        }
    } else {
        ChainWalk {
            corner,
            kind: WalkKind::Arc { inverted },
        }
    }
}

fn corner_range_walk(metrics: &BoxMetrics, corner: usize, from: u32, to: u32) -> ChainWalk {
    let c = &metrics.corners[corner];
    if c.sharp || c.cropped {
        ChainWalk {
            corner,
            kind: WalkKind::Point,
        }
    } else {
        ChainWalk {
            corner,
            kind: WalkKind::ArcRange { from, to },
        }
    }
}

type WalkVec = SmallVec<[ChainWalk; 3]>;

/// The two monotone contour chains for a scan orientation.
fn chains_for(metrics: &BoxMetrics, orientation: ScanOrientation) -> (WalkVec, WalkVec) {
    match orientation {
        ScanOrientation::Vertical => (
            SmallVec::from_slice(&[
                corner_walk(metrics, TOP_LEFT, true),
                corner_walk(metrics, BOTTOM_LEFT, true),
            ]),
            SmallVec::from_slice(&[
                corner_walk(metrics, TOP_RIGHT, false),
                corner_walk(metrics, BOTTOM_RIGHT, false),
            ]),
        ),
        ScanOrientation::Horizontal => (
            SmallVec::from_slice(&[
                corner_walk(metrics, TOP_LEFT, false),
                corner_walk(metrics, TOP_RIGHT, false),
            ]),
            SmallVec::from_slice(&[
                corner_walk(metrics, BOTTOM_LEFT, true),
                corner_walk(metrics, BOTTOM_RIGHT, true),
            ]),
        ),
        ScanOrientation::Diagonal => {
            let split_tl = diagonal_extreme(metrics, TOP_LEFT, false);
            let split_br = diagonal_extreme(metrics, BOTTOM_RIGHT, true);
            let tl_segments = metrics.corners[TOP_LEFT].segments;
            let br_segments = metrics.corners[BOTTOM_RIGHT].segments;
            (
                SmallVec::from_slice(&[
                    corner_range_walk(metrics, TOP_LEFT, split_tl, 0),
                    corner_walk(metrics, BOTTOM_LEFT, true),
                    corner_range_walk(metrics, BOTTOM_RIGHT, br_segments, split_br),
                ]),
                SmallVec::from_slice(&[
                    corner_range_walk(metrics, TOP_LEFT, split_tl, tl_segments),
                    corner_walk(metrics, TOP_RIGHT, false),
                    corner_range_walk(metrics, BOTTOM_RIGHT, 0, split_br),
                ]),
            )
        }
    }
}

/// Sample index of the diagonally extreme point on a corner's inner arc:
/// the minimum parametric value for the top-left corner, the maximum for
/// the bottom-right. Both diagonal chains start/end there.
fn diagonal_extreme(metrics: &BoxMetrics, corner: usize, maximize: bool) -> u32 {
    let c = &metrics.corners[corner];
    if c.sharp || c.cropped {
        return 0;
    }
    let mut arc = ArcIterator::new(c.segments, false);
    let mut best_step = 0;
    let mut best_value = scan_value(
        ScanOrientation::Diagonal,
        &metrics.inner,
        metrics.inner_corner_point(corner, arc.cos(), arc.sin()),
    );
    while !arc.is_done() {
        arc.increment();
        let value = scan_value(
            ScanOrientation::Diagonal,
            &metrics.inner,
            metrics.inner_corner_point(corner, arc.cos(), arc.sin()),
        );
        let better = if maximize {
            value > best_value
        } else {
            value < best_value
        };
        if better {
            best_value = value;
            best_step = arc.step();
        }
    }
    best_step
}

/// Lazy stepper over one contour chain, tracking the current and next
/// contour points.
struct ContourChain<'a> {
    metrics: &'a BoxMetrics,
    walks: WalkVec,
    walk_index: usize,
    cursor: Option<WalkCursor>,
    current: Point,
    lookahead: Option<Point>,
}

struct WalkCursor {
    arc: ArcIterator,
    target: u32,
    forward: bool,
}

impl<'a> ContourChain<'a> {
    fn new(metrics: &'a BoxMetrics, walks: WalkVec) -> Self {
        let mut chain = Self {
            metrics,
            walks,
            walk_index: 0,
            cursor: None,
            current: point(0.0, 0.0),
            lookahead: None,
        };
        chain.current = chain.produce().unwrap_or_else(|| point(0.0, 0.0));
        chain.lookahead = chain.produce();
        chain
    }

    fn current(&self) -> Point {
        self.current
    }

    fn next_point(&self) -> Option<Point> {
        self.lookahead
    }

    fn advance(&mut self) -> bool {
        match self.lookahead {
            Some(next) => {
                self.current = next;
                self.lookahead = self.produce();
                true
            }
            None => false,
        }
    }

    /// Interpolates along the current contour segment to the target scan
    /// value; used to place gradient-stop lines between contour vertices.
    fn point_toward(&self, target: f32, orientation: ScanOrientation, inner: &MathRect) -> Point {
        let Some(next) = self.lookahead else {
            return self.current;
        };
        let current_value = scan_value(orientation, inner, self.current);
        let next_value = scan_value(orientation, inner, next);
        if next_value <= current_value {
            return self.current;
        }
        let s = ((target - current_value) / (next_value - current_value)).clamp(0.0, 1.0);
        lerp_point(self.current, next, s)
    }

    fn produce(&mut self) -> Option<Point> {
        loop {
            if self.walk_index >= self.walks.len() {
                return None;
            }
            let walk = self.walks[self.walk_index];

            let walk_finished = match self.cursor.as_ref() {
                Some(cursor) => cursor.arc.step() == cursor.target,
                None => false,
            };
            if walk_finished {
                self.cursor = None;
                self.walk_index += 1;
                continue;
            }

            if let Some(cursor) = self.cursor.as_mut() {
                if cursor.forward {
                    cursor.arc.increment();
                } else {
                    cursor.arc.decrement();
                }
                let (cos, sin) = (cursor.arc.cos(), cursor.arc.sin());
                return Some(self.metrics.inner_corner_point(walk.corner, cos, sin));
            }

            // Start the walk at its first sample.
            match walk.kind {
                WalkKind::Point => {
                    self.walk_index += 1;
                    return Some(self.metrics.inner_quad_corner(walk.corner));
                }
                WalkKind::Arc { inverted } => {
                    let arc =
                        ArcIterator::new(self.metrics.corners[walk.corner].segments, inverted);
                    let sample = self
                        .metrics
                        .inner_corner_point(walk.corner, arc.cos(), arc.sin());
                    self.cursor = Some(WalkCursor {
                        target: arc.segments(),
                        forward: true,
                        arc,
                    });
                    return Some(sample);
                }
                WalkKind::ArcRange { from, to } => {
                    let mut arc =
                        ArcIterator::new(self.metrics.corners[walk.corner].segments, false);
                    for _ in 0..from {
                        arc.increment();
                    }
                    let sample = self
                        .metrics
                        .inner_corner_point(walk.corner, arc.cos(), arc.sin());
                    self.cursor = Some(WalkCursor {
                        target: to,
                        forward: to >= from,
                        arc,
                    });
                    return Some(sample);
                }
            }
        }
    }
}

/// The ordered fill: merges contour vertices and gradient stops in
/// increasing parametric order.
///
/// Emits the cap line, then per iteration any stop lines strictly below the
/// next contour value followed by the contour line of the advanced chain.
/// Stops that coincide exactly with a contour value are covered by the
/// contour line itself; the resulting shortfall is padded with duplicates
/// so `expected_lines` is always met.
pub(crate) fn generate_ordered_fill(
    writer: &mut LineWriter<'_>,
    metrics: &BoxMetrics,
    gradient: &FillGradient,
    orientation: ScanOrientation,
    expected_lines: usize,
) {
    let inner = metrics.inner;
    let start_line = writer.cursor();
    let (walks_a, walks_b) = chains_for(metrics, orientation);
    let mut a = ContourChain::new(metrics, walks_a);
    let mut b = ContourChain::new(metrics, walks_b);

    let stops: SmallVec<[GradientStop; 4]> = gradient
        .stops()
        .iter()
        .filter(|stop| stop.position > 0.0 && stop.position < 1.0)
        .copied()
        .collect();
    let mut stop_index = 0;

    let color_of = |p: Point| gradient.color_at(scan_value(orientation, &inner, p));

    writer.put(
        a.current(),
        color_of(a.current()),
        b.current(),
        color_of(b.current()),
    );

    loop {
        let next_a = a.next_point().map(|p| scan_value(orientation, &inner, p));
        let next_b = b.next_point().map(|p| scan_value(orientation, &inner, p));
        let target = match (next_a, next_b) {
            (None, None) => break,
            (Some(va), None) => va,
            (None, Some(vb)) => vb,
            (Some(va), Some(vb)) => va.min(vb),
        };

        while stop_index < stops.len() {
            let stop = stops[stop_index];
            if stop.position < target {
                writer.put(
                    a.point_toward(stop.position, orientation, &inner),
                    stop.color,
                    b.point_toward(stop.position, orientation, &inner),
                    stop.color,
                );
                stop_index += 1;
            } else if stop.position == target {
                // Exact symmetry point: the contour line lands on the stop.
                stop_index += 1;
            } else {
                break;
            }
        }

        match (next_a, next_b) {
            (Some(va), Some(vb)) if va <= vb => {
                a.advance();
            }
            (Some(_), None) => {
                a.advance();
            }
            _ => {
                b.advance();
            }
        }
        writer.put(
            a.current(),
            color_of(a.current()),
            b.current(),
            color_of(b.current()),
        );
    }

    // Stops past the last contour value collapse onto the closing line.
    while stop_index < stops.len() {
        let stop = stops[stop_index];
        writer.put(a.current(), stop.color, b.current(), stop.color);
        stop_index += 1;
    }

    writer.pad_to(start_line + expected_lines);
}
