//! The combined box generator: orchestrates the metrics resolver, border
//! and fill generators into one pre-sized vertex buffer.
//!
//! Geometry selection is a small state machine over visibility and
//! regularity. The buffer size is computed in closed form before a single
//! vertex is written ([`box_line_count`] / [`box_vertex_count`]); generation
//! fills exactly that many slots and never reallocates. Callers that
//! pre-size GPU buffers from the counting functions rely on this being
//! bit-exact.

use crate::border::{border_line_count, border_visible, generate_border, BorderColorMap};
use crate::fill::{
    emit_uniform_fill_step, fill_line_count, fill_strategy, generate_fill, FillStrategy,
    ScanOrientation,
};
use crate::geometry::BoxMetrics;
use crate::gradient::{is_gradient_supported, BorderColors, FillGradient};
use crate::metrics::{BorderWidths, BoxShape};
use crate::vertex::{BoxGeometry, LineWriter};
use crate::{ArcIterator, MathRect};
use tracing::{trace, warn};

/// Which generation path a box takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxState {
    /// Nothing visible; zero-length output.
    NoGeometry,
    /// The shape is a plain rectangle, or the border cropped every corner:
    /// rectangle fast path.
    DegenerateRect,
    /// No visible border.
    FillOnly,
    /// No visible fill.
    BorderOnly,
    /// Regular radii and border widths with a fast-path gradient: a single
    /// arc pass emits all four corners and the fill.
    BothUniform,
    /// Everything else: border and fill generated independently and
    /// stitched.
    BothNonUniform,
}

/// Classifies a resolved box into its generation path.
pub fn classify_box(
    metrics: &BoxMetrics,
    colors: &BorderColors,
    fill: &FillGradient,
) -> BoxState {
    let border = border_visible(metrics, colors);
    let fill_visible = fill.is_visible();
    if metrics.outer.is_empty() || (!border && !fill_visible) {
        return BoxState::NoGeometry;
    }
    if metrics.rectangle || metrics.totally_cropped {
        return BoxState::DegenerateRect;
    }
    if !border {
        return BoxState::FillOnly;
    }
    if !fill_visible {
        return BoxState::BorderOnly;
    }
    if metrics.radius_regular && metrics.border_regular && fill.is_fast_fill() {
        return BoxState::BothUniform;
    }
    BoxState::BothNonUniform
}

/// Line layout of one generation call, shared bit-exactly between counting
/// and emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoxPlan {
    pub state: BoxState,
    pub border_lines: usize,
    pub fill_lines: usize,
    /// Degenerate line joining the border and fill strip sections.
    pub stitch: bool,
    /// Zero-width line keeping strip topology valid when a diagonal
    /// non-monochrome fill follows a border and its 45 degree cut does not
    /// land on a border vertex.
    pub bridge: bool,
}

impl BoxPlan {
    pub(crate) fn total_lines(&self) -> usize {
        self.border_lines + self.fill_lines + usize::from(self.stitch) + usize::from(self.bridge)
    }
}

pub(crate) fn plan_box(metrics: &BoxMetrics, colors: &BorderColors, fill: &FillGradient) -> BoxPlan {
    let state = classify_box(metrics, colors, fill);
    match state {
        BoxState::NoGeometry => BoxPlan {
            state,
            border_lines: 0,
            fill_lines: 0,
            stitch: false,
            bridge: false,
        },
        BoxState::DegenerateRect => {
            let rectangle = metrics.degenerate_to_rect();
            section_plan(&rectangle, colors, fill, state)
        }
        BoxState::BothUniform => {
            let segments = metrics.corners[0].segments as usize;
            BoxPlan {
                state,
                border_lines: border_line_count(metrics, colors),
                fill_lines: 2 * segments + 2,
                stitch: true,
                bridge: false,
            }
        }
        _ => section_plan(metrics, colors, fill, state),
    }
}

fn section_plan(
    metrics: &BoxMetrics,
    colors: &BorderColors,
    fill: &FillGradient,
    state: BoxState,
) -> BoxPlan {
    let border_lines = border_line_count(metrics, colors);
    let fill_lines = fill_line_count(metrics, fill);
    let stitch = border_lines > 0 && fill_lines > 0;
    let bridge = stitch
        && !fill.is_monochrome()
        && matches!(
            fill_strategy(metrics, fill),
            FillStrategy::Ordered(ScanOrientation::Diagonal)
        );
    BoxPlan {
        state,
        border_lines,
        fill_lines,
        stitch,
        bridge,
    }
}

/// Exact number of lines a box tessellates to. Each line is two vertices.
pub fn box_line_count(
    rect: &MathRect,
    shape: &BoxShape,
    widths: &BorderWidths,
    colors: &BorderColors,
    fill: &FillGradient,
) -> usize {
    let metrics = BoxMetrics::resolve(rect, shape, widths);
    plan_box(&metrics, colors, fill).total_lines()
}

/// Exact number of vertices a box tessellates to, for pre-sizing buffers.
///
/// # Examples
///
/// ```
/// use kadro::{box_vertex_count, tessellate_box, BorderColors, BorderWidths, BoxShape, Color,
///     FillGradient, MathRect};
/// use lyon::math::point;
///
/// let rect = MathRect::new(point(0.0, 0.0), point(100.0, 60.0));
/// let shape = BoxShape::uniform(8.0);
/// let widths = BorderWidths::uniform(2.0);
/// let colors = BorderColors::solid(Color::BLACK);
/// let fill = FillGradient::solid(Color::WHITE);
///
/// let predicted = box_vertex_count(&rect, &shape, &widths, &colors, &fill);
/// let geometry = tessellate_box(&rect, &shape, &widths, &colors, &fill);
/// assert_eq!(geometry.vertex_count(), predicted);
/// ```
pub fn box_vertex_count(
    rect: &MathRect,
    shape: &BoxShape,
    widths: &BorderWidths,
    colors: &BorderColors,
    fill: &FillGradient,
) -> usize {
    2 * box_line_count(rect, shape, widths, colors, fill)
}

/// Tessellates a box into a fresh [`BoxGeometry`].
///
/// Total over all inputs: degenerate boxes produce simpler or empty
/// geometry, never an error. Passing a gradient whose shape is not
/// supported (see [`is_gradient_supported`]) is a caller contract
/// violation: debug builds assert, release builds log and fall back to the
/// linear interpretation of the stops.
pub fn tessellate_box(
    rect: &MathRect,
    shape: &BoxShape,
    widths: &BorderWidths,
    colors: &BorderColors,
    fill: &FillGradient,
) -> BoxGeometry {
    let mut geometry = BoxGeometry::new();
    tessellate_box_into(&mut geometry, rect, shape, widths, colors, fill);
    geometry
}

/// Tessellates a box into an existing geometry, reusing its allocation.
pub fn tessellate_box_into(
    geometry: &mut BoxGeometry,
    rect: &MathRect,
    shape: &BoxShape,
    widths: &BorderWidths,
    colors: &BorderColors,
    fill: &FillGradient,
) {
    debug_assert!(
        is_gradient_supported(fill.shape()),
        "unsupported gradient shape {:?}: consult is_gradient_supported before tessellating",
        fill.shape(),
    );
    if !is_gradient_supported(fill.shape()) {
        warn!(
            shape = ?fill.shape(),
            "unsupported gradient shape, falling back to its linear interpretation"
        );
    }

    let metrics = BoxMetrics::resolve(rect, shape, widths);
    let plan = plan_box(&metrics, colors, fill);
    trace!(state = ?plan.state, lines = plan.total_lines(), "tessellating box");

    geometry.reset_lines(plan.total_lines());
    if plan.total_lines() == 0 {
        return;
    }

    let mut writer = LineWriter::new(geometry);
    match plan.state {
        BoxState::NoGeometry => {}
        BoxState::DegenerateRect => {
            let rectangle = metrics.degenerate_to_rect();
            emit_sections(&mut writer, &rectangle, colors, fill, &plan);
        }
        BoxState::BothUniform => emit_uniform(&mut writer, &metrics, colors, fill, &plan),
        _ => emit_sections(&mut writer, &metrics, colors, fill, &plan),
    }
    debug_assert_eq!(
        writer.cursor(),
        plan.total_lines(),
        "generation must fill the buffer exactly"
    );
}

/// Border section, optional stitch and bridge, fill section. The stitch is
/// patched after the fill exists so it can join the two sections' actual
/// end/start vertices.
fn emit_sections(
    writer: &mut LineWriter<'_>,
    metrics: &BoxMetrics,
    colors: &BorderColors,
    fill: &FillGradient,
    plan: &BoxPlan,
) {
    generate_border(writer, metrics, colors);
    let stitch_line = writer.cursor();
    if plan.stitch {
        writer.skip(1);
    }
    let bridge_line = writer.cursor();
    if plan.bridge {
        writer.skip(1);
    }
    let fill_start = writer.cursor();
    generate_fill(writer, metrics, fill);

    if plan.stitch {
        let border_last = writer.get_line(stitch_line - 1).1;
        let fill_first = writer.get_line(fill_start).0;
        writer.put_pair_at(stitch_line, border_last, fill_first);
    }
    if plan.bridge {
        // Zero-width line at the fill's diagonal cut.
        let fill_first = writer.get_line(fill_start).0;
        writer.put_pair_at(bridge_line, fill_first, fill_first);
    }
}

/// The uniform fast path: one arc-iterator pass writes all four border
/// corners (mirrored through the shared samples) and the fill's
/// arc-following lines into precomputed slots.
fn emit_uniform(
    writer: &mut LineWriter<'_>,
    metrics: &BoxMetrics,
    colors: &BorderColors,
    fill: &FillGradient,
    plan: &BoxPlan,
) {
    let segments = metrics.corners[0].segments;
    let n = segments as usize;

    let mut corner_base = [0usize; 4];
    let mut extras_base = [0usize; 4];
    let mut base = 0usize;
    for corner in 0..4 {
        corner_base[corner] = base;
        base += n + 1;
        extras_base[corner] = base;
        base += colors.edge(corner).stops().len().saturating_sub(2);
    }
    let close_line = base;
    debug_assert_eq!(close_line + 1, plan.border_lines);
    let stitch_line = plan.border_lines;
    let fill_base = stitch_line + 1;

    let maps = [
        BorderColorMap::for_corner(colors, 0),
        BorderColorMap::for_corner(colors, 1),
        BorderColorMap::for_corner(colors, 2),
        BorderColorMap::for_corner(colors, 3),
    ];

    let mut arc = ArcIterator::new(segments, false);
    loop {
        let (cos, sin) = (arc.cos(), arc.sin());
        let step = arc.step() as usize;
        for corner in 0..4 {
            let color = maps[corner].color_at(arc.step(), segments);
            writer.put_at(
                corner_base[corner] + step,
                metrics.outer_corner_point(corner, cos, sin),
                color,
                metrics.inner_corner_point(corner, cos, sin),
                color,
            );
        }
        emit_uniform_fill_step(writer, metrics, fill, fill_base, n, step, cos, sin);
        if arc.is_done() {
            break;
        }
        arc.increment();
    }

    for edge in 0..4 {
        writer.jump_to(extras_base[edge]);
        crate::border::emit_edge_stops(writer, metrics, colors, edge);
    }

    writer.jump_to(close_line);
    let (first_a, first_b) = writer.get_line(0);
    writer.put_pair(first_a, first_b);

    let border_last = writer.get_line(close_line).1;
    let fill_first = writer.get_line(fill_base).0;
    writer.put_pair_at(stitch_line, border_last, fill_first);

    writer.jump_to(fill_base + plan.fill_lines);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::metrics::CornerRadius;
    use lyon::math::point;

    fn rect(width: f32, height: f32) -> MathRect {
        MathRect::new(point(0.0, 0.0), point(width, height))
    }

    fn black_border() -> BorderColors {
        BorderColors::solid(Color::BLACK)
    }

    fn white_fill() -> FillGradient {
        FillGradient::solid(Color::WHITE)
    }

    #[test]
    fn classification_matrix() {
        let r = rect(100.0, 60.0);
        let rounded = BoxShape::uniform(8.0);
        let thin = BorderWidths::uniform(2.0);

        let classify = |shape: &BoxShape, widths: &BorderWidths, colors: &BorderColors, fill: &FillGradient| {
            let metrics = BoxMetrics::resolve(&r, shape, widths);
            classify_box(&metrics, colors, fill)
        };

        assert_eq!(
            classify(&rounded, &thin, &BorderColors::none(), &FillGradient::invisible()),
            BoxState::NoGeometry
        );
        assert_eq!(
            classify(&BoxShape::rectangle(), &thin, &black_border(), &white_fill()),
            BoxState::DegenerateRect
        );
        assert_eq!(
            classify(&rounded, &BorderWidths::uniform(12.0), &black_border(), &white_fill()),
            BoxState::DegenerateRect,
            "fully cropped boxes degrade to the rectangle path"
        );
        assert_eq!(
            classify(&rounded, &BorderWidths::none(), &black_border(), &white_fill()),
            BoxState::FillOnly
        );
        assert_eq!(
            classify(&rounded, &thin, &black_border(), &FillGradient::invisible()),
            BoxState::BorderOnly
        );
        assert_eq!(
            classify(&rounded, &thin, &black_border(), &white_fill()),
            BoxState::BothUniform
        );
        assert_eq!(
            classify(
                &rounded,
                &BorderWidths::new(1.0, 2.0, 1.0, 2.0),
                &black_border(),
                &white_fill()
            ),
            BoxState::BothNonUniform
        );
        let multi_stop = FillGradient::vertical([
            (0.0, Color::BLACK),
            (0.5, Color::rgb(128, 0, 0)),
            (1.0, Color::WHITE),
        ]);
        assert_eq!(
            classify(&rounded, &thin, &black_border(), &multi_stop),
            BoxState::BothNonUniform
        );

        let empty = BoxMetrics::resolve(&rect(0.0, 0.0), &rounded, &thin);
        assert_eq!(
            classify_box(&empty, &black_border(), &white_fill()),
            BoxState::NoGeometry
        );
    }

    #[test]
    fn uniform_emission_matches_prediction() {
        let r = rect(100.0, 60.0);
        let shape = BoxShape::uniform(10.0);
        let widths = BorderWidths::uniform(3.0);
        let colors = black_border();
        let fill = FillGradient::vertical([(0.0, Color::BLACK), (1.0, Color::WHITE)]);
        let geometry = tessellate_box(&r, &shape, &widths, &colors, &fill);
        assert_eq!(
            geometry.vertex_count(),
            box_vertex_count(&r, &shape, &widths, &colors, &fill)
        );
        // 6 segments at radius 10: ring 4*7+1, stitch 1, fill 2*6+2
        assert_eq!(geometry.line_count(), 29 + 1 + 14);
    }

    #[test]
    fn non_uniform_emission_matches_prediction() {
        let r = rect(140.0, 90.0);
        let shape = BoxShape {
            top_left: CornerRadius::circular(4.0),
            top_right: CornerRadius::new(18.0, 9.0),
            bottom_right: CornerRadius::circular(12.0),
            bottom_left: CornerRadius::ZERO,
            ..BoxShape::rectangle()
        };
        let widths = BorderWidths::new(1.0, 3.0, 2.0, 4.0);
        let colors = black_border();
        let fill = FillGradient::vertical([
            (0.0, Color::rgb(10, 20, 30)),
            (0.4, Color::rgb(40, 50, 60)),
            (1.0, Color::rgb(70, 80, 90)),
        ]);
        let geometry = tessellate_box(&r, &shape, &widths, &colors, &fill);
        assert_eq!(
            geometry.vertex_count(),
            box_vertex_count(&r, &shape, &widths, &colors, &fill)
        );
    }

    #[test]
    fn stitch_line_joins_the_sections() {
        let r = rect(100.0, 60.0);
        let shape = BoxShape::uniform(8.0);
        let widths = BorderWidths::new(2.0, 2.0, 3.0, 2.0); // irregular: sectioned path
        let colors = black_border();
        let fill = white_fill();
        let metrics = BoxMetrics::resolve(&r, &shape, &widths);
        let geometry = tessellate_box(&r, &shape, &widths, &colors, &fill);

        let border_lines = border_line_count(&metrics, &colors);
        let stitch = geometry.get_line(border_lines);
        let border_last = geometry.get_line(border_lines - 1);
        let fill_first = geometry.get_line(border_lines + 1);
        assert_eq!(stitch.0, border_last.1);
        assert_eq!(stitch.1, fill_first.0);
    }

    #[test]
    fn diagonal_fill_with_border_inserts_a_bridging_line() {
        let r = rect(100.0, 60.0);
        let shape = BoxShape::uniform(8.0);
        let widths = BorderWidths::uniform(2.0);
        let colors = black_border();
        let diagonal = FillGradient::diagonal([(0.0, Color::BLACK), (1.0, Color::WHITE)]);
        let metrics = BoxMetrics::resolve(&r, &shape, &widths);

        let plan = plan_box(&metrics, &colors, &diagonal);
        assert!(plan.bridge);
        let geometry = tessellate_box(&r, &shape, &widths, &colors, &diagonal);
        assert_eq!(geometry.line_count(), plan.total_lines());
        // The bridging line is zero-width
        let bridge = geometry.get_line(plan.border_lines + 1);
        assert_eq!(bridge.0, bridge.1);

        // Without a border there is no bridge: fill-only diagonal boxes
        // have a plain stitchless layout.
        let borderless = plan_box(&metrics_without_border(&r, &shape), &colors, &diagonal);
        assert!(!borderless.bridge);
    }

    fn metrics_without_border(rect: &MathRect, shape: &BoxShape) -> BoxMetrics {
        BoxMetrics::resolve(rect, shape, &BorderWidths::none())
    }

    #[test]
    fn empty_inputs_produce_zero_vertices() {
        let geometry = tessellate_box(
            &rect(0.0, 0.0),
            &BoxShape::uniform(8.0),
            &BorderWidths::uniform(2.0),
            &black_border(),
            &white_fill(),
        );
        assert!(geometry.is_empty());

        let invisible = tessellate_box(
            &rect(100.0, 60.0),
            &BoxShape::uniform(8.0),
            &BorderWidths::none(),
            &black_border(),
            &FillGradient::invisible(),
        );
        assert!(invisible.is_empty());
    }

    #[test]
    fn reuse_clears_previous_output() {
        let mut geometry = BoxGeometry::new();
        tessellate_box_into(
            &mut geometry,
            &rect(100.0, 60.0),
            &BoxShape::uniform(8.0),
            &BorderWidths::uniform(2.0),
            &black_border(),
            &white_fill(),
        );
        let first = geometry.vertex_count();
        assert!(first > 0);
        tessellate_box_into(
            &mut geometry,
            &rect(50.0, 30.0),
            &BoxShape::rectangle(),
            &BorderWidths::none(),
            &BorderColors::none(),
            &white_fill(),
        );
        assert_eq!(geometry.line_count(), 2);
    }
}
