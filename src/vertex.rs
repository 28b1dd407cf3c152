//! Output vertex formats and buffers.
//!
//! Geometry is emitted as *line pairs*: every line contributes two vertices,
//! and consecutive lines form a triangle strip ("ladder"). Degenerate lines
//! (zero area — stitching, bridging, and trailing padding) are part of the
//! contract and must be ignored by consumers, which triangle strips do for
//! free.

use crate::color::Color;
use bytemuck::Zeroable;
use lyon::math::Point;

/// A position-plus-color vertex: 2 floats and 4 8-bit channels, 12 bytes.
///
/// The layout is `#[repr(C)]` and Pod so a whole buffer can be uploaded with
/// `bytemuck::cast_slice`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 2],
    pub color: [u8; 4],
}

impl ColorVertex {
    pub(crate) fn new(position: Point, color: Color) -> Self {
        Self {
            position: [position.x, position.y],
            color: color.to_array(),
        }
    }
}

/// A position-only vertex, used for stencil-clip masks.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PositionVertex {
    pub position: [f32; 2],
}

impl PositionVertex {
    pub(crate) fn new(position: Point) -> Self {
        Self {
            position: [position.x, position.y],
        }
    }
}

/// The tessellated output of a box: a pre-sized line-pair vertex buffer.
///
/// The buffer is allocated to the exact size predicted by
/// [`crate::box_vertex_count`] before any line is written; generation never
/// grows it and never writes past it.
///
/// # Examples
///
/// ```
/// use kadro::{tessellate_box, BorderColors, BorderWidths, BoxShape, Color, FillGradient, MathRect};
/// use lyon::math::point;
///
/// let rect = MathRect::new(point(0.0, 0.0), point(200.0, 120.0));
/// let geometry = tessellate_box(
///     &rect,
///     &BoxShape::uniform(8.0),
///     &BorderWidths::uniform(2.0),
///     &BorderColors::solid(Color::BLACK),
///     &FillGradient::solid(Color::rgb(240, 240, 240)),
/// );
/// assert_eq!(geometry.vertex_count() % 2, 0);
/// assert_eq!(geometry.as_bytes().len(), geometry.vertex_count() * 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxGeometry {
    vertices: Vec<ColorVertex>,
}

impl BoxGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The emitted vertices, two per line.
    pub fn vertices(&self) -> &[ColorVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn line_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertex buffer as raw bytes, ready for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Sizes the buffer to exactly `lines` zeroed line pairs. The single
    /// allocation point: everything after this writes by slot.
    pub(crate) fn reset_lines(&mut self, lines: usize) {
        self.vertices.clear();
        self.vertices
            .resize(lines * 2, ColorVertex::zeroed());
    }

    pub(crate) fn set_line(&mut self, line: usize, a: ColorVertex, b: ColorVertex) {
        debug_assert!(line * 2 + 1 < self.vertices.len(), "line slot out of range");
        self.vertices[line * 2] = a;
        self.vertices[line * 2 + 1] = b;
    }

    pub(crate) fn get_line(&self, line: usize) -> (ColorVertex, ColorVertex) {
        (self.vertices[line * 2], self.vertices[line * 2 + 1])
    }
}

/// Cursor over a pre-sized [`BoxGeometry`], writing one line at a time.
pub(crate) struct LineWriter<'a> {
    geometry: &'a mut BoxGeometry,
    cursor: usize,
}

impl<'a> LineWriter<'a> {
    pub(crate) fn new(geometry: &'a mut BoxGeometry) -> Self {
        Self {
            geometry,
            cursor: 0,
        }
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Writes the next line at the cursor.
    pub(crate) fn put(&mut self, a: Point, color_a: Color, b: Point, color_b: Color) {
        self.geometry.set_line(
            self.cursor,
            ColorVertex::new(a, color_a),
            ColorVertex::new(b, color_b),
        );
        self.cursor += 1;
    }

    /// Writes an already-built vertex pair at the cursor.
    pub(crate) fn put_pair(&mut self, a: ColorVertex, b: ColorVertex) {
        self.geometry.set_line(self.cursor, a, b);
        self.cursor += 1;
    }

    /// Writes a line into an arbitrary slot without moving the cursor; the
    /// uniform single-pass path fills four corners and the fill section from
    /// one arc walk this way.
    pub(crate) fn put_at(&mut self, line: usize, a: Point, color_a: Color, b: Point, color_b: Color) {
        self.geometry.set_line(
            line,
            ColorVertex::new(a, color_a),
            ColorVertex::new(b, color_b),
        );
    }

    /// Writes an already-built vertex pair into an arbitrary slot without
    /// moving the cursor; stitch and bridge lines are patched this way once
    /// both neighboring sections exist.
    pub(crate) fn put_pair_at(&mut self, line: usize, a: ColorVertex, b: ColorVertex) {
        self.geometry.set_line(line, a, b);
    }

    /// Skips slots (stitch/bridge placeholders patched later).
    pub(crate) fn skip(&mut self, lines: usize) {
        self.cursor += lines;
    }

    pub(crate) fn jump_to(&mut self, line: usize) {
        self.cursor = line;
    }

    /// Duplicates the previous line into every slot up to `line`. Ordered
    /// fills use this to pad out exact-coincidence shortfalls so the
    /// pre-computed count is always met.
    pub(crate) fn pad_to(&mut self, line: usize) {
        if self.cursor == 0 {
            self.cursor = self.cursor.max(line);
            return;
        }
        while self.cursor < line {
            let (a, b) = self.geometry.get_line(self.cursor - 1);
            self.geometry.set_line(self.cursor, a, b);
            self.cursor += 1;
        }
    }

    pub(crate) fn get_line(&self, line: usize) -> (ColorVertex, ColorVertex) {
        self.geometry.get_line(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon::math::point;

    #[test]
    fn vertex_layout_is_12_bytes() {
        assert_eq!(std::mem::size_of::<ColorVertex>(), 12);
        assert_eq!(std::mem::size_of::<PositionVertex>(), 8);
    }

    #[test]
    fn writer_fills_presized_buffer() {
        let mut geometry = BoxGeometry::new();
        geometry.reset_lines(2);
        let mut writer = LineWriter::new(&mut geometry);
        writer.put(point(0.0, 0.0), Color::BLACK, point(1.0, 0.0), Color::BLACK);
        writer.put(point(0.0, 1.0), Color::WHITE, point(1.0, 1.0), Color::WHITE);
        assert_eq!(writer.cursor(), 2);
        assert_eq!(geometry.vertex_count(), 4);
        assert_eq!(geometry.vertices()[3].position, [1.0, 1.0]);
    }

    #[test]
    fn pad_duplicates_the_last_line() {
        let mut geometry = BoxGeometry::new();
        geometry.reset_lines(3);
        let mut writer = LineWriter::new(&mut geometry);
        writer.put(point(0.0, 0.0), Color::BLACK, point(1.0, 0.0), Color::BLACK);
        writer.pad_to(3);
        assert_eq!(writer.cursor(), 3);
        let (a, b) = geometry.get_line(2);
        assert_eq!(a.position, [0.0, 0.0]);
        assert_eq!(b.position, [1.0, 0.0]);
    }

    #[test]
    fn bytes_roundtrip_through_bytemuck() {
        let mut geometry = BoxGeometry::new();
        geometry.reset_lines(1);
        geometry.set_line(
            0,
            ColorVertex::new(point(1.5, 2.5), Color::rgb(1, 2, 3)),
            ColorVertex::new(point(3.5, 4.5), Color::rgb(4, 5, 6)),
        );
        let bytes = geometry.as_bytes();
        let back: &[ColorVertex] = bytemuck::cast_slice(bytes);
        assert_eq!(back, geometry.vertices());
    }
}
