use crate::vertex::ColorVertex;
use lyon::math::Point;

/// Radii below this resolve to a square corner. Sub-half-pixel arcs are
/// indistinguishable from a sharp corner at any realistic scale factor.
pub(crate) const SHARP_RADIUS: f32 = 0.5;

pub fn normalize_rgba_color(color: &[u8; 4]) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        color[3] as f32 / 255.0,
    ]
}

#[inline(always)]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[inline(always)]
pub(crate) fn lerp_point(a: Point, b: Point, t: f32) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

#[inline(always)]
pub(crate) fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8
}

/// Total area covered by a line-pair triangle strip.
///
/// Every consecutive pair of lines contributes two triangles; degenerate
/// stitching and padding lines contribute zero. Used by tests to compare the
/// coverage of different fill paths, and exposed for callers that want the
/// same check.
pub fn strip_area(vertices: &[ColorVertex]) -> f32 {
    let mut area = 0.0;
    let lines = vertices.len() / 2;
    for i in 1..lines {
        let a1 = vertices[2 * (i - 1)].position;
        let b1 = vertices[2 * (i - 1) + 1].position;
        let a2 = vertices[2 * i].position;
        let b2 = vertices[2 * i + 1].position;
        area += triangle_area(a1, b1, a2);
        area += triangle_area(b1, a2, b2);
    }
    area
}

#[inline]
fn triangle_area(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
    ((b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])).abs() * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use lyon::math::point;

    fn vertex(x: f32, y: f32) -> ColorVertex {
        ColorVertex {
            position: [x, y],
            color: Color::BLACK.to_array(),
        }
    }

    #[test]
    fn strip_area_of_unit_quad() {
        let vertices = [
            vertex(0.0, 0.0),
            vertex(1.0, 0.0),
            vertex(0.0, 1.0),
            vertex(1.0, 1.0),
        ];
        assert!((strip_area(&vertices) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_lines_add_nothing() {
        let vertices = [
            vertex(0.0, 0.0),
            vertex(1.0, 0.0),
            vertex(0.0, 1.0),
            vertex(1.0, 1.0),
            // duplicate padding line
            vertex(0.0, 1.0),
            vertex(1.0, 1.0),
        ];
        assert!((strip_area(&vertices) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_point_midpoint() {
        let mid = lerp_point(point(0.0, 0.0), point(2.0, 4.0), 0.5);
        assert_eq!(mid, point(1.0, 2.0));
    }
}
