//! Geometric invariants over the shared scene set: ring closure, coverage,
//! clip consistency, and output sanity.

use kadro::lyon::math::point;
use kadro::{
    clip_counts, strip_area, tessellate_box, tessellate_clip, BorderColors, BorderWidths,
    BoxShape, ClipGeometry, Color, FillGradient, MathRect,
};
use kadro_test_scenes::scenes;
use std::f32::consts::PI;

fn rect(width: f32, height: f32) -> MathRect {
    MathRect::new(point(0.0, 0.0), point(width, height))
}

/// The border ring must close exactly: with the fill stripped, the buffer
/// is the bare ring and its first and last lines coincide.
#[test]
fn border_rings_close_for_every_scene() {
    for scene in scenes() {
        let geometry = tessellate_box(
            &scene.rect,
            &scene.shape,
            &scene.widths,
            &scene.colors,
            &FillGradient::invisible(),
        );
        if geometry.is_empty() {
            continue;
        }
        let vertices = geometry.vertices();
        let first = (&vertices[0], &vertices[1]);
        let last = (
            &vertices[vertices.len() - 2],
            &vertices[vertices.len() - 1],
        );
        assert_eq!(
            first.0.position, last.0.position,
            "ring not closed in scene {}",
            scene.name
        );
        assert_eq!(
            first.1.position, last.1.position,
            "ring not closed in scene {}",
            scene.name
        );
    }
}

/// A borderless monochrome rounded box fills the analytic rounded-rect
/// area. The fast path squares the corners (the difference hides under the
/// border ribbon in bordered boxes), so the tolerance covers the corner
/// deficit of small radii.
#[test]
fn fill_covers_the_rounded_rect_area() {
    let radius = 4.0;
    let (width, height) = (200.0, 120.0);
    let geometry = tessellate_box(
        &rect(width, height),
        &BoxShape::uniform(radius),
        &BorderWidths::none(),
        &BorderColors::none(),
        &FillGradient::solid(Color::rgb(32, 32, 32)),
    );
    let analytic = width * height - (4.0 - PI) * radius * radius;
    let covered = strip_area(geometry.vertices());
    let relative = (covered - analytic).abs() / analytic;
    assert!(
        relative < 0.01,
        "covered {covered}, analytic {analytic}, relative error {relative}"
    );
}

/// The ordered path follows the contour exactly, so with a larger radius
/// the area matches tightly.
#[test]
fn ordered_fill_area_is_tight() {
    let radius = 24.0;
    let (width, height) = (200.0, 120.0);
    let geometry = tessellate_box(
        &rect(width, height),
        &BoxShape::uniform(radius),
        &BorderWidths::none(),
        &BorderColors::none(),
        &FillGradient::vertical([
            (0.0, Color::BLACK),
            (0.25, Color::rgb(64, 64, 64)),
            (0.75, Color::rgb(192, 192, 192)),
            (1.0, Color::WHITE),
        ]),
    );
    let analytic = width * height - (4.0 - PI) * radius * radius;
    let covered = strip_area(geometry.vertices());
    // The polygonal arc slightly undershoots the true ellipse; stay within
    // half a percent.
    let relative = (covered - analytic).abs() / analytic;
    assert!(
        relative < 0.005,
        "covered {covered}, analytic {analytic}, relative error {relative}"
    );
}

#[test]
fn outputs_are_finite_and_inside_the_box() {
    for scene in scenes() {
        let geometry = tessellate_box(
            &scene.rect,
            &scene.shape,
            &scene.widths,
            &scene.colors,
            &scene.fill,
        );
        assert_eq!(geometry.vertex_count() % 2, 0);
        for vertex in geometry.vertices() {
            assert!(
                vertex.position[0].is_finite() && vertex.position[1].is_finite(),
                "non-finite vertex in scene {}",
                scene.name
            );
            assert!(
                vertex.position[0] >= scene.rect.min.x - 1e-3
                    && vertex.position[0] <= scene.rect.max.x + 1e-3
                    && vertex.position[1] >= scene.rect.min.y - 1e-3
                    && vertex.position[1] <= scene.rect.max.y + 1e-3,
                "vertex escaped the box in scene {}",
                scene.name
            );
        }
    }
}

#[test]
fn clip_counts_match_for_every_scene() {
    for scene in scenes() {
        let (vertex_count, index_count) =
            clip_counts(&scene.rect, &scene.shape, &scene.widths);
        match tessellate_clip(&scene.rect, &scene.shape, &scene.widths) {
            ClipGeometry::Rectangle(clip) => {
                assert_eq!((vertex_count, index_count), (0, 0));
                assert!(clip.width() >= 0.0 && clip.height() >= 0.0);
            }
            ClipGeometry::Fan(fan) => {
                assert_eq!(fan.vertices().len(), vertex_count, "scene {}", scene.name);
                assert_eq!(fan.indices().len(), index_count, "scene {}", scene.name);
            }
        }
    }
}

/// Percentage-relative metrics resolve identically whether the caller
/// resolves them first or lets the tessellator do it.
#[test]
fn percent_metrics_resolve_identically() {
    for scene in scenes() {
        let resolved_shape = scene.shape.to_absolute(&scene.rect);
        let resolved_widths = scene.widths.to_absolute(&scene.rect);
        let direct = tessellate_box(
            &scene.rect,
            &scene.shape,
            &scene.widths,
            &scene.colors,
            &scene.fill,
        );
        let pre_resolved = tessellate_box(
            &scene.rect,
            &resolved_shape,
            &resolved_widths,
            &scene.colors,
            &scene.fill,
        );
        assert_eq!(
            direct.vertices(),
            pre_resolved.vertices(),
            "resolution not idempotent in scene {}",
            scene.name
        );
    }
}
