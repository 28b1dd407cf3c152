//! Canned box configurations shared by the kadro integration tests and
//! benchmarks. Each scene pins one generation path or degenerate case.

use kadro::lyon::math::point;
use kadro::{
    AspectMode, BorderColors, BorderWidths, BoxShape, Color, CornerRadius, FillGradient, MathRect,
};

/// One box configuration with a descriptive name.
#[derive(Debug, Clone)]
pub struct BoxScene {
    pub name: &'static str,
    pub rect: MathRect,
    pub shape: BoxShape,
    pub widths: BorderWidths,
    pub colors: BorderColors,
    pub fill: FillGradient,
}

fn rect(width: f32, height: f32) -> MathRect {
    MathRect::new(point(0.0, 0.0), point(width, height))
}

/// The full scene set. Covers every state of the combined generator plus
/// the degenerate corner cases.
pub fn scenes() -> Vec<BoxScene> {
    vec![
        BoxScene {
            name: "plain_rect_vertical_gradient_mono_border",
            rect: rect(200.0, 120.0),
            shape: BoxShape::rectangle(),
            widths: BorderWidths::uniform(2.0),
            colors: BorderColors::solid(Color::BLACK),
            fill: FillGradient::vertical([
                (0.0, Color::rgb(240, 240, 240)),
                (1.0, Color::rgb(180, 180, 180)),
            ]),
        },
        BoxScene {
            name: "rounded_diagonal_three_stop_no_border",
            rect: rect(160.0, 100.0),
            shape: BoxShape::uniform(12.0),
            widths: BorderWidths::none(),
            colors: BorderColors::none(),
            fill: FillGradient::diagonal([
                (0.0, Color::rgb(255, 80, 80)),
                (0.5, Color::rgb(80, 255, 80)),
                (1.0, Color::rgb(80, 80, 255)),
            ]),
        },
        BoxScene {
            name: "asymmetric_corners_four_edge_colors_no_fill",
            rect: rect(140.0, 90.0),
            shape: BoxShape {
                top_left: CornerRadius::circular(4.0),
                top_right: CornerRadius::circular(16.0),
                bottom_right: CornerRadius::new(10.0, 6.0),
                bottom_left: CornerRadius::ZERO,
                ..BoxShape::rectangle()
            },
            widths: BorderWidths::uniform(3.0),
            colors: BorderColors::per_edge(
                FillGradient::solid(Color::rgb(220, 60, 60)),
                FillGradient::solid(Color::rgb(60, 220, 60)),
                FillGradient::solid(Color::rgb(60, 60, 220)),
                FillGradient::solid(Color::rgb(220, 220, 60)),
            ),
            fill: FillGradient::invisible(),
        },
        BoxScene {
            name: "over_border_fully_cropped",
            rect: rect(120.0, 80.0),
            shape: BoxShape::uniform(8.0),
            widths: BorderWidths::uniform(12.0),
            colors: BorderColors::solid(Color::BLACK),
            fill: FillGradient::vertical([
                (0.0, Color::rgb(200, 200, 255)),
                (1.0, Color::rgb(120, 120, 220)),
            ]),
        },
        BoxScene {
            name: "invisible_everything",
            rect: rect(100.0, 60.0),
            shape: BoxShape::uniform(8.0),
            widths: BorderWidths::none(),
            colors: BorderColors::solid(Color::BLACK),
            fill: FillGradient::invisible(),
        },
        BoxScene {
            name: "uniform_box_solid_fill",
            rect: rect(180.0, 120.0),
            shape: BoxShape::uniform(10.0),
            widths: BorderWidths::uniform(2.0),
            colors: BorderColors::solid(Color::rgb(40, 40, 40)),
            fill: FillGradient::solid(Color::rgb(250, 250, 245)),
        },
        BoxScene {
            name: "uniform_box_horizontal_gradient",
            rect: rect(180.0, 120.0),
            shape: BoxShape::uniform(14.0),
            widths: BorderWidths::uniform(4.0),
            colors: BorderColors::solid(Color::rgb(20, 20, 20)),
            fill: FillGradient::horizontal([
                (0.0, Color::rgb(255, 240, 220)),
                (1.0, Color::rgb(220, 160, 90)),
            ]),
        },
        BoxScene {
            name: "non_uniform_multi_stop_vertical",
            rect: rect(240.0, 140.0),
            shape: BoxShape {
                top_left: CornerRadius::circular(6.0),
                top_right: CornerRadius::circular(20.0),
                bottom_right: CornerRadius::circular(12.0),
                bottom_left: CornerRadius::circular(9.0),
                ..BoxShape::rectangle()
            },
            widths: BorderWidths::new(1.0, 2.0, 4.0, 2.0),
            colors: BorderColors::solid(Color::rgb(10, 10, 10)),
            fill: FillGradient::vertical([
                (0.0, Color::rgb(230, 240, 255)),
                (0.3, Color::rgb(160, 190, 235)),
                (0.7, Color::rgb(90, 130, 200)),
                (1.0, Color::rgb(30, 60, 120)),
            ]),
        },
        BoxScene {
            name: "percent_units_uniform_aspect",
            rect: rect(300.0, 150.0),
            shape: BoxShape::percent(10.0, AspectMode::Uniform),
            widths: BorderWidths {
                top: 2.0,
                right: 2.0,
                bottom: 2.0,
                left: 2.0,
                size_mode: kadro::SizeMode::Percent,
            },
            colors: BorderColors::solid(Color::BLACK),
            fill: FillGradient::solid(Color::WHITE),
        },
        BoxScene {
            name: "multi_stop_border_edges",
            rect: rect(160.0, 100.0),
            shape: BoxShape::uniform(8.0),
            widths: BorderWidths::uniform(3.0),
            colors: BorderColors::per_edge(
                FillGradient::horizontal([
                    (0.0, Color::rgb(255, 0, 0)),
                    (0.33, Color::rgb(255, 160, 0)),
                    (0.66, Color::rgb(255, 255, 0)),
                    (1.0, Color::rgb(0, 255, 0)),
                ]),
                FillGradient::solid(Color::rgb(0, 128, 255)),
                FillGradient::horizontal([
                    (0.0, Color::rgb(0, 255, 255)),
                    (0.5, Color::rgb(0, 0, 255)),
                    (1.0, Color::rgb(128, 0, 255)),
                ]),
                FillGradient::solid(Color::rgb(255, 0, 128)),
            ),
            fill: FillGradient::solid(Color::rgb(24, 24, 24)),
        },
        BoxScene {
            name: "diagonal_gradient_with_border_bridging",
            rect: rect(200.0, 120.0),
            shape: BoxShape::uniform(10.0),
            widths: BorderWidths::uniform(2.0),
            colors: BorderColors::solid(Color::BLACK),
            fill: FillGradient::diagonal([
                (0.0, Color::rgb(255, 255, 255)),
                (1.0, Color::rgb(0, 0, 0)),
            ]),
        },
        BoxScene {
            name: "stadium_max_radius",
            rect: rect(120.0, 60.0),
            shape: BoxShape::uniform(60.0),
            widths: BorderWidths::uniform(1.0),
            colors: BorderColors::solid(Color::rgb(60, 60, 60)),
            fill: FillGradient::solid(Color::rgb(200, 220, 240)),
        },
    ]
}
