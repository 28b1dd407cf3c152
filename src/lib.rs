//! Kadro renders rounded-box outlines as tessellated vertex buffers for a
//! low-level 2D rendering pipeline.
//!
//! A box is a rectangle with per-corner elliptical radii ([`BoxShape`]),
//! per-edge border widths ([`BorderWidths`]) and color gradients
//! ([`BorderColors`]), and an interior fill gradient ([`FillGradient`]).
//! [`tessellate_box`] resolves those metrics against a rectangle and writes
//! a line-pair triangle strip into a buffer whose exact size is computable
//! ahead of allocation with [`box_vertex_count`]; [`tessellate_clip`]
//! produces the position-only variant for stencil-clip masks.
//!
//! Kadro is a pure geometry/color compute engine: it produces vertex
//! arrays, it does not draw them. Uploading and drawing the buffers belongs
//! to the surrounding pipeline.
//!
//! # Examples
//!
//! ```
//! use kadro::{
//!     box_vertex_count, tessellate_box, BorderColors, BorderWidths, BoxShape, Color,
//!     FillGradient, MathRect,
//! };
//! use lyon::math::point;
//!
//! let rect = MathRect::new(point(0.0, 0.0), point(200.0, 120.0));
//! let shape = BoxShape::uniform(10.0);
//! let widths = BorderWidths::uniform(2.0);
//! let colors = BorderColors::solid(Color::BLACK);
//! let fill = FillGradient::vertical([
//!     (0.0, Color::rgb(70, 130, 220)),
//!     (1.0, Color::rgb(20, 40, 90)),
//! ]);
//!
//! let geometry = tessellate_box(&rect, &shape, &widths, &colors, &fill);
//! assert_eq!(
//!     geometry.vertex_count(),
//!     box_vertex_count(&rect, &shape, &widths, &colors, &fill),
//! );
//!
//! // Ready for upload: 12 bytes per vertex, two vertices per line
//! let bytes = geometry.as_bytes();
//! assert_eq!(bytes.len(), geometry.vertex_count() * 12);
//! ```

pub use lyon;

mod arc;
mod border;
mod cache;
mod clip;
mod color;
mod fill;
mod generator;
mod geometry;
mod gradient;
mod metrics;
mod util;
mod vertex;

/// Axis-aligned rectangle in logical pixels, y-down.
pub type MathRect = lyon::math::Box2D;

pub use arc::{segments_for_radius, ArcIterator};
pub use border::BorderColorMap;
pub use cache::{box_content_hash, GeometryCache};
pub use clip::{clip_counts, tessellate_clip, ClipFan, ClipGeometry};
pub use color::Color;
pub use generator::{
    box_line_count, box_vertex_count, classify_box, tessellate_box, tessellate_box_into, BoxState,
};
pub use geometry::{BoxMetrics, CornerMetrics};
pub use gradient::{
    is_gradient_supported, BorderColors, FillGradient, GradientDirection, GradientError,
    GradientShape, GradientStop,
};
pub use metrics::{AspectMode, BorderWidths, BoxShape, CornerRadius, SizeMode};
pub use util::strip_area;
pub use vertex::{BoxGeometry, ColorVertex, PositionVertex};
