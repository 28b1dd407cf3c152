//! Gradient descriptions for box fills and border edges.
//!
//! A [`FillGradient`] is an ordered stop sequence plus a direction
//! classification. Stops are sorted ascending on construction and evaluation
//! extrapolates flatly beyond the first and last stop, so `color_at` is
//! total over all of `f32`.
//!
//! Only linear gradients (including solid colors as the one-stop case) are
//! tessellatable by this crate. Radial and conic gradients can be described
//! so callers have one vocabulary for all their paint sources, but they must
//! consult [`is_gradient_supported`] before requesting geometry; see the
//! error-handling notes on [`crate::tessellate_box`].

use crate::color::Color;
use smallvec::SmallVec;
use thiserror::Error;

/// Errors from the validating gradient constructors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradientError {
    /// A gradient needs at least one stop.
    #[error("gradient requires at least one color stop")]
    NoStops,
    /// Stop positions must be finite.
    #[error("gradient stop position must be finite, got {0}")]
    NonFinitePosition(f32),
}

/// The overall shape of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientShape {
    #[default]
    Linear,
    Radial,
    Conic,
}

/// Whether this tessellator can produce geometry for a gradient shape.
///
/// Callers must consult this before passing a gradient to
/// [`crate::tessellate_box`]; passing an unsupported shape is a contract
/// violation (asserted in debug builds, vertical-linear fallback in release).
///
/// # Examples
///
/// ```
/// use kadro::{is_gradient_supported, GradientShape};
///
/// assert!(is_gradient_supported(GradientShape::Linear));
/// assert!(!is_gradient_supported(GradientShape::Radial));
/// assert!(!is_gradient_supported(GradientShape::Conic));
/// ```
pub fn is_gradient_supported(shape: GradientShape) -> bool {
    matches!(shape, GradientShape::Linear)
}

/// Direction classification for linear gradients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GradientDirection {
    /// No direction; a single color.
    #[default]
    Solid,
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
    /// Top-left to bottom-right.
    Diagonal,
}

/// A single gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient axis, clamped to [0, 1] on construction.
    pub position: f32,
    pub color: Color,
}

impl GradientStop {
    pub fn new(position: f32, color: Color) -> Self {
        Self { position, color }
    }
}

pub(crate) type StopVec = SmallVec<[GradientStop; 4]>;

/// An ordered-stop gradient used for box fills and border edge colors.
///
/// # Examples
///
/// ```
/// use kadro::{Color, FillGradient, GradientDirection};
///
/// let solid = FillGradient::solid(Color::rgb(30, 30, 30));
/// assert!(solid.is_monochrome());
///
/// let sky = FillGradient::vertical([
///     (0.0, Color::rgb(120, 180, 255)),
///     (1.0, Color::rgb(230, 240, 255)),
/// ]);
/// assert_eq!(sky.direction(), GradientDirection::Vertical);
/// assert_eq!(sky.color_at(0.0), Color::rgb(120, 180, 255));
///
/// // Evaluation extrapolates flatly beyond the outermost stops
/// assert_eq!(sky.color_at(-1.0), sky.color_at(0.0));
/// assert_eq!(sky.color_at(2.0), sky.color_at(1.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FillGradient {
    shape: GradientShape,
    direction: GradientDirection,
    stops: StopVec,
}

impl FillGradient {
    /// A single-color fill.
    pub fn solid(color: Color) -> Self {
        let mut stops = StopVec::new();
        stops.push(GradientStop::new(0.0, color));
        Self {
            shape: GradientShape::Linear,
            direction: GradientDirection::Solid,
            stops,
        }
    }

    /// A fully transparent fill that generates no geometry.
    pub fn invisible() -> Self {
        Self::solid(Color::TRANSPARENT)
    }

    /// A linear gradient with the given direction.
    ///
    /// Non-finite stop positions are dropped and positions are clamped to
    /// [0, 1]; if nothing remains the gradient is invisible. Use
    /// [`FillGradient::try_linear`] to surface those conditions as errors.
    pub fn linear(
        direction: GradientDirection,
        stops: impl IntoIterator<Item = (f32, Color)>,
    ) -> Self {
        let stops = stops
            .into_iter()
            .filter(|(position, _)| position.is_finite())
            .map(|(position, color)| GradientStop::new(position.clamp(0.0, 1.0), color))
            .collect();
        Self::from_parts(GradientShape::Linear, direction, stops)
    }

    /// Top-to-bottom linear gradient.
    pub fn vertical(stops: impl IntoIterator<Item = (f32, Color)>) -> Self {
        Self::linear(GradientDirection::Vertical, stops)
    }

    /// Left-to-right linear gradient.
    pub fn horizontal(stops: impl IntoIterator<Item = (f32, Color)>) -> Self {
        Self::linear(GradientDirection::Horizontal, stops)
    }

    /// Top-left to bottom-right linear gradient.
    pub fn diagonal(stops: impl IntoIterator<Item = (f32, Color)>) -> Self {
        Self::linear(GradientDirection::Diagonal, stops)
    }

    /// Validating constructor for linear gradients.
    pub fn try_linear(
        direction: GradientDirection,
        stops: impl IntoIterator<Item = (f32, Color)>,
    ) -> Result<Self, GradientError> {
        let stops = Self::validate(stops)?;
        Ok(Self::from_parts(GradientShape::Linear, direction, stops))
    }

    /// Describes a radial gradient. Not tessellatable by this crate; see
    /// [`is_gradient_supported`].
    pub fn try_radial(
        stops: impl IntoIterator<Item = (f32, Color)>,
    ) -> Result<Self, GradientError> {
        let stops = Self::validate(stops)?;
        Ok(Self::from_parts(
            GradientShape::Radial,
            GradientDirection::Solid,
            stops,
        ))
    }

    /// Describes a conic gradient. Not tessellatable by this crate; see
    /// [`is_gradient_supported`].
    pub fn try_conic(
        stops: impl IntoIterator<Item = (f32, Color)>,
    ) -> Result<Self, GradientError> {
        let stops = Self::validate(stops)?;
        Ok(Self::from_parts(
            GradientShape::Conic,
            GradientDirection::Solid,
            stops,
        ))
    }

    fn validate(
        stops: impl IntoIterator<Item = (f32, Color)>,
    ) -> Result<StopVec, GradientError> {
        let mut out = StopVec::new();
        for (position, color) in stops {
            if !position.is_finite() {
                return Err(GradientError::NonFinitePosition(position));
            }
            out.push(GradientStop::new(position.clamp(0.0, 1.0), color));
        }
        if out.is_empty() {
            return Err(GradientError::NoStops);
        }
        Ok(out)
    }

    fn from_parts(
        shape: GradientShape,
        direction: GradientDirection,
        mut stops: StopVec,
    ) -> Self {
        stops.sort_by(|a, b| a.position.total_cmp(&b.position));
        Self {
            shape,
            direction,
            stops,
        }
    }

    pub fn shape(&self) -> GradientShape {
        self.shape
    }

    pub fn direction(&self) -> GradientDirection {
        self.direction
    }

    /// The stops, sorted ascending by position.
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at parametric position `t`, with flat extrapolation beyond the
    /// first and last stop. Transparent when the gradient has no stops.
    pub fn color_at(&self, t: f32) -> Color {
        let Some(first) = self.stops.first() else {
            return Color::TRANSPARENT;
        };
        let last = self.stops.last().unwrap();
        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.position {
                let span = b.position - a.position;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.position) / span);
            }
        }
        last.color
    }

    pub(crate) fn first_color(&self) -> Color {
        self.stops.first().map_or(Color::TRANSPARENT, |s| s.color)
    }

    pub(crate) fn last_color(&self) -> Color {
        self.stops.last().map_or(Color::TRANSPARENT, |s| s.color)
    }

    /// True when any stop carries a non-zero alpha.
    pub fn is_visible(&self) -> bool {
        self.stops.iter().any(|stop| !stop.color.is_transparent())
    }

    /// True when every stop resolves to the same color.
    pub fn is_monochrome(&self) -> bool {
        self.stops
            .windows(2)
            .all(|pair| pair[0].color == pair[1].color)
    }

    /// True when the gradient carries more than two stops.
    pub fn is_multi_stop(&self) -> bool {
        self.stops.len() > 2
    }

    /// Number of stops strictly inside (0, 1). Drives ordered-fill line
    /// counting: each interior stop inserts one extra line.
    pub fn inner_stop_count(&self) -> usize {
        self.stops
            .iter()
            .filter(|stop| stop.position > 0.0 && stop.position < 1.0)
            .count()
    }

    /// Whether the two-line fill path can represent this gradient exactly:
    /// monochrome, or an axis-aligned two-stop ramp spanning the whole axis.
    pub(crate) fn is_fast_fill(&self) -> bool {
        if self.is_monochrome() {
            return true;
        }
        if !matches!(
            self.direction,
            GradientDirection::Vertical | GradientDirection::Horizontal
        ) {
            return false;
        }
        match self.stops.as_slice() {
            [first, last] => first.position <= 0.0 && last.position >= 1.0,
            _ => false,
        }
    }
}

/// Per-edge border color gradients, clockwise from the top edge.
///
/// Each edge gradient is parametrized along the clockwise border walk (top:
/// left to right, right: top to bottom, bottom: right to left, left: bottom
/// to top), spanning corner junction to corner junction. The `direction`
/// and `shape` of the edge gradients are ignored; only their stops matter.
///
/// # Examples
///
/// ```
/// use kadro::{BorderColors, Color, FillGradient};
///
/// let plain = BorderColors::solid(Color::BLACK);
/// assert!(plain.is_visible());
/// assert!(plain.is_monochrome());
///
/// let accent = BorderColors::per_edge(
///     FillGradient::solid(Color::rgb(200, 60, 60)),
///     FillGradient::solid(Color::BLACK),
///     FillGradient::solid(Color::BLACK),
///     FillGradient::solid(Color::BLACK),
/// );
/// assert!(!accent.is_monochrome());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BorderColors {
    top: FillGradient,
    right: FillGradient,
    bottom: FillGradient,
    left: FillGradient,
}

impl BorderColors {
    /// The same solid color on every edge.
    pub fn solid(color: Color) -> Self {
        let edge = FillGradient::solid(color);
        Self {
            top: edge.clone(),
            right: edge.clone(),
            bottom: edge.clone(),
            left: edge,
        }
    }

    /// Fully transparent borders; generates no border geometry.
    pub fn none() -> Self {
        Self::solid(Color::TRANSPARENT)
    }

    /// Individual gradients per edge, clockwise from the top.
    pub fn per_edge(
        top: FillGradient,
        right: FillGradient,
        bottom: FillGradient,
        left: FillGradient,
    ) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn top(&self) -> &FillGradient {
        &self.top
    }

    pub fn right(&self) -> &FillGradient {
        &self.right
    }

    pub fn bottom(&self) -> &FillGradient {
        &self.bottom
    }

    pub fn left(&self) -> &FillGradient {
        &self.left
    }

    pub(crate) fn edge(&self, edge: usize) -> &FillGradient {
        match edge {
            0 => &self.top,
            1 => &self.right,
            2 => &self.bottom,
            _ => &self.left,
        }
    }

    /// True when any edge has non-zero alpha anywhere.
    pub fn is_visible(&self) -> bool {
        self.top.is_visible()
            || self.right.is_visible()
            || self.bottom.is_visible()
            || self.left.is_visible()
    }

    /// True when every resolved stop of every edge is the same color.
    pub fn is_monochrome(&self) -> bool {
        let mut first: Option<Color> = None;
        for edge in 0..4 {
            for stop in self.edge(edge).stops() {
                match first {
                    None => first = Some(stop.color),
                    Some(color) if color != stop.color => return false,
                    Some(_) => {}
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stops_are_sorted_on_construction() {
        let gradient = FillGradient::vertical([
            (1.0, Color::WHITE),
            (0.0, Color::BLACK),
            (0.5, Color::rgb(128, 128, 128)),
        ]);
        let positions: Vec<f32> = gradient.stops().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn color_at_interpolates_and_extrapolates() {
        let gradient = FillGradient::vertical([(0.25, Color::BLACK), (0.75, Color::WHITE)]);
        assert_eq!(gradient.color_at(0.0), Color::BLACK);
        assert_eq!(gradient.color_at(0.25), Color::BLACK);
        assert_eq!(gradient.color_at(0.5), Color::rgb(128, 128, 128));
        assert_eq!(gradient.color_at(1.0), Color::WHITE);
    }

    #[test]
    fn duplicate_stop_positions_form_a_hard_transition() {
        let gradient = FillGradient::vertical([
            (0.0, Color::BLACK),
            (0.5, Color::rgb(255, 0, 0)),
            (0.5, Color::rgb(0, 255, 0)),
            (1.0, Color::WHITE),
        ]);
        assert_eq!(gradient.color_at(0.5), Color::rgb(255, 0, 0));
        // Just past the shared position the ramp continues from the second stop
        assert_eq!(gradient.color_at(0.75), Color::rgb(128, 255, 128));
    }

    #[test]
    fn visibility_and_monochrome() {
        assert!(!FillGradient::invisible().is_visible());
        assert!(FillGradient::solid(Color::BLACK).is_monochrome());
        let two_tone = FillGradient::vertical([(0.0, Color::BLACK), (1.0, Color::WHITE)]);
        assert!(two_tone.is_visible());
        assert!(!two_tone.is_monochrome());
    }

    #[test]
    fn fast_fill_classification() {
        assert!(FillGradient::solid(Color::BLACK).is_fast_fill());
        let full_span = FillGradient::vertical([(0.0, Color::BLACK), (1.0, Color::WHITE)]);
        assert!(full_span.is_fast_fill());
        // Interior boundary stops have flat segments two lines cannot express
        let inset = FillGradient::vertical([(0.3, Color::BLACK), (0.7, Color::WHITE)]);
        assert!(!inset.is_fast_fill());
        let diagonal = FillGradient::diagonal([(0.0, Color::BLACK), (1.0, Color::WHITE)]);
        assert!(!diagonal.is_fast_fill());
        let multi = FillGradient::vertical([
            (0.0, Color::BLACK),
            (0.5, Color::rgb(255, 0, 0)),
            (1.0, Color::WHITE),
        ]);
        assert!(!multi.is_fast_fill());
    }

    #[test]
    fn inner_stop_count_excludes_boundaries() {
        let gradient = FillGradient::vertical([
            (0.0, Color::BLACK),
            (0.25, Color::rgb(10, 10, 10)),
            (0.75, Color::rgb(20, 20, 20)),
            (1.0, Color::WHITE),
        ]);
        assert_eq!(gradient.inner_stop_count(), 2);
    }

    #[test]
    fn try_constructors_validate() {
        assert_eq!(
            FillGradient::try_linear(GradientDirection::Vertical, []),
            Err(GradientError::NoStops)
        );
        assert!(matches!(
            FillGradient::try_linear(
                GradientDirection::Vertical,
                [(f32::NAN, Color::BLACK)]
            ),
            Err(GradientError::NonFinitePosition(_))
        ));
        let radial = FillGradient::try_radial([(0.0, Color::BLACK)]).unwrap();
        assert!(!is_gradient_supported(radial.shape()));
    }
}
