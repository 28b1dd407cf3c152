//! Value types describing the intended appearance of a box: per-corner
//! radii and per-edge border widths, in absolute or percentage units.
//!
//! Both [`BoxShape`] and [`BorderWidths`] are plain descriptions; nothing is
//! resolved against a rectangle until [`BoxShape::to_absolute`] /
//! [`BorderWidths::to_absolute`] run, which the metrics resolver does for
//! every generation call. Resolution is idempotent: converting an
//! already-absolute value returns it unchanged.

use crate::util::SHARP_RADIUS;
use crate::MathRect;

/// How radius and width values are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeMode {
    /// Values are logical pixels.
    #[default]
    Absolute,
    /// Values are percentages (0-100) of the box dimensions.
    Percent,
}

/// How percentage radii resolve when the box is not square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectMode {
    /// Each radius component resolves against its own axis: `x` against the
    /// box width, `y` against the box height. Produces elliptical corners on
    /// non-square boxes.
    #[default]
    PerAxis,
    /// Both components resolve against the shorter box side, keeping corner
    /// arcs circular.
    Uniform,
}

/// An elliptical corner radius pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadius {
    pub x: f32,
    pub y: f32,
}

impl CornerRadius {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A circular radius.
    pub fn circular(radius: f32) -> Self {
        Self {
            x: radius,
            y: radius,
        }
    }

    /// True when the radius is small enough to render as a square corner.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.max(self.y) < SHARP_RADIUS
    }
}

impl From<f32> for CornerRadius {
    fn from(radius: f32) -> Self {
        Self::circular(radius)
    }
}

/// Per-corner radius configuration for a rounded box.
///
/// Corners are named in CSS order, clockwise from top-left. Radii may be
/// absolute pixels or percentages of the box; see [`SizeMode`] and
/// [`AspectMode`].
///
/// # Examples
///
/// ```
/// use kadro::{BoxShape, CornerRadius};
///
/// // Uniform circular corners
/// let uniform = BoxShape::uniform(10.0);
///
/// // Custom per-corner radii
/// let custom = BoxShape {
///     top_left: CornerRadius::circular(5.0),
///     top_right: CornerRadius::new(10.0, 6.0),
///     bottom_right: CornerRadius::circular(15.0),
///     bottom_left: CornerRadius::ZERO,
///     ..BoxShape::rectangle()
/// };
/// assert!(!custom.is_rectangle());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoxShape {
    pub top_left: CornerRadius,
    pub top_right: CornerRadius,
    pub bottom_right: CornerRadius,
    pub bottom_left: CornerRadius,
    pub size_mode: SizeMode,
    pub aspect_mode: AspectMode,
}

impl BoxShape {
    /// A shape with no rounding at all.
    pub fn rectangle() -> Self {
        Self::default()
    }

    /// Creates a shape with the same circular radius for all corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use kadro::BoxShape;
    ///
    /// let shape = BoxShape::uniform(10.0);
    /// assert!(shape.is_rectellipse());
    /// ```
    pub fn uniform(radius: f32) -> Self {
        Self::uniform_elliptical(CornerRadius::circular(radius.abs()))
    }

    /// Creates a shape with the same elliptical radius pair for all corners.
    pub fn uniform_elliptical(radius: CornerRadius) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
            ..Self::default()
        }
    }

    /// Creates a percentage-relative shape; `radius` is a percentage (0-100)
    /// resolved per [`AspectMode`].
    pub fn percent(radius: f32, aspect_mode: AspectMode) -> Self {
        Self {
            size_mode: SizeMode::Percent,
            aspect_mode,
            ..Self::uniform(radius)
        }
    }

    pub(crate) fn radius(&self, corner: usize) -> CornerRadius {
        match corner {
            0 => self.top_left,
            1 => self.top_right,
            2 => self.bottom_right,
            _ => self.bottom_left,
        }
    }

    /// Resolves the shape against a rectangle, producing an absolute-unit
    /// shape with non-negative radii.
    ///
    /// Idempotent: resolving an already-absolute shape again returns the
    /// same values.
    pub fn to_absolute(&self, rect: &MathRect) -> BoxShape {
        let width = rect.width().max(0.0);
        let height = rect.height().max(0.0);
        let resolve = |radius: CornerRadius| -> CornerRadius {
            let radius = CornerRadius::new(radius.x.max(0.0), radius.y.max(0.0));
            match self.size_mode {
                SizeMode::Absolute => radius,
                SizeMode::Percent => match self.aspect_mode {
                    AspectMode::PerAxis => CornerRadius::new(
                        radius.x / 100.0 * width,
                        radius.y / 100.0 * height,
                    ),
                    AspectMode::Uniform => {
                        let side = width.min(height);
                        CornerRadius::new(radius.x / 100.0 * side, radius.y / 100.0 * side)
                    }
                },
            }
        };

        BoxShape {
            top_left: resolve(self.top_left),
            top_right: resolve(self.top_right),
            bottom_right: resolve(self.bottom_right),
            bottom_left: resolve(self.bottom_left),
            size_mode: SizeMode::Absolute,
            aspect_mode: self.aspect_mode,
        }
    }

    /// True when every corner resolves to a square corner.
    pub fn is_rectangle(&self) -> bool {
        self.top_left.is_zero()
            && self.top_right.is_zero()
            && self.bottom_right.is_zero()
            && self.bottom_left.is_zero()
    }

    /// True when all four corners share one radius pair (and the shape is
    /// not a plain rectangle).
    pub fn is_rectellipse(&self) -> bool {
        !self.is_rectangle()
            && self.top_left == self.top_right
            && self.top_right == self.bottom_right
            && self.bottom_right == self.bottom_left
    }
}

impl core::fmt::Display for BoxShape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // In the order of a well known convention (CSS) clockwise from top left
        write!(
            f,
            "BoxShape(({}, {}), ({}, {}), ({}, {}), ({}, {}))",
            self.top_left.x,
            self.top_left.y,
            self.top_right.x,
            self.top_right.y,
            self.bottom_right.x,
            self.bottom_right.y,
            self.bottom_left.x,
            self.bottom_left.y,
        )
    }
}

/// Per-edge border thickness for a box.
///
/// Edges are named clockwise from the top. Widths may be absolute pixels or
/// percentages of the box: horizontal edges (top, bottom) resolve against
/// the box height, vertical edges (left, right) against the width.
///
/// # Examples
///
/// ```
/// use kadro::BorderWidths;
///
/// let none = BorderWidths::none();
/// assert!(none.is_none());
///
/// let thin = BorderWidths::uniform(1.0);
/// assert!(thin.is_uniform());
///
/// let chunky_bottom = BorderWidths::new(1.0, 1.0, 4.0, 1.0);
/// assert!(!chunky_bottom.is_uniform());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BorderWidths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
    pub size_mode: SizeMode,
}

impl BorderWidths {
    /// No border on any edge.
    pub fn none() -> Self {
        Self::default()
    }

    /// The same width on all four edges.
    pub fn uniform(width: f32) -> Self {
        Self::new(width, width, width, width)
    }

    /// Per-edge widths, clockwise from the top.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
            size_mode: SizeMode::Absolute,
        }
    }

    pub(crate) fn width(&self, edge: usize) -> f32 {
        match edge {
            0 => self.top,
            1 => self.right,
            2 => self.bottom,
            _ => self.left,
        }
    }

    /// Resolves the widths against a rectangle, producing absolute-unit
    /// non-negative widths. Idempotent.
    pub fn to_absolute(&self, rect: &MathRect) -> BorderWidths {
        let width = rect.width().max(0.0);
        let height = rect.height().max(0.0);
        let (horizontal_base, vertical_base) = match self.size_mode {
            SizeMode::Absolute => (1.0, 1.0),
            SizeMode::Percent => (height / 100.0, width / 100.0),
        };

        BorderWidths {
            top: self.top.max(0.0) * horizontal_base,
            right: self.right.max(0.0) * vertical_base,
            bottom: self.bottom.max(0.0) * horizontal_base,
            left: self.left.max(0.0) * vertical_base,
            size_mode: SizeMode::Absolute,
        }
    }

    /// True when no edge has a positive width.
    pub fn is_none(&self) -> bool {
        self.top <= 0.0 && self.right <= 0.0 && self.bottom <= 0.0 && self.left <= 0.0
    }

    /// True when all four edges share one width.
    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }
}
