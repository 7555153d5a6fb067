//! Style configuration for shape-styled widgets.
//!
//! A [`StyleConfiguration`] is an immutable value. Updates go through the
//! `with_*` methods, which consume the configuration and hand back a new
//! one; the widget holding it recomputes its background after every
//! accepted update.
//!
//! # Default cascade
//!
//! `center_color` defaults to `start_color` and `end_color` defaults to the
//! resulting `center_color`. The cascade runs once, in
//! [`StyleBuilder::build`]. It is not a live binding: a later
//! [`with_start_color`](StyleConfiguration::with_start_color) leaves center
//! and end alone.

mod attributes;
mod error;
mod kinds;

pub use error::StyleError;
pub use kinds::{GradientKind, GradientOrientation, ShapeKind};

use swatch_engine::paint::Color;

/// Neutral gray every color role starts from (`#DDDDDD`).
pub const NORMAL_COLOR: Color = Color::from_argb(0xFFDD_DDDD);

/// Default ripple tint: fully transparent.
pub const DEFAULT_RIPPLE_COLOR: Color = Color::from_argb(0x0000_0000);

/// Default corner radius and gradient radius, in logical pixels.
pub const DEFAULT_RADIUS: f32 = 8.0;

/// Complete set of style parameters for a shape-styled widget.
///
/// Holds no rendering objects; see
/// [`ShapeStyleCompositor`](crate::compositor::ShapeStyleCompositor) for the
/// step that turns it into renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfiguration {
    shape: ShapeKind,
    corner_radius: f32,
    corner_array: Option<[f32; 8]>,

    stroke_width: f32,
    stroke_color: Color,
    dash_width: f32,
    dash_gap: f32,

    normal_color: Color,
    press_color: Color,
    focus_color: Color,
    ripple_color: Color,

    gradient_kind: GradientKind,
    gradient_orientation: GradientOrientation,
    start_color: Color,
    center_color: Color,
    end_color: Color,
    gradient_radius: f32,
    gradient_color_stops: Option<Vec<Color>>,

    lock_press_color: bool,
}

impl Default for StyleConfiguration {
    fn default() -> Self {
        StyleBuilder::default().build()
    }
}

impl StyleConfiguration {
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// True when any gradient parameter differs from its default.
    ///
    /// Unlocking the press color is only meaningful in that case.
    pub fn has_custom_gradient(&self) -> bool {
        self.gradient_color_stops.is_some()
            || self.start_color != NORMAL_COLOR
            || self.center_color != NORMAL_COLOR
            || self.end_color != NORMAL_COLOR
    }

    /// Colors a gradient renderer is seeded with: explicit stops if any,
    /// otherwise `[start, center, end]`.
    pub fn gradient_colors(&self) -> Vec<Color> {
        match &self.gradient_color_stops {
            Some(stops) => stops.clone(),
            None => vec![self.start_color, self.center_color, self.end_color],
        }
    }

    // ── getters ───────────────────────────────────────────────────────────

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn corner_array(&self) -> Option<[f32; 8]> {
        self.corner_array
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn dash_width(&self) -> f32 {
        self.dash_width
    }

    pub fn dash_gap(&self) -> f32 {
        self.dash_gap
    }

    pub fn normal_color(&self) -> Color {
        self.normal_color
    }

    pub fn press_color(&self) -> Color {
        self.press_color
    }

    pub fn focus_color(&self) -> Color {
        self.focus_color
    }

    pub fn ripple_color(&self) -> Color {
        self.ripple_color
    }

    pub fn gradient_kind(&self) -> GradientKind {
        self.gradient_kind
    }

    pub fn gradient_orientation(&self) -> GradientOrientation {
        self.gradient_orientation
    }

    pub fn start_color(&self) -> Color {
        self.start_color
    }

    pub fn center_color(&self) -> Color {
        self.center_color
    }

    pub fn end_color(&self) -> Color {
        self.end_color
    }

    pub fn gradient_radius(&self) -> f32 {
        self.gradient_radius
    }

    pub fn gradient_color_stops(&self) -> Option<&[Color]> {
        self.gradient_color_stops.as_deref()
    }

    pub fn lock_press_color(&self) -> bool {
        self.lock_press_color
    }

    // ── updates ───────────────────────────────────────────────────────────

    pub fn with_shape(mut self, v: ShapeKind) -> Self {
        self.shape = v;
        self
    }

    /// Validating update for shape kinds coming from external config.
    pub fn with_shape_raw(self, raw: i32) -> Result<Self, StyleError> {
        Ok(self.with_shape(ShapeKind::try_from(raw)?))
    }

    pub fn with_color(mut self, v: Color) -> Self {
        self.normal_color = v;
        self
    }

    pub fn with_press_color(mut self, v: Color) -> Self {
        self.press_color = v;
        self
    }

    pub fn with_focus_color(mut self, v: Color) -> Self {
        self.focus_color = v;
        self
    }

    pub fn with_ripple_color(mut self, v: Color) -> Self {
        self.ripple_color = v;
        self
    }

    pub fn with_corner_radius(mut self, v: f32) -> Self {
        self.corner_radius = v;
        self
    }

    /// Per-corner `(x, y)` radii: top-left, top-right, bottom-left,
    /// bottom-right. Overridden by the corner radius when rendered.
    pub fn with_corner_array(mut self, v: Option<[f32; 8]>) -> Self {
        self.corner_array = v;
        self
    }

    pub fn with_stroke_width(mut self, v: f32) -> Self {
        self.stroke_width = v;
        self
    }

    pub fn with_stroke_color(mut self, v: Color) -> Self {
        self.stroke_color = v;
        self
    }

    pub fn with_dash_width(mut self, v: f32) -> Self {
        self.dash_width = v;
        self
    }

    pub fn with_dash_gap(mut self, v: f32) -> Self {
        self.dash_gap = v;
        self
    }

    pub fn with_gradient_kind(mut self, v: GradientKind) -> Self {
        self.gradient_kind = v;
        self
    }

    /// Validating update for gradient kinds coming from external config.
    pub fn with_gradient_kind_raw(self, raw: i32) -> Result<Self, StyleError> {
        Ok(self.with_gradient_kind(GradientKind::try_from(raw)?))
    }

    pub fn with_gradient_orientation(mut self, v: GradientOrientation) -> Self {
        self.gradient_orientation = v;
        self
    }

    /// Orientation by style-sheet index; unknown indices mean left-to-right.
    pub fn with_gradient_orientation_index(self, index: i32) -> Self {
        self.with_gradient_orientation(GradientOrientation::from_index(index))
    }

    pub fn with_start_color(mut self, v: Color) -> Self {
        self.start_color = v;
        self
    }

    pub fn with_center_color(mut self, v: Color) -> Self {
        self.center_color = v;
        self
    }

    pub fn with_end_color(mut self, v: Color) -> Self {
        self.end_color = v;
        self
    }

    pub fn with_gradient_radius(mut self, v: f32) -> Self {
        self.gradient_radius = v;
        self
    }

    /// Ordered stops overriding start/center/end.
    pub fn with_gradient_color_stops(mut self, v: Option<Vec<Color>>) -> Self {
        self.gradient_color_stops = v;
        self
    }

    /// Locks (default) or unlocks the pressed/focused fill.
    ///
    /// Locked, pressed and focused states render the same gradient as the
    /// normal state. Unlocking requires [`has_custom_gradient`](Self::has_custom_gradient):
    /// on a plain solid style the per-state colors already differ freely.
    pub fn with_lock_press_color(mut self, lock: bool) -> Result<Self, StyleError> {
        if !lock && !self.has_custom_gradient() {
            return Err(StyleError::LockRequiresGradient);
        }
        self.lock_press_color = lock;
        Ok(self)
    }
}

// ── builder ───────────────────────────────────────────────────────────────

/// Builder applying literal defaults and the one-time color cascade.
///
/// # Example
/// ```
/// use swatch_engine::paint::Color;
/// use swatch_ui::style::StyleConfiguration;
///
/// let red = Color::from_argb(0xFFFF_0000);
/// let style = StyleConfiguration::builder().start_color(red).build();
/// assert_eq!(style.center_color(), red);
/// assert_eq!(style.end_color(), red);
/// ```
#[derive(Debug, Clone)]
pub struct StyleBuilder {
    shape: ShapeKind,
    corner_radius: f32,
    corner_array: Option<[f32; 8]>,
    stroke_width: f32,
    stroke_color: Color,
    dash_width: f32,
    dash_gap: f32,
    normal_color: Color,
    press_color: Color,
    focus_color: Color,
    ripple_color: Color,
    gradient_kind: GradientKind,
    gradient_orientation: GradientOrientation,
    start_color: Color,
    center_color: Option<Color>,
    end_color: Option<Color>,
    gradient_radius: f32,
    gradient_color_stops: Option<Vec<Color>>,
}

impl Default for StyleBuilder {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Rectangle,
            corner_radius: DEFAULT_RADIUS,
            corner_array: None,
            stroke_width: 0.0,
            stroke_color: NORMAL_COLOR,
            dash_width: 0.0,
            dash_gap: 0.0,
            normal_color: NORMAL_COLOR,
            press_color: NORMAL_COLOR,
            focus_color: NORMAL_COLOR,
            ripple_color: DEFAULT_RIPPLE_COLOR,
            gradient_kind: GradientKind::Linear,
            gradient_orientation: GradientOrientation::LeftRight,
            start_color: NORMAL_COLOR,
            center_color: None,
            end_color: None,
            gradient_radius: DEFAULT_RADIUS,
            gradient_color_stops: None,
        }
    }
}

impl StyleBuilder {
    pub fn shape(mut self, v: ShapeKind) -> Self {
        self.shape = v;
        self
    }

    pub fn corner_radius(mut self, v: f32) -> Self {
        self.corner_radius = v;
        self
    }

    pub fn corner_array(mut self, v: [f32; 8]) -> Self {
        self.corner_array = Some(v);
        self
    }

    pub fn stroke_width(mut self, v: f32) -> Self {
        self.stroke_width = v;
        self
    }

    pub fn stroke_color(mut self, v: Color) -> Self {
        self.stroke_color = v;
        self
    }

    pub fn dash_width(mut self, v: f32) -> Self {
        self.dash_width = v;
        self
    }

    pub fn dash_gap(mut self, v: f32) -> Self {
        self.dash_gap = v;
        self
    }

    pub fn color(mut self, v: Color) -> Self {
        self.normal_color = v;
        self
    }

    pub fn press_color(mut self, v: Color) -> Self {
        self.press_color = v;
        self
    }

    pub fn focus_color(mut self, v: Color) -> Self {
        self.focus_color = v;
        self
    }

    pub fn ripple_color(mut self, v: Color) -> Self {
        self.ripple_color = v;
        self
    }

    pub fn gradient_kind(mut self, v: GradientKind) -> Self {
        self.gradient_kind = v;
        self
    }

    pub fn gradient_orientation(mut self, v: GradientOrientation) -> Self {
        self.gradient_orientation = v;
        self
    }

    pub fn start_color(mut self, v: Color) -> Self {
        self.start_color = v;
        self
    }

    pub fn center_color(mut self, v: Color) -> Self {
        self.center_color = Some(v);
        self
    }

    pub fn end_color(mut self, v: Color) -> Self {
        self.end_color = Some(v);
        self
    }

    pub fn gradient_radius(mut self, v: f32) -> Self {
        self.gradient_radius = v;
        self
    }

    pub fn gradient_color_stops(mut self, v: Vec<Color>) -> Self {
        self.gradient_color_stops = Some(v);
        self
    }

    /// Applies the cascade, then unlocks the press color.
    ///
    /// Fails with [`StyleError::LockRequiresGradient`] when the built style
    /// has no custom gradient; [`build`](Self::build) always yields a locked
    /// style.
    pub fn build_unlocked(self) -> Result<StyleConfiguration, StyleError> {
        self.build().with_lock_press_color(false)
    }

    /// Applies the cascade (center ← start, end ← center). The press color
    /// starts locked.
    pub fn build(self) -> StyleConfiguration {
        let center_color = self.center_color.unwrap_or(self.start_color);
        let end_color = self.end_color.unwrap_or(center_color);

        StyleConfiguration {
            shape: self.shape,
            corner_radius: self.corner_radius,
            corner_array: self.corner_array,
            stroke_width: self.stroke_width,
            stroke_color: self.stroke_color,
            dash_width: self.dash_width,
            dash_gap: self.dash_gap,
            normal_color: self.normal_color,
            press_color: self.press_color,
            focus_color: self.focus_color,
            ripple_color: self.ripple_color,
            gradient_kind: self.gradient_kind,
            gradient_orientation: self.gradient_orientation,
            start_color: self.start_color,
            center_color,
            end_color,
            gradient_radius: self.gradient_radius,
            gradient_color_stops: self.gradient_color_stops,
            lock_press_color: true,
        }
    }
}
