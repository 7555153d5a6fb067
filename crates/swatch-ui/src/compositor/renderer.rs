use swatch_engine::coords::{CornerRadii, Rect, Vec2};
use swatch_engine::paint::{Color, ColorStop, LinearGradient, Paint, RadialGradient, SweepGradient};
use swatch_engine::scene::{Border, Dash};

use crate::painter::Painter;
use crate::style::{GradientKind, GradientOrientation, ShapeKind};

/// Effective fill of a shape renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    /// Colors spread evenly along the gradient.
    Gradient(Vec<Color>),
}

/// Corner rounding of rectangle shapes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CornerGeometry {
    Uniform(f32),
    PerCorner(CornerRadii),
}

impl CornerGeometry {
    pub fn radii(self) -> CornerRadii {
        match self {
            CornerGeometry::Uniform(r) => CornerRadii::all(r),
            CornerGeometry::PerCorner(radii) => radii,
        }
    }
}

/// Outline stroke. Width is whole pixels; zero disables the stroke.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub dash_width: f32,
    pub dash_gap: f32,
}

impl Stroke {
    pub const NONE: Stroke = Stroke {
        width: 0.0,
        color: Color::transparent(),
        dash_width: 0.0,
        dash_gap: 0.0,
    };

    fn border(self) -> Option<Border> {
        (self.width > 0.0)
            .then(|| Border::new(self.width, self.color).dashed(Dash::new(self.dash_width, self.dash_gap)))
    }
}

/// Drawable for one interaction state.
///
/// A plain value: every state slot owns its own renderer, and hosts may
/// mutate one in place without the change showing up in any other slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRenderer {
    shape: ShapeKind,
    fill: Fill,
    corners: CornerGeometry,
    stroke: Stroke,
    gradient_kind: GradientKind,
    gradient_radius: f32,
    orientation: GradientOrientation,
}

impl ShapeRenderer {
    /// Solid-fill rectangle with square corners and no stroke.
    pub fn solid(color: Color) -> Self {
        Self {
            shape: ShapeKind::Rectangle,
            fill: Fill::Solid(color),
            corners: CornerGeometry::Uniform(0.0),
            stroke: Stroke::NONE,
            gradient_kind: GradientKind::Linear,
            gradient_radius: 0.0,
            orientation: GradientOrientation::TopBottom,
        }
    }

    /// Gradient-fill rectangle running along `orientation`.
    pub fn gradient(orientation: GradientOrientation, colors: Vec<Color>) -> Self {
        Self { fill: Fill::Gradient(colors), orientation, ..Self::solid(Color::transparent()) }
    }

    // ── mutation ──────────────────────────────────────────────────────────

    /// Replaces the fill with a solid color, discarding any gradient colors.
    pub fn set_color(&mut self, color: Color) {
        self.fill = Fill::Solid(color);
    }

    pub fn set_colors(&mut self, colors: Vec<Color>) {
        self.fill = Fill::Gradient(colors);
    }

    pub fn set_shape(&mut self, shape: ShapeKind) {
        self.shape = shape;
    }

    /// Per-corner `(x, y)` radii (TL, TR, BL, BR). `None` keeps the current
    /// corners.
    pub fn set_corner_radii(&mut self, radii: Option<[f32; 8]>) {
        if let Some(a) = radii {
            self.corners = CornerGeometry::PerCorner(CornerRadii::from_array(a));
        }
    }

    /// Uniform radius; replaces any per-corner radii.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corners = CornerGeometry::Uniform(radius);
    }

    /// `width` is truncated to whole pixels.
    pub fn set_stroke(&mut self, width: f32, color: Color, dash_width: f32, dash_gap: f32) {
        self.stroke = Stroke { width: width.trunc(), color, dash_width, dash_gap };
    }

    pub fn set_gradient_kind(&mut self, kind: GradientKind) {
        self.gradient_kind = kind;
    }

    pub fn set_gradient_radius(&mut self, radius: f32) {
        self.gradient_radius = radius;
    }

    pub fn set_orientation(&mut self, orientation: GradientOrientation) {
        self.orientation = orientation;
    }

    // ── queries ───────────────────────────────────────────────────────────

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn resolved_fill(&self) -> &Fill {
        &self.fill
    }

    pub fn corners(&self) -> CornerGeometry {
        self.corners
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    pub fn gradient_kind(&self) -> GradientKind {
        self.gradient_kind
    }

    pub fn gradient_radius(&self) -> f32 {
        self.gradient_radius
    }

    pub fn orientation(&self) -> GradientOrientation {
        self.orientation
    }

    /// Engine paint for this renderer's fill laid out over `bounds`.
    pub fn paint_for(&self, bounds: Rect) -> Paint {
        let colors = match &self.fill {
            Fill::Solid(c) => return Paint::Solid(*c),
            Fill::Gradient(colors) => colors,
        };
        let stops = ColorStop::evenly_spaced(colors);
        match self.gradient_kind {
            GradientKind::Linear => {
                let (start, end) = self.orientation.endpoints(bounds);
                Paint::LinearGradient(LinearGradient::new(start, end, stops))
            }
            GradientKind::Radial => {
                Paint::RadialGradient(RadialGradient::new(bounds.center(), self.gradient_radius, stops))
            }
            GradientKind::Sweep => Paint::SweepGradient(SweepGradient::new(bounds.center(), stops)),
        }
    }

    /// Records this shape into `painter`, filling `rect`.
    pub fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let border = self.stroke.border();
        match self.shape {
            ShapeKind::Rectangle => {
                let paint = self.paint_for(rect);
                painter.fill_rounded_rect_corners(rect, self.corners.radii(), paint, border);
            }
            ShapeKind::Oval => painter.fill_ellipse(rect, self.paint_for(rect), border),
            ShapeKind::Line => {
                // A line is all stroke; the fill does not apply.
                if self.stroke.width > 0.0 {
                    let y = rect.center().y;
                    painter.stroke_line(
                        Vec2::new(rect.origin.x, y),
                        Vec2::new(rect.max().x, y),
                        self.stroke.width,
                        self.stroke.color,
                        Dash::new(self.stroke.dash_width, self.stroke.dash_gap),
                    );
                }
            }
            ShapeKind::Ring => {
                let side = rect.min_side();
                painter.fill_ring(rect, side / 3.0, side / 9.0, self.paint_for(rect), border);
            }
        }
    }
}
