pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod rounded_rect;

pub use ellipse::{EllipseCmd, RingCmd};
pub use line::LineCmd;
pub use polygon::PolygonCmd;
pub use rounded_rect::RoundedRectCmd;

use crate::paint::Color;

/// Dash pattern for strokes: `width` on, `gap` off.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dash {
    pub width: f32,
    pub gap: f32,
}

impl Dash {
    /// Returns `None` when either length is zero (solid stroke).
    #[inline]
    pub fn new(width: f32, gap: f32) -> Option<Self> {
        (width > 0.0 && gap > 0.0).then_some(Self { width, gap })
    }
}

/// Stroke drawn along the outer edge of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub dash: Option<Dash>,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color, dash: None }
    }

    #[inline]
    pub fn dashed(mut self, dash: Option<Dash>) -> Self {
        self.dash = dash;
        self
    }
}
