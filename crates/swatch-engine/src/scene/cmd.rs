use crate::scene::shapes::ellipse::{EllipseCmd, RingCmd};
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    RoundedRect(RoundedRectCmd),
    Ellipse(EllipseCmd),
    Ring(RingCmd),
    Line(LineCmd),
    Polygon(PolygonCmd),
}
