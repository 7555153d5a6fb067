use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Ellipse inscribed in `bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub bounds: Rect,
    pub paint: Paint,
    pub border: Option<Border>,
}

/// Annulus centered in `bounds`: the band between `inner_radius` and
/// `inner_radius + thickness` is filled.
#[derive(Debug, Clone, PartialEq)]
pub struct RingCmd {
    pub bounds: Rect,
    pub inner_radius: f32,
    pub thickness: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records an ellipse draw command.
    #[inline]
    pub fn push_ellipse(&mut self, z: ZIndex, bounds: Rect, paint: Paint, border: Option<Border>) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd { bounds, paint, border }));
    }

    /// Records a ring draw command.
    #[inline]
    pub fn push_ring(
        &mut self,
        z: ZIndex,
        bounds: Rect,
        inner_radius: f32,
        thickness: f32,
        paint: Paint,
        border: Option<Border>,
    ) {
        self.push(
            z,
            DrawCmd::Ring(RingCmd { bounds, inner_radius, thickness, paint, border }),
        );
    }
}
