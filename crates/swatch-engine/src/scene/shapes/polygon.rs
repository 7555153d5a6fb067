use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Closed polygon filled with the non-zero rule.
///
/// The path is implicitly closed from the last point back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub paint: Paint,
}

impl DrawList {
    /// Records a filled polygon. Fewer than three points records nothing.
    pub fn push_polygon(&mut self, z: ZIndex, points: Vec<Vec2>, paint: Paint) {
        if points.len() < 3 {
            return;
        }
        self.push(z, DrawCmd::Polygon(PolygonCmd { points, paint }));
    }
}
