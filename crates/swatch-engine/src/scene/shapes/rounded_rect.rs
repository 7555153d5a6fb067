use crate::coords::{CornerRadii, Rect};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Border;

/// Rounded rectangle draw payload.
///
/// `radii` are already clamped to the rectangle, so a backend can trace the
/// outline without further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a rounded rectangle. Oversized corners shrink to half the
    /// rectangle's width and height.
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radii: CornerRadii,
        paint: Paint,
        border: Option<Border>,
    ) {
        let radii = radii.clamped_to(rect.size);
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, paint, border }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn pill_radius_is_clamped_to_half_height() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 200.0, 40.0);
        let paint = Color::transparent().into();
        list.push_rounded_rect(ZIndex::default(), rect, CornerRadii::all(999.0), paint, None);

        let DrawCmd::RoundedRect(cmd) = &list.items()[0].cmd else { panic!("expected rounded rect") };
        assert_eq!(cmd.rect, rect);
        assert_eq!(cmd.radii, CornerRadii::all(999.0).clamped_to(rect.size));
        assert_eq!(cmd.radii.top_left, (100.0, 20.0));
    }

    #[test]
    fn small_radii_pass_through() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        list.push_rounded_rect(ZIndex::default(), rect, CornerRadii::all(8.0), Color::transparent().into(), None);
        let DrawCmd::RoundedRect(cmd) = &list.items()[0].cmd else { panic!("expected rounded rect") };
        assert_eq!(cmd.radii, CornerRadii::all(8.0));
    }
}
