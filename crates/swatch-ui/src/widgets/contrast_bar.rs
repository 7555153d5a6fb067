use swatch_engine::coords::{Rect, Vec2};
use swatch_engine::paint::{Color, Paint};

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// Two-tone split bar: the main color fills the share given by `progress`,
/// the back color fills the rest, and the two meet at a slanted notch.
///
/// # Example
/// ```
/// use swatch_ui::widgets::ContrastBar;
///
/// let mut bar = ContrastBar::new();
/// bar.set_progress(0.25);
/// assert!(bar.take_redraw_request());
/// ```
pub struct ContrastBar {
    progress: f32,
    bar_height: u32,
    radius: u32,
    main_color: Color,
    back_color: Color,
    needs_redraw: bool,
}

/// Horizontal overhang of each arrow past its rectangle, in pixels.
const NOTCH: f32 = 10.0;

impl ContrastBar {
    pub const MAIN_COLOR: Color = Color::from_argb(0xFF86_8FFF);
    pub const BACK_COLOR: Color = Color::from_argb(0xFFDD_DDDD);

    pub fn new() -> Self {
        Self {
            progress: 0.0,
            bar_height: 40,
            radius: 10,
            main_color: Self::MAIN_COLOR,
            back_color: Self::BACK_COLOR,
            needs_redraw: false,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn bar_height(&self) -> u32 {
        self.bar_height
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Stores `progress` as given. Only values in `[0, 1]` request a redraw;
    /// anything else is kept but stays off screen until the next redraw.
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
        if (0.0..=1.0).contains(&progress) {
            self.needs_redraw = true;
        }
    }

    pub fn set_bar_height(&mut self, height: u32) {
        self.bar_height = height;
        self.needs_redraw = true;
    }

    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius;
        self.needs_redraw = true;
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Shapes for a `width` × `h` bar, relative to its top-left corner.
    ///
    /// The laid-out height wins over `bar_height`, which only sizes the bar
    /// on wrap-content axes.
    fn layout(&self, width: f32, h: f32) -> BarLayout {
        let split = (self.progress * width).trunc();

        let left_edge = split - (h / 2.0).trunc();
        let left = Rect::from_ltrb(0.0, 0.0, left_edge, h);
        let left_arrow = (self.progress > 0.0 && self.progress < 1.0).then(|| {
            vec![
                Vec2::new(left_edge - NOTCH, 0.0),
                Vec2::new(left_edge + h, 0.0),
                Vec2::new(left_edge, h),
                Vec2::new(left_edge - NOTCH, h),
            ]
        });

        let right_edge = split + h;
        let right = Rect::from_ltrb(right_edge, 0.0, width, h);
        let right_arrow = vec![
            Vec2::new(right_edge + NOTCH, 0.0),
            Vec2::new(right_edge, 0.0),
            Vec2::new(right_edge - h, h),
            Vec2::new(right_edge, h),
            Vec2::new(right_edge + NOTCH, h),
        ];

        BarLayout { left, left_arrow, right, right_arrow }
    }
}

impl Default for ContrastBar {
    fn default() -> Self {
        Self::new()
    }
}

struct BarLayout {
    left: Rect,
    left_arrow: Option<Vec<Vec2>>,
    right: Rect,
    right_arrow: Vec<Vec2>,
}

fn offset(points: Vec<Vec2>, by: Vec2) -> Vec<Vec2> {
    points.into_iter().map(|p| p + by).collect()
}

fn translate(rect: Rect, by: Vec2) -> Rect {
    Rect { origin: rect.origin + by, size: rect.size }
}

impl Widget for ContrastBar {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.fill_or(Vec2::new(200.0, self.bar_height as f32))
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let at = rect.origin;
        let layout = self.layout(rect.size.x, rect.size.y);
        let radius = self.radius as f32;

        // Degenerate rectangles at the ends (progress 0 or 1) are skipped.
        if !layout.left.is_empty() {
            painter.fill_rounded_rect(translate(layout.left, at), radius, Paint::Solid(self.main_color), None);
        }
        if let Some(arrow) = layout.left_arrow {
            painter.fill_polygon(offset(arrow, at), self.main_color);
        }
        if !layout.right.is_empty() {
            painter.fill_rounded_rect(translate(layout.right, at), radius, Paint::Solid(self.back_color), None);
        }
        painter.fill_polygon(offset(layout.right_arrow, at), self.back_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_engine::scene::{DrawCmd, DrawList};

    fn paint(bar: &ContrastBar, rect: Rect) -> DrawList {
        let mut list = DrawList::new();
        bar.paint(&mut Painter::new(&mut list, Vec2::zero(), false), rect);
        list
    }

    fn points(cmd: &DrawCmd) -> Vec<(f32, f32)> {
        let DrawCmd::Polygon(p) = cmd else { panic!("expected polygon, got {cmd:?}") };
        p.points.iter().map(|v| (v.x, v.y)).collect()
    }

    // ── redraw requests ───────────────────────────────────────────────────

    #[test]
    fn out_of_range_progress_is_stored_without_redraw() {
        let mut bar = ContrastBar::new();
        bar.set_progress(1.5);
        assert_eq!(bar.progress(), 1.5);
        assert!(!bar.take_redraw_request());

        bar.set_progress(-0.1);
        assert_eq!(bar.progress(), -0.1);
        assert!(!bar.take_redraw_request());

        bar.set_progress(1.0);
        assert!(bar.take_redraw_request());
        assert!(!bar.take_redraw_request());
    }

    #[test]
    fn geometry_setters_request_redraw() {
        let mut bar = ContrastBar::new();
        bar.set_radius(4);
        assert!(bar.take_redraw_request());
        bar.set_bar_height(20);
        assert!(bar.take_redraw_request());
        assert_eq!(bar.measure(Constraints::unbounded()), Vec2::new(200.0, 20.0));
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn half_progress_layout() {
        let mut bar = ContrastBar::new();
        bar.set_progress(0.5);
        let list = paint(&bar, Rect::new(0.0, 0.0, 400.0, 40.0));
        let items = list.items();
        assert_eq!(items.len(), 4);

        let DrawCmd::RoundedRect(left) = &items[0].cmd else { panic!("expected left rect") };
        assert_eq!(left.rect, Rect::new(0.0, 0.0, 180.0, 40.0));
        assert_eq!(left.paint, Paint::Solid(ContrastBar::MAIN_COLOR));

        assert_eq!(points(&items[1].cmd), vec![(170.0, 0.0), (220.0, 0.0), (180.0, 40.0), (170.0, 40.0)]);

        let DrawCmd::RoundedRect(right) = &items[2].cmd else { panic!("expected right rect") };
        assert_eq!(right.rect, Rect::new(240.0, 0.0, 160.0, 40.0));
        assert_eq!(right.paint, Paint::Solid(ContrastBar::BACK_COLOR));

        assert_eq!(
            points(&items[3].cmd),
            vec![(250.0, 0.0), (240.0, 0.0), (200.0, 40.0), (240.0, 40.0), (250.0, 40.0)]
        );
    }

    #[test]
    fn laid_out_height_overrides_bar_height() {
        let mut bar = ContrastBar::new();
        bar.set_progress(0.5);
        let list = paint(&bar, Rect::new(0.0, 0.0, 400.0, 60.0));
        let items = list.items();

        let DrawCmd::RoundedRect(left) = &items[0].cmd else { panic!("expected left rect") };
        assert_eq!(left.rect, Rect::new(0.0, 0.0, 170.0, 60.0));
        assert_eq!(points(&items[1].cmd), vec![(160.0, 0.0), (230.0, 0.0), (170.0, 60.0), (160.0, 60.0)]);

        let DrawCmd::RoundedRect(right) = &items[2].cmd else { panic!("expected right rect") };
        assert_eq!(right.rect, Rect::new(260.0, 0.0, 140.0, 60.0));
    }

    #[test]
    fn split_point_is_truncated() {
        let mut bar = ContrastBar::new();
        bar.set_progress(0.333);
        let layout = bar.layout(100.0, 40.0);
        assert_eq!(layout.left.max().x, 33.0 - 20.0);
        assert_eq!(layout.right.origin.x, 73.0);
    }

    #[test]
    fn endpoints_drop_left_arrow() {
        let mut bar = ContrastBar::new();
        bar.set_progress(0.0);
        assert!(bar.layout(400.0, 40.0).left_arrow.is_none());
        // Left rect and arrow are gone; back rect and its arrow remain.
        assert_eq!(paint(&bar, Rect::new(0.0, 0.0, 400.0, 40.0)).len(), 2);

        bar.set_progress(1.0);
        assert!(bar.layout(400.0, 40.0).left_arrow.is_none());
        // Back rect collapses past the right edge; its arrow is still drawn.
        assert_eq!(paint(&bar, Rect::new(0.0, 0.0, 400.0, 40.0)).len(), 2);
    }

    #[test]
    fn paint_is_relative_to_rect_origin() {
        let mut bar = ContrastBar::new();
        bar.set_progress(0.5);
        let list = paint(&bar, Rect::new(10.0, 5.0, 400.0, 40.0));
        let DrawCmd::RoundedRect(left) = &list.items()[0].cmd else { panic!("expected left rect") };
        assert_eq!(left.rect, Rect::new(10.0, 5.0, 180.0, 40.0));
    }
}
