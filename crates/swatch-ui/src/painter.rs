use swatch_engine::coords::{CornerRadii, Rect, Vec2};
use swatch_engine::paint::{Color, Paint};
use swatch_engine::scene::{Border, Dash, DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a high-level API and exposes per-frame
/// pointer state so widgets can express pressed visuals directly in their
/// paint implementations.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
    /// Current pointer position in logical pixels.
    pub mouse_pos: Vec2,
    /// True while the primary button is held down.
    pub mouse_pressed: bool,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, mouse_pos: Vec2, mouse_pressed: bool) -> Self {
        Self { draw_list, z: 0, mouse_pos, mouse_pressed }
    }

    // ── input queries ─────────────────────────────────────────────────────

    /// Returns `true` if the primary button is held and the pointer is over `rect`.
    #[inline]
    pub fn is_pressed(&self, rect: Rect) -> bool {
        self.mouse_pressed && rect.contains(self.mouse_pos)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Rounded rectangle with a uniform radius and optional border.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, paint: impl Into<Paint>, border: Option<Border>) {
        self.fill_rounded_rect_corners(rect, CornerRadii::all(radius), paint, border);
    }

    /// Rounded rectangle with per-corner radii and optional border.
    pub fn fill_rounded_rect_corners(
        &mut self,
        rect: Rect,
        radii: CornerRadii,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, radii, paint.into(), border);
    }

    /// Ellipse inscribed in `bounds`.
    pub fn fill_ellipse(&mut self, bounds: Rect, paint: impl Into<Paint>, border: Option<Border>) {
        let z = self.next_z();
        self.draw_list.push_ellipse(z, bounds, paint.into(), border);
    }

    /// Annulus centered in `bounds`.
    pub fn fill_ring(
        &mut self,
        bounds: Rect,
        inner_radius: f32,
        thickness: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.draw_list.push_ring(z, bounds, inner_radius, thickness, paint.into(), border);
    }

    /// Stroked line segment.
    pub fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, dash: Option<Dash>) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, width, color, dash);
    }

    /// Closed filled polygon.
    pub fn fill_polygon(&mut self, points: Vec<Vec2>, paint: impl Into<Paint>) {
        let z = self.next_z();
        self.draw_list.push_polygon(z, points, paint.into());
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
