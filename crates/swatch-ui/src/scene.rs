use swatch_engine::coords::{Rect, Vec2};
use swatch_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Widget;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of pointer state for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Owns the `DrawList` that is rebuilt by each [`frame`](Self::frame) call.
///
/// # Example
///
/// ```
/// use swatch_engine::coords::Vec2;
/// use swatch_engine::platform::CapabilityLevel;
/// use swatch_ui::scene::{UiInput, UiScene};
/// use swatch_ui::widgets::ColorfulButton;
///
/// let mut ui = UiScene::new();
/// let mut button = ColorfulButton::new(CapabilityLevel::Mid);
/// let list = ui.frame(&mut button, Vec2::new(200.0, 100.0), &UiInput::default());
/// assert_eq!(list.len(), 1);
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { draw_list: DrawList::new() }
    }

    /// Measure, paint, and route this frame's events through `root`.
    ///
    /// The root occupies the full viewport. The returned list is owned by the
    /// scene and valid until the next call.
    pub fn frame<W: Widget + ?Sized>(&mut self, root: &mut W, viewport: Vec2, input: &UiInput) -> &mut DrawList {
        self.draw_list.clear();

        // ── measure ───────────────────────────────────────────────────────
        let _ = root.measure(Constraints::loose(viewport));
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list, input.mouse_pos, input.mouse_pressed);
            root.paint(&mut painter, rect);
        }

        // ── events ────────────────────────────────────────────────────────
        root.on_event(&UiEvent::Hover { pos: input.mouse_pos }, rect);
        if input.mouse_clicked {
            root.on_event(&UiEvent::Click { pos: input.mouse_pos }, rect);
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::widgets::{ColorfulButton, ContrastBar};
    use swatch_engine::platform::CapabilityLevel;

    const VIEWPORT: Vec2 = Vec2::new(200.0, 100.0);

    #[test]
    fn frame_clears_previous_list() {
        let mut ui = UiScene::new();
        let mut bar = ContrastBar::new();
        bar.set_progress(0.5);
        let n = ui.frame(&mut bar, Vec2::new(400.0, 40.0), &UiInput::default()).len();
        assert_eq!(n, 4);
        let n = ui.frame(&mut bar, Vec2::new(400.0, 40.0), &UiInput::default()).len();
        assert_eq!(n, 4);
    }

    #[test]
    fn click_is_routed_after_paint() {
        let clicked = Rc::new(Cell::new(false));
        let c = clicked.clone();
        let mut button = ColorfulButton::new(CapabilityLevel::High).on_click(move || c.set(true));

        let mut ui = UiScene::new();
        let input = UiInput { mouse_pos: Vec2::new(20.0, 20.0), mouse_pressed: true, mouse_clicked: false };
        // Pressed: base shape plus ripple overlay.
        assert_eq!(ui.frame(&mut button, VIEWPORT, &input).len(), 2);
        assert!(!clicked.get());

        let input = UiInput { mouse_pressed: false, mouse_clicked: true, ..input };
        assert_eq!(ui.frame(&mut button, VIEWPORT, &input).len(), 1);
        assert!(clicked.get());
    }
}
