use swatch_engine::coords::{Rect, Vec2};
use swatch_engine::paint::Paint;
use swatch_engine::platform::CapabilityLevel;

use crate::compositor::{BackgroundSurface, ShapeStyleCompositor, VisualStateTree};
use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::state::InteractionState;
use crate::style::{StyleConfiguration, StyleError};
use crate::widget::{Element, Widget};

/// Size used on wrap-content axes.
const WRAP_SIZE: Vec2 = Vec2::new(200.0, 100.0);

/// Clickable widget whose background is fully described by a
/// [`StyleConfiguration`].
///
/// Every accepted style change recomputes the whole background tree and
/// requests a redraw. Rejected changes leave the previous style and tree in
/// place.
///
/// # Example
/// ```
/// use swatch_engine::paint::Color;
/// use swatch_engine::platform::CapabilityLevel;
/// use swatch_ui::widgets::ColorfulButton;
///
/// let mut button = ColorfulButton::new(CapabilityLevel::High)
///     .on_click(|| println!("clicked"));
/// button.restyle(|s| Ok(s.with_press_color(Color::from_argb(0xFF33_6699)))).unwrap();
/// assert!(button.take_redraw_request());
/// ```
pub struct ColorfulButton {
    style: StyleConfiguration,
    compositor: ShapeStyleCompositor,
    background: VisualStateTree,
    state: InteractionState,
    child: Option<Element>,
    on_click: Option<Box<dyn FnMut()>>,
    needs_redraw: bool,
}

impl ColorfulButton {
    /// Button with the default style, composed for `capability`.
    pub fn new(capability: CapabilityLevel) -> Self {
        Self::with_style(StyleConfiguration::default(), capability)
    }

    pub fn with_style(style: StyleConfiguration, capability: CapabilityLevel) -> Self {
        let compositor = ShapeStyleCompositor::new(capability);
        let background = compositor.recompute(&style);
        Self {
            style,
            compositor,
            background,
            state: InteractionState::default(),
            child: None,
            on_click: None,
            needs_redraw: false,
        }
    }

    /// Label or other content painted over the background.
    pub fn child(mut self, child: impl Widget) -> Self {
        self.child = Some(Element::new(child));
        self
    }

    /// Callback invoked when the button is clicked.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    // ── style ─────────────────────────────────────────────────────────────

    pub fn style(&self) -> &StyleConfiguration {
        &self.style
    }

    /// Applies a fallible style update.
    ///
    /// On error the previous configuration and background stay in effect.
    pub fn restyle<F>(&mut self, update: F) -> Result<(), StyleError>
    where
        F: FnOnce(StyleConfiguration) -> Result<StyleConfiguration, StyleError>,
    {
        match update(self.style.clone()) {
            Ok(style) => {
                self.set_style(style);
                Ok(())
            }
            Err(e) => {
                log::warn!("rejected style update: {e}");
                Err(e)
            }
        }
    }

    /// Replaces the style wholesale.
    pub fn set_style(&mut self, style: StyleConfiguration) {
        self.style = style;
        self.recompute();
    }

    pub fn capability(&self) -> CapabilityLevel {
        self.compositor.capability()
    }

    pub fn set_capability(&mut self, capability: CapabilityLevel) {
        self.compositor = ShapeStyleCompositor::new(capability);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.background = self.compositor.recompute(&self.style);
        self.needs_redraw = true;
    }

    // ── background ────────────────────────────────────────────────────────

    pub fn background(&self) -> &VisualStateTree {
        &self.background
    }

    /// In-place access to the current tree. Changes last until the next
    /// recompute.
    pub fn background_mut(&mut self) -> &mut VisualStateTree {
        &mut self.background
    }

    /// Hands a copy of the current background to `surface`.
    pub fn apply_to<S: BackgroundSurface + ?Sized>(&self, surface: &mut S) {
        self.background.clone().apply_to(surface);
    }

    // ── interaction ───────────────────────────────────────────────────────

    pub fn interaction_state(&self) -> InteractionState {
        self.state
    }

    /// Host-driven state (enabled, focused). Pressed is also derived from the
    /// pointer while painting.
    pub fn set_interaction_state(&mut self, state: InteractionState) {
        if self.state != state {
            self.state = state;
            self.needs_redraw = true;
        }
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn effective_state(&self, painter: &Painter<'_>, rect: Rect) -> InteractionState {
        if self.state.is_enabled() && painter.is_pressed(rect) {
            self.state | InteractionState::PRESSED
        } else {
            self.state
        }
    }
}

impl Widget for ColorfulButton {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.fill_or(WRAP_SIZE)
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        let state = self.effective_state(painter, rect);
        self.background.selector().select(state).paint(painter, rect);

        if let Some(ripple) = self.background.ripple() {
            if state.contains(InteractionState::PRESSED) {
                painter.fill_rounded_rect_corners(rect, ripple.mask, Paint::Solid(ripple.pressed_tint), None);
            }
        }

        if let Some(child) = &self.child {
            child.paint(painter, rect);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        match event {
            UiEvent::Click { pos } if rect.contains(*pos) && self.state.is_enabled() => {
                if let Some(f) = &mut self.on_click {
                    f();
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::compositor::{CompositionStrategy, StateSelector};
    use swatch_engine::paint::Color;
    use swatch_engine::scene::{DrawCmd, DrawList};

    const RED: Color = Color::from_argb(0xFFFF_0000);
    const GREEN: Color = Color::from_argb(0xFF00_FF00);
    const RIPPLE: Color = Color::from_argb(0x40FF_FFFF);
    const BOUNDS: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);

    fn styled(capability: CapabilityLevel) -> ColorfulButton {
        let style = StyleConfiguration::default()
            .with_color(RED)
            .with_press_color(GREEN)
            .with_ripple_color(RIPPLE);
        ColorfulButton::with_style(style, capability)
    }

    fn paint_at(button: &ColorfulButton, pos: Vec2, pressed: bool) -> DrawList {
        let mut list = DrawList::new();
        button.paint(&mut Painter::new(&mut list, pos, pressed), BOUNDS);
        list
    }

    fn first_fill(list: &DrawList) -> Paint {
        let DrawCmd::RoundedRect(cmd) = &list.items()[0].cmd else { panic!("expected rounded rect") };
        cmd.paint.clone()
    }

    // ── restyle ───────────────────────────────────────────────────────────

    #[test]
    fn rejected_update_keeps_previous_style() {
        let mut b = styled(CapabilityLevel::High);
        let before = b.background().clone();
        b.take_redraw_request();

        let err = b.restyle(|s| s.with_lock_press_color(false));
        assert_eq!(err, Err(StyleError::LockRequiresGradient));
        assert!(b.style().lock_press_color());
        assert_eq!(b.background(), &before);
        assert!(!b.take_redraw_request());

        let err = b.restyle(|s| s.with_shape_raw(7));
        assert_eq!(err, Err(StyleError::ShapeOutOfRange(7)));
        assert!(!b.take_redraw_request());
    }

    #[test]
    fn accepted_update_recomputes() {
        let mut b = styled(CapabilityLevel::Mid);
        b.restyle(|s| Ok(s.with_color(GREEN))).unwrap();
        assert!(b.take_redraw_request());
        assert_eq!(first_fill(&paint_at(&b, Vec2::new(500.0, 500.0), false)), Paint::Solid(GREEN));
    }

    #[test]
    fn capability_change_recomputes() {
        let mut b = styled(CapabilityLevel::Low);
        assert_eq!(b.background().strategy(), CompositionStrategy::Legacy);
        b.set_capability(CapabilityLevel::High);
        assert_eq!(b.capability(), CapabilityLevel::High);
        assert_eq!(b.background().strategy(), CompositionStrategy::Layered);
        assert!(b.take_redraw_request());
    }

    #[test]
    fn manual_edits_last_until_recompute() {
        let mut b = styled(CapabilityLevel::Mid);
        b.background_mut()
            .selector_mut()
            .renderer_mut(crate::compositor::ColorRole::Normal)
            .set_color(GREEN);
        assert_eq!(first_fill(&paint_at(&b, Vec2::zero(), false)), Paint::Solid(GREEN));

        b.set_style(b.style().clone());
        assert_eq!(first_fill(&paint_at(&b, Vec2::zero(), false)), Paint::Solid(RED));
    }

    // ── paint ─────────────────────────────────────────────────────────────

    #[test]
    fn pointer_press_selects_pressed_renderer_and_ripple() {
        let b = styled(CapabilityLevel::High);
        let list = paint_at(&b, Vec2::new(10.0, 10.0), true);
        assert_eq!(list.len(), 2);
        assert_eq!(first_fill(&list), Paint::Solid(GREEN));
        let DrawCmd::RoundedRect(ripple) = &list.items()[1].cmd else { panic!("expected ripple") };
        assert_eq!(ripple.paint, Paint::Solid(RIPPLE));
    }

    #[test]
    fn no_ripple_below_high_capability() {
        let b = styled(CapabilityLevel::Mid);
        let list = paint_at(&b, Vec2::new(10.0, 10.0), true);
        assert_eq!(list.len(), 1);
        assert_eq!(first_fill(&list), Paint::Solid(GREEN));
    }

    #[test]
    fn disabled_button_ignores_pointer() {
        let mut b = styled(CapabilityLevel::High);
        b.set_interaction_state(InteractionState::empty());
        let list = paint_at(&b, Vec2::new(10.0, 10.0), true);
        assert_eq!(list.len(), 1);
        assert_eq!(first_fill(&list), Paint::Solid(RED));
    }

    #[test]
    fn measure_wraps_to_default_size() {
        let b = ColorfulButton::new(CapabilityLevel::Low);
        assert_eq!(b.measure(Constraints::unbounded()), Vec2::new(200.0, 100.0));
        assert_eq!(b.measure(Constraints::loose(Vec2::new(320.0, 48.0))), Vec2::new(320.0, 48.0));
    }

    // ── events ────────────────────────────────────────────────────────────

    #[test]
    fn click_inside_invokes_callback() {
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut b = ColorfulButton::new(CapabilityLevel::Mid).on_click(move || h.set(h.get() + 1));

        let inside = UiEvent::Click { pos: Vec2::new(5.0, 5.0) };
        let outside = UiEvent::Click { pos: Vec2::new(500.0, 5.0) };
        assert!(b.on_event(&inside, BOUNDS).is_consumed());
        assert!(!b.on_event(&outside, BOUNDS).is_consumed());
        assert!(!b.on_event(&UiEvent::Hover { pos: Vec2::new(5.0, 5.0) }, BOUNDS).is_consumed());
        assert_eq!(hits.get(), 1);
    }

    // ── surface ───────────────────────────────────────────────────────────

    #[derive(Default)]
    struct Legacy(Option<StateSelector>);

    impl BackgroundSurface for Legacy {
        fn set_background(&mut self, _tree: VisualStateTree) {
            panic!("low capability must use the legacy entry point");
        }
        fn set_background_legacy(&mut self, states: StateSelector) {
            self.0 = Some(states);
        }
    }

    #[test]
    fn apply_to_uses_strategy_entry_point() {
        let b = styled(CapabilityLevel::Low);
        let mut surface = Legacy::default();
        b.apply_to(&mut surface);
        assert_eq!(surface.0.as_ref(), Some(b.background().selector()));
    }
}
