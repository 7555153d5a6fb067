//! Shape style compositor.
//!
//! Turns a [`StyleConfiguration`] and a host [`CapabilityLevel`] into a
//! [`VisualStateTree`]:
//!
//! 1. one [`ShapeRenderer`] per color role (normal, pressed, focused), each
//!    freshly built;
//! 2. a [`StateSelector`] mapping interaction states to those renderers;
//! 3. a capability-gated composition: ripple overlay on `High`, the bare
//!    selector on `Mid`, the bare selector through the legacy entry point on
//!    `Low`.
//!
//! Recomputation is a pure function of its inputs. Nothing is cached between
//! calls; every call rebuilds the whole tree.

mod renderer;
mod selector;

pub use renderer::{CornerGeometry, Fill, ShapeRenderer, Stroke};
pub use selector::{ColorRole, StateSelector};

use swatch_engine::coords::CornerRadii;
use swatch_engine::paint::Color;
use swatch_engine::platform::CapabilityLevel;

use crate::style::StyleConfiguration;

/// Touch feedback layer drawn above the state selector.
#[derive(Debug, Clone, PartialEq)]
pub struct RippleLayer {
    /// Feedback is clipped to this rounded-rect mask.
    pub mask: CornerRadii,
    /// Tint while pressed.
    pub pressed_tint: Color,
    /// Tint in every other state. Same as `pressed_tint` so the first touch
    /// does not flash.
    pub idle_tint: Color,
}

impl RippleLayer {
    fn for_style(style: &StyleConfiguration) -> Self {
        let r = style.corner_radius();
        Self {
            mask: CornerRadii::all(r),
            pressed_tint: style.ripple_color(),
            idle_tint: style.ripple_color(),
        }
    }
}

/// How the tree is handed to the host surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CompositionStrategy {
    /// State selector under a ripple layer.
    Layered,
    /// State selector alone.
    StateList,
    /// State selector alone, through the legacy assignment path.
    Legacy,
}

impl CompositionStrategy {
    pub fn for_capability(level: CapabilityLevel) -> Self {
        match level {
            CapabilityLevel::High => CompositionStrategy::Layered,
            CapabilityLevel::Mid => CompositionStrategy::StateList,
            CapabilityLevel::Low => CompositionStrategy::Legacy,
        }
    }
}

/// Displayable result of a recompute.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualStateTree {
    Layered { states: StateSelector, ripple: RippleLayer },
    StateList(StateSelector),
    Legacy(StateSelector),
}

impl VisualStateTree {
    pub fn strategy(&self) -> CompositionStrategy {
        match self {
            VisualStateTree::Layered { .. } => CompositionStrategy::Layered,
            VisualStateTree::StateList(_) => CompositionStrategy::StateList,
            VisualStateTree::Legacy(_) => CompositionStrategy::Legacy,
        }
    }

    pub fn selector(&self) -> &StateSelector {
        match self {
            VisualStateTree::Layered { states, .. } => states,
            VisualStateTree::StateList(states) | VisualStateTree::Legacy(states) => states,
        }
    }

    pub fn selector_mut(&mut self) -> &mut StateSelector {
        match self {
            VisualStateTree::Layered { states, .. } => states,
            VisualStateTree::StateList(states) | VisualStateTree::Legacy(states) => states,
        }
    }

    pub fn ripple(&self) -> Option<&RippleLayer> {
        match self {
            VisualStateTree::Layered { ripple, .. } => Some(ripple),
            _ => None,
        }
    }

    /// Hands the tree to `surface` through the entry point its strategy uses.
    pub fn apply_to<S: BackgroundSurface + ?Sized>(self, surface: &mut S) {
        match self {
            VisualStateTree::Legacy(states) => surface.set_background_legacy(states),
            tree => surface.set_background(tree),
        }
    }
}

/// Host display surface receiving composed backgrounds.
pub trait BackgroundSurface {
    /// Layered and state-list backgrounds.
    fn set_background(&mut self, tree: VisualStateTree);

    /// Legacy assignment path used on `Low` capability hosts.
    fn set_background_legacy(&mut self, states: StateSelector);
}

/// Compiles style configurations for one host capability level.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct ShapeStyleCompositor {
    capability: CapabilityLevel,
}

impl ShapeStyleCompositor {
    pub fn new(capability: CapabilityLevel) -> Self {
        Self { capability }
    }

    pub fn capability(&self) -> CapabilityLevel {
        self.capability
    }

    /// Builds the renderer for one color role.
    ///
    /// Locked renderers start from the style's gradient colors. If the
    /// gradient was never customized, the fill is overridden with
    /// `role_color` so a plain solid style does not render as a flat gray
    /// gradient. Unlocked renderers are always solid `role_color`.
    pub fn build_renderer(style: &StyleConfiguration, role_color: Color, locked: bool) -> ShapeRenderer {
        let mut r = if locked {
            let mut r = ShapeRenderer::gradient(style.gradient_orientation(), style.gradient_colors());
            if !style.has_custom_gradient() {
                r.set_color(role_color);
            }
            r
        } else {
            ShapeRenderer::solid(role_color)
        };

        r.set_shape(style.shape());
        r.set_corner_radii(style.corner_array());
        r.set_corner_radius(style.corner_radius());
        r.set_stroke(style.stroke_width(), style.stroke_color(), style.dash_width(), style.dash_gap());
        r.set_gradient_kind(style.gradient_kind());
        r.set_gradient_radius(style.gradient_radius());
        r.set_orientation(style.gradient_orientation());
        r
    }

    /// Per-state selector for `style`. The normal renderer is always locked.
    pub fn build_selector(style: &StyleConfiguration) -> StateSelector {
        let lock = style.lock_press_color();
        StateSelector::new(
            Self::build_renderer(style, style.normal_color(), true),
            Self::build_renderer(style, style.press_color(), lock),
            Self::build_renderer(style, style.focus_color(), lock),
        )
    }

    /// Full visual-state tree for `style` at this compositor's capability.
    pub fn recompute(&self, style: &StyleConfiguration) -> VisualStateTree {
        let states = Self::build_selector(style);
        let strategy = CompositionStrategy::for_capability(self.capability);
        log::debug!("recomputed {:?} background at {} capability", strategy, self.capability);

        match strategy {
            CompositionStrategy::Layered => {
                VisualStateTree::Layered { states, ripple: RippleLayer::for_style(style) }
            }
            CompositionStrategy::StateList => VisualStateTree::StateList(states),
            CompositionStrategy::Legacy => VisualStateTree::Legacy(states),
        }
    }
}

/// Shorthand for `ShapeStyleCompositor::new(capability).recompute(style)`.
pub fn recompute(style: &StyleConfiguration, capability: CapabilityLevel) -> VisualStateTree {
    ShapeStyleCompositor::new(capability).recompute(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InteractionState;
    use crate::style::{GradientKind, GradientOrientation, ShapeKind, NORMAL_COLOR};

    const RED: Color = Color::from_argb(0xFFFF_0000);
    const GREEN: Color = Color::from_argb(0xFF00_FF00);
    const BLUE: Color = Color::from_argb(0xFF00_00FF);
    const ALL: [CapabilityLevel; 3] = [CapabilityLevel::Low, CapabilityLevel::Mid, CapabilityLevel::High];

    fn solid_style() -> StyleConfiguration {
        StyleConfiguration::default()
            .with_color(RED)
            .with_press_color(GREEN)
            .with_focus_color(BLUE)
    }

    // ── build_renderer ────────────────────────────────────────────────────

    #[test]
    fn degenerate_gradient_resolves_to_role_color() {
        let sel = ShapeStyleCompositor::build_selector(&solid_style());
        assert_eq!(sel.renderer(ColorRole::Normal).resolved_fill(), &Fill::Solid(RED));
        assert_eq!(sel.renderer(ColorRole::Pressed).resolved_fill(), &Fill::Solid(GREEN));
        assert_eq!(sel.renderer(ColorRole::Focused).resolved_fill(), &Fill::Solid(BLUE));
    }

    #[test]
    fn locked_gradient_is_shared_by_every_role() {
        let style = solid_style().with_start_color(RED).with_end_color(BLUE);
        let sel = ShapeStyleCompositor::build_selector(&style);
        let expected = Fill::Gradient(vec![RED, NORMAL_COLOR, BLUE]);
        for role in [ColorRole::Normal, ColorRole::Pressed, ColorRole::Focused] {
            assert_eq!(sel.renderer(role).resolved_fill(), &expected);
        }
    }

    #[test]
    fn locked_stops_override_three_stop_model_for_every_role() {
        let style = StyleConfiguration::builder()
            .color(RED)
            .press_color(GREEN)
            .focus_color(BLUE)
            .start_color(GREEN)
            .gradient_color_stops(vec![RED, BLUE])
            .build();
        assert!(style.lock_press_color());

        let sel = ShapeStyleCompositor::build_selector(&style);
        for role in [ColorRole::Normal, ColorRole::Pressed, ColorRole::Focused] {
            assert_eq!(sel.renderer(role).resolved_fill(), &Fill::Gradient(vec![RED, BLUE]));
        }
    }

    #[test]
    fn unlocked_press_and_focus_are_solid() {
        let style = StyleConfiguration::builder()
            .color(RED)
            .press_color(GREEN)
            .focus_color(BLUE)
            .gradient_color_stops(vec![RED, BLUE])
            .build_unlocked()
            .unwrap();
        let sel = ShapeStyleCompositor::build_selector(&style);
        assert_eq!(sel.renderer(ColorRole::Normal).resolved_fill(), &Fill::Gradient(vec![RED, BLUE]));
        assert_eq!(sel.renderer(ColorRole::Pressed).resolved_fill(), &Fill::Solid(GREEN));
        assert_eq!(sel.renderer(ColorRole::Focused).resolved_fill(), &Fill::Solid(BLUE));
    }

    #[test]
    fn geometry_applies_to_every_role() {
        let style = solid_style()
            .with_shape(ShapeKind::Oval)
            .with_corner_array(Some([1.0; 8]))
            .with_corner_radius(12.0)
            .with_stroke_width(3.0)
            .with_stroke_color(GREEN)
            .with_dash_width(5.0)
            .with_dash_gap(2.0)
            .with_gradient_kind(GradientKind::Radial)
            .with_gradient_radius(20.0)
            .with_gradient_orientation(GradientOrientation::BottomTop);

        let sel = ShapeStyleCompositor::build_selector(&style);
        for role in [ColorRole::Normal, ColorRole::Pressed, ColorRole::Focused] {
            let r = sel.renderer(role);
            assert_eq!(r.shape(), ShapeKind::Oval);
            assert_eq!(r.corners(), CornerGeometry::Uniform(12.0));
            assert_eq!(r.stroke(), Stroke { width: 3.0, color: GREEN, dash_width: 5.0, dash_gap: 2.0 });
            assert_eq!(r.gradient_kind(), GradientKind::Radial);
            assert_eq!(r.gradient_radius(), 20.0);
            assert_eq!(r.orientation(), GradientOrientation::BottomTop);
        }
    }

    // ── recompute ─────────────────────────────────────────────────────────

    #[test]
    fn capability_gates_ripple_only() {
        let style = solid_style().with_ripple_color(Color::from_argb(0x40FF_FFFF));
        let trees: Vec<_> = ALL.iter().map(|&level| recompute(&style, level)).collect();

        assert_eq!(trees[0].strategy(), CompositionStrategy::Legacy);
        assert_eq!(trees[1].strategy(), CompositionStrategy::StateList);
        assert_eq!(trees[2].strategy(), CompositionStrategy::Layered);
        assert!(trees[0].ripple().is_none());
        assert!(trees[1].ripple().is_none());

        let ripple = trees[2].ripple().unwrap();
        assert_eq!(ripple.mask, CornerRadii::all(8.0));
        assert_eq!(ripple.pressed_tint, Color::from_argb(0x40FF_FFFF));
        assert_eq!(ripple.idle_tint, ripple.pressed_tint);

        assert_eq!(trees[0].selector(), trees[1].selector());
        assert_eq!(trees[1].selector(), trees[2].selector());
    }

    #[test]
    fn recompute_is_idempotent() {
        let style = solid_style().with_start_color(RED);
        for level in ALL {
            let c = ShapeStyleCompositor::new(level);
            assert_eq!(c.recompute(&style), c.recompute(&style));
        }
    }

    #[test]
    fn recompute_does_not_alias_previous_trees() {
        let style = solid_style();
        let c = ShapeStyleCompositor::new(CapabilityLevel::High);
        let mut first = c.recompute(&style);
        first.selector_mut().renderer_mut(ColorRole::Normal).set_color(Color::transparent());

        let second = c.recompute(&style);
        assert_eq!(second.selector().renderer(ColorRole::Normal).resolved_fill(), &Fill::Solid(RED));
    }

    #[test]
    fn selector_in_tree_follows_precedence() {
        let tree = recompute(&solid_style(), CapabilityLevel::Mid);
        let pressed = InteractionState::PRESSED | InteractionState::ENABLED;
        assert_eq!(tree.selector().select(pressed).resolved_fill(), &Fill::Solid(GREEN));
        assert_eq!(tree.selector().select(InteractionState::default()).resolved_fill(), &Fill::Solid(RED));
    }

    // ── surface ───────────────────────────────────────────────────────────

    #[derive(Default)]
    struct Surface {
        layered: Option<VisualStateTree>,
        legacy: Option<StateSelector>,
    }

    impl BackgroundSurface for Surface {
        fn set_background(&mut self, tree: VisualStateTree) {
            self.layered = Some(tree);
        }
        fn set_background_legacy(&mut self, states: StateSelector) {
            self.legacy = Some(states);
        }
    }

    #[test]
    fn low_capability_uses_legacy_entry_point() {
        let mut s = Surface::default();
        recompute(&solid_style(), CapabilityLevel::Low).apply_to(&mut s);
        assert!(s.layered.is_none());
        assert!(s.legacy.is_some());

        let mut s = Surface::default();
        recompute(&solid_style(), CapabilityLevel::Mid).apply_to(&mut s);
        assert!(s.legacy.is_none());
        assert_eq!(s.layered.map(|t| t.strategy()), Some(CompositionStrategy::StateList));
    }
}
