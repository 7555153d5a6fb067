use crate::state::InteractionState;

use super::ShapeRenderer;

/// Which per-state renderer a selector entry points at.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorRole {
    Normal,
    Pressed,
    Focused,
}

/// Required state sets, checked in order; the first subset of the current
/// state wins. Several sets overlap, so the order is load-bearing.
const ENTRIES: [(InteractionState, ColorRole); 6] = [
    (InteractionState::ENABLED.union(InteractionState::FOCUSED), ColorRole::Focused),
    (InteractionState::PRESSED.union(InteractionState::ENABLED), ColorRole::Pressed),
    (InteractionState::FOCUSED, ColorRole::Focused),
    (InteractionState::PRESSED, ColorRole::Pressed),
    (InteractionState::ENABLED, ColorRole::Normal),
    (InteractionState::empty(), ColorRole::Normal),
];

/// Maps interaction states to one of three independently owned renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSelector {
    normal: ShapeRenderer,
    pressed: ShapeRenderer,
    focused: ShapeRenderer,
}

impl StateSelector {
    pub fn new(normal: ShapeRenderer, pressed: ShapeRenderer, focused: ShapeRenderer) -> Self {
        Self { normal, pressed, focused }
    }

    /// Role selected for `state`. Total: the empty entry matches everything.
    pub fn select_role(state: InteractionState) -> ColorRole {
        ENTRIES
            .iter()
            .find(|(required, _)| state.contains(*required))
            .map_or(ColorRole::Normal, |&(_, role)| role)
    }

    /// Renderer displayed in `state`.
    pub fn select(&self, state: InteractionState) -> &ShapeRenderer {
        self.renderer(Self::select_role(state))
    }

    pub fn renderer(&self, role: ColorRole) -> &ShapeRenderer {
        match role {
            ColorRole::Normal => &self.normal,
            ColorRole::Pressed => &self.pressed,
            ColorRole::Focused => &self.focused,
        }
    }

    /// In-place access for host display layers.
    pub fn renderer_mut(&mut self, role: ColorRole) -> &mut ShapeRenderer {
        match role {
            ColorRole::Normal => &mut self.normal,
            ColorRole::Pressed => &mut self.pressed,
            ColorRole::Focused => &mut self.focused,
        }
    }
}
