//! Interaction state flags driven by the host.

bitflags::bitflags! {
    /// Current user-interaction condition of a widget.
    ///
    /// The empty set is the "default" state: nothing matched.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InteractionState: u8 {
        const ENABLED = 0b0000_0001;
        const FOCUSED = 0b0000_0010;
        const PRESSED = 0b0000_0100;
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::ENABLED
    }
}

impl InteractionState {
    #[inline]
    pub fn is_enabled(self) -> bool {
        self.contains(Self::ENABLED)
    }
}
