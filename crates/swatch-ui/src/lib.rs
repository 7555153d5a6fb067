//! Swatch UI: shape-styled widgets on top of `swatch-engine`.
//!
//! A widget's look is one [`StyleConfiguration`](style::StyleConfiguration).
//! The [`ShapeStyleCompositor`](compositor::ShapeStyleCompositor) compiles it,
//! for the host's capability level, into a visual-state tree that picks a
//! renderer per interaction state.
//!
//! # Quick start
//!
//! ```
//! use swatch_ui::prelude::*;
//!
//! let style = StyleConfiguration::builder()
//!     .shape(ShapeKind::Rectangle)
//!     .color(Color::from_argb(0xFF20_2020))
//!     .press_color(Color::from_argb(0xFF40_4040))
//!     .ripple_color(Color::from_argb(0x33FF_FFFF))
//!     .build();
//!
//! let mut button = ColorfulButton::with_style(style, CapabilityLevel::High);
//! let mut ui = UiScene::new();
//! let input = UiInput { mouse_pos: Vec2::new(10.0, 10.0), mouse_pressed: true, ..Default::default() };
//! let draw_list = ui.frame(&mut button, Vec2::new(200.0, 100.0), &input);
//! // Pressed on a high-capability host: base shape plus the ripple tint.
//! assert_eq!(draw_list.len(), 2);
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere an
//! [`Element`](widget::Element) is accepted:
//!
//! ```
//! use swatch_ui::prelude::*;
//!
//! pub struct Dot;
//!
//! impl Widget for Dot {
//!     fn measure(&self, constraints: Constraints) -> Vec2 {
//!         constraints.constrain(Vec2::new(12.0, 12.0))
//!     }
//!     fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
//!         painter.fill_ellipse(rect, Color::from_argb(0xFFFF_0000), None);
//!     }
//! }
//!
//! let _button = ColorfulButton::new(CapabilityLevel::Low).child(Dot);
//! ```

pub mod compositor;
pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod state;
pub mod style;
pub mod widget;
pub mod widgets;

/// Everything needed to style and host widgets.
pub mod prelude {
    pub use crate::compositor::{
        BackgroundSurface, ColorRole, CompositionStrategy, ShapeRenderer, ShapeStyleCompositor, StateSelector,
        VisualStateTree,
    };
    pub use crate::constraints::Constraints;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::state::InteractionState;
    pub use crate::style::{GradientKind, GradientOrientation, ShapeKind, StyleConfiguration, StyleError};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{ColorfulButton, ContrastBar};

    pub use swatch_engine::coords::{CornerRadii, Rect, Vec2};
    pub use swatch_engine::paint::{Color, Paint};
    pub use swatch_engine::platform::CapabilityLevel;
}
