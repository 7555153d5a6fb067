use swatch_engine::coords::{Rect, Vec2};

use super::StyleError;

/// Geometry family a shape renderer draws.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(i32)]
pub enum ShapeKind {
    /// Rectangle, possibly with rounded corners.
    #[default]
    Rectangle = 0,
    /// Ellipse inscribed in the bounds.
    Oval = 1,
    /// Horizontal stroke across the vertical center.
    Line = 2,
    /// Annulus centered in the bounds.
    Ring = 3,
}

impl TryFrom<i32> for ShapeKind {
    type Error = StyleError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(ShapeKind::Rectangle),
            1 => Ok(ShapeKind::Oval),
            2 => Ok(ShapeKind::Line),
            3 => Ok(ShapeKind::Ring),
            _ => Err(StyleError::ShapeOutOfRange(raw)),
        }
    }
}

/// How gradient stops are laid out over the shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[repr(i32)]
pub enum GradientKind {
    #[default]
    Linear = 0,
    Radial = 1,
    Sweep = 2,
}

impl TryFrom<i32> for GradientKind {
    type Error = StyleError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(GradientKind::Linear),
            1 => Ok(GradientKind::Radial),
            2 => Ok(GradientKind::Sweep),
            _ => Err(StyleError::GradientOutOfRange(raw)),
        }
    }
}

/// Direction of a linear gradient, named `FROM_TO`.
///
/// Style sheets address orientations by index; see [`from_index`](Self::from_index).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum GradientOrientation {
    TopBottom,
    TopRightToBottomLeft,
    RightLeft,
    BottomRightToTopLeft,
    BottomTop,
    BottomLeftToTopRight,
    #[default]
    LeftRight,
    TopLeftToBottomRight,
}

impl GradientOrientation {
    const TABLE: [GradientOrientation; 8] = [
        GradientOrientation::TopBottom,
        GradientOrientation::TopRightToBottomLeft,
        GradientOrientation::RightLeft,
        GradientOrientation::BottomRightToTopLeft,
        GradientOrientation::BottomTop,
        GradientOrientation::BottomLeftToTopRight,
        GradientOrientation::LeftRight,
        GradientOrientation::TopLeftToBottomRight,
    ];

    /// Maps a style-sheet index to an orientation.
    ///
    /// Total: indices outside `0..=7` map to [`LeftRight`](Self::LeftRight).
    pub fn from_index(index: i32) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::TABLE.get(i).copied())
            .unwrap_or(GradientOrientation::LeftRight)
    }

    /// Inverse of [`from_index`](Self::from_index).
    pub fn index(self) -> i32 {
        Self::TABLE.iter().position(|&o| o == self).unwrap_or(6) as i32
    }

    /// Start and end points of the gradient axis across `bounds`.
    pub fn endpoints(self, bounds: Rect) -> (Vec2, Vec2) {
        let (l, t) = (bounds.origin.x, bounds.origin.y);
        let Vec2 { x: r, y: b } = bounds.max();
        let (from, to) = match self {
            GradientOrientation::TopBottom => ((l, t), (l, b)),
            GradientOrientation::TopRightToBottomLeft => ((r, t), (l, b)),
            GradientOrientation::RightLeft => ((r, t), (l, t)),
            GradientOrientation::BottomRightToTopLeft => ((r, b), (l, t)),
            GradientOrientation::BottomTop => ((l, b), (l, t)),
            GradientOrientation::BottomLeftToTopRight => ((l, b), (r, t)),
            GradientOrientation::LeftRight => ((l, t), (r, t)),
            GradientOrientation::TopLeftToBottomRight => ((l, t), (r, b)),
        };
        (Vec2::new(from.0, from.1), Vec2::new(to.0, to.1))
    }
}
