use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }

    /// Spreads `colors` evenly over [0, 1].
    ///
    /// A single color yields one stop at `t = 0`.
    pub fn evenly_spaced(colors: &[Color]) -> Vec<ColorStop> {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        colors
            .iter()
            .enumerate()
            .map(|(i, &c)| ColorStop::new(i as f32 / last, c))
            .collect()
    }
}

/// Linear gradient along the `start` → `end` axis, in the same coordinate
/// space as geometry. Outside the axis the edge stops extend.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }
}

/// Radial gradient: stops run from `center` (t = 0) out to `radius` (t = 1).
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self { center, radius, stops }
    }
}

/// Sweep (conic) gradient: stops run clockwise around `center`, starting
/// at the +X axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepGradient {
    pub center: Vec2,
    pub stops: Vec<ColorStop>,
}

impl SweepGradient {
    pub fn new(center: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { center, stops }
    }
}
