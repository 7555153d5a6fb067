use swatch_engine::coords::Vec2;

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. An infinite `max` on an axis
/// means the parent wraps the child's content on that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// Wrap content on both axes.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Picks `max` on bounded axes and `fallback` on wrap-content axes,
    /// then clamps into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn fill_or(self, fallback: Vec2) -> Vec2 {
        let pick = |max: f32, fb: f32| if max.is_finite() { max } else { fb };
        self.constrain(Vec2::new(pick(self.max.x, fallback.x), pick(self.max.y, fallback.y)))
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }
}
