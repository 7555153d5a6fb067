use super::Vec2;

/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Each corner carries an `(x, y)` pair so elliptical corners survive the
/// trip from style configuration to the draw stream.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: (f32, f32),
    pub top_right: (f32, f32),
    pub bottom_left: (f32, f32),
    pub bottom_right: (f32, f32),
}

impl CornerRadii {
    /// Uniform circular radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self {
            top_left: (r, r),
            top_right: (r, r),
            bottom_left: (r, r),
            bottom_right: (r, r),
        }
    }

    /// Builds radii from eight scalars: `(x, y)` pairs for top-left,
    /// top-right, bottom-left, bottom-right, in that order.
    #[inline]
    pub const fn from_array(a: [f32; 8]) -> Self {
        Self {
            top_left: (a[0], a[1]),
            top_right: (a[2], a[3]),
            bottom_left: (a[4], a[5]),
            bottom_right: (a[6], a[7]),
        }
    }

    /// Limits every corner to half the width (x) and half the height (y)
    /// of `size`, so opposing corners never overlap.
    pub fn clamped_to(self, size: Vec2) -> Self {
        let (hx, hy) = ((size.x / 2.0).max(0.0), (size.y / 2.0).max(0.0));
        let clamp = |(x, y): (f32, f32)| (x.min(hx), y.min(hy));
        Self {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_left: clamp(self.bottom_left),
            bottom_right: clamp(self.bottom_right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_order_is_tl_tr_bl_br() {
        let r = CornerRadii::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(r.top_left, (1.0, 2.0));
        assert_eq!(r.top_right, (3.0, 4.0));
        assert_eq!(r.bottom_left, (5.0, 6.0));
        assert_eq!(r.bottom_right, (7.0, 8.0));
    }

    #[test]
    fn clamp_limits_each_axis_separately() {
        let r = CornerRadii::from_array([30.0, 30.0, 4.0, 4.0, 60.0, 10.0, 0.0, 0.0]);
        let r = r.clamped_to(Vec2::new(100.0, 40.0));
        assert_eq!(r.top_left, (30.0, 20.0));
        assert_eq!(r.top_right, (4.0, 4.0));
        assert_eq!(r.bottom_left, (50.0, 10.0));
        assert_eq!(r.bottom_right, (0.0, 0.0));
    }
}
