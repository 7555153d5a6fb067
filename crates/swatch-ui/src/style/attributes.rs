//! Style-sheet attribute surface.
//!
//! Flat `name: value` pairs as they come out of a layout file, e.g.
//! `shape: 0`, `color: #DDDDDD`, `cornerRadius: 12px`. Missing attributes keep
//! their literal defaults and the color cascade applies as in
//! [`StyleBuilder::build`].

use swatch_engine::paint::Color;

use super::{GradientKind, GradientOrientation, ShapeKind, StyleBuilder, StyleConfiguration, StyleError};

fn malformed(name: &str, value: &str) -> StyleError {
    StyleError::MalformedAttribute { name: name.to_owned(), value: value.to_owned() }
}

fn color(name: &str, value: &str) -> Result<Color, StyleError> {
    Color::from_hex(value).ok_or_else(|| malformed(name, value))
}

fn length(name: &str, value: &str) -> Result<f32, StyleError> {
    let v = value.trim();
    let v = v.strip_suffix("px").unwrap_or(v);
    v.trim()
        .parse::<f32>()
        .ok()
        .filter(|l| l.is_finite())
        .ok_or_else(|| malformed(name, value))
}

fn integer(name: &str, value: &str) -> Result<i32, StyleError> {
    value.trim().parse::<i32>().map_err(|_| malformed(name, value))
}

impl StyleConfiguration {
    /// Builds a configuration from style-sheet attributes.
    ///
    /// Unknown names are ignored. Values that do not parse fail with
    /// [`StyleError::MalformedAttribute`]; out-of-range shape or gradient
    /// kinds fail with their range errors.
    ///
    /// ```
    /// use swatch_ui::style::{ShapeKind, StyleConfiguration};
    ///
    /// let style = StyleConfiguration::from_attributes([
    ///     ("shape", "1"),
    ///     ("startColor", "#FF0000"),
    /// ])
    /// .unwrap();
    /// assert_eq!(style.shape(), ShapeKind::Oval);
    /// assert_eq!(style.end_color(), style.start_color());
    /// ```
    pub fn from_attributes<'a, I>(attrs: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut b = StyleBuilder::default();
        for (name, value) in attrs {
            b = match name {
                "shape" => b.shape(ShapeKind::try_from(integer(name, value)?)?),
                "color" => b.color(color(name, value)?),
                "pressColor" => b.press_color(color(name, value)?),
                "focusColor" => b.focus_color(color(name, value)?),
                "rippleColor" => b.ripple_color(color(name, value)?),
                "cornerRadius" => b.corner_radius(length(name, value)?),
                "strokeColor" => b.stroke_color(color(name, value)?),
                "strokeWidth" => b.stroke_width(length(name, value)?),
                "dashWidth" => b.dash_width(length(name, value)?),
                "dashGap" => b.dash_gap(length(name, value)?),
                "gradient" => b.gradient_kind(GradientKind::try_from(integer(name, value)?)?),
                "gradientOrientation" => {
                    b.gradient_orientation(GradientOrientation::from_index(integer(name, value)?))
                }
                "startColor" => b.start_color(color(name, value)?),
                "centerColor" => b.center_color(color(name, value)?),
                "endColor" => b.end_color(color(name, value)?),
                "gradientRadius" => b.gradient_radius(length(name, value)?),
                _ => {
                    log::debug!("ignoring unknown style attribute `{name}`");
                    b
                }
            };
        }
        Ok(b.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::NORMAL_COLOR;

    #[test]
    fn empty_attributes_are_defaults() {
        let s = StyleConfiguration::from_attributes(Vec::<(&str, &str)>::new()).unwrap();
        assert_eq!(s, StyleConfiguration::default());
    }

    #[test]
    fn full_attribute_set() {
        let s = StyleConfiguration::from_attributes([
            ("shape", "3"),
            ("color", "#112233"),
            ("pressColor", "#445566"),
            ("focusColor", "#778899"),
            ("rippleColor", "#40FFFFFF"),
            ("cornerRadius", "12px"),
            ("strokeColor", "#000000"),
            ("strokeWidth", "2"),
            ("dashWidth", "4"),
            ("dashGap", "2.5"),
            ("gradient", "2"),
            ("gradientOrientation", "0"),
            ("startColor", "#FF0000"),
            ("gradientRadius", "24"),
        ])
        .unwrap();

        assert_eq!(s.shape(), ShapeKind::Ring);
        assert_eq!(s.normal_color(), Color::from_argb(0xFF11_2233));
        assert_eq!(s.press_color(), Color::from_argb(0xFF44_5566));
        assert_eq!(s.focus_color(), Color::from_argb(0xFF77_8899));
        assert_eq!(s.ripple_color(), Color::from_argb(0x40FF_FFFF));
        assert_eq!(s.corner_radius(), 12.0);
        assert_eq!(s.stroke_width(), 2.0);
        assert_eq!(s.dash_gap(), 2.5);
        assert_eq!(s.gradient_kind(), GradientKind::Sweep);
        assert_eq!(s.gradient_orientation(), GradientOrientation::TopBottom);
        assert_eq!(s.center_color(), Color::from_argb(0xFFFF_0000));
        assert_eq!(s.end_color(), Color::from_argb(0xFFFF_0000));
        assert_eq!(s.gradient_radius(), 24.0);
    }

    #[test]
    fn attribute_order_does_not_affect_cascade() {
        let s = StyleConfiguration::from_attributes([("endColor", "#0000FF"), ("startColor", "#FF0000")])
            .unwrap();
        assert_eq!(s.center_color(), Color::from_argb(0xFFFF_0000));
        assert_eq!(s.end_color(), Color::from_argb(0xFF00_00FF));
    }

    #[test]
    fn out_of_range_orientation_is_left_right() {
        let s = StyleConfiguration::from_attributes([("gradientOrientation", "12")]).unwrap();
        assert_eq!(s.gradient_orientation(), GradientOrientation::LeftRight);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let s = StyleConfiguration::from_attributes([("elevation", "4")]).unwrap();
        assert_eq!(s.normal_color(), NORMAL_COLOR);
    }

    #[test]
    fn malformed_and_out_of_range_values() {
        assert_eq!(
            StyleConfiguration::from_attributes([("color", "red")]),
            Err(StyleError::MalformedAttribute { name: "color".into(), value: "red".into() })
        );
        assert!(matches!(
            StyleConfiguration::from_attributes([("cornerRadius", "NaN")]),
            Err(StyleError::MalformedAttribute { .. })
        ));
        assert_eq!(
            StyleConfiguration::from_attributes([("shape", "4")]),
            Err(StyleError::ShapeOutOfRange(4))
        );
        assert_eq!(
            StyleConfiguration::from_attributes([("gradient", "-1")]),
            Err(StyleError::GradientOutOfRange(-1))
        );
    }
}
