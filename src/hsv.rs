//! Model a color with the HSV (hue, saturation, value) notation.

use crate::{Color, Scalar};

/// A color represented as hue, saturation and value (brightness).
///
/// Hue is an angle in degrees [0, 360); saturation and value are
/// percentages [0, 100]. Alpha stays on the 0-255 channel scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsv {
    /// The hue component of the color.
    pub hue: Scalar,
    /// The saturation component of the color.
    pub saturation: Scalar,
    /// The value (brightness) component of the color.
    pub value: Scalar,
    /// The alpha channel, 0-255.
    pub alpha: u8,
}

impl Hsv {
    /// Create a fully opaque HSV color.
    pub fn new(hue: Scalar, saturation: Scalar, value: Scalar) -> Self {
        Self::with_alpha(hue, saturation, value, 255)
    }

    /// Create an HSV color with an explicit alpha channel.
    pub fn with_alpha(hue: Scalar, saturation: Scalar, value: Scalar, alpha: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
            alpha,
        }
    }
}

impl From<Hsv> for Color {
    fn from(value: Hsv) -> Self {
        value.to_color()
    }
}

impl From<Color> for Hsv {
    fn from(value: Color) -> Self {
        value.to_hsv()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_opaque() {
        let hsv = Hsv::new(240.0, 100.0, 100.0);
        assert_eq!(hsv.alpha, 255);
    }

    #[test]
    fn from_impls_round_trip() {
        let color = Color::rgb(0, 0, 255);
        let hsv = Hsv::from(color);
        assert_eq!(Color::from(hsv), color);
    }
}
