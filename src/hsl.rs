//! Model a color with the HSL (hue, saturation, luminance) notation.

use crate::{Color, Scalar};

/// A color represented as hue, saturation and luminance.
///
/// Hue is an angle in degrees [0, 360); saturation and luminance are
/// percentages [0, 100]. Alpha stays on the 0-255 channel scale of the
/// color it was derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// The hue component of the color.
    pub hue: Scalar,
    /// The saturation component of the color.
    pub saturation: Scalar,
    /// The luminance component of the color.
    pub luminance: Scalar,
    /// The alpha channel, 0-255.
    pub alpha: u8,
}

impl Hsl {
    /// Create a fully opaque HSL color.
    pub fn new(hue: Scalar, saturation: Scalar, luminance: Scalar) -> Self {
        Self::with_alpha(hue, saturation, luminance, 255)
    }

    /// Create an HSL color with an explicit alpha channel.
    pub fn with_alpha(hue: Scalar, saturation: Scalar, luminance: Scalar, alpha: u8) -> Self {
        Self {
            hue,
            saturation,
            luminance,
            alpha,
        }
    }
}

impl From<Hsl> for Color {
    fn from(value: Hsl) -> Self {
        value.to_color()
    }
}

impl From<Color> for Hsl {
    fn from(value: Color) -> Self {
        value.to_hsl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_opaque() {
        let hsl = Hsl::new(120.0, 100.0, 50.0);
        assert_eq!(hsl.alpha, 255);

        let hsl = Hsl::with_alpha(120.0, 100.0, 50.0, 64);
        assert_eq!(hsl.alpha, 64);
    }

    #[test]
    fn from_impls_round_trip() {
        let color = Color::rgb(0, 255, 0);
        let hsl = Hsl::from(color);
        assert_eq!(Color::from(hsl), color);
    }
}
