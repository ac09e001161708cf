//! Derived color operations: blending, lightness and saturation shifts,
//! inversion and grayscale.

use num_traits::Float;

use crate::color::clamp_channel;
use crate::{Color, Scalar};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

impl Color {
    /// Blend this color toward `other` by `percent`. Every channel, alpha
    /// included, is interpolated linearly; fractional results truncate. The
    /// percentage is clamped to [0, 100] after taking its absolute value.
    pub fn blend(&self, other: &Color, percent: Scalar) -> Color {
        let t = percent.abs().clamp(0.0, 100.0) / 100.0;
        let channel = |a: u8, b: u8| clamp_channel(lerp(Scalar::from(a), Scalar::from(b), t));

        Color::new(
            channel(self.red, other.red),
            channel(self.green, other.green),
            channel(self.blue, other.blue),
            channel(self.alpha, other.alpha),
        )
    }

    /// Lighten by adding `percent * 255 / 100` to the red, green and blue
    /// channels, clamped to [0, 255]; alpha is untouched. A negative
    /// percentage darkens.
    pub fn lighten(&self, percent: Scalar) -> Color {
        let absolute = percent * 255.0 / 100.0;

        Color::new(
            clamp_channel(Scalar::from(self.red) + absolute),
            clamp_channel(Scalar::from(self.green) + absolute),
            clamp_channel(Scalar::from(self.blue) + absolute),
            self.alpha,
        )
    }

    /// Darken by `percent`; equivalent to lightening by the negated amount.
    pub fn darken(&self, percent: Scalar) -> Color {
        self.lighten(-percent)
    }

    /// Increase saturation by `percent`, holding hue, luminance and alpha.
    /// The resulting saturation is clamped to [0, 100].
    pub fn saturate(&self, percent: Scalar) -> Color {
        let mut hsl = self.to_hsl();
        hsl.saturation = (hsl.saturation + percent).clamp(0.0, 100.0);
        hsl.to_color()
    }

    /// Decrease saturation by `percent`, holding hue, luminance and alpha.
    pub fn desaturate(&self, percent: Scalar) -> Color {
        self.saturate(-percent)
    }

    /// Fully desaturate, yielding the gray of equal luminance.
    pub fn grayscale(&self) -> Color {
        self.desaturate(100.0)
    }

    /// Return the negative of this color by rotating the hue 180 degrees in
    /// HSV, keeping saturation, value and alpha.
    pub fn invert(&self) -> Color {
        let mut hsv = self.to_hsv();
        hsv.hue = (hsv.hue + 180.0) % 360.0;
        hsv.to_color()
    }
}

/// Blend two hex color strings. Operands that fail to parse are treated as
/// absent: with both absent the result is `None`, with one absent the other
/// is returned unchanged, otherwise the blended color is formatted back to
/// hex.
pub fn blend_hex(from: &str, to: &str, percent: Scalar) -> Option<String> {
    let from = Color::from_hex_lenient(from);
    let to = Color::from_hex_lenient(to);

    match (from, to) {
        (None, None) => None,
        (Some(color), None) | (None, Some(color)) => Some(color.to_hex_string()),
        (Some(from), Some(to)) => Some(from.blend(&to, percent).to_hex_string()),
    }
}
