//! Conversions between the stored RGB channels and the HSL/HSV notations.
//!
//! The cylindrical components are computed from the channels on every call;
//! nothing is cached. Alpha passes through untouched on its 0-255 scale,
//! while hue is reported in whole degrees and saturation, luminance and
//! value as rounded percentages.

use crate::{Color, Hsl, Hsv, Scalar};

impl Color {
    /// Return the HSL view of this color.
    pub fn to_hsl(&self) -> Hsl {
        let (hue, saturation, luminance) = util::rgb_to_hsl(
            Scalar::from(self.red) / 255.0,
            Scalar::from(self.green) / 255.0,
            Scalar::from(self.blue) / 255.0,
        );
        Hsl::with_alpha(hue, saturation, luminance, self.alpha)
    }

    /// Return the HSV view of this color.
    pub fn to_hsv(&self) -> Hsv {
        let (hue, saturation, value) = util::rgb_to_hsv(
            Scalar::from(self.red) / 255.0,
            Scalar::from(self.green) / 255.0,
            Scalar::from(self.blue) / 255.0,
        );
        Hsv::with_alpha(hue, saturation, value, self.alpha)
    }

    /// Return the hue angle in whole degrees [0, 360). The hue is shared by
    /// the HSL and HSV notations; an achromatic color reports 0.
    pub fn hue(&self) -> Scalar {
        util::rgb_to_hue(
            Scalar::from(self.red) / 255.0,
            Scalar::from(self.green) / 255.0,
            Scalar::from(self.blue) / 255.0,
        )
    }
}

impl Hsl {
    /// Convert this HSL value back to an RGB color.
    pub fn to_color(&self) -> Color {
        let (red, green, blue) = util::hsl_to_rgb(self.hue, self.saturation, self.luminance);
        Color::from_unit(red, green, blue, self.alpha)
    }
}

impl Hsv {
    /// Convert this HSV value back to an RGB color.
    pub fn to_color(&self) -> Color {
        let (red, green, blue) = util::hsv_to_rgb(self.hue, self.saturation, self.value);
        Color::from_unit(red, green, blue, self.alpha)
    }
}

mod util {
    use crate::Scalar;

    /// Normalized saturation below this is treated as achromatic.
    const EPSILON: Scalar = 1.0e-4;

    /// Calculate the hue in whole degrees [0, 360) from unit-range RGB
    /// channels. Achromatic input yields 0.
    pub(super) fn rgb_to_hue(red: Scalar, green: Scalar, blue: Scalar) -> Scalar {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        if delta == 0.0 {
            return 0.0;
        }

        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        hue.round() % 360.0
    }

    /// Convert unit-range RGB channels to HSL. Saturation and luminance are
    /// returned as rounded percentages.
    pub(super) fn rgb_to_hsl(red: Scalar, green: Scalar, blue: Scalar) -> (Scalar, Scalar, Scalar) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;
        let luminance = (max + min) / 2.0;

        let saturation = if delta == 0.0 {
            0.0
        } else if luminance > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        (
            rgb_to_hue(red, green, blue),
            (saturation * 100.0).round(),
            (luminance * 100.0).round(),
        )
    }

    /// Convert HSL (degrees, percent, percent) to unit-range RGB channels.
    pub(super) fn hsl_to_rgb(
        hue: Scalar,
        saturation: Scalar,
        luminance: Scalar,
    ) -> (Scalar, Scalar, Scalar) {
        let hue = hue.rem_euclid(360.0) / 360.0;
        let saturation = saturation / 100.0;
        let luminance = luminance / 100.0;

        if saturation.abs() < EPSILON {
            // achromatic
            let gray = luminance as f32 as Scalar;
            return (gray, gray, gray);
        }

        let q = if luminance < 0.5 {
            luminance * (1.0 + saturation)
        } else {
            luminance + saturation - luminance * saturation
        };
        let p = 2.0 * luminance - q;

        (
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }

    /// Map one hue offset to a channel value via the piecewise helper with
    /// breakpoints at 1/6, 1/2 and 2/3.
    fn hue_to_channel(p: Scalar, q: Scalar, t: Scalar) -> Scalar {
        let t = if t < 0.0 {
            t + 1.0
        } else if t > 1.0 {
            t - 1.0
        } else {
            t
        };

        let value = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };

        // Narrow to single precision so products that should be exact
        // (0.4 * 255 = 102) do not truncate one byte low.
        value as f32 as Scalar
    }

    /// Convert unit-range RGB channels to HSV. Saturation and value are
    /// returned as rounded percentages.
    pub(super) fn rgb_to_hsv(red: Scalar, green: Scalar, blue: Scalar) -> (Scalar, Scalar, Scalar) {
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let saturation = if max == 0.0 { 0.0 } else { 1.0 - min / max };

        (
            rgb_to_hue(red, green, blue),
            (saturation * 100.0).round(),
            (max * 100.0).round(),
        )
    }

    /// Convert HSV (degrees, percent, percent) to unit-range RGB channels
    /// via the sector algorithm.
    pub(super) fn hsv_to_rgb(
        hue: Scalar,
        saturation: Scalar,
        value: Scalar,
    ) -> (Scalar, Scalar, Scalar) {
        let hue = hue.rem_euclid(360.0) / 360.0;
        let saturation = saturation / 100.0;
        let value = value / 100.0;

        let sector = (hue * 6.0).floor();
        let f = hue * 6.0 - sector;
        let p = value * (1.0 - saturation);
        let q = value * (1.0 - f * saturation);
        let t = value * (1.0 - (1.0 - f) * saturation);

        match sector as u32 % 6 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        }
    }
}
