//! A [`Color`] is the canonical RGBA representation every other notation is
//! derived from.

use std::fmt;

/// Floating point type used for derived color components and intermediate
/// conversion math.
pub type Scalar = f64;

/// Clamp a scalar channel value to [0, 255] and truncate it toward zero.
pub(crate) fn clamp_channel(value: Scalar) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Clamp an integer channel value to [0, 255].
pub(crate) fn clamp_channel_i32(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// An 8-bit RGBA color in the sRGB color space.
///
/// The four channels are the only stored state; hex, HSL and HSV are views
/// computed on demand, so the representations can never drift apart. Every
/// operation returns a new value instead of mutating the receiver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The alpha channel, 255 being fully opaque.
    pub alpha: u8,
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl Color {
    /// Create a new color from all four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a fully opaque color from red, green and blue channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Create a color from unit-range scalar channels. Each channel is
    /// scaled to [0, 255], clamped and truncated before being stored, so
    /// intermediate float math can never leak an out-of-range value.
    pub(crate) fn from_unit(red: Scalar, green: Scalar, blue: Scalar, alpha: u8) -> Self {
        Self::new(
            clamp_channel(red * 255.0),
            clamp_channel(green * 255.0),
            clamp_channel(blue * 255.0),
            alpha,
        )
    }

    /// Return the four channels as `[red, green, blue, alpha]`.
    pub const fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Return a copy with the red channel replaced. The value is clamped to
    /// [0, 255].
    pub fn with_red(self, red: i32) -> Self {
        Self {
            red: clamp_channel_i32(red),
            ..self
        }
    }

    /// Return a copy with the green channel replaced. The value is clamped
    /// to [0, 255].
    pub fn with_green(self, green: i32) -> Self {
        Self {
            green: clamp_channel_i32(green),
            ..self
        }
    }

    /// Return a copy with the blue channel replaced. The value is clamped to
    /// [0, 255].
    pub fn with_blue(self, blue: i32) -> Self {
        Self {
            blue: clamp_channel_i32(blue),
            ..self
        }
    }

    /// Return a copy with the alpha channel replaced. The value is clamped
    /// to [0, 255].
    pub fn with_alpha(self, alpha: i32) -> Self {
        Self {
            alpha: clamp_channel_i32(alpha),
            ..self
        }
    }

    /// Return a copy with every channel set in `patch` replaced and the rest
    /// kept as-is.
    pub fn apply(self, patch: ChannelPatch) -> Self {
        Self {
            red: patch.red.map_or(self.red, clamp_channel_i32),
            green: patch.green.map_or(self.green, clamp_channel_i32),
            blue: patch.blue.map_or(self.blue, clamp_channel_i32),
            alpha: patch.alpha.map_or(self.alpha, clamp_channel_i32),
        }
    }

    /// Format the color as an uppercase hex string. Fully opaque colors emit
    /// `#RRGGBB`, anything else `#AARRGGBB`.
    pub fn to_hex_string(&self) -> String {
        if self.alpha == 255 {
            format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.alpha, self.red, self.green, self.blue
            )
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

/// A partial channel update applied with [`Color::apply`].
///
/// Channels left as `None` keep their current value; set channels are
/// clamped to [0, 255].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChannelPatch {
    /// New red channel value, if any.
    pub red: Option<i32>,
    /// New green channel value, if any.
    pub green: Option<i32>,
    /// New blue channel value, if any.
    pub blue: Option<i32>,
    /// New alpha channel value, if any.
    pub alpha: Option<i32>,
}

impl ChannelPatch {
    /// Create an empty patch that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the red channel.
    pub fn red(mut self, red: i32) -> Self {
        self.red = Some(red);
        self
    }

    /// Set the green channel.
    pub fn green(mut self, green: i32) -> Self {
        self.green = Some(green);
        self
    }

    /// Set the blue channel.
    pub fn blue(mut self, blue: i32) -> Self {
        self.blue = Some(blue);
        self
    }

    /// Set the alpha channel.
    pub fn alpha(mut self, alpha: i32) -> Self {
        self.alpha = Some(alpha);
        self
    }
}
