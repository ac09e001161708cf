//! Construction of [`Color`] values from textual and structural inputs.
//!
//! Every input form is reachable through a strict entry point returning
//! `Result` and a permissive one returning `Option`; the caller picks the
//! failure mode explicitly instead of the library choosing one.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::{clamp_channel, clamp_channel_i32};
use crate::named;
use crate::{ChannelPatch, Color, Scalar};

/// Matches the digits of a hex color once the leading `#` is stripped.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Matches `rgb(r,g,b)` and `rgba(r,g,b,a)` with decimal channels.
static RGB_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d{1,3})\s*)?\)$")
        .unwrap()
});

/// Error raised when a color construction input is rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseColorError {
    /// The input was not 6 or 8 hex digits after trimming and `#` stripping.
    #[error("`{0}` is not a valid hex color")]
    InvalidHex(String),
    /// The input was not a well-formed `rgb()`/`rgba()` function string.
    #[error("`{0}` is not a valid rgb() color")]
    InvalidRgbString(String),
    /// A channel slice had a length other than 3 or 4.
    #[error("expected 3 or 4 channel values, got {0}")]
    InvalidChannelCount(usize),
    /// A color name missing from the named-color table.
    #[error("unknown color name `{0}`")]
    UnknownName(String),
    /// A string matching none of the supported color syntaxes.
    #[error("`{0}` matches no supported color syntax")]
    Unrecognized(String),
}

/// A color construction input, dispatched by [`Color::parse`].
#[derive(Clone, Copy, Debug)]
pub enum ColorInput<'a> {
    /// A `#RRGGBB` / `#AARRGGBB` hex string; the `#` is optional.
    Hex(&'a str),
    /// An `rgb(r,g,b)` / `rgba(r,g,b,a)` function string with decimal
    /// channels; a missing alpha defaults to 255.
    RgbaString(&'a str),
    /// Exactly 3 (opaque) or 4 channel values; out-of-range values clamp to
    /// [0, 255] and fractional values truncate.
    Channels(&'a [Scalar]),
    /// Explicit per-channel values; unset red/green/blue default to 0 and
    /// unset alpha to 255 (opaque).
    Record(ChannelPatch),
    /// One of the standard web color names, case-insensitive.
    Named(&'a str),
}

/// Check whether `input` is a well-formed hex color: after trimming
/// whitespace and stripping one leading `#`, exactly 6 or 8 hexadecimal
/// digits remain.
pub fn is_valid_hex(input: &str) -> bool {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    HEX_RE.is_match(digits)
}

impl Color {
    /// Construct a color from any supported input form, failing on
    /// malformed input.
    pub fn parse(input: ColorInput<'_>) -> Result<Self, ParseColorError> {
        match input {
            ColorInput::Hex(hex) => Self::from_hex(hex),
            ColorInput::RgbaString(text) => parse_rgb_function(text),
            ColorInput::Channels(values) => parse_channels(values),
            ColorInput::Record(patch) => Ok(Color::default().apply(patch)),
            ColorInput::Named(name) => Self::from_name(name),
        }
    }

    /// Permissive counterpart of [`Color::parse`], yielding `None` instead
    /// of an error.
    pub fn parse_lenient(input: ColorInput<'_>) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// Parse a `#RRGGBB` or `#AARRGGBB` string; the 6-digit form is fully
    /// opaque. Case-insensitive; surrounding whitespace and the leading `#`
    /// are optional.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !HEX_RE.is_match(digits) {
            return Err(ParseColorError::InvalidHex(hex.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ParseColorError::InvalidHex(hex.to_string()))?;

        Ok(match digits.len() {
            6 => Color::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8),
            _ => Color::new(
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
                (value >> 24) as u8,
            ),
        })
    }

    /// Permissive hex parse returning `None` on malformed input.
    pub fn from_hex_lenient(hex: &str) -> Option<Self> {
        Self::from_hex(hex).ok()
    }

    /// Resolve one of the standard web color names, case-insensitively, and
    /// parse its hex value.
    pub fn from_name(name: &str) -> Result<Self, ParseColorError> {
        let hex = named::lookup(name)
            .ok_or_else(|| ParseColorError::UnknownName(name.to_string()))?;
        Self::from_hex(hex)
    }
}

fn parse_rgb_function(text: &str) -> Result<Color, ParseColorError> {
    let invalid = || ParseColorError::InvalidRgbString(text.to_string());
    let caps = RGB_FN_RE.captures(text.trim()).ok_or_else(invalid)?;

    let channel = |index: usize| -> Result<u8, ParseColorError> {
        let value: i32 = caps[index].parse().map_err(|_| invalid())?;
        Ok(clamp_channel_i32(value))
    };

    let alpha = match caps.get(4) {
        Some(m) => clamp_channel_i32(m.as_str().parse().map_err(|_| invalid())?),
        None => 255,
    };

    Ok(Color::new(channel(1)?, channel(2)?, channel(3)?, alpha))
}

fn parse_channels(values: &[Scalar]) -> Result<Color, ParseColorError> {
    match *values {
        [red, green, blue] => Ok(Color::new(
            clamp_channel(red),
            clamp_channel(green),
            clamp_channel(blue),
            255,
        )),
        [red, green, blue, alpha] => Ok(Color::new(
            clamp_channel(red),
            clamp_channel(green),
            clamp_channel(blue),
            clamp_channel(alpha),
        )),
        _ => Err(ParseColorError::InvalidChannelCount(values.len())),
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse any supported textual form: hex (with or without `#`), an
    /// `rgb()`/`rgba()` function string, or a web color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }

        let lowered = trimmed.to_ascii_lowercase();
        if lowered.starts_with("rgb(") || lowered.starts_with("rgba(") {
            return parse_rgb_function(trimmed);
        }

        if named::lookup(trimmed).is_some() {
            return Self::from_name(trimmed);
        }

        if is_valid_hex(trimmed) {
            return Self::from_hex(trimmed);
        }

        Err(ParseColorError::Unrecognized(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_both_lengths() {
        assert_eq!(
            Color::from_hex("#FF0000").unwrap(),
            Color::rgb(255, 0, 0)
        );
        assert_eq!(
            Color::from_hex("#80FF0000").unwrap(),
            Color::new(255, 0, 0, 128)
        );
    }

    #[test]
    fn hex_is_case_insensitive_and_trims() {
        assert_eq!(
            Color::from_hex("  #ff00ff  ").unwrap(),
            Color::rgb(255, 0, 255)
        );
        assert_eq!(Color::from_hex("00ff00").unwrap(), Color::rgb(0, 255, 0));
    }

    #[test]
    fn hex_round_trips_uppercased() {
        for hex in ["#FF0000", "#00FF00", "#336699", "#80FF0000", "#01020304"] {
            assert_eq!(Color::from_hex(hex).unwrap().to_hex_string(), hex);
        }
        assert_eq!(
            Color::from_hex("#a1b2c3").unwrap().to_hex_string(),
            "#A1B2C3"
        );
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for input in ["", "not-a-color", "#12345", "#1234567", "#GG0000", "#123456789"] {
            assert!(matches!(
                Color::from_hex(input),
                Err(ParseColorError::InvalidHex(_))
            ));
            assert_eq!(Color::from_hex_lenient(input), None);
        }
    }

    #[test]
    fn is_valid_hex_matches_the_contract() {
        assert!(is_valid_hex("#FF0000"));
        assert!(is_valid_hex("ff0000"));
        assert!(is_valid_hex(" #80FF0000 "));
        assert!(!is_valid_hex("#F00"));
        assert!(!is_valid_hex("##FF0000"));
        assert!(!is_valid_hex("rgb(1,2,3)"));
    }

    #[test]
    fn rgb_function_strings_parse() {
        assert_eq!(
            Color::parse(ColorInput::RgbaString("rgb(1, 2, 3)")).unwrap(),
            Color::rgb(1, 2, 3)
        );
        assert_eq!(
            Color::parse(ColorInput::RgbaString("rgba(1,2,3,128)")).unwrap(),
            Color::new(1, 2, 3, 128)
        );
        // Out-of-range decimal channels clamp.
        assert_eq!(
            Color::parse(ColorInput::RgbaString("rgb(999,0,0)")).unwrap(),
            Color::rgb(255, 0, 0)
        );
    }

    #[test]
    fn malformed_rgb_function_strings_are_rejected() {
        for input in ["rgb()", "rgb(1,2)", "rgb(1,2,3,4,5)", "rgb(a,b,c)", "rgb 1,2,3"] {
            assert!(matches!(
                Color::parse(ColorInput::RgbaString(input)),
                Err(ParseColorError::InvalidRgbString(_))
            ));
        }
    }

    #[test]
    fn channel_slices_parse() {
        assert_eq!(
            Color::parse(ColorInput::Channels(&[255.0, 0.0, 0.0])).unwrap(),
            Color::rgb(255, 0, 0)
        );
        assert_eq!(
            Color::parse(ColorInput::Channels(&[1.0, 2.0, 3.0, 4.0])).unwrap(),
            Color::new(1, 2, 3, 4)
        );
        // Values clamp and truncate.
        assert_eq!(
            Color::parse(ColorInput::Channels(&[300.0, -4.0, 99.9])).unwrap(),
            Color::rgb(255, 0, 99)
        );
    }

    #[test]
    fn channel_slices_of_wrong_length_are_rejected() {
        for values in [&[][..], &[1.0, 2.0][..], &[1.0, 2.0, 3.0, 4.0, 5.0][..]] {
            assert_eq!(
                Color::parse(ColorInput::Channels(values)),
                Err(ParseColorError::InvalidChannelCount(values.len()))
            );
        }
    }

    #[test]
    fn records_default_to_opaque_black() {
        assert_eq!(
            Color::parse(ColorInput::Record(ChannelPatch::new())).unwrap(),
            Color::rgb(0, 0, 0)
        );
        assert_eq!(
            Color::parse(ColorInput::Record(ChannelPatch::new().red(255))).unwrap(),
            Color::rgb(255, 0, 0)
        );
        assert_eq!(
            Color::parse(ColorInput::Record(ChannelPatch::new().alpha(0))).unwrap(),
            Color::new(0, 0, 0, 0)
        );
    }

    #[test]
    fn named_colors_resolve() {
        assert_eq!(
            Color::from_name("red").unwrap(),
            Color::from_hex("#FF0000").unwrap()
        );
        assert_eq!(
            Color::from_name("Steel Blue").unwrap_err(),
            ParseColorError::UnknownName(String::from("Steel Blue"))
        );
        assert_eq!(
            Color::from_name("REBECCAPURPLE").unwrap_err(),
            ParseColorError::UnknownName(String::from("REBECCAPURPLE"))
        );
        assert_eq!(
            Color::from_name("CornflowerBlue").unwrap(),
            Color::rgb(100, 149, 237)
        );
        assert_eq!(Color::parse_lenient(ColorInput::Named("no-such-color")), None);
    }

    #[test]
    fn from_str_dispatches_by_syntax() {
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!("336699".parse::<Color>().unwrap(), Color::rgb(51, 102, 153));
        assert_eq!(
            "rgba(1,2,3,4)".parse::<Color>().unwrap(),
            Color::new(1, 2, 3, 4)
        );
        assert_eq!("lime".parse::<Color>().unwrap(), Color::rgb(0, 255, 0));
        assert!(matches!(
            "definitely not a color".parse::<Color>(),
            Err(ParseColorError::Unrecognized(_))
        ));
    }
}
