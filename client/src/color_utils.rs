// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use contrast::contrast;
use darklight_shared::prediction::ClassificationLabel;
use rgb::RGB8;
use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

pub const BLACK: RGB8 = RGB8::new(0, 0, 0);
pub const WHITE: RGB8 = RGB8::new(255, 255, 255);

#[derive(Debug)]
pub enum RgbColorError {
	InvalidLength,
	InvalidData(ParseIntError),
}

impl fmt::Display for RgbColorError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidLength => write!(f, "color value is an invalid length"),
			Self::InvalidData(error) => write!(f, "could not parse color value: {}", error),
		}
	}
}

impl Error for RgbColorError {}

impl From<ParseIntError> for RgbColorError {
	fn from(value: ParseIntError) -> Self {
		Self::InvalidData(value)
	}
}

/// Converts a color from a #abcdef (or abcdef) string to an RGB8.
pub fn color_from_rgb_str(color_str: &str) -> Result<RGB8, RgbColorError> {
	let color_str = color_str.strip_prefix('#').unwrap_or(color_str);
	if color_str.len() != 6 || !color_str.is_ascii() {
		return Err(RgbColorError::InvalidLength);
	}

	let red = u8::from_str_radix(&color_str[0..2], 16)?;
	let green = u8::from_str_radix(&color_str[2..4], 16)?;
	let blue = u8::from_str_radix(&color_str[4..6], 16)?;

	Ok(RGB8::new(red, green, blue))
}

pub fn rgb_str_from_color(color: RGB8) -> String {
	format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Formats a color as a CSS `rgb(r,g,b)` value.
pub fn css_rgb(color: RGB8) -> String {
	format!("rgb({},{},{})", color.r, color.g, color.b)
}

/// Converts the value of a range input into a channel value. Anything that isn't a number counts as 0.
pub fn channel_from_slider(value: &str) -> u8 {
	match value.trim().parse::<f64>() {
		Ok(number) if number.is_finite() => number.round().clamp(0.0, 255.0) as u8,
		_ => 0,
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Channel {
	Red,
	Green,
	Blue,
}

impl Channel {
	pub fn id(&self) -> &'static str {
		match self {
			Self::Red => "red",
			Self::Green => "green",
			Self::Blue => "blue",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Red => "Red",
			Self::Green => "Green",
			Self::Blue => "Blue",
		}
	}
}

/// The foreground color drawn over the swatch.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextColor {
	Black,
	White,
}

impl TextColor {
	pub fn css_name(&self) -> &'static str {
		match self {
			Self::Black => "black",
			Self::White => "white",
		}
	}

	pub fn color(&self) -> RGB8 {
		match self {
			Self::Black => BLACK,
			Self::White => WHITE,
		}
	}

	/// WCAG contrast ratio of this text color against the given background.
	pub fn contrast_against(&self, background: RGB8) -> f64 {
		contrast(self.color(), background)
	}
}

impl From<ClassificationLabel> for TextColor {
	fn from(label: ClassificationLabel) -> Self {
		match label {
			ClassificationLabel::Dark => Self::Black,
			ClassificationLabel::Light => Self::White,
		}
	}
}
