// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color_utils::{color_from_rgb_str, RgbColorError};
use darklight_shared::prediction::PREDICTION_PATH;
use log::Level;
use rgb::RGB8;
use std::error::Error;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use wasm_bindgen::JsValue;
use web_sys::Url;

pub const DEFAULT_COLOR: RGB8 = RGB8::new(128, 128, 128);
pub const DEFAULT_TIMEOUT_MS: u32 = 5000;
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;
/// Browser timers take a signed 32-bit delay.
pub const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

/// Settings read from the query string of the page URL.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
	pub endpoint: String,
	pub initial_color: RGB8,
	/// `None` when requests may take as long as they like.
	pub timeout_ms: Option<u32>,
	pub log_level: Level,
}

/// Raw query string values before validation.
#[derive(Debug, Default)]
pub struct ConfigParams {
	pub endpoint: Option<String>,
	pub color: Option<String>,
	pub timeout: Option<String>,
	pub log: Option<String>,
}

#[derive(Debug)]
pub enum ConfigError {
	Location(String),
	InvalidColor(String, RgbColorError),
	InvalidTimeout(String, TimeoutError),
	InvalidLogLevel(String),
}

#[derive(Debug)]
pub enum TimeoutError {
	NotANumber(ParseIntError),
	TooLong,
}

impl fmt::Display for TimeoutError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NotANumber(error) => write!(f, "{}", error),
			Self::TooLong => write!(f, "must be at most {}ms", MAX_TIMEOUT_MS),
		}
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Location(error) => write!(f, "Unable to read the page address: {}", error),
			Self::InvalidColor(value, error) => write!(f, "Invalid color \"{}\": {}", value, error),
			Self::InvalidTimeout(value, error) => write!(f, "Invalid timeout \"{}\": {}", value, error),
			Self::InvalidLogLevel(value) => write!(f, "Invalid log level \"{}\"", value),
		}
	}
}

impl Error for ConfigError {}

impl From<JsValue> for ConfigError {
	fn from(value: JsValue) -> Self {
		Self::Location(format!("{:?}", value))
	}
}

impl PageConfig {
	/// Reads the configuration from the current page address. The prediction endpoint defaults to the one on the
	/// host serving the page so the client works wherever it's deployed.
	///
	/// # Errors
	///
	/// Fails when the browser context is unavailable or a query parameter has an invalid value.
	pub fn from_location() -> Result<Self, ConfigError> {
		let window = web_sys::window().ok_or_else(|| ConfigError::Location(String::from("no browser window")))?;
		let href = window.location().href()?;
		let url = Url::new(&href)?;
		let search = url.search_params();

		let params = ConfigParams {
			endpoint: search.get("endpoint"),
			color: search.get("color"),
			timeout: search.get("timeout"),
			log: search.get("log"),
		};
		let default_endpoint = format!("{}{}", url.origin(), PREDICTION_PATH);
		Self::from_params(default_endpoint, params)
	}

	/// Validates raw query values. Empty values fall back to their defaults.
	pub fn from_params(default_endpoint: String, params: ConfigParams) -> Result<Self, ConfigError> {
		let endpoint = non_empty(params.endpoint).unwrap_or(default_endpoint);

		let initial_color = match non_empty(params.color) {
			Some(value) => match color_from_rgb_str(&value) {
				Ok(color) => color,
				Err(error) => return Err(ConfigError::InvalidColor(value, error)),
			},
			None => DEFAULT_COLOR,
		};

		let timeout_ms = match non_empty(params.timeout) {
			Some(value) => match value.parse::<u32>() {
				Ok(0) => None,
				Ok(timeout) if timeout > MAX_TIMEOUT_MS => {
					return Err(ConfigError::InvalidTimeout(value, TimeoutError::TooLong))
				}
				Ok(timeout) => Some(timeout),
				Err(error) => return Err(ConfigError::InvalidTimeout(value, TimeoutError::NotANumber(error))),
			},
			None => Some(DEFAULT_TIMEOUT_MS),
		};

		let log_level = match non_empty(params.log) {
			Some(value) => Level::from_str(&value).map_err(|_| ConfigError::InvalidLogLevel(value))?,
			None => DEFAULT_LOG_LEVEL,
		};

		Ok(Self {
			endpoint,
			initial_color,
			timeout_ms,
			log_level,
		})
	}
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	const ORIGIN_ENDPOINT: &str = "http://localhost:8000/predict/prediction";

	fn parse(params: ConfigParams) -> Result<PageConfig, ConfigError> {
		PageConfig::from_params(String::from(ORIGIN_ENDPOINT), params)
	}

	#[test]
	fn defaults_apply_without_parameters() {
		let config = parse(ConfigParams::default()).unwrap();
		assert_eq!(
			config,
			PageConfig {
				endpoint: String::from(ORIGIN_ENDPOINT),
				initial_color: RGB8::new(128, 128, 128),
				timeout_ms: Some(DEFAULT_TIMEOUT_MS),
				log_level: Level::Info,
			}
		);
	}

	#[test]
	fn parameters_override_defaults() {
		let config = parse(ConfigParams {
			endpoint: Some(String::from("http://127.0.0.1:8000/predict/prediction")),
			color: Some(String::from("#ff0080")),
			timeout: Some(String::from("250")),
			log: Some(String::from("debug")),
		})
		.unwrap();
		assert_eq!(config.endpoint, "http://127.0.0.1:8000/predict/prediction");
		assert_eq!(config.initial_color, RGB8::new(255, 0, 128));
		assert_eq!(config.timeout_ms, Some(250));
		assert_eq!(config.log_level, Level::Debug);
	}

	#[test]
	fn zero_timeout_disables_it() {
		let config = parse(ConfigParams {
			timeout: Some(String::from("0")),
			..Default::default()
		})
		.unwrap();
		assert_eq!(config.timeout_ms, None);
	}

	#[test]
	fn timeout_fits_browser_timers() {
		let config = parse(ConfigParams {
			timeout: Some(MAX_TIMEOUT_MS.to_string()),
			..Default::default()
		})
		.unwrap();
		assert_eq!(config.timeout_ms, Some(2_147_483_647));

		let error = parse(ConfigParams {
			timeout: Some(String::from("3000000000")),
			..Default::default()
		})
		.unwrap_err();
		assert!(matches!(error, ConfigError::InvalidTimeout(ref value, TimeoutError::TooLong) if value == "3000000000"));
		assert_eq!(
			error.to_string(),
			"Invalid timeout \"3000000000\": must be at most 2147483647ms"
		);
	}

	#[test]
	fn empty_values_use_defaults() {
		let config = parse(ConfigParams {
			endpoint: Some(String::new()),
			color: Some(String::from(" ")),
			..Default::default()
		})
		.unwrap();
		assert_eq!(config.endpoint, ORIGIN_ENDPOINT);
		assert_eq!(config.initial_color, DEFAULT_COLOR);
	}

	#[test]
	fn invalid_values_are_reported() {
		let error = parse(ConfigParams {
			color: Some(String::from("teal")),
			..Default::default()
		})
		.unwrap_err();
		assert!(matches!(error, ConfigError::InvalidColor(ref value, _) if value == "teal"));

		let error = parse(ConfigParams {
			timeout: Some(String::from("-1")),
			..Default::default()
		})
		.unwrap_err();
		assert!(matches!(error, ConfigError::InvalidTimeout(_, TimeoutError::NotANumber(_))));

		let error = parse(ConfigParams {
			log: Some(String::from("loud")),
			..Default::default()
		})
		.unwrap_err();
		assert_eq!(error.to_string(), "Invalid log level \"loud\"");
	}
}
