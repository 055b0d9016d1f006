// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rgb::RGB8;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Path of the prediction endpoint relative to the host serving the page.
pub const PREDICTION_PATH: &str = "/predict/prediction";

/// The channel values sent to the prediction endpoint.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PredictionQuery {
	pub red: u8,
	pub green: u8,
	pub blue: u8,
}

impl PredictionQuery {
	/// Query string parameters in the order the endpoint has always received them.
	pub fn query_pairs(&self) -> [(&'static str, String); 3] {
		[
			("red", self.red.to_string()),
			("blue", self.blue.to_string()),
			("green", self.green.to_string()),
		]
	}

	pub fn to_query_string(&self) -> String {
		self.query_pairs()
			.iter()
			.map(|(key, value)| format!("{}={}", key, value))
			.collect::<Vec<String>>()
			.join("&")
	}

	pub fn color(&self) -> RGB8 {
		RGB8::new(self.red, self.green, self.blue)
	}
}

impl From<RGB8> for PredictionQuery {
	fn from(color: RGB8) -> Self {
		Self {
			red: color.r,
			green: color.g,
			blue: color.b,
		}
	}
}

/// Whether the color a prediction was made for is light or dark.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ClassificationLabel {
	Light,
	Dark,
}

impl TryFrom<u8> for ClassificationLabel {
	type Error = InvalidLabel;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(Self::Light),
			1 => Ok(Self::Dark),
			other => Err(InvalidLabel::OutOfRange(other)),
		}
	}
}

impl From<ClassificationLabel> for u8 {
	fn from(label: ClassificationLabel) -> Self {
		match label {
			ClassificationLabel::Light => 0,
			ClassificationLabel::Dark => 1,
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidLabel {
	OutOfRange(u8),
	ListLength(usize),
}

impl fmt::Display for InvalidLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::OutOfRange(value) => write!(f, "label {} is neither 0 (light) nor 1 (dark)", value),
			Self::ListLength(length) => write!(f, "expected a single label but got {}", length),
		}
	}
}

impl Error for InvalidLabel {}

/// The server may send the label bare or wrapped in a one-element list.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LabelValue {
	Single(u8),
	List(Vec<u8>),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PredictionResponse {
	pub val: LabelValue,
}

impl PredictionResponse {
	pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(body)
	}

	pub fn label(&self) -> Result<ClassificationLabel, InvalidLabel> {
		match &self.val {
			LabelValue::Single(value) => ClassificationLabel::try_from(*value),
			LabelValue::List(values) => match values.as_slice() {
				[value] => ClassificationLabel::try_from(*value),
				_ => Err(InvalidLabel::ListLength(values.len())),
			},
		}
	}
}

impl From<ClassificationLabel> for PredictionResponse {
	fn from(label: ClassificationLabel) -> Self {
		Self {
			val: LabelValue::Single(label.into()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn query_keeps_endpoint_parameter_order() {
		let query = PredictionQuery::from(RGB8::new(0, 128, 255));
		assert_eq!(query.to_query_string(), "red=0&blue=255&green=128");
	}

	#[test]
	fn query_color_matches_channels() {
		let query = PredictionQuery {
			red: 12,
			green: 34,
			blue: 56,
		};
		assert_eq!(query.color(), RGB8::new(12, 34, 56));
	}

	#[test]
	fn scalar_label_decodes() {
		let dark = PredictionResponse::from_json(r#"{"val": 1}"#).unwrap();
		assert_eq!(dark.label(), Ok(ClassificationLabel::Dark));
		let light = PredictionResponse::from_json(r#"{"val": 0}"#).unwrap();
		assert_eq!(light.label(), Ok(ClassificationLabel::Light));
	}

	#[test]
	fn wrapped_label_decodes() {
		let response = PredictionResponse::from_json(r#"{"val": [1]}"#).unwrap();
		assert_eq!(response.label(), Ok(ClassificationLabel::Dark));
	}

	#[test]
	fn unknown_label_is_rejected() {
		let response = PredictionResponse::from_json(r#"{"val": 2}"#).unwrap();
		assert_eq!(response.label(), Err(InvalidLabel::OutOfRange(2)));

		let response = PredictionResponse::from_json(r#"{"val": [0, 1]}"#).unwrap();
		assert_eq!(response.label(), Err(InvalidLabel::ListLength(2)));
	}

	#[test]
	fn malformed_body_fails_to_decode() {
		assert!(PredictionResponse::from_json(r#"{"value": 1}"#).is_err());
		assert!(PredictionResponse::from_json(r#"{"val": "dark"}"#).is_err());
		assert!(PredictionResponse::from_json("<html></html>").is_err());
	}

	#[test]
	fn label_serializes_as_number() {
		let body = serde_json::to_string(&PredictionResponse::from(ClassificationLabel::Dark)).unwrap();
		assert_eq!(body, r#"{"val":1}"#);
	}
}
