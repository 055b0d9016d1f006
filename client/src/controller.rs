// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Keeps the swatch in sync with the channel sliders.
//!
//! The background follows the sliders synchronously. The text color follows the prediction endpoint, which answers
//! asynchronously; requests aren't cancelled, so every request is numbered when it's issued and only the answer to
//! the most recently issued request is applied. Answers to older requests are dropped, whether they succeeded or not.

use crate::classifier::{Classifier, ClassifyError};
use crate::color_utils::{css_rgb, TextColor};
use darklight_shared::prediction::{ClassificationLabel, PredictionQuery};
use rgb::RGB8;
use std::cell::Cell;
use std::future::Future;

/// The element whose colors the controller manages.
pub trait Swatch {
	fn set_background(&self, color: RGB8);
	fn set_foreground(&self, color: TextColor);
	fn set_classification_error(&self, error: Option<String>);
}

#[derive(Debug)]
pub enum ClassificationOutcome {
	Applied(ClassificationLabel),
	Stale,
	Failed(ClassifyError),
}

pub struct ColorPreviewController<S, C> {
	swatch: S,
	classifier: C,
	latest_request: Cell<u64>,
}

impl<S: Swatch, C: Classifier> ColorPreviewController<S, C> {
	pub fn new(swatch: S, classifier: C) -> Self {
		Self {
			swatch,
			classifier,
			latest_request: Cell::new(0),
		}
	}

	/// Handles a change to any of the sliders. The background is updated before this returns; the returned future
	/// completes the classification for the same color.
	pub fn on_slider_change(&self, color: RGB8) -> impl Future<Output = ClassificationOutcome> + '_ {
		self.swatch.set_background(color);
		self.request_classification(color)
	}

	/// Issues a classification request for the color. The request is numbered immediately and goes out once the
	/// returned future is first polled; the future applies the answer to the swatch if no newer request has been
	/// issued by the time it arrives.
	pub fn request_classification(&self, color: RGB8) -> impl Future<Output = ClassificationOutcome> + '_ {
		let request_id = self.latest_request.get() + 1;
		self.latest_request.set(request_id);

		log::debug!("Requesting classification #{} for {}", request_id, css_rgb(color));
		let response = self.classifier.classify(PredictionQuery::from(color));

		async move {
			let result = response.await;
			if request_id != self.latest_request.get() {
				log::debug!(
					"Discarding classification #{} for {}; #{} is newer",
					request_id,
					css_rgb(color),
					self.latest_request.get()
				);
				return ClassificationOutcome::Stale;
			}

			match result {
				Ok(label) => {
					self.swatch.set_foreground(TextColor::from(label));
					self.swatch.set_classification_error(None);
					ClassificationOutcome::Applied(label)
				}
				Err(error) => {
					log::warn!("Failed to classify {}: {}", css_rgb(color), error);
					self.swatch.set_classification_error(Some(error.to_string()));
					ClassificationOutcome::Failed(error)
				}
			}
		}
	}
}
