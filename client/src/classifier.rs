// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use darklight_shared::prediction::{ClassificationLabel, InvalidLabel, PredictionQuery, PredictionResponse};
use futures::future::{self, Either, FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::error::Error;
use std::fmt;
use std::future::Future;

/// Errors that can occur while asking the prediction endpoint to classify a color
#[derive(Debug)]
pub enum ClassifyError {
	Network(gloo_net::Error),
	Status(u16),
	Decode(serde_json::Error),
	InvalidLabel(InvalidLabel),
	Timeout(u32),
}

impl fmt::Display for ClassifyError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Network(error) => write!(f, "Failed to reach the prediction service: {}", error),
			Self::Status(status) => write!(f, "The prediction service responded with status {}", status),
			Self::Decode(error) => write!(f, "An invalid prediction was received: {}", error),
			Self::InvalidLabel(error) => write!(f, "An invalid prediction was received: {}", error),
			Self::Timeout(timeout_ms) => write!(f, "The prediction service didn't respond within {}ms", timeout_ms),
		}
	}
}

impl Error for ClassifyError {}

impl From<gloo_net::Error> for ClassifyError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Network(error)
	}
}

impl From<serde_json::Error> for ClassifyError {
	fn from(error: serde_json::Error) -> Self {
		Self::Decode(error)
	}
}

impl From<InvalidLabel> for ClassifyError {
	fn from(error: InvalidLabel) -> Self {
		Self::InvalidLabel(error)
	}
}

/// Something that decides whether a color is light or dark.
pub trait Classifier {
	fn classify(&self, query: PredictionQuery) -> LocalBoxFuture<'_, Result<ClassificationLabel, ClassifyError>>;
}

/// Reads the label out of a prediction response body.
///
/// # Errors
///
/// Fails when the body isn't a prediction response or holds a label other than 0 or 1.
pub fn decode_label(body: &str) -> Result<ClassificationLabel, ClassifyError> {
	let response = PredictionResponse::from_json(body)?;
	Ok(response.label()?)
}

/// Turns a response status and its body into a label. The body is only read for successful responses.
async fn label_from_response<B>(status: u16, body: B) -> Result<ClassificationLabel, ClassifyError>
where
	B: Future<Output = Result<String, gloo_net::Error>>,
{
	if !(200..300).contains(&status) {
		return Err(ClassifyError::Status(status));
	}
	let body = body.await?;
	decode_label(&body)
}

/// Races a request against a timer that fires after `timeout_ms`.
async fn with_timeout<R, T>(request: R, timer: T, timeout_ms: u32) -> Result<ClassificationLabel, ClassifyError>
where
	R: Future<Output = Result<ClassificationLabel, ClassifyError>>,
	T: Future<Output = ()>,
{
	futures::pin_mut!(request, timer);
	match future::select(request, timer).await {
		Either::Left((result, _)) => result,
		Either::Right(_) => Err(ClassifyError::Timeout(timeout_ms)),
	}
}

/// Classifies colors by querying the prediction endpoint over HTTP.
pub struct HttpClassifier {
	endpoint: String,
	timeout_ms: Option<u32>,
}

impl HttpClassifier {
	pub fn new(endpoint: String, timeout_ms: Option<u32>) -> Self {
		Self { endpoint, timeout_ms }
	}

	async fn fetch(&self, query: PredictionQuery) -> Result<ClassificationLabel, ClassifyError> {
		let response = Request::get(&self.endpoint).query(query.query_pairs()).send().await?;
		label_from_response(response.status(), response.text()).await
	}
}

impl Classifier for HttpClassifier {
	fn classify(&self, query: PredictionQuery) -> LocalBoxFuture<'_, Result<ClassificationLabel, ClassifyError>> {
		async move {
			let request = self.fetch(query);
			match self.timeout_ms {
				Some(timeout_ms) => with_timeout(request, TimeoutFuture::new(timeout_ms), timeout_ms).await,
				None => request.await,
			}
		}
		.boxed_local()
	}
}
