use std::borrow::Cow;

use axum::{
	body::Body,
	extract::rejection,
	http::{Response, StatusCode},
	response::IntoResponse,
};
use axum_jsonschema::JsonSchemaRejection;
use schemars::JsonSchema;
use serde::Serialize;

pub type Map = serde_json::Map<String, serde_json::Value>;

/// A single error message sent to the client.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Message<'a> {
	/// A machine-readable code or a human-readable message.
	pub content: Cow<'a, str>,
	/// The input field the message relates to, if any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub field: Option<Cow<'a, str>>,
	/// Extra structured information about the error.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub details: Option<Map>,
}

impl<'a> Message<'a> {
	pub fn new(content: impl Into<Cow<'a, str>>) -> Self {
		Self {
			content: content.into(),
			field: None,
			details: None,
		}
	}

	#[must_use]
	pub fn field(mut self, field: impl Into<Cow<'a, str>>) -> Self {
		self.field = Some(field.into());
		self
	}

	#[must_use]
	pub fn detail(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
		self.details
			.get_or_insert_with(Map::new)
			.insert(key.into(), value.into());
		self
	}

	pub fn into_vec(self) -> Vec<Self> {
		vec![self]
	}
}

/// The client-facing shape of a route's error type.
///
/// The [`std::fmt::Display`] implementation of the error is only logged,
/// so it can carry sensitive information. Only [`ErrorShape::errors`] is
/// sent to the client.
pub trait ErrorShape: std::error::Error {
	fn status(&self) -> StatusCode;

	fn errors(&self) -> Vec<Message<'_>>;
}

/// Errors shared by every route, produced by extractors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
	#[error("validation error: {0}")]
	Validation(#[from] validator::ValidationErrors),
	#[error("query error: {0}")]
	Query(#[from] rejection::QueryRejection),
	#[error("json error: {0:?}")]
	Json(JsonSchemaRejection),
}

impl From<JsonSchemaRejection> for AppError {
	fn from(rejection: JsonSchemaRejection) -> Self {
		Self::Json(rejection)
	}
}

/// Turns a JSON location such as `/title` or `title` into a field name.
fn location_field(location: &str) -> Option<String> {
	let field = location.trim_start_matches('/');

	(!field.is_empty() && field != ".").then(|| field.to_string())
}

fn located(content: String, location: &str) -> Message<'static> {
	let message = Message::new(content);

	match location_field(location) {
		Some(field) => message.field(field),
		None => message,
	}
}

impl AppError {
	fn messages(&self) -> Vec<Message<'_>> {
		match self {
			Self::Validation(errors) => errors
				.field_errors()
				.into_iter()
				.flat_map(|(field, errors)| {
					errors.iter().map(move |error| {
						let content = error
							.message
							.clone()
							.unwrap_or_else(|| error.code.clone());

						Message::new(content).field(field)
					})
				})
				.collect(),
			Self::Query(error) => Message::new(error.body_text()).into_vec(),
			Self::Json(JsonSchemaRejection::Json(error)) => Message::new(error.body_text()).into_vec(),
			Self::Json(JsonSchemaRejection::Serde(error)) => {
				located(error.inner().to_string(), &error.path().to_string()).into_vec()
			}
			Self::Json(JsonSchemaRejection::Schema(errors)) => errors
				.iter()
				.map(|unit| {
					located(
						unit.error_description().to_string(),
						&unit.instance_location().to_string(),
					)
				})
				.collect(),
		}
	}
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response<Body> {
		match self {
			Self::Validation(..) => (
				StatusCode::UNPROCESSABLE_ENTITY,
				axum::Json(self.messages()),
			)
				.into_response(),
			Self::Query(..) | Self::Json(..) => {
				(StatusCode::BAD_REQUEST, axum::Json(self.messages())).into_response()
			}
		}
	}
}

/// The error returned from route handlers.
///
/// `E` is the route module's own error type, everything else is
/// an [`AppError`].
#[derive(Debug, thiserror::Error)]
pub enum RouteError<E> {
	#[error(transparent)]
	App(AppError),
	#[error(transparent)]
	Route(E),
}

impl<E: ErrorShape> From<E> for RouteError<E> {
	fn from(error: E) -> Self {
		Self::Route(error)
	}
}

impl<E> From<AppError> for RouteError<E> {
	fn from(error: AppError) -> Self {
		Self::App(error)
	}
}

impl<E: ErrorShape> IntoResponse for RouteError<E> {
	fn into_response(self) -> Response<Body> {
		match self {
			Self::App(error) => error.into_response(),
			Self::Route(error) => {
				let status = error.status();

				if status.is_server_error() {
					tracing::error!(%error, "route failed");
				}

				(status, axum::Json(error.errors())).into_response()
			}
		}
	}
}

impl<E> aide::OperationOutput for RouteError<E> {
	type Inner = Self;
}
