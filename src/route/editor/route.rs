use std::sync::Arc;

use aide::axum::IntoApiResponse;
use axum::{
	extract::{Path, State},
	http::StatusCode,
	response::{IntoResponse, Response},
};
use macros::route;

use crate::{
	editor::{EditorMode, Outbox, PostEditor},
	error,
	extract::Json,
	form::post_form,
	openapi::tag,
	store::Posts,
};

use super::model;

fn open(posts: Posts, mode: EditorMode) -> (PostEditor, Arc<Outbox>) {
	let outbox = Arc::new(Outbox::new());
	let editor = PostEditor::new(posts, outbox.clone(), outbox.clone()).with_mode(mode);

	(editor, outbox)
}

async fn view(
	editor: &PostEditor,
	outbox: &Outbox,
	values: Option<&model::PostInputs>,
	errors: Option<&validator::ValidationErrors>,
) -> model::EditorView {
	let state: model::EditorState = editor.state().await;
	let fields = if state.load_error.is_some() {
		Vec::new()
	} else {
		let seeded = model::PostInputs::from(&state.post);

		post_form()
			.seed(values.unwrap_or(&seeded))
			.render(errors)
	};

	model::EditorView {
		heading: model::HEADING.into(),
		breadcrumbs: model::breadcrumbs(),
		id: state.mode.id().cloned(),
		is_loading: state.is_loading,
		load_error: state.load_error,
		fields,
		notifications: outbox.notifications(),
		redirect: outbox.redirect(),
	}
}

async fn load(posts: Posts, mode: EditorMode) -> Json<model::EditorView> {
	let (editor, outbox) = open(posts, EditorMode::Create);

	editor.initialize(mode).await;

	Json(view(&editor, &outbox, None, None).await)
}

async fn submit(posts: Posts, mode: EditorMode, values: model::PostInputs) -> Response {
	let (editor, outbox) = open(posts, mode);

	if let Err(errors) = post_form().validate(&values) {
		tracing::debug!(fields = errors.field_errors().len(), "rejecting invalid post form");

		let view = view(&editor, &outbox, Some(&values), Some(&errors)).await;

		return (StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response();
	}

	editor.submit(values.clone()).await;

	Json(view(&editor, &outbox, Some(&values), None).await).into_response()
}

/// New post
/// Returns the empty post editor.
#[route(tag = tag::EDITOR)]
pub async fn new_post(State(posts): State<Posts>) -> Json<model::EditorView> {
	load(posts, EditorMode::Create).await
}

/// Edit post
/// Returns the post editor seeded with an existing post. When the post cannot be loaded, the load error is returned in place of the form.
#[route(tag = tag::EDITOR)]
pub async fn edit_post(
	State(posts): State<Posts>,
	Path(id): Path<String>,
) -> Json<model::EditorView> {
	load(posts, EditorMode::from_path(Some(&id))).await
}

/// Create post
/// Validates the submitted form and creates a new post. Service failures are reported as notifications.
#[route(
	tag = tag::EDITOR,
	response(status = 400, description = "The body is not valid JSON for the form.", shape = "Json<Vec<error::Message>>"),
	response(status = 200, description = "The form was submitted.", shape = "Json<model::EditorView>"),
	response(status = 422, description = "The form has invalid fields.", shape = "Json<model::EditorView>")
)]
pub async fn submit_new_post(
	State(posts): State<Posts>,
	Json(values): Json<model::PostInputs>,
) -> impl IntoApiResponse {
	submit(posts, EditorMode::Create, values).await
}

/// Update post
/// Validates the submitted form and updates the post in place. Service failures are reported as notifications.
#[route(
	tag = tag::EDITOR,
	response(status = 400, description = "The body is not valid JSON for the form.", shape = "Json<Vec<error::Message>>"),
	response(status = 200, description = "The form was submitted.", shape = "Json<model::EditorView>"),
	response(status = 422, description = "The form has invalid fields.", shape = "Json<model::EditorView>")
)]
pub async fn submit_post(
	State(posts): State<Posts>,
	Path(id): Path<String>,
	Json(values): Json<model::PostInputs>,
) -> impl IntoApiResponse {
	submit(posts, EditorMode::from_path(Some(&id)), values).await
}
