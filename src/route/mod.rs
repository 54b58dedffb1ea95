use std::sync::Arc;

use aide::{axum::ApiRouter, openapi::OpenApi};
use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::{
	compression::CompressionLayer,
	cors::CorsLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};

use crate::{openapi, AppState};

pub mod docs;
pub mod editor;
pub mod model;
pub mod post;
pub mod site;

/// Builds the full application, including the generated `OpenAPI` document.
pub fn router(state: AppState) -> Router {
	let mut api = OpenApi::default();

	ApiRouter::new()
		.merge(site::routes())
		.merge(post::routes())
		.merge(editor::routes())
		.merge(docs::routes())
		.finish_api_with(&mut api, openapi::docs)
		.layer(Extension(Arc::new(api)))
		.layer(
			ServiceBuilder::new()
				.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
				.layer(TraceLayer::new_for_http())
				.layer(PropagateRequestIdLayer::x_request_id())
				.layer(CompressionLayer::new())
				.layer(CorsLayer::permissive()),
		)
		.with_state(state)
}
