use std::sync::Arc;

use aide::{
	axum::{routing::get, ApiRouter, IntoApiResponse},
	openapi::OpenApi,
};
use axum::{response::IntoResponse, Extension};

use crate::AppState;

pub fn routes() -> ApiRouter<AppState> {
	ApiRouter::new().route("/docs/api.json", get(serve_docs))
}

async fn serve_docs(Extension(api): Extension<Arc<OpenApi>>) -> impl IntoApiResponse {
	axum::Json(api).into_response()
}

#[cfg(test)]
mod test {
	use crate::test::*;

	#[tokio::test]
	async fn test_openapi_document_lists_editor_routes() {
		let server = server(posts([]));

		let response = server.get("/docs/api.json").await;

		assert_eq!(response.status_code(), StatusCode::OK);

		let api = response.json::<serde_json::Value>();

		assert!(api["paths"]["/admin/new-post"]["post"].is_object());
		assert!(api["paths"]["/admin/posts"]["get"].is_object());
	}
}
