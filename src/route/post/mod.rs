use aide::axum::{routing::get_with, ApiRouter};

use crate::{error, store, AppState};

pub mod model;
pub mod route;

pub type RouteError = error::RouteError<store::Error>;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route("/admin/posts", get_with(get_posts, get_posts_docs))
		.api_route("/admin/posts/:id", get_with(get_post, get_post_docs))
}

#[cfg(test)]
mod test {
	use crate::{model::Post, test::*};

	#[tokio::test]
	async fn test_listing_is_paginated_newest_first() {
		let server = server(posts((1..=3).map(|n| titled(&format!("post {n}")))));

		let response = server.get("/admin/posts?size=2").await;

		assert_eq!(response.status_code(), StatusCode::OK);

		let posts = response.json::<Vec<Post>>();

		assert_eq!(posts.len(), 2);
		assert_eq!(posts[0].title, "post 3");
		assert_eq!(posts[1].title, "post 2");
	}

	#[tokio::test]
	async fn test_listing_rejects_oversized_page() {
		let server = server(posts([]));

		let response = server.get("/admin/posts?size=500").await;

		assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
		assert_eq!(response.json::<serde_json::Value>()[0]["field"], "size");
	}

	#[tokio::test]
	async fn test_unknown_post_is_not_found() {
		let server = server(posts([]));

		let response = server.get("/admin/posts/missing").await;

		assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
		assert_eq!(
			response.json::<serde_json::Value>(),
			json!([{ "content": "unknown_post", "details": { "post": "missing" } }])
		);
	}
}
