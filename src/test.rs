pub use axum::http::StatusCode;
pub use serde_json::json;

pub use crate::store::PostService;

use std::sync::Arc;

use axum_test::TestServer;

use crate::{
	model::Post,
	route,
	store::{MemoryPostService, Posts},
	Site, State,
};

/// An in-memory post service holding `posts`, oldest first.
pub fn posts(posts: impl IntoIterator<Item = Post>) -> Posts {
	Arc::new(MemoryPostService::with_posts(posts))
}

pub fn titled(title: &str) -> Post {
	Post {
		title: title.into(),
		..Post::default()
	}
}

/// Serves the full application on top of `posts`.
pub fn server(posts: Posts) -> TestServer {
	let state = State {
		posts,
		site: Site {
			name: "Quill".into(),
			featured_limit: 3,
		},
	};

	TestServer::new(route::router(state)).unwrap()
}
