mod memory;
mod postgres;

pub use memory::MemoryPostService;
pub use postgres::PgPostService;

use std::sync::Arc;

use axum::http::StatusCode;

use crate::{
	error,
	model::{Post, PostId},
};

/// An error raised by a post service.
///
/// The [`std::fmt::Display`] output is what the editor shows to the author.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unknown post {0}")]
	UnknownPost(PostId),
	#[error("cannot update a post without an id")]
	MissingId,
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
}

impl error::ErrorShape for Error {
	fn status(&self) -> StatusCode {
		match self {
			Self::UnknownPost(..) => StatusCode::NOT_FOUND,
			Self::MissingId => StatusCode::BAD_REQUEST,
			Self::Database(..) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn errors(&self) -> Vec<error::Message<'_>> {
		match self {
			Self::UnknownPost(post) => error::Message::new("unknown_post")
				.detail("post", post.as_str())
				.into_vec(),
			Self::MissingId => error::Message::new("missing_id").field("id").into_vec(),
			Self::Database(..) => error::Message::new("internal_error").into_vec(),
		}
	}
}

/// The backend that owns post storage.
#[axum::async_trait]
pub trait PostService: Send + Sync {
	/// Returns every post, newest first.
	async fn list(&self) -> Result<Vec<Post>, Error>;

	/// Fetches a single post for editing.
	async fn show(&self, id: &PostId) -> Result<Post, Error>;

	/// Creates a new post. Any id on `post` is ignored.
	async fn store(&self, post: Post) -> Result<(), Error>;

	/// Replaces an existing post, matched by its id.
	async fn update(&self, post: Post) -> Result<(), Error>;
}

pub type Posts = Arc<dyn PostService>;
