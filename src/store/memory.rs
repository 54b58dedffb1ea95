use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Error, PostService};
use crate::model::{Post, PostId};

/// Keeps posts in process memory, oldest first.
///
/// Used when no database is configured, and by tests.
#[derive(Debug, Default)]
pub struct MemoryPostService {
	posts: RwLock<Vec<Post>>,
}

impl MemoryPostService {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a store already holding `posts`. Posts without an id get one.
	#[cfg(test)]
	pub fn with_posts(posts: impl IntoIterator<Item = Post>) -> Self {
		let posts = posts
			.into_iter()
			.map(|mut post| {
				post.id.get_or_insert_with(next_id);
				post
			})
			.collect();

		Self {
			posts: RwLock::new(posts),
		}
	}
}

fn next_id() -> PostId {
	PostId(Uuid::new_v4().to_string())
}

#[axum::async_trait]
impl PostService for MemoryPostService {
	async fn list(&self) -> Result<Vec<Post>, Error> {
		Ok(self.posts.read().await.iter().rev().cloned().collect())
	}

	async fn show(&self, id: &PostId) -> Result<Post, Error> {
		self.posts
			.read()
			.await
			.iter()
			.find(|post| post.id.as_ref() == Some(id))
			.cloned()
			.ok_or_else(|| Error::UnknownPost(id.clone()))
	}

	async fn store(&self, mut post: Post) -> Result<(), Error> {
		let id = next_id();

		tracing::debug!(%id, "storing post in memory");

		post.id = Some(id);
		self.posts.write().await.push(post);

		Ok(())
	}

	async fn update(&self, post: Post) -> Result<(), Error> {
		let id = post.id.clone().ok_or(Error::MissingId)?;
		let mut posts = self.posts.write().await;
		let slot = posts
			.iter_mut()
			.find(|existing| existing.id.as_ref() == Some(&id))
			.ok_or(Error::UnknownPost(id))?;

		*slot = post;

		Ok(())
	}
}
