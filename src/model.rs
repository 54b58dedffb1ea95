use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The placeholder author used until real accounts exist.
pub const DEFAULT_USER_ID: &str = "1";

/// An opaque post identifier, assigned by the post service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for PostId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A single blog post.
///
/// Length limits on `description` and `content` are enforced by the editor
/// form, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	/// The unique identifier of the post, absent until it is stored.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<PostId>,
	/// The author of the post.
	pub user_id: String,
	pub title: String,
	/// A short summary, shown in listings and the featured aside.
	pub description: String,
	/// The body of the post.
	pub content: String,
	/// The creation or update marker.
	pub date: String,
	/// URL or path of the cover image.
	#[serde(default)]
	pub image: String,
	#[serde(default)]
	pub is_featured: bool,
}

impl Default for Post {
	/// The empty skeleton the editor starts from.
	fn default() -> Self {
		Self {
			id: None,
			user_id: DEFAULT_USER_ID.into(),
			title: String::new(),
			description: String::new(),
			content: String::new(),
			date: String::new(),
			image: String::new(),
			is_featured: false,
		}
	}
}

/// The values captured by the post editor form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PostInputs {
	#[serde(default)]
	pub title: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub content: String,
}

impl From<&Post> for PostInputs {
	fn from(post: &Post) -> Self {
		Self {
			title: post.title.clone(),
			description: post.description.clone(),
			content: post.content.clone(),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_skeleton_defaults() {
		let post = Post::default();

		assert_eq!(post.id, None);
		assert_eq!(post.user_id, DEFAULT_USER_ID);
		assert!(!post.is_featured);
		assert!(post.image.is_empty());
	}

	#[test]
	fn test_post_wire_shape() {
		let post = Post {
			id: Some(PostId::new("7")),
			is_featured: true,
			..Post::default()
		};

		let value = serde_json::to_value(&post).unwrap();

		assert_eq!(value["id"], "7");
		assert_eq!(value["userId"], "1");
		assert_eq!(value["isFeatured"], true);

		let skeleton = serde_json::to_value(Post::default()).unwrap();

		assert!(skeleton.get("id").is_none());
	}
}
