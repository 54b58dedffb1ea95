use schemars::JsonSchema;
use serde::Serialize;

use crate::model::{Post, PostId};

/// A navigation link in the site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Link {
	pub href: String,
	pub text: String,
}

impl Link {
	pub fn new(href: &str, text: &str) -> Self {
		Self {
			href: href.into(),
			text: text.into(),
		}
	}
}

/// A featured post, as listed in the aside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct AsidePost {
	pub id: Option<PostId>,
	/// Cover image, 176x103.
	pub image: String,
	/// Doubles as the image alt text.
	pub description: String,
}

impl From<Post> for AsidePost {
	fn from(post: Post) -> Self {
		Self {
			id: post.id,
			image: post.image,
			description: post.description,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Aside {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub posts: Vec<AsidePost>,
}

/// Everything shared by the public pages: header, aside and footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SiteLayout {
	pub name: String,
	pub header: Vec<Link>,
	pub aside: Aside,
	pub footer: String,
}
