use schemars::JsonSchema;
use serde::Serialize;

pub use crate::{
	editor::{EditorState, Notification},
	form::FieldView,
	model::{PostId, PostInputs},
	route::site::model::Link,
};

pub const HEADING: &str = "Make new post";

/// The trail shown above the editor.
pub fn breadcrumbs() -> Vec<Link> {
	vec![
		Link::new("/admin/posts", "Posts"),
		Link::new("/admin/new-post", "New Post"),
	]
}

/// The post editor as presented to the author.
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
	pub heading: String,
	pub breadcrumbs: Vec<Link>,
	/// The post being edited, absent when creating.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub id: Option<PostId>,
	pub is_loading: bool,
	/// Replaces the form when the post could not be loaded.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub load_error: Option<String>,
	/// The form controls, empty when `load_error` is set.
	pub fields: Vec<FieldView>,
	pub notifications: Vec<Notification>,
	/// Where the author should be sent next, if anywhere.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub redirect: Option<String>,
}
