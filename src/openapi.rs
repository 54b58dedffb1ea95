use aide::{openapi::Tag, transform::TransformOpenApi};

use crate::{error, extract::Json};

pub mod tag {
	pub const SITE: &str = "Site";
	pub const POST: &str = "Post";
	pub const EDITOR: &str = "Editor";
}

pub fn docs(api: TransformOpenApi) -> TransformOpenApi {
	api.title("Quill Open API")
		.summary("A blog site with an admin post editor")
		.description(include_str!("../README.md"))
		.tag(Tag {
			name: tag::SITE.into(),
			description: Some("Public site layout".into()),
			..Default::default()
		})
		.tag(Tag {
			name: tag::POST.into(),
			description: Some("Post listing".into()),
			..Default::default()
		})
		.tag(Tag {
			name: tag::EDITOR.into(),
			description: Some("Post authoring".into()),
			..Default::default()
		})
		.default_response_with::<Json<Vec<error::Message>>, _>(|res| {
			res.example(vec![error::Message::new("unknown_post").detail("post", "42")])
		})
}
