use aide::axum::{routing::get_with, ApiRouter};

use crate::AppState;

pub mod model;
pub mod route;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new()
		.api_route(
			"/admin/new-post",
			get_with(new_post, new_post_docs).post_with(submit_new_post, submit_new_post_docs),
		)
		.api_route(
			"/admin/new-post/*id",
			get_with(edit_post, edit_post_docs).post_with(submit_post, submit_post_docs),
		)
}
