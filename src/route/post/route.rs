use axum::extract::{Path, State};
use macros::route;

use crate::{
	extract::{Json, Query},
	openapi::tag,
	store::Posts,
};

use super::{model, RouteError};

/// Get all posts
/// Returns a paginated response of all posts, newest first.
#[route(tag = tag::POST)]
pub async fn get_posts(
	State(posts): State<Posts>,
	Query(paginate): Query<model::Paginate>,
) -> Result<Json<Vec<model::Post>>, RouteError> {
	let all = posts.list().await?;

	Ok(Json(paginate.apply(all)))
}

/// Get single post
/// Returns a single post by its unique id.
#[route(tag = tag::POST)]
pub async fn get_post(
	State(posts): State<Posts>,
	Path(post_id): Path<String>,
) -> Result<Json<model::Post>, RouteError> {
	let post = posts.show(&model::PostId(post_id)).await?;

	Ok(Json(post))
}
