use axum::extract::State;
use chrono::{Datelike, Utc};
use macros::route;

use crate::{extract::Json, openapi::tag, store::Posts, Site};

use super::{model, RouteError};

/// The header links, in display order.
pub fn header_links() -> Vec<model::Link> {
	vec![
		model::Link::new("/", "Home"),
		model::Link::new("/admin/posts", "Posts"),
		model::Link::new("/admin/new-post", "New post"),
	]
}

/// Get site layout
/// Returns the header links, the featured posts aside and the footer shared by every public page.
#[route(tag = tag::SITE)]
pub async fn get_layout(
	State(posts): State<Posts>,
	State(site): State<Site>,
) -> Result<Json<model::SiteLayout>, RouteError> {
	let featured = posts
		.list()
		.await?
		.into_iter()
		.filter(|post| post.is_featured)
		.take(site.featured_limit)
		.map(model::AsidePost::from)
		.collect();

	Ok(Json(model::SiteLayout {
		header: header_links(),
		aside: model::Aside {
			title: Some("Featured".into()),
			posts: featured,
		},
		footer: format!("© {} {}", Utc::now().year(), site.name),
		name: site.name,
	}))
}
