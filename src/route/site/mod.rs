use aide::axum::{routing::get_with, ApiRouter};

use crate::{error, store, AppState};

pub mod model;
pub mod route;

pub type RouteError = error::RouteError<store::Error>;

pub fn routes() -> ApiRouter<AppState> {
	use route::*;

	ApiRouter::new().api_route("/", get_with(get_layout, get_layout_docs))
}
