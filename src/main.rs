#![warn(clippy::pedantic)]

mod config;
mod editor;
mod error;
mod extract;
mod form;
mod model;
mod openapi;
mod route;
mod store;
#[cfg(test)]
mod test;
mod trace;

use std::sync::Arc;

use config::Config;
use store::{MemoryPostService, PgPostService, Posts};

pub type AppState = State;

/// Site-wide settings shared with the public routes.
#[derive(Debug, Clone)]
pub struct Site {
	pub name: String,
	pub featured_limit: usize,
}

impl From<&Config> for Site {
	fn from(config: &Config) -> Self {
		Self {
			name: config.site_name.clone(),
			featured_limit: config.featured_limit,
		}
	}
}

/// The shared application state.
///
/// Handlers pull out the parts they need through [`axum::extract::FromRef`].
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub posts: Posts,
	pub site: Site,
}

#[tokio::main]
async fn main() {
	let config = Config::from_env().expect("invalid configuration");

	trace::init_tracing_subscriber(config.log_level);

	let posts: Posts = match &config.database_url {
		Some(url) => Arc::new(
			PgPostService::connect(url)
				.await
				.expect("failed to connect to database"),
		),
		None => {
			tracing::warn!("DATABASE_URL is not set, keeping posts in memory");
			Arc::new(MemoryPostService::new())
		}
	};

	let state = State {
		posts,
		site: Site::from(&config),
	};

	let app = route::router(state);
	let listener = tokio::net::TcpListener::bind((config.host, config.port))
		.await
		.expect("failed to bind to port");

	tracing::info!("listening on {}:{}", config.host, config.port);

	axum::serve(listener, app)
		.await
		.expect("server stopped unexpectedly");
}
