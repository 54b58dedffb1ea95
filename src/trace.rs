use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: a level filter and a formatted stdout layer.
pub fn init_tracing_subscriber(level: Level) {
	tracing_subscriber::registry()
		.with(LevelFilter::from_level(level))
		.with(
			tracing_subscriber::fmt::layer()
				.with_ansi(cfg!(debug_assertions))
				.with_target(true),
		)
		.init();
}
