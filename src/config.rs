use std::net::{IpAddr, Ipv4Addr};

use tracing::Level;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("{name} must be {expected}, got {value:?}")]
	Invalid {
		name: &'static str,
		expected: &'static str,
		value: String,
	},
}

/// Runtime configuration, read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
	pub host: IpAddr,
	pub port: u16,
	/// When unset, posts are kept in memory.
	pub database_url: Option<String>,
	pub log_level: Level,
	pub site_name: String,
	/// The maximum number of posts in the featured aside.
	pub featured_limit: usize,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			host: IpAddr::V4(Ipv4Addr::LOCALHOST),
			port: 3000,
			database_url: None,
			log_level: Level::INFO,
			site_name: "Quill".into(),
			featured_limit: 3,
		}
	}
}

/// Parses `name` from `lookup`, falling back to `default` when it is unset.
fn var<T: std::str::FromStr>(
	lookup: &impl Fn(&str) -> Option<String>,
	name: &'static str,
	expected: &'static str,
	default: T,
) -> Result<T, Error> {
	lookup(name).map_or_else(
		|| Ok(default),
		|value| {
			value.trim().parse().map_err(|_| Error::Invalid {
				name,
				expected,
				value,
			})
		},
	)
}

impl Config {
	/// Loads `.env` if present, then reads the process environment.
	pub fn from_env() -> Result<Self, Error> {
		dotenvy::dotenv().ok();

		Self::from_lookup(|name| std::env::var(name).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
		let default = Self::default();

		Ok(Self {
			host: var(&lookup, "HOST", "an ip address", default.host)?,
			port: var(&lookup, "PORT", "a port number", default.port)?,
			database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
			log_level: var(
				&lookup,
				"LOG_LEVEL",
				"one of trace, debug, info, warn or error",
				default.log_level,
			)?,
			site_name: lookup("SITE_NAME").unwrap_or(default.site_name),
			featured_limit: var(
				&lookup,
				"FEATURED_LIMIT",
				"a non-negative number",
				default.featured_limit,
			)?,
		})
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashMap;

	use super::*;

	fn config(pairs: &[(&str, &str)]) -> Result<Config, Error> {
		let env = pairs
			.iter()
			.map(|(key, value)| ((*key).to_string(), (*value).to_string()))
			.collect::<HashMap<_, _>>();

		Config::from_lookup(|name| env.get(name).cloned())
	}

	#[test]
	fn test_defaults() {
		let config = config(&[]).unwrap();

		assert_eq!(config.port, 3000);
		assert_eq!(config.database_url, None);
		assert_eq!(config.log_level, Level::INFO);
		assert_eq!(config.featured_limit, 3);
	}

	#[test]
	fn test_overrides() {
		let config = config(&[
			("PORT", "8080"),
			("HOST", "0.0.0.0"),
			("DATABASE_URL", "postgres://localhost/quill"),
			("LOG_LEVEL", "debug"),
			("FEATURED_LIMIT", "5"),
		])
		.unwrap();

		assert_eq!(config.port, 8080);
		assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
		assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/quill"));
		assert_eq!(config.log_level, Level::DEBUG);
		assert_eq!(config.featured_limit, 5);
	}

	#[test]
	fn test_empty_database_url_means_memory() {
		assert_eq!(config(&[("DATABASE_URL", "")]).unwrap().database_url, None);
	}

	#[test]
	fn test_invalid_port() {
		let error = config(&[("PORT", "eighty")]).unwrap_err();

		assert_eq!(
			error.to_string(),
			"PORT must be a port number, got \"eighty\""
		);
	}
}
