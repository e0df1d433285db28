use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use typed_builder::TypedBuilder;
use url::Url;

/// Constants used across the client core.
pub mod constants {
	use std::time::Duration;

	/// The base URL for the Tiffin API
	pub const API_BASE_URL: &str = if cfg!(debug_assertions) {
		"http://localhost:8000/api/"
	} else {
		"https://api.tiffin.app/api/"
	};

	/// How long a request may take before it fails with a network error.
	/// There are no retries: a timed out call is surfaced once.
	pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}

/// The configuration of the client core.
#[derive(Debug, Clone, TypedBuilder)]
pub struct AppConfig {
	/// The base URL all endpoint paths are resolved against
	pub base_url: Url,
	/// The fixed per-request timeout
	#[builder(default = constants::REQUEST_TIMEOUT)]
	pub request_timeout: Duration,
}

/// The raw shape of the environment configuration, before validation.
#[derive(Debug, Deserialize)]
struct RawAppConfig {
	/// Overrides [`constants::API_BASE_URL`]
	base_url: Option<String>,
	/// Overrides [`constants::REQUEST_TIMEOUT`], in seconds
	request_timeout_secs: Option<u64>,
}

impl AppConfig {
	/// Loads the configuration from the environment (`TIFFIN_BASE_URL`,
	/// `TIFFIN_REQUEST_TIMEOUT_SECS`), falling back to the compiled-in
	/// defaults for anything not set.
	pub fn from_env() -> Result<Self, anyhow::Error> {
		let raw = config::Config::builder()
			.add_source(config::Environment::with_prefix("TIFFIN"))
			.build()
			.context("failed to read the environment configuration")?
			.try_deserialize::<RawAppConfig>()
			.context("failed to deserialize the environment configuration")?;

		let base_url = raw.base_url.as_deref().unwrap_or(constants::API_BASE_URL);
		Ok(Self {
			base_url: Url::parse(base_url)
				.with_context(|| format!("`{base_url}` is not a valid base URL"))?,
			request_timeout: raw
				.request_timeout_secs
				.map(Duration::from_secs)
				.unwrap_or(constants::REQUEST_TIMEOUT),
		})
	}
}
