use std::sync::{RwLock, Weak};

use async_trait::async_trait;
use models::{ApiEndpoint, ApiResponseBody, ApiSuccessResponseBody};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use url::Url;

use crate::prelude::*;
use crate::{AppConfig, DeviceStorage, RequestError};

/// Invoked by the HTTP gateway when the backend reports that the current
/// account has been banned. Implemented by the session store, which tears
/// the session down; the rejected call is still surfaced to its caller.
#[async_trait]
pub trait SessionInvalidationHandler: Send + Sync {
	/// The current account has been banned. `message` is the user-facing
	/// message from the rejection body.
	async fn on_user_banned(&self, message: String);
}

/// The single point of outbound communication with the backend. Every store
/// operation goes through [`ApiClient::make_request`], which attaches the
/// persisted session token and classifies failures.
pub struct ApiClient {
	/// The underlying HTTP client, built once with the fixed request timeout
	client: reqwest::Client,
	/// The base URL endpoint paths are resolved against. Always ends with a
	/// slash so that joining never drops a path segment
	base_url: Url,
	/// Where the session token is read from on every request
	storage: std::sync::Arc<dyn DeviceStorage>,
	/// The registered ban handler, if any. Weak so the client never keeps
	/// the session store alive on its own
	session_handler: RwLock<Option<Weak<dyn SessionInvalidationHandler>>>,
}

impl ApiClient {
	/// Creates a client from the given configuration and storage.
	pub fn new(
		config: &AppConfig,
		storage: std::sync::Arc<dyn DeviceStorage>,
	) -> Result<Self, anyhow::Error> {
		let mut base_url = config.base_url.clone();
		if !base_url.path().ends_with('/') {
			base_url.set_path(&format!("{}/", base_url.path()));
		}
		Ok(Self {
			client: reqwest::Client::builder()
				.timeout(config.request_timeout)
				.build()?,
			base_url,
			storage,
			session_handler: RwLock::new(None),
		})
	}

	/// Registers the handler invoked when the backend reports a ban.
	pub fn set_session_handler(&self, handler: Weak<dyn SessionInvalidationHandler>) {
		*self
			.session_handler
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(handler);
	}

	/// The persisted session token, if a user is logged in.
	pub(crate) fn token(&self) -> Option<String> {
		self.storage
			.load()
			.ok()
			.and_then(|state| state.token().map(str::to_owned))
	}

	/// Make an API request to an endpoint. The request body is serialized to
	/// JSON; a body of `()` serializes to null and is omitted entirely.
	#[instrument(skip_all, fields(method = %E::METHOD, path = E::PATH))]
	pub async fn make_request<E>(&self, body: E::RequestBody) -> Result<E::ResponseBody, RequestError>
	where
		E: ApiEndpoint,
	{
		let body = serde_json::to_value(&body)
			.map_err(|error| RequestError::Validation(error.to_string()))?;

		let token = self.token();
		if E::REQUIRES_AUTH && token.is_none() {
			return Err(RequestError::Validation(
				"no session token is available for an authenticated request".to_string(),
			));
		}

		let url = self
			.base_url
			.join(E::PATH.trim_start_matches('/'))
			.map_err(|error| RequestError::Validation(error.to_string()))?;

		let mut builder = self.client.request(E::METHOD, url);
		if let Some(token) = token {
			// The backend expects the raw token, not a `Bearer ` prefix
			builder = builder.header(
				AUTHORIZATION,
				HeaderValue::from_str(&token).map_err(|_| {
					RequestError::Validation(
						"the persisted session token is not a valid header value".to_string(),
					)
				})?,
			);
		}
		if !body.is_null() {
			builder = builder.json(&body);
		}

		let response = builder.send().await.map_err(|error| {
			warn!("request failed before a response arrived: {error}");
			RequestError::Network(error.to_string())
		})?;

		let status = response.status();
		let body = response
			.json::<ApiResponseBody<E::ResponseBody>>()
			.await
			.map_err(|error| {
				warn!("response body could not be parsed: {error}");
				RequestError::Network(error.to_string())
			})?;

		match body {
			ApiResponseBody::Success(ApiSuccessResponseBody {
				success: _,
				response,
			}) => {
				trace!("request succeeded with status {status}");
				Ok(response)
			}
			ApiResponseBody::Error(body) => {
				let error = RequestError::Api {
					status,
					error: body.error,
					message: body.message.clone(),
				};
				if error.is_user_banned() {
					self.notify_banned(body.message).await;
				}
				Err(error)
			}
		}
	}

	/// Tells the registered session handler, if any, that the account has
	/// been banned.
	async fn notify_banned(&self, message: String) {
		let handler = self
			.session_handler
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone();
		if let Some(handler) = handler.and_then(|handler| handler.upgrade()) {
			warn!("backend reported the account as banned, invalidating the session");
			handler.on_user_banned(message).await;
		}
	}
}
