use http::StatusCode;
use models::ErrorType;

/// Every way a store operation can fail, as surfaced to the initiating call
/// site. Stores never swallow these except on explicitly best-effort
/// background fetches.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RequestError {
	/// The request was rejected on the client before any network call was
	/// made: a missing session token, an unserializable body, or the like.
	#[error("{0}")]
	Validation(String),
	/// No usable response was received: the connection failed, timed out, or
	/// the body could not be parsed.
	#[error("could not reach the server: {0}")]
	Network(String),
	/// The server received the request and rejected it with a structured
	/// error body.
	#[error("{message}")]
	Api {
		/// The HTTP status of the rejection
		status: StatusCode,
		/// The structured error code from the response body
		error: ErrorType,
		/// The user-facing message from the response body
		message: String,
	},
}

impl RequestError {
	/// A short title for this failure, suitable as the heading of a user
	/// notice. The [`Display`](std::fmt::Display) impl carries the detail.
	pub fn title(&self) -> &'static str {
		match self {
			Self::Validation(_) => "Invalid request",
			Self::Network(_) => "Connection problem",
			Self::Api { .. } => "Request failed",
		}
	}

	/// Whether this failure is the server telling us the current account has
	/// been banned. The structured code is authoritative regardless of the
	/// status the backend chose.
	pub fn is_user_banned(&self) -> bool {
		matches!(
			self,
			Self::Api {
				error: ErrorType::UserBanned,
				..
			}
		)
	}

	/// Whether this failure is the cart's one-restaurant-at-a-time rule
	/// rejecting an add. The structured code is authoritative; a 409 status
	/// or a message mentioning a restaurant are accepted as fallbacks for
	/// backends that predate the structured codes.
	pub fn is_restaurant_conflict(&self) -> bool {
		match self {
			Self::Api {
				status,
				error,
				message,
			} => {
				*error == ErrorType::RestaurantConflict
					|| *status == StatusCode::CONFLICT
					|| message.to_ascii_lowercase().contains("restaurant")
			}
			_ => false,
		}
	}
}
