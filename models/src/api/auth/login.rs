use crate::declare_api_endpoint;

declare_api_endpoint!(
	/// Route to login and start a new session. On success the backend
	/// returns an opaque bearer token which the client persists and attaches
	/// to every subsequent authenticated request.
	Login,
	POST "/login-user",
	requires_auth = false,
	request = LoginRequest {
		/// The email of the user
		pub email: String,
		/// The password of the user
		pub password: String,
	},
	response = LoginResponse {
		/// The opaque session token for the logged in user
		pub token: String,
	},
);
