use crate::declare_api_endpoint;

declare_api_endpoint!(
	/// Route to register a new customer account. Registration does not log
	/// the user in; clients follow up with a login call.
	Register,
	POST "/register",
	requires_auth = false,
	request = RegisterRequest {
		/// The display name of the new user
		pub name: String,
		/// The email of the new user
		pub email: String,
		/// The password of the new user
		pub password: String,
		/// The phone number of the new user
		#[serde(default, skip_serializing_if = "Option::is_none")]
		pub phone: Option<String>,
	},
	response = RegisterResponse {},
);
