use crate::declare_api_endpoint;
use crate::UserProfile;

declare_api_endpoint!(
	/// Route to update the profile of the logged in user. Only the fields
	/// present in the request are changed.
	UpdateProfile,
	PUT "/update-profile",
	requires_auth = true,
	request = UpdateProfileRequest {
		/// The new display name of the user
		pub name: String,
		/// The new profile image of the user
		#[serde(default, skip_serializing_if = "Option::is_none")]
		pub image_url: Option<String>,
		/// The new email of the user
		#[serde(default, skip_serializing_if = "Option::is_none")]
		pub email: Option<String>,
		/// The new phone number of the user
		#[serde(default, skip_serializing_if = "Option::is_none")]
		pub phone: Option<String>,
	},
	response = UpdateProfileResponse {
		/// The updated profile
		pub user: UserProfile,
	},
);
