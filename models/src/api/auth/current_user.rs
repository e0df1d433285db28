use crate::declare_api_endpoint;
use crate::UserProfile;

declare_api_endpoint!(
	/// Route to fetch the profile of the logged in user. Clients call this
	/// after bootstrap as a best-effort hydration of the session.
	CurrentUser,
	GET "/userdata",
	requires_auth = true,
	response = CurrentUserResponse {
		/// The profile of the logged in user
		pub user: UserProfile,
	},
);
