use crate::declare_api_endpoint;
use crate::UserProfile;

declare_api_endpoint!(
	/// Route to list every user account on the platform. Admin only.
	ListUsers,
	GET "/admin/users",
	requires_auth = true,
	response = ListUsersResponse {
		/// All the user accounts on the platform
		pub users: Vec<UserProfile>,
	},
);
