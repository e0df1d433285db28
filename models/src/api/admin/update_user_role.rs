use crate::declare_api_endpoint;
use crate::UserRole;

declare_api_endpoint!(
	/// Route to change the role of a user account. Admin only.
	UpdateUserRole,
	PATCH "/admin/users/role",
	requires_auth = true,
	request = UpdateUserRoleRequest {
		/// The id of the user whose role is being changed
		pub user_id: String,
		/// The role to assign
		pub role: UserRole,
	},
	response = UpdateUserRoleResponse {},
);
