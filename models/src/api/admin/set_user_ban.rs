use crate::declare_api_endpoint;

declare_api_endpoint!(
	/// Route to ban or unban a user account. Admin only. A banned user's
	/// next authenticated request is rejected with
	/// [`crate::ErrorType::UserBanned`], which clients treat as a forced end
	/// of session.
	SetUserBan,
	PATCH "/admin/users/ban",
	requires_auth = true,
	request = SetUserBanRequest {
		/// The id of the user being banned or unbanned
		pub user_id: String,
		/// Whether the user should be banned
		pub banned: bool,
	},
	response = SetUserBanResponse {},
);
