use models::{
	api::admin::*,
	UserProfile,
	UserRole,
};

use crate::{ApiClient, RequestError};

/// Lists every user account on the platform. Admin only; listings are not
/// cached, each management screen fetches fresh.
pub async fn list_users(client: &ApiClient) -> Result<Vec<UserProfile>, RequestError> {
	let ListUsersResponse { users } = client.make_request::<ListUsers>(()).await?;
	Ok(users)
}

/// Changes the role of a user account. Admin only.
pub async fn update_user_role(
	client: &ApiClient,
	user_id: &str,
	role: UserRole,
) -> Result<(), RequestError> {
	client
		.make_request::<UpdateUserRole>(UpdateUserRoleRequest {
			user_id: user_id.to_owned(),
			role,
		})
		.await?;
	Ok(())
}

/// Bans or unbans a user account. Admin only. The banned user's next
/// authenticated request ends their session.
pub async fn set_user_ban(
	client: &ApiClient,
	user_id: &str,
	banned: bool,
) -> Result<(), RequestError> {
	client
		.make_request::<SetUserBan>(SetUserBanRequest {
			user_id: user_id.to_owned(),
			banned,
		})
		.await?;
	Ok(())
}
