use serde::{Deserialize, Serialize};

/// The role of a user account. Accounts without an explicit role on the wire
/// are customers.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UserRole {
	/// A regular customer placing orders
	#[default]
	Customer,
	/// A restaurant owner managing a menu and its incoming orders
	Owner,
	/// A platform administrator managing users and categories
	Admin,
}

impl UserRole {
	/// Resolves the typed permission set for this role. This is the single
	/// place role checks are decided; consumers branch on the returned
	/// [`Capabilities`] instead of comparing role values at every call site.
	pub fn capabilities(self) -> Capabilities {
		match self {
			Self::Customer => Capabilities {
				can_place_orders: true,
				can_manage_menu: false,
				can_view_restaurant_orders: false,
				can_manage_users: false,
				can_manage_categories: false,
			},
			Self::Owner => Capabilities {
				can_place_orders: true,
				can_manage_menu: true,
				can_view_restaurant_orders: true,
				can_manage_users: false,
				can_manage_categories: false,
			},
			Self::Admin => Capabilities {
				can_place_orders: true,
				can_manage_menu: false,
				can_view_restaurant_orders: false,
				can_manage_users: true,
				can_manage_categories: true,
			},
		}
	}
}

/// The set of actions a session is allowed to take, resolved once from the
/// user's role.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
	/// Whether the session can add to a cart and place orders
	pub can_place_orders: bool,
	/// Whether the session can edit a restaurant's menu
	pub can_manage_menu: bool,
	/// Whether the session can see the orders placed with its restaurant
	pub can_view_restaurant_orders: bool,
	/// Whether the session can list, re-role and ban user accounts
	pub can_manage_users: bool,
	/// Whether the session can add catalog categories
	pub can_manage_categories: bool,
}

/// The profile of a user account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
	/// The id of the user
	#[serde(rename = "_id")]
	pub id: String,
	/// The display name of the user
	pub name: String,
	/// The email of the user
	pub email: String,
	/// The phone number of the user, if one was provided at registration
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
	/// The role of the user. Absent on the wire for regular customers
	#[serde(default)]
	pub role: UserRole,
	/// The id of the restaurant this user owns, for owner accounts
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub restaurant: Option<String>,
	/// Whether this account has been banned from the platform
	#[serde(default)]
	pub banned: bool,
	/// The profile image of the user, if one was uploaded
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
}
