use crate::declare_api_endpoint;
use crate::Cart;

declare_api_endpoint!(
	/// Route to fetch the full cart of the logged in user. This is the only
	/// source of truth for cart contents: clients replace their local state
	/// wholesale with the result.
	GetCart,
	GET "/cart",
	requires_auth = true,
	response = GetCartResponse {
		/// The current cart of the logged in user
		pub cart: Cart,
	},
);
