use crate::declare_api_endpoint;

declare_api_endpoint!(
	/// Route to remove every item from the cart. Used when the user wants to
	/// start an order from a different restaurant.
	ClearCart,
	DELETE "/cart",
	requires_auth = true,
	response = ClearCartResponse {},
);
