use crate::declare_api_endpoint;

declare_api_endpoint!(
	/// Route to increment the quantity of a product already in the cart.
	/// Incrementing a product that is not in the cart is a no-op, not an
	/// error.
	IncrementCartItem,
	POST "/cart/increment",
	requires_auth = true,
	request = IncrementCartItemRequest {
		/// The id of the product to increment
		pub product_id: String,
	},
	response = IncrementCartItemResponse {},
);
