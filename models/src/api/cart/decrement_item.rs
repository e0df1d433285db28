use crate::declare_api_endpoint;

declare_api_endpoint!(
	/// Route to decrement the quantity of a product in the cart. A decrement
	/// that reaches zero removes the line item. Decrementing a product that
	/// is not in the cart is a no-op, not an error.
	DecrementCartItem,
	POST "/cart/decrement",
	requires_auth = true,
	request = DecrementCartItemRequest {
		/// The id of the product to decrement
		pub product_id: String,
	},
	response = DecrementCartItemResponse {},
);
