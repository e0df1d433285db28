use crate::declare_api_endpoint;

declare_api_endpoint!(
	/// Route to add a product to the cart. The backend rejects the add with
	/// [`crate::ErrorType::RestaurantConflict`] if the cart already holds
	/// items from a different restaurant.
	AddCartItem,
	POST "/cart/add",
	requires_auth = true,
	request = AddCartItemRequest {
		/// The id of the product to add
		pub product_id: String,
		/// How many units to add
		pub quantity: u32,
	},
	response = AddCartItemResponse {},
);
