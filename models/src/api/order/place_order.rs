use crate::declare_api_endpoint;
use crate::Order;

declare_api_endpoint!(
	/// Route to place an order with the current contents of the cart. On
	/// success the backend empties the cart, so clients refresh their cart
	/// state afterwards.
	PlaceOrder,
	POST "/orders",
	requires_auth = true,
	request = PlaceOrderRequest {
		/// The delivery address for the order
		pub address: String,
	},
	response = PlaceOrderResponse {
		/// The order that was placed
		pub order: Order,
	},
);
