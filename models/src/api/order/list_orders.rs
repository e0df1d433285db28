use crate::declare_api_endpoint;
use crate::Order;

declare_api_endpoint!(
	/// Route to list the orders of the logged in user, most recent first.
	ListOrders,
	GET "/orders",
	requires_auth = true,
	response = ListOrdersResponse {
		/// All the orders placed by the logged in user
		pub orders: Vec<Order>,
	},
);
