use crate::declare_api_endpoint;
use crate::Restaurant;

declare_api_endpoint!(
	/// Route to list all restaurants along with their menu items.
	ListRestaurants,
	GET "/restaurants",
	requires_auth = false,
	response = ListRestaurantsResponse {
		/// All the restaurants on the platform
		pub restaurants: Vec<Restaurant>,
	},
);
