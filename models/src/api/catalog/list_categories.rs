use crate::declare_api_endpoint;
use crate::Category;

declare_api_endpoint!(
	/// Route to list all food categories. The listing is replaced wholesale
	/// by clients: there is no incremental update of categories.
	ListCategories,
	GET "/categories",
	requires_auth = false,
	response = ListCategoriesResponse {
		/// All the categories on the platform
		pub categories: Vec<Category>,
	},
);
