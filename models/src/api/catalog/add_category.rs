use crate::declare_api_endpoint;

declare_api_endpoint!(
	/// Route to add a new food category. Admin only. Adding a category does
	/// not push an update to clients: they re-fetch the category listing
	/// explicitly afterwards.
	AddCategory,
	POST "/categories",
	requires_auth = true,
	request = AddCategoryRequest {
		/// The name of the new category
		#[serde(rename = "category")]
		pub name: String,
		/// The image shown for the new category
		#[serde(default, skip_serializing_if = "Option::is_none")]
		pub image: Option<String>,
	},
	response = AddCategoryResponse {},
);
