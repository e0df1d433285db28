use std::sync::{Arc, RwLock};

use models::{
	api::catalog::*,
	Category,
	FoodItem,
	Restaurant,
};

use crate::prelude::*;
use crate::{ApiClient, RequestError};

/// Owns the category and restaurant listings. Read-mostly: every fetch
/// replaces the listing wholesale, and a failed fetch keeps the previous
/// listing (stale-but-available over empty).
pub struct CatalogStore {
	/// The HTTP gateway
	client: Arc<ApiClient>,
	/// All the categories, as last fetched
	categories: RwLock<Vec<Category>>,
	/// All the restaurants, as last fetched
	restaurants: RwLock<Vec<Restaurant>>,
}

impl CatalogStore {
	/// Creates an empty catalog store.
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self {
			client,
			categories: RwLock::new(Vec::new()),
			restaurants: RwLock::new(Vec::new()),
		}
	}

	/// Fetches all categories, replacing the listing wholesale. On failure
	/// the previous listing is kept and the error is surfaced to the caller.
	#[instrument(skip(self))]
	pub async fn fetch_categories(&self) -> Result<(), RequestError> {
		let ListCategoriesResponse { categories } =
			self.client.make_request::<ListCategories>(()).await?;
		debug!("replacing {} categories", categories.len());
		*self
			.categories
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner()) = categories;
		Ok(())
	}

	/// Fetches all restaurants, replacing the listing wholesale. Same
	/// stale-on-failure policy as [`CatalogStore::fetch_categories`].
	#[instrument(skip(self))]
	pub async fn fetch_restaurants(&self) -> Result<(), RequestError> {
		let ListRestaurantsResponse { restaurants } =
			self.client.make_request::<ListRestaurants>(()).await?;
		debug!("replacing {} restaurants", restaurants.len());
		*self
			.restaurants
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner()) = restaurants;
		Ok(())
	}

	/// Adds a new category. Admin only. The local listing is NOT updated:
	/// there are no partial updates, so the caller follows up with
	/// [`CatalogStore::fetch_categories`].
	pub async fn add_category(&self, request: AddCategoryRequest) -> Result<(), RequestError> {
		self.client.make_request::<AddCategory>(request).await?;
		Ok(())
	}

	/// A snapshot of all categories.
	pub fn categories(&self) -> Vec<Category> {
		self.categories
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone()
	}

	/// A snapshot of all restaurants.
	pub fn restaurants(&self) -> Vec<Restaurant> {
		self.restaurants
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone()
	}

	/// Looks up a restaurant by id.
	pub fn restaurant(&self, id: &str) -> Option<Restaurant> {
		self.restaurants
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.iter()
			.find(|restaurant| restaurant.id == id)
			.cloned()
	}

	/// Looks up a menu item by id across all restaurants.
	pub fn find_item(&self, product_id: &str) -> Option<FoodItem> {
		self.restaurants
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.iter()
			.flat_map(|restaurant| restaurant.items.iter())
			.find(|item| item.id == product_id)
			.cloned()
	}
}
