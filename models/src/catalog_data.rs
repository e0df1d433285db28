use serde::{Deserialize, Serialize};

/// A food category shown on the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
	/// The name of the category. The wire field is `category`
	#[serde(rename = "category")]
	pub name: String,
	/// The image shown for the category
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
}

/// A restaurant on the platform, with its menu items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
	/// The id of the restaurant
	#[serde(rename = "_id")]
	pub id: String,
	/// The display name of the restaurant
	pub name: String,
	/// The cover image of the restaurant
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	/// The menu items of this restaurant
	#[serde(default)]
	pub items: Vec<FoodItem>,
}

/// A single menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
	/// The id of the item
	#[serde(rename = "_id")]
	pub id: String,
	/// The display name of the item
	pub name: String,
	/// The list price of the item
	pub price: f64,
	/// The discounted price, if the item is currently on offer
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub offer_price: Option<f64>,
	/// The discount being applied, as a percentage of the list price
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub discount_percent: Option<f64>,
	/// The image of the item
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	/// Whether the item is vegetarian
	#[serde(default)]
	pub is_veg: bool,
	/// The category this item is listed under
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	/// The id of the restaurant serving this item
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub restaurant: Option<String>,
}

impl FoodItem {
	/// The price the customer actually pays: the offer price when one is
	/// set, the list price otherwise.
	pub fn effective_price(&self) -> f64 {
		self.offer_price.unwrap_or(self.price)
	}
}
