use serde::{Deserialize, Serialize};

use crate::FoodItem;

/// A single line item in a cart. The backend populates the full product
/// document into the `productId` wire field, so the reference arrives as a
/// complete [`FoodItem`] snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
	/// The product this line refers to
	#[serde(rename = "productId")]
	pub product: FoodItem,
	/// How many units of the product are in the cart. Always positive: a
	/// decrement that reaches zero removes the line server-side
	pub quantity: u32,
}

/// The server-authoritative cart of a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
	/// The line items of the cart, in insertion order
	#[serde(default)]
	pub items: Vec<CartItem>,
}

impl Cart {
	/// The total number of units across all line items.
	pub fn total_quantity(&self) -> u32 {
		self.items.iter().map(|item| item.quantity).sum()
	}
}
