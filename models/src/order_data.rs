use serde::{Deserialize, Serialize};

use crate::CartItem;

/// The fulfilment state of an order, as driven by the backend. Clients only
/// ever read this value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
	/// The order has been placed and is waiting for the restaurant
	Pending,
	/// The restaurant has accepted the order and is preparing it
	Preparing,
	/// The order has left the restaurant
	OutForDelivery,
	/// The order has been delivered
	Delivered,
	/// The order was cancelled
	Cancelled,
}

/// An order placed by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
	/// The id of the order
	#[serde(rename = "_id")]
	pub id: String,
	/// The line items the order was placed with, snapshotted at checkout
	#[serde(default)]
	pub items: Vec<CartItem>,
	/// The delivery address the order was placed with
	pub address: String,
	/// The current fulfilment state of the order
	pub status: OrderStatus,
	/// The amount charged for the order
	pub total: f64,
}
