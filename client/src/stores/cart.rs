use std::sync::{Arc, RwLock};

use models::{
	api::{cart::*, order::*},
	CartItem,
	Order,
};
use tokio::sync::Mutex;

use crate::prelude::*;
use crate::{ApiClient, RequestError};

/// The outcome of a cart mutation that can hit the one-restaurant-at-a-time
/// rule. The conflict is an informational condition, not a hard error: the
/// UI explains that the cart has to be cleared first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartMutationOutcome {
	/// The mutation was applied and the cart has been refreshed
	Applied,
	/// The cart holds items from a different restaurant; nothing changed
	RestaurantConflict {
		/// The user-facing message from the rejection body
		message: String,
	},
}

/// A cart line item joined with its product snapshot, ready for display.
/// A pure projection of the raw cart: never mutated directly, recomputed
/// whenever the raw cart changes.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedCartItem {
	/// The id of the product
	pub product_id: String,
	/// The display name of the product
	pub name: String,
	/// The image of the product
	pub image: Option<String>,
	/// Whether the product is vegetarian
	pub is_veg: bool,
	/// The list price of one unit
	pub unit_price: f64,
	/// The price actually paid for one unit, after any offer
	pub effective_price: f64,
	/// The discount being applied, as a percentage of the list price
	pub discount_percent: Option<f64>,
	/// How many units are in the cart
	pub quantity: u32,
	/// The effective price of the whole line
	pub line_total: f64,
}

/// Owns the server-authoritative cart. Local state is only ever written by
/// [`CartStore::refresh`], which replaces it wholesale with server truth;
/// mutations never apply optimistically, so a failed mutation leaves the
/// last-known-good state in place. All mutations are serialized through one
/// lock, so two rapid quantity taps cannot interleave their refresh reads.
pub struct CartStore {
	/// The HTTP gateway
	client: Arc<ApiClient>,
	/// The line items as last fetched from the server
	items: RwLock<Vec<CartItem>>,
	/// Serializes mutate-then-refresh sequences
	mutation_lock: Mutex<()>,
}

impl CartStore {
	/// Creates an empty cart store.
	pub fn new(client: Arc<ApiClient>) -> Self {
		Self {
			client,
			items: RwLock::new(Vec::new()),
			mutation_lock: Mutex::new(()),
		}
	}

	/// Fetches the full cart from the backend and replaces local state
	/// wholesale. On failure the last-known-good state is kept and the
	/// error is surfaced.
	#[instrument(skip(self))]
	pub async fn refresh(&self) -> Result<(), RequestError> {
		let _guard = self.mutation_lock.lock().await;
		self.refresh_locked().await
	}

	/// The refresh body, for callers already holding the mutation lock.
	async fn refresh_locked(&self) -> Result<(), RequestError> {
		let GetCartResponse { cart } = self.client.make_request::<GetCart>(()).await?;
		debug!("cart refreshed with {} line items", cart.items.len());
		*self
			.items
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner()) = cart.items;
		Ok(())
	}

	/// Adds a product to the cart, then refreshes. A rejection by the
	/// one-restaurant rule is returned as
	/// [`CartMutationOutcome::RestaurantConflict`] with the existing items
	/// untouched; any other failure is surfaced as an error.
	#[instrument(skip(self))]
	pub async fn add(&self, product_id: &str, quantity: u32) -> Result<CartMutationOutcome, RequestError> {
		let _guard = self.mutation_lock.lock().await;
		let result = self
			.client
			.make_request::<AddCartItem>(AddCartItemRequest {
				product_id: product_id.to_owned(),
				quantity,
			})
			.await;
		match result {
			Ok(_) => {
				self.refresh_locked().await?;
				Ok(CartMutationOutcome::Applied)
			}
			Err(error) if error.is_restaurant_conflict() => {
				info!("add rejected by the one-restaurant rule");
				Ok(CartMutationOutcome::RestaurantConflict {
					message: error.to_string(),
				})
			}
			Err(error) => Err(error),
		}
	}

	/// Adds a single unit of a product. See [`CartStore::add`].
	pub async fn add_one(&self, product_id: &str) -> Result<CartMutationOutcome, RequestError> {
		self.add(product_id, 1).await
	}

	/// Increments the quantity of a product, then refreshes. The refresh is
	/// awaited only after the mutation response arrives, so the read can
	/// never race ahead of the backend's write. Incrementing a product that
	/// is not in the cart is a backend no-op, not an error.
	#[instrument(skip(self))]
	pub async fn increase_quantity(&self, product_id: &str) -> Result<(), RequestError> {
		let _guard = self.mutation_lock.lock().await;
		self.client
			.make_request::<IncrementCartItem>(IncrementCartItemRequest {
				product_id: product_id.to_owned(),
			})
			.await?;
		self.refresh_locked().await
	}

	/// Decrements the quantity of a product, then refreshes. A decrement
	/// that reaches zero removes the line server-side.
	#[instrument(skip(self))]
	pub async fn decrease_quantity(&self, product_id: &str) -> Result<(), RequestError> {
		let _guard = self.mutation_lock.lock().await;
		self.client
			.make_request::<DecrementCartItem>(DecrementCartItemRequest {
				product_id: product_id.to_owned(),
			})
			.await?;
		self.refresh_locked().await
	}

	/// Removes every item from the cart server-side, then refreshes.
	#[instrument(skip(self))]
	pub async fn clear(&self) -> Result<(), RequestError> {
		let _guard = self.mutation_lock.lock().await;
		self.client.make_request::<ClearCart>(()).await?;
		self.refresh_locked().await
	}

	/// Places an order with the current cart and the given address, then
	/// refreshes (the backend empties the cart on success).
	#[instrument(skip(self))]
	pub async fn checkout(&self, address: String) -> Result<Order, RequestError> {
		let _guard = self.mutation_lock.lock().await;
		let PlaceOrderResponse { order } = self
			.client
			.make_request::<PlaceOrder>(PlaceOrderRequest { address })
			.await?;
		self.refresh_locked().await?;
		info!(order_id = %order.id, "order placed");
		Ok(order)
	}

	/// Lists the orders of the logged in user, most recent first.
	pub async fn orders(&self) -> Result<Vec<Order>, RequestError> {
		let ListOrdersResponse { orders } = self.client.make_request::<ListOrders>(()).await?;
		Ok(orders)
	}

	/// Wipes local cart state without touching the backend. Used on logout.
	pub fn reset(&self) {
		self.items
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clear();
	}

	/// A snapshot of the raw line items, in server order.
	pub fn items(&self) -> Vec<CartItem> {
		self.items
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone()
	}

	/// The total number of units across all line items.
	pub fn total_quantity(&self) -> u32 {
		self.items
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.iter()
			.map(|item| item.quantity)
			.sum()
	}

	/// Whether the cart is empty.
	pub fn is_empty(&self) -> bool {
		self.items
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.is_empty()
	}

	/// The restaurant the cart currently belongs to, if any. All items of a
	/// non-empty cart reference the same restaurant (server-enforced).
	pub fn restaurant_id(&self) -> Option<String> {
		self.items
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.first()
			.and_then(|item| item.product.restaurant.clone())
	}

	/// The display projection of the cart, in the raw cart's line order.
	pub fn mapped_items(&self) -> Vec<MappedCartItem> {
		project(
			&self
				.items
				.read()
				.unwrap_or_else(|poisoned| poisoned.into_inner()),
		)
	}
}

/// Joins raw line items with their product snapshots. Pure and
/// order-preserving: the projection of a given cart is always the same.
fn project(items: &[CartItem]) -> Vec<MappedCartItem> {
	items
		.iter()
		.map(|item| {
			let effective_price = item.product.effective_price();
			MappedCartItem {
				product_id: item.product.id.clone(),
				name: item.product.name.clone(),
				image: item.product.image.clone(),
				is_veg: item.product.is_veg,
				unit_price: item.product.price,
				effective_price,
				discount_percent: item.product.discount_percent,
				quantity: item.quantity,
				line_total: effective_price * f64::from(item.quantity),
			}
		})
		.collect()
}
