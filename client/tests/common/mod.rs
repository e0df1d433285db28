#![allow(dead_code)]

//! An in-process mock of the Tiffin backend, bound to an ephemeral loopback
//! port. Implements just enough of the API contract for the stores to be
//! exercised end to end, including the one-restaurant-at-a-time rule and
//! banned-account rejections.

use std::{
	collections::HashMap,
	net::SocketAddr,
	sync::{Arc, Mutex},
};

use axum::{
	extract::State,
	http::{HeaderMap, StatusCode},
	routing::{get, patch, post},
	Json,
	Router,
};
use client::{App, AppConfig, DeviceStorage, MemoryStorage};
use models::FoodItem;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use url::Url;

/// The email the mock backend accepts at login.
pub const EMAIL: &str = "asha@example.com";
/// The password the mock backend accepts at login.
pub const PASSWORD: &str = "secret";
/// The token the mock backend issues at login.
pub const TOKEN: &str = "token-123";

/// The shared mutable state of the mock backend.
pub type Shared = Arc<Mutex<Backend>>;

/// Everything the mock backend knows.
pub struct Backend {
	/// The token issued by the last successful login, accepted on
	/// authenticated routes
	pub issued_token: Option<String>,
	/// Whether the (single) account is banned. Authenticated requests from
	/// a banned account are rejected
	pub banned: bool,
	/// When set, catalog listings fail with a server error
	pub fail_catalog: bool,
	/// The display name of the account
	pub name: String,
	/// The role of the account, as a wire string
	pub role: &'static str,
	/// Every menu item across all restaurants
	pub menu: Vec<FoodItem>,
	/// The cart: product id to quantity, in insertion order
	pub cart: Vec<(String, u32)>,
	/// The category listing
	pub categories: Vec<Value>,
	/// Orders placed so far
	pub orders: Vec<Value>,
	/// Request counters, keyed by "METHOD /path"
	pub hits: HashMap<String, usize>,
}

impl Default for Backend {
	fn default() -> Self {
		Self {
			issued_token: None,
			banned: false,
			fail_catalog: false,
			name: "Asha".to_string(),
			role: "customer",
			menu: vec![
				food("f1", "Masala Dosa", 120.0, None, "r1"),
				food("f2", "Filter Coffee", 40.0, None, "r1"),
				food("f3", "Paneer Tikka", 240.0, Some(199.0), "r2"),
			],
			cart: Vec::new(),
			categories: vec![
				json!({"category": "South Indian", "image": null}),
				json!({"category": "North Indian", "image": null}),
			],
			orders: Vec::new(),
			hits: HashMap::new(),
		}
	}
}

impl Backend {
	/// Records one request against the given counter.
	fn hit(&mut self, key: &str) {
		*self.hits.entry(key.to_string()).or_insert(0) += 1;
	}

	/// Looks up a menu item by id.
	fn menu_item(&self, product_id: &str) -> Option<&FoodItem> {
		self.menu.iter().find(|item| item.id == product_id)
	}

	/// The restaurant the cart currently belongs to, if any.
	fn cart_restaurant(&self) -> Option<String> {
		self.cart
			.first()
			.and_then(|(id, _)| self.menu_item(id))
			.and_then(|item| item.restaurant.clone())
	}

	/// The cart as wire JSON, with product references populated.
	fn cart_json(&self) -> Value {
		let items = self
			.cart
			.iter()
			.filter_map(|(id, quantity)| {
				let product = self.menu_item(id)?;
				Some(json!({
					"productId": serde_json::to_value(product).unwrap(),
					"quantity": quantity,
				}))
			})
			.collect::<Vec<_>>();
		json!({"items": items})
	}

	/// The account profile as wire JSON.
	fn user_json(&self) -> Value {
		json!({
			"_id": "u1",
			"name": self.name,
			"email": EMAIL,
			"role": self.role,
			"banned": self.banned,
		})
	}
}

/// Builds a menu item for the mock backend.
pub fn food(id: &str, name: &str, price: f64, offer: Option<f64>, restaurant: &str) -> FoodItem {
	FoodItem {
		id: id.to_string(),
		name: name.to_string(),
		price,
		offer_price: offer,
		discount_percent: None,
		image: None,
		is_veg: true,
		category: None,
		restaurant: Some(restaurant.to_string()),
	}
}

/// A rejection body in the shared envelope.
fn reject(status: StatusCode, code: &str, message: &str) -> (StatusCode, Json<Value>) {
	(
		status,
		Json(json!({"success": false, "error": code, "message": message})),
	)
}

/// A success body in the shared envelope, with the payload at the top level.
fn accept(payload: Value) -> (StatusCode, Json<Value>) {
	let mut body = json!({"success": true});
	if let (Some(body), Some(payload)) = (body.as_object_mut(), payload.as_object()) {
		for (key, value) in payload {
			body.insert(key.clone(), value.clone());
		}
	}
	(StatusCode::OK, Json(body))
}

/// Checks the `authorization` header against the issued token, rejecting
/// banned accounts. Uses the legacy `user_banned` spelling on purpose: the
/// client must accept both.
fn authorize(state: &Backend, headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
	let presented = headers
		.get("authorization")
		.and_then(|value| value.to_str().ok());
	match (&state.issued_token, presented) {
		(Some(issued), Some(presented)) if issued == presented => {
			if state.banned {
				Err(reject(
					StatusCode::FORBIDDEN,
					"user_banned",
					"Your account has been banned",
				))
			} else {
				Ok(())
			}
		}
		_ => Err(reject(
			StatusCode::UNAUTHORIZED,
			"tokenInvalid",
			"Your session has expired. Please login again",
		)),
	}
}

async fn login(State(state): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("POST /login-user");
	let email = body["email"].as_str().unwrap_or_default();
	let password = body["password"].as_str().unwrap_or_default();
	if email == EMAIL && password == PASSWORD {
		state.issued_token = Some(TOKEN.to_string());
		accept(json!({"token": TOKEN}))
	} else {
		reject(
			StatusCode::UNAUTHORIZED,
			"invalidCredentials",
			"Invalid email or password",
		)
	}
}

async fn register(State(state): State<Shared>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("POST /register");
	if body["email"].as_str() == Some(EMAIL) {
		reject(
			StatusCode::CONFLICT,
			"emailTaken",
			"An account already exists with that email",
		)
	} else {
		accept(json!({}))
	}
}

async fn userdata(State(state): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("GET /userdata");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	let user = state.user_json();
	accept(json!({"user": user}))
}

async fn update_profile(
	State(state): State<Shared>,
	headers: HeaderMap,
	Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("PUT /update-profile");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	if let Some(name) = body["name"].as_str() {
		state.name = name.to_string();
	}
	let user = state.user_json();
	accept(json!({"user": user}))
}

async fn list_categories(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("GET /categories");
	if state.fail_catalog {
		return reject(
			StatusCode::INTERNAL_SERVER_ERROR,
			"internalServerError",
			"An internal server error has occured",
		);
	}
	accept(json!({"categories": state.categories}))
}

async fn add_category(
	State(state): State<Shared>,
	headers: HeaderMap,
	Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("POST /categories");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	let category = json!({
		"category": body["category"].as_str().unwrap_or_default(),
		"image": body["image"].clone(),
	});
	state.categories.push(category);
	accept(json!({}))
}

async fn list_restaurants(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("GET /restaurants");
	if state.fail_catalog {
		return reject(
			StatusCode::INTERNAL_SERVER_ERROR,
			"internalServerError",
			"An internal server error has occured",
		);
	}
	let by_restaurant = |restaurant: &str| {
		state
			.menu
			.iter()
			.filter(|item| item.restaurant.as_deref() == Some(restaurant))
			.map(|item| serde_json::to_value(item).unwrap())
			.collect::<Vec<_>>()
	};
	let restaurants = json!([
		{"_id": "r1", "name": "Udupi Corner", "items": by_restaurant("r1")},
		{"_id": "r2", "name": "Punjabi Dhaba", "items": by_restaurant("r2")},
	]);
	accept(json!({"restaurants": restaurants}))
}

async fn get_cart(State(state): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("GET /cart");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	let cart = state.cart_json();
	accept(json!({"cart": cart}))
}

async fn clear_cart(State(state): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("DELETE /cart");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	state.cart.clear();
	accept(json!({}))
}

async fn add_to_cart(
	State(state): State<Shared>,
	headers: HeaderMap,
	Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("POST /cart/add");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	let product_id = body["productId"].as_str().unwrap_or_default().to_string();
	let quantity = body["quantity"].as_u64().unwrap_or(1) as u32;
	let Some(item) = state.menu_item(&product_id).cloned() else {
		return reject(
			StatusCode::NOT_FOUND,
			"resourceDoesNotExist",
			"The resource you are trying to access does not exist",
		);
	};
	if let Some(current) = state.cart_restaurant() {
		if item.restaurant.as_deref() != Some(current.as_str()) {
			return reject(
				StatusCode::CONFLICT,
				"restaurantConflict",
				"Your cart has items from another restaurant. Clear it to order from this one",
			);
		}
	}
	if let Some(line) = state.cart.iter_mut().find(|(id, _)| *id == product_id) {
		line.1 += quantity;
	} else {
		state.cart.push((product_id, quantity));
	}
	accept(json!({}))
}

async fn increment(
	State(state): State<Shared>,
	headers: HeaderMap,
	Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("POST /cart/increment");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	let product_id = body["productId"].as_str().unwrap_or_default();
	// Incrementing an absent product is a no-op, not an error
	if let Some(line) = state.cart.iter_mut().find(|(id, _)| id == product_id) {
		line.1 += 1;
	}
	accept(json!({}))
}

async fn decrement(
	State(state): State<Shared>,
	headers: HeaderMap,
	Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("POST /cart/decrement");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	let product_id = body["productId"].as_str().unwrap_or_default().to_string();
	if let Some(line) = state.cart.iter_mut().find(|(id, _)| *id == product_id) {
		line.1 = line.1.saturating_sub(1);
	}
	state.cart.retain(|(_, quantity)| *quantity > 0);
	accept(json!({}))
}

async fn place_order(
	State(state): State<Shared>,
	headers: HeaderMap,
	Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("POST /orders");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	if state.cart.is_empty() {
		return reject(StatusCode::BAD_REQUEST, "emptyCart", "Your cart is empty");
	}
	let total = state
		.cart
		.iter()
		.filter_map(|(id, quantity)| {
			let item = state.menu_item(id)?;
			Some(item.offer_price.unwrap_or(item.price) * f64::from(*quantity))
		})
		.sum::<f64>();
	let items = state.cart_json()["items"].clone();
	let order = json!({
		"_id": format!("o{}", state.orders.len() + 1),
		"items": items,
		"address": body["address"].as_str().unwrap_or_default(),
		"status": "pending",
		"total": total,
	});
	state.orders.push(order.clone());
	state.cart.clear();
	accept(json!({"order": order}))
}

async fn list_orders(State(state): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("GET /orders");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	accept(json!({"orders": state.orders}))
}

async fn admin_list_users(
	State(state): State<Shared>,
	headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("GET /admin/users");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	let users = json!([state.user_json()]);
	accept(json!({"users": users}))
}

async fn admin_set_role(
	State(state): State<Shared>,
	headers: HeaderMap,
	Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("PATCH /admin/users/role");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	state.role = match body["role"].as_str() {
		Some("admin") => "admin",
		Some("owner") => "owner",
		_ => "customer",
	};
	accept(json!({}))
}

async fn admin_set_ban(
	State(state): State<Shared>,
	headers: HeaderMap,
	Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
	let mut state = state.lock().unwrap();
	state.hit("PATCH /admin/users/ban");
	if let Err(rejection) = authorize(&state, &headers) {
		return rejection;
	}
	state.banned = body["banned"].as_bool().unwrap_or(false);
	accept(json!({}))
}

/// Builds the mock backend router under the `/api` base path.
fn router(state: Shared) -> Router {
	Router::new()
		.route("/api/login-user", post(login))
		.route("/api/register", post(register))
		.route("/api/userdata", get(userdata))
		.route("/api/update-profile", axum::routing::put(update_profile))
		.route("/api/categories", get(list_categories).post(add_category))
		.route("/api/restaurants", get(list_restaurants))
		.route("/api/cart", get(get_cart).delete(clear_cart))
		.route("/api/cart/add", post(add_to_cart))
		.route("/api/cart/increment", post(increment))
		.route("/api/cart/decrement", post(decrement))
		.route("/api/orders", post(place_order).get(list_orders))
		.route("/api/admin/users", get(admin_list_users))
		.route("/api/admin/users/role", patch(admin_set_role))
		.route("/api/admin/users/ban", patch(admin_set_ban))
		.with_state(state)
}

/// A running mock backend on an ephemeral loopback port.
pub struct TestServer {
	/// The bound address
	pub addr: SocketAddr,
	/// The shared backend state, inspectable from tests
	pub state: Shared,
	/// Stops the server when fired
	shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
	/// Binds and spawns the mock backend.
	pub async fn spawn() -> Self {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		let state = Arc::new(Mutex::new(Backend::default()));
		let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
		let app = router(Arc::clone(&state));
		tokio::spawn(async move {
			axum::serve(listener, app)
				.with_graceful_shutdown(async move {
					let _ = shutdown_rx.await;
				})
				.await
				.unwrap();
		});
		Self {
			addr,
			state,
			shutdown: Some(shutdown_tx),
		}
	}

	/// The API base URL of this server.
	pub fn url(&self) -> Url {
		Url::parse(&format!("http://{}/api/", self.addr)).unwrap()
	}

	/// How many requests the given "METHOD /path" counter has seen.
	pub fn hits(&self, key: &str) -> usize {
		self.state
			.lock()
			.unwrap()
			.hits
			.get(key)
			.copied()
			.unwrap_or(0)
	}

	/// How many requests arrived in total.
	pub fn total_hits(&self) -> usize {
		self.state.lock().unwrap().hits.values().sum()
	}

	/// Marks the account banned (or not).
	pub fn set_banned(&self, banned: bool) {
		self.state.lock().unwrap().banned = banned;
	}

	/// Makes catalog listings fail with a server error (or not).
	pub fn set_fail_catalog(&self, fail: bool) {
		self.state.lock().unwrap().fail_catalog = fail;
	}

	/// Stops accepting connections. Requests issued afterwards fail at the
	/// network layer.
	pub async fn shutdown(&mut self) {
		if let Some(shutdown) = self.shutdown.take() {
			let _ = shutdown.send(());
		}
		// Give the acceptor a moment to wind down
		tokio::time::sleep(std::time::Duration::from_millis(50)).await;
	}
}

/// Spawns a mock backend and an [`App`] wired against it with in-memory
/// storage.
pub async fn spawn_app() -> (App, TestServer) {
	let server = TestServer::spawn().await;
	let app = app_against(&server, Arc::new(MemoryStorage::default()));
	(app, server)
}

/// Wires an [`App`] against the given server and storage.
pub fn app_against(server: &TestServer, storage: Arc<dyn DeviceStorage>) -> App {
	let config = AppConfig::builder().base_url(server.url()).build();
	App::new(config, storage).unwrap()
}

/// Spawns a mock backend and an [`App`] that is already logged in.
pub async fn spawn_logged_in_app() -> (App, TestServer) {
	let (app, server) = spawn_app().await;
	app.session().bootstrap();
	app.session()
		.login(EMAIL.to_string(), PASSWORD.to_string())
		.await
		.unwrap();
	(app, server)
}
