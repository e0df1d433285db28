use std::sync::Arc;

use crate::{
	stores::{CartStore, CatalogStore, SessionStore},
	ApiClient,
	AppConfig,
	DeviceStorage,
	SessionInvalidationHandler,
};

/// The fully wired client core: one client, one session store, one catalog
/// store, one cart store. UI layers hold an `App` (or clones of its store
/// handles) and never construct stores ambiently, which keeps every store
/// testable without mounting any UI.
pub struct App {
	/// The configuration the core was built with
	config: AppConfig,
	/// The HTTP gateway shared by all stores
	client: Arc<ApiClient>,
	/// The session store
	session: Arc<SessionStore>,
	/// The catalog store
	catalog: Arc<CatalogStore>,
	/// The cart store
	cart: Arc<CartStore>,
}

impl App {
	/// Wires up the client core against the given storage. The ban handler
	/// and the session-to-cart link are connected here; callers follow up
	/// with [`SessionStore::bootstrap`] before rendering anything
	/// authenticated.
	pub fn new(
		config: AppConfig,
		storage: Arc<dyn DeviceStorage>,
	) -> Result<Self, anyhow::Error> {
		let client = Arc::new(ApiClient::new(&config, Arc::clone(&storage))?);
		let session = SessionStore::new(Arc::clone(&client), storage);
		let catalog = Arc::new(CatalogStore::new(Arc::clone(&client)));
		let cart = Arc::new(CartStore::new(Arc::clone(&client)));

		session.attach_cart(Arc::clone(&cart));
		client.set_session_handler(Arc::downgrade(
			&(Arc::clone(&session) as Arc<dyn SessionInvalidationHandler>),
		));

		Ok(Self {
			config,
			client,
			session,
			catalog,
			cart,
		})
	}

	/// The configuration the core was built with.
	pub fn config(&self) -> &AppConfig {
		&self.config
	}

	/// The HTTP gateway. Exposed for the admin operations in
	/// [`crate::admin`].
	pub fn client(&self) -> &Arc<ApiClient> {
		&self.client
	}

	/// The session store.
	pub fn session(&self) -> &Arc<SessionStore> {
		&self.session
	}

	/// The catalog store.
	pub fn catalog(&self) -> &Arc<CatalogStore> {
		&self.catalog
	}

	/// The cart store.
	pub fn cart(&self) -> &Arc<CartStore> {
		&self.cart
	}

	/// Tears the core down: wipes the in-memory cart so that lingering cart
	/// handles observe an empty cart, then drops everything owned here.
	/// Persisted device state and session store clones are left untouched;
	/// a session handle that outlives the core keeps its last status until
	/// it is dropped.
	pub fn dispose(self) {
		self.cart.reset();
	}
}
