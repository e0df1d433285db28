use std::sync::{Arc, OnceLock, RwLock};

use async_trait::async_trait;
use models::{
	api::auth::*,
	Capabilities,
	UserProfile,
};
use tokio::sync::watch;

use crate::prelude::*;
use crate::{ApiClient, DeviceState, DeviceStorage, RequestError, SessionInvalidationHandler};

/// Whether a user is logged in. `Unknown` is the only initial state;
/// consumers block (show a loading indicator) until bootstrap resolves it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LoginStatus {
	/// Bootstrap has not run yet
	#[default]
	Unknown,
	/// No user is logged in
	LoggedOut,
	/// A user is logged in and a persisted token exists
	LoggedIn,
}

impl LoginStatus {
	/// Returns true if a user is logged in, false otherwise.
	pub fn is_logged_in(self) -> bool {
		matches!(self, Self::LoggedIn)
	}
}

/// A blocking notice shown when the backend reports the account as banned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BanNotice {
	/// The user-facing message from the rejection body
	pub message: String,
}

impl BanNotice {
	/// The heading of the notice.
	pub fn title(&self) -> &'static str {
		"Account banned"
	}
}

/// Owns the login lifecycle, the persisted token, and the profile of the
/// current user. All other stores assume this one has been bootstrapped.
pub struct SessionStore {
	/// The HTTP gateway
	client: Arc<ApiClient>,
	/// Where the token and login flag are persisted
	storage: Arc<dyn DeviceStorage>,
	/// The profile of the logged in user, once hydrated
	user: RwLock<Option<UserProfile>>,
	/// The login status, published to consumers over a watch channel
	status_tx: watch::Sender<LoginStatus>,
	/// The latest ban notice, if the session was force-closed
	ban_tx: watch::Sender<Option<BanNotice>>,
	/// The cart store to refresh on login and reset on logout. Set once
	/// during wiring
	cart: OnceLock<Arc<super::CartStore>>,
}

impl SessionStore {
	/// Creates a session store. [`SessionStore::attach_cart`] must be called
	/// during wiring before login is first invoked.
	pub fn new(client: Arc<ApiClient>, storage: Arc<dyn DeviceStorage>) -> Arc<Self> {
		let (status_tx, _) = watch::channel(LoginStatus::Unknown);
		let (ban_tx, _) = watch::channel(None);
		Arc::new(Self {
			client,
			storage,
			user: RwLock::new(None),
			status_tx,
			ban_tx,
			cart: OnceLock::new(),
		})
	}

	/// Links the cart store that login refreshes and logout clears.
	pub fn attach_cart(&self, cart: Arc<super::CartStore>) {
		// A second wiring pass is a no-op
		let _ = self.cart.set(cart);
	}

	/// Resolves the persisted login state. Must run once before any
	/// authenticated screen renders; issues no network calls.
	#[instrument(skip(self))]
	pub fn bootstrap(&self) {
		let status = match self.storage.load() {
			Ok(state) if state.is_logged_in() => LoginStatus::LoggedIn,
			Ok(_) => LoginStatus::LoggedOut,
			Err(error) => {
				warn!("device state could not be loaded, treating as logged out: {error}");
				LoginStatus::LoggedOut
			}
		};
		debug!("bootstrap resolved the session to {status:?}");
		self.status_tx.send_replace(status);
	}

	/// Logs in with the given credentials. On success the token is
	/// persisted, the profile is hydrated and the cart is refreshed exactly
	/// once, all before this resolves. On failure no state changes. A ban
	/// reported by the hydration calls wins over the login: the session
	/// stays closed and the ban is surfaced as the error.
	#[instrument(skip(self, password))]
	pub async fn login(&self, email: String, password: String) -> Result<(), RequestError> {
		let LoginResponse { token } = self
			.client
			.make_request::<Login>(LoginRequest { email, password })
			.await?;

		self.storage
			.save(DeviceState::LoggedIn { token })
			.map_err(|error| {
				RequestError::Validation(format!("the session could not be persisted: {error}"))
			})?;

		// A notice from a previous session is cleared before the hydration
		// calls below, which are authenticated and can publish a fresh one
		self.ban_tx.send_replace(None);

		self.fetch_profile().await;
		if let Some(cart) = self.cart.get() {
			if let Err(error) = cart.refresh().await {
				warn!("cart refresh after login failed: {error}");
			}
		}

		// The hydration calls can report a ban, which tears the session
		// down while this login is still in flight
		if let Some(notice) = self.ban_notice() {
			info!("ban reported during login, leaving the session closed");
			return Err(RequestError::Api {
				status: models::StatusCode::FORBIDDEN,
				error: models::ErrorType::UserBanned,
				message: notice.message,
			});
		}
		let token_persisted = self
			.storage
			.load()
			.map(|state| state.is_logged_in())
			.unwrap_or(false);
		if !token_persisted {
			self.status_tx.send_replace(LoginStatus::LoggedOut);
			return Err(RequestError::Validation(
				"the session was invalidated while logging in".to_string(),
			));
		}

		self.status_tx.send_replace(LoginStatus::LoggedIn);
		info!("logged in");
		Ok(())
	}

	/// Registers a new customer account. Does not log in.
	pub async fn register(&self, request: RegisterRequest) -> Result<(), RequestError> {
		self.client.make_request::<Register>(request).await?;
		Ok(())
	}

	/// Logs out: clears the persisted token, the profile and the cart. Safe
	/// to call when already logged out.
	#[instrument(skip(self))]
	pub fn logout(&self) {
		if let Err(error) = self.storage.save(DeviceState::LoggedOut) {
			warn!("persisted state could not be cleared: {error}");
		}
		*self
			.user
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
		if let Some(cart) = self.cart.get() {
			cart.reset();
		}
		self.status_tx.send_replace(LoginStatus::LoggedOut);
		info!("logged out");
	}

	/// Hydrates the profile of the logged in user. Best-effort: without a
	/// token, or if the call fails, the previous profile is kept so that a
	/// stale or missing token degrades to a guest view instead of blocking
	/// the UI. Only an explicit ban signal ends the session.
	#[instrument(skip(self))]
	pub async fn fetch_profile(&self) {
		let has_token = self
			.storage
			.load()
			.map(|state| state.is_logged_in())
			.unwrap_or(false);
		if !has_token {
			debug!("no persisted token, skipping the profile fetch");
			return;
		}

		match self.client.make_request::<CurrentUser>(()).await {
			Ok(CurrentUserResponse { user }) => {
				*self
					.user
					.write()
					.unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(user);
			}
			Err(error) => {
				debug!("profile fetch failed, keeping the previous profile: {error}");
			}
		}
	}

	/// Updates the profile of the logged in user and stores the result.
	pub async fn update_profile(
		&self,
		request: UpdateProfileRequest,
	) -> Result<UserProfile, RequestError> {
		let UpdateProfileResponse { user } =
			self.client.make_request::<UpdateProfile>(request).await?;
		*self
			.user
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(user.clone());
		Ok(user)
	}

	/// The current login status.
	pub fn status(&self) -> LoginStatus {
		*self.status_tx.borrow()
	}

	/// Subscribes to login status changes.
	pub fn subscribe_status(&self) -> watch::Receiver<LoginStatus> {
		self.status_tx.subscribe()
	}

	/// The latest ban notice, if the session was force-closed by a ban.
	pub fn ban_notice(&self) -> Option<BanNotice> {
		self.ban_tx.borrow().clone()
	}

	/// Subscribes to ban notices.
	pub fn subscribe_ban_notices(&self) -> watch::Receiver<Option<BanNotice>> {
		self.ban_tx.subscribe()
	}

	/// A snapshot of the profile of the logged in user, if hydrated.
	pub fn user(&self) -> Option<UserProfile> {
		self.user
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone()
	}

	/// The typed permission set of the current session, resolved from the
	/// user's role. Sessions without a hydrated profile resolve as a
	/// customer.
	pub fn capabilities(&self) -> Capabilities {
		self.user()
			.map(|user| user.role)
			.unwrap_or_default()
			.capabilities()
	}
}

#[async_trait]
impl SessionInvalidationHandler for SessionStore {
	async fn on_user_banned(&self, message: String) {
		self.logout();
		self.ban_tx.send_replace(Some(BanNotice { message }));
	}
}
