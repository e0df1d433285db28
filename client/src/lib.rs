#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]
#![cfg_attr(
	debug_assertions,
	allow(unused_variables, dead_code, unused_mut),
	allow(missing_docs, clippy::missing_docs_in_private_items)
)]

//! The client core of the Tiffin food ordering application: the session,
//! catalog and cart stores, and the single HTTP gateway they all call
//! through. UI layers read store snapshots, subscribe to the watch channels,
//! and invoke the store operations; nothing in here renders anything.
//!
//! Construct an [`App`] to get a fully wired set of stores, or assemble the
//! pieces by hand for finer control (e.g. a custom [`DeviceStorage`]).

/// Typed wrappers for the admin-only API surface.
pub mod admin;
/// The state stores: session, catalog and cart.
pub mod stores;

/// The injectable wiring of the stores.
mod app;
/// The single outbound HTTP gateway.
mod client;
/// Client configuration and constants.
mod config;
/// The failure taxonomy surfaced to callers.
mod error;
/// The durable device-side key-value state.
mod storage;

/// A prelude that re-exports commonly used items.
pub mod prelude {
	pub use tracing::{debug, error, info, instrument, trace, warn};

	pub use crate::{
		app::App,
		client::{ApiClient, SessionInvalidationHandler},
		config::{constants, AppConfig},
		error::RequestError,
		storage::{DeviceState, DeviceStorage, FileStorage, MemoryStorage},
		stores::{
			BanNotice,
			CartMutationOutcome,
			CartStore,
			CatalogStore,
			LoginStatus,
			MappedCartItem,
			SessionStore,
		},
	};
}

pub use self::{app::*, client::*, config::*, error::*, storage::*};
