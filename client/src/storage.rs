use std::{
	path::{Path, PathBuf},
	sync::RwLock,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// The durable device-side state of the client. This is the entire local
/// persistence surface: everything else is refetched each session.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(untagged)]
pub enum DeviceState {
	/// The state of the device when a user is logged in
	#[serde(rename_all = "camelCase")]
	LoggedIn {
		/// The user's opaque session token
		token: String,
	},
	/// The state of the device when no user is logged in
	#[default]
	LoggedOut,
}

impl DeviceState {
	/// Returns the persisted session token, if a user is logged in.
	pub fn token(&self) -> Option<&str> {
		match self {
			Self::LoggedIn { token } => Some(token.as_str()),
			Self::LoggedOut => None,
		}
	}

	/// Returns true if a user is logged in, false otherwise.
	pub fn is_logged_in(&self) -> bool {
		matches!(self, Self::LoggedIn { .. })
	}
}

/// Key-value device storage for [`DeviceState`]. Implementations must be
/// cheap to call repeatedly: the HTTP gateway resolves the token through
/// this on every request.
pub trait DeviceStorage: Send + Sync {
	/// Load the persisted state. A missing backing store loads as the
	/// default (logged out) state, not as an error.
	fn load(&self) -> Result<DeviceState, anyhow::Error>;

	/// Persist the given state, replacing whatever was stored before.
	fn save(&self, state: DeviceState) -> Result<(), anyhow::Error>;
}

/// [`DeviceStorage`] backed by a JSON file in the platform config location.
///
/// The file location is resolved in the following order:
/// - The environment variable `TIFFIN_STATE_PATH` if it is set
/// - The user specific config location of the current platform
#[derive(Debug, Clone)]
pub struct FileStorage {
	/// The path of the backing JSON file
	path: PathBuf,
}

impl FileStorage {
	/// Creates a [`FileStorage`] backed by the given file.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Creates a [`FileStorage`] at the platform default location, honoring
	/// the `TIFFIN_STATE_PATH` override.
	pub fn at_default_location() -> Result<Self, anyhow::Error> {
		let path = if let Some(path) = std::env::var_os("TIFFIN_STATE_PATH") {
			PathBuf::from(path)
		} else {
			dirs::config_dir()
				.context("no config directory available on this platform")?
				.join("tiffin")
				.join("state.json")
		};
		Ok(Self::new(path))
	}

	/// The path of the backing file.
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl DeviceStorage for FileStorage {
	fn load(&self) -> Result<DeviceState, anyhow::Error> {
		let bytes = match std::fs::read(&self.path) {
			Ok(bytes) => bytes,
			Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
				return Ok(DeviceState::default());
			}
			Err(error) => {
				return Err(error).context("failed to read the device state file");
			}
		};
		serde_json::from_slice(&bytes).context("failed to deserialize the device state")
	}

	fn save(&self, state: DeviceState) -> Result<(), anyhow::Error> {
		if let Some(parent) = self.path.parent() {
			std::fs::create_dir_all(parent).context("failed to create the state directory")?;
		}
		std::fs::write(
			&self.path,
			serde_json::to_vec(&state).context("failed to serialize the device state")?,
		)
		.context("failed to write the device state file")
	}
}

/// [`DeviceStorage`] held in memory. Used in tests, and by embedders that
/// bridge persistence to a platform keystore themselves.
#[derive(Debug, Default)]
pub struct MemoryStorage {
	/// The current state
	state: RwLock<DeviceState>,
}

impl MemoryStorage {
	/// Creates a [`MemoryStorage`] already holding the given state.
	pub fn with_state(state: DeviceState) -> Self {
		Self {
			state: RwLock::new(state),
		}
	}
}

impl DeviceStorage for MemoryStorage {
	fn load(&self) -> Result<DeviceState, anyhow::Error> {
		Ok(self
			.state
			.read()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone())
	}

	fn save(&self, state: DeviceState) -> Result<(), anyhow::Error> {
		*self
			.state
			.write()
			.unwrap_or_else(|poisoned| poisoned.into_inner()) = state;
		Ok(())
	}
}
