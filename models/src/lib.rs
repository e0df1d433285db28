#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]
#![cfg_attr(
	debug_assertions,
	allow(unused_variables, dead_code, unused_mut),
	allow(missing_docs, clippy::missing_docs_in_private_items)
)]

//! The API contract between the Tiffin backend and its clients. Every
//! endpoint the client core consumes is declared here, along with the shared
//! response envelopes, the structured error codes, and the data types that
//! cross the wire.

/// All the endpoint declarations, one module per API domain.
pub mod api;
/// Utility types used across the contract.
pub mod utils;

/// A prelude that re-exports commonly used items.
pub mod prelude {
	pub use crate::{
		utils::{False, True},
		ApiEndpoint,
		ApiErrorResponseBody,
		ApiResponseBody,
		ApiSuccessResponseBody,
		ErrorType,
		Method,
	};
}

mod cart_data;
mod catalog_data;
mod endpoint;
mod error;
mod order_data;
mod response;
mod user_data;

pub use http::{Method, StatusCode};

pub use self::{
	cart_data::*,
	catalog_data::*,
	endpoint::*,
	error::*,
	order_data::*,
	response::*,
	user_data::*,
};
