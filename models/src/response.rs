use serde::{Deserialize, Serialize};

use crate::{
	utils::{False, True},
	ErrorType,
};

/// This struct represents the JSON body of a successful response from the
/// API. Every success body carries `success: true` along with the payload of
/// the endpoint, flattened to the top level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiSuccessResponseBody<T> {
	/// Whether the request was successful or not. This is always true.
	pub success: True,
	/// The JSON body of the response. This is flattened so that the fields
	/// of the body are at the top level.
	#[serde(flatten)]
	pub response: T,
}

/// This struct represents the JSON body of an error response from the API.
/// Every error body carries `success: false`, a structured error code and a
/// user-friendly message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponseBody {
	/// Whether the request was successful or not. This is always false.
	pub success: False,
	/// The error type of the response.
	pub error: ErrorType,
	/// A user-friendly message describing the error.
	pub message: String,
}

impl ApiErrorResponseBody {
	/// Creates a new [`ApiErrorResponseBody`] with the given [`ErrorType`],
	/// using its default message.
	pub fn error(error: ErrorType) -> Self {
		let message = error.message().into();
		Self {
			success: False,
			error,
			message,
		}
	}

	/// Creates a new [`ApiErrorResponseBody`] with the given [`ErrorType`]
	/// and the given message.
	pub fn error_with_message(error: ErrorType, message: impl Into<String>) -> Self {
		Self {
			success: False,
			error,
			message: message.into(),
		}
	}
}

/// This struct represents the JSON body of a response from the API. It can
/// be either a success or an error response. This is used to parse the
/// response from the API and determine whether it was successful or not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApiResponseBody<T> {
	/// Success response, with the given body.
	Success(ApiSuccessResponseBody<T>),
	/// Error response
	Error(ApiErrorResponseBody),
}
