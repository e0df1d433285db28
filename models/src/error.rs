use std::{
	error::Error as StdError,
	fmt::{Display, Formatter},
	mem,
};

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// A list of all the possible errors that can be returned by the API
#[derive(Debug)]
pub enum ErrorType {
	/// The email / password combination provided is invalid
	InvalidCredentials,
	/// The user was not found
	UserNotFound,
	/// The email provided is already in use by another account
	EmailTaken,
	/// The phone number provided is already in use by another account
	PhoneTaken,
	/// The parameters sent with the request is invalid. This would ideally
	/// not happen unless there is a bug in the client
	WrongParameters,
	/// The authentication token provided is not authorized to perform the
	/// requested action
	Unauthorized,
	/// The session token provided is invalid or has expired
	TokenInvalid,
	/// The account of the user making the request has been banned. Clients
	/// must treat this as a forced end of session
	UserBanned,
	/// The cart already contains items from a different restaurant. The cart
	/// has to be cleared before items from another restaurant can be added
	RestaurantConflict,
	/// A quantity mutation was requested for an item that is not in the cart
	ItemNotInCart,
	/// An order was placed with an empty cart
	EmptyCart,
	/// The resource that the user is trying to access does not exist.
	ResourceDoesNotExist,
	/// An internal server error occurred. This should not happen unless
	/// there is a bug in the server
	InternalServerError(anyhow::Error),
	/// An error code this version of the contract does not recognize. Kept
	/// as-is so that newer backend codes never fail to parse
	Unknown(String),
}

impl ErrorType {
	/// Returns the status code that should be used for this error. Note that
	/// this is only the default status code and specific endpoints can
	/// override this if needed
	pub fn default_status_code(&self) -> StatusCode {
		match self {
			Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
			Self::UserNotFound => StatusCode::BAD_REQUEST,
			Self::EmailTaken => StatusCode::CONFLICT,
			Self::PhoneTaken => StatusCode::CONFLICT,
			Self::WrongParameters => StatusCode::BAD_REQUEST,
			Self::Unauthorized => StatusCode::UNAUTHORIZED,
			Self::TokenInvalid => StatusCode::UNAUTHORIZED,
			Self::UserBanned => StatusCode::FORBIDDEN,
			Self::RestaurantConflict => StatusCode::CONFLICT,
			Self::ItemNotInCart => StatusCode::BAD_REQUEST,
			Self::EmptyCart => StatusCode::BAD_REQUEST,
			Self::ResourceDoesNotExist => StatusCode::NOT_FOUND,
			Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
			Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Returns the message that should be used for this error. This is the
	/// message that is user-friendly and can be shown to the user
	pub fn message(&self) -> impl Into<String> {
		match self {
			Self::InvalidCredentials => "Invalid email or password",
			Self::UserNotFound => "No user exists with those credentials",
			Self::EmailTaken => "An account already exists with that email",
			Self::PhoneTaken => "An account already exists with that phone number",
			Self::WrongParameters => "The parameters sent with that request is invalid",
			Self::Unauthorized => "You are not authorized to perform that action",
			Self::TokenInvalid => "Your session has expired. Please login again",
			Self::UserBanned => "Your account has been banned",
			Self::RestaurantConflict => {
				"Your cart has items from another restaurant. Clear it to order from this one"
			}
			Self::ItemNotInCart => "That item is not in your cart",
			Self::EmptyCart => "Your cart is empty",
			Self::ResourceDoesNotExist => "The resource you are trying to access does not exist",
			Self::InternalServerError(_) => "An internal server error has occured",
			Self::Unknown(_) => "Something went wrong. Please try again",
		}
	}

	/// Creates an [`ErrorType::InternalServerError`] with the given message
	pub fn server_error(message: impl Display) -> Self {
		Self::InternalServerError(anyhow::anyhow!(message.to_string()))
	}
}

impl PartialEq for ErrorType {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::InternalServerError(_), Self::InternalServerError(_)) => true,
			(Self::Unknown(code), Self::Unknown(other_code)) => code == other_code,
			_ => mem::discriminant(self) == mem::discriminant(other),
		}
	}
}

impl Eq for ErrorType {}

impl<Error> From<Error> for ErrorType
where
	Error: StdError + Send + Sync + 'static,
{
	fn from(error: Error) -> Self {
		Self::InternalServerError(error.into())
	}
}

impl Clone for ErrorType {
	fn clone(&self) -> Self {
		match self {
			Self::InvalidCredentials => Self::InvalidCredentials,
			Self::UserNotFound => Self::UserNotFound,
			Self::EmailTaken => Self::EmailTaken,
			Self::PhoneTaken => Self::PhoneTaken,
			Self::WrongParameters => Self::WrongParameters,
			Self::Unauthorized => Self::Unauthorized,
			Self::TokenInvalid => Self::TokenInvalid,
			Self::UserBanned => Self::UserBanned,
			Self::RestaurantConflict => Self::RestaurantConflict,
			Self::ItemNotInCart => Self::ItemNotInCart,
			Self::EmptyCart => Self::EmptyCart,
			Self::ResourceDoesNotExist => Self::ResourceDoesNotExist,
			Self::InternalServerError(arg0) => {
				Self::InternalServerError(anyhow::anyhow!(arg0.to_string()))
			}
			Self::Unknown(code) => Self::Unknown(code.clone()),
		}
	}
}

impl Display for ErrorType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.message().into())
	}
}

impl Serialize for ErrorType {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		match self {
			Self::InvalidCredentials => serializer.serialize_str("invalidCredentials"),
			Self::UserNotFound => serializer.serialize_str("userNotFound"),
			Self::EmailTaken => serializer.serialize_str("emailTaken"),
			Self::PhoneTaken => serializer.serialize_str("phoneTaken"),
			Self::WrongParameters => serializer.serialize_str("wrongParameters"),
			Self::Unauthorized => serializer.serialize_str("unauthorized"),
			Self::TokenInvalid => serializer.serialize_str("tokenInvalid"),
			Self::UserBanned => serializer.serialize_str("userBanned"),
			Self::RestaurantConflict => serializer.serialize_str("restaurantConflict"),
			Self::ItemNotInCart => serializer.serialize_str("itemNotInCart"),
			Self::EmptyCart => serializer.serialize_str("emptyCart"),
			Self::ResourceDoesNotExist => serializer.serialize_str("resourceDoesNotExist"),
			Self::InternalServerError(_) => serializer.serialize_str("internalServerError"),
			Self::Unknown(code) => serializer.serialize_str(code),
		}
	}
}

impl<'de> Deserialize<'de> for ErrorType {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let string = String::deserialize(deserializer)?;
		Ok(match string.as_str() {
			"invalidCredentials" => Self::InvalidCredentials,
			"userNotFound" => Self::UserNotFound,
			"emailTaken" => Self::EmailTaken,
			"phoneTaken" => Self::PhoneTaken,
			"wrongParameters" => Self::WrongParameters,
			"unauthorized" => Self::Unauthorized,
			"tokenInvalid" => Self::TokenInvalid,
			// The legacy backend spells this one in snake_case
			"userBanned" | "user_banned" => Self::UserBanned,
			"restaurantConflict" => Self::RestaurantConflict,
			"itemNotInCart" => Self::ItemNotInCart,
			"emptyCart" => Self::EmptyCart,
			"resourceDoesNotExist" => Self::ResourceDoesNotExist,
			"internalServerError" => {
				Self::InternalServerError(anyhow::anyhow!("Internal Server Error"))
			}
			unknown => Self::Unknown(unknown.to_string()),
		})
	}
}
