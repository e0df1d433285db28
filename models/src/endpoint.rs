use std::fmt::Debug;

use serde::{de::DeserializeOwned, Serialize};

/// A trait that defines an API endpoint. This carries everything a client
/// needs to call the route: the HTTP method, the path, whether the persisted
/// session token must be attached, and the request and response body types.
///
/// Endpoints are declared with [`declare_api_endpoint!`], which generates a
/// marker type implementing this trait along with the request and response
/// structs.
pub trait ApiEndpoint
where
	Self: Sized + Clone + Send + 'static,
	Self::RequestBody: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
	Self::ResponseBody: Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static,
{
	/// The HTTP method that should be used for this endpoint
	const METHOD: crate::Method;
	/// The path of this endpoint, relative to the API base URL
	const PATH: &'static str;
	/// Whether this endpoint requires a logged in session. If true, the
	/// client refuses to issue the call without a persisted token
	const REQUIRES_AUTH: bool;

	/// The request body that should be used for this endpoint. Endpoints
	/// without a body use `()`, which serializes to JSON null and is omitted
	/// from the request entirely.
	type RequestBody;
	/// The response body that should be used for this endpoint. This is the
	/// payload that arrives flattened inside the success envelope
	/// ([`crate::ApiSuccessResponseBody`]).
	type ResponseBody;
}

/// Declares an API endpoint: a marker type implementing [`ApiEndpoint`],
/// plus the request and response body structs with camelCase serde naming.
///
/// Two forms are accepted, with and without a request body:
///
/// ```ignore
/// declare_api_endpoint!(
///     /// Route to fetch the cart
///     GetCart,
///     GET "/cart",
///     requires_auth = true,
///     response = GetCartResponse {
///         /// The current cart of the logged in user
///         pub cart: Cart,
///     },
/// );
/// ```
#[macro_export]
macro_rules! declare_api_endpoint {
	(
		$(#[$docs:meta])*
		$name:ident,
		$method:ident $path:literal,
		requires_auth = $auth:literal,
		request = $req_name:ident {
			$(
				$(#[$req_docs:meta])*
				pub $req_field:ident: $req_ty:ty
			),* $(,)?
		},
		response = $res_name:ident {
			$(
				$(#[$res_docs:meta])*
				pub $res_field:ident: $res_ty:ty
			),* $(,)?
		} $(,)?
	) => {
		$(#[$docs])*
		#[derive(Debug, Clone, PartialEq, Eq)]
		pub struct $name;

		#[doc = concat!("The request body for the [`", stringify!($name), "`] endpoint")]
		#[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
		#[serde(rename_all = "camelCase")]
		pub struct $req_name {
			$(
				$(#[$req_docs])*
				pub $req_field: $req_ty,
			)*
		}

		#[doc = concat!("The response body for the [`", stringify!($name), "`] endpoint")]
		#[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
		#[serde(rename_all = "camelCase")]
		pub struct $res_name {
			$(
				$(#[$res_docs])*
				pub $res_field: $res_ty,
			)*
		}

		impl $crate::ApiEndpoint for $name {
			const METHOD: $crate::Method = $crate::Method::$method;
			const PATH: &'static str = $path;
			const REQUIRES_AUTH: bool = $auth;

			type RequestBody = $req_name;
			type ResponseBody = $res_name;
		}
	};
	(
		$(#[$docs:meta])*
		$name:ident,
		$method:ident $path:literal,
		requires_auth = $auth:literal,
		response = $res_name:ident {
			$(
				$(#[$res_docs:meta])*
				pub $res_field:ident: $res_ty:ty
			),* $(,)?
		} $(,)?
	) => {
		$(#[$docs])*
		#[derive(Debug, Clone, PartialEq, Eq)]
		pub struct $name;

		#[doc = concat!("The response body for the [`", stringify!($name), "`] endpoint")]
		#[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
		#[serde(rename_all = "camelCase")]
		pub struct $res_name {
			$(
				$(#[$res_docs])*
				pub $res_field: $res_ty,
			)*
		}

		impl $crate::ApiEndpoint for $name {
			const METHOD: $crate::Method = $crate::Method::$method;
			const PATH: &'static str = $path;
			const REQUIRES_AUTH: bool = $auth;

			type RequestBody = ();
			type ResponseBody = $res_name;
		}
	};
}
