/// The cart synchronizer: server-authoritative cart state with serialized
/// mutations.
mod cart;
/// The catalog cache: category and restaurant listings.
mod catalog;
/// The session store: login lifecycle, profile and capabilities.
mod session;

pub use self::{cart::*, catalog::*, session::*};
