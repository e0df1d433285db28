/// Endpoints for platform administration: user listings, role changes and
/// bans.
pub mod admin;
/// Endpoints for authentication and the user's own profile.
pub mod auth;
/// Endpoints for the server-authoritative cart.
pub mod cart;
/// Endpoints for the category and restaurant catalog.
pub mod catalog;
/// Endpoints for placing and tracking orders.
pub mod order;
