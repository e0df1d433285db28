mod list_orders;
mod place_order;

pub use self::{list_orders::*, place_order::*};
