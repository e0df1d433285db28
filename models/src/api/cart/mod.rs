mod add_item;
mod clear_cart;
mod decrement_item;
mod get_cart;
mod increment_item;

pub use self::{add_item::*, clear_cart::*, decrement_item::*, get_cart::*, increment_item::*};
