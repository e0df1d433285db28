mod add_category;
mod list_categories;
mod list_restaurants;

pub use self::{add_category::*, list_categories::*, list_restaurants::*};
