mod list_users;
mod set_user_ban;
mod update_user_role;

pub use self::{list_users::*, set_user_ban::*, update_user_role::*};
