mod current_user;
mod login;
mod register;
mod update_profile;

pub use self::{current_user::*, login::*, register::*, update_profile::*};
