mod admin_dashboard;
mod reports;
mod settings;
mod users;

pub use self::{admin_dashboard::*, reports::*, settings::*, users::*};
