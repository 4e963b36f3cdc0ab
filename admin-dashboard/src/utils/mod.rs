/// The errors raised while building a route table
mod error;
/// Navigation targets and their parsing
mod location;
/// The route table and the resolution of locations against it
mod route_table;
/// The typed list of the dashboard's routes
mod routes;

pub use self::{error::*, location::*, route_table::*, routes::*};

/// A trait to extend the [`String`] type with some useful methods that are not
/// available in the standard library.
pub trait StringExt {
	/// Wraps the [`String`] into an option depending on whether it's empty
	/// Returns [`None`] if string is empty otherwise returns the string wrapped
	/// in a [`Some()`]
	fn some_if_not_empty(self) -> Option<String>;
}

impl StringExt for String {
	fn some_if_not_empty(self) -> Option<String> {
		if self.is_empty() {
			None
		} else {
			Some(self)
		}
	}
}


/// A module containing constants that are used throughout the application.
pub mod constants {
	use super::AdminRoute;

	/// The version of the application
	pub const VERSION: &str = env!("CARGO_PKG_VERSION");
	/// The name of the application, used as the suffix of every page title
	pub const APP_NAME: &str = "Admin Dashboard";
	/// The route every unknown path is redirected to
	pub const FALLBACK_ROUTE: AdminRoute = AdminRoute::Dashboard;
}
