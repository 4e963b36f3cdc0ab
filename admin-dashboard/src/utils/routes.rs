use std::fmt::Display;

use strum::{EnumIter, IntoEnumIterator};

use super::{RouteRecord, RouteTable};

/// The list of all the pages an admin can navigate to. Each variant is bound to
/// exactly one path and one page view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum AdminRoute {
	/// The Admin Dashboard, the landing page. Unknown paths end up here.
	#[default]
	Dashboard,
	/// The Users Page
	Users,
	/// The Reports Page
	Reports,
	/// The Settings Page
	Settings,
}

impl AdminRoute {
	/// The canonical path of the route, as shown in the URL bar
	pub const fn path(self) -> &'static str {
		match self {
			Self::Dashboard => "/admin-dashboard",
			Self::Users => "/users",
			Self::Reports => "/reports",
			Self::Settings => "/settings",
		}
	}

	/// The unique name of the route
	pub const fn name(self) -> &'static str {
		match self {
			Self::Dashboard => "AdminDashboard",
			Self::Users => "Users",
			Self::Reports => "Reports",
			Self::Settings => "Settings",
		}
	}

	/// Finds the route a path points to, using the same matching rules as the
	/// navigation controller. Returns [`None`] if the path would be redirected.
	pub fn from_path(path: &str) -> Option<Self> {
		RouteTable::admin()
			.find_by_path(path)
			.map(|record| record.component)
	}

	/// Finds the route with the given name. Names are matched exactly.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::iter().find(|route| route.name() == name)
	}
}

impl From<AdminRoute> for RouteRecord<AdminRoute> {
	fn from(route: AdminRoute) -> Self {
		RouteRecord {
			path: route.path(),
			name: route.name(),
			component: route,
		}
	}
}

impl Display for AdminRoute {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.path())
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashSet;

	use strum::IntoEnumIterator;

	use super::AdminRoute;

	#[test]
	fn route_names_are_distinct() {
		let names = AdminRoute::iter()
			.map(AdminRoute::name)
			.collect::<HashSet<_>>();
		assert_eq!(names.len(), AdminRoute::iter().count());
	}

	#[test]
	fn route_paths_are_rooted_and_distinct() {
		let paths = AdminRoute::iter()
			.map(AdminRoute::path)
			.collect::<HashSet<_>>();
		assert_eq!(paths.len(), AdminRoute::iter().count());
		assert!(paths.iter().all(|path| path.starts_with('/')));
	}

	#[test]
	fn display_is_the_path() {
		for route in AdminRoute::iter() {
			assert_eq!(route.to_string(), route.path());
		}
	}

	#[test]
	fn lookup_by_path_and_name() {
		for route in AdminRoute::iter() {
			assert_eq!(AdminRoute::from_path(route.path()), Some(route));
			assert_eq!(AdminRoute::from_name(route.name()), Some(route));
		}
		assert_eq!(AdminRoute::from_path("/REPORTS/"), Some(AdminRoute::Reports));
		assert_eq!(AdminRoute::from_path("/"), None);
		assert_eq!(AdminRoute::from_name("users"), None);
	}

	#[test]
	fn dashboard_is_the_default() {
		assert_eq!(AdminRoute::default(), AdminRoute::Dashboard);
		assert_eq!(AdminRoute::default().path(), "/admin-dashboard");
	}
}
