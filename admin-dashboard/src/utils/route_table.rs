use std::{collections::HashSet, sync::OnceLock};

use strum::IntoEnumIterator;

use super::{constants, AdminRoute, Location, RouteTableError};

/// A single path-to-view binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord<C> {
	/// The path the record is mounted at. Always starts with `/`
	pub path: &'static str,
	/// The unique name of the record
	pub name: &'static str,
	/// The view rendered when the record matches
	pub component: C,
}

/// The outcome of resolving a location against a [`RouteTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a, C> {
	/// A record matched. The location has the record's canonical path and the
	/// requested query and fragment.
	Matched {
		/// The record that matched
		record: &'a RouteRecord<C>,
		/// The location to show in the URL bar
		location: Location,
	},
	/// Nothing matched and the catch-all redirect applies
	Redirected {
		/// The location that was requested
		from: Location,
		/// The location to navigate to instead
		to: Location,
	},
}

impl<'a, C> Resolution<'a, C> {
	/// The location the browser ends up showing for this resolution
	pub fn location(&self) -> &Location {
		match self {
			Self::Matched { location, .. } => location,
			Self::Redirected { to, .. } => to,
		}
	}

	/// The matched record, if any
	pub fn record(&self) -> Option<&'a RouteRecord<C>> {
		match self {
			Self::Matched { record, .. } => Some(*record),
			Self::Redirected { .. } => None,
		}
	}

	/// Whether the resolution is a redirect
	pub fn is_redirect(&self) -> bool {
		matches!(self, Self::Redirected { .. })
	}
}

/// An ordered, immutable list of routes evaluated first-match-wins, followed
/// by a catch-all that redirects every other path to a declared route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<C> {
	/// The declared routes, in evaluation order
	records: Vec<RouteRecord<C>>,
	/// Where the catch-all redirects to
	fallback: &'static str,
}

impl<C> RouteTable<C> {
	/// Builds a route table, checking that every path is a distinct literal
	/// path starting with `/`, that every name is distinct, and that the
	/// catch-all redirects to one of the declared paths.
	pub fn new(
		records: Vec<RouteRecord<C>>,
		fallback: &'static str,
	) -> Result<Self, RouteTableError> {
		if records.is_empty() {
			return Err(RouteTableError::Empty);
		}

		let mut paths = HashSet::new();
		let mut names = HashSet::new();
		for record in &records {
			validate_path(record.path)?;
			if !paths.insert(normalize(record.path).to_ascii_lowercase()) {
				return Err(RouteTableError::DuplicatePath(record.path.to_string()));
			}
			if !names.insert(record.name) {
				return Err(RouteTableError::DuplicateName(record.name.to_string()));
			}
		}

		if !records
			.iter()
			.any(|record| path_matches(record.path, fallback))
		{
			return Err(RouteTableError::UnknownRedirectTarget(fallback.to_string()));
		}

		Ok(Self { records, fallback })
	}

	/// The declared routes, in evaluation order
	pub fn records(&self) -> &[RouteRecord<C>] {
		&self.records
	}

	/// The path every unmatched location is redirected to
	pub fn fallback(&self) -> &'static str {
		self.fallback
	}

	/// Finds a record by its name. Names are matched exactly.
	pub fn find_by_name(&self, name: &str) -> Option<&RouteRecord<C>> {
		self.records.iter().find(|record| record.name == name)
	}

	/// Finds the first record matching the path of a location. The query and
	/// fragment are ignored.
	pub fn find_by_path(&self, location: &str) -> Option<&RouteRecord<C>> {
		let location = Location::parse(location);
		self.find_record(&location.path)
	}

	/// Resolves a location to the record it renders, or to the catch-all
	/// redirect if no record matches.
	pub fn resolve(&self, location: impl Into<Location>) -> Resolution<'_, C> {
		let location = location.into();
		match self.find_record(&location.path) {
			Some(record) => {
				log::trace!("`{}` resolved to route `{}`", location, record.name);
				Resolution::Matched {
					location: location.with_path(record.path),
					record,
				}
			}
			None => {
				let to = location.with_path(self.fallback);
				log::debug!("No route matches `{}`, redirecting to `{}`", location, to);
				Resolution::Redirected { from: location, to }
			}
		}
	}

	/// Resolves a location and follows the catch-all redirect, returning the
	/// record that finally renders.
	pub fn navigate(&self, location: impl Into<Location>) -> Resolution<'_, C> {
		match self.resolve(location) {
			// The fallback always names a declared path, so a single hop ends in
			// a match.
			Resolution::Redirected { to, .. } => self.resolve(to),
			matched => matched,
		}
	}

	/// The location the browser should be sent to, replacing the requested
	/// one, before a view renders. [`None`] when the requested location is
	/// already canonical and its record renders in place. Otherwise this is
	/// the canonical path of a loosely matching record (`/Users/` becomes
	/// `/users`) or the fallback, with the query and fragment kept either way.
	pub fn redirect_target(&self, requested: &Location) -> Option<Location> {
		let resolution = self.navigate(requested.clone());
		if resolution.location() == requested {
			None
		} else {
			Some(resolution.location().clone())
		}
	}

	/// First-match-wins lookup over the declared records
	fn find_record(&self, path: &str) -> Option<&RouteRecord<C>> {
		self.records
			.iter()
			.find(|record| path_matches(record.path, path))
	}
}

impl RouteTable<AdminRoute> {
	/// The admin dashboard's route table. Built once, on first use.
	pub fn admin() -> &'static Self {
		static ADMIN_ROUTES: OnceLock<RouteTable<AdminRoute>> = OnceLock::new();

		ADMIN_ROUTES.get_or_init(|| Self {
			records: AdminRoute::iter().map(RouteRecord::from).collect(),
			fallback: constants::FALLBACK_ROUTE.path(),
		})
	}
}

/// Rejects paths that would not match literally
fn validate_path(path: &str) -> Result<(), RouteTableError> {
	let reason = if !path.starts_with('/') {
		Some("must start with `/`")
	} else if path
		.split('/')
		.any(|segment| segment.starts_with(':') || segment.starts_with('*'))
	{
		Some("parameters and wildcards are reserved for the catch-all")
	} else if path.contains(['?', '#']) {
		Some("must not contain a query or fragment")
	} else {
		None
	};

	match reason {
		Some(reason) => Err(RouteTableError::InvalidPath {
			path: path.to_string(),
			reason,
		}),
		None => Ok(()),
	}
}

/// Drops a single trailing slash, except from the root
fn normalize(path: &str) -> &str {
	if path.len() > 1 {
		path.strip_suffix('/').unwrap_or(path)
	} else {
		path
	}
}

/// Paths match ignoring ASCII case and an optional trailing slash
fn path_matches(pattern: &str, path: &str) -> bool {
	normalize(pattern).eq_ignore_ascii_case(normalize(path))
}

#[cfg(test)]
mod test {
	use strum::IntoEnumIterator;

	use super::{AdminRoute, Resolution, RouteRecord, RouteTable};
	use crate::utils::{Location, RouteTableError};

	fn record(path: &'static str, name: &'static str) -> RouteRecord<&'static str> {
		RouteRecord {
			path,
			name,
			component: name,
		}
	}

	#[test]
	fn admin_table_passes_validation() {
		let records = AdminRoute::iter()
			.map(RouteRecord::from)
			.collect::<Vec<RouteRecord<AdminRoute>>>();
		let table = RouteTable::new(records, "/admin-dashboard").unwrap();
		assert_eq!(&table, RouteTable::admin());
	}

	#[test]
	fn admin_table_order() {
		let paths = RouteTable::admin()
			.records()
			.iter()
			.map(|record| record.path)
			.collect::<Vec<_>>();
		assert_eq!(
			paths,
			["/admin-dashboard", "/users", "/reports", "/settings"]
		);
		assert_eq!(RouteTable::admin().fallback(), "/admin-dashboard");
	}

	#[test]
	fn declared_paths_match_without_redirect() {
		let table = RouteTable::admin();
		for route in AdminRoute::iter() {
			let resolution = table.resolve(route.path());
			assert!(!resolution.is_redirect());
			assert_eq!(resolution.record().map(|record| record.component), Some(route));
			assert_eq!(resolution.location().path, route.path());
		}
	}

	#[test]
	fn unknown_paths_redirect_to_dashboard() {
		let table = RouteTable::admin();
		for path in ["/", "/unknown/nested/path", "/user", "/users/1", "/admin", "//"] {
			let resolution = table.resolve(path);
			assert!(resolution.is_redirect(), "{path} should redirect");
			assert_eq!(resolution.location().path, "/admin-dashboard");
			assert_eq!(resolution.record(), None);
		}
	}

	#[test]
	fn matching_ignores_case_and_trailing_slash() {
		let table = RouteTable::admin();
		let resolution = table.resolve("/Users/");
		assert_eq!(
			resolution.record().map(|record| record.component),
			Some(AdminRoute::Users)
		);
		assert_eq!(resolution.location().path, "/users");
		assert!(table.resolve("/users//").is_redirect());
	}

	#[test]
	fn redirect_keeps_query_and_fragment() {
		let resolution = RouteTable::admin().resolve("/nope?tab=2#top");
		match resolution {
			Resolution::Redirected { from, to } => {
				assert_eq!(from.to_string(), "/nope?tab=2#top");
				assert_eq!(to.to_string(), "/admin-dashboard?tab=2#top");
			}
			Resolution::Matched { .. } => panic!("expected a redirect"),
		}
	}

	#[test]
	fn navigate_follows_the_redirect() {
		let table = RouteTable::admin();
		let resolution = table.navigate("/missing");
		assert_eq!(
			resolution.record().map(|record| record.component),
			Some(AdminRoute::Dashboard)
		);
		assert_eq!(resolution.location().to_string(), "/admin-dashboard");

		let again = table.navigate(resolution.location().clone());
		assert_eq!(again, resolution);
	}

	#[test]
	fn loose_match_is_replaced_by_its_canonical_path() {
		let target = RouteTable::admin().redirect_target(&Location::parse("/Users/?a=1"));
		assert_eq!(target.map(|location| location.to_string()).as_deref(), Some("/users?a=1"));
	}

	#[test]
	fn unknown_location_is_replaced_by_the_fallback() {
		let target = RouteTable::admin().redirect_target(&Location::parse("/nope#x"));
		assert_eq!(
			target.map(|location| location.to_string()).as_deref(),
			Some("/admin-dashboard#x")
		);

		let target = RouteTable::admin().redirect_target(&Location::parse("/"));
		assert_eq!(
			target.map(|location| location.to_string()).as_deref(),
			Some("/admin-dashboard")
		);
	}

	#[test]
	fn canonical_location_renders_in_place() {
		let table = RouteTable::admin();
		for route in AdminRoute::iter() {
			assert_eq!(table.redirect_target(&Location::parse(route.path())), None);
		}
		assert_eq!(
			table.redirect_target(&Location::parse("/reports?year=2024#summary")),
			None
		);
	}

	#[test]
	fn redirect_target_settles_after_one_replace() {
		let table = RouteTable::admin();
		for requested in ["/Settings", "/missing/page?q=1", "/admin-dashboard/"] {
			let target = table
				.redirect_target(&Location::parse(requested))
				.unwrap();
			assert_eq!(table.redirect_target(&target), None, "{requested}");
		}
	}

	#[test]
	fn lookup_by_path_and_name() {
		let table = RouteTable::new(vec![record("/a", "A"), record("/b", "B")], "/a").unwrap();
		assert_eq!(table.find_by_path("/b?x=1").map(|record| record.name), Some("B"));
		assert_eq!(table.find_by_name("A").map(|record| record.path), Some("/a"));
		assert_eq!(table.find_by_name("a"), None);
	}

	#[test]
	fn rejects_empty_tables() {
		assert_eq!(
			RouteTable::<&str>::new(vec![], "/").unwrap_err(),
			RouteTableError::Empty
		);
	}

	#[test]
	fn rejects_invalid_paths() {
		for path in ["users", "/users/:id", "/*any", "/a?b"] {
			let error = RouteTable::new(vec![record(path, "A")], "/a").unwrap_err();
			assert!(
				matches!(error, RouteTableError::InvalidPath { .. }),
				"{path} gave {error:?}"
			);
		}
	}

	#[test]
	fn rejects_duplicates() {
		let error =
			RouteTable::new(vec![record("/a", "A"), record("/A/", "B")], "/a").unwrap_err();
		assert_eq!(error, RouteTableError::DuplicatePath("/A/".to_string()));

		let error =
			RouteTable::new(vec![record("/a", "A"), record("/b", "A")], "/a").unwrap_err();
		assert_eq!(error, RouteTableError::DuplicateName("A".to_string()));
	}

	#[test]
	fn rejects_a_fallback_that_would_loop() {
		let error = RouteTable::new(vec![record("/a", "A")], "/home").unwrap_err();
		assert_eq!(
			error,
			RouteTableError::UnknownRedirectTarget("/home".to_string())
		);
		assert_eq!(
			error.to_string(),
			"fallback redirect target `/home` is not a declared route"
		);
	}
}
