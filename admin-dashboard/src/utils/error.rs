use thiserror::Error;

/// The reasons a route table can be rejected when it is built
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
	/// No routes were given
	#[error("a route table needs at least one route")]
	Empty,
	/// A path that cannot be matched literally
	#[error("invalid route path `{path}`: {reason}")]
	InvalidPath {
		/// The offending path
		path: String,
		/// Why the path was rejected
		reason: &'static str,
	},
	/// Two routes match the same path
	#[error("route path `{0}` is declared more than once")]
	DuplicatePath(String),
	/// Two routes share a name
	#[error("route name `{0}` is declared more than once")]
	DuplicateName(String),
	/// The catch-all redirects to a path no route matches, which would loop
	#[error("fallback redirect target `{0}` is not a declared route")]
	UnknownRedirectTarget(String),
}
