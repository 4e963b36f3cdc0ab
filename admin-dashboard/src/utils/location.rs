use std::fmt::Display;

use super::StringExt;

/// A navigation target, split into the parts the router cares about. Only the
/// path takes part in route matching; the query and fragment are carried along
/// unchanged, including across redirects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
	/// The path, always starting with `/`
	pub path: String,
	/// The query string, without the leading `?`
	pub query: Option<String>,
	/// The fragment, without the leading `#`
	pub fragment: Option<String>,
}

impl Location {
	/// Parses a location such as `/reports?year=2024#summary`. An empty path
	/// is treated as the root.
	pub fn parse(input: &str) -> Self {
		let (rest, fragment) = match input.split_once('#') {
			Some((rest, fragment)) => (rest, Some(fragment)),
			None => (input, None),
		};
		let (path, query) = match rest.split_once('?') {
			Some((path, query)) => (path, Some(query)),
			None => (rest, None),
		};

		Self::from_parts(path, query.unwrap_or_default(), fragment.unwrap_or_default())
	}

	/// Builds a location from the parts exposed by the browser. `search` and
	/// `hash` may or may not carry their leading `?` and `#`.
	pub fn from_parts(path: &str, search: &str, hash: &str) -> Self {
		let path = if path.is_empty() {
			"/".to_string()
		} else if path.starts_with('/') {
			path.to_string()
		} else {
			format!("/{path}")
		};

		Self {
			path,
			query: search
				.strip_prefix('?')
				.unwrap_or(search)
				.to_string()
				.some_if_not_empty(),
			fragment: hash
				.strip_prefix('#')
				.unwrap_or(hash)
				.to_string()
				.some_if_not_empty(),
		}
	}

	/// The same location with its path replaced
	pub fn with_path(&self, path: &str) -> Self {
		Self {
			path: path.to_string(),
			..self.clone()
		}
	}
}

impl Default for Location {
	fn default() -> Self {
		Self {
			path: "/".to_string(),
			query: None,
			fragment: None,
		}
	}
}

impl From<&str> for Location {
	fn from(value: &str) -> Self {
		Self::parse(value)
	}
}

impl From<String> for Location {
	fn from(value: String) -> Self {
		Self::parse(&value)
	}
}

impl Display for Location {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.path)?;
		if let Some(query) = &self.query {
			write!(f, "?{query}")?;
		}
		if let Some(fragment) = &self.fragment {
			write!(f, "#{fragment}")?;
		}
		Ok(())
	}
}
