#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::missing_docs_in_private_items)]

//! Admin dashboard console. Client-side routed, with no access control.

/// Prelude module. Used to re-export commonly used items.
pub mod prelude {
	pub use leptos::*;
	pub use leptos_meta::{Meta, Title};
	pub use leptos_router::A;
	pub use log::{debug, error, info, trace, warn};

	pub use crate::utils::*;
}

/// The application logic code. This contains the router and all the routing
/// logic
pub mod app;
/// The pages module. This contains all the pages used in the application.
/// Pages are the main views that are rendered when a route is matched.
pub mod pages;
/// The utils module. This contains the route table and everything else
/// needed to make the application work.
pub mod utils;

use leptos_meta::provide_meta_context;
use prelude::*;

/// Installs the logger and, in debug builds, the panic hook that forwards
/// panics to the browser console.
pub fn init_logging() {
	wasm_logger::init(wasm_logger::Config::default());

	if cfg!(debug_assertions) {
		console_error_panic_hook::set_once();
	}
}

/// The main render function. Called when the application starts to render
/// from the client side.
pub fn render() -> impl IntoView {
	use app::App;

	provide_meta_context();
	info!("Starting {} v{}", constants::APP_NAME, constants::VERSION);

	view! {
		<>
			<Meta charset="utf-8"/>
			<Meta name="viewport" content="width=device-width, initial-scale=1"/>
			<Meta name="theme-color" content="#000000"/>

			<Title formatter={|title: String| {
				if title.is_empty() {
					constants::APP_NAME.to_string()
				} else {
					format!("{title} | {}", constants::APP_NAME)
				}
			}}/>

			<App/>
		</>
	}
}
