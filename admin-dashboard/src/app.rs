use leptos_router::{use_location, NavigateOptions, Redirect, Router};

use crate::{pages::*, prelude::*};

/// The main application component. Installs the navigation controller, bound
/// to the browser history, and resolves every location against the admin
/// route table.
#[component]
pub fn App() -> impl IntoView {
	// No guards: every route is reachable without logging in.
	view! {
		<Router>
			<main class="fc-fs-ct full-width full-height px-lg">
				<RouteOutlet/>
			</main>
		</Router>
	}
}

/// Renders the page of the current location, or replaces the location in the
/// history when it is not canonical: a loose match (`/Users/`) goes to its
/// declared path and anything unknown goes to the dashboard. The query and
/// fragment are kept.
#[component]
pub fn RouteOutlet() -> impl IntoView {
	let location = use_location();
	let table = RouteTable::admin();

	move || {
		let requested = Location::from_parts(
			&location.pathname.get(),
			&location.search.get(),
			&location.hash.get(),
		);

		match table.redirect_target(&requested) {
			Some(target) => {
				debug!("Redirecting `{}` to `{}`", requested, target);
				view! {
					<Redirect
						path={target.to_string()}
						options={NavigateOptions {
							replace: true,
							..Default::default()
						}}
					/>
				}
				.into_view()
			}
			None => match table.find_by_path(&requested.path) {
				Some(record) => page_view(record.component),
				None => ().into_view(),
			},
		}
	}
}

/// The page view bound to a route
fn page_view(route: AdminRoute) -> View {
	match route {
		AdminRoute::Dashboard => view! { <AdminDashboardPage/> }.into_view(),
		AdminRoute::Users => view! { <UsersPage/> }.into_view(),
		AdminRoute::Reports => view! { <ReportsPage/> }.into_view(),
		AdminRoute::Settings => view! { <SettingsPage/> }.into_view(),
	}
}
