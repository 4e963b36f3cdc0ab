use crate::prelude::*;

/// The landing page of the dashboard. Every unknown path redirects here.
#[component]
pub fn AdminDashboardPage() -> impl IntoView {
	view! {
		<Title text="Dashboard"/>
		<section class="fc-fs-fs full-width">
			<h1 class="txt-primary txt-xl">"Admin Dashboard"</h1>
			<nav class="fr-fs-ct gap-md">
				<A href={AdminRoute::Users.path()}>"Users"</A>
				<A href={AdminRoute::Reports.path()}>"Reports"</A>
				<A href={AdminRoute::Settings.path()}>"Settings"</A>
			</nav>
		</section>
	}
}
