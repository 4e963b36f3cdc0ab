use crate::prelude::*;

/// The reports generated for admins
#[component]
pub fn ReportsPage() -> impl IntoView {
	view! {
		<Title text="Reports"/>
		<section class="fc-fs-fs full-width">
			<h1 class="txt-primary txt-xl">"Reports"</h1>
		</section>
	}
}
