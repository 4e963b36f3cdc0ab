use crate::prelude::*;

/// The list of users of the dashboard
#[component]
pub fn UsersPage() -> impl IntoView {
	view! {
		<Title text="Users"/>
		<section class="fc-fs-fs full-width">
			<h1 class="txt-primary txt-xl">"Users"</h1>
		</section>
	}
}
