use crate::prelude::*;

/// The dashboard settings
#[component]
pub fn SettingsPage() -> impl IntoView {
	view! {
		<Title text="Settings"/>
		<section class="fc-fs-fs full-width">
			<h1 class="txt-primary txt-xl">"Settings"</h1>
		</section>
	}
}
