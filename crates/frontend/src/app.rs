use crate::layout::Shell;
use crate::pages::getting_started::GettingStartedPage;
use crate::shared::storage::SharedPreferences;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One preference store for every widget on the page.
    provide_context(SharedPreferences::local());

    view! {
        <Shell center=|| view! { <GettingStartedPage /> }.into_any() />
    }
}
