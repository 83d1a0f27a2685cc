use contracts::shared::nav::is_route_active;
use leptos::prelude::*;
use web_sys::window;

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Navigation link highlighted while the browser is on its page (or below it,
/// unless `exact`).
#[component]
pub fn NavLink(
    #[prop(into)] href: String,
    /// Only highlight on the exact path, not on nested pages
    #[prop(optional)]
    exact: bool,
    children: Children,
) -> impl IntoView {
    let active = is_route_active(&current_path(), &href, exact);

    view! {
        <a
            href=href
            class=if active { "nav-link nav-link--active" } else { "nav-link" }
            aria-current=active.then_some("page")
        >
            {children()}
        </a>
    }
}
