pub mod nav_link;

pub use nav_link::NavLink;

use leptos::prelude::*;

/// (href, title, exact)
const NAV_ITEMS: &[(&str, &str, bool)] = &[
    ("/docs", "Docs", false),
    ("/tutorial", "Tutorial", false),
    ("/blog", "Blog", false),
    ("/community", "Community", false),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <NavLink href="/" exact=true>
                <span class="navbar__brand">"Docs Home"</span>
            </NavLink>
            <ul class="navbar__items">
                {NAV_ITEMS
                    .iter()
                    .map(|(href, title, exact)| {
                        view! {
                            <li>
                                <NavLink href=*href exact=*exact>
                                    {*title}
                                </NavLink>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
