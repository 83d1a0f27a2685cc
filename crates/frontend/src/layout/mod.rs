pub mod navbar;

use leptos::prelude::*;
use navbar::Navbar;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Navbar                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="site-layout">
            <Navbar />
            <main class="site-main">
                {center()}
            </main>
        </div>
    }
}
