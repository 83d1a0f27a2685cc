//! Tabbed code sample, one tab per dialect.
//!
//! The selected dialect is shared through the preference store: picking "ES5"
//! here makes "ES5" the starting tab of every widget mounted afterwards.

use crate::shared::storage::resolve_store;
use contracts::shared::code_tabs::CodeTabs as CodeTabsState;
use contracts::shared::preference::PreferenceStore;
use contracts::shared::variant::VariantSpec;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn CodeTabs(
    /// Element id prefix, unique on the page
    #[prop(into)]
    id: String,
    /// Variants in tab order
    variants: Vec<VariantSpec>,
    /// Preference store override (tests, embedding)
    #[prop(optional)]
    store: Option<Arc<dyn PreferenceStore>>,
) -> impl IntoView {
    let store = resolve_store(store);
    let state = RwSignal::new(CodeTabsState::mount(variants, store.as_ref()));
    let store = StoredValue::new(store);

    let select = move |label: String| {
        let mut persisted = Ok(());
        store.with_value(|store| {
            state.update(|tabs| persisted = tabs.select(&label, store.as_ref()));
        });
        match persisted {
            Ok(()) => log::debug!("code tabs: selected {}", label),
            Err(e) => log::warn!("code tabs: selected {} but could not persist it: {}", label, e),
        }
    };

    let (tabs, panes) = state.with_untracked(|s| (s.tabs(), s.panes()));

    let tab_buttons = tabs
        .into_iter()
        .map(|tab| {
            let label = tab.label.clone();
            let is_active = Memo::new({
                let label = label.clone();
                move |_| state.with(|s| s.is_active(&label))
            });
            let tab_id = format!("{}-tab-{}", id, tab.key);
            let panel_id = format!("{}-panel-{}", id, tab.key);

            view! {
                <button
                    type="button"
                    role="tab"
                    id=tab_id
                    aria-controls=panel_id
                    aria-selected=move || is_active.get().to_string()
                    tabindex=move || if is_active.get() { "0" } else { "-1" }
                    class=move || {
                        if is_active.get() {
                            "code-tabs__tab code-tabs__tab--active"
                        } else {
                            "code-tabs__tab"
                        }
                    }
                    on:click=move |_| select(label.clone())
                >
                    {tab.label}
                </button>
            }
        })
        .collect_view();

    let pane_blocks = panes
        .into_iter()
        .map(|pane| {
            let is_visible = Memo::new({
                let label = pane.label.clone();
                move |_| state.with(|s| s.is_active(&label))
            });
            let tab_id = format!("{}-tab-{}", id, pane.key);
            let panel_id = format!("{}-panel-{}", id, pane.key);
            let code_class = format!("language-{}", pane.content_type);

            view! {
                <div
                    role="tabpanel"
                    id=panel_id
                    aria-labelledby=tab_id
                    hidden=move || !is_visible.get()
                    class=move || {
                        if is_visible.get() {
                            "code-tabs__pane code-tabs__pane--active"
                        } else {
                            "code-tabs__pane"
                        }
                    }
                >
                    <pre>
                        <code class=code_class>{pane.text}</code>
                    </pre>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="code-tabs" id=id>
            <div class="code-tabs__strip" role="tablist">
                {tab_buttons}
            </div>
            {pane_blocks}
        </div>
    }
}
