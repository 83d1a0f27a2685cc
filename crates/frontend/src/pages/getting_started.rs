use crate::shared::components::code_tabs::CodeTabs;
use contracts::shared::variant::{variants_from_json, VariantSpec};
use leptos::prelude::*;

const COMPONENT_SAMPLE: &str = include_str!("../../content/component.json");
const STATE_SAMPLE: &str = include_str!("../../content/state.json");

fn load_sample(name: &str, json: &str) -> Vec<VariantSpec> {
    match variants_from_json(json) {
        Ok(variants) => variants,
        Err(e) => {
            log::error!("Failed to parse sample {}: {}", name, e);
            Vec::new()
        }
    }
}

#[component]
pub fn GettingStartedPage() -> impl IntoView {
    let component_sample = load_sample("component", COMPONENT_SAMPLE);
    let state_sample = load_sample("state", STATE_SAMPLE);

    view! {
        <article class="doc-page">
            <h1>"Getting Started"</h1>
            <p>
                "Every sample on this site is available in several syntaxes. "
                "Pick one and it becomes the default for the rest of the docs."
            </p>

            <h2>"Your first component"</h2>
            <CodeTabs id="sample-component" variants=component_sample />

            <h2>"Adding state"</h2>
            <CodeTabs id="sample-state" variants=state_sample />
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_samples_parse() {
        for (name, json) in [("component", COMPONENT_SAMPLE), ("state", STATE_SAMPLE)] {
            let labels: Vec<String> = load_sample(name, json)
                .into_iter()
                .map(|v| v.label)
                .collect();
            assert_eq!(labels, vec!["ES5", "ES6", "ESNext"], "sample {}", name);
        }
    }
}
