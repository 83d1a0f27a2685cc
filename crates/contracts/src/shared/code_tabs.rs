//! Selection state for a code sample shown in several dialects.
//!
//! A [`CodeTabs`] value only exists once mounted: [`CodeTabs::mount`] reads the
//! stored preference (or falls back to [`DEFAULT_LANGUAGE`]) and every later
//! change goes through [`CodeTabs::select`], which writes the preference back.
//! Keys are the variant's position in this instance's own list.

use super::preference::{PreferenceError, PreferenceStore, DEFAULT_LANGUAGE, LANGUAGE_SLOT};
use super::reindent::reindent;
use super::variant::VariantSpec;

/// One entry of the tab strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub key: usize,
    pub label: String,
    pub active: bool,
}

/// One content pane. Every variant always has a pane; `visible` only toggles
/// presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneView {
    pub key: usize,
    pub label: String,
    pub content_type: String,
    pub text: String,
    pub visible: bool,
}

/// Render a single pane for `variant`.
pub fn render_pane(key: usize, variant: &VariantSpec, visible: bool) -> PaneView {
    PaneView {
        key,
        label: variant.label.clone(),
        content_type: variant.content_type.clone(),
        text: reindent(&variant.raw_text),
        visible,
    }
}

/// Read the stored dialect. An unavailable store, a missing slot and an empty
/// value all fall back to the default.
pub fn initial_selection(store: &dyn PreferenceStore) -> String {
    store
        .get(LANGUAGE_SLOT)
        .ok()
        .flatten()
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTabs {
    variants: Vec<VariantSpec>,
    selected: String,
}

impl CodeTabs {
    pub fn mount(variants: Vec<VariantSpec>, store: &dyn PreferenceStore) -> Self {
        Self {
            variants,
            selected: initial_selection(store),
        }
    }

    pub fn variants(&self) -> &[VariantSpec] {
        &self.variants
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_active(&self, label: &str) -> bool {
        self.selected == label
    }

    /// Position of the selected variant. With duplicate labels the last one wins.
    pub fn active_index(&self) -> Option<usize> {
        self.variants
            .iter()
            .rposition(|variant| variant.label == self.selected)
    }

    /// Select `label` and persist it.
    ///
    /// The label is not validated: an unknown label leaves every tab inactive
    /// and every pane hidden. The in-memory selection changes even when the
    /// write fails; the error is handed back for the caller to report.
    pub fn select(
        &mut self,
        label: &str,
        store: &dyn PreferenceStore,
    ) -> Result<(), PreferenceError> {
        self.selected = label.to_string();
        store.set(LANGUAGE_SLOT, label)
    }

    pub fn tabs(&self) -> Vec<TabView> {
        self.variants
            .iter()
            .enumerate()
            .map(|(key, variant)| TabView {
                key,
                label: variant.label.clone(),
                active: self.is_active(&variant.label),
            })
            .collect()
    }

    pub fn panes(&self) -> Vec<PaneView> {
        self.variants
            .iter()
            .enumerate()
            .map(|(key, variant)| render_pane(key, variant, self.is_active(&variant.label)))
            .collect()
    }
}
