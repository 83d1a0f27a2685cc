pub mod code_tabs;
pub mod nav;
pub mod preference;
pub mod reindent;
pub mod variant;

pub use code_tabs::{CodeTabs, PaneView, TabView};
pub use preference::{
    MemoryPreferenceStore, PreferenceError, PreferenceStore, UnavailablePreferenceStore,
    DEFAULT_LANGUAGE, LANGUAGE_SLOT,
};
pub use variant::VariantSpec;
