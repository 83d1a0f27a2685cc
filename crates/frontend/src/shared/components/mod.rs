pub mod code_tabs;

pub use code_tabs::CodeTabs;
