mod content_stack_ui;
mod selector_bar_ui;
pub mod tab_switcher;

pub use tab_switcher::TabSwitcher;
