//! Tab definition and the content trait.

use eframe::egui;

/// Anything that can draw itself into a tab's content card.
///
/// The switcher never inspects content; it only hands it a [`egui::Ui`] sized
/// to the card.
pub trait TabContent {
    fn ui(&mut self, ui: &mut egui::Ui);
}

impl TabContent for String {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.label(self.as_str());
    }
}

impl TabContent for &'static str {
    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.label(*self);
    }
}

impl TabContent for Box<dyn FnMut(&mut egui::Ui)> {
    fn ui(&mut self, ui: &mut egui::Ui) {
        (**self)(ui)
    }
}

/// One selectable section: a label, a stable identifier and its content.
pub struct Tab<C> {
    /// Text shown on the selector button.
    pub title: String,
    /// Stable identifier; unique within a tab set.
    pub value: String,
    pub content: C,
}

impl<C> Tab<C> {
    pub fn new(title: impl Into<String>, value: impl Into<String>, content: C) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            content,
        }
    }
}

impl<C> std::fmt::Debug for Tab<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab")
            .field("title", &self.title)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
