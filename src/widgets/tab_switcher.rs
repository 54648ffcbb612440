//! The tab switcher widget.
//!
//! A click on a selector button only *requests* a selection. The request is
//! committed at the start of the next [`TabSwitcher::show`], before anything is
//! drawn, so one frame sees a single coherent state: new stack order, new
//! active tab and the outgoing notification. Several requests before a commit
//! collapse into the last one.

use std::hash::Hash;

use eframe::egui;
use egui::{pos2, vec2, Rect, Response, Sense, Ui};
use tracing::info;

use super::{content_stack_ui, selector_bar_ui};
use crate::config::TabsConfig;
use crate::controllers::SelectionController;
use crate::data::stack::TabStack;
use crate::data::tab::{Tab, TabContent};
use crate::error::Result;

pub struct TabSwitcher<C> {
    id: egui::Id,
    stack: TabStack<C>,
    config: TabsConfig,
    on_select: Option<Box<dyn FnMut(&str)>>,
}

impl<C: TabContent> TabSwitcher<C> {
    /// Create a switcher over `tabs`. `id_salt` namespaces its animation state
    /// when several switchers share a context.
    pub fn new(id_salt: impl Hash, tabs: Vec<Tab<C>>) -> Result<Self> {
        Ok(Self {
            id: egui::Id::new(("stacked_tabs", id_salt)),
            stack: TabStack::new(tabs)?,
            config: TabsConfig::default(),
            on_select: None,
        })
    }

    pub fn with_config(mut self, config: TabsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_controller(mut self, controller: SelectionController) -> Self {
        self.config.controller = Some(controller);
        self
    }

    /// Callback invoked with the active value after every committed selection.
    pub fn on_select(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    pub fn id(&self) -> egui::Id {
        self.id
    }

    pub fn stack(&self) -> &TabStack<C> {
        &self.stack
    }

    pub fn config(&self) -> &TabsConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut TabsConfig {
        &mut self.config
    }

    /// Queue a selection by configuration index; see the module docs.
    pub fn request_select(&mut self, original_index: usize) -> bool {
        self.stack.request_select(original_index)
    }

    /// Apply a queued selection and notify observers. Returns the new active
    /// value if a selection was committed.
    pub fn commit_pending(&mut self) -> Option<String> {
        let value = self.stack.commit_pending()?.to_owned();
        info!(value = %value, "tab selected");
        if let Some(ctrl) = &self.config.controller {
            ctrl.publish(&value);
        }
        if let Some(cb) = self.on_select.as_mut() {
            cb(&value);
        }
        Some(value)
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        self.commit_pending();
        if self.stack.is_empty() {
            return ui.allocate_response(egui::Vec2::ZERO, Sense::hover());
        }

        let id = self.id;
        let style = &self.config.style;
        let layout = selector_bar_ui::BarLayout::measure(ui, &self.stack, style);
        let top = ui.cursor().min;
        let width = ui.available_width();
        let bar_rect = Rect::from_min_size(top, vec2(width, layout.height(style)));
        let stack_rect = Rect::from_min_size(
            pos2(top.x, bar_rect.bottom() + style.content_gap),
            vec2(width, self.config.animation.content_height),
        );
        let response = ui.allocate_rect(bar_rect.union(stack_rect), Sense::hover());
        self.stack.set_hovering(ui.rect_contains_pointer(bar_rect));

        // Cards first: fanned cards reach into the bar's rect, and the bar must
        // paint over them and win their hit-tests.
        content_stack_ui::show(ui, id, stack_rect, &mut self.stack, &self.config);
        let clicked = selector_bar_ui::show(ui, id, bar_rect, layout, &self.stack, &self.config);
        if let Some(idx) = clicked {
            if self.stack.request_select(idx) {
                ui.ctx().request_repaint();
            }
        }
        response
    }
}

impl<C> std::fmt::Debug for TabSwitcher<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabSwitcher")
            .field("id", &self.id)
            .field("stack", &self.stack)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
