//! Selector bar: one button per tab, always in configuration order, centred
//! in the bar.

use std::sync::Arc;

use eframe::egui;
use egui::{
    CornerRadius, CursorIcon, Galley, Rect, Sense, TextStyle, TextWrapMode, Ui, UiBuilder, Vec2,
};

use crate::config::{TabsConfig, TabsStyle};
use crate::data::stack::TabStack;

/// Button sizes measured ahead of layout, so the bar's rect can be reserved
/// before the content stack is painted.
pub(crate) struct BarLayout {
    galleys: Vec<Arc<Galley>>,
    button_sizes: Vec<Vec2>,
    row_size: Vec2,
}

impl BarLayout {
    pub(crate) fn measure<C>(ui: &Ui, stack: &TabStack<C>, style: &TabsStyle) -> Self {
        let galleys: Vec<Arc<Galley>> = stack
            .tabs()
            .iter()
            .map(|tab| {
                egui::WidgetText::from(tab.title.as_str()).into_galley(
                    ui,
                    Some(TextWrapMode::Extend),
                    f32::INFINITY,
                    TextStyle::Button,
                )
            })
            .collect();
        let button_sizes: Vec<Vec2> = galleys
            .iter()
            .map(|g| g.size() + 2.0 * style.tab_padding)
            .collect();
        let gaps = button_sizes.len().saturating_sub(1) as f32;
        let row_size = egui::vec2(
            button_sizes.iter().map(|s| s.x).sum::<f32>() + style.tab_spacing * gaps,
            button_sizes.iter().map(|s| s.y).fold(0.0, f32::max),
        );
        Self {
            galleys,
            button_sizes,
            row_size,
        }
    }

    /// Bar height including the container frame.
    pub(crate) fn height(&self, style: &TabsStyle) -> f32 {
        self.row_size.y + style.container.total_margin().sum().y
    }
}

/// Draw the bar into `rect` and return the configuration index of the button
/// clicked this frame.
pub(crate) fn show<C>(
    ui: &mut Ui,
    id: egui::Id,
    rect: Rect,
    layout: BarLayout,
    stack: &TabStack<C>,
    config: &TabsConfig,
) -> Option<usize> {
    let style = &config.style;
    let anim = &config.animation;
    let mut clicked = None;

    let mut bar = ui.new_child(
        UiBuilder::new()
            .id_salt(id.with("selector_bar"))
            .max_rect(rect),
    );
    style.container.clone().show(&mut bar, |ui| {
        let inner = ui.available_rect_before_wrap();
        let _bar = ui.allocate_rect(inner, Sense::hover());

        let mut x = (inner.center().x - layout.row_size.x / 2.0).max(inner.left());
        let mut buttons = Vec::with_capacity(layout.galleys.len());
        let mut highlight = None;
        let tabs = stack.tabs().iter().zip(layout.galleys).zip(&layout.button_sizes);
        for (idx, ((tab, galley), &size)) in tabs.enumerate() {
            let rect = Rect::from_min_size(egui::pos2(x, inner.center().y - size.y / 2.0), size);
            x += size.x + style.tab_spacing;

            let response = ui.interact(rect, id.with(("tab", idx)), Sense::click());
            if response.clicked() {
                clicked = Some(idx);
            }
            if response.hovered() {
                ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
            }
            let pressed = response.is_pointer_button_down_on();
            let active = stack.is_active(&tab.value);
            if active {
                highlight = Some((rect, pressed));
            }
            buttons.push((rect, response.hovered(), galley, active, pressed));
        }

        // Highlight goes under the labels.
        if let Some((target, pressed)) = highlight {
            let rect = highlight_rect(ui, id, target, anim.highlight_secs);
            let rect = if pressed {
                rect.scale_from_center(anim.press_scale)
            } else {
                rect
            };
            ui.painter()
                .rect_filled(rect, pill_radius(rect), style.active_tab_fill);
        }

        for (rect, hovered, galley, active, pressed) in buttons {
            let rect = if pressed {
                rect.scale_from_center(anim.press_scale)
            } else {
                rect
            };
            if !active && hovered {
                let fill = ui.visuals().widgets.hovered.weak_bg_fill;
                ui.painter().rect_filled(rect, pill_radius(rect), fill);
            }
            let color = if active {
                style.active_tab_text
            } else {
                style.tab_text
            };
            let pos = rect.center() - galley.size() / 2.0;
            ui.painter().galley(pos, galley, color);
        }
    });

    clicked
}

/// Slides the highlight towards `target`; snaps on first sight.
fn highlight_rect(ui: &Ui, id: egui::Id, target: Rect, secs: f32) -> Rect {
    let ctx = ui.ctx();
    let left = ctx.animate_value_with_time(id.with("highlight_left"), target.left(), secs);
    let right = ctx.animate_value_with_time(id.with("highlight_right"), target.right(), secs);
    Rect::from_x_y_ranges(left..=right, target.y_range())
}

fn pill_radius(rect: Rect) -> CornerRadius {
    CornerRadius::same((rect.height() / 2.0).clamp(0.0, u8::MAX as f32) as u8)
}
