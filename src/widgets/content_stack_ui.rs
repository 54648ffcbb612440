//! Content stack: every tab's card drawn at once, layered by recency.

use eframe::egui;
use egui::{Align, Layout, Rect, Sense, Ui, UiBuilder};

use crate::config::TabsConfig;
use crate::data::depth::{bounce_offset, PanelLook};
use crate::data::stack::TabStack;
use crate::data::tab::TabContent;

/// When the active card last changed; kept in egui's temp memory so the
/// state machine stays free of time.
#[derive(Clone)]
struct BounceStart {
    value: String,
    time: f64,
}

/// Paint the cards for `area`. The caller has already allocated it; cards
/// fanned out above `area` are painted before the selector bar.
pub(crate) fn show<C: TabContent>(
    ui: &mut Ui,
    id: egui::Id,
    area: Rect,
    stack: &mut TabStack<C>,
    config: &TabsConfig,
) {
    let anim = &config.animation;
    let Some(active) = stack.active().map(|t| t.value.clone()) else {
        return;
    };
    let ctx = ui.ctx().clone();
    let now = ui.input(|i| i.time);
    let bounce = active_bounce(&ctx, id, &active, now, anim.bounce_secs);

    let hovering = stack.is_hovering();
    let mut layers: Vec<(usize, PanelLook)> = stack
        .stack_indices()
        .iter()
        .enumerate()
        .map(|(depth, &idx)| (idx, PanelLook::at(depth, hovering)))
        .collect();
    // Back to front.
    layers.sort_by_key(|(_, look)| look.z_order);

    for (idx, look) in layers {
        let Some(tab) = stack.tab_mut(idx) else {
            continue;
        };
        // Keyed by value so a card keeps its animation state across reorders.
        let panel_id = id.with(("panel", tab.value.as_str()));
        let secs = anim.transition_secs;
        let scale = ctx.animate_value_with_time(panel_id.with("scale"), look.scale, secs);
        let opacity = ctx.animate_value_with_time(panel_id.with("opacity"), look.opacity, secs);
        let offset =
            ctx.animate_value_with_time(panel_id.with("offset"), look.vertical_offset, secs);
        if opacity <= 0.0 {
            continue;
        }

        let is_front = look.z_order == 0;
        let dy = offset + if is_front { bounce } else { 0.0 };
        let rect = card_rect(area, scale, dy);

        if is_front {
            // Swallow pointer input meant for the cards underneath.
            let _cover = ui.interact(rect, panel_id.with("cover"), Sense::click());
        }

        let mut card = ui.new_child(
            UiBuilder::new()
                .id_salt(panel_id)
                .max_rect(rect)
                .layout(Layout::top_down(Align::Min)),
        );
        card.set_clip_rect(rect.intersect(ui.clip_rect()));
        card.multiply_opacity(opacity);
        config.style.content.clone().show(&mut card, |ui| {
            ui.set_min_size(ui.available_size());
            tab.content.ui(ui);
        });
    }
}

/// Card rect for a given scale (around the centre) and vertical displacement.
fn card_rect(area: Rect, scale: f32, dy: f32) -> Rect {
    area.scale_from_center(scale.max(0.0))
        .translate(egui::vec2(0.0, dy))
}

fn active_bounce(ctx: &egui::Context, id: egui::Id, active: &str, now: f64, secs: f32) -> f32 {
    let key = id.with("bounce");
    let start = ctx.data_mut(|d| {
        let entry = d.get_temp_mut_or_insert_with(key, || BounceStart {
            value: active.to_owned(),
            time: now,
        });
        if entry.value != active {
            *entry = BounceStart {
                value: active.to_owned(),
                time: now,
            };
        }
        entry.time
    });
    let elapsed = (now - start) as f32;
    if elapsed < secs {
        ctx.request_repaint();
    }
    bounce_offset(elapsed, secs)
}
