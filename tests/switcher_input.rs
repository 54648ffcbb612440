//! Headless frames driven by pointer events.

use eframe::egui;
use egui::epaint::{ClippedShape, RectShape};
use egui::{Color32, Event, Pos2, Rect, Shape};
use stacked_tabs::{AnimationConfig, Tab, TabSwitcher, TabsConfig, TabsStyle};

const CARD: Color32 = Color32::from_rgb(200, 0, 0);
const HIGHLIGHT: Color32 = Color32::from_rgb(0, 0, 200);
const DT: f64 = 1.0 / 60.0;

fn switcher() -> TabSwitcher<&'static str> {
    let tabs = vec![
        Tab::new("Office", "Office", "office table"),
        Tab::new("Mall", "Mall", "mall table"),
        Tab::new("Hospital", "Hospital", "hospital table"),
        Tab::new("School", "School", "school table"),
    ];
    let config = TabsConfig {
        style: TabsStyle {
            content: egui::Frame::new().fill(CARD),
            active_tab_fill: HIGHLIGHT,
            ..Default::default()
        },
        animation: AnimationConfig {
            transition_secs: 0.01,
            ..Default::default()
        },
        controller: None,
    };
    TabSwitcher::new("input", tabs)
        .expect("valid tabs")
        .with_config(config)
}

struct Harness {
    ctx: egui::Context,
    time: f64,
}

struct Painted {
    shapes: Vec<ClippedShape>,
    rect: Rect,
}

impl Harness {
    fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
            time: 0.0,
        }
    }

    fn step(&mut self, sw: &mut TabSwitcher<&'static str>, dt: f64, events: Vec<Event>) -> Painted {
        self.time += dt;
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, egui::vec2(1000.0, 800.0))),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        let mut rect = Rect::NOTHING;
        let output = self.ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                rect = sw.show(ui).rect;
            });
        });
        Painted {
            shapes: output.shapes,
            rect,
        }
    }

    /// Run frames with no input for `secs`.
    fn idle(&mut self, sw: &mut TabSwitcher<&'static str>, secs: f64) -> Painted {
        let until = self.time + secs;
        let mut last = self.step(sw, DT, Vec::new());
        while self.time < until {
            last = self.step(sw, DT, Vec::new());
        }
        last
    }

    fn hover(&mut self, sw: &mut TabSwitcher<&'static str>, pos: Pos2, frames: usize) -> Painted {
        let mut last = self.step(sw, DT, vec![Event::PointerMoved(pos)]);
        for _ in 1..frames {
            last = self.step(sw, DT, Vec::new());
        }
        last
    }

    fn click(&mut self, sw: &mut TabSwitcher<&'static str>, pos: Pos2) -> Painted {
        self.step(sw, DT, vec![Event::PointerMoved(pos)]);
        self.step(sw, 0.05, vec![button(pos, true)]);
        self.step(sw, 0.05, vec![button(pos, false)])
    }
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    }
}

impl Painted {
    fn label_rect(&self, text: &str) -> Rect {
        self.shapes
            .iter()
            .find_map(|s| match &s.shape {
                Shape::Text(t) if t.galley.text() == text => {
                    Some(Rect::from_min_size(t.pos, t.galley.size()))
                }
                _ => None,
            })
            .unwrap_or_else(|| panic!("no label {text:?} painted"))
    }

    fn rects(&self) -> impl Iterator<Item = (usize, &RectShape)> {
        self.shapes.iter().enumerate().filter_map(|(i, s)| match &s.shape {
            Shape::Rect(r) => Some((i, r)),
            _ => None,
        })
    }

    /// Card fills keep only their red channel under any opacity.
    fn cards(&self) -> Vec<(usize, Rect)> {
        self.rects()
            .filter(|(_, r)| r.fill.r() > 0 && r.fill.g() == 0 && r.fill.b() == 0)
            .map(|(i, r)| (i, r.rect))
            .collect()
    }

    fn front_card(&self) -> Rect {
        self.rects()
            .find(|(_, r)| r.fill == CARD)
            .map(|(_, r)| r.rect)
            .expect("front card painted")
    }

    fn highlight(&self) -> (usize, Rect) {
        self.rects()
            .find(|(_, r)| r.fill == HIGHLIGHT)
            .map(|(i, r)| (i, r.rect))
            .expect("highlight painted")
    }
}

#[test]
fn clicks_route_by_configuration_index_after_reorder() {
    let mut h = Harness::new();
    let mut sw = switcher();
    let painted = h.idle(&mut sw, 0.1);
    let hospital = painted.label_rect("Hospital").center();
    let mall = painted.label_rect("Mall").center();

    h.click(&mut sw, hospital);
    assert_eq!(sw.stack().pending(), Some(2));
    let painted = h.step(&mut sw, DT, Vec::new());
    assert_eq!(
        sw.stack().stack_values(),
        ["Hospital", "Office", "Mall", "School"]
    );
    // Buttons never move with the stack.
    assert_eq!(painted.label_rect("Mall").center(), mall);

    h.click(&mut sw, mall);
    assert_eq!(sw.stack().pending(), Some(1));
    h.step(&mut sw, DT, Vec::new());
    assert_eq!(
        sw.stack().stack_values(),
        ["Mall", "Office", "Hospital", "School"]
    );
}

#[test]
fn hovering_the_bar_fans_cards_underneath_it() {
    let mut h = Harness::new();
    let mut sw = switcher();
    let painted = h.idle(&mut sw, 0.1);
    assert!(!sw.stack().is_hovering());
    let school = painted.label_rect("School").center();

    let painted = h.hover(&mut sw, school, 40);
    assert!(sw.stack().is_hovering());

    let (highlight_idx, highlight) = painted.highlight();
    let cards = painted.cards();
    assert_eq!(cards.len(), 3, "depth 3 is transparent");
    let top = cards.iter().map(|(_, r)| r.top()).fold(f32::INFINITY, f32::min);
    assert!(top < highlight.bottom(), "fanned card reaches the bar");
    assert!(
        cards.iter().all(|&(i, _)| i < highlight_idx),
        "bar paints over the cards"
    );

    let painted = h.hover(&mut sw, Pos2::new(990.0, 790.0), 40);
    assert!(!sw.stack().is_hovering());
    let top = painted.cards().iter().map(|(_, r)| r.top()).fold(f32::INFINITY, f32::min);
    assert!(top > painted.highlight().1.bottom());
}

#[test]
fn click_on_a_button_over_a_fanned_card_still_selects() {
    let mut h = Harness::new();
    let mut sw = switcher();
    let painted = h.idle(&mut sw, 0.1);
    let office = painted.label_rect("Office").center();
    let school = painted.label_rect("School").center();

    h.hover(&mut sw, office, 40);
    h.click(&mut sw, school);
    assert_eq!(sw.stack().pending(), Some(3));
}

#[test]
fn bounce_restarts_only_when_active_value_changes() {
    let mut h = Harness::new();
    let mut sw = switcher();
    let rest = h.idle(&mut sw, 1.0).front_card().top();

    assert!(sw.request_select(0));
    h.step(&mut sw, DT, Vec::new());
    let same = h.idle(&mut sw, 0.2).front_card().top();
    assert_eq!(same, rest);

    assert!(sw.request_select(1));
    h.step(&mut sw, DT, Vec::new());
    let bounced = h.idle(&mut sw, 0.19).front_card().top();
    assert!(bounced > rest + 30.0, "{bounced} vs {rest}");

    let settled = h.idle(&mut sw, 0.5).front_card().top();
    assert_eq!(settled, rest);
}

#[test]
fn selector_row_is_centred() {
    let mut h = Harness::new();
    let mut sw = switcher();
    let painted = h.idle(&mut sw, 0.1);
    let left = painted.label_rect("Office").left();
    let right = painted.label_rect("School").right();
    assert!(((left + right) / 2.0 - painted.rect.center().x).abs() < 1.0);
    assert!(left > painted.rect.left() + 100.0);
}
