//! Building selection demo.
//!
//! The left pane stands in for the 3D scene and follows the shared selection;
//! the right pane holds the building tab switcher with reference data.

use std::sync::mpsc::Receiver;

use chrono::{Datelike, Local};
use eframe::egui;
use stacked_tabs::{SelectionController, Tab, TabContent, TabSwitcher};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const SCENE_WIDTH: f32 = 700.0;

/// Reference data shown inside a building tab.
struct BuildingTable {
    rows: Vec<(&'static str, String)>,
}

impl BuildingTable {
    fn new(working_hours: &str, floors: &str) -> Self {
        Self {
            rows: vec![
                ("Chillers", "2 Water Cooled Chillers".to_string()),
                ("Boilers", "1 Hot Water Boiler".to_string()),
                ("AHUs", "11".to_string()),
                ("Working Hours", working_hours.to_string()),
                ("No of floors", floors.to_string()),
                ("Duration", format!("{} (one month)", last_month_name())),
            ],
        }
    }
}

impl TabContent for BuildingTable {
    fn ui(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new(ui.id().with("building_table"))
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                for (name, value) in &self.rows {
                    ui.strong(format!("{name}:"));
                    ui.label(value.as_str());
                    ui.end_row();
                }
            });
        ui.add_space(16.0);
        ui.small("Note:");
        ui.small("1. Chiller capacity: 400TR each");
        ui.small("2. Boiler rating: 80 kW");
        ui.small(
            "3. For simulation purposes, boiler or chiller will be activated based on the city selected and the weather.",
        );
        ui.small("4. Target indoor temperature 23 °C");
    }
}

fn last_month_name() -> String {
    let today = Local::now().date_naive();
    let first = today.with_day(1).unwrap_or(today);
    first.pred_opt().unwrap_or(first).format("%B").to_string()
}

struct BuildingApp {
    switcher: TabSwitcher<BuildingTable>,
    selection: SelectionController,
    scene_rx: Receiver<String>,
}

impl BuildingApp {
    fn new(selection: SelectionController) -> stacked_tabs::Result<Self> {
        let tabs = vec![
            Tab::new("Office", "Office", BuildingTable::new("13 hours/day", "11")),
            Tab::new("Mall", "Mall", BuildingTable::new("18 hours/day", "5")),
        ];
        let switcher = TabSwitcher::new("building", tabs)?.with_controller(selection.clone());
        let scene_rx = selection.subscribe();
        Ok(Self {
            switcher,
            selection,
            scene_rx,
        })
    }

    fn scene_ui(&self, ui: &mut egui::Ui) {
        let building = self.selection.current().unwrap_or_default();
        let (icon, caption) = match building.as_str() {
            "Mall" => (egui_phosphor::regular::STOREFRONT, "Shopping mall scene"),
            _ => (egui_phosphor::regular::BUILDING_OFFICE, "Office building scene"),
        };
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.label(egui::RichText::new(icon).size(120.0));
            ui.heading(caption);
        });
    }
}

impl eframe::App for BuildingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(building) = self.scene_rx.try_recv() {
            debug!(building = %building, "mounting scene");
        }

        egui::SidePanel::left("scene")
            .resizable(false)
            .exact_width(SCENE_WIDTH)
            .frame(egui::Frame::new().fill(egui::Color32::from_rgb(0xf8, 0xfa, 0xfc)))
            .show(ctx, |ui| self.scene_ui(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("Select Building type").strong().size(24.0));
            });
            ui.add_space(8.0);
            self.switcher.show(ui);
        });
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let selection = SelectionController::with_initial("Office");
    info!("starting building selection demo");

    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(egui::vec2(1400.0, 900.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Building Selection",
        opts,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(BuildingApp::new(selection)?))
        }),
    )
}
