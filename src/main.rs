mod app;
mod config;
mod data;
mod state;
mod ui;

use app::RustySieveApp;
use config::SieveConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = SieveConfig::load().unwrap_or_else(|e| {
        log::error!("Falling back to default settings: {e:#}");
        SieveConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Sieve – Spreadsheet Filter",
        options,
        Box::new(|_cc| Ok(Box::new(RustySieveApp::new(config)))),
    )
}
