use std::time::Instant;

use eframe::egui;

use crate::config::SieveConfig;
use crate::state::Session;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustySieveApp {
    pub state: Session,
}

impl RustySieveApp {
    pub fn new(config: SieveConfig) -> Self {
        Self {
            state: Session::new(config),
        }
    }
}

impl eframe::App for RustySieveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.expire_notification(Instant::now());
        if self.state.notification.is_some() {
            ctx.request_repaint_after(self.state.config.notification_duration());
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: record preview ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::preview_panel(ui, &mut self.state);
        });
    }
}
