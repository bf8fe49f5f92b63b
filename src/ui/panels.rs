use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::{filter, loader};
use crate::state::{NotificationLevel, Session};

// ---------------------------------------------------------------------------
// Left side panel – category filters
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut Session) {
    ui.heading("Filters");
    ui.separator();

    // Clone what we need so we can mutate state inside the loop.
    let categories = match state.categories() {
        Some(c) => c.clone(),
        None => {
            ui.label("No file loaded.");
            return;
        }
    };
    let fields: Vec<String> = state
        .config
        .category_fields()
        .iter()
        .map(|f| f.to_string())
        .collect();

    if categories.is_empty() {
        ui.weak("No category values found in this file.");
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for field in &fields {
                let values = categories.values(field).cloned().unwrap_or_default();
                let n_selected = state.pending.get(field).map_or(0, |s| s.len());
                let header_text = format!("{field}  ({n_selected}/{})", values.len());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(field)
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        if values.is_empty() {
                            ui.weak(format!("No \"{field}\" values in this file."));
                        }

                        for val in &values {
                            let mut checked = state.is_selected(field, val);
                            if ui.checkbox(&mut checked, val.as_str()).changed() {
                                state.toggle_selection(field, val);
                            }
                        }

                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("Apply").clicked() {
                                state.apply_pending();
                            }
                            if ui.small_button("Reset").clicked() {
                                state.reset_filters();
                            }
                        });
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut Session) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui
                .add_enabled(!state.loading, egui::Button::new("Open…"))
                .clicked()
            {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(loaded) = state.loaded() {
            ui.label(format!(
                "{}: {} rows loaded, {} matching",
                loaded.file_name,
                loaded.dataset.len(),
                loaded.matching
            ));
            if filter::is_active(&loaded.selection) {
                ui.label(RichText::new("(filtered)").italics());
            }
        }

        if let Some(note) = &state.notification {
            ui.separator();
            let color = match note.level {
                NotificationLevel::Info => Color32::LIGHT_GREEN,
                NotificationLevel::Error => Color32::RED,
            };
            ui.label(RichText::new(&note.message).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut Session) {
    if !state.begin_load() {
        return;
    }

    let file = rfd::FileDialog::new()
        .set_title("Open spreadsheet")
        .add_filter("Supported files", &["csv", "xlsx"])
        .add_filter("CSV", &["csv"])
        .add_filter("Excel", &["xlsx"])
        .pick_file();

    let result = loader::load_path(file.as_deref())
        .and_then(|(name, decoded)| state.load_file(&name, decoded).map(|_| ()));

    if let Err(e) = result {
        state.report_error(&e);
    }
}
