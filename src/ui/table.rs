use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::preview::Preview;
use crate::state::Session;

// ---------------------------------------------------------------------------
// Record preview (central panel)
// ---------------------------------------------------------------------------

/// Render the preview of the current (possibly filtered) dataset.
pub fn preview_panel(ui: &mut Ui, state: &mut Session) {
    if state.preview_hidden {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("Data hidden. Apply or reset a filter to show it again.");
        });
        return;
    }

    let Some(preview) = state.preview() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a .csv or .xlsx file to preview it  (File → Open…)");
        });
        return;
    };

    ui.heading("Record preview");
    ui.add_space(4.0);
    preview_table(ui, preview);

    if preview.is_truncated() {
        ui.add_space(4.0);
        ui.weak(format!("showing {} of {}", preview.rows.len(), preview.total));
    }

    if ui.button("Hide data").clicked() {
        state.hide_preview();
    }
}

fn preview_table(ui: &mut Ui, preview: &Preview) {
    if preview.headers.is_empty() {
        ui.label("No headers found.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(80.0), preview.headers.len())
        .header(20.0, |mut header| {
            for name in &preview.headers {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for row in &preview.rows {
                body.row(18.0, |mut table_row| {
                    for name in &preview.headers {
                        table_row.col(|ui: &mut Ui| {
                            let text = row.get(name).map(|v| v.to_string()).unwrap_or_default();
                            ui.label(text);
                        });
                    }
                });
            }
        });
}
