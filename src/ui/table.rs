use eframe::egui::{self, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::model::Dataset;

const HEADER_HEIGHT: f32 = 22.0;
const ROW_HEIGHT: f32 = 20.0;

/// Draw `dataset` as a striped, read-only table. `id` keeps several tables on
/// one page apart.
pub fn data_table(ui: &mut Ui, id: &str, dataset: &Dataset) {
    ui.push_id(id, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .columns(TableColumn::auto().at_least(90.0), dataset.columns.len())
            .header(HEADER_HEIGHT, |mut header| {
                for col in &dataset.columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(&col.name);
                    });
                }
            })
            .body(|mut body| {
                for row in &dataset.rows {
                    body.row(ROW_HEIGHT, |mut tr| {
                        for cell in row {
                            tr.col(|ui: &mut Ui| {
                                ui.label(cell.to_string());
                            });
                        }
                    });
                }
            });
    });

    if dataset.is_empty() {
        ui.weak("No rows match the current filters.");
    }
}
