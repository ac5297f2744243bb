use eframe::egui::Ui;

use super::table::data_table;
use crate::data::export::save_csv;
use crate::data::filter::filter_ranges;
use crate::data::model::Dataset;
use crate::data::samples::{DatasetKind, SampleData};
use crate::state::{AppState, ExplorerState, Status};

/// Everything the Data Explorer page draws for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerView<'a> {
    pub heading: &'static str,
    pub original: &'a Dataset,
    pub filtered: Dataset,
    pub caption: String,
}

impl<'a> ExplorerView<'a> {
    pub fn build(samples: &'a SampleData, explorer: &ExplorerState) -> Self {
        let original = samples.get(explorer.dataset);
        let filtered = filter_ranges(original, &explorer.constraints());
        Self {
            heading: explorer.dataset.heading(),
            original,
            filtered,
            caption: caption(explorer),
        }
    }
}

/// `Filtered Results for Energy Range (0.0, 10.0):`, with one clause per slider.
pub fn caption(explorer: &ExplorerState) -> String {
    let clauses: Vec<String> = explorer
        .dataset
        .range_controls()
        .iter()
        .zip(&explorer.bounds)
        .map(|(c, b)| format!("{} {}", c.caption, c.format_bound(*b)))
        .collect();
    format!("Filtered Results for {}:", clauses.join(" and "))
}

pub fn show(ui: &mut Ui, samples: &SampleData, state: &mut AppState) {
    ui.heading("STEM Data Explorer");
    ui.add_space(4.0);

    let view = ExplorerView::build(samples, &state.explorer);

    ui.heading(view.heading);
    data_table(ui, "original", view.original);
    ui.add_space(12.0);

    ui.label(&view.caption);
    data_table(ui, "filtered", &view.filtered);
    ui.label(format!("{} of {} rows", view.filtered.len(), view.original.len()));

    if ui.button("Export CSV…").clicked() {
        let kind = state.explorer.dataset;
        export_dialog(state, kind, &view.filtered);
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

fn export_dialog(state: &mut AppState, kind: DatasetKind, filtered: &Dataset) {
    let default_name = format!("{}.csv", kind.label().to_lowercase().replace(' ', "_"));
    let file = rfd::FileDialog::new()
        .set_title("Export filtered rows")
        .set_file_name(&default_name)
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        match save_csv(filtered, &path) {
            Ok(()) => {
                log::info!("Exported {} rows to {}", filtered.len(), path.display());
                state.status = Some(Status::Info(format!("Saved {}", path.display())));
            }
            Err(e) => {
                log::error!("Failed to export CSV: {e:#}");
                state.status = Some(Status::Error(format!("Error: {e:#}")));
            }
        }
    }
}
