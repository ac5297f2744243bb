use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::samples::DatasetKind;
use crate::menu::MenuSelection;
use crate::state::{AppState, ExplorerState, Status};

// ---------------------------------------------------------------------------
// Left side panel – navigation and per-view controls
// ---------------------------------------------------------------------------

/// Render the sidebar. The chosen view is written to `next`; the caller
/// applies the transition after the frame's panels are laid out.
pub fn side_panel(ui: &mut Ui, next: &mut MenuSelection, state: &mut AppState) {
    ui.heading("Navigation");
    ui.separator();

    ui.label("Go to:");
    for option in MenuSelection::ALL {
        ui.radio_value(next, option, option.label());
    }
    ui.add_space(8.0);

    match state.menu {
        MenuSelection::Profile => {
            ui.heading("Profile Options");
            ui.separator();
        }
        MenuSelection::DataExplorer => data_selection(ui, state),
        MenuSelection::Publications | MenuSelection::Contact => {}
    }
}

/// Dataset picker and range sliders for the Data Explorer.
fn data_selection(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data Selection");
    ui.separator();

    ui.label("Choose a dataset to explore");
    let mut chosen = state.explorer.dataset;
    egui::ComboBox::from_id_salt("dataset_choice")
        .selected_text(chosen.label())
        .show_ui(ui, |ui: &mut Ui| {
            for kind in DatasetKind::ALL {
                ui.selectable_value(&mut chosen, kind, kind.label());
            }
        });
    state.select_dataset(chosen);
    ui.add_space(8.0);

    let controls = state.explorer.dataset.range_controls();
    for (control, bound) in controls.iter().zip(state.explorer.bounds.iter_mut()) {
        ui.strong(control.slider_label());

        let range = control.min..=control.max;
        let mut low = egui::Slider::new(&mut bound.low, range.clone()).text("from");
        let mut high = egui::Slider::new(&mut bound.high, range).text("to");
        if control.integer {
            low = low.integer();
            high = high.integer();
        }
        ui.add(low);
        ui.add(high);

        if bound.low > bound.high {
            ui.label(RichText::new("Lower bound exceeds upper bound").color(Color32::YELLOW));
        }
        ui.add_space(6.0);
    }

    if ui.button("Reset filters").clicked() {
        state.explorer = ExplorerState::for_dataset(state.explorer.dataset);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(state.menu.label());

        if state.publications.state().is_pending() {
            ui.separator();
            ui.spinner();
            ui.label("Fetching publications…");
        }

        match &state.status {
            Some(Status::Info(msg)) => {
                ui.separator();
                ui.label(msg);
            }
            Some(Status::Error(msg)) => {
                ui.separator();
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
}
