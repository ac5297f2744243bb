use eframe::egui::{self, Color32, RichText, Ui};

use crate::error::FetchError;
use crate::scholar::task::FetchState;
use crate::scholar::PublicationRecord;

/// What the Publications page shows below its heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicationsBody {
    Waiting,
    List(Vec<String>),
    Error(String),
}

impl PublicationsBody {
    pub fn from_state(state: &FetchState) -> Self {
        match state {
            FetchState::Idle | FetchState::Pending => PublicationsBody::Waiting,
            FetchState::Loaded(records) => PublicationsBody::List(bullet_lines(records)),
            FetchState::Failed(e) => PublicationsBody::Error(error_notice(e)),
        }
    }
}

/// One bullet per record, in fetch order.
pub fn bullet_lines(records: &[PublicationRecord]) -> Vec<String> {
    records.iter().map(|r| format!("• {r}")).collect()
}

pub fn error_notice(e: &FetchError) -> String {
    match e {
        FetchError::AuthorNotFound(id) => {
            format!("Could not find a scholar profile for author id '{id}'.")
        }
        FetchError::FetchFailed(msg) => format!("Publications could not be loaded: {msg}"),
    }
}

/// Render the Publications page. Returns true when the user asked for a
/// refresh.
pub fn show(ui: &mut Ui, state: &FetchState) -> bool {
    ui.heading("Publications");
    ui.strong(
        "This is a live web scrape of all publications, please allow some time for the scraping to complete.",
    );
    ui.add_space(8.0);

    match PublicationsBody::from_state(state) {
        PublicationsBody::Waiting => {
            ui.horizontal(|ui: &mut Ui| {
                ui.spinner();
                ui.label("Fetching publications…");
            });
        }
        PublicationsBody::List(lines) => {
            if lines.is_empty() {
                ui.weak("No publications listed.");
            }
            for line in lines {
                ui.label(line);
            }
        }
        PublicationsBody::Error(notice) => {
            ui.label(RichText::new(notice).color(Color32::RED));
        }
    }

    ui.add_space(8.0);
    ui.add_enabled(!state.is_pending(), egui::Button::new("Refresh"))
        .clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_author_is_an_error_not_an_empty_list() {
        let body = PublicationsBody::from_state(&FetchState::Failed(FetchError::AuthorNotFound(
            "EmcpSGoAAAAJ".into(),
        )));
        assert_eq!(
            body,
            PublicationsBody::Error(
                "Could not find a scholar profile for author id 'EmcpSGoAAAAJ'.".into()
            )
        );
    }

    #[test]
    fn loaded_records_become_bullets() {
        let state = FetchState::Loaded(vec![
            PublicationRecord { title: "Flood maps".into(), year: Some(2022) },
            PublicationRecord { title: "Catalogues".into(), year: None },
        ]);
        assert_eq!(
            PublicationsBody::from_state(&state),
            PublicationsBody::List(vec![
                "• Flood maps - (2022)".into(),
                "• Catalogues - (Unknown year)".into(),
            ])
        );
    }

    #[test]
    fn pending_waits() {
        assert_eq!(PublicationsBody::from_state(&FetchState::Pending), PublicationsBody::Waiting);
    }
}
