use std::sync::Arc;
use std::time::Duration;

use eframe::egui;

use crate::config::AppConfig;
use crate::data::samples::SampleData;
use crate::menu::MenuSelection;
use crate::scholar::ScholarSource;
use crate::state::AppState;
use crate::ui::{contact, explorer, panels, profile, publications};

/// How often to repaint while a fetch runs in the background.
const PENDING_REPAINT: Duration = Duration::from_millis(150);

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ProfileApp {
    pub state: AppState,
    pub config: AppConfig,
    pub samples: SampleData,
    source: Arc<dyn ScholarSource>,
}

impl ProfileApp {
    pub fn new(config: AppConfig, samples: SampleData, source: Arc<dyn ScholarSource>) -> Self {
        Self {
            state: AppState::default(),
            config,
            samples,
            source,
        }
    }

    /// Menu transition. Entering Publications always starts a fresh fetch.
    pub fn navigate(&mut self, next: MenuSelection) {
        if self.state.select_menu(next) && next == MenuSelection::Publications {
            self.refresh_publications();
        }
    }

    pub fn refresh_publications(&mut self) {
        let cfg = &self.config.scholar;
        self.state
            .publications
            .start(Arc::clone(&self.source), cfg.author_id.clone(), cfg.limit);
    }

    /// Render the current view into the central panel.
    fn central_view(&mut self, ui: &mut egui::Ui) {
        match self.state.menu {
            MenuSelection::Profile => profile::show(ui, &self.config.profile),
            MenuSelection::Publications => {
                if publications::show(ui, self.state.publications.state()) {
                    self.refresh_publications();
                }
            }
            MenuSelection::DataExplorer => explorer::show(ui, &self.samples, &mut self.state),
            MenuSelection::Contact => contact::show(ui, &self.config.contact),
        }
    }
}

impl eframe::App for ProfileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.publications.poll() {
            ctx.request_repaint();
        }
        if self.state.publications.state().is_pending() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: navigation and view controls ----
        let mut next = self.state.menu;
        egui::SidePanel::left("navigation")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut next, &mut self.state);
            });
        self.navigate(next);

        // ---- Central panel: selected view ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.central_view(ui));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::scholar::task::FetchState;
    use crate::scholar::tests::FakeScholar;
    use std::time::Instant;

    fn app_with(fake: FakeScholar, author_id: &str) -> ProfileApp {
        let mut config = AppConfig::default();
        config.scholar.author_id = author_id.to_string();
        ProfileApp::new(config, SampleData::new(), Arc::new(fake))
    }

    fn settle(app: &mut ProfileApp) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.state.publications.state().is_pending() && Instant::now() < deadline {
            app.state.publications.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn entering_publications_fetches() {
        let mut app = app_with(FakeScholar::with_publications(&[("A", None)]), "AUTHOR1");
        app.navigate(MenuSelection::Publications);
        assert!(app.state.publications.state().is_pending());
        settle(&mut app);
        match app.state.publications.state() {
            FetchState::Loaded(records) => assert_eq!(records[0].to_string(), "A - (Unknown year)"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn other_views_do_not_fetch() {
        let mut app = app_with(FakeScholar::default(), "AUTHOR1");
        for m in [MenuSelection::DataExplorer, MenuSelection::Contact, MenuSelection::Profile] {
            app.navigate(m);
            assert_eq!(app.state.publications.state(), &FetchState::Idle);
        }
    }

    #[test]
    fn unknown_author_leaves_other_views_usable() {
        let mut app = app_with(FakeScholar::default(), "nobody");
        app.navigate(MenuSelection::Publications);
        settle(&mut app);
        assert_eq!(
            app.state.publications.state(),
            &FetchState::Failed(FetchError::AuthorNotFound("nobody".into()))
        );
        app.navigate(MenuSelection::DataExplorer);
        assert_eq!(app.state.menu, MenuSelection::DataExplorer);
        assert_eq!(app.state.publications.state(), &FetchState::Idle);
    }
}
