mod app;
mod config;
mod contact;
mod data;
mod error;
mod menu;
mod scholar;
mod state;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use app::ProfileApp;
use config::AppConfig;
use data::samples::SampleData;
use eframe::egui;
use scholar::http::ScholarClient;
use scholar::Retrying;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load();
    let samples = SampleData::new();

    let scholar = &config.scholar;
    let client = match ScholarClient::from_config(scholar) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Could not build HTTP client: {e}");
            std::process::exit(1);
        }
    };
    let source = Arc::new(Retrying::new(
        client,
        scholar.max_attempts,
        Duration::from_millis(scholar.backoff_ms),
    ));

    let title = config.profile.name.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render png/jpg/etc.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ProfileApp::new(config, samples, source)))
        }),
    )
}
