use eframe::egui::{self, Ui};

use crate::config::ProfileConfig;

/// Biography fields and the profile picture.
pub fn show(ui: &mut Ui, profile: &ProfileConfig) {
    ui.heading("Researcher Profile");
    ui.add_space(8.0);

    ui.strong(&profile.name);
    ui.label(&profile.field);
    ui.hyperlink_to(&profile.employer, &profile.employer_url);
    ui.add_space(12.0);

    // Resolved by the image loaders installed at startup.
    ui.add(
        egui::Image::new(profile.image.as_str())
            .max_width(ui.available_width().min(900.0))
            .maintain_aspect_ratio(true),
    );
}
