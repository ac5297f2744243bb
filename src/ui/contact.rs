use eframe::egui::Ui;

use crate::config::ContactConfig;
use crate::contact::compose_link;

pub fn show(ui: &mut Ui, contact: &ContactConfig) {
    ui.heading("Contact Information");
    ui.add_space(8.0);

    ui.label(&contact.email);
    ui.hyperlink_to("LinkedIn", &contact.linkedin);
    ui.hyperlink_to("Email me", compose_link(contact));
}
