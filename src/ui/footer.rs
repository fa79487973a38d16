//! Footer rendering.

use chrono::Datelike;
use eframe::egui;
use egui::RichText;

/// Copyright line for the given year.
pub fn footer_text(year: i32) -> String {
    format!("© {} Admin Dashboard. All rights reserved.", year)
}

pub fn render_footer(ui: &mut egui::Ui) {
    let year = chrono::Local::now().year();
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(footer_text(year)).small().weak());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_text() {
        assert_eq!(
            footer_text(2025),
            "© 2025 Admin Dashboard. All rights reserved."
        );
    }
}
