mod app;
mod config;
mod upload;
mod utils;

use app::JournalDashboard;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Trading Journal",
        options,
        Box::new(|cc| Box::new(JournalDashboard::new(cc))),
    )
}
