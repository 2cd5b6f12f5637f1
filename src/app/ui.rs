use super::cards;
use super::ImportStatus;
use super::JournalDashboard;
use crate::utils::{color, file_size};
use eframe::egui::{self, RichText};
use rfd::FileDialog;

impl JournalDashboard {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(16.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Trading Journal");
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new("Track your performance and import trades from your broker")
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });

                ui.add_space(20.0);
                cards::render_summary(ui);
                ui.add_space(20.0);

                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        let label = if self.state.is_uploading {
                            "⏳ Importing…"
                        } else {
                            "📥 Import Trades"
                        };

                        ui.add_enabled_ui(!self.state.is_uploading, |ui| {
                            let button =
                                egui::Button::new(label).min_size(egui::vec2(160.0, 32.0));
                            if ui.add(button).clicked() {
                                match FileDialog::new().add_filter("CSV", &["csv"]).pick_file() {
                                    Some(path) => self.import_trades(path),
                                    None => println!("No trades file selected"),
                                }
                            }
                        });

                        if let Some(staged) = &self.state.staged {
                            ui.label(format!(
                                "Selected: {} ({})",
                                staged.name,
                                file_size::format_size(staged.size_bytes)
                            ));
                        }
                    });

                    match &self.state.status {
                        ImportStatus::Idle => {}
                        status @ ImportStatus::InProgress => {
                            ui.add_space(8.0);
                            ui.colored_label(color::POSITIVE, status.label());
                        }
                        status @ ImportStatus::Failed(_) => {
                            ui.add_space(8.0);
                            ui.colored_label(color::NEGATIVE, status.label());
                        }
                    }
                });

                ui.add_space(20.0);
            });
        });
    }
}
