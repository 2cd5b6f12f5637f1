mod cards;
mod state;
mod ui;

use crate::config::ImportConfig;
use crate::upload::{StagedCsv, TradeImporter};
use eframe::{egui, App};
pub use state::ImportStatus;
use state::DashboardState;
use std::path::PathBuf;
use std::sync::mpsc;

pub struct JournalDashboard {
    config: ImportConfig,
    state: DashboardState,
}

impl JournalDashboard {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        println!("Initializing trading journal dashboard");
        Self {
            config: ImportConfig::from_env(),
            state: DashboardState::default(),
        }
    }

    /// Kick off an upload for the file picked in the UI. The request runs on
    /// a worker thread; the outcome comes back over the channel and is folded
    /// into the status on a later frame.
    pub fn import_trades(&mut self, path: PathBuf) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string) else {
            eprintln!("Error while staging trades file: {}", path.display());
            return;
        };

        let size_bytes = std::fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0);
        println!("File is set: {name}");
        self.state.staged = Some(StagedCsv { name, size_bytes });
        self.state.is_uploading = true;

        let importer = TradeImporter::new(&self.config);
        let (sender, receiver) = mpsc::channel();
        self.state.outcome_receiver = Some(receiver);

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let outcome = importer.upload(&path).await;
                sender.send(outcome).unwrap_or_default();
            });
        });
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let Some(receiver) = &self.state.outcome_receiver else {
            return;
        };

        match receiver.try_recv() {
            Ok(outcome) => {
                match &outcome {
                    Ok(receipt) => {
                        println!(
                            "Import accepted for {}, response: {}",
                            receipt.file_name, receipt.body
                        );
                    }
                    Err(err) => eprintln!("Import failed: {err}"),
                }
                self.state.apply_outcome(outcome);
                ctx.request_repaint();
            }
            Err(mpsc::TryRecvError::Empty) => {
                // Keep frames coming while the upload is outstanding.
                ctx.request_repaint();
            }
            Err(mpsc::TryRecvError::Disconnected) => {
                self.state.is_uploading = false;
                self.state.outcome_receiver = None;
            }
        }
    }
}

impl App for JournalDashboard {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
