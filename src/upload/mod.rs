mod error;
mod importer;
mod types;

pub use error::ImportError;
pub use importer::TradeImporter;
pub use types::{ImportOutcome, ImportReceipt, StagedCsv};
