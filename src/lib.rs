pub mod analysis;
pub mod config;
pub mod core;
pub mod ingestion;
pub mod persistence;
pub mod store;

pub use analysis::{ ClipKpis, NormalizedEvent };
pub use config::DashboardConfig;
pub use core::{ DisfluencyCategory, DisfluencyEvent, LetterTranscriptEvent, StutterlensError };
pub use store::DatasetStore;
