use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};

use crate::persistence;

const CONFIG_FILE: &str = "dashboard_config.json";

/// Sample rate of the event-labeled recordings (samples per second).
pub const DEFAULT_SAMPLE_RATE: u32 = 16_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardConfig {
    /// Event-labeled sources, concatenated into one record set in order.
    pub label_sources: Vec<PathBuf>,
    /// Manually transcribed letter-level source.
    pub transcript_source: PathBuf,
    pub sample_rate: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            label_sources: vec![
                PathBuf::from("data/fluencybank_labels.csv"),
                PathBuf::from("data/SEP-28k_labels.csv"),
            ],
            transcript_source: PathBuf::from("data/letter_transcription.csv"),
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl DashboardConfig {
    pub fn load_or_default() -> Self {
        persistence::load_json_or_default(CONFIG_FILE)
    }

    pub fn save(&self) -> Result<(), crate::core::StutterlensError> {
        persistence::save_json(self, CONFIG_FILE)
    }
}
