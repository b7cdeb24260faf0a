use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
    time::SystemTime,
};

use crate::{
    config::DashboardConfig,
    core::{
        DisfluencyEvent,
        LetterTranscriptEvent,
        StutterlensError,
    },
    ingestion::{
        labels,
        transcript,
    },
};

/// Modification time plus length; enough to notice a rewritten source file
/// even when the filesystem's mtime granularity is coarse.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fingerprint {
    modified: Option<SystemTime>,
    len: u64,
}

fn fingerprint(path: &Path) -> Fingerprint {
    match fs::metadata(path) {
        Ok(meta) => Fingerprint { modified: meta.modified().ok(), len: meta.len() },
        Err(_) => Fingerprint { modified: None, len: 0 },
    }
}

struct Cached<T> {
    data: T,
    sources: Vec<(PathBuf, Fingerprint)>,
}

impl<T> Cached<T> {
    fn is_stale(&self) -> bool {
        self.sources.iter().any(|(path, fp)| fingerprint(path) != *fp)
    }
}

/// Load-once cache over the configured source files. Datasets are read on
/// first access and re-read only when a source file's fingerprint changes,
/// so every interaction after the first recomputes from memory.
pub struct DatasetStore {
    config: DashboardConfig,
    labels: Option<Cached<Vec<DisfluencyEvent>>>,
    transcript: Option<Cached<Vec<LetterTranscriptEvent>>>,
}

impl DatasetStore {
    pub fn new(config: DashboardConfig) -> Self {
        DatasetStore { config, labels: None, transcript: None }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }

    /// The concatenated event-labeled record set.
    pub fn events(&mut self) -> Result<&[DisfluencyEvent], StutterlensError> {
        let stale = self.labels.as_ref().map(|c| c.is_stale()).unwrap_or(true);
        if stale {
            let sources = self
                .config
                .label_sources
                .iter()
                .map(|path| (path.clone(), fingerprint(path)))
                .collect();
            let data = labels::read_all_labels(&self.config.label_sources)?;
            self.labels = Some(Cached { data, sources });
        }

        Ok(self.labels.as_ref().map(|c| c.data.as_slice()).unwrap_or(&[]))
    }

    /// The manually transcribed letter-level record set.
    pub fn transcript(&mut self) -> Result<&[LetterTranscriptEvent], StutterlensError> {
        let stale = self.transcript.as_ref().map(|c| c.is_stale()).unwrap_or(true);
        if stale {
            let path = &self.config.transcript_source;
            let sources = vec![(path.clone(), fingerprint(path))];
            let data = transcript::read_transcript(path)?;
            self.transcript = Some(Cached { data, sources });
        }

        Ok(self.transcript.as_ref().map(|c| c.data.as_slice()).unwrap_or(&[]))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const LABEL_HEADER: &str =
        "Show,Start,Stop,Prolongation,Block,SoundRep,WordRep,Interjection,NaturalPause\n";

    fn config_for(labels_path: &Path) -> DashboardConfig {
        DashboardConfig {
            label_sources: vec![labels_path.to_path_buf()],
            transcript_source: PathBuf::from("missing_transcript.csv"),
            sample_rate: 16_000,
        }
    }

    #[test]
    fn loads_once_then_serves_from_cache() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}A,0,16000,1,0,0,0,0,0\n", LABEL_HEADER).unwrap();
        file.flush().unwrap();

        let mut store = DatasetStore::new(config_for(file.path()));
        assert_eq!(store.events().unwrap().len(), 1);
        assert_eq!(store.events().unwrap().len(), 1);
    }

    #[test]
    fn reloads_when_a_source_file_changes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}A,0,16000,1,0,0,0,0,0\n", LABEL_HEADER).unwrap();
        file.flush().unwrap();

        let mut store = DatasetStore::new(config_for(file.path()));
        assert_eq!(store.events().unwrap().len(), 1);

        // Appending a row changes the file length, which flips the fingerprint.
        write!(file, "B,16000,32000,0,1,0,0,0,0\n").unwrap();
        file.flush().unwrap();

        assert_eq!(store.events().unwrap().len(), 2);
    }

    #[test]
    fn missing_source_surfaces_the_load_error() {
        let config = DashboardConfig {
            label_sources: vec![PathBuf::from("does_not_exist.csv")],
            transcript_source: PathBuf::from("also_missing.csv"),
            sample_rate: 16_000,
        };

        let mut store = DatasetStore::new(config);
        assert!(matches!(store.events(), Err(StutterlensError::FailedToLoadFile(_))));
        assert!(matches!(store.transcript(), Err(StutterlensError::FailedToLoadFile(_))));
    }
}
