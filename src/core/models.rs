use serde::Serialize;

/// The six disfluency categories annotated in the event-labeled datasets,
/// in source column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum DisfluencyCategory {
    Prolongation,
    Block,
    SoundRep,
    WordRep,
    Interjection,
    NaturalPause,
}

impl DisfluencyCategory {
    pub const ALL: [DisfluencyCategory; 6] = [
        DisfluencyCategory::Prolongation,
        DisfluencyCategory::Block,
        DisfluencyCategory::SoundRep,
        DisfluencyCategory::WordRep,
        DisfluencyCategory::Interjection,
        DisfluencyCategory::NaturalPause,
    ];

    /// Exact column header in the source files.
    pub fn label(&self) -> &'static str {
        match self {
            DisfluencyCategory::Prolongation => "Prolongation",
            DisfluencyCategory::Block => "Block",
            DisfluencyCategory::SoundRep => "SoundRep",
            DisfluencyCategory::WordRep => "WordRep",
            DisfluencyCategory::Interjection => "Interjection",
            DisfluencyCategory::NaturalPause => "NaturalPause",
        }
    }
}

/// One labeled disfluency occurrence from the event-labeled datasets
/// (FluencyBank / SEP-28k style). Timestamps are raw sample counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisfluencyEvent {
    pub show: String,       // Podcast show or dataset origin
    pub start: u64,         // Sample count, start <= stop
    pub stop: u64,
    pub prolongation: u32,  // Annotator counts per category
    pub block: u32,
    pub sound_rep: u32,
    pub word_rep: u32,
    pub interjection: u32,
    pub natural_pause: u32,
}

impl DisfluencyEvent {
    pub fn count(&self, category: DisfluencyCategory) -> u32 {
        match category {
            DisfluencyCategory::Prolongation => self.prolongation,
            DisfluencyCategory::Block => self.block,
            DisfluencyCategory::SoundRep => self.sound_rep,
            DisfluencyCategory::WordRep => self.word_rep,
            DisfluencyCategory::Interjection => self.interjection,
            DisfluencyCategory::NaturalPause => self.natural_pause,
        }
    }

    /// Row-wise total across all six categories.
    pub fn total_disfluencies(&self) -> u32 {
        DisfluencyCategory::ALL.iter().map(|c| self.count(*c)).sum()
    }
}

/// One manually transcribed stuttering instance from an interview clip.
/// Timestamps are already second offsets within the clip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LetterTranscriptEvent {
    pub clip_id: u32,
    pub start: f64,              // Seconds, start <= stop
    pub stop: f64,
    pub disfluency_type: String, // e.g. "Block", "Repetition"
    pub age_range: String,       // Descriptive metadata only
    pub letters: String,         // Letter(s)/sound the event occurred on
    pub link: String,            // Descriptive metadata only
}

impl LetterTranscriptEvent {
    pub fn duration(&self) -> f64 {
        self.stop - self.start
    }
}
