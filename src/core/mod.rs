pub mod errors;
pub mod models;

pub use errors::StutterlensError;
pub use models::{ DisfluencyCategory, DisfluencyEvent, LetterTranscriptEvent };
