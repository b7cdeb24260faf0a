use crate::core::{
    DisfluencyEvent,
    LetterTranscriptEvent,
};

pub const SECONDS_PER_MINUTE: u64 = 60;

/// An event-labeled row with timestamps rescaled from raw sample counts to
/// seconds, plus the derived whole-minute bin and row-wise disfluency total.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub show: String,
    pub start: f64,      // Seconds into the recording
    pub stop: f64,
    pub minute_bin: u64, // floor(start / 60), bin 0 is valid
    pub total: u32,      // Summed category counts for the row
}

pub fn samples_to_seconds(samples: u64, sample_rate: u32) -> f64 {
    samples as f64 / sample_rate as f64
}

pub fn seconds_to_minute_bin(seconds: f64) -> u64 {
    (seconds / SECONDS_PER_MINUTE as f64).floor() as u64
}

/// Single-step equivalent of samples -> seconds -> minute bin.
pub fn samples_to_minute_bin(samples: u64, sample_rate: u32) -> u64 {
    samples / (sample_rate as u64 * SECONDS_PER_MINUTE)
}

/// Rescales every event to seconds and tags it with its minute bin. The
/// input is untouched; zero-duration events are kept as zero-duration.
pub fn normalize_events(events: &[DisfluencyEvent], sample_rate: u32) -> Vec<NormalizedEvent> {
    events
        .iter()
        .map(|event| {
            let start = samples_to_seconds(event.start, sample_rate);
            NormalizedEvent {
                show: event.show.clone(),
                start,
                stop: samples_to_seconds(event.stop, sample_rate),
                minute_bin: seconds_to_minute_bin(start),
                total: event.total_disfluencies(),
            }
        })
        .collect()
}

/// Transcript timestamps are already seconds; normalization reduces each row
/// to its duration.
pub fn transcript_durations(events: &[LetterTranscriptEvent]) -> Vec<f64> {
    events.iter().map(|event| event.duration()).collect()
}
