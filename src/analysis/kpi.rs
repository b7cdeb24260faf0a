use std::collections::BTreeSet;

use serde::Serialize;

use super::units::transcript_durations;
use crate::core::LetterTranscriptEvent;

/// Scalar metrics for the transcript page. `total_people` and
/// `average_duration` cover the whole dataset; the other two are scoped to
/// the selected clip. `None` marks an undefined value (empty selection or
/// zero-duration span) so NaN/infinity never reach the display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipKpis {
    pub clip_id: u32,
    pub total_people: usize,
    pub average_duration: Option<f64>,
    pub max_duration: Option<f64>,
    pub stutter_rate_per_minute: Option<f64>,
}

/// Sorted distinct clip identifiers, for the clip picker.
pub fn clip_ids(transcript: &[LetterTranscriptEvent]) -> Vec<u32> {
    let ids: BTreeSet<u32> = transcript.iter().map(|e| e.clip_id).collect();
    ids.into_iter().collect()
}

/// The selected clip's rows, cloned for tabular display. An unknown clip id
/// yields an empty set, not an error.
pub fn filter_clip(
    transcript: &[LetterTranscriptEvent],
    clip_id: u32,
) -> Vec<LetterTranscriptEvent> {
    transcript.iter().filter(|e| e.clip_id == clip_id).cloned().collect()
}

pub fn clip_kpis(transcript: &[LetterTranscriptEvent], clip_id: u32) -> ClipKpis {
    let total_people = clip_ids(transcript).len();

    let durations = transcript_durations(transcript);
    let average_duration = if durations.is_empty() {
        None
    } else {
        Some(durations.iter().sum::<f64>() / durations.len() as f64)
    };

    let clip_rows: Vec<&LetterTranscriptEvent> =
        transcript.iter().filter(|e| e.clip_id == clip_id).collect();

    let max_duration = clip_rows.iter().map(|e| e.duration()).reduce(f64::max);

    let stutter_rate_per_minute = clip_span_minutes(&clip_rows)
        .filter(|minutes| *minutes > 0.0)
        .map(|minutes| clip_rows.len() as f64 / minutes);

    ClipKpis { clip_id, total_people, average_duration, max_duration, stutter_rate_per_minute }
}

/// (max stop - min start) / 60 over the clip's rows; None when the clip is
/// empty.
fn clip_span_minutes(clip_rows: &[&LetterTranscriptEvent]) -> Option<f64> {
    let min_start = clip_rows.iter().map(|e| e.start).reduce(f64::min)?;
    let max_stop = clip_rows.iter().map(|e| e.stop).reduce(f64::max)?;
    Some((max_stop - min_start) / 60.0)
}
