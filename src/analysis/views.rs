use std::collections::BTreeSet;

use serde::Serialize;

use super::{
    aggregate::{
        category_summaries,
        value_counts,
    },
    kpi::filter_clip,
    normalize::{
        minute_rates,
        show_minute_rates,
        show_series,
    },
    units::NormalizedEvent,
};
use crate::core::{
    DisfluencyEvent,
    LetterTranscriptEvent,
};

/// One bar of the dual-axis events chart: total on the left axis, mean on
/// the right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub label: &'static str,
    pub total: u64,
    pub mean: Option<f64>,
}

pub fn category_overview(events: &[DisfluencyEvent]) -> Vec<CategoryRow> {
    category_summaries(events)
        .into_iter()
        .map(|(category, summary)| CategoryRow {
            label: category.label(),
            total: summary.total,
            mean: summary.mean,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub minute: u64,
    pub average: f64,
}

/// Ordered per-minute average-disfluency series across all shows.
pub fn minute_trend(events: &[NormalizedEvent]) -> Vec<TrendPoint> {
    minute_rates(events)
        .into_iter()
        .map(|(minute, average)| TrendPoint { minute, average })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowSeries {
    pub show: String,
    pub points: Vec<TrendPoint>,
}

/// One ordered series per show, shows ascending by name. Feeding a single
/// element of this to the chart is the per-show dropdown filter.
pub fn show_trends(events: &[NormalizedEvent]) -> Vec<ShowSeries> {
    let rates = show_minute_rates(events);
    let shows: BTreeSet<&String> = rates.keys().map(|(show, _)| show).collect();

    shows
        .into_iter()
        .map(|show| ShowSeries {
            show: show.clone(),
            points: show_series(&rates, show)
                .into_iter()
                .map(|(minute, average)| TrendPoint { minute, average })
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountRow {
    pub label: String,
    pub count: usize,
}

fn count_rows(values: impl IntoIterator<Item = (String, usize)>) -> Vec<CountRow> {
    values.into_iter().map(|(label, count)| CountRow { label, count }).collect()
}

/// Stuttered-letter counts across every clip.
pub fn letter_counts(transcript: &[LetterTranscriptEvent]) -> Vec<CountRow> {
    count_rows(value_counts(transcript.iter().map(|e| e.letters.as_str())))
}

/// Stuttered-letter counts for one clip.
pub fn clip_letter_counts(transcript: &[LetterTranscriptEvent], clip_id: u32) -> Vec<CountRow> {
    let rows = filter_clip(transcript, clip_id);
    count_rows(value_counts(rows.iter().map(|e| e.letters.as_str())))
}

/// Disfluency-type counts for one clip.
pub fn clip_type_counts(transcript: &[LetterTranscriptEvent], clip_id: u32) -> Vec<CountRow> {
    let rows = filter_clip(transcript, clip_id);
    count_rows(value_counts(rows.iter().map(|e| e.disfluency_type.as_str())))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinPoint {
    pub midpoint: f64, // Seconds into the clip
    pub count: usize,
}

/// Buckets one clip's start offsets into `bins` equal-width intervals over
/// the observed range and counts events per interval. Empty intervals are
/// emitted with count 0 so the line chart keeps its spacing; a clip whose
/// events all share one offset collapses to a single point.
pub fn clip_trend(
    transcript: &[LetterTranscriptEvent],
    clip_id: u32,
    bins: usize,
) -> Vec<BinPoint> {
    let starts: Vec<f64> =
        transcript.iter().filter(|e| e.clip_id == clip_id).map(|e| e.start).collect();
    if starts.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = starts.iter().copied().fold(f64::INFINITY, f64::min);
    let max = starts.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if span == 0.0 {
        return vec![BinPoint { midpoint: min, count: starts.len() }];
    }

    let width = span / bins as f64;
    let mut counts = vec![0usize; bins];
    for start in &starts {
        // The maximum offset falls on the right edge of the last interval.
        let index = (((start - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| BinPoint { midpoint: min + (i as f64 + 0.5) * width, count })
        .collect()
}
