use std::collections::BTreeMap;

use super::{
    aggregate::group_stats,
    units::NormalizedEvent,
};

/// Divides grouped totals by grouped row counts over the key intersection.
/// A key present in only one input is dropped, not zero-filled; this is an
/// alignment join, and both maps are expected to come from the same grouping
/// pass.
pub fn align_rates<K: Ord + Clone>(
    totals: &BTreeMap<K, u64>,
    counts: &BTreeMap<K, usize>,
) -> BTreeMap<K, f64> {
    totals
        .iter()
        .filter_map(|(key, total)| {
            counts
                .get(key)
                .filter(|count| **count > 0)
                .map(|count| (key.clone(), *total as f64 / *count as f64))
        })
        .collect()
}

/// Average number of disfluencies per row for each minute bin, correcting
/// for bins holding different numbers of underlying clips.
pub fn minute_rates(events: &[NormalizedEvent]) -> BTreeMap<u64, f64> {
    let groups = group_stats(events, |e| e.minute_bin);
    let totals = groups.iter().map(|(k, s)| (*k, s.total)).collect();
    let counts = groups.iter().map(|(k, s)| (*k, s.count)).collect();
    align_rates(&totals, &counts)
}

/// Per-(show, minute bin) average disfluency rate. Only combinations present
/// in the data appear.
pub fn show_minute_rates(events: &[NormalizedEvent]) -> BTreeMap<(String, u64), f64> {
    let groups = group_stats(events, |e| (e.show.clone(), e.minute_bin));
    let totals = groups.iter().map(|(k, s)| (k.clone(), s.total)).collect();
    let counts = groups.iter().map(|(k, s)| (k.clone(), s.count)).collect();
    align_rates(&totals, &counts)
}

/// Extracts one show's ordered (bin, rate) series from the compound-key map.
pub fn show_series(rates: &BTreeMap<(String, u64), f64>, show: &str) -> Vec<(u64, f64)> {
    rates
        .iter()
        .filter(|((s, _), _)| s == show)
        .map(|((_, bin), rate)| (*bin, *rate))
        .collect()
}
