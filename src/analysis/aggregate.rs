use std::collections::{
    BTreeMap,
    HashMap,
};

use serde::Serialize;

use super::units::NormalizedEvent;
use crate::core::{
    DisfluencyCategory,
    DisfluencyEvent,
};

/// Whole-set aggregate for one disfluency category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub total: u64,
    pub count: usize,
    /// None when the record set is empty.
    pub mean: Option<f64>,
}

/// Per-category total and mean across the whole record set, emitted in the
/// canonical category order.
pub fn category_summaries(
    events: &[DisfluencyEvent],
) -> Vec<(DisfluencyCategory, CategorySummary)> {
    let count = events.len();

    DisfluencyCategory::ALL
        .iter()
        .map(|category| {
            let total: u64 = events.iter().map(|e| e.count(*category) as u64).sum();
            let mean = (count > 0).then(|| total as f64 / count as f64);
            (*category, CategorySummary { total, count, mean })
        })
        .collect()
}

/// Sum and row count for one group. Groups only exist for keys observed in
/// the data, so `count` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupStats {
    pub total: u64,
    pub count: usize,
}

impl GroupStats {
    pub fn mean(&self) -> f64 {
        self.total as f64 / self.count as f64
    }
}

/// Groups events by an arbitrary key and accumulates each group's summed row
/// totals and row count. The BTreeMap keeps keys in ascending order, so the
/// emitted grouping is deterministic for identical input.
pub fn group_stats<K, F>(events: &[NormalizedEvent], key: F) -> BTreeMap<K, GroupStats>
where
    K: Ord,
    F: Fn(&NormalizedEvent) -> K,
{
    let mut groups: BTreeMap<K, GroupStats> = BTreeMap::new();

    for event in events {
        let stats = groups.entry(key(event)).or_insert(GroupStats { total: 0, count: 0 });
        stats.total += event.total as u64;
        stats.count += 1;
    }

    groups
}

/// Occurrence counts for a categorical column, sorted count-descending with
/// ties broken by label so repeated runs agree.
pub fn value_counts<'a, I>(values: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut rows: Vec<(String, usize)> =
        counts.into_iter().map(|(label, count)| (label.to_string(), count)).collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(prolongation: u32, block: u32, interjection: u32) -> DisfluencyEvent {
        DisfluencyEvent {
            show: "A".to_string(),
            start: 0,
            stop: 0,
            prolongation,
            block,
            sound_rep: 0,
            word_rep: 0,
            interjection,
            natural_pause: 0,
        }
    }

    fn normalized(show: &str, minute_bin: u64, total: u32) -> NormalizedEvent {
        NormalizedEvent {
            show: show.to_string(),
            start: minute_bin as f64 * 60.0,
            stop: minute_bin as f64 * 60.0,
            minute_bin,
            total,
        }
    }

    #[test]
    fn category_totals_match_column_sums() {
        let events = vec![event(1, 0, 2), event(0, 3, 1), event(2, 1, 0)];
        let summaries = category_summaries(&events);

        let lookup = |category: DisfluencyCategory| {
            summaries.iter().find(|(c, _)| *c == category).map(|(_, s)| s.clone()).unwrap()
        };

        let prolongation = lookup(DisfluencyCategory::Prolongation);
        assert_eq!(prolongation.total, 3);
        assert_eq!(prolongation.mean, Some(1.0));

        let block = lookup(DisfluencyCategory::Block);
        assert_eq!(block.total, 4);

        let interjection = lookup(DisfluencyCategory::Interjection);
        assert_eq!(interjection.total, 3);
        assert_eq!(interjection.mean, Some(1.0));

        // Columns with no occurrences still appear, totaled at zero.
        assert_eq!(lookup(DisfluencyCategory::WordRep).total, 0);
        assert_eq!(summaries.len(), DisfluencyCategory::ALL.len());
    }

    #[test]
    fn empty_record_set_has_undefined_means() {
        let summaries = category_summaries(&[]);
        assert!(summaries.iter().all(|(_, s)| s.total == 0 && s.mean.is_none()));
    }

    #[test]
    fn summaries_keep_canonical_column_order() {
        let order: Vec<DisfluencyCategory> =
            category_summaries(&[event(0, 0, 0)]).into_iter().map(|(c, _)| c).collect();
        assert_eq!(order, DisfluencyCategory::ALL.to_vec());
    }

    #[test]
    fn compound_key_yields_only_observed_groups() {
        // Shows {A, B}, bins {0, 1}, but (B, 1) never occurs.
        let events = vec![
            normalized("A", 0, 2),
            normalized("A", 1, 4),
            normalized("B", 0, 1),
            normalized("A", 0, 3),
        ];

        let groups = group_stats(&events, |e| (e.show.clone(), e.minute_bin));

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[&("A".to_string(), 0)], GroupStats { total: 5, count: 2 });
        assert_eq!(groups[&("A".to_string(), 1)], GroupStats { total: 4, count: 1 });
        assert_eq!(groups[&("B".to_string(), 0)], GroupStats { total: 1, count: 1 });
        assert!(!groups.contains_key(&("B".to_string(), 1)));
    }

    #[test]
    fn groups_are_emitted_in_ascending_key_order() {
        let events = vec![normalized("A", 7, 1), normalized("A", 0, 1), normalized("A", 3, 1)];
        let bins: Vec<u64> = group_stats(&events, |e| e.minute_bin).into_keys().collect();
        assert_eq!(bins, vec![0, 3, 7]);
    }

    #[test]
    fn value_counts_sort_by_count_then_label() {
        let labels = ["S", "I", "S", "TH", "I", "S", "M"];
        let rows = value_counts(labels.iter().copied());

        assert_eq!(rows, vec![
            ("S".to_string(), 3),
            ("I".to_string(), 2),
            ("M".to_string(), 1),
            ("TH".to_string(), 1),
        ]);
    }
}
