use stutterlens::{
    analysis::{
        kpi::{
            clip_ids,
            clip_kpis,
            filter_clip,
        },
        units::normalize_events,
        views,
    },
    DashboardConfig,
    DatasetStore,
    StutterlensError,
};

/// Headless rendition of the dashboard: loads the configured datasets and
/// prints every view the presentation layer would chart.
fn main() {
    let config = DashboardConfig::load_or_default();
    let mut store = DatasetStore::new(config);

    if let Err(e) = run(&mut store) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(store: &mut DatasetStore) -> Result<(), StutterlensError> {
    let sample_rate = store.sample_rate();
    let events = store.events()?.to_vec();
    let transcript = store.transcript()?.to_vec();

    println!("\n=== Stuttering Events Analysis ===");
    for row in views::category_overview(&events) {
        match row.mean {
            Some(mean) => println!("{:<14} total {:>6}  mean {:.3}", row.label, row.total, mean),
            None => println!("{:<14} total {:>6}  mean n/a", row.label, row.total),
        }
    }

    let normalized = normalize_events(&events, sample_rate);

    println!("\n=== Average Disfluencies per Minute ===");
    for point in views::minute_trend(&normalized).iter().take(15) {
        println!("minute {:>3}: {:.3}", point.minute, point.average);
    }

    println!("\n=== Per-Show Trends ===");
    for series in views::show_trends(&normalized) {
        println!("{} ({} bins)", series.show, series.points.len());
    }

    println!("\n=== Transcript Stuttering Analysis ===");
    let clips = clip_ids(&transcript);
    let Some(selected_clip) = clips.first().copied() else {
        println!("Transcript dataset is empty.");
        return Ok(());
    };
    println!("Clips: {:?} (showing clip {})", clips, selected_clip);

    let kpis = clip_kpis(&transcript, selected_clip);
    println!("Total people: {}", kpis.total_people);
    println!("Average stutter duration: {}", format_seconds(kpis.average_duration));
    println!("Max stutter duration (clip {}): {}", selected_clip, format_seconds(kpis.max_duration));
    match kpis.stutter_rate_per_minute {
        Some(rate) => println!("Stutter rate per minute (clip {}): {:.2}", selected_clip, rate),
        None => println!("Stutter rate per minute (clip {}): undefined", selected_clip),
    }

    println!("\nStuttered letters (all clips):");
    for row in views::letter_counts(&transcript).iter().take(10) {
        println!("  {:<6} {}", row.label, row.count);
    }

    println!("\nDisfluency types (clip {}):", selected_clip);
    for row in views::clip_type_counts(&transcript, selected_clip) {
        println!("  {:<14} {}", row.label, row.count);
    }

    println!("\nTrend (clip {}, 10 bins):", selected_clip);
    for point in views::clip_trend(&transcript, selected_clip, 10) {
        println!("  {:>8.2}s  {}", point.midpoint, point.count);
    }

    let rows = filter_clip(&transcript, selected_clip);
    println!("\n{} transcript rows for clip {}.", rows.len(), selected_clip);

    Ok(())
}

fn format_seconds(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2} sec", v),
        None => "undefined".to_string(),
    }
}
