pub mod aggregate;
pub mod kpi;
pub mod normalize;
pub mod units;
pub mod views;

pub use aggregate::{ CategorySummary, GroupStats };
pub use kpi::ClipKpis;
pub use units::NormalizedEvent;
