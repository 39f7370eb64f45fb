//! Pure aggregation and filtering over task snapshots
//!
//! - `stats`: statistics, breakdowns and the dashboard summary
//! - `assessment`: qualitative labels and recommendation triggers
//! - `filter`: search/priority/status filtering of the task list

mod assessment;
mod filter;
mod stats;

pub use assessment::{Assessment, DeadlineManagement, Productivity, Recommendations, Workload};
pub use filter::{FilterCriteria, PriorityFilter, StatusFilter, filter_tasks};
pub use stats::{
    Breakdown, DashboardSummary, PriorityBreakdown, Statistics, UPCOMING_WINDOW_DAYS, percentage,
};
