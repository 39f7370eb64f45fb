//! Aggregation over a task snapshot
//!
//! Every function here is a pure computation over `&[Task]` and an explicit
//! reference date. Nothing reads the clock and no reference to the input is
//! retained in the result.

use crate::task::{Priority, Task};
use chrono::{Days, NaiveDate};
use std::collections::HashMap;

/// Number of days after the reference date still counted as upcoming
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Rounded percentage of `part` over `whole`, half-up, `0` when `whole` is zero
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part * 200 + whole) / (whole * 2)) as u32
}

/// Total and completed counts for one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub total: usize,
    pub completed: usize,
}

impl Breakdown {
    fn record(&mut self, completed: bool) {
        self.total += 1;
        if completed {
            self.completed += 1;
        }
    }

    pub fn pending(&self) -> usize {
        self.total - self.completed
    }

    pub fn completion_rate(&self) -> u32 {
        percentage(self.completed, self.total)
    }
}

/// Per-priority counts; all three buckets always exist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityBreakdown {
    pub high: Breakdown,
    pub medium: Breakdown,
    pub low: Breakdown,
}

impl PriorityBreakdown {
    /// Bucket for a priority; `None` for unknown priorities
    pub fn get(&self, priority: &Priority) -> Option<&Breakdown> {
        match priority {
            Priority::High => Some(&self.high),
            Priority::Medium => Some(&self.medium),
            Priority::Low => Some(&self.low),
            Priority::Unknown(_) => None,
        }
    }

    fn get_mut(&mut self, priority: &Priority) -> Option<&mut Breakdown> {
        match priority {
            Priority::High => Some(&mut self.high),
            Priority::Medium => Some(&mut self.medium),
            Priority::Low => Some(&mut self.low),
            Priority::Unknown(_) => None,
        }
    }

    /// Buckets in display order (high, medium, low)
    pub fn iter(&self) -> impl Iterator<Item = (Priority, Breakdown)> + '_ {
        Priority::KNOWN
            .into_iter()
            .filter_map(|p| self.get(&p).copied().map(|b| (p, b)))
    }
}

/// Summary statistics for a task collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Rounded percentage of completed tasks, `0` for an empty collection
    pub completion_rate: u32,
    pub priority_breakdown: PriorityBreakdown,
    /// Categories in first-encounter order
    pub category_breakdown: Vec<(String, Breakdown)>,
    pub overdue_count: usize,
    pub upcoming_count: usize,
}

impl Statistics {
    /// Aggregate a task snapshot against a single reference date
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let horizon = today
            .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);

        let mut completed = 0;
        let mut priority_breakdown = PriorityBreakdown::default();
        let mut category_breakdown: Vec<(String, Breakdown)> = Vec::new();
        let mut category_index: HashMap<&str, usize> = HashMap::new();
        let mut overdue_count = 0;
        let mut upcoming_count = 0;
        let mut unknown_priority = 0;

        for task in tasks {
            if task.completed {
                completed += 1;
            }

            match priority_breakdown.get_mut(&task.priority) {
                Some(bucket) => bucket.record(task.completed),
                None => unknown_priority += 1,
            }

            let idx = *category_index
                .entry(task.category.as_str())
                .or_insert_with(|| {
                    category_breakdown.push((task.category.clone(), Breakdown::default()));
                    category_breakdown.len() - 1
                });
            category_breakdown[idx].1.record(task.completed);

            if task.is_overdue(today) {
                overdue_count += 1;
            } else if task.is_due_between(today, horizon) {
                upcoming_count += 1;
            }
        }

        if unknown_priority > 0 {
            tracing::debug!(
                unknown_priority,
                "tasks with an unknown priority excluded from priority breakdown"
            );
        }

        let total = tasks.len();
        Self {
            total,
            completed,
            pending: total - completed,
            completion_rate: percentage(completed, total),
            priority_breakdown,
            category_breakdown,
            overdue_count,
            upcoming_count,
        }
    }

    /// Incomplete high-priority tasks
    pub fn high_priority_pending(&self) -> usize {
        self.priority_breakdown.high.pending()
    }

    pub fn category(&self, name: &str) -> Option<&Breakdown> {
        self.category_breakdown
            .iter()
            .find(|(c, _)| c == name)
            .map(|(_, b)| b)
    }
}

/// Home screen summary cards and recent task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary<'a> {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Incomplete high-priority tasks
    pub urgent: usize,
    /// Leading tasks of the collection (most recent first by store convention)
    pub recent: Vec<&'a Task>,
}

impl<'a> DashboardSummary<'a> {
    pub fn compute(tasks: &'a [Task], recent_limit: usize) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        let urgent = tasks
            .iter()
            .filter(|t| t.priority == Priority::High && !t.completed)
            .count();
        Self {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
            urgent,
            recent: tasks.iter().take(recent_limit).collect(),
        }
    }
}
