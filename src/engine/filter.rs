//! Task list filtering
//!
//! Criteria are combined with logical AND. The result is a new sequence of
//! references in the original relative order; the input is never mutated.

use crate::task::{Priority, Task};
use std::str::FromStr;

/// Priority criterion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => &task.priority == p,
        }
    }
}

impl FromStr for PriorityFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(PriorityFilter::All);
        }
        s.parse::<Priority>().map(PriorityFilter::Only).map_err(|_| {
            format!(
                "Invalid priority filter '{}'. Valid options are: all, high, medium, low",
                s
            )
        })
    }
}

/// Completion-status criterion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => task.completed,
            StatusFilter::Pending => !task.completed,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "completed" => Ok(StatusFilter::Completed),
            "pending" => Ok(StatusFilter::Pending),
            _ => Err(format!(
                "Invalid status filter '{}'. Valid options are: all, completed, pending",
                s
            )),
        }
    }
}

/// The three independent filter criteria of the task list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against title and description
    pub search_term: String,
    pub priority: PriorityFilter,
    pub status: StatusFilter,
}

impl FilterCriteria {
    /// Whether the criteria select every task
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.priority == PriorityFilter::All
            && self.status == StatusFilter::All
    }
}

/// `needle` must already be lowercase
fn matches_search(task: &Task, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let title_matches = task.title.to_lowercase().contains(needle);

    let description_matches = task
        .description
        .as_ref()
        .map(|d| d.to_lowercase().contains(needle))
        .unwrap_or(false);

    title_matches || description_matches
}

/// Select the tasks matching all criteria, preserving order
pub fn filter_tasks<'a>(tasks: &'a [Task], criteria: &FilterCriteria) -> Vec<&'a Task> {
    let needle = criteria.search_term.to_lowercase();
    tasks
        .iter()
        .filter(|task| {
            matches_search(task, &needle)
                && criteria.priority.matches(task)
                && criteria.status.matches(task)
        })
        .collect()
}
