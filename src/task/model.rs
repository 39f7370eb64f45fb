use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Task priority
///
/// Only `High`, `Medium` and `Low` are accepted from user input.
/// `Unknown` carries an unrecognized value read from a seed record so that
/// the task is still counted instead of being dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
    Unknown(String),
}

impl Priority {
    /// The three valid priorities, in display order
    pub const KNOWN: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Lenient conversion used for seed records
    pub fn from_raw(value: &str) -> Self {
        value
            .parse()
            .unwrap_or_else(|_| Priority::Unknown(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Priority::Unknown(_))
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: high, medium, low",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user-managed to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier, immutable after creation
    pub id: String,
    /// Non-empty display text
    pub title: String,
    /// Optional free text
    pub description: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    /// Free-text category; never empty once stored
    pub category: String,
    /// Optional due date (format: YYYY-MM-DD)
    pub due_date: Option<NaiveDate>,
    /// Date when the task was created
    pub created_at: NaiveDate,
}

impl Task {
    /// Whether the task is incomplete and due strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    /// Whether the task is incomplete and due within `[today, horizon]`
    pub fn is_due_between(&self, today: NaiveDate, horizon: NaiveDate) -> bool {
        !self.completed
            && self
                .due_date
                .is_some_and(|due| today <= due && due <= horizon)
    }
}

/// Input for creating a task; the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub category: Option<String>,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority: Priority::Medium,
            category: None,
            due_date: None,
        }
    }
}

/// Partial update of a task
///
/// Outer `None` leaves a field untouched. For the optional fields an inner
/// `None` clears the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self == &TaskPatch::default()
    }
}
