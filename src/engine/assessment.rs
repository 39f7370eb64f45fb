//! Qualitative labels and recommendation triggers derived from `Statistics`

use super::stats::Statistics;

/// Completion rate at or above which productivity is high
pub const HIGH_PRODUCTIVITY_RATE: u32 = 80;
/// Completion rate at or above which productivity is medium
pub const MEDIUM_PRODUCTIVITY_RATE: u32 = 60;
/// Completion rate below which the completion recommendation fires
pub const RECOMMENDED_COMPLETION_RATE: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Productivity {
    High,
    Medium,
    Low,
}

impl Productivity {
    pub fn from_rate(completion_rate: u32) -> Self {
        if completion_rate >= HIGH_PRODUCTIVITY_RATE {
            Productivity::High
        } else if completion_rate >= MEDIUM_PRODUCTIVITY_RATE {
            Productivity::Medium
        } else {
            Productivity::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineManagement {
    Good,
    Fair,
    Poor,
}

impl DeadlineManagement {
    pub fn from_overdue(overdue_count: usize) -> Self {
        match overdue_count {
            0 => DeadlineManagement::Good,
            1..=2 => DeadlineManagement::Fair,
            _ => DeadlineManagement::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Light,
    Moderate,
    Heavy,
}

impl Workload {
    pub fn from_pending(pending: usize) -> Self {
        match pending {
            0..=5 => Workload::Light,
            6..=10 => Workload::Moderate,
            _ => Workload::Heavy,
        }
    }
}

/// Independent recommendation triggers; any subset may fire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Recommendations {
    /// Completion rate is below the recommended rate
    pub improve_completion: bool,
    /// At least one task is overdue
    pub review_overdue: bool,
    /// At least one high-priority task is incomplete
    pub focus_high_priority: bool,
}

impl Recommendations {
    pub fn any(&self) -> bool {
        self.improve_completion || self.review_overdue || self.focus_high_priority
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub productivity: Productivity,
    pub deadlines: DeadlineManagement,
    pub workload: Workload,
    pub recommendations: Recommendations,
}

impl Statistics {
    pub fn assess(&self) -> Assessment {
        Assessment {
            productivity: Productivity::from_rate(self.completion_rate),
            deadlines: DeadlineManagement::from_overdue(self.overdue_count),
            workload: Workload::from_pending(self.pending),
            recommendations: Recommendations {
                improve_completion: self.completion_rate < RECOMMENDED_COMPLETION_RATE,
                review_overdue: self.overdue_count > 0,
                focus_high_priority: self.high_priority_pending() > 0,
            },
        }
    }
}
