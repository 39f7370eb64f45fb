//! Formatting helper functions for the task dashboard server
//!
//! Turns tasks, statistics and settings into the text returned by tools.

use crate::engine::{DashboardSummary, Statistics};
use crate::labels;
use crate::settings::{Language, UserSettings};
use crate::task::Task;
use chrono::NaiveDate;

fn format_task_line(task: &Task, language: Language) -> String {
    let mut line = format!(
        "- [{}] {} {} (priority: {} [{}], category: {})\n",
        task.id,
        if task.completed { "[x]" } else { "[ ]" },
        task.title,
        labels::priority_label(&task.priority, language),
        labels::priority_color(&task.priority),
        task.category
    );
    if let Some(ref d) = task.description {
        line.push_str(&format!("  Description: {}\n", d));
    }
    if let Some(ref date) = task.due_date {
        line.push_str(&format!("  Due: {}\n", date));
    }
    line.push_str(&format!(
        "  Status: {}\n",
        labels::status_label(task.completed, language)
    ));
    line.push_str(&format!("  Created: {}\n", task.created_at));
    line
}

/// Format a task list into a display string
///
/// # Arguments
/// * `tasks` - Tasks to format, in display order
/// * `total` - Size of the unfiltered collection
/// * `language` - Label language
pub fn format_tasks(tasks: &[&Task], total: usize, language: Language) -> String {
    if tasks.is_empty() {
        return format!("No tasks found (0 of {})", total);
    }

    let mut result = format!("Found {} of {} task(s):\n\n", tasks.len(), total);
    for task in tasks {
        result.push_str(&format_task_line(task, language));
    }
    result
}

/// Format a single task after a create or update
pub fn format_task(task: &Task, language: Language) -> String {
    format_task_line(task, language)
}

/// Format home screen summary cards and the recent task list
pub fn format_dashboard(summary: &DashboardSummary<'_>, language: Language) -> String {
    let mut result = String::from("Dashboard\n");
    result.push_str(&format!("  Total tasks: {}\n", summary.total));
    result.push_str(&format!("  Completed: {}\n", summary.completed));
    result.push_str(&format!("  Pending: {}\n", summary.pending));
    result.push_str(&format!("  Urgent: {}\n", summary.urgent));

    result.push_str("\nRecent tasks:\n");
    if summary.recent.is_empty() {
        result.push_str("  (none)\n");
    }
    for task in &summary.recent {
        result.push_str(&format_task_line(task, language));
    }
    result
}

/// Format statistics, assessment labels and recommendations
///
/// # Arguments
/// * `stats` - Aggregated statistics
/// * `today` - Reference date the statistics were computed against
/// * `language` - Label language
pub fn format_statistics(stats: &Statistics, today: NaiveDate, language: Language) -> String {
    let assessment = stats.assess();

    let mut result = format!("Statistics (reference date: {})\n", today);
    result.push_str(&format!("  Completion rate: {}%\n", stats.completion_rate));
    result.push_str(&format!(
        "  Total: {}, completed: {}, pending: {}\n",
        stats.total, stats.completed, stats.pending
    ));
    result.push_str(&format!("  Overdue: {}\n", stats.overdue_count));
    result.push_str(&format!("  Upcoming (7 days): {}\n", stats.upcoming_count));

    result.push_str("\nBy priority:\n");
    for (priority, bucket) in stats.priority_breakdown.iter() {
        result.push_str(&format!(
            "  {} [{}]: {}/{} ({}%)\n",
            labels::priority_label(&priority, language),
            labels::priority_color(&priority),
            bucket.completed,
            bucket.total,
            bucket.completion_rate()
        ));
    }

    result.push_str("\nBy category:\n");
    if stats.category_breakdown.is_empty() {
        result.push_str("  (none)\n");
    }
    for (index, (category, bucket)) in stats.category_breakdown.iter().enumerate() {
        result.push_str(&format!(
            "  {} [{}]: {}/{} ({}%)\n",
            category,
            labels::category_color(index),
            bucket.completed,
            bucket.total,
            bucket.completion_rate()
        ));
    }

    result.push_str("\nAssessment:\n");
    result.push_str(&format!(
        "  Productivity: {}\n",
        labels::productivity_label(assessment.productivity, language)
    ));
    result.push_str(&format!(
        "  Deadline management: {}\n",
        labels::deadline_label(assessment.deadlines, language)
    ));
    result.push_str(&format!(
        "  Workload: {}\n",
        labels::workload_label(assessment.workload, language)
    ));

    let recommendations = assessment.recommendations;
    if recommendations.any() {
        result.push_str("\nRecommendations:\n");
        if recommendations.improve_completion {
            result.push_str(&format!(
                "  - Completion rate is {}%. Focus on fewer tasks at a time.\n",
                stats.completion_rate
            ));
        }
        if recommendations.review_overdue {
            result.push_str(&format!(
                "  - {} overdue task(s). Review due dates and prioritize them.\n",
                stats.overdue_count
            ));
        }
        if recommendations.focus_high_priority {
            result.push_str(&format!(
                "  - {} high-priority task(s) pending. Focus on them first.\n",
                stats.high_priority_pending()
            ));
        }
    }

    result
}

/// Format the settings panel
pub fn format_settings(settings: &UserSettings, has_changes: bool) -> String {
    let mut result = String::from("Settings");
    if has_changes {
        result.push_str(" (unsaved changes)");
    }
    result.push('\n');

    result.push_str("[profile]\n");
    result.push_str(&format!("  name: {}\n", settings.name));
    result.push_str(&format!("  email: {}\n", settings.email));

    let n = &settings.notifications;
    result.push_str("[notifications]\n");
    result.push_str(&format!("  email: {}\n", n.email));
    result.push_str(&format!("  push: {}\n", n.push));
    result.push_str(&format!("  deadlines: {}\n", n.deadlines));
    result.push_str(&format!("  daily_digest: {}\n", n.daily_digest));

    let p = &settings.preferences;
    result.push_str("[preferences]\n");
    result.push_str(&format!("  theme: {:?}\n", p.theme));
    result.push_str(&format!("  language: {:?}\n", p.language));
    result.push_str(&format!("  timezone: {}\n", p.timezone));
    result.push_str(&format!("  date_format: {}\n", p.date_format));

    let pr = &settings.privacy;
    result.push_str("[privacy]\n");
    result.push_str(&format!("  profile_public: {}\n", pr.profile_public));
    result.push_str(&format!("  analytics_tracking: {}\n", pr.analytics_tracking));
    result.push_str(&format!("  data_sharing: {}\n", pr.data_sharing));

    result
}
