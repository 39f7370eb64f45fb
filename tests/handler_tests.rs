//! Tool handler tests: task lifecycle, listing, statistics and settings
mod common;

use common::{date, extract_id_from_response, get_seeded_handler, get_test_handler, test_today};
use task_dashboard::Priority;

const SEED_CONFIG: &str = r#"
recent_limit = 2

[settings.preferences]
language = "en"

[[tasks]]
id = "1"
title = "Write monthly report"
description = "Sales figures for management"
priority = "high"
category = "Work"
due_date = "2024-01-10"
created_at = "2024-01-05"

[[tasks]]
id = "2"
title = "Client presentation"
priority = "high"
category = "Work"
due_date = "2024-01-16"
completed = true

[[tasks]]
id = "3"
title = "Update documentation"
priority = "low"
category = "Docs"
due_date = "not-a-date"
"#;

#[tokio::test]
async fn test_add_task_prepends_with_defaults() {
    let handler = get_test_handler();

    let first = handler
        .handle_add_task("First".to_string(), None, None, None, None)
        .await
        .unwrap();
    let second = handler
        .handle_add_task(
            "Second".to_string(),
            Some("details".to_string()),
            Some("high".to_string()),
            Some("Work".to_string()),
            Some("2024-01-20".to_string()),
        )
        .await
        .unwrap();

    let first_id = extract_id_from_response(&first);
    let second_id = extract_id_from_response(&second);
    assert!(!first_id.is_empty());
    assert_ne!(first_id, second_id);

    let tasks = handler.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, second_id);
    assert_eq!(tasks[0].priority, Priority::High);
    assert_eq!(tasks[0].due_date, Some(date("2024-01-20")));
    assert_eq!(tasks[0].created_at, test_today());
    assert_eq!(tasks[1].id, first_id);
    assert_eq!(tasks[1].priority, Priority::Medium);
    assert_eq!(tasks[1].category, "Général");
    assert!(!tasks[1].completed);
}

#[tokio::test]
async fn test_add_task_rejects_invalid_input() {
    let handler = get_test_handler();

    let result = handler
        .handle_add_task("   ".to_string(), None, None, None, None)
        .await;
    assert!(result.is_err());

    let result = handler
        .handle_add_task("Task".to_string(), None, Some("urgent".to_string()), None, None)
        .await;
    assert!(result.is_err());

    let result = handler
        .handle_add_task("Task".to_string(), None, None, None, Some("15/01/2024".to_string()))
        .await;
    assert!(result.is_err());

    assert!(handler.tasks().is_empty());
}

#[tokio::test]
async fn test_update_task_fields_and_clear() {
    let handler = get_seeded_handler(SEED_CONFIG);

    let result = handler
        .handle_update_task(
            " 1 ".to_string(),
            Some("Write quarterly report".to_string()),
            Some(String::new()),
            Some("medium".to_string()),
            Some(String::new()),
            Some(String::new()),
        )
        .await;
    assert!(result.is_ok());

    let tasks = handler.tasks();
    let task = tasks.iter().find(|t| t.id == "1").unwrap();
    assert_eq!(task.title, "Write quarterly report");
    assert_eq!(task.description, None);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.category, "General");
    assert_eq!(task.due_date, None);
    assert_eq!(task.created_at, date("2024-01-05"));
}

#[tokio::test]
async fn test_update_task_errors() {
    let handler = get_seeded_handler(SEED_CONFIG);

    let result = handler
        .handle_update_task("missing".to_string(), Some("x".to_string()), None, None, None, None)
        .await;
    assert!(result.is_err());

    let result = handler
        .handle_update_task("1".to_string(), None, None, None, None, None)
        .await;
    assert!(result.is_err());

    let result = handler
        .handle_update_task("1".to_string(), Some("  ".to_string()), None, None, None, None)
        .await;
    assert!(result.is_err());
    assert_eq!(handler.tasks()[0].title, "Write monthly report");
}

#[tokio::test]
async fn test_toggle_and_delete() {
    let handler = get_seeded_handler(SEED_CONFIG);

    let result = handler.handle_toggle_task("3".to_string()).await.unwrap();
    assert!(result.contains("completed"));
    assert!(handler.tasks().iter().find(|t| t.id == "3").unwrap().completed);

    let result = handler.handle_toggle_task("3".to_string()).await.unwrap();
    assert!(result.contains("pending"));

    let result = handler.handle_delete_task("2".to_string()).await.unwrap();
    assert!(result.contains("Client presentation"));
    assert_eq!(handler.tasks().len(), 2);

    assert!(handler.handle_delete_task("2".to_string()).await.is_err());
    assert!(handler.handle_toggle_task("2".to_string()).await.is_err());
}

#[tokio::test]
async fn test_list_tasks_with_filters() {
    let handler = get_seeded_handler(SEED_CONFIG);

    let all = handler.handle_list_tasks(None, None, None).await.unwrap();
    assert!(all.starts_with("Found 3 of 3 task(s)"));

    let report = handler
        .handle_list_tasks(Some("REPORT".to_string()), None, None)
        .await
        .unwrap();
    assert!(report.starts_with("Found 1 of 3 task(s)"));
    assert!(report.contains("Write monthly report"));

    let high_pending = handler
        .handle_list_tasks(None, Some("high".to_string()), Some("pending".to_string()))
        .await
        .unwrap();
    assert!(high_pending.contains("[1]"));
    assert!(!high_pending.contains("[2]"));

    let none = handler
        .handle_list_tasks(Some("nothing matches".to_string()), None, None)
        .await
        .unwrap();
    assert_eq!(none, "No tasks found (0 of 3)");

    assert!(
        handler
            .handle_list_tasks(None, Some("urgent".to_string()), None)
            .await
            .is_err()
    );
    assert!(
        handler
            .handle_list_tasks(None, None, Some("done".to_string()))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_seed_task_with_malformed_due_date_has_none() {
    let handler = get_seeded_handler(SEED_CONFIG);
    let tasks = handler.tasks();
    let docs = tasks.iter().find(|t| t.id == "3").unwrap();
    assert_eq!(docs.due_date, None);
    assert_eq!(docs.created_at, test_today());
}

#[tokio::test]
async fn test_statistics_uses_reference_date() {
    let handler = get_seeded_handler(SEED_CONFIG);

    let stats = handler.handle_statistics(None).await.unwrap();
    assert!(stats.contains("reference date: 2024-01-15"));
    assert!(stats.contains("Completion rate: 33%"));
    assert!(stats.contains("Overdue: 1"));
    assert!(stats.contains("Upcoming (7 days): 0"));
    assert!(stats.contains("High [red]: 1/2 (50%)"));
    assert!(stats.contains("Work [blue]: 1/2 (50%)"));
    assert!(stats.contains("Docs [purple]: 0/1 (0%)"));
    assert!(stats.contains("Productivity: Needs improvement"));

    let earlier = handler
        .handle_statistics(Some("2024-01-05".to_string()))
        .await
        .unwrap();
    assert!(earlier.contains("Overdue: 0"));
    assert!(earlier.contains("Upcoming (7 days): 1"));

    assert!(
        handler
            .handle_statistics(Some("yesterday".to_string()))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_dashboard_summary() {
    let handler = get_seeded_handler(SEED_CONFIG);
    let dashboard = handler.handle_dashboard().await.unwrap();
    assert!(dashboard.contains("Total tasks: 3"));
    assert!(dashboard.contains("Completed: 1"));
    assert!(dashboard.contains("Pending: 2"));
    assert!(dashboard.contains("Urgent: 1"));
    assert!(dashboard.contains("Write monthly report"));
    assert!(dashboard.contains("Client presentation"));
    assert!(!dashboard.contains("Update documentation"));
}

#[tokio::test]
async fn test_settings_lifecycle() {
    let handler = get_test_handler();

    let settings = handler.handle_get_settings().await.unwrap();
    assert!(settings.starts_with("Settings\n"));
    assert!(settings.contains("theme: light"));

    handler
        .handle_update_setting(
            "preferences".to_string(),
            "theme".to_string(),
            "dark".to_string(),
        )
        .await
        .unwrap();
    let settings = handler.handle_get_settings().await.unwrap();
    assert!(settings.starts_with("Settings (unsaved changes)"));
    assert!(settings.contains("theme: dark"));

    assert_eq!(handler.handle_save_settings().await.unwrap(), "Settings saved");
    assert_eq!(
        handler.handle_save_settings().await.unwrap(),
        "No changes to save"
    );

    handler.handle_reset_settings().await.unwrap();
    let settings = handler.handle_get_settings().await.unwrap();
    assert!(settings.starts_with("Settings (unsaved changes)"));
    assert!(settings.contains("theme: light"));
}

#[tokio::test]
async fn test_update_setting_rejects_invalid_values() {
    let handler = get_test_handler();

    for (section, field, value) in [
        ("display", "theme", "dark"),
        ("privacy", "tracking", "true"),
        ("notifications", "push", "maybe"),
        ("preferences", "timezone", "Mars/Olympus"),
    ] {
        let result = handler
            .handle_update_setting(section.to_string(), field.to_string(), value.to_string())
            .await;
        assert!(result.is_err(), "{}.{}={} should fail", section, field, value);
    }

    let settings = handler.handle_get_settings().await.unwrap();
    assert!(settings.starts_with("Settings\n"));
}

#[tokio::test]
async fn test_language_setting_changes_labels_and_default_category() {
    let handler = get_test_handler();

    handler
        .handle_update_setting(
            "preferences".to_string(),
            "language".to_string(),
            "en".to_string(),
        )
        .await
        .unwrap();
    handler
        .handle_add_task("Uncategorized".to_string(), None, Some("low".to_string()), None, None)
        .await
        .unwrap();

    let tasks = handler.tasks();
    assert_eq!(tasks[0].category, "General");

    let list = handler.handle_list_tasks(None, None, None).await.unwrap();
    assert!(list.contains("priority: Low [green]"));
}
