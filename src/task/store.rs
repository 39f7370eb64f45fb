use super::model::{NewTask, Task, TaskPatch};
use chrono::NaiveDate;
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised by task store mutations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Task '{0}' not found")]
    NotFound(String),
    #[error("Task ID '{0}' already exists. Please use a unique ID.")]
    DuplicateId(String),
    #[error("Task title must not be empty")]
    EmptyTitle,
}

/// In-memory ordered task collection
///
/// Newly created tasks are prepended so the collection reads most-recent-first.
/// Nothing is persisted; the store lives as long as the server process.
pub struct TaskStore {
    /// Tasks in display order
    tasks: Vec<Task>,

    /// ID index for duplicate detection, kept in sync with `tasks`
    ids: HashSet<String>,

    /// Counter for generating task IDs
    task_counter: u32,

    /// Category assigned when a task is created or edited without one
    default_category: String,
}

impl TaskStore {
    pub fn new(default_category: impl Into<String>) -> Self {
        Self {
            tasks: Vec::new(),
            ids: HashSet::new(),
            task_counter: 0,
            default_category: default_category.into(),
        }
    }

    /// Snapshot of all tasks in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    pub fn set_default_category(&mut self, category: impl Into<String>) {
        self.default_category = category.into();
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Generate a new unique task ID, skipping IDs already taken by seed data
    pub fn generate_id(&mut self) -> String {
        loop {
            self.task_counter += 1;
            let id = format!("task-{}", self.task_counter);
            if !self.ids.contains(&id) {
                return id;
            }
        }
    }

    fn normalize_category(&self, category: Option<String>) -> String {
        match category {
            Some(c) if !c.trim().is_empty() => c.trim().to_string(),
            _ => self.default_category.clone(),
        }
    }

    /// Create a task from user input and prepend it
    ///
    /// # Returns
    /// The stored task
    pub fn add(&mut self, new_task: NewTask, today: NaiveDate) -> Result<&Task, StoreError> {
        let title = new_task.title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        let task = Task {
            id: self.generate_id(),
            title: title.to_string(),
            description: new_task.description.filter(|d| !d.trim().is_empty()),
            completed: false,
            priority: new_task.priority,
            category: self.normalize_category(new_task.category),
            due_date: new_task.due_date,
            created_at: today,
        };

        self.ids.insert(task.id.clone());
        self.tasks.insert(0, task);
        Ok(&self.tasks[0])
    }

    /// Append a fully specified task, keeping its ID and creation date
    pub fn insert(&mut self, mut task: Task) -> Result<(), StoreError> {
        if task.title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        if self.ids.contains(&task.id) {
            return Err(StoreError::DuplicateId(task.id));
        }
        if task.category.trim().is_empty() {
            task.category = self.default_category.clone();
        }

        self.ids.insert(task.id.clone());
        self.tasks.push(task);
        Ok(())
    }

    /// Apply a partial update to an existing task
    ///
    /// The patch is validated before any field changes, so a rejected update
    /// leaves the task untouched.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Result<&Task, StoreError> {
        let title = match patch.title {
            Some(t) if t.trim().is_empty() => return Err(StoreError::EmptyTitle),
            Some(t) => Some(t.trim().to_string()),
            None => None,
        };
        let category = patch.category.map(|c| self.normalize_category(Some(c)));

        let task = self
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = patch.description {
            task.description = description.filter(|d| !d.trim().is_empty());
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(category) = category {
            task.category = category;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }

        Ok(task)
    }

    /// Remove a task and return it
    pub fn delete(&mut self, id: &str) -> Result<Task, StoreError> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.ids.remove(id);
        Ok(self.tasks.remove(pos))
    }

    /// Flip the completion flag
    ///
    /// # Returns
    /// The new value of `completed`
    pub fn toggle(&mut self, id: &str) -> Result<bool, StoreError> {
        let task = self
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }
}
