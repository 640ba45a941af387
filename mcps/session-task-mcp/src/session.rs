//! Session state and the task operations that run against it
//!
//! Ordering rules differ per operation:
//! - listing returns tasks in stored (insertion) order
//! - `upsert_tasks` re-sorts the stored list by numeric id
//! - `next_pending` picks the pending task with the smallest numeric id

use std::cmp::Ordering;

use crate::error::{TaskError, TaskResult};
use crate::types::{StatusFilter, Task, TaskStatus};

/// Parse a task id as a non-negative integer.
///
/// Only plain ASCII digit strings qualify; signs, whitespace and values
/// beyond `u64` are treated as non-numeric rather than coerced.
pub fn numeric_id(id: &str) -> Option<u64> {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

/// Numeric ids first in ascending order, then non-numeric ids.
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (numeric_id(a), numeric_id(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// An isolated task list
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    tasks: Vec<Task>,
    next_task_id: u64,
}

impl Session {
    /// Build a session whose tasks are numbered `1..=n` in input order.
    pub fn new(id: String, descriptions: Vec<String>) -> TaskResult<Self> {
        if descriptions.is_empty() {
            return Err(TaskError::validation(
                "initial_tasks must contain at least one task",
            ));
        }

        let tasks: Vec<Task> = descriptions
            .into_iter()
            .zip(1u64..)
            .map(|(description, n)| Task::pending(n.to_string(), description))
            .collect();
        let next_task_id = tasks.len() as u64 + 1;

        Ok(Self {
            id,
            tasks,
            next_task_id,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn next_task_id(&self) -> u64 {
        self.next_task_id
    }

    fn position(&self, task_id: &str) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == task_id)
    }

    fn task_not_found(&self, task_id: &str) -> TaskError {
        TaskError::TaskNotFound {
            session_id: self.id.clone(),
            task_id: task_id.to_string(),
        }
    }

    /// Tasks in stored order, optionally narrowed to one id and/or a status.
    pub fn list(&self, task_id: Option<&str>, status: StatusFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| task_id.map_or(true, |id| t.id == id))
            .filter(|t| status.matches(t.status))
            .cloned()
            .collect()
    }

    /// Append a pending task under the next minted id.
    pub fn add_task(&mut self, description: String) -> TaskResult<Task> {
        let id = self.next_task_id.to_string();
        if self.position(&id).is_some() {
            return Err(TaskError::validation(format!(
                "task id space exhausted at {}",
                id
            )));
        }

        let task = Task::pending(id, description);
        self.next_task_id = self.next_task_id.saturating_add(1);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Set a task's status in place. Setting the current status again succeeds.
    pub fn update_status(&mut self, task_id: &str, status: TaskStatus) -> TaskResult<Task> {
        let idx = self
            .position(task_id)
            .ok_or_else(|| self.task_not_found(task_id))?;
        let task = &mut self.tasks[idx];
        task.status = status;
        Ok(task.clone())
    }

    /// Replace-or-append each input task in order, then sort by numeric id.
    ///
    /// Replacement is wholesale: description and status both come from the
    /// input. New numeric ids push the counter past themselves so later
    /// `add_task` calls cannot collide. Non-numeric ids are stored but never
    /// move the counter.
    pub fn upsert_tasks(&mut self, tasks: Vec<Task>) -> Vec<Task> {
        for task in tasks {
            match self.position(&task.id) {
                Some(idx) => self.tasks[idx] = task,
                None => {
                    match numeric_id(&task.id) {
                        Some(n) if n >= self.next_task_id => {
                            self.next_task_id = n.saturating_add(1);
                        }
                        Some(_) => {}
                        None => tracing::debug!(
                            session_id = %self.id,
                            task_id = %task.id,
                            "Storing task with non-numeric id; counter unchanged"
                        ),
                    }
                    self.tasks.push(task);
                }
            }
        }

        self.tasks.sort_by(|a, b| compare_ids(&a.id, &b.id));
        self.tasks.clone()
    }

    /// Pending task with the smallest numeric id, if any.
    ///
    /// Non-numeric ids rank after every numeric one; among themselves the
    /// earliest stored wins.
    pub fn next_pending(&self) -> Option<Task> {
        self.tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Pending)
            .reduce(|best, t| {
                if compare_ids(&t.id, &best.id) == Ordering::Less {
                    t
                } else {
                    best
                }
            })
            .cloned()
    }
}
