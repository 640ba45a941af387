//! Process-wide session store
//!
//! Owns every session for the lifetime of the server. Each operation runs
//! lookup, mutation and snapshot under a single lock so counter updates and
//! list edits never interleave.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{TaskError, TaskResult};
use crate::session::Session;
use crate::types::{StatusFilter, Task, TaskStatus};

/// In-memory session store with shared access
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Session>> {
        // Sessions are plain data; a panic elsewhere cannot leave one half-written.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Resolve a session and run `f` against it while the lock is held.
    fn with_session<T>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut Session) -> TaskResult<T>,
    ) -> TaskResult<T> {
        let mut sessions = self.lock();
        match sessions.get_mut(session_id) {
            Some(session) => f(session),
            None => {
                tracing::warn!(session_id, "Unknown session");
                Err(TaskError::SessionNotFound(session_id.to_string()))
            }
        }
    }

    /// Create a session seeded with the given descriptions.
    pub fn create(&self, initial_tasks: Vec<String>) -> TaskResult<(String, Vec<Task>)> {
        let session_id = uuid::Uuid::new_v4().simple().to_string();
        let session = Session::new(session_id.clone(), initial_tasks)?;
        let tasks = session.tasks().to_vec();

        let mut sessions = self.lock();
        sessions.insert(session_id.clone(), session);
        tracing::info!(
            session_id = %session_id,
            task_count = tasks.len(),
            total_sessions = sessions.len(),
            "Created session"
        );

        Ok((session_id, tasks))
    }

    /// Snapshot of a session, or `SessionNotFound`.
    pub fn lookup(&self, session_id: &str) -> TaskResult<Session> {
        self.with_session(session_id, |session| Ok(session.clone()))
    }

    pub fn session_count(&self) -> usize {
        self.lock().len()
    }

    pub fn list_tasks(
        &self,
        session_id: &str,
        task_id: Option<&str>,
        status: StatusFilter,
    ) -> TaskResult<Vec<Task>> {
        self.with_session(session_id, |session| Ok(session.list(task_id, status)))
    }

    pub fn add_task(&self, session_id: &str, description: String) -> TaskResult<Task> {
        self.with_session(session_id, |session| {
            let task = session.add_task(description)?;
            tracing::debug!(session_id, task_id = %task.id, "Added task");
            Ok(task)
        })
    }

    /// Returns the updated task together with the session's full task list.
    pub fn update_task_status(
        &self,
        session_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> TaskResult<(Task, Vec<Task>)> {
        self.with_session(session_id, |session| {
            let updated = session.update_status(task_id, status)?;
            tracing::debug!(session_id, task_id, status = %status, "Updated task status");
            Ok((updated, session.tasks().to_vec()))
        })
    }

    pub fn update_tasks(&self, session_id: &str, tasks: Vec<Task>) -> TaskResult<Vec<Task>> {
        self.with_session(session_id, |session| {
            let count = tasks.len();
            let result = session.upsert_tasks(tasks);
            tracing::debug!(
                session_id,
                upserted = count,
                total = result.len(),
                next_task_id = session.next_task_id(),
                "Upserted tasks"
            );
            Ok(result)
        })
    }

    pub fn next_pending_task(&self, session_id: &str) -> TaskResult<Option<Task>> {
        self.with_session(session_id, |session| Ok(session.next_pending()))
    }
}
