use chrono::{DateTime, Days, Duration, Local, TimeZone, Utc};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::types::{Category, Task};

/// File name of the snapshot inside the data directory
const SNAPSHOT_FILE: &str = "tasks.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Owns the authoritative in-memory task list and its snapshot on disk.
///
/// Every mutation rewrites the whole snapshot before returning; hydration
/// happens once at construction. Collection order is insertion order and is
/// never re-sorted.
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Hydrate the store from `data_dir`.
    ///
    /// A missing snapshot means a fresh start, not an error. An unreadable
    /// one is logged and discarded: task data is recoverable by re-entry,
    /// so starting empty beats refusing to start.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SNAPSHOT_FILE);
        let tasks = read_snapshot(&path);
        Self { tasks, path }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a new pending task and persist.
    ///
    /// Blank or whitespace-only text is silently refused; returns the new
    /// task's id when one was created.
    pub fn add(
        &mut self,
        text: &str,
        date: DateTime<Utc>,
        category: Category,
    ) -> Result<Option<String>, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let task = Task::new(text, date, category);
        let id = task.id.clone();
        self.tasks.push(task);
        self.persist()?;
        Ok(Some(id))
    }

    /// Flip the completion flag of the task with `id`.
    ///
    /// Unknown ids are a no-op: the UI never exposes ids for manual entry,
    /// so there is nothing useful to report. Returns whether a task changed.
    pub fn toggle(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        self.persist()?;
        Ok(true)
    }

    /// Remove the task with `id`. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Move the task with `id` to the next calendar day and mark it pending
    /// again: a task rolled over to tomorrow was not finished today, so it
    /// must not keep a stale completion flag.
    pub fn advance_day(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.date = next_calendar_day(task.date, &Local);
        task.completed = false;
        self.persist()?;
        Ok(true)
    }

    /// Rewrite the full snapshot
    fn persist(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.tasks)?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), count = self.tasks.len(), "Snapshot saved");
        Ok(())
    }
}

/// The same wall-clock time one calendar day later in `tz`.
///
/// Day-bucketing compares local calendar days, so the advance must be a
/// calendar increment in that zone, not 24 absolute hours: across a DST
/// fall-back a 24h jump leaves the local day unchanged, and across a
/// spring-forward it can skip one. When the target wall-clock time does not
/// resolve (the skipped or repeated hour around a transition), the 24h jump
/// is the fallback; it lands on the right day in those cases.
fn next_calendar_day<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> DateTime<Utc> {
    instant
        .with_timezone(tz)
        .checked_add_days(Days::new(1))
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or(instant + Duration::days(1))
}

fn read_snapshot(path: &Path) -> Vec<Task> {
    if !path.exists() {
        return Vec::new();
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(StoreError::from)
        .and_then(|content| Ok(serde_json::from_str::<Vec<Task>>(&content)?));

    match parsed {
        Ok(tasks) => {
            debug!(count = tasks.len(), "Loaded snapshot");
            tasks
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Snapshot unreadable, starting empty");
            Vec::new()
        }
    }
}
