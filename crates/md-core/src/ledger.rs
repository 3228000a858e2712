//! The task ledger: accumulated minutes per task plus the active task.
//!
//! Tasks keep insertion order. That order is what summaries show and what
//! decides the new active task after the active one is deleted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::duration::{self, DurationError};

/// Fallback task name when no active task can be determined.
pub const DEFAULT_TASK: &str = "default";

/// A named task was expected to exist but does not.
///
/// This is informational: callers report it and carry on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("task \"{name}\" does not exist")]
pub struct TaskNotFound {
    pub name: String,
}

/// A stored ledger that breaks the non-empty task name rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidLedger {
    /// A task entry has an empty name.
    #[error("task names cannot be empty")]
    EmptyTaskName,
}

/// Result of [`Ledger::switch_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The task already had an entry with this many minutes.
    Existing { minutes: u64 },
    /// The task has no entry yet; none was created.
    New,
}

/// Result of [`Ledger::reset_task`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// A single task was zeroed. Holds its minutes before the reset.
    Task { previous_minutes: u64 },
    /// Every task was removed. Holds how many there were.
    All { removed: usize },
}

/// Per-task accumulated minutes and the active task pointer.
///
/// The active task does not have to be a key of `tasks`: switching to a task
/// that has no time yet leaves the pointer dangling until time is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredLedger")]
pub struct Ledger {
    tasks: IndexMap<String, u64>,
    active_task: String,
}

/// Ledger as found on disk, before name validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLedger {
    #[serde(default)]
    tasks: IndexMap<String, u64>,
    #[serde(default = "default_task")]
    active_task: String,
}

impl TryFrom<StoredLedger> for Ledger {
    type Error = InvalidLedger;

    /// Rejects empty task names; an empty active task falls back to [`DEFAULT_TASK`].
    fn try_from(stored: StoredLedger) -> Result<Self, Self::Error> {
        if stored.tasks.keys().any(String::is_empty) {
            return Err(InvalidLedger::EmptyTaskName);
        }

        let active_task = if stored.active_task.is_empty() {
            default_task()
        } else {
            stored.active_task
        };
        Ok(Self {
            tasks: stored.tasks,
            active_task,
        })
    }
}

fn default_task() -> String {
    DEFAULT_TASK.to_string()
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// An empty ledger with the default task active.
    pub fn new() -> Self {
        Self {
            tasks: IndexMap::new(),
            active_task: default_task(),
        }
    }

    pub fn active_task(&self) -> &str {
        &self.active_task
    }

    /// Minutes recorded for `name`, or `None` if it has no entry.
    pub fn minutes(&self, name: &str) -> Option<u64> {
        self.tasks.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task names in insertion order.
    pub fn task_names(&self) -> impl Iterator<Item = &str> {
        self.tasks.keys().map(String::as_str)
    }

    /// Sum of minutes across all tasks.
    pub fn total_minutes(&self) -> u64 {
        self.tasks
            .values()
            .fold(0, |total, minutes| total.saturating_add(*minutes))
    }

    /// Parses `duration_input` and adds it to `task_name`, making it active.
    ///
    /// A task without an entry is appended with zero minutes first. Returns the
    /// task's new total.
    pub fn accumulate(
        &mut self,
        task_name: &str,
        duration_input: &str,
    ) -> Result<u64, DurationError> {
        let minutes = duration::parse(duration_input)?;
        let total = self.tasks.entry(task_name.to_string()).or_insert(0);
        *total = total.saturating_add(minutes);
        let total = *total;
        self.active_task = task_name.to_string();

        tracing::debug!(task = task_name, added = minutes, total, "accumulated time");
        Ok(total)
    }

    /// Makes `task_name` active without touching any entry.
    pub fn switch_to(&mut self, task_name: &str) -> SwitchOutcome {
        self.active_task = task_name.to_string();
        tracing::debug!(task = task_name, "switched active task");

        match self.minutes(task_name) {
            Some(minutes) => SwitchOutcome::Existing { minutes },
            None => SwitchOutcome::New,
        }
    }

    /// Removes `task_name` and returns the minutes it held.
    ///
    /// Deleting the active task hands the pointer to the first remaining task,
    /// or to [`DEFAULT_TASK`] when none remain.
    pub fn delete_task(&mut self, task_name: &str) -> Result<u64, TaskNotFound> {
        let minutes = self
            .tasks
            .shift_remove(task_name)
            .ok_or_else(|| TaskNotFound {
                name: task_name.to_string(),
            })?;

        if self.active_task == task_name {
            self.active_task = self
                .tasks
                .keys()
                .next()
                .cloned()
                .unwrap_or_else(default_task);
        }

        tracing::debug!(
            task = task_name,
            minutes,
            active = %self.active_task,
            "deleted task"
        );
        Ok(minutes)
    }

    /// Zeroes one task in place, or clears the whole ledger when `task_name` is `None`.
    pub fn reset_task(&mut self, task_name: Option<&str>) -> Result<ResetOutcome, TaskNotFound> {
        let Some(name) = task_name else {
            let removed = self.tasks.len();
            self.tasks.clear();
            self.active_task = default_task();
            tracing::debug!(removed, "reset all tasks");
            return Ok(ResetOutcome::All { removed });
        };

        let minutes = self.tasks.get_mut(name).ok_or_else(|| TaskNotFound {
            name: name.to_string(),
        })?;
        let previous_minutes = std::mem::replace(minutes, 0);

        tracing::debug!(task = name, previous_minutes, "reset task");
        Ok(ResetOutcome::Task { previous_minutes })
    }

    /// Snapshot view of the ledger for reporting.
    pub fn summarize(&self) -> Summary<'_> {
        if self.tasks.is_empty() {
            return Summary::NoTasks;
        }

        let total = (self.tasks.len() > 1).then(|| self.total_minutes());
        Summary::Tasks {
            entries: SummaryEntries {
                inner: self.tasks.iter(),
                active_task: &self.active_task,
            },
            total,
        }
    }
}

/// Report view returned by [`Ledger::summarize`].
#[derive(Debug, Clone)]
pub enum Summary<'a> {
    /// Nothing has been recorded.
    NoTasks,
    /// At least one task exists.
    Tasks {
        entries: SummaryEntries<'a>,
        /// Grand total, present only when there is more than one task.
        total: Option<u64>,
    },
}

/// One summary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryEntry<'a> {
    pub name: &'a str,
    pub minutes: u64,
    pub is_active: bool,
}

/// Iterator over summary rows in insertion order.
///
/// Clone it to walk the rows again.
#[derive(Debug, Clone)]
pub struct SummaryEntries<'a> {
    inner: indexmap::map::Iter<'a, String, u64>,
    active_task: &'a str,
}

impl<'a> Iterator for SummaryEntries<'a> {
    type Item = SummaryEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, minutes)| SummaryEntry {
            name,
            minutes: *minutes,
            is_active: name == self.active_task,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SummaryEntries<'_> {}
