//! The master to-do list

use std::fmt::{Display, Formatter};
use std::iter::FromIterator;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskHandle};

/// An ordered, owning collection of shared tasks.
///
/// Insertion order is preserved and duplicates are permitted; tasks carry no
/// identity key. The views of this crate ([`DayView`](crate::DayView),
/// [`WeekView`](crate::WeekView), [`LabeledWeekView`](crate::LabeledWeekView))
/// share the contained tasks but never this list's backing storage, so
/// adding or removing entries here does not reshape an already-built view.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<TaskHandle>,
}

impl TaskList {
    /// Create an empty list
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Add a task at the end of the list, and return the shared handle to it
    pub fn add_task(&mut self, task: Task) -> TaskHandle {
        let handle = task.into_handle();
        self.tasks.push(handle.clone());
        handle
    }

    /// Add an already-shared task (e.g. one obtained from a view) at the end
    /// of the list
    pub fn push_handle(&mut self, task: TaskHandle) {
        self.tasks.push(task);
    }

    /// Remove a task, identified by its handle. Returns whether anything was
    /// removed. In case the very same handle had been added several times,
    /// every occurrence is removed.
    pub fn remove_task(&mut self, task: &TaskHandle) -> bool {
        let len_before = self.tasks.len();
        self.tasks.retain(|candidate| !Arc::ptr_eq(candidate, task));
        self.tasks.len() != len_before
    }

    /// The tasks, in insertion order
    pub fn tasks(&self) -> &[TaskHandle] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskHandle> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Compares two lists to check they would look the same to a user.
    ///
    /// This is order-sensitive: the same tasks in a different order are not
    /// the same list.
    pub fn has_same_observable_content_as(&self, other: &Self) -> bool {
        if self.tasks.len() != other.tasks.len() {
            return false;
        }
        self.tasks.iter().zip(other.tasks.iter()).all(|(left, right)| {
            // Do not lock twice in case both sides share a task
            if Arc::ptr_eq(left, right) {
                return true;
            }
            let left = left.lock().unwrap();
            let right = right.lock().unwrap();
            left.has_same_observable_content_as(&right)
        })
    }
}

impl FromIterator<TaskHandle> for TaskList {
    fn from_iter<I: IntoIterator<Item = TaskHandle>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskHandle;
    type IntoIter = std::slice::Iter<'a, TaskHandle>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

impl Display for TaskList {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for task in &self.tasks {
            writeln!(f, "{}", task.lock().unwrap())?;
        }
        Ok(())
    }
}
