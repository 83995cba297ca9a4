//! To-do tasks

use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A shared, mutable reference to a [`Task`].
///
/// The master list and every view derived from it hold clones of the same
/// handle, so completing a task through one of them is immediately visible
/// through all the others.
pub type TaskHandle = Arc<Mutex<Task>>;

/// A single schedulable to-do item
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Task {
    /// The short name of the task
    name: String,
    /// A free-form description
    description: String,
    /// The calendar date the task is due on
    due_date: NaiveDate,
    /// The completion status of this task
    complete: bool,
}

impl Task {
    /// Create a brand new, not-yet-completed task due on the given date
    pub fn new(name: String, description: String, due_date: NaiveDate) -> Self {
        Self {
            name,
            description,
            due_date,
            complete: false,
        }
    }

    /// Create a brand new task, parsing its due date from an ISO `YYYY-MM-DD` string.
    ///
    /// No task is created when the date does not parse.
    pub fn new_with_date_str(name: String, description: String, due_date: &str) -> Result<Self> {
        let parsed = due_date
            .parse::<NaiveDate>()
            .map_err(|source| Error::InvalidDateFormat {
                input: due_date.to_string(),
                source,
            })?;
        Ok(Self::new(name, description, parsed))
    }

    /// Wrap this task into a handle that a list and its views can share
    pub fn into_handle(self) -> TaskHandle {
        Arc::new(Mutex::new(self))
    }

    pub fn name(&self) -> &str          { &self.name        }
    pub fn description(&self) -> &str   { &self.description }
    pub fn due_date(&self) -> NaiveDate { self.due_date     }
    pub fn is_complete(&self) -> bool   { self.complete     }

    pub fn set_name(&mut self, new_name: String) {
        self.name = new_name;
    }

    pub fn set_description(&mut self, new_description: String) {
        self.description = new_description;
    }

    /// Change the due date. Views built before this call keep their old
    /// buckets until they are rebuilt.
    pub fn set_due_date(&mut self, new_due_date: NaiveDate) {
        self.due_date = new_due_date;
    }

    /// Mark the task as done. Marking an already completed task is a no-op.
    pub fn mark_complete(&mut self) {
        self.complete = true;
    }

    /// Mark the task as still to be done. Idempotent as well.
    pub fn mark_incomplete(&mut self) {
        self.complete = false;
    }

    /// Compares two tasks to check they would look the same to a user
    pub fn has_same_observable_content_as(&self, other: &Task) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.due_date == other.due_date
            && self.complete == other.complete
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (due {}){}\n  {}",
            self.name,
            self.due_date,
            if self.complete { " ✓" } else { "" },
            self.description,
        )
    }
}
