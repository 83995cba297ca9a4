//! The tasks due on one specific day

use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use crate::list::TaskList;
use crate::task::TaskHandle;

/// A view over the tasks of a source list that are due on one specific date.
///
/// The view owns its own storage but shares the tasks themselves with the
/// source list: completing a task through the view is seen by the list and by
/// every other view, and vice versa. The selection is a snapshot, though. It
/// does not follow later additions, removals or re-schedulings in the source
/// list; call [`DayView::rebuild`] to recompute it.
#[derive(Clone, Debug)]
pub struct DayView {
    day: NaiveDate,
    tasks: Vec<TaskHandle>,
}

impl DayView {
    /// Build the view of the tasks of `source` due on `day`, preserving
    /// source order
    pub fn new(source: &TaskList, day: NaiveDate) -> Self {
        let mut view = Self {
            day,
            tasks: Vec::new(),
        };
        view.fill_from(source);
        view
    }

    /// Recompute the view from scratch, possibly against another day
    pub fn rebuild(&mut self, source: &TaskList, day: NaiveDate) {
        self.day = day;
        self.fill_from(source);
    }

    fn fill_from(&mut self, source: &TaskList) {
        self.tasks.clear();
        for task in source {
            if task.lock().unwrap().due_date() == self.day {
                self.tasks.push(task.clone());
            }
        }
    }

    /// The day this view is about
    pub fn day(&self) -> NaiveDate {
        self.day
    }

    /// The tasks due on this day, in source order
    pub fn tasks(&self) -> &[TaskHandle] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether every task of this day is complete. A day with no tasks counts
    /// as complete.
    pub fn is_day_complete(&self) -> bool {
        self.tasks.iter().all(|t| t.lock().unwrap().is_complete())
    }

    /// The tasks of this day that remain to be done, in source order.
    ///
    /// The returned list shares the tasks; neither this view nor its source
    /// list is modified.
    pub fn incomplete_tasks(&self) -> TaskList {
        self.tasks
            .iter()
            .filter(|t| !t.lock().unwrap().is_complete())
            .cloned()
            .collect()
    }
}

impl Display for DayView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for task in &self.tasks {
            writeln!(f, "{}", task.lock().unwrap())?;
        }
        Ok(())
    }
}
