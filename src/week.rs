//! Weekly views: tasks partitioned into ordered per-day buckets
//!
//! Two bucketing strategies are available. [`WeekView`] covers a fixed window
//! of seven consecutive calendar dates. [`LabeledWeekView`] buckets against an
//! explicit, caller-supplied sequence of date labels, which does not have to
//! be contiguous nor seven entries long.
//!
//! Both views share the tasks with their source list (see
//! [`TaskHandle`](crate::TaskHandle)) and both are snapshots: they must be
//! rebuilt to pick up changes to the source list.

use std::fmt::{Display, Formatter};

use chrono::{Duration, NaiveDate};

use crate::list::TaskList;
use crate::task::TaskHandle;

/// Number of days covered by a [`WeekView`]
pub const DAYS_PER_WEEK: i64 = 7;

/// A partition of a task list into seven consecutive daily buckets.
///
/// The keys are exactly `start`, `start+1`, ..., `start+6`, in that order,
/// each present even when its bucket is empty. A task belongs to the view
/// exactly when its due date lies in the half-open window
/// `[start, start + 7 days)`; within a bucket, tasks keep their source order.
#[derive(Clone, Debug)]
pub struct WeekView {
    start: NaiveDate,
    days: Vec<(NaiveDate, Vec<TaskHandle>)>,
}

impl WeekView {
    /// Build the weekly view of `source` for the seven days starting at
    /// `start` (which can be any date, not just a Monday)
    pub fn new(source: &TaskList, start: NaiveDate) -> Self {
        let mut view = Self {
            start,
            days: Vec::new(),
        };
        view.fill_from(source);
        view
    }

    /// Recompute the view from scratch, possibly re-keyed to another start
    /// date
    pub fn rebuild(&mut self, source: &TaskList, start: NaiveDate) {
        self.start = start;
        self.fill_from(source);
    }

    fn fill_from(&mut self, source: &TaskList) {
        self.days.clear();
        for offset in 0..DAYS_PER_WEEK {
            self.days.push((self.start + Duration::days(offset), Vec::new()));
        }

        let end = self.start + Duration::days(DAYS_PER_WEEK);
        for task in source {
            let due = task.lock().unwrap().due_date();
            if self.start <= due && due < end {
                let index = (due - self.start).num_days() as usize;
                self.days[index].1.push(task.clone());
            }
        }
    }

    /// The first day of the window
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The `(day, bucket)` pairs, in window order
    pub fn days(&self) -> &[(NaiveDate, Vec<TaskHandle>)] {
        &self.days
    }

    /// The tasks due on the given day.
    ///
    /// Asking about a day outside the window is not an error, the answer is
    /// simply an empty list.
    pub fn tasks_due_on(&self, day: NaiveDate) -> TaskList {
        self.days
            .iter()
            .find(|(key, _)| *key == day)
            .map(|(_, bucket)| bucket.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Every task of the week, buckets concatenated in window order
    pub fn all_tasks(&self) -> TaskList {
        self.days
            .iter()
            .flat_map(|(_, bucket)| bucket.iter().cloned())
            .collect()
    }

    /// Whether every task of every day is complete. A week with no tasks at
    /// all counts as complete.
    pub fn is_week_complete(&self) -> bool {
        self.days
            .iter()
            .all(|(_, bucket)| bucket.iter().all(|t| t.lock().unwrap().is_complete()))
    }
}

impl Display for WeekView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (day, bucket) in &self.days {
            writeln!(f, "{}:", day)?;
            if bucket.is_empty() {
                writeln!(f, "  (no tasks)")?;
            } else {
                for task in bucket {
                    writeln!(f, "  • {}", task.lock().unwrap())?;
                }
            }
        }
        Ok(())
    }
}

/// A partition of a task list into buckets for an explicit sequence of date
/// labels.
///
/// There is one bucket per label, in label order. A task lands in the first
/// bucket whose label equals the ISO rendering of its due date (e.g.
/// `"2025-05-01"`); tasks matching no label are left out of the view
/// entirely. This is handy for sparse or hand-picked planning horizons where
/// a rigid run of consecutive dates would be a poor fit.
#[derive(Clone, Debug)]
pub struct LabeledWeekView {
    days: Vec<(String, Vec<TaskHandle>)>,
}

impl LabeledWeekView {
    /// Build the view of `source` for the given labels, one bucket per label,
    /// in the given order
    pub fn new(source: &TaskList, labels: Vec<String>) -> Self {
        let mut view = Self { days: Vec::new() };
        view.fill_from(source, labels);
        view
    }

    /// Recompute the view from scratch against a new label sequence
    pub fn rebuild(&mut self, source: &TaskList, labels: Vec<String>) {
        self.fill_from(source, labels);
    }

    fn fill_from(&mut self, source: &TaskList, labels: Vec<String>) {
        self.days.clear();
        self.days.extend(labels.into_iter().map(|label| (label, Vec::new())));

        for task in source {
            let rendered = task.lock().unwrap().due_date().to_string();
            // In case the caller supplied duplicate labels, the first one wins
            match self.days.iter_mut().find(|(label, _)| *label == rendered) {
                Some((_, bucket)) => bucket.push(task.clone()),
                None => log::debug!(
                    "Task due on {} matches none of the configured labels, leaving it out",
                    rendered
                ),
            }
        }
    }

    /// The labels, in configured order
    pub fn labels(&self) -> Vec<&str> {
        self.days.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// The `(label, bucket)` pairs, in configured order
    pub fn days(&self) -> &[(String, Vec<TaskHandle>)] {
        &self.days
    }

    /// The tasks bucketed under the given label, or an empty list for a label
    /// this view was not configured with
    pub fn tasks_due_on(&self, label: &str) -> TaskList {
        self.days
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, bucket)| bucket.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Every task of the view, buckets concatenated in label order
    pub fn all_tasks(&self) -> TaskList {
        self.days
            .iter()
            .flat_map(|(_, bucket)| bucket.iter().cloned())
            .collect()
    }

    /// Whether every bucketed task is complete. Tasks that matched no label
    /// are not part of the view, so they do not count.
    pub fn is_week_complete(&self) -> bool {
        self.days
            .iter()
            .all(|(_, bucket)| bucket.iter().all(|t| t.lock().unwrap().is_complete()))
    }
}

impl Display for LabeledWeekView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (label, bucket) in &self.days {
            writeln!(f, "{}:", label)?;
            if bucket.is_empty() {
                writeln!(f, "  (no tasks)")?;
            } else {
                for task in bucket {
                    let task = task.lock().unwrap();
                    writeln!(
                        f,
                        "  - {} [{}]{}",
                        task.name(),
                        task.due_date(),
                        if task.is_complete() { " ✓" } else { "" },
                    )?;
                }
            }
        }
        Ok(())
    }
}
