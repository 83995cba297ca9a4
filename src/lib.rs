//! This crate provides a way to manage a personal to-do list.
//!
//! Tasks live in a flat [`TaskList`], and everything else is derived from it on demand:
//! * a [`DayView`] selects the tasks due on one specific date,
//! * a [`WeekView`] partitions them into seven consecutive daily buckets,
//! * a [`LabeledWeekView`] partitions them against hand-picked date labels instead,
//! * [`overdue`] picks out what should already have been done.
//!
//! Views do not copy tasks, they share them (see [`TaskHandle`]). \
//! Completing a task through any view is thus immediately visible through the list and through every other view. \
//! Views are snapshots of the list structure, though: after adding or removing tasks, rebuild the views you care about.
//!
//! The two external dependencies of a to-do list, "where is it saved" and "what day is it",
//! are kept behind the [`traits::TaskStore`] and [`traits::Clock`] traits.
//! This crate ships a JSON file implementation of the former in the [`store`] module
//! and two implementations of the latter in the [`clock`] module,
//! but embedding applications are free to bring their own.

pub mod traits;

pub mod error;
pub use error::{Error, Result};

mod task;
pub use task::{Task, TaskHandle};
mod list;
pub use list::TaskList;
mod day;
pub use day::DayView;
mod week;
pub use week::{LabeledWeekView, WeekView, DAYS_PER_WEEK};
mod overdue;
pub use overdue::overdue;

pub mod clock;
pub use clock::{FixedClock, SystemClock};
pub mod store;
pub use store::FileStore;

pub mod config;
