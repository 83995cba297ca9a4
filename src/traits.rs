//! The seams between the task list and the outside world
//!
//! The planning code itself never opens files nor reads the wall clock. Both
//! concerns sit behind the traits of this module, so that tests (and any
//! embedding application) can substitute their own implementations.

use chrono::NaiveDate;

use crate::error::Result;
use crate::list::TaskList;

/// A place a task list can be persisted to and retrieved from.
///
/// The only contract is round-trip fidelity: a [`save`](TaskStore::save)
/// followed by a [`load`](TaskStore::load) must reproduce an equivalent list
/// (same tasks, same order, same completion flags). How the list is encoded
/// is the implementation's business.
pub trait TaskStore {
    /// Returns the previously saved task list.
    ///
    /// Fails with [`Error::PersistenceUnavailable`](crate::Error::PersistenceUnavailable)
    /// when there is no previous state to load; callers usually fall back to
    /// seed data in that case (see [`load_or_seed`](crate::store::load_or_seed)).
    fn load(&self) -> Result<TaskList>;

    /// Persist the given list, replacing any previously saved state
    fn save(&self, list: &TaskList) -> Result<()>;
}

/// A source of "today".
///
/// Views are keyed by dates their caller passes in, never by a date they
/// fetched themselves. Handing the current date around through this trait
/// keeps every date-dependent computation reproducible.
pub trait Clock {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}
