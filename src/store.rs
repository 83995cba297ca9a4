//! JSON file persistence for task lists

use std::path::{Path, PathBuf};

use crate::config;
use crate::error::{Error, Result};
use crate::list::TaskList;
use crate::traits::TaskStore;

/// A [`TaskStore`] backed by a single JSON file.
///
/// Saving always rewrites the whole file. Aliasing is not preserved across a
/// round-trip: a handle that was pushed twice loads back as two independent
/// tasks with the same content.
#[derive(Clone, Debug)]
pub struct FileStore {
    backing_file: PathBuf,
}

impl FileStore {
    /// The default backing file, in the current folder.
    ///
    /// Its name can be overridden via [`config::STORAGE_FILE_NAME`].
    pub fn default_file() -> PathBuf {
        PathBuf::from(config::STORAGE_FILE_NAME.lock().unwrap().clone())
    }

    /// A store reading and writing the given file, which does not have to
    /// exist yet
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
        }
    }

    /// The file this store reads and writes
    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<TaskList> {
        let file = match std::fs::File::open(&self.backing_file) {
            Err(err) => {
                return Err(Error::PersistenceUnavailable(format!(
                    "unable to open {:?}: {}",
                    self.backing_file, err
                )));
            }
            Ok(file) => file,
        };
        Ok(serde_json::from_reader(file)?)
    }

    fn save(&self, list: &TaskList) -> Result<()> {
        if let Some(parent) = self.backing_file.parent() {
            if parent.as_os_str().is_empty() == false {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::File::create(&self.backing_file)?;
        serde_json::to_writer(file, list)?;
        Ok(())
    }
}

/// Load the saved list from `store`, or fall back to `seed` when there is
/// nothing to load yet.
///
/// The seed list is persisted right away, so that the next run finds it. A
/// failure to persist it is logged and otherwise ignored, the in-memory list
/// being perfectly usable anyway.
///
/// Only [`Error::PersistenceUnavailable`] triggers the fallback. A store that
/// exists but cannot be read (e.g. a corrupt file) is reported as the error
/// it is, and is never overwritten with seed data.
pub fn load_or_seed<S, F>(store: &S, seed: F) -> Result<TaskList>
where
    S: TaskStore,
    F: FnOnce() -> TaskList,
{
    match store.load() {
        Ok(list) => Ok(list),
        Err(Error::PersistenceUnavailable(reason)) => {
            log::info!("No saved task list yet ({}), starting from seed data", reason);
            let list = seed();
            if let Err(err) = store.save(&list) {
                log::warn!("Unable to save the seed task list: {}", err);
            }
            Ok(list)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn sample_list() -> TaskList {
        let mut list = TaskList::new();
        list.add_task(Task::new(
            "Finish report".into(),
            "Wrap up Q2 financials".into(),
            "2025-05-01".parse().unwrap(),
        ));
        let done = list.add_task(Task::new(
            "Email Prof".into(),
            "Ask about midterm".into(),
            "2025-04-28".parse().unwrap(),
        ));
        done.lock().unwrap().mark_complete();
        list
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let store = FileStore::new(&path);
        assert_eq!(store.backing_file(), path.as_path());

        let list = sample_list();
        store.save(&list).unwrap();
        let reloaded = store.load().unwrap();

        assert!(reloaded.has_same_observable_content_as(&list));
    }

    #[test]
    fn saving_replaces_the_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(&dir.path().join("tasks.json"));

        store.save(&sample_list()).unwrap();
        let shorter = TaskList::new();
        store.save(&shorter).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn a_missing_file_is_reported_as_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(&dir.path().join("never-written.json"));

        match store.load() {
            Err(Error::PersistenceUnavailable(_)) => { /* expected */ }
            other => panic!("Expected PersistenceUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn a_corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, b"this is no JSON").unwrap();

        match FileStore::new(&path).load() {
            Err(Error::Json(_)) => { /* expected */ }
            other => panic!("Expected a JSON error, got {:?}", other),
        }
    }

    #[test]
    fn missing_parent_folders_are_created_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deeply").join("nested").join("tasks.json");
        let store = FileStore::new(&path);

        store.save(&sample_list()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn seeding_happens_only_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(&dir.path().join("tasks.json"));

        let first = load_or_seed(&store, sample_list).unwrap();
        assert_eq!(first.len(), 2);

        // The seed has been persisted: a second run must load it instead of
        // re-seeding
        let second = load_or_seed(&store, || panic!("should not re-seed")).unwrap();
        assert!(second.has_same_observable_content_as(&first));
    }

    #[test]
    fn a_corrupt_file_is_never_overwritten_by_the_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        // A list whose write was cut short: damaged, but still the user's data
        let damaged: &[u8] = br#"{"tasks":[{"name":"Finish rep"#;
        std::fs::write(&path, damaged).unwrap();

        let store = FileStore::new(&path);
        match load_or_seed(&store, || panic!("must not seed over existing data")) {
            Err(Error::Json(_)) => { /* expected */ }
            other => panic!("Expected a JSON error, got {:?}", other),
        }

        // The file is left intact for the user to repair
        assert_eq!(std::fs::read(&path).unwrap(), damaged);
    }
}
