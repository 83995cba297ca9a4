//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The file name [`FileStore::default_file`](crate::FileStore::default_file) resolves to, relative to the current folder.
/// Feel free to override it when initing this library.
pub static STORAGE_FILE_NAME: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("tasks.json".to_string())));
