//! This example toggles the completion status of every saved task, and shows
//! that an already-built view observes the change without being rebuilt.

use corkboard::store::{load_or_seed, FileStore};
use corkboard::traits::{Clock, TaskStore};
use corkboard::{SystemClock, WeekView};

mod shared;

fn main() {
    env_logger::init();

    let store = FileStore::new(&FileStore::default_file());
    let tasks = load_or_seed(&store, shared::seed_tasks).unwrap();

    let today = SystemClock.today();
    let week = WeekView::new(&tasks, today);
    println!("Week complete before toggling: {}", week.is_week_complete());

    let mut n_toggled = 0;
    for task in &tasks {
        let mut task = task.lock().unwrap();
        if task.is_complete() {
            task.mark_incomplete();
        } else {
            task.mark_complete();
        }
        n_toggled += 1;
    }
    println!("{} tasks toggled.", n_toggled);

    // No rebuild: the view shares the tasks themselves
    println!("Week complete after toggling:  {}", week.is_week_complete());

    match store.save(&tasks) {
        Ok(()) => println!("Changes saved to {:?}.", store.backing_file()),
        Err(err) => eprintln!("Unable to save the changes: {}", err),
    }
}
