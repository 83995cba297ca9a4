//! This is an example of how corkboard can be used.
//!
//! It loads the saved task list (or seeds a fresh one on the first run),
//! prints the current and the next week, and finishes with whatever is
//! overdue. Run it twice to see the second run pick up the saved file.

use chrono::Duration;

use corkboard::store::{load_or_seed, FileStore};
use corkboard::traits::Clock;
use corkboard::{overdue, SystemClock, WeekView};

mod shared;

fn main() {
    env_logger::init();

    let store = FileStore::new(&FileStore::default_file());
    let tasks = load_or_seed(&store, shared::seed_tasks).unwrap();

    let today = SystemClock.today();
    println!("Today is {}.\n", today);

    println!("=== Tasks Due This Week ===");
    println!("{}", WeekView::new(&tasks, today));

    println!("=== Tasks Due Next Week ===");
    println!("{}", WeekView::new(&tasks, today + Duration::days(7)));

    println!("=== Overdue Tasks ===");
    let late = overdue(&tasks, today);
    if late.is_empty() {
        println!("(none)");
    } else {
        print!("{}", late);
    }
}
