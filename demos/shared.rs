//! Code that is shared by the demos of this crate

use corkboard::{Task, TaskList};

/// The task list a fresh install starts with
pub fn seed_tasks() -> TaskList {
    let mut list = TaskList::new();
    list.add_task(
        Task::new_with_date_str(
            "Finish report".to_string(),
            "Wrap up Q2 financials".to_string(),
            "2025-05-01",
        )
        .unwrap(),
    );
    list.add_task(
        Task::new_with_date_str(
            "Grocery shopping".to_string(),
            "Buy ingredients for dinner".to_string(),
            "2025-05-08",
        )
        .unwrap(),
    );
    list.add_task(
        Task::new_with_date_str(
            "Email Prof".to_string(),
            "Ask about midterm".to_string(),
            "2025-04-28",
        )
        .unwrap(),
    );
    list
}
