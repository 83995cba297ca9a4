//! Overdue task detection

use chrono::NaiveDate;

use crate::list::TaskList;

/// The tasks of `tasks` whose due date is strictly before `reference`, in
/// source order.
///
/// A task due on `reference` itself is not overdue yet. Completed tasks are
/// reported like any other; it is up to the caller to filter them out if it
/// wants to. The source list is left untouched; the returned list shares the
/// selected tasks.
///
/// `reference` is usually [`Clock::today()`](crate::traits::Clock::today),
/// but any date works, e.g. to ask "what would have been late by Friday?".
pub fn overdue(tasks: &TaskList, reference: NaiveDate) -> TaskList {
    tasks
        .iter()
        .filter(|t| t.lock().unwrap().due_date() < reference)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample_list() -> TaskList {
        let mut list = TaskList::new();
        list.add_task(Task::new("report".into(), "".into(), day("2025-05-01")));
        list.add_task(Task::new("groceries".into(), "".into(), day("2025-05-08")));
        list.add_task(Task::new("email".into(), "".into(), day("2025-04-28")));
        list
    }

    fn names_of(tasks: &TaskList) -> Vec<String> {
        tasks
            .iter()
            .map(|t| t.lock().unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn strictly_before_the_reference_in_source_order() {
        let list = sample_list();
        let late = overdue(&list, day("2025-05-05"));
        assert_eq!(names_of(&late), &["report", "email"]);
        // The source list is intact
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn due_today_is_not_overdue() {
        let list = sample_list();
        let late = overdue(&list, day("2025-04-28"));
        assert!(late.is_empty());
    }

    #[test]
    fn completed_tasks_are_still_reported() {
        let list = sample_list();
        list.tasks()[2].lock().unwrap().mark_complete();
        let late = overdue(&list, day("2025-05-05"));
        assert_eq!(names_of(&late), &["report", "email"]);
    }

    #[test]
    fn nothing_is_overdue_in_an_empty_list() {
        assert!(overdue(&TaskList::new(), day("2025-05-05")).is_empty());
    }

    #[test]
    fn the_result_shares_the_tasks() {
        let list = sample_list();
        let late = overdue(&list, day("2025-05-05"));
        late.tasks()[0].lock().unwrap().mark_complete();
        assert!(list.tasks()[0].lock().unwrap().is_complete());
    }
}
