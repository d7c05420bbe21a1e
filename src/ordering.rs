//! View Ordering
//!
//! Pure helpers that turn backend collections into display order.

use std::collections::HashMap;

use crate::models::{ScheduleEntry, Task, WEEKDAYS};

/// Split tasks into (unfinished, finished).
///
/// Backend order is preserved within each half; only the classification
/// moves items.
pub fn partition_tasks(tasks: &[Task]) -> (Vec<Task>, Vec<Task>) {
    tasks.iter().cloned().partition(|t| !t.done)
}

/// Group schedule entries into the canonical Monday..Sunday order,
/// regardless of backend map order. Days with no entries are skipped.
pub fn ordered_day_groups(
    schedule: &HashMap<String, Vec<ScheduleEntry>>,
) -> Vec<(&'static str, Vec<ScheduleEntry>)> {
    WEEKDAYS
        .iter()
        .filter_map(|day| {
            let entries = schedule.get(*day)?;
            if entries.is_empty() {
                return None;
            }
            Some((*day, entries.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: i64, title: &str, deadline: &str, done: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            deadline: deadline.to_string(),
            done,
            reminder_mode: "NONE".to_string(),
        }
    }

    fn make_entry(id: i64, day: &str, course_name: &str, start_time: &str) -> ScheduleEntry {
        ScheduleEntry {
            id,
            day: day.to_string(),
            course_name: course_name.to_string(),
            start_time: start_time.to_string(),
            reminder_lead_minutes: 15,
        }
    }

    #[test]
    fn test_partition_unfinished_first() {
        let tasks = vec![
            make_task(1, "Essay", "2024-01-01T10:00", false),
            make_task(2, "Reading", "2024-01-02T09:00", true),
        ];

        let (pending, done) = partition_tasks(&tasks);

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "Essay");
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].title, "Reading");
    }

    #[test]
    fn test_partition_is_stable() {
        let tasks = vec![
            make_task(3, "c", "2024-01-01T10:00", true),
            make_task(1, "a", "2024-01-01T10:00", false),
            make_task(4, "d", "2024-01-01T10:00", true),
            make_task(2, "b", "2024-01-01T10:00", false),
        ];

        let (pending, done) = partition_tasks(&tasks);

        // Backend-given relative order kept inside each half
        assert_eq!(pending.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(done.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 4]);
    }

    #[test]
    fn test_partition_empty() {
        let (pending, done) = partition_tasks(&[]);
        assert!(pending.is_empty());
        assert!(done.is_empty());
    }

    #[test]
    fn test_day_groups_canonical_order() {
        let mut schedule = HashMap::new();
        schedule.insert(
            "Wednesday".to_string(),
            vec![make_entry(2, "Wednesday", "Physics", "10:00")],
        );
        schedule.insert(
            "Monday".to_string(),
            vec![make_entry(1, "Monday", "Math", "08:00")],
        );
        schedule.insert(
            "Sunday".to_string(),
            vec![make_entry(3, "Sunday", "Lab", "13:00")],
        );

        let groups = ordered_day_groups(&schedule);

        let days: Vec<_> = groups.iter().map(|(day, _)| *day).collect();
        assert_eq!(days, vec!["Monday", "Wednesday", "Sunday"]);
    }

    #[test]
    fn test_day_groups_skip_empty_days() {
        let mut schedule = HashMap::new();
        schedule.insert("Monday".to_string(), Vec::new());
        schedule.insert(
            "Friday".to_string(),
            vec![make_entry(7, "Friday", "History", "09:00")],
        );

        let groups = ordered_day_groups(&schedule);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "Friday");
    }

    #[test]
    fn test_day_groups_all_empty() {
        let schedule = HashMap::new();
        assert!(ordered_day_groups(&schedule).is_empty());

        let mut only_empty_days = HashMap::new();
        only_empty_days.insert("Tuesday".to_string(), Vec::new());
        assert!(ordered_day_groups(&only_empty_days).is_empty());
    }

    #[test]
    fn test_day_group_single_entry() {
        let mut schedule = HashMap::new();
        schedule.insert(
            "Monday".to_string(),
            vec![make_entry(5, "Monday", "Math", "08:00")],
        );

        let groups = ordered_day_groups(&schedule);

        assert_eq!(groups.len(), 1);
        let (day, entries) = &groups[0];
        assert_eq!(*day, "Monday");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].course_name, "Math");
        assert_eq!(entries[0].start_time, "08:00");
    }
}
