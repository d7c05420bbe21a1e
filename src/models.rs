//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Canonical rendering order for schedule day groups.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Task data structure (matches backend)
///
/// `id` is 0 on create; the backend assigns the real id. `reminder_mode`
/// is an opaque code interpreted by the backend scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub deadline: String,
    pub done: bool,
    pub reminder_mode: String,
}

/// Schedule entry data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: i64,
    pub day: String,
    pub course_name: String,
    pub start_time: String,
    pub reminder_lead_minutes: i32,
}

/// Payload of the backend's reminder event channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReminderEvent {
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_wire_shape() {
        let task: Task = serde_json::from_str(
            r#"{"id":1,"title":"Essay","description":"Draft two pages","deadline":"2024-01-01T10:00","done":false,"reminderMode":"NONE"}"#,
        )
        .unwrap();
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Essay");
        assert_eq!(task.reminder_mode, "NONE");
        assert!(!task.done);

        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("reminderMode").is_some());
        assert!(json.get("reminder_mode").is_none());
    }

    #[test]
    fn test_task_description_defaults_to_empty() {
        let task: Task = serde_json::from_str(
            r#"{"id":2,"title":"Reading","deadline":"2024-01-02T09:00","done":true,"reminderMode":"1H"}"#,
        )
        .unwrap();
        assert_eq!(task.description, "");
    }

    #[test]
    fn test_schedule_entry_wire_shape() {
        let entry: ScheduleEntry = serde_json::from_str(
            r#"{"id":5,"day":"Monday","courseName":"Math","startTime":"08:00","reminderLeadMinutes":15}"#,
        )
        .unwrap();
        assert_eq!(entry.course_name, "Math");
        assert_eq!(entry.start_time, "08:00");
        assert_eq!(entry.reminder_lead_minutes, 15);

        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("courseName").is_some());
        assert!(json.get("startTime").is_some());
        assert!(json.get("reminderLeadMinutes").is_some());
    }

    #[test]
    fn test_reminder_event_payload() {
        let event: ReminderEvent =
            serde_json::from_str(r#"{"title":"Class soon","message":"Math starts at 08:00"}"#)
                .unwrap();
        assert_eq!(event.title, "Class soon");
        assert_eq!(event.message, "Math starts at 08:00");
    }
}
