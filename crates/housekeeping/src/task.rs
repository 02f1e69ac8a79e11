use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use stayops_core::{RoomId, TaskId};

/// What kind of work the task is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Cleaning,
    Maintenance,
    Inspection,
}

/// Scheduling urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Progress of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// A housekeeping/maintenance task as shown in the tasks panel.
///
/// `assigned_to` is the staff email of whoever picked the task up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousekeepingTask {
    pub id: TaskId,
    pub room_id: RoomId,
    pub task_type: TaskType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub assigned_to: String,
    pub created_at: DateTime<Utc>,
    pub due: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl HousekeepingTask {
    /// Overdue means past due and not yet completed.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status != TaskStatus::Completed && now > self.due
    }

    /// Sample queue seeded into the tasks panel, linked to whatever room
    /// identifiers the caller provides.
    pub fn samples_for(rooms: &[RoomId]) -> Vec<HousekeepingTask> {
        let room = |i: usize| rooms.get(i).copied().unwrap_or_default();
        let at = |y, m, d, h: u32| {
            Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
                .single()
                .unwrap_or_default()
        };

        vec![
            HousekeepingTask {
                id: TaskId::new(),
                room_id: room(3),
                task_type: TaskType::Cleaning,
                title: "Turnover clean".to_string(),
                description: "Full clean after checkout, restock minibar".to_string(),
                priority: Priority::High,
                status: TaskStatus::InProgress,
                assigned_to: "housekeeping@hotel.com".to_string(),
                created_at: at(2024, 1, 15, 8),
                due: at(2024, 1, 15, 14),
                completed_at: None,
            },
            HousekeepingTask {
                id: TaskId::new(),
                room_id: room(4),
                task_type: TaskType::Maintenance,
                title: "Fix bathroom leak".to_string(),
                description: "Guest reported dripping under the sink".to_string(),
                priority: Priority::Urgent,
                status: TaskStatus::Pending,
                assigned_to: "housekeeping@hotel.com".to_string(),
                created_at: at(2024, 1, 14, 18),
                due: at(2024, 1, 16, 12),
                completed_at: None,
            },
            HousekeepingTask {
                id: TaskId::new(),
                room_id: room(0),
                task_type: TaskType::Inspection,
                title: "Quarterly safety inspection".to_string(),
                description: "Smoke detector and balcony railing check".to_string(),
                priority: Priority::Low,
                status: TaskStatus::Completed,
                assigned_to: "manager@hotel.com".to_string(),
                created_at: at(2024, 1, 10, 9),
                due: at(2024, 1, 12, 17),
                completed_at: Some(at(2024, 1, 11, 15)),
            },
        ]
    }
}

/// The tasks-panel status dropdown: `None` means all tasks.
pub fn filter_by_status(
    tasks: &[HousekeepingTask],
    status: Option<TaskStatus>,
) -> Vec<&HousekeepingTask> {
    tasks
        .iter()
        .filter(|task| status.is_none_or(|s| task.status == s))
        .collect()
}

/// Tasks at or above a minimum priority, most urgent first.
pub fn filter_by_priority(
    tasks: &[HousekeepingTask],
    at_least: Priority,
) -> Vec<&HousekeepingTask> {
    let mut hits: Vec<&HousekeepingTask> =
        tasks.iter().filter(|task| task.priority >= at_least).collect();
    hits.sort_by(|a, b| b.priority.cmp(&a.priority));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<HousekeepingTask> {
        HousekeepingTask::samples_for(&[RoomId::new(), RoomId::new(), RoomId::new()])
    }

    #[test]
    fn status_filter_matches_only_that_status() {
        let tasks = samples();
        let pending = filter_by_status(&tasks, Some(TaskStatus::Pending));
        assert_eq!(pending.len(), 1);
        assert_eq!(filter_by_status(&tasks, None).len(), tasks.len());
    }

    #[test]
    fn priority_filter_is_a_threshold_sorted_descending() {
        let tasks = samples();
        let hot = filter_by_priority(&tasks, Priority::High);
        assert_eq!(hot.len(), 2);
        assert_eq!(hot[0].priority, Priority::Urgent);
    }

    #[test]
    fn completed_tasks_are_never_overdue() {
        let tasks = samples();
        let long_after = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().unwrap();
        let completed = &tasks[2];
        assert!(!completed.is_overdue(long_after));
        assert!(tasks[0].is_overdue(long_after));
    }
}
