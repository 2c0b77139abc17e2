//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Authenticated user profile (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "profileImage")]
    pub profile_image: Option<String>,
    #[serde(rename = "emailVerified", default)]
    pub email_verified: Option<bool>,
}

/// Task status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "TODO")]
    Todo,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "DONE")]
    Done,
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "HIGH")]
    High,
}

impl Priority {
    /// Fixed sort rank: HIGH before MEDIUM before LOW
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(rename = "taskName")]
    pub task_name: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: Priority,
    /// ISO 8601 timestamp string as delivered by the server
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    #[serde(rename = "listId")]
    pub list_id: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// List data structure (matches backend); aggregates its tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub color: String,
    #[serde(rename = "isFavorite", default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "DARK")]
    Dark,
    #[serde(rename = "LIGHT")]
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "EN")]
    En,
    #[serde(rename = "ES")]
    Es,
}

/// Date rendering formats selectable in settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    #[serde(rename = "MM_DD_YYYY")]
    MmDdYyyy,
    #[serde(rename = "DD_MM_YYYY")]
    DdMmYyyy,
    #[serde(rename = "YYYY_MM_DD")]
    YyyyMmDd,
}

/// Per-user settings singleton; drives client-side formatting only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub language: Language,
    #[serde(rename = "dateFormat")]
    pub date_format: DateFormat,
    #[serde(rename = "defaultPriority")]
    pub default_priority: Priority,
    #[serde(rename = "defaultStatus")]
    pub default_status: TaskStatus,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: Language::En,
            date_format: DateFormat::MmDdYyyy,
            default_priority: Priority::Medium,
            default_status: TaskStatus::Todo,
        }
    }
}

/// Response envelope wrapping every REST payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

///// Modal dialog request: an identifier plus serializable payload, never callbacks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModalIntent {
    NewTask { list_id: Option<String> },
    EditTask { task: Task },
    ConfirmDeleteTask { task_id: String, task_name: String },
    NewList,
    EditList { list: TaskList },
    ConfirmDeleteList { list_id: String, title: String },
    ConfirmDeleteAccount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification shown by the toast stack
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: ToastKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_names() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
        let status: TaskStatus = serde_json::from_str("\"DONE\"").unwrap();
        assert_eq!(status, TaskStatus::Done);
    }

    #[test]
    fn test_task_decodes_server_shape() {
        let json = r#"{
            "id": "t1",
            "taskName": "Write report",
            "description": null,
            "status": "TODO",
            "priority": "HIGH",
            "dueDate": "2024-03-15T12:00:00.000Z",
            "listId": "l1"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.task_name, "Write report");
        assert_eq!(task.priority, Priority::High);
        assert!(!task.archived);
    }

    #[test]
    fn test_envelope_decoding() {
        let json = r##"{ "success": true, "data": { "id": "l1", "title": "Inbox", "description": null, "color": "#ff0000" } }"##;
        let envelope: ApiEnvelope<TaskList> = serde_json::from_str(json).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap().title, "Inbox");
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::High.rank() < Priority::Medium.rank());
        assert!(Priority::Medium.rank() < Priority::Low.rank());
    }
}
