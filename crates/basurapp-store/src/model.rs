//! Shapes persisted in the preference document.
//!
//! Field names serialize in camelCase and every field is defaulted, so
//! documents written before a field existed still load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The single JSON document stored under [`crate::DATA_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageData {
    /// Free-form task records; no schema is imposed on them.
    pub tasks: Vec<serde_json::Value>,
    pub notifications: bool,
    pub user_address: String,
    pub agenda_items: Vec<AgendaItem>,
    pub user_email: String,
    pub user_name: String,
    pub notifications_list: Vec<Notification>,
}

/// Shallow-merge update for [`StorageData`]: `Some` fields overwrite.
#[derive(Debug, Clone, Default)]
pub struct StoragePatch {
    pub tasks: Option<Vec<serde_json::Value>>,
    pub notifications: Option<bool>,
    pub user_address: Option<String>,
    pub agenda_items: Option<Vec<AgendaItem>>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub notifications_list: Option<Vec<Notification>>,
}

impl StorageData {
    pub fn apply(&mut self, patch: StoragePatch) {
        if let Some(tasks) = patch.tasks {
            self.tasks = tasks;
        }
        if let Some(notifications) = patch.notifications {
            self.notifications = notifications;
        }
        if let Some(user_address) = patch.user_address {
            self.user_address = user_address;
        }
        if let Some(agenda_items) = patch.agenda_items {
            self.agenda_items = agenda_items;
        }
        if let Some(user_email) = patch.user_email {
            self.user_email = user_email;
        }
        if let Some(user_name) = patch.user_name {
            self.user_name = user_name;
        }
        if let Some(notifications_list) = patch.notifications_list {
            self.notifications_list = notifications_list;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgendaKind {
    Collection,
    Reminder,
    Maintenance,
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Local time of day, `HH:MM`.
    #[serde(default)]
    pub time: String,
    #[serde(rename = "type", default)]
    pub kind: AgendaKind,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    pub date: NaiveDate,
}

/// Input for [`crate::PreferenceStore::add_agenda_item`]; the id is assigned
/// on insert.
#[derive(Debug, Clone)]
pub struct NewAgendaItem {
    pub title: String,
    pub description: String,
    pub time: String,
    pub kind: AgendaKind,
    pub priority: Priority,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Arriving,
    Delayed,
    Completed,
    RouteChange,
    WeatherAlert,
    TaskReminder,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Notification {
    /// The collection-route feed shown to a new user.
    #[must_use]
    pub fn sample_feed() -> Vec<Self> {
        vec![
            Self {
                id: "1".to_string(),
                kind: NotificationKind::Arriving,
                message: "🚛 Camión recolector #247 se encuentra a 3 cuadras de tu ubicación"
                    .to_string(),
                time: "Hace 2 min".to_string(),
                is_new: true,
                priority: Priority::High,
                estimated_time: Some("8-12 min".to_string()),
                location: Some("Av. Principal con Calle 15".to_string()),
            },
            Self {
                id: "2".to_string(),
                kind: NotificationKind::RouteChange,
                message:
                    "📍 Ruta optimizada: El camión tomará la Calle 12 para evitar construcción"
                        .to_string(),
                time: "Hace 5 min".to_string(),
                is_new: true,
                priority: Priority::Medium,
                estimated_time: None,
                location: Some("Sector Norte".to_string()),
            },
            Self {
                id: "3".to_string(),
                kind: NotificationKind::WeatherAlert,
                message: "🌧️ Posible retraso de 10-15 min debido a lluvia ligera en la zona"
                    .to_string(),
                time: "Hace 8 min".to_string(),
                is_new: true,
                priority: Priority::Medium,
                estimated_time: None,
                location: None,
            },
            Self {
                id: "4".to_string(),
                kind: NotificationKind::Completed,
                message: "✅ Recolección completada exitosamente en Calle 10. Próxima parada: tu ubicación"
                    .to_string(),
                time: "Hace 15 min".to_string(),
                is_new: false,
                priority: Priority::Low,
                estimated_time: None,
                location: Some("Calle 10, Casa #45".to_string()),
            },
        ]
    }
}
