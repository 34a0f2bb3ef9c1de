//! Typed preference store over a [`KeyValueBackend`].
//!
//! Preferences live in one JSON document under [`DATA_KEY`]; the accepted
//! address lives on its own under [`ADDRESS_KEY`]. Only the address string is
//! persisted, never its coordinates.

use chrono::NaiveDate;

use crate::backend::KeyValueBackend;
use crate::error::StoreError;
use crate::model::{AgendaItem, NewAgendaItem, Notification, StorageData, StoragePatch};

pub const DATA_KEY: &str = "basurapp_data";
pub const ADDRESS_KEY: &str = "userAddress";

pub struct PreferenceStore<B> {
    backend: B,
}

impl<B: KeyValueBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Reads the preference document; an absent document is the default.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Backend`] if the backend read fails.
    /// - [`StoreError::Corrupt`] if the stored document does not parse.
    pub fn data(&self) -> Result<StorageData, StoreError> {
        match self.backend.get(DATA_KEY)? {
            None => Ok(StorageData::default()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                key: DATA_KEY.to_string(),
                source: e,
            }),
        }
    }

    /// Merges `patch` into the stored document and writes it back.
    ///
    /// # Errors
    ///
    /// Any error from [`PreferenceStore::data`], plus [`StoreError::Serialize`]
    /// or [`StoreError::Backend`] on write.
    pub fn update(&self, patch: StoragePatch) -> Result<StorageData, StoreError> {
        let mut data = self.data()?;
        data.apply(patch);
        self.write(&data)?;
        Ok(data)
    }

    fn write(&self, data: &StorageData) -> Result<(), StoreError> {
        let raw = serde_json::to_string(data).map_err(|e| StoreError::Serialize {
            key: DATA_KEY.to_string(),
            source: e,
        })?;
        self.backend.set(DATA_KEY, &raw)
    }

    /// Removes the preference document. The standalone address is kept.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend write fails.
    pub fn clear_data(&self) -> Result<(), StoreError> {
        self.backend.remove(DATA_KEY)
    }

    // -----------------------------------------------------------------------
    // Address
    // -----------------------------------------------------------------------

    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend write fails.
    pub fn save_user_address(&self, address: &str) -> Result<(), StoreError> {
        self.backend.set(ADDRESS_KEY, address)
    }

    /// `Ok(None)` means no address has been saved.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend read fails.
    pub fn user_address(&self) -> Result<Option<String>, StoreError> {
        self.backend.get(ADDRESS_KEY)
    }

    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if the backend write fails.
    pub fn clear_user_address(&self) -> Result<(), StoreError> {
        self.backend.remove(ADDRESS_KEY)
    }

    // -----------------------------------------------------------------------
    // Document fields
    // -----------------------------------------------------------------------

    /// # Errors
    ///
    /// See [`PreferenceStore::update`].
    pub fn save_tasks(&self, tasks: Vec<serde_json::Value>) -> Result<(), StoreError> {
        self.update(StoragePatch {
            tasks: Some(tasks),
            ..StoragePatch::default()
        })
        .map(drop)
    }

    /// # Errors
    ///
    /// See [`PreferenceStore::data`].
    pub fn tasks(&self) -> Result<Vec<serde_json::Value>, StoreError> {
        Ok(self.data()?.tasks)
    }

    /// # Errors
    ///
    /// See [`PreferenceStore::update`].
    pub fn save_notification_setting(&self, enabled: bool) -> Result<(), StoreError> {
        self.update(StoragePatch {
            notifications: Some(enabled),
            ..StoragePatch::default()
        })
        .map(drop)
    }

    /// # Errors
    ///
    /// See [`PreferenceStore::data`].
    pub fn notification_setting(&self) -> Result<bool, StoreError> {
        Ok(self.data()?.notifications)
    }

    /// Stores the account email and display name; a missing name is stored
    /// as empty.
    ///
    /// # Errors
    ///
    /// See [`PreferenceStore::update`].
    pub fn save_user_data(&self, email: &str, name: Option<&str>) -> Result<(), StoreError> {
        self.update(StoragePatch {
            user_email: Some(email.to_string()),
            user_name: Some(name.unwrap_or_default().to_string()),
            ..StoragePatch::default()
        })
        .map(drop)
    }

    /// # Errors
    ///
    /// See [`PreferenceStore::data`].
    pub fn user_email(&self) -> Result<String, StoreError> {
        Ok(self.data()?.user_email)
    }

    /// # Errors
    ///
    /// See [`PreferenceStore::data`].
    pub fn user_name(&self) -> Result<String, StoreError> {
        Ok(self.data()?.user_name)
    }

    // -----------------------------------------------------------------------
    // Agenda
    // -----------------------------------------------------------------------

    /// # Errors
    ///
    /// See [`PreferenceStore::update`].
    pub fn save_agenda_items(&self, items: Vec<AgendaItem>) -> Result<(), StoreError> {
        self.update(StoragePatch {
            agenda_items: Some(items),
            ..StoragePatch::default()
        })
        .map(drop)
    }

    /// # Errors
    ///
    /// See [`PreferenceStore::data`].
    pub fn agenda_items(&self) -> Result<Vec<AgendaItem>, StoreError> {
        Ok(self.data()?.agenda_items)
    }

    /// Items scheduled on `date`, in stored order.
    ///
    /// # Errors
    ///
    /// See [`PreferenceStore::data`].
    pub fn agenda_for(&self, date: NaiveDate) -> Result<Vec<AgendaItem>, StoreError> {
        Ok(self
            .agenda_items()?
            .into_iter()
            .filter(|item| item.date == date)
            .collect())
    }

    /// Appends a new, not-yet-completed item with a fresh id.
    ///
    /// # Errors
    ///
    /// See [`PreferenceStore::update`].
    pub fn add_agenda_item(&self, new_item: NewAgendaItem) -> Result<AgendaItem, StoreError> {
        let item = AgendaItem {
            id: uuid::Uuid::new_v4().to_string(),
            title: new_item.title,
            description: new_item.description,
            time: new_item.time,
            kind: new_item.kind,
            priority: new_item.priority,
            completed: false,
            date: new_item.date,
        };
        let mut items = self.agenda_items()?;
        items.push(item.clone());
        self.save_agenda_items(items)?;
        Ok(item)
    }

    /// Flips the `completed` flag and returns the updated item.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no item has `id`, otherwise see
    /// [`PreferenceStore::update`].
    pub fn toggle_agenda_item(&self, id: &str) -> Result<AgendaItem, StoreError> {
        let mut items = self.agenda_items()?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::NotFound {
                kind: "agenda item",
                id: id.to_string(),
            })?;
        item.completed = !item.completed;
        let updated = item.clone();
        self.save_agenda_items(items)?;
        Ok(updated)
    }

    /// # Errors
    ///
    /// [`StoreError::NotFound`] if no item has `id`, otherwise see
    /// [`PreferenceStore::update`].
    pub fn delete_agenda_item(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.agenda_items()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(StoreError::NotFound {
                kind: "agenda item",
                id: id.to_string(),
            });
        }
        self.save_agenda_items(items)
    }

    // -----------------------------------------------------------------------
    // Notifications
    // -----------------------------------------------------------------------

    /// # Errors
    ///
    /// See [`PreferenceStore::update`].
    pub fn save_notifications(&self, notifications: Vec<Notification>) -> Result<(), StoreError> {
        self.update(StoragePatch {
            notifications_list: Some(notifications),
            ..StoragePatch::default()
        })
        .map(drop)
    }

    /// # Errors
    ///
    /// See [`PreferenceStore::data`].
    pub fn notifications(&self) -> Result<Vec<Notification>, StoreError> {
        Ok(self.data()?.notifications_list)
    }

    /// Removes the notification with `id`. Returns whether one was removed.
    ///
    /// # Errors
    ///
    /// See [`PreferenceStore::update`].
    pub fn remove_notification(&self, id: &str) -> Result<bool, StoreError> {
        let mut notifications = self.notifications()?;
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        if notifications.len() == before {
            return Ok(false);
        }
        self.save_notifications(notifications)?;
        Ok(true)
    }

    /// Clears the unread flag on the notification with `id`. Returns whether
    /// a notification with that id exists.
    ///
    /// # Errors
    ///
    /// See [`PreferenceStore::update`].
    pub fn mark_notification_read(&self, id: &str) -> Result<bool, StoreError> {
        let mut notifications = self.notifications()?;
        let Some(notification) = notifications.iter_mut().find(|n| n.id == id) else {
            return Ok(false);
        };
        if notification.is_new {
            notification.is_new = false;
            self.save_notifications(notifications)?;
        }
        Ok(true)
    }

    /// Inserts `incoming` ahead of the stored list, skipping ids already
    /// present. Returns how many were added.
    ///
    /// # Errors
    ///
    /// See [`PreferenceStore::update`].
    pub fn add_notifications(&self, incoming: Vec<Notification>) -> Result<usize, StoreError> {
        let existing = self.notifications()?;
        let mut merged: Vec<Notification> = incoming
            .into_iter()
            .filter(|n| !existing.iter().any(|e| e.id == n.id))
            .collect();
        let added = merged.len();
        if added > 0 {
            merged.extend(existing);
            self.save_notifications(merged)?;
        }
        Ok(added)
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
