//! Agenda and notification command handlers.

use basurapp_store::{
    AgendaItem, AgendaKind, KeyValueBackend, NewAgendaItem, Notification, PreferenceStore,
    Priority,
};
use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::prefs::or_default_logged;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Collection,
    Reminder,
    Maintenance,
    Other,
}

impl From<KindArg> for AgendaKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Collection => Self::Collection,
            KindArg::Reminder => Self::Reminder,
            KindArg::Maintenance => Self::Maintenance,
            KindArg::Other => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    High,
    Medium,
    Low,
}

impl From<PriorityArg> for Priority {
    fn from(priority: PriorityArg) -> Self {
        match priority {
            PriorityArg::High => Self::High,
            PriorityArg::Medium => Self::Medium,
            PriorityArg::Low => Self::Low,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum AgendaCommands {
    /// List agenda items for a day (defaults to today)
    List {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Add an agenda item
    Add {
        title: String,
        /// Time of day, HH:MM
        #[arg(long, default_value = "08:00")]
        time: String,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_enum, default_value_t = KindArg::Other)]
        kind: KindArg,
        #[arg(long, value_enum, default_value_t = PriorityArg::Medium)]
        priority: PriorityArg,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Flip an item's completed flag
    Toggle { id: String },
    /// Delete an item
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum NotificationCommands {
    /// List stored notifications
    List,
    /// Load the sample collection-route feed (known ids are skipped)
    Seed,
    /// Mark a notification as read
    Read { id: String },
    /// Remove a notification by id
    Dismiss { id: String },
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub(crate) fn format_agenda_item(item: &AgendaItem) -> String {
    let mark = if item.completed { 'x' } else { ' ' };
    format!(
        "[{mark}] {} {} ({:?}, {:?}) {}",
        item.time, item.title, item.kind, item.priority, item.id
    )
}

pub(crate) fn run_agenda<B: KeyValueBackend>(
    store: &PreferenceStore<B>,
    command: AgendaCommands,
) -> anyhow::Result<()> {
    match command {
        AgendaCommands::List { date } => {
            let date = date.unwrap_or_else(today);
            let items = or_default_logged(store.agenda_for(date), "agenda items");
            if items.is_empty() {
                println!("no agenda items for {date}");
            }
            for item in &items {
                println!("{}", format_agenda_item(item));
            }
        }
        AgendaCommands::Add {
            title,
            time,
            date,
            kind,
            priority,
            description,
        } => {
            let item = store.add_agenda_item(NewAgendaItem {
                title,
                description,
                time,
                kind: kind.into(),
                priority: priority.into(),
                date: date.unwrap_or_else(today),
            })?;
            tracing::info!(id = %item.id, date = %item.date, "added agenda item");
            println!("{}", format_agenda_item(&item));
        }
        AgendaCommands::Toggle { id } => {
            let item = store.toggle_agenda_item(&id)?;
            println!("{}", format_agenda_item(&item));
        }
        AgendaCommands::Delete { id } => {
            store.delete_agenda_item(&id)?;
            tracing::info!(%id, "deleted agenda item");
        }
    }
    Ok(())
}

pub(crate) fn run_notifications<B: KeyValueBackend>(
    store: &PreferenceStore<B>,
    command: NotificationCommands,
) -> anyhow::Result<()> {
    match command {
        NotificationCommands::List => {
            let notifications = or_default_logged(store.notifications(), "notifications");
            if notifications.is_empty() {
                println!("no notifications");
            }
            for notification in &notifications {
                let marker = if notification.is_new { '*' } else { ' ' };
                println!(
                    "{marker} {} {} ({})",
                    notification.id, notification.message, notification.time
                );
            }
        }
        NotificationCommands::Seed => {
            let added = store.add_notifications(Notification::sample_feed())?;
            tracing::info!(added, "seeded notifications");
            println!("added {added} notifications");
        }
        NotificationCommands::Read { id } => {
            if !store.mark_notification_read(&id)? {
                anyhow::bail!("no notification with id {id}");
            }
            tracing::info!(%id, "marked notification read");
        }
        NotificationCommands::Dismiss { id } => {
            if store.remove_notification(&id)? {
                tracing::info!(%id, "dismissed notification");
            } else {
                anyhow::bail!("no notification with id {id}");
            }
        }
    }
    Ok(())
}
