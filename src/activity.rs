//! The activity log: a read-only record of what happened this session.
//!
//! Mutating endpoints append entries here so the user can review recent
//! actions. The log is display-only; nothing in the app reads it back for
//! decision making.

use axum::extract::State;
use maud::{Markup, html};
use time::{
    OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};

use crate::{AppState, endpoints, html::page};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");

/// One recorded action.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    /// Who performed the action.
    pub user: String,
    /// What was done, e.g. "Added transaction \"Groceries\"".
    pub action: String,
    /// When the action happened.
    pub timestamp: OffsetDateTime,
}

/// An append-only list of [ActivityEntry] records for the session.
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    /// Append an entry timestamped with the current time.
    pub fn record(&mut self, user: &str, action: &str) {
        self.entries.push(ActivityEntry {
            user: user.to_owned(),
            action: action.to_owned(),
            timestamp: OffsetDateTime::now_utc(),
        });
    }

    /// The recorded entries, oldest first.
    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }
}

/// Renders the activity log page.
///
/// # Panics
///
/// Panics if the lock for the activity log is already held by the same thread.
pub async fn get_activity_page(State(state): State<AppState>) -> Markup {
    let activity = state.activity.lock().unwrap();

    activity_page_view(activity.entries())
}

fn activity_page_view(entries: &[ActivityEntry]) -> Markup {
    let content = html! {
        div class="card" {
            h2 { "Activity Log" }
            p class="card-subtitle" { "Recent activity for this session." }

            @if entries.is_empty() {
                p class="empty-state" { "No activity yet." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "User" }
                            th { "Action" }
                            th { "Timestamp" }
                        }
                    }
                    tbody {
                        @for entry in entries {
                            tr {
                                td { (entry.user) }
                                td { (entry.action) }
                                td {
                                    (entry
                                        .timestamp
                                        .format(TIMESTAMP_FORMAT)
                                        .unwrap_or_else(|_| entry.timestamp.to_string()))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    page("Activity Log", endpoints::ACTIVITY_VIEW, &content)
}

#[cfg(test)]
mod activity_tests {
    use super::{ActivityLog, activity_page_view};

    #[test]
    fn record_appends_oldest_first() {
        let mut log = ActivityLog::default();

        log.record("User", "Exported backup");
        log.record("User", "Imported backup");

        let actions: Vec<_> = log
            .entries()
            .iter()
            .map(|entry| entry.action.as_str())
            .collect();
        assert_eq!(actions, ["Exported backup", "Imported backup"]);
    }

    #[test]
    fn empty_log_renders_empty_state() {
        let html = activity_page_view(&[]).into_string();

        assert!(html.contains("No activity yet."));
    }

    #[test]
    fn entries_render_in_the_table() {
        let mut log = ActivityLog::default();
        log.record("User", "Added transaction \"Groceries\"");

        let html = activity_page_view(log.entries()).into_string();

        assert!(html.contains("Added transaction"));
        assert!(html.contains("User"));
    }
}
