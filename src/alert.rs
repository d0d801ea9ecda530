//! Success and error messages shown to the user.

use maud::{Markup, html};

/// A dismissable message describing the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// The action succeeded.
    Success {
        /// The headline, e.g. "Backup imported".
        message: String,
        /// Extra context shown under the headline.
        details: String,
    },
    /// The action failed.
    Error {
        /// The headline, e.g. "Import failed".
        message: String,
        /// Extra context shown under the headline. May be empty.
        details: String,
    },
}

impl Alert {
    /// Create a success alert.
    pub fn success(message: &str, details: &str) -> Self {
        Alert::Success {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create an error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Alert::Error {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Create an error alert without details.
    pub fn error_simple(message: &str) -> Self {
        Self::error(message, "")
    }

    /// Render the alert as HTML.
    pub fn into_html(self) -> Markup {
        let (class, message, details) = match self {
            Alert::Success { message, details } => ("alert alert-success", message, details),
            Alert::Error { message, details } => ("alert alert-error", message, details),
        };

        html! {
            div class=(class) role="alert" {
                p class="alert-message" { (message) }
                @if !details.is_empty() {
                    p class="alert-details" { (details) }
                }
            }
        }
    }
}

#[cfg(test)]
mod alert_tests {
    use super::Alert;

    #[test]
    fn success_alert_renders_message_and_details() {
        let html = Alert::success("Backup imported", "Restored 2 transactions.")
            .into_html()
            .into_string();

        assert!(html.contains("alert-success"));
        assert!(html.contains("Backup imported"));
        assert!(html.contains("Restored 2 transactions."));
    }

    #[test]
    fn simple_error_alert_omits_the_details_paragraph() {
        let html = Alert::error_simple("Import failed").into_html().into_string();

        assert!(html.contains("alert-error"));
        assert!(html.contains("Import failed"));
        assert!(!html.contains("alert-details"));
    }
}
