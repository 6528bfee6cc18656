//! Contact form schema and the outcome types of the contact workflow.
//!
//! A submission goes through two independent best-effort steps, persisting
//! the message and emailing a notification. Each step reports a
//! [`PersistOutcome`] / [`DeliveryOutcome`], and [`ContactReceipt`] folds the
//! pair into the response the caller sees.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Subject line of every contact notification email.
pub const NOTIFICATION_SUBJECT: &str = "New portfolio inquiry";

/// Placeholder written in the notification when no phone was given.
const NO_PHONE: &str = "-";

// ---------------------------------------------------------------------------
// ContactMessage
// ---------------------------------------------------------------------------

/// A contact form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[validate(length(min = 2, max = 120))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(length(min = 5, max = 5000))]
    pub message: String,
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

/// The plaintext email sent to the site owner for a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNotification {
    pub subject: String,
    pub body: String,
    /// Address of the person who filled in the form.
    pub sender: String,
}

impl ContactNotification {
    pub fn compose(message: &ContactMessage) -> Self {
        let phone = message
            .phone
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(NO_PHONE);

        let body = format!(
            "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}\n",
            message.name, message.email, phone, message.message
        );

        Self {
            subject: NOTIFICATION_SUBJECT.to_string(),
            body,
            sender: message.email.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Result of trying to store a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Stored under the given document id.
    Saved(String),
    /// Not stored; carries the reason for logging.
    Failed(String),
}

impl PersistOutcome {
    pub fn saved_id(&self) -> Option<&str> {
        match self {
            Self::Saved(id) => Some(id),
            Self::Failed(_) => None,
        }
    }
}

/// Result of trying to email a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Sent,
    /// No relay host or no recipient configured; nothing was attempted.
    NotConfigured,
    /// The relay was contacted and the attempt failed.
    Failed(String),
}

impl DeliveryOutcome {
    /// Human-readable reason the email did not go out, if it did not.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Sent => None,
            Self::NotConfigured => Some("SMTP not configured"),
            Self::Failed(reason) => Some(reason),
        }
    }
}

// ---------------------------------------------------------------------------
// Receipt
// ---------------------------------------------------------------------------

/// Wire status of a contact submission.
///
/// `Stored` is reported for every undelivered submission, including ones
/// that could not be saved; only `detail` tells those apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Emailed,
    Stored,
}

/// Response body of `POST /api/contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReceipt {
    pub status: ContactStatus,
    pub id: Option<String>,
    pub detail: String,
}

impl ContactReceipt {
    pub fn from_outcomes(persist: &PersistOutcome, delivery: &DeliveryOutcome) -> Self {
        let id = persist.saved_id().map(str::to_string);

        let (status, detail) = match (delivery.failure_reason(), &id) {
            (None, _) => (
                ContactStatus::Emailed,
                "Message emailed successfully".to_string(),
            ),
            (Some(reason), Some(_)) => (
                ContactStatus::Stored,
                format!("Email not sent: {reason}. Saved to database."),
            ),
            (Some(_), None) => (
                ContactStatus::Stored,
                "Email not sent and could not save.".to_string(),
            ),
        };

        Self { status, id, detail }
    }
}
