//! The mailer abstraction and best-effort delivery.

use async_trait::async_trait;
use folio_core::contact::{ContactNotification, DeliveryOutcome};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (connection, TLS, authentication, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends a contact notification to the configured recipient.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, notification: &ContactNotification) -> Result<(), EmailError>;
}

/// Attempt delivery once and report how it went.
///
/// `None` means no relay is configured; nothing is attempted. Errors from
/// the mailer are logged and folded into [`DeliveryOutcome::Failed`].
pub async fn deliver(
    mailer: Option<&dyn Mailer>,
    notification: &ContactNotification,
) -> DeliveryOutcome {
    let Some(mailer) = mailer else {
        tracing::debug!("SMTP not configured, skipping contact notification");
        return DeliveryOutcome::NotConfigured;
    };

    match mailer.send(notification).await {
        Ok(()) => DeliveryOutcome::Sent,
        Err(err) => {
            tracing::warn!(error = %err, "Contact notification email failed");
            DeliveryOutcome::Failed(err.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
