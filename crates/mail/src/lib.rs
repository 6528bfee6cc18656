//! Outbound email for contact form notifications.
//!
//! [`SmtpMailer`] sends through a relay described by [`MailConfig`];
//! [`deliver`] wraps any [`Mailer`] so a missing or failing relay becomes a
//! [`DeliveryOutcome`](folio_core::contact::DeliveryOutcome) instead of an
//! error.

pub mod config;
pub mod delivery;
pub mod smtp;

pub use config::MailConfig;
pub use delivery::{deliver, EmailError, Mailer};
pub use smtp::SmtpMailer;
