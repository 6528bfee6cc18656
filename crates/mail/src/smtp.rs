//! `lettre`-backed SMTP mailer.

use std::time::Duration;

use async_trait::async_trait;
use folio_core::contact::ContactNotification;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::delivery::{EmailError, Mailer};

/// Upper bound on connecting to and talking with the relay.
const SMTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Sends contact notifications through an SMTP relay using STARTTLS.
///
/// Credentials are only presented when both user and password are
/// configured. One connection is opened per message.
pub struct SmtpMailer {
    config: MailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: MailConfig) -> Result<Self, EmailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .timeout(Some(SMTP_TIMEOUT));

        if let (Some(user), Some(pass)) = (&config.smtp_user, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            config,
        })
    }

    /// Assemble the MIME message for a notification.
    ///
    /// With a fixed `from_address` the submitter goes in `Reply-To`;
    /// otherwise the submitter is the sender.
    pub fn build_message(&self, notification: &ContactNotification) -> Result<Message, EmailError> {
        let submitter: Mailbox = notification.sender.parse()?;

        let builder = match &self.config.from_address {
            Some(from) => Message::builder().from(from.parse()?).reply_to(submitter),
            None => Message::builder().from(submitter),
        };

        builder
            .to(self.config.recipient.parse()?)
            .subject(notification.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(notification.body.clone())
            .map_err(|e| EmailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, notification: &ContactNotification) -> Result<(), EmailError> {
        let email = self.build_message(notification)?;
        self.transport.send(email).await?;

        tracing::info!(
            to = %self.config.recipient,
            host = %self.config.smtp_host,
            "Contact notification email sent"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn config(from_address: Option<&str>) -> MailConfig {
        MailConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 1,
            smtp_user: None,
            smtp_password: None,
            recipient: "owner@example.com".to_string(),
            from_address: from_address.map(str::to_string),
        }
    }

    fn notification() -> ContactNotification {
        ContactNotification {
            subject: "New portfolio inquiry".to_string(),
            body: "Name: Ada\nEmail: ada@example.com\n".to_string(),
            sender: "ada@example.com".to_string(),
        }
    }

    fn formatted(message: &Message) -> String {
        String::from_utf8(message.formatted()).unwrap()
    }

    #[test]
    fn submitter_is_sender_without_fixed_from() {
        let mailer = SmtpMailer::new(config(None)).unwrap();
        let text = formatted(&mailer.build_message(&notification()).unwrap());
        assert!(text.contains("From: ada@example.com"));
        assert!(text.contains("To: owner@example.com"));
        assert!(text.contains("Subject: New portfolio inquiry"));
        assert!(!text.contains("Reply-To"));
    }

    #[test]
    fn fixed_from_moves_submitter_to_reply_to() {
        let mailer = SmtpMailer::new(config(Some("site@example.com"))).unwrap();
        let text = formatted(&mailer.build_message(&notification()).unwrap());
        assert!(text.contains("From: site@example.com"));
        assert!(text.contains("Reply-To: ada@example.com"));
    }

    #[test]
    fn bad_submitter_address_is_an_address_error() {
        let mailer = SmtpMailer::new(config(None)).unwrap();
        let mut n = notification();
        n.sender = "nobody".to_string();
        assert_matches!(mailer.build_message(&n), Err(EmailError::Address(_)));
    }

    #[tokio::test]
    async fn unreachable_relay_is_a_transport_error() {
        let mailer = SmtpMailer::new(config(None)).unwrap();
        let result = mailer.send(&notification()).await;
        assert_matches!(result, Err(EmailError::Transport(_)));
    }
}
