//! SMTP relay configuration.

/// Default SMTP port (STARTTLS submission).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Configuration for the contact notification relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
    /// Where notifications are sent.
    pub recipient: String,
    /// Fixed "From" address. When unset, the submitter's address is used.
    pub from_address: Option<String>,
}

impl MailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if either the relay host or the recipient is missing,
    /// signalling that delivery is not configured and should be skipped.
    ///
    /// | Variable           | Required | Default |
    /// |--------------------|----------|---------|
    /// | `SMTP_HOST`        | yes      | —       |
    /// | `SMTP_PORT`        | no       | `587`   |
    /// | `SMTP_USER`        | no       | —       |
    /// | `SMTP_PASS`        | no       | —       |
    /// | `CONTACT_TO_EMAIL` | yes*     | —       |
    /// | `TO_EMAIL`         | yes*     | —       |
    /// | `SMTP_FROM`        | no       | —       |
    ///
    /// \* `CONTACT_TO_EMAIL` wins; `TO_EMAIL` is the fallback.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] but reads variables through `lookup`.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let smtp_host = var("SMTP_HOST")?;
        let recipient = var("CONTACT_TO_EMAIL").or_else(|| var("TO_EMAIL"))?;

        Some(Self {
            smtp_host,
            smtp_port: var("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user: var("SMTP_USER"),
            smtp_password: var("SMTP_PASS"),
            recipient,
            from_address: var("SMTP_FROM"),
        })
    }
}
