//! SMTP delivery over a shared async transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};

use crate::config::{MailConfig, RelayConfig, TimeoutConfig};
use crate::contact::ContactSubmission;
use crate::mail::{message, MailError, MailSender};

/// Production mail sender: one pooled STARTTLS transport, shared across
/// all in-flight requests.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    recipient: Mailbox,
    send_timeout: Duration,
}

impl SmtpMailer {
    /// Build the transport from the mail account configuration.
    ///
    /// Fails when the account is incomplete (no user or no password) or
    /// the relay host / recipient cannot be parsed. The caller decides
    /// whether that is fatal; see [`build_mailer`].
    pub fn from_config(mail: &MailConfig, timeouts: &TimeoutConfig) -> Result<Self, MailError> {
        let (user, password) = match (&mail.user, &mail.password) {
            (Some(user), Some(password)) => (user.clone(), password.clone()),
            _ => return Err(MailError::NotConfigured),
        };

        let recipient: Mailbox = mail
            .recipient_address()
            .ok_or(MailError::NotConfigured)?
            .parse()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&mail.relay_host)?
            .credentials(Credentials::new(user, password))
            .build();

        Ok(Self {
            transport,
            recipient,
            send_timeout: Duration::from_secs(timeouts.mail_send_secs),
        })
    }
}

#[async_trait]
impl MailSender for SmtpMailer {
    async fn verify(&self) -> Result<(), MailError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(MailError::Rejected),
            Err(e) => Err(e.into()),
        }
    }

    async fn send(&self, submission: &ContactSubmission) -> Result<(), MailError> {
        let message = message::build_message(submission, &self.recipient)?;

        let response = tokio::time::timeout(self.send_timeout, self.transport.send(message))
            .await
            .map_err(|_| MailError::Timeout(self.send_timeout))??;

        if response.is_positive() {
            Ok(())
        } else {
            Err(MailError::Rejected)
        }
    }
}

/// Installed when the SMTP transport cannot be constructed, so the
/// process still starts and the endpoint answers 500 on send attempts.
pub struct DisabledMailer;

#[async_trait]
impl MailSender for DisabledMailer {
    async fn verify(&self) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }

    async fn send(&self, _submission: &ContactSubmission) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }
}

/// Build the process-wide mail sender from the loaded configuration.
///
/// Construction failure is logged and downgraded to [`DisabledMailer`];
/// misconfiguration must be visible without crashing the process.
pub fn build_mailer(config: &RelayConfig) -> Arc<dyn MailSender> {
    match SmtpMailer::from_config(&config.mail, &config.timeouts) {
        Ok(mailer) => Arc::new(mailer),
        Err(e) => {
            tracing::error!(
                error = %e,
                "Mail transport unavailable; submissions will fail until configured"
            );
            Arc::new(DisabledMailer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_account_is_not_configured() {
        let mail = MailConfig::default();
        assert!(matches!(
            SmtpMailer::from_config(&mail, &TimeoutConfig::default()),
            Err(MailError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn complete_account_builds_a_transport() {
        let mail = MailConfig {
            user: Some("me@example.com".into()),
            password: Some("hunter2".into()),
            ..MailConfig::default()
        };

        let mailer = SmtpMailer::from_config(&mail, &TimeoutConfig::default()).unwrap();
        assert_eq!(mailer.recipient.email.to_string(), "me@example.com");
    }

    #[tokio::test]
    async fn recipient_override_wins() {
        let mail = MailConfig {
            user: Some("me@example.com".into()),
            password: Some("hunter2".into()),
            recipient: Some("inbox@example.com".into()),
            ..MailConfig::default()
        };

        let mailer = SmtpMailer::from_config(&mail, &TimeoutConfig::default()).unwrap();
        assert_eq!(mailer.recipient.email.to_string(), "inbox@example.com");
    }

    #[tokio::test]
    async fn disabled_mailer_reports_not_configured() {
        let mailer = DisabledMailer;
        assert!(matches!(mailer.verify().await, Err(MailError::NotConfigured)));

        let submission = ContactSubmission::sanitized("Ann", "ann@x.com", "Hello, long enough.");
        assert!(matches!(
            mailer.send(&submission).await,
            Err(MailError::NotConfigured)
        ));
    }
}
