use crate::notification::Message;
use anyhow::Result;
use thiserror::Error;

#[cfg(feature = "smtp")]
use crate::config::SmtpConfig;
#[cfg(feature = "smtp")]
use anyhow::{bail, Context};
#[cfg(feature = "smtp")]
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    SmtpTransport, Transport,
};
#[cfg(feature = "smtp")]
use uuid::Uuid;

/// Transport d'envoi. Le cœur ne connaît que cette couture ; SMTP n'est
/// qu'une implémentation parmi d'autres.
pub trait Mailer {
    fn send(&mut self, message: &Message) -> Result<()>;
}

/// Envoi interrompu : liste de qui a été prévenu et de qui ne l'a pas été.
#[derive(Error, Debug)]
#[error(
    "delivery aborted after {}/{} message(s): {source}",
    .notified.len(),
    .notified.len() + .pending.len()
)]
pub struct DeliveryError {
    pub notified: Vec<String>,
    pub pending: Vec<String>,
    #[source]
    pub source: anyhow::Error,
}

/// Envoie les messages dans l'ordre. Au premier échec, on s'arrête net :
/// pas de réessai, pas d'envoi silencieux derrière une connexion morte.
pub fn deliver_all(
    mailer: &mut dyn Mailer,
    messages: &[Message],
) -> Result<Vec<String>, DeliveryError> {
    let mut notified = Vec::with_capacity(messages.len());

    for (idx, message) in messages.iter().enumerate() {
        if let Err(err) = mailer.send(message) {
            let pending = messages[idx..].iter().map(|m| m.recipient.clone()).collect();
            return Err(DeliveryError {
                notified,
                pending,
                source: err,
            });
        }
        notified.push(message.recipient.clone());
    }

    Ok(notified)
}

/// Mailer SMTP bloquant (STARTTLS + authentification).
#[cfg(feature = "smtp")]
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
}

#[cfg(feature = "smtp")]
impl SmtpMailer {
    /// Construit le transport et vérifie la connexion tout de suite :
    /// un serveur injoignable ou un mot de passe refusé doit échouer
    /// avant le premier envoi, pas au milieu du lot.
    pub fn connect(config: &SmtpConfig) -> Result<Self> {
        let from: Mailbox = config
            .from
            .parse()
            .with_context(|| format!("invalid from address: {}", config.from))?;

        let password = config
            .password()
            .context("missing SMTP password (config field or SMTP_PASSWORD env var)")?;

        let transport = SmtpTransport::starttls_relay(&config.host)
            .with_context(|| format!("invalid SMTP host: {}", config.host))?
            .port(config.port)
            .credentials(Credentials::new(config.username.clone(), password))
            .build();

        let reachable = transport
            .test_connection()
            .with_context(|| format!("cannot reach SMTP server {}:{}", config.host, config.port))?;
        if !reachable {
            bail!("SMTP server {}:{} refused the connection", config.host, config.port);
        }

        Ok(Self { transport, from })
    }
}

#[cfg(feature = "smtp")]
impl Mailer for SmtpMailer {
    fn send(&mut self, message: &Message) -> Result<()> {
        let to: Mailbox = format!("{} <{}>", message.recipient, message.email)
            .parse()
            .with_context(|| format!("invalid recipient address: {}", message.email))?;

        let email = lettre::Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.clone())
            .message_id(Some(format!("<{}@pere-noel>", Uuid::new_v4())))
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .context("building email")?;

        self.transport
            .send(&email)
            .with_context(|| format!("sending to {}", message.email))?;
        Ok(())
    }
}
