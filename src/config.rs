use crate::model::{Couple, Participant, ParticipantId, Roster};
use crate::notification::TemplateMessage;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration complète d'une exécution, chargée une fois au démarrage
/// et passée explicitement en paramètre (pas d'état global).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub smtp: SmtpConfig,
    pub participants: Vec<ParticipantEntry>,
    #[serde(default)]
    pub couples: Vec<(String, String)>,
    #[serde(default)]
    pub message: MessageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Absent du fichier ⇒ lu dans la variable d'environnement
    /// `SMTP_PASSWORD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Adresse expéditrice, forme `Nom <adresse@exemple.fr>` ou nue.
    pub from: String,
}

impl SmtpConfig {
    pub fn password(&self) -> Option<String> {
        self.password
            .clone()
            .or_else(|| std::env::var("SMTP_PASSWORD").ok())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantEntry {
    pub name: String,
    pub email: String,
}

/// Section `message` : gabarit d'email, placeholders `{giver}` /
/// `{receiver}`. Champs omis = gabarit intégré.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MessageConfig {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

impl MessageConfig {
    pub fn renderer(&self) -> TemplateMessage {
        let defaults = TemplateMessage::default();
        TemplateMessage {
            subject: self.subject.clone().unwrap_or(defaults.subject),
            body: self.body.clone().unwrap_or(defaults.body),
        }
    }
}

impl Config {
    /// Charge et valide `config.json`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Config = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Contrôles de surface du document ; la sémantique des couples
    /// (noms inconnus, auto-couples) relève du matcher.
    pub fn validate(&self) -> Result<()> {
        if self.smtp.host.trim().is_empty() {
            bail!("smtp.host cannot be empty");
        }
        if self.smtp.port == 0 {
            bail!("smtp.port cannot be 0");
        }
        if self.smtp.from.trim().is_empty() {
            bail!("smtp.from cannot be empty");
        }
        if self.participants.is_empty() {
            bail!("participant list cannot be empty");
        }
        for entry in &self.participants {
            if entry.name.trim().is_empty() {
                bail!("participant with empty name");
            }
            if entry.email.trim().is_empty() {
                bail!("participant {} has an empty email", entry.name);
            }
        }
        for (a, b) in &self.couples {
            if a.trim().is_empty() || b.trim().is_empty() {
                bail!("couple with an empty name");
            }
        }
        Ok(())
    }

    /// Normalise les listes du document en Roster.
    pub fn build_roster(&self) -> Roster {
        let participants = self
            .participants
            .iter()
            .map(|entry| Participant::new(entry.name.trim(), entry.email.trim()))
            .collect();
        let couples = self
            .couples
            .iter()
            .map(|(a, b)| Couple::new(ParticipantId::new(a.trim()), ParticipantId::new(b.trim())))
            .collect();

        let mut roster = Roster {
            participants,
            couples,
        };
        roster.link_partners();
        roster
    }
}
