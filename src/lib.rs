#![forbid(unsafe_code)]
//! Père Noël secret — bibliothèque de tirage au sort local (sans BD).
//!
//! - Tirage aléatoire donneur → receveur (bijection, jamais soi-même).
//! - Exclusion des couples déclarés.
//! - Graine injectable pour des tirages reproductibles.
//! - Rendu d'emails + envoi SMTP optionnel (feature `smtp`).

pub mod config;
pub mod io;
pub mod mailer;
pub mod matcher;
pub mod model;
pub mod notification;

pub use config::{Config, MessageConfig, ParticipantEntry, SmtpConfig};
pub use mailer::{deliver_all, DeliveryError, Mailer};
pub use matcher::{DrawOptions, MatchError, Matcher, Violation, ViolationKind};
pub use model::{Assignment, Couple, Pairing, Participant, ParticipantId, Roster};
pub use notification::{prepare_messages, Message, MessageRenderer, TemplateMessage};

#[cfg(feature = "smtp")]
pub use mailer::SmtpMailer;
