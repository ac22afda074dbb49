use crate::model::{Assignment, Participant, Roster};
use anyhow::{Context, Result};

/// Email rendu pour un donneur : seul `recipient` connaît son receveur.
#[derive(Debug, Clone)]
pub struct Message {
    pub recipient: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// Permet de customiser le rendu du message (texte, HTML, etc.).
pub trait MessageRenderer {
    fn subject(&self, giver: &Participant, receiver: &Participant) -> String;
    fn body(&self, giver: &Participant, receiver: &Participant) -> String;
}

/// Gabarit texte avec interpolation de `{giver}` et `{receiver}`.
#[derive(Debug, Clone)]
pub struct TemplateMessage {
    pub subject: String,
    pub body: String,
}

impl Default for TemplateMessage {
    fn default() -> Self {
        Self {
            subject: "Père Noël secret : ton tirage, {giver}".to_string(),
            body: "Bonjour {giver},\n\nLe tirage au sort est fait : cette année tu offres \
                   un cadeau à {receiver}.\nChut, c'est un secret — même pour les autres \
                   participants.\n\nJoyeuses fêtes !\n"
                .to_string(),
        }
    }
}

impl TemplateMessage {
    fn interpolate(template: &str, giver: &Participant, receiver: &Participant) -> String {
        template
            .replace("{giver}", giver.name())
            .replace("{receiver}", receiver.name())
    }
}

impl MessageRenderer for TemplateMessage {
    fn subject(&self, giver: &Participant, receiver: &Participant) -> String {
        Self::interpolate(&self.subject, giver, receiver)
    }

    fn body(&self, giver: &Participant, receiver: &Participant) -> String {
        Self::interpolate(&self.body, giver, receiver)
    }
}

/// Prépare un email par paire du tirage, adressé au donneur.
pub fn prepare_messages(
    roster: &Roster,
    assignment: &Assignment,
    renderer: &dyn MessageRenderer,
) -> Result<Vec<Message>> {
    let mut out = Vec::with_capacity(assignment.len());

    for (giver_id, receiver_id) in assignment.iter() {
        let giver = roster
            .find_participant(giver_id)
            .with_context(|| format!("unknown giver in assignment: {giver_id}"))?;
        let receiver = roster
            .find_participant(receiver_id)
            .with_context(|| format!("unknown receiver in assignment: {receiver_id}"))?;

        out.push(Message {
            recipient: giver.name().to_string(),
            email: giver.email.clone(),
            subject: renderer.subject(giver, receiver),
            body: renderer.body(giver, receiver),
        });
    }

    Ok(out)
}
