use serde::{Deserialize, Serialize};

/// Identifiant fort pour Participant (le nom, unique dans le tirage)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Participant au tirage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub email: String,
    /// Référence faible vers le/la conjoint(e), pour consultation uniquement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<ParticipantId>,
}

impl Participant {
    pub fn new<N: AsRef<str>, E: Into<String>>(name: N, email: E) -> Self {
        Self {
            id: ParticipantId::new(name),
            email: email.into(),
            partner: None,
        }
    }

    pub fn name(&self) -> &str {
        self.id.as_str()
    }
}

/// Couple : paire non ordonnée de participants à ne jamais apparier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Couple {
    pub a: ParticipantId,
    pub b: ParticipantId,
}

impl Couple {
    pub fn new(a: ParticipantId, b: ParticipantId) -> Self {
        Self { a, b }
    }

    pub fn involves(&self, id: &ParticipantId) -> bool {
        &self.a == id || &self.b == id
    }

    /// Symétrique : vrai pour (a, b) comme pour (b, a).
    pub fn forbids(&self, giver: &ParticipantId, receiver: &ParticipantId) -> bool {
        (&self.a == giver && &self.b == receiver) || (&self.b == giver && &self.a == receiver)
    }
}

/// Roster complet : participants + couples, construit une fois au démarrage
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Roster {
    pub participants: Vec<Participant>,
    pub couples: Vec<Couple>,
}

impl Roster {
    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Participant> {
        self.participants.iter().find(|p| p.name() == name)
    }
    pub fn find_participant<'a>(&'a self, id: &ParticipantId) -> Option<&'a Participant> {
        self.participants.iter().find(|p| &p.id == id)
    }

    /// Renseigne les références `partner` à partir de la liste des couples.
    /// Un couple citant un nom inconnu est laissé tel quel (le matcher le
    /// signalera).
    pub fn link_partners(&mut self) {
        let couples = self.couples.clone();
        for p in self.participants.iter_mut() {
            p.partner = couples.iter().find(|c| c.involves(&p.id)).map(|c| {
                if c.a == p.id {
                    c.b.clone()
                } else {
                    c.a.clone()
                }
            });
        }
    }
}

/// Une paire du tirage : `giver` offre un cadeau à `receiver`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub giver: ParticipantId,
    pub receiver: ParticipantId,
}

/// Résultat d'un tirage : bijection donneur → receveur.
///
/// Itérable et ré-itérable en paires `(giver, receiver)` ; jamais persisté
/// entre deux exécutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Assignment {
    pairs: Vec<Pairing>,
}

impl Assignment {
    pub fn new(pairs: Vec<Pairing>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[Pairing] {
        &self.pairs
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, &ParticipantId)> {
        self.pairs.iter().map(|p| (&p.giver, &p.receiver))
    }

    pub fn receiver_for<'a>(&'a self, giver: &ParticipantId) -> Option<&'a ParticipantId> {
        self.pairs
            .iter()
            .find(|p| &p.giver == giver)
            .map(|p| &p.receiver)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
