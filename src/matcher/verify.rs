use super::{Matcher, Violation, ViolationKind};
use crate::model::Assignment;

/// Contrôle a posteriori d'un Assignment : bijectivité, auto-affectation,
/// paires interdites. Vecteur vide = tirage conforme.
pub(super) fn violations(matcher: &Matcher, assignment: &Assignment) -> Vec<Violation> {
    let roster = matcher.roster();
    let mut out = Vec::new();

    for participant in &roster.participants {
        let times_giving = assignment
            .iter()
            .filter(|(giver, _)| *giver == &participant.id)
            .count();
        let times_receiving = assignment
            .iter()
            .filter(|(_, receiver)| *receiver == &participant.id)
            .count();

        if times_giving != 1 || times_receiving != 1 {
            out.push(Violation {
                participant: participant.id.clone(),
                kind: ViolationKind::NotBijective,
            });
        }

        if let Some(receiver) = assignment.receiver_for(&participant.id) {
            if receiver == &participant.id {
                out.push(Violation {
                    participant: participant.id.clone(),
                    kind: ViolationKind::SelfPairing,
                });
            }
            if roster
                .couples
                .iter()
                .any(|c| c.forbids(&participant.id, receiver))
            {
                out.push(Violation {
                    participant: participant.id.clone(),
                    kind: ViolationKind::ForbiddenPair,
                });
            }
        }
    }

    out
}
