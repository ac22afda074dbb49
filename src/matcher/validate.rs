use super::types::MatchError;
use crate::model::Roster;

/// Vérifie les préconditions du tirage et résout les couples en paires
/// d'indices dans `roster.participants`. Chaque paire est insérée dans les
/// deux sens pour rendre le test d'appartenance symétrique.
pub(super) fn check_inputs(roster: &Roster) -> Result<Vec<(usize, usize)>, MatchError> {
    let names: Vec<&str> = roster.participants.iter().map(|p| p.name()).collect();

    if names.len() < 3 {
        return Err(MatchError::NotEnoughParticipants(names.len()));
    }

    for (idx, name) in names.iter().enumerate() {
        if names.iter().skip(idx + 1).any(|other| other == name) {
            return Err(MatchError::DuplicateParticipant((*name).to_string()));
        }
    }

    let index_of = |name: &str| names.iter().position(|n| *n == name);

    let mut forbidden = Vec::with_capacity(roster.couples.len() * 2);
    for couple in &roster.couples {
        let a = index_of(couple.a.as_str())
            .ok_or_else(|| MatchError::UnknownParticipant(couple.a.as_str().to_string()))?;
        let b = index_of(couple.b.as_str())
            .ok_or_else(|| MatchError::UnknownParticipant(couple.b.as_str().to_string()))?;
        if a == b {
            return Err(MatchError::SelfCouple(couple.a.as_str().to_string()));
        }
        forbidden.push((a, b));
        forbidden.push((b, a));
    }

    Ok(forbidden)
}

/// Un receveur est admissible s'il n'est ni le donneur ni son/sa conjoint(e).
pub(super) fn pair_allowed(giver: usize, receiver: usize, forbidden: &[(usize, usize)]) -> bool {
    giver != receiver && !forbidden.contains(&(giver, receiver))
}

/// Valide une permutation complète receveur-par-indice.
pub(super) fn permutation_ok(perm: &[usize], forbidden: &[(usize, usize)]) -> bool {
    perm.iter()
        .enumerate()
        .all(|(giver, &receiver)| pair_allowed(giver, receiver, forbidden))
}
