use super::types::{DrawOptions, MatchError};
use super::{validate, Matcher};
use crate::model::{Assignment, Pairing};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Tirage au sort : échantillonnage par rejet, puis recherche exhaustive
/// en dernier recours.
///
/// Le mélange uniforme suivi d'une validation rend le tirage (quasi)
/// uniforme sur l'ensemble des affectations valides. Le budget de
/// `max_attempts` mélanges borne la boucle ; une fois épuisé, un
/// backtracking sur des candidats mélangés tranche définitivement entre
/// « solution trouvée » et « contraintes insatisfiables ».
pub(super) fn draw(
    matcher: &Matcher,
    opts: DrawOptions,
    rng: &mut StdRng,
) -> Result<Assignment, MatchError> {
    let roster = matcher.roster();
    let forbidden = validate::check_inputs(roster)?;
    let total = roster.participants.len();

    let mut receivers: Vec<usize> = (0..total).collect();
    for _ in 0..opts.max_attempts {
        receivers.shuffle(rng);
        if validate::permutation_ok(&receivers, &forbidden) {
            return Ok(build_assignment(matcher, &receivers));
        }
    }

    match backtrack(total, &forbidden, rng) {
        Some(perm) => Ok(build_assignment(matcher, &perm)),
        None => Err(MatchError::Unsatisfiable {
            participants: total,
            couples: roster.couples.len(),
            attempts: opts.max_attempts,
        }),
    }
}

fn build_assignment(matcher: &Matcher, receivers: &[usize]) -> Assignment {
    let participants = &matcher.roster().participants;
    let pairs = receivers
        .iter()
        .enumerate()
        .map(|(giver, &receiver)| Pairing {
            giver: participants[giver].id.clone(),
            receiver: participants[receiver].id.clone(),
        })
        .collect();
    Assignment::new(pairs)
}

/// Recherche exhaustive à terminaison garantie. Les listes de candidats
/// sont mélangées pour ne pas privilégier systématiquement la même
/// permutation.
fn backtrack(total: usize, forbidden: &[(usize, usize)], rng: &mut StdRng) -> Option<Vec<usize>> {
    let candidates: Vec<Vec<usize>> = (0..total)
        .map(|giver| {
            let mut c: Vec<usize> = (0..total)
                .filter(|&receiver| validate::pair_allowed(giver, receiver, forbidden))
                .collect();
            c.shuffle(rng);
            c
        })
        .collect();

    // Donneurs les plus contraints d'abord : réduit l'arbre exploré.
    let mut order: Vec<usize> = (0..total).collect();
    order.sort_by_key(|&giver| candidates[giver].len());
    let candidates: Vec<Vec<usize>> = order.iter().map(|&g| candidates[g].clone()).collect();

    let mut taken = vec![false; total];
    let mut chosen = vec![usize::MAX; total];
    if !place(0, &candidates, &mut taken, &mut chosen) {
        return None;
    }

    let mut perm = vec![usize::MAX; total];
    for (pos, &giver) in order.iter().enumerate() {
        perm[giver] = chosen[pos];
    }
    Some(perm)
}

fn place(pos: usize, candidates: &[Vec<usize>], taken: &mut [bool], chosen: &mut [usize]) -> bool {
    if pos == candidates.len() {
        return true;
    }
    for &receiver in &candidates[pos] {
        if taken[receiver] {
            continue;
        }
        taken[receiver] = true;
        chosen[pos] = receiver;
        if place(pos + 1, candidates, taken, chosen) {
            return true;
        }
        taken[receiver] = false;
    }
    false
}
