mod draw;
mod types;
mod validate;
mod verify;

pub use types::{DrawOptions, MatchError, Violation, ViolationKind};

use crate::model::{Assignment, Roster};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Matcher : encapsule le Roster figé sur lequel portent les tirages
#[derive(Debug, Default)]
pub struct Matcher {
    roster: Roster,
}

impl Matcher {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Tire une affectation aléatoire. La graine vient de `opts.seed`,
    /// sinon du système.
    pub fn draw(&self, opts: DrawOptions) -> Result<Assignment, MatchError> {
        let mut rng = match opts.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.draw_with_rng(opts, &mut rng)
    }

    /// Variante à générateur injecté : même graine ⇒ même tirage.
    pub fn draw_with_rng(
        &self,
        opts: DrawOptions,
        rng: &mut StdRng,
    ) -> Result<Assignment, MatchError> {
        draw::draw(self, opts, rng)
    }

    pub fn verify(&self, assignment: &Assignment) -> Vec<Violation> {
        verify::violations(self, assignment)
    }
}
