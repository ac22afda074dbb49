use crate::model::{Assignment, Couple, Participant, ParticipantId, Roster};
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'un roster depuis CSV: header `name,email[,partner]`.
/// La colonne `partner` est symétrique ; chaque couple n'est retenu
/// qu'une fois.
pub fn import_roster_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Roster> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut participants = Vec::new();
    let mut couples: Vec<Couple> = Vec::new();

    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let email = rec.get(1).context("missing email")?.trim();
        if name.is_empty() || email.is_empty() {
            bail!("invalid roster row (empty name or email)");
        }
        participants.push(Participant::new(name, email));

        if let Some(partner) = rec.get(2) {
            let partner = partner.trim();
            if !partner.is_empty() {
                let a = ParticipantId::new(name);
                let b = ParticipantId::new(partner);
                if !couples.iter().any(|c| c.forbids(&a, &b)) {
                    couples.push(Couple::new(a, b));
                }
            }
        }
    }

    let mut roster = Roster {
        participants,
        couples,
    };
    roster.link_partners();
    Ok(roster)
}

/// Export JSON du tirage (jolie mise en forme)
pub fn export_assignment_json<P: AsRef<Path>>(
    path: P,
    assignment: &Assignment,
) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(assignment)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV du tirage: header `giver,giver_email,receiver`
pub fn export_assignment_csv<P: AsRef<Path>>(
    path: P,
    roster: &Roster,
    assignment: &Assignment,
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["giver", "giver_email", "receiver"])?;
    for (giver, receiver) in assignment.iter() {
        let email = roster
            .find_participant(giver)
            .map(|p| p.email.as_str())
            .unwrap_or("");
        w.write_record([giver.as_str(), email, receiver.as_str()])?;
    }
    w.flush()?;
    Ok(())
}
