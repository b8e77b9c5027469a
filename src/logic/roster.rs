//! Roster import from CSV (`name,team_name,user` with a header row).

use crate::models::{Participant, UserId};
use serde::Deserialize;
use std::io::Read;
use uuid::Uuid;

/// Errors while reading a roster file.
#[derive(Debug)]
pub enum RosterError {
    /// Malformed CSV (bad quoting, wrong column count, bad uuid, ...).
    Csv(csv::Error),
    /// A row with an empty name (1-based data row number).
    MissingName { row: usize },
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Csv(e) => write!(f, "Invalid roster CSV: {}", e),
            RosterError::MissingName { row } => write!(f, "Row {} has no name", row),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Csv(e) => Some(e),
            RosterError::MissingName { .. } => None,
        }
    }
}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Csv(e)
    }
}

#[derive(Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    team_name: Option<String>,
    #[serde(default)]
    user: Option<UserId>,
}

/// Read participants from CSV. Rows without a `user` get a fresh id; empty team names are dropped.
pub fn read_roster_csv<R: Read>(reader: R) -> Result<Vec<Participant>, RosterError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut roster = Vec::new();
    for (i, row) in rdr.deserialize::<RosterRow>().enumerate() {
        let row = row?;
        if row.name.is_empty() {
            return Err(RosterError::MissingName { row: i + 1 });
        }
        roster.push(Participant {
            user: row.user.unwrap_or_else(Uuid::new_v4),
            name: row.name,
            team_name: row.team_name.filter(|t| !t.is_empty()),
        });
    }
    Ok(roster)
}
