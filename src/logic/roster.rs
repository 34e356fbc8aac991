//! Roster import from CSV (`name,country`; country optional).

use crate::error::{EngineError, EngineResult};
use crate::models::Participant;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    country: Option<String>,
}

/// Parse a CSV roster with a header row into new participants, in file order.
pub fn parse_roster<R: Read>(reader: R) -> EngineResult<Vec<Participant>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut participants = Vec::new();
    for (i, record) in rdr.deserialize::<RosterRow>().enumerate() {
        let row = record?;
        if row.name.is_empty() {
            return Err(EngineError::Roster(format!("row {} has no name", i + 1)));
        }
        let participant = match row.country.filter(|c| !c.is_empty()) {
            Some(country) => Participant::new(row.name).with_country(country),
            None => Participant::new(row.name),
        };
        participants.push(participant);
    }
    Ok(participants)
}
