use crate::match_stats::{DraftRow, StatsResult};
use std::io::Read;
use std::path::Path;

/// Reads draft actions from csv with header
/// `match_id,team,hero,is_winner,action_type`.
pub fn read_draft_rows<P: AsRef<Path>>(filename: P) -> StatsResult<Vec<DraftRow>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(filename.as_ref())?;
    info!("Reading draft data from {}.", filename.as_ref().display());
    Ok(extract_rows(reader))
}

/// Deserializes every record, skipping the malformed ones.
pub fn extract_rows<R: Read>(mut reader: csv::Reader<R>) -> Vec<DraftRow> {
    let mut rows = vec![];
    let mut total = 0;
    for record in reader.deserialize::<DraftRow>() {
        total += 1;
        let row = skip_fail!(record);
        if row.hero.trim().is_empty() {
            warn!("Skipping row without hero in match {}.", row.match_id);
            continue;
        }
        rows.push(row);
    }
    info!("Parsed {} out of {} rows.", rows.len(), total);
    rows
}
