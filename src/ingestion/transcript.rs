use std::{
    fs,
    path::Path,
};

use super::{
    Header,
    Row,
};
use crate::core::{
    LetterTranscriptEvent,
    StutterlensError,
};

const CLIP_ID: &str = "Clip ID";
const START: &str = "Start";
const STOP: &str = "Stop";
const DISFLUENCY_TYPE: &str = "Disfluency Type";
const AGE_RANGE: &str = "Age Range";
const LETTERS: &str = "Letter(s)";
const LINK: &str = "Link";

/// Reads the manually transcribed letter-level source.
pub fn read_transcript(path: &Path) -> Result<Vec<LetterTranscriptEvent>, StutterlensError> {
    let file = path.to_string_lossy().to_string();
    let content = fs::read_to_string(path)
        .map_err(|e| StutterlensError::FailedToLoadFile(format!("{}: {}", file, e)))?;

    let mut lines = content.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let (_, header_line) = lines
        .next()
        .ok_or_else(|| StutterlensError::FailedToLoadFile(format!("{}: empty file", file)))?;
    let header = Header::parse(&file, header_line);

    let clip_col = header.column(CLIP_ID)?;
    let start_col = header.column(START)?;
    let stop_col = header.column(STOP)?;
    let type_col = header.column(DISFLUENCY_TYPE)?;
    let age_col = header.column(AGE_RANGE)?;
    let letters_col = header.column(LETTERS)?;
    let link_col = header.column(LINK)?;

    let events = lines
        .map(|(number, line)| {
            let row = Row::parse(&file, number + 1, line);

            let start: f64 = row.parse_field(start_col, START)?;
            let stop: f64 = row.parse_field(stop_col, STOP)?;
            if start > stop {
                return Err(row.invalid(format!("start {} is after stop {}", start, stop)));
            }

            Ok(LetterTranscriptEvent {
                clip_id: row.parse_field(clip_col, CLIP_ID)?,
                start,
                stop,
                disfluency_type: row.get(type_col, DISFLUENCY_TYPE)?.to_string(),
                age_range: row.get(age_col, AGE_RANGE)?.to_string(),
                letters: row.get(letters_col, LETTERS)?.to_string(),
                link: row.get(link_col, LINK)?.to_string(),
            })
        })
        .collect::<Result<Vec<_>, StutterlensError>>()?;

    println!("Loaded {} transcript events from {}", events.len(), path.display());
    Ok(events)
}
