use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use super::{
    Header,
    Row,
};
use crate::core::{
    DisfluencyCategory,
    DisfluencyEvent,
    StutterlensError,
};

const SHOW: &str = "Show";
const START: &str = "Start";
const STOP: &str = "Stop";

/// Reads one event-labeled source (FluencyBank / SEP-28k label export).
pub fn read_labels(path: &Path) -> Result<Vec<DisfluencyEvent>, StutterlensError> {
    let file = path.to_string_lossy().to_string();
    let content = fs::read_to_string(path)
        .map_err(|e| StutterlensError::FailedToLoadFile(format!("{}: {}", file, e)))?;

    let mut lines = content.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let (_, header_line) = lines
        .next()
        .ok_or_else(|| StutterlensError::FailedToLoadFile(format!("{}: empty file", file)))?;
    let header = Header::parse(&file, header_line);

    let show_col = header.column(SHOW)?;
    let start_col = header.column(START)?;
    let stop_col = header.column(STOP)?;
    let category_cols = DisfluencyCategory::ALL
        .iter()
        .map(|c| header.column(c.label()))
        .collect::<Result<Vec<_>, _>>()?;

    let events = lines
        .map(|(number, line)| {
            let row = Row::parse(&file, number + 1, line);

            let start: u64 = row.parse_field(start_col, START)?;
            let stop: u64 = row.parse_field(stop_col, STOP)?;
            if start > stop {
                return Err(row.invalid(format!("start {} is after stop {}", start, stop)));
            }

            let counts = category_cols
                .iter()
                .zip(DisfluencyCategory::ALL.iter())
                .map(|(col, category)| row.parse_field::<u32>(*col, category.label()))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(DisfluencyEvent {
                show: row.get(show_col, SHOW)?.to_string(),
                start,
                stop,
                prolongation: counts[0],
                block: counts[1],
                sound_rep: counts[2],
                word_rep: counts[3],
                interjection: counts[4],
                natural_pause: counts[5],
            })
        })
        .collect::<Result<Vec<_>, StutterlensError>>()?;

    Ok(events)
}

/// Reads and concatenates every configured label source, in order.
pub fn read_all_labels(paths: &[PathBuf]) -> Result<Vec<DisfluencyEvent>, StutterlensError> {
    let mut events = Vec::new();
    for path in paths {
        let mut part = read_labels(path)?;
        println!("Loaded {} labeled events from {}", part.len(), path.display());
        events.append(&mut part);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = "\
Show,EpId,Start,Stop,Prolongation,Block,SoundRep,WordRep,Interjection,NaturalPause
HeStutters,4,0,48000,1,0,0,0,2,0
\"Women, WhoStutter\",7,480000,528000,0,3,0,1,0,1
";

    fn write_sample(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_events_and_ignores_extra_columns() {
        let file = write_sample(SAMPLE);
        let events = read_labels(file.path()).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].show, "HeStutters");
        assert_eq!(events[0].start, 0);
        assert_eq!(events[0].interjection, 2);
        assert_eq!(events[1].show, "Women, WhoStutter");
        assert_eq!(events[1].block, 3);
        assert_eq!(events[1].total_disfluencies(), 5);
    }

    #[test]
    fn missing_category_column_is_fatal() {
        let file = write_sample("Show,Start,Stop,Prolongation\nA,0,1,0\n");
        let err = read_labels(file.path()).unwrap_err();
        match err {
            StutterlensError::MissingColumn { column, .. } => assert_eq!(column, "Block"),
            other => panic!("Expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn inverted_timestamps_are_rejected() {
        let file = write_sample(
            "Show,Start,Stop,Prolongation,Block,SoundRep,WordRep,Interjection,NaturalPause\n\
             A,100,50,0,0,0,0,0,0\n",
        );
        let err = read_labels(file.path()).unwrap_err();
        match err {
            StutterlensError::InvalidRow { row, .. } => assert_eq!(row, 2),
            other => panic!("Expected InvalidRow, got {:?}", other),
        }
    }

    #[test]
    fn concatenates_sources_in_order() {
        let first = write_sample(SAMPLE);
        let second = write_sample(
            "Show,Start,Stop,Prolongation,Block,SoundRep,WordRep,Interjection,NaturalPause\n\
             FluencyBank,0,16000,0,1,0,0,0,0\n",
        );

        let events = read_all_labels(&[
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ])
        .unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[2].show, "FluencyBank");
    }
}
