//! # archive
//!
//! Bundles one single-event calendar per flight into a deflate-compressed zip.

use std::collections::HashMap;
use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::ics;
use crate::save::write_output;
use crate::types::errors::ArchiveError;
use crate::types::flight::FlightRecord;

/// Suggested file name for the archive.
pub const ARCHIVE_FILE_NAME: &str = "jal_flights.zip";
pub const ARCHIVE_MEDIA_TYPE: &str = "application/zip";

/// Entry name of a flight inside the archive: `JAL<number>_<YYYYMMDD>.ics`.
pub fn entry_name(flight: &FlightRecord) -> String {
    format!("{}_{}.ics", flight.flight_code(), flight.date().format("%Y%m%d"))
}

// Same flight on the same day twice: JAL511_20250920.ics, JAL511_20250920_2.ics, ...
fn unique_name(base: String, seen: &mut HashMap<String, usize>) -> String {
    let count: &mut usize = seen.entry(base.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        return base;
    }
    let stem: &str = base.strip_suffix(".ics").unwrap_or(&base);
    format!("{}_{}.ics", stem, count)
}

/// Builds the zip archive in memory.
///
/// Each entry holds a complete calendar document with a single event, in
/// input order.
pub fn to_archive(flights: &[FlightRecord]) -> Result<Vec<u8>, ArchiveError> {
    let mut writer: ZipWriter<Cursor<Vec<u8>>> = ZipWriter::new(Cursor::new(Vec::new()));
    let options: SimpleFileOptions =
        SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut seen: HashMap<String, usize> = HashMap::new();

    for flight in flights {
        let name: String = unique_name(entry_name(flight), &mut seen);
        let calendar: String = ics::to_calendar(std::slice::from_ref(flight));

        writer
            .start_file(name.as_str(), options)
            .map_err(|source| ArchiveError::Entry {
                entry: name.clone(),
                source,
            })?;
        writer
            .write_all(calendar.as_bytes())
            .map_err(|source| ArchiveError::EntryWrite {
                entry: name.clone(),
                source,
            })?;
    }

    let cursor: Cursor<Vec<u8>> = writer
        .finish()
        .map_err(|source| ArchiveError::Finish { source })?;
    Ok(cursor.into_inner())
}

/// Builds the archive and writes it to `path` (must end in `.zip`).
pub fn save_to_file(path: &str, flights: &[FlightRecord]) -> Result<(), ArchiveError> {
    let bytes: Vec<u8> = to_archive(flights)?;
    write_output(path, "zip", &bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_flights;
    use crate::samples;
    use crate::types::errors::SaveError;
    use std::io::Read;
    use zip::ZipArchive;

    fn entries(bytes: Vec<u8>) -> Vec<(String, String)> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("readable zip");
        (0..archive.len())
            .map(|i| {
                let mut file = archive.by_index(i).expect("entry");
                let mut body = String::new();
                file.read_to_string(&mut body).expect("utf-8 entry");
                (file.name().to_string(), body)
            })
            .collect()
    }

    #[test]
    fn one_calendar_per_flight() {
        let flights = parse_flights(samples::EMAIL);
        let out = entries(to_archive(&flights).unwrap());
        let names: Vec<&str> = out.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["JAL511_20250920.ics", "JAL528_20250923.ics", "JAL999_20251001.ics"]
        );
        for (_, body) in &out {
            assert!(body.starts_with("BEGIN:VCALENDAR\n"));
            assert_eq!(body.matches("BEGIN:VEVENT").count(), 1);
        }
        assert!(out[1].1.contains("SUMMARY:JAL528 CTS->HND\n"));
    }

    #[test]
    fn duplicate_entries_get_suffixes() {
        let mut flights = parse_flights(samples::HOMEPAGE);
        flights.push(flights[0].clone());
        flights.push(flights[0].clone());
        let out = entries(to_archive(&flights).unwrap());
        let names: Vec<&str> = out.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "JAL915_20260210.ics",
                "JAL916_20260213.ics",
                "JAL915_20260210_2.ics",
                "JAL915_20260210_3.ics"
            ]
        );
    }

    #[test]
    fn empty_input_gives_empty_archive() {
        assert!(entries(to_archive(&[]).unwrap()).is_empty());
    }

    #[test]
    fn save_writes_zip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ARCHIVE_FILE_NAME);
        let path = path.to_str().unwrap();
        save_to_file(path, &parse_flights(samples::HOMEPAGE)).unwrap();
        let bytes = std::fs::read(path).unwrap();
        assert_eq!(entries(bytes).len(), 2);
    }

    #[test]
    fn save_rejects_wrong_extension() {
        let err = save_to_file("flights.ics", &[]).unwrap_err();
        assert!(matches!(
            err,
            ArchiveError::Save(SaveError::InvalidExtension { expected: "zip", .. })
        ));
    }
}
