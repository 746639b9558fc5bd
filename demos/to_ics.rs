//! Parses an itinerary and writes the combined calendar plus the per-flight zip.
//!
//! cargo run --example to_ics -- [itinerary.txt] [out_dir]
//!
//! Without arguments the bundled email sample is used and files land in `./out`.

use std::path::Path;

use jal_ics::{archive, ics, parse, rows, samples};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let input: Option<String> = args.next();
    let out_dir: String = args.next().unwrap_or_else(|| "out".to_string());

    let flights = match input.as_deref() {
        Some(path) => match parse::parse_from_file(path) {
            Ok(flights) => flights,
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        },
        None => parse::parse_flights(samples::EMAIL),
    };

    if flights.is_empty() {
        eprintln!("No flight information detected.");
        return;
    }

    println!("Detected flights: {}", flights.len());
    for row in rows(&flights) {
        println!(
            "{}  {:<8} {} {} -> {} {}  {} {}",
            row.date, row.flight, row.from, row.dep, row.to, row.arr, row.seat_class, row.seat_no
        );
    }

    let calendar_path = Path::new(&out_dir).join(ics::CALENDAR_FILE_NAME);
    match ics::save_to_file(&calendar_path.to_string_lossy(), &flights) {
        Ok(()) => println!("Wrote {}", calendar_path.display()),
        Err(e) => eprintln!("Error: {}", e),
    }

    let archive_path = Path::new(&out_dir).join(archive::ARCHIVE_FILE_NAME);
    match archive::save_to_file(&archive_path.to_string_lossy(), &flights) {
        Ok(()) => println!("Wrote {}", archive_path.display()),
        Err(e) => eprintln!("Error: {}", e),
    }
}
