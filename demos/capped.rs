//! Example: refusing inputs whose alignment count explodes.
//!
//! Run with:
//! `cargo run --example capped`

use lcs_all::{LcsEngineBuilder, LcsError};

fn main() {
    // Reversed blocks tie at almost every cell: 48620 alignments.
    let s: Vec<u8> = b"ACGT".repeat(4);
    let t: Vec<u8> = b"TGCA".repeat(4);

    let engine = match LcsEngineBuilder::new(&s, &t).max_alignments(1_000).build() {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("error: {err}");
            return;
        }
    };

    match engine.run() {
        Ok(report) => println!(
            "length {}: {} alignment(s), {} distinct",
            report.length,
            report.paths,
            report.sequences.len()
        ),
        Err(LcsError::TooManyAlignments { limit, found }) => {
            println!("refused: {found} alignments exceed the cap of {limit}")
        }
        Err(err) => eprintln!("error: {err}"),
    }

    println!("length alone: {}", engine.length());
}
