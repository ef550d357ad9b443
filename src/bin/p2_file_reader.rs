//! Pattern 2: Lazy Filesystem Sequences
//! Example: Single-Shot File Reader
//!
//! Run with: cargo run --bin p2_file_reader

use iterator_resource_patterns::reader::FileContent;
use std::fs;
use std::io;

fn main() -> io::Result<()> {
    println!("=== Single-Shot File Reader ===\n");

    // Create a test file
    let test_file = "test_reader_notes.txt";
    fs::write(test_file, "first line\nsecond line\nthird line\n")?;
    println!("Created test file: {}", test_file);

    // The whole content arrives as one element
    let mut content = FileContent::new(test_file);
    println!("\nFirst call to next():");
    if let Some(Ok(text)) = content.next() {
        for line in text.lines() {
            println!("  {}", line);
        }
    }

    match content.next() {
        None => println!("\nSecond call to next(): None (exhausted)"),
        Some(_) => println!("\nSecond call to next(): unexpected element"),
    }

    // A bad path is an element too, not a construction failure
    println!("\n=== Missing File ===");
    let mut missing = FileContent::new("no_such_file.txt");
    println!("Sequence constructed - no I/O yet");
    match missing.next() {
        Some(Err(e)) => println!("First call to next(): Err ({})", e),
        Some(Ok(_)) => println!("Unexpected content"),
        None => println!("Unexpected exhaustion"),
    }

    // Cleanup
    fs::remove_file(test_file)?;

    println!("\n=== Key Points ===");
    println!("1. Construction does no I/O - the read happens on first next()");
    println!("2. Exactly one element: the full content, or the I/O error");
    println!("3. After that the sequence is exhausted for good");
    Ok(())
}
