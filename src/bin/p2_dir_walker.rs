//! Pattern 2: Lazy Filesystem Sequences
//! Example: Recursive Directory Walker
//!
//! Run with: cargo run --bin p2_dir_walker

use iterator_resource_patterns::walk::DirWalker;
use std::fs;
use std::io;

fn main() -> io::Result<()> {
    println!("=== Recursive Directory Walker ===\n");

    // Create test directory structure
    let test_dir = "test_walk";
    fs::create_dir_all(format!("{}/src/utils", test_dir))?;
    fs::create_dir_all(format!("{}/docs", test_dir))?;

    fs::write(format!("{}/index.md", test_dir), "# Project")?;
    fs::write(format!("{}/Cargo.toml", test_dir), "[package]")?;
    fs::write(format!("{}/src/main.rs", test_dir), "fn main() {}")?;
    fs::write(format!("{}/src/utils/helpers.rs", test_dir), "pub fn help() {}")?;
    fs::write(format!("{}/docs/guide.md", test_dir), "# Guide")?;

    // Abort on the first error: collect into a Result
    println!("=== All Files (strict) ===");
    let files: Vec<_> = DirWalker::new(test_dir).collect::<io::Result<_>>()?;
    println!("Found {} files:", files.len());
    for file in &files {
        println!("  {}", file.display());
    }

    // Or keep walking past errors: skip the Err elements
    println!("\n=== All Files (lenient) ===");
    let count = DirWalker::new(test_dir)
        .filter_map(Result::ok)
        .count();
    println!("{} files reachable", count);

    // An invalid root is the first element, not a panic
    println!("\n=== Missing Root ===");
    let mut walker = DirWalker::new("no_such_dir");
    match walker.next() {
        Some(Err(e)) => println!("First element: Err ({})", e),
        other => println!("Unexpected: {:?}", other),
    }

    // Cleanup
    fs::remove_dir_all(test_dir)?;

    println!("\n=== Key Points ===");
    println!("1. Depth-first: a directory's files come before its subtrees");
    println!("2. Directories are read lazily, as the walk reaches them");
    println!("3. Paths are absolute (the root is canonicalized)");
    println!("4. Errors are elements - the caller picks abort or skip");
    println!("5. No cycle detection: a symlink cycle walks forever");
    Ok(())
}
