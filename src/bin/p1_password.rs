//! Pattern 1: Custom Iterators
//! Example: Password Generator
//!
//! Run with: cargo run --bin p1_password

use iterator_resource_patterns::password::{generate_password, PasswordGenerator};

fn main() {
    println!("=== Password Generator ===\n");

    let password = generate_password(12);
    assert_eq!(password.chars().count(), 12);
    println!("Generated Password: {}", password);

    // Each element is drawn lazily, one character per next()
    println!("\n=== Character by Character ===");
    for (i, c) in PasswordGenerator::new(5).enumerate() {
        println!("character {}: {:?}", i + 1, c);
    }

    println!("\n=== A Few More ===");
    for length in [8, 16, 24] {
        println!("{:2} chars: {}", length, generate_password(length));
    }

    println!("\n=== Key Points ===");
    println!("1. Each character is chosen independently and uniformly");
    println!("2. The alphabet is letters + digits + punctuation (94 chars)");
    println!("3. No uniqueness guarantee - this is a sequence, not a vault");
}
