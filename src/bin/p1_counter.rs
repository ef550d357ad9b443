//! Pattern 1: Custom Iterators
//! Example: Bounded Counters
//!
//! Run with: cargo run --bin p1_counter

use iterator_resource_patterns::counter::{Counter, EvenCounter};

fn main() {
    println!("=== Bounded Counter ===\n");

    for n in Counter::new(1, 10) {
        println!("{}", n);
    }

    println!("\n=== Even Numbers ===");
    let evens: Vec<_> = EvenCounter::new(4, 12).collect();
    assert_eq!(evens, vec![4, 6, 8, 10, 12]);
    for n in &evens {
        println!("{}", n);
    }

    println!("\n=== Odd Start Normalizes Up ===");
    let from_odd: Vec<_> = EvenCounter::new(5, 12).collect();
    println!("EvenCounter::new(5, 12) -> {:?}", from_odd);

    // The iterator is lazy - no counting until asked
    println!("\n=== Lazy Evaluation Demo ===");
    let mut counter = Counter::new(100, 102);
    println!("Created counter, nothing produced yet");
    println!("First call to next(): {:?}", counter.next());
    println!("Second call to next(): {:?}", counter.next());
    println!("Third call to next(): {:?}", counter.next());
    println!("Fourth call to next(): {:?}", counter.next());

    println!("\n=== Key Points ===");
    println!("1. The struct owns the cursor; next() advances it");
    println!("2. Exhaustion is None, not an error - and it is permanent");
    println!("3. Construct a fresh counter to count again");
    println!("4. Works with all standard adapters (collect, take, filter, ...)");
}
