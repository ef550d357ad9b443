//! # Iterator & Resource Patterns
//!
//! Self-contained examples of three patterns, each exposed as an importable,
//! independently testable type rather than a script:
//!
//! 1. **Custom Iterators**
//!    - Bounded counter ([`counter::Counter`])
//!    - Even-number counter with odd-start normalization
//!      ([`counter::EvenCounter`])
//!    - Password generator as a bounded random sequence
//!      ([`password::PasswordGenerator`])
//!
//! 2. **Lazy Filesystem Sequences**
//!    - Single-shot file content sequence ([`reader::FileContent`])
//!    - Depth-first recursive directory walker ([`walk::DirWalker`])
//!
//! 3. **Scoped Resources**
//!    - Scoped SQLite connection with guaranteed release
//!      ([`db::ScopedConnection`], [`db::with_connection`])
//!
//! All sequences are lazy: nothing is computed (and no I/O happens) until the
//! consumer asks for the next element, and exhaustion is a normal `None`,
//! never an error. The iterator types are consumed by iteration; construct a
//! fresh value to iterate again.
//!
//! ## Running Examples
//!
//! ```bash
//! # Pattern 1: Custom Iterators
//! cargo run --bin p1_counter
//! cargo run --bin p1_password
//!
//! # Pattern 2: Lazy Filesystem Sequences
//! cargo run --bin p2_file_reader
//! cargo run --bin p2_dir_walker
//!
//! # Pattern 3: Scoped Resources
//! cargo run --bin p3_db_scope
//! ```

pub mod counter;
pub mod db;
pub mod password;
pub mod reader;
pub mod walk;
