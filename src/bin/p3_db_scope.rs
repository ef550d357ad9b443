//! Pattern 3: Scoped Resources
//! Example: Scoped Database Connection
//!
//! Run with: cargo run --bin p3_db_scope

use iterator_resource_patterns::db::{
    all_users, init_schema, insert_sample_users, with_connection, ScopeError,
};

fn main() -> Result<(), ScopeError> {
    println!("=== Scoped Database Connection ===\n");

    let db_file = "example.db";

    // Open, work, close - the scope owns the connection for the whole call
    let users = with_connection(db_file, |conn| {
        init_schema(conn)?;
        insert_sample_users(conn)?;
        all_users(conn)
    })?;

    println!("Rows in 'users' ({} total):", users.len());
    for user in &users {
        println!("  ({}, {})", user.id, user.name);
    }
    println!("\nRerun this example and the two sample rows are appended again.");

    // An error inside the scope reaches the caller - after the release
    println!("\n=== Induced Error ===");
    let result = with_connection(db_file, |conn| {
        conn.execute("INSERT INTO missing_table (x) VALUES (1)", [])
            .map(|_| ())
    });
    match result {
        Err(e) => println!("Scope returned Err: {}", e),
        Ok(()) => println!("Unexpected success"),
    }

    // The failed scope still released its handle; a fresh scope works
    let count = with_connection(db_file, |conn| all_users(conn).map(|u| u.len()))?;
    println!("Connection was released; fresh scope sees {} rows", count);

    println!("\n=== Key Points ===");
    println!("1. The connection is closed on every exit path, error included");
    println!("2. Release comes first, then the outcome is reported");
    println!("3. The outcome is a Result - failures are not swallowed");
    println!("4. close() consumes the wrapper: no queries after release");
    Ok(())
}
