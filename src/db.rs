//! Pattern 3: Scoped Resources
//!
//! A database connection owned by a scope: acquired on entry, released on
//! every exit path. The scope surfaces its outcome as a `Result` so the
//! caller can tell success from failure, while release stays guaranteed.

use rusqlite::Connection;
use std::ops::{Deref, DerefMut};
use std::path::Path;
use thiserror::Error;

/// Error from a connection scope, keeping the failing phase visible.
#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("failed to open database: {0}")]
    Open(#[source] rusqlite::Error),

    #[error("database operation failed: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("failed to close database: {0}")]
    Close(#[source] rusqlite::Error),
}

/// RAII wrapper owning one database connection for one scope.
///
/// The connection is released exactly once on every exit path: explicitly
/// through [`close`](Self::close), or by `Drop` on early return, `?`, or a
/// panic unwinding through the scope. `close` consumes the wrapper, so a
/// released handle cannot be queried — that contract is enforced at compile
/// time rather than observed as a runtime failure.
///
/// One connection per scope instance; no pooling, no retry, and no
/// transaction management beyond SQLite's default autocommit.
pub struct ScopedConnection {
    conn: Option<Connection>,
}

impl ScopedConnection {
    /// Open a connection to the database at `path`, creating the file if it
    /// does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ScopeError> {
        let conn = Connection::open(path).map_err(ScopeError::Open)?;
        Ok(ScopedConnection { conn: Some(conn) })
    }

    /// Release the connection, reporting a failed close to the caller.
    pub fn close(mut self) -> Result<(), ScopeError> {
        match self.conn.take() {
            Some(conn) => conn.close().map_err(|(_, e)| ScopeError::Close(e)),
            None => Ok(()),
        }
    }
}

impl Drop for ScopedConnection {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            if let Err((_, e)) = conn.close() {
                // no Result channel on this path; stderr is all we have
                eprintln!("warning: failed to close database: {}", e);
            }
        }
    }
}

impl Deref for ScopedConnection {
    type Target = Connection;

    fn deref(&self) -> &Self::Target {
        self.conn.as_ref().unwrap()
    }
}

impl DerefMut for ScopedConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.conn.as_mut().unwrap()
    }
}

/// Run `f` against a connection opened for exactly this call.
///
/// Release comes before reporting: the connection is closed first, then the
/// closure's outcome is returned to the caller. A query error takes
/// precedence over a close error.
pub fn with_connection<T, F>(path: impl AsRef<Path>, f: F) -> Result<T, ScopeError>
where
    F: FnOnce(&Connection) -> rusqlite::Result<T>,
{
    let scope = ScopedConnection::open(path)?;
    let outcome = f(&scope);
    let closed = scope.close();
    match outcome {
        Ok(value) => {
            closed?;
            Ok(value)
        }
        Err(e) => Err(ScopeError::Query(e)),
    }
}

/// A row of the `users` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

/// Create the `users` table if it does not exist yet.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (id INTEGER PRIMARY KEY, name TEXT)",
        [],
    )?;
    Ok(())
}

/// Append the two fixed sample rows. Reruns accumulate; there is no
/// deduplication, so the table holds 2N rows after N calls.
pub fn insert_sample_users(conn: &Connection) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare("INSERT INTO users (name) VALUES (?1)")?;
    for name in ["Alice", "Bob"] {
        stmt.execute([name])?;
    }
    Ok(())
}

/// Every row of the `users` table, ordered by id.
pub fn all_users(conn: &Connection) -> rusqlite::Result<Vec<User>> {
    let mut stmt = conn.prepare("SELECT id, name FROM users ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.collect()
}
