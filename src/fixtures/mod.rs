// fixtures/mod.rs - Table fixtures module
//
// A fixture is reusable setup code. Each table the app reads from is
// described once here (schema SQL plus seed rows) and reused by the server
// seed step and by the DB-backed integration tests.

pub mod tables;

/// A simple trait that all fixture tables must implement
pub trait TestTable {
    /// The SQL commands to create this table, in order.
    /// Statements use the `content` schema; tests rewrite it to an
    /// isolated schema name.
    fn setup_sql() -> &'static [&'static str];
}
