// fixtures/tables/mod.rs
//
// Definitions for the tables the app reads. Each is a struct that
// implements the TestTable trait.

pub mod service_pages;

pub use service_pages::{ServicePageSeed, ServicePagesTable};
