// web_app/api/mod.rs - API module for server-side logic
//
// Database query functions, the edge-function client and their
// configuration. Compiled only with the `ssr` feature.

pub mod queries;

pub mod db;

pub mod config;

pub mod functions;
