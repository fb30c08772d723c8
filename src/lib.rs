//! Employee record service: a JSON HTTP API over a single SQLite table.

pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod validation;
