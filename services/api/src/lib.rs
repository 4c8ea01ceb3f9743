//! Intervue API Library Crate
//!
//! This library contains all the core logic for the interview web
//! service: application state, configuration, database access, the
//! interview orchestrator, API handlers and routing. The `api` binary
//! is a thin wrapper around this library.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod interview;
pub mod models;
pub mod router;
pub mod state;
