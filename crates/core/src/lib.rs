//! Intervue Core
//!
//! Everything in this crate is independent of HTTP and storage: the
//! generative-backend client abstraction and the deterministic text
//! processing that turns the backend's semi-structured replies into
//! typed records (per-turn evaluations and the final report).

pub mod llm_client;
pub mod report;
pub mod response;
