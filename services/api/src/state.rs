//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds all shared,
//! clonable resources created once at startup and passed to all handlers.

use crate::{config::Config, interview::InterviewService};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub interview: InterviewService,
    pub config: Arc<Config>,
}
