//! Terminal client listing expense records from a remote service.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod expenses;
pub mod logger;
pub mod state;
pub mod ui;
pub mod utils;
