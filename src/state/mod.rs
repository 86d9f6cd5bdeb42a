//! Application state management module.
//!
//! This module contains the state of the expenses view:
//! - `State`, which owns the load progress and view settings
//! - `Load`, the loading / failed / loaded progress of the single request
//! - `LoadTicket`, which ties the in-flight request to the mounted view

mod load;
mod state_impl;

pub use load::{Load, LoadTicket};
pub use state_impl::{State, ERROR_TITLE, TITLE};
