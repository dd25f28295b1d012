//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and validation logic lives here so pages stay thin and the
//! rules run in plain unit tests without a browser.

pub mod filter;
pub mod forms;
pub mod guard;
pub mod storage;
