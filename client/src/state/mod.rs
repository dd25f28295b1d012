//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only piece of state shared across routes. List and form
//! state stays local to the page that owns it.

pub mod session;
