//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the request pipeline and 401 hook, `api` defines the typed
//! endpoints, and `types` defines the wire schema.

pub mod api;
pub mod http;
#[cfg(test)]
pub(crate) mod testing;
pub mod types;
