//! Networking modules for the portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and the auth endpoints, `portal` the
//! authorized tracking/report calls, and `types` the auth wire schema.

pub mod api;
pub mod portal;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
