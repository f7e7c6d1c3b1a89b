//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `storage` isolates the browser persistence API so `session` can be
//! exercised against an in-memory map.

pub mod session;
pub mod storage;
