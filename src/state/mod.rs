//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the (token, profile) pair and exposes it reactively;
//! `auth` is the only component allowed to mutate it. Keeping the writer
//! separate from the store means every consumer sees the same transitions
//! in the same order.

pub mod auth;
pub mod session;
