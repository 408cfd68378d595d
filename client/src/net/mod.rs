//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls to the triage backend. The wire schema lives in
//! the shared `triage` crate.

pub mod api;
