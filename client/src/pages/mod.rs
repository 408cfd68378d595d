//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (session restore, polling,
//! request dispatch) and delegates rendering details to `components`.

pub mod login;
pub mod triage;
