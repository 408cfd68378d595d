//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the triage workspace while reading the shared operator
//! shell from Leptos context. Anything that talks to the backend goes back to
//! the page through a `Callback<Command>`.

pub mod action_bar;
pub mod assignee_buttons;
pub mod comment_dialog;
pub mod file_tabs;
pub mod stack;
