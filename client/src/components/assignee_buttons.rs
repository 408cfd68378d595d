//! Roster of assignee buttons.
//!
//! DESIGN
//! ======
//! In single-select mode a click assigns the current card immediately. In
//! multi-select mode clicks toggle membership and the action bar confirms.
//! The first selected employee becomes owner; the rest are co-owners.

#[cfg(test)]
#[path = "assignee_buttons_test.rs"]
mod assignee_buttons_test;

use leptos::prelude::*;
use triage::{AssigneeSelection, Command, Employee, Shell};

use crate::app::Roster;

/// Role badge for `id` within the current selection, if any.
pub fn role_badge(selection: &AssigneeSelection, id: i64) -> Option<&'static str> {
    match selection.selected().iter().position(|&s| s == id)? {
        0 => Some("owner"),
        _ => Some("co-owner"),
    }
}

/// Tooltip for an employee button.
pub fn button_title(employee: &Employee, multi: bool) -> String {
    if multi {
        format!("Toggle {}", employee.name)
    } else {
        format!("Assign to {}", employee.name)
    }
}

/// One button per roster entry.
#[component]
pub fn AssigneeButtons(on_command: Callback<Command>) -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let roster = expect_context::<Roster>();
    let disabled = move || shell.with(|s| s.loading() || s.current_card().is_none());

    view! {
        <div class="assignees">
            {roster
                .0
                .into_iter()
                .map(|employee| {
                    let id = employee.id;
                    let initial = employee.initial();
                    let name = employee.name.clone();
                    let title = move || shell.with(|s| button_title(&employee, s.selection.is_multi()));
                    view! {
                        <button
                            class="assignee"
                            class:assignee--selected=move || shell.with(|s| s.selection.is_selected(id))
                            title=title
                            disabled=disabled
                            on:click=move |_| {
                                let mut command = None;
                                shell.update(|s| command = s.click_employee(id));
                                if let Some(command) = command {
                                    on_command.run(command);
                                }
                            }
                        >
                            <span class="assignee__avatar">{initial}</span>
                            <span class="assignee__name">{name}</span>
                            {move || {
                                shell
                                    .with(|s| role_badge(&s.selection, id))
                                    .map(|badge| view! { <span class="assignee__badge">{badge}</span> })
                            }}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

