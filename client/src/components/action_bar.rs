//! Skip / undo / multi-select controls plus queue counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Buttons here never touch the network directly. They hand a `Command` to
//! the page, which prepares it on the shell and runs the request.

#[cfg(test)]
#[path = "action_bar_test.rs"]
mod action_bar_test;

use leptos::prelude::*;
use triage::{Command, Shell};

use crate::components::comment_dialog::comment_button_label;

/// Label for the multi-select confirm button.
pub fn confirm_label(selected: usize) -> String {
    match selected {
        0 => "Select assignees".to_owned(),
        1 => "Assign to 1".to_owned(),
        n => format!("Assign to {n}"),
    }
}

/// Counter line shown next to the controls.
pub fn counters(shell: &Shell) -> String {
    let deferred = shell.queue.as_ref().map_or(0, |q| q.deferred_count);
    format!(
        "Queue: {} · Deferred: {} · Assigned this session: {}",
        shell.queue_count(),
        deferred,
        shell.assigned_count()
    )
}

/// Card-bound controls are inert while a request runs or no card is shown.
pub fn card_controls_disabled(shell: &Shell) -> bool {
    shell.loading() || shell.current_card().is_none()
}

/// Controls row under the viewer.
#[component]
pub fn ActionBar(on_command: Callback<Command>) -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let busy = move || shell.with(Shell::loading);
    let locked = move || shell.with(card_controls_disabled);
    let multi = move || shell.with(|s| s.selection.is_multi());

    view! {
        <div class="action-bar">
            <button
                class="btn"
                disabled=locked
                on:click=move |_| on_command.run(Command::Skip)
            >
                "Skip"
            </button>
            <button class="btn" disabled=busy on:click=move |_| on_command.run(Command::Undo)>
                "Undo"
            </button>
            <button
                class="btn"
                class:btn--active=multi
                disabled=locked
                on:click=move |_| shell.update(Shell::toggle_multi)
            >
                {move || if multi() { "Multi-select: on" } else { "Multi-select: off" }}
            </button>
            <Show when=multi>
                <button
                    class="btn btn--primary"
                    disabled=move || locked() || shell.with(|s| s.confirm_multi().is_none())
                    on:click=move |_| {
                        if let Some(command) = shell.with(Shell::confirm_multi) {
                            on_command.run(command);
                        }
                    }
                >
                    {move || confirm_label(shell.with(|s| s.selection.selected().len()))}
                </button>
            </Show>
            <button class="btn" disabled=locked on:click=move |_| shell.update(Shell::open_comment)>
                {move || shell.with(|s| comment_button_label(&s.comment.text))}
            </button>
            <span class="action-bar__spacer"></span>
            <span class="action-bar__counters">{move || shell.with(counters)}</span>
        </div>
    }
}
