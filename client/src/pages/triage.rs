//! Triage workspace: current card, attachments, assignees and controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. On mount it verifies the stored
//! session, then polls `GET /api/state` on a fixed interval until the page is
//! cleaned up. Operator actions arrive from components as `Command`s and run
//! through `dispatch`.
//!
//! ERROR HANDLING
//! ==============
//! Failed actions leave an action-specific message on the shell. `401`s are
//! handled inside the API client (storage cleared, reload to `/login`); the
//! shell additionally drops its state so nothing stale renders meanwhile.

#[cfg(test)]
#[path = "triage_test.rs"]
mod triage_test;

use std::time::Duration;

use leptos::prelude::*;
use triage::types::Card;
use triage::{Command, Shell};

use crate::components::action_bar::ActionBar;
use crate::components::assignee_buttons::AssigneeButtons;
use crate::components::comment_dialog::CommentDialog;
use crate::components::file_tabs::FileViewer;
use crate::components::stack::Stacks;

/// Interval between background state refreshes.
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// What the main panel shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainView {
    /// Waiting for the first snapshot.
    Loading,
    /// Snapshot arrived but the queue has no current card.
    Empty,
    /// A card is ready for triage.
    Card,
}

pub fn main_view(shell: &Shell) -> MainView {
    if shell.initial_load() {
        MainView::Loading
    } else if shell.current_card().is_none() {
        MainView::Empty
    } else {
        MainView::Card
    }
}

/// Heading for a card: incoming number plus title.
pub fn card_heading(card: &Card) -> String {
    if card.title.trim().is_empty() {
        format!("#{}", card.incoming_no)
    } else {
        format!("#{} · {}", card.incoming_no, card.title.trim())
    }
}

/// Status line text: the last error wins over the loading hint.
pub fn status_line(shell: &Shell) -> Option<String> {
    if let Some(error) = &shell.error {
        return Some(error.clone());
    }
    shell.loading().then(|| "Working...".to_owned())
}

/// Prepare `command` on the shell and run its request in the background.
pub fn dispatch(shell: RwSignal<Shell>, command: Command) {
    let mut pending = None;
    shell.update(|s| pending = s.prepare(command));
    let Some(pending) = pending else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let triage::Pending { ticket, request } = pending;
        let result = crate::net::api::execute(&request).await;
        shell.update(|s| {
            let transition = match result {
                Ok(state) => s.finish_ok(ticket, state),
                Err(err) => s.finish_err(ticket, &err),
            };
            if transition == triage::Transition::Stale {
                log::debug!("discarded stale response seq={}", ticket.seq);
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = pending;
}

#[cfg(feature = "hydrate")]
fn restore_session(shell: RwSignal<Shell>) {
    use triage::SessionStore as _;

    if crate::util::session::BrowserSessionStore.load().is_none() {
        shell.update(Shell::logged_out);
        crate::util::session::redirect("/login");
        return;
    }
    shell.update(Shell::begin_authentication);
    leptos::task::spawn_local(async move {
        match crate::net::api::verify_token().await {
            Ok(username) => {
                shell.update(|s| s.authenticated(username));
                dispatch(shell, Command::Load);
                match crate::net::api::public_url().await {
                    Ok(url) => shell.update(|s| s.set_public_base(Some(url))),
                    Err(e) => log::info!("no public url, word documents fall back to download: {e}"),
                }
            }
            Err(e) => {
                log::warn!("stored session rejected: {e}");
                shell.update(Shell::logged_out);
                crate::util::session::force_logout();
            }
        }
    });
}

/// Triage page. Redirects to `/login` without a valid stored session.
#[component]
pub fn TriagePage() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let on_command = Callback::new(move |command: Command| dispatch(shell, command));

    #[cfg(feature = "hydrate")]
    {
        restore_session(shell);

        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(POLL_INTERVAL).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if shell.with_untracked(Shell::is_authenticated) {
                    dispatch(shell, Command::Load);
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            shell.update(Shell::logged_out);
            crate::util::session::force_logout();
        });
    };

    let username = move || shell.with(|s| s.username.clone().unwrap_or_default());
    let view_mode = move || shell.with(main_view);

    view! {
        <div class="triage-page">
            <header class="toolbar">
                <span class="toolbar__title">"Inbox Triage"</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{username}</span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <Show when=move || shell.with(status_line).is_some()>
                <div class="status-line" class:status-line--error=move || shell.with(|s| s.error.is_some())>
                    {move || shell.with(status_line).unwrap_or_default()}
                </div>
            </Show>
            <div class="triage-layout">
                <aside class="triage-layout__side">
                    <Stacks/>
                </aside>
                <main class="triage-layout__main">
                    {move || match view_mode() {
                        MainView::Loading => view! { <p class="triage-empty">"Loading..."</p> }.into_any(),
                        MainView::Empty => view! { <p class="triage-empty">"The queue is empty."</p> }.into_any(),
                        MainView::Card => view! {
                            <section class="card">
                                <h2 class="card__heading">
                                    {move || shell.with(|s| s.current_card().map(card_heading).unwrap_or_default())}
                                </h2>
                                <FileViewer/>
                            </section>
                        }
                        .into_any(),
                    }}
                    <AssigneeButtons on_command=on_command/>
                    <ActionBar on_command=on_command/>
                </main>
            </div>
            <CommentDialog/>
        </div>
    }
}
