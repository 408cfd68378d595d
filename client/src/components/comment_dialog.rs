//! Modal dialog for the assignment comment draft.
//!
//! Edits happen on a local copy. Save writes it back to the shell; cancel
//! closes and keeps the previous draft. The draft is sent with the next
//! assignment, after which the shell clears it.

#[cfg(test)]
#[path = "comment_dialog_test.rs"]
mod comment_dialog_test;

use leptos::prelude::*;
use triage::Shell;

const PREVIEW_CHARS: usize = 24;

/// Label for the button that opens the dialog.
pub fn comment_button_label(draft: &str) -> String {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        return "Add comment".to_owned();
    }
    let preview: String = trimmed.chars().take(PREVIEW_CHARS).collect();
    if trimmed.chars().count() > PREVIEW_CHARS {
        format!("Comment: {preview}…")
    } else {
        format!("Comment: {preview}")
    }
}

/// Dialog shown while the comment draft is open.
#[component]
pub fn CommentDialog() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let value = RwSignal::new(String::new());

    Effect::new(move || {
        if shell.with(|s| s.comment.open) {
            value.set(shell.with_untracked(|s| s.comment.text.clone()));
        }
    });

    let cancel = move || shell.update(Shell::close_comment);
    let save = move || {
        let text = value.get_untracked();
        shell.update(|s| {
            s.set_comment(text);
            s.close_comment();
        });
    };

    view! {
        <Show when=move || shell.with(|s| s.comment.open)>
            <div class="dialog-backdrop" on:click=move |_| cancel()>
                <div
                    class="dialog dialog--comment"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            cancel();
                        }
                    }
                >
                    <label class="dialog__label">
                        "Resolution comment"
                        <textarea
                            class="dialog__textarea"
                            prop:value=move || value.get()
                            on:input=move |ev| value.set(event_target_value(&ev))
                            autofocus=true
                        ></textarea>
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| cancel()>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| save()>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
