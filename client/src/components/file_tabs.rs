//! Attachment tabs and the viewer for the active file.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each attachment of the current card gets a tab. The active tab resets to
//! the first file whenever the card changes (handled by the shell); this
//! component only renders whichever strategy `triage::viewer::choose_viewer` picks.

#[cfg(test)]
#[path = "file_tabs_test.rs"]
mod file_tabs_test;

use leptos::prelude::*;
use triage::types::FileInfo;
use triage::viewer::tab_icon;
use triage::{SessionStore as _, Shell, Viewer, ViewerContext};

use crate::net::api::API_BASE;
use crate::util::session::BrowserSessionStore;

/// Label for one tab: icon plus file name.
pub fn tab_label(file: &FileInfo) -> String {
    format!("{} {}", tab_icon(&file.extension()), file.name)
}

/// Resolve the viewer for the active file of the current card.
pub fn active_viewer(shell: &Shell, token: Option<&str>) -> Option<Viewer> {
    let card = shell.current_card()?;
    let index = shell.active_tab()?;
    let file = card.files.get(index)?;
    let ctx = ViewerContext { api_base: API_BASE, token, public_base: shell.public_base.as_deref() };
    Some(triage::viewer::choose_viewer(file, card.incoming_no, &ctx))
}

fn render_viewer(viewer: Viewer) -> AnyView {
    match viewer {
        Viewer::Image { src, alt } => view! {
            <div class="viewer viewer--image">
                <img src=src alt=alt/>
            </div>
        }
        .into_any(),
        Viewer::Frame { src, title } => view! {
            <iframe class="viewer viewer--frame" src=src title=title></iframe>
        }
        .into_any(),
        Viewer::External { src, title } => view! {
            <iframe class="viewer viewer--external" src=src title=title></iframe>
        }
        .into_any(),
        Viewer::Download { href, name, label, icon } => view! {
            <div class="viewer viewer--download">
                <span class="viewer__icon">{icon}</span>
                <span class="viewer__name">{name.clone()}</span>
                <a class="btn btn--primary" href=href download=name target="_blank">
                    {format!("Download {label}")}
                </a>
            </div>
        }
        .into_any(),
    }
}

/// Tab strip plus viewer for the current card's attachments.
#[component]
pub fn FileViewer() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();

    let files = move || shell.with(|s| s.current_card().map(|c| c.files.clone()).unwrap_or_default());
    let active = move || shell.with(Shell::active_tab);

    view! {
        <div class="file-viewer">
            <Show
                when=move || !files().is_empty()
                fallback=|| view! { <p class="file-viewer__empty">"No attachments"</p> }
            >
                <div class="file-viewer__tabs">
                    {move || {
                        files()
                            .into_iter()
                            .enumerate()
                            .map(|(index, file)| {
                                let label = tab_label(&file);
                                view! {
                                    <button
                                        class="file-viewer__tab"
                                        class:file-viewer__tab--active=move || active() == Some(index)
                                        title=file.name.clone()
                                        on:click=move |_| {
                                            shell.update(|s| {
                                                s.select_tab(index);
                                            });
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <div class="file-viewer__body">
                    {move || {
                        let token = BrowserSessionStore.load().map(|s| s.token);
                        shell.with(|s| active_viewer(s, token.as_deref())).map(render_viewer)
                    }}
                </div>
            </Show>
        </div>
    }
}
