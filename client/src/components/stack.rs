//! Visual pile of queued cards.
//!
//! DESIGN
//! ======
//! Geometry comes from `triage::StackLayout`; this component only turns each
//! item into absolutely positioned CSS.

#[cfg(test)]
#[path = "stack_test.rs"]
mod stack_test;

use leptos::prelude::*;
use triage::Shell;
use triage::stack::{StackItem, StackLayout};

/// Inline style for one sheet in the pile.
pub fn item_style(item: StackItem) -> String {
    format!("bottom:{}px;left:{}px;", item.bottom_px, item.shift_px)
}

/// Inline style for the pile container.
pub fn container_style(layout: &StackLayout) -> String {
    format!("height:{}px;", layout.height_px)
}

/// Short caption under the pile.
pub fn caption(label: &str, count: u32) -> String {
    format!("{label}: {count}")
}

/// Pile of sheets sized by `count`.
#[component]
pub fn Stack(label: &'static str, #[prop(into)] count: Signal<u32>) -> impl IntoView {
    let layout = Memo::new(move |_| StackLayout::new(count.get()));

    view! {
        <div class="stack">
            <div class="stack__pile" style=move || container_style(&layout.get())>
                {move || {
                    layout
                        .get()
                        .items
                        .into_iter()
                        .map(|item| view! { <div class="stack__sheet" style=item_style(item)></div> })
                        .collect::<Vec<_>>()
                }}
            </div>
            <span class="stack__caption">{move || caption(label, layout.get().count)}</span>
        </div>
    }
}

/// Queue and assigned-this-session piles side by side.
#[component]
pub fn Stacks() -> impl IntoView {
    let shell = expect_context::<RwSignal<Shell>>();
    let queued = Signal::derive(move || shell.with(Shell::queue_count));
    let assigned = Signal::derive(move || shell.with(Shell::assigned_count));

    view! {
        <div class="stacks">
            <Stack label="Queue" count=queued/>
            <Stack label="Assigned" count=assigned/>
        </div>
    }
}
