//! Plain-text rendering of the operator view.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use triage::stack::StackLayout;
use triage::viewer::{choose_viewer, tab_icon};
use triage::{Card, Employee, Shell, Viewer, ViewerContext};

/// Width of the text stack bars.
pub const BAR_WIDTH: usize = 20;

/// One stack as a labelled text bar.
pub fn stack_line(label: &str, count: u32) -> String {
    format!("{label:<9}{} {count}", StackLayout::new(count).text_bar(BAR_WIDTH))
}

/// Short description of how a file would be displayed.
pub fn viewer_line(viewer: &Viewer) -> String {
    match viewer {
        Viewer::Image { src, .. } => format!("image     {src}"),
        Viewer::Frame { src, .. } => format!("frame     {src}"),
        Viewer::External { src, .. } => format!("external  {src}"),
        Viewer::Download { href, label, .. } => format!("download  [{label}] {href}"),
    }
}

/// Attachment list for `card`, marking the active tab.
pub fn files_block(card: &Card, active: Option<usize>, ctx: &ViewerContext<'_>) -> String {
    if card.files.is_empty() {
        return "  (no attachments)\n".to_owned();
    }
    let mut out = String::new();
    for (index, file) in card.files.iter().enumerate() {
        let marker = if active == Some(index) { '>' } else { ' ' };
        let viewer = choose_viewer(file, card.incoming_no, ctx);
        let _ = writeln!(out, " {marker}{index} {} {}", tab_icon(&file.extension()), file.name);
        let _ = writeln!(out, "      {}", viewer_line(&viewer));
    }
    out
}

/// Full status view: stacks, current card, and its attachments. File URLs
/// carry `token` so they open outside this process.
pub fn state_view(shell: &Shell, api_base: &str, token: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(username) = &shell.username {
        let _ = writeln!(out, "operator: {username}");
    }
    let _ = writeln!(out, "{}", stack_line("Queue", shell.queue_count()));
    let _ = writeln!(out, "{}", stack_line("Assigned", shell.assigned_count()));
    if let Some(deferred) = shell.queue.as_ref().map(|q| q.deferred_count).filter(|d| *d > 0) {
        let _ = writeln!(out, "deferred: {deferred}");
    }
    if let Some(error) = &shell.error {
        let _ = writeln!(out, "error: {error}");
    }

    match shell.current_card() {
        None if shell.initial_load() => out.push_str("\n(no data yet)\n"),
        None => out.push_str("\nThe queue is empty.\n"),
        Some(card) => {
            let _ = writeln!(out, "\ncard {} · #{} · {}", card.card_id, card.incoming_no, card.title);
            let ctx = ViewerContext { api_base, token, public_base: shell.public_base.as_deref() };
            out.push_str(&files_block(card, shell.active_tab(), &ctx));
        }
    }
    out
}

/// Roster listing for `employees`.
pub fn employees_view(employees: &[Employee]) -> String {
    let mut out = String::new();
    for employee in employees {
        let _ = writeln!(out, "{:>6}  {}", employee.id, employee.name);
    }
    out
}
