use super::*;
use triage::types::{FileInfo, QueueState};

fn file(name: &str) -> FileInfo {
    FileInfo { name: name.to_owned(), ext: String::new(), url: String::new() }
}

fn shell_with(card: Option<Card>) -> Shell {
    let mut shell = Shell::default();
    shell.authenticated("operator");
    let pending = shell.prepare(triage::Command::Load).unwrap();
    shell.finish_ok(
        pending.ticket,
        QueueState { queue_count: 25, deferred_count: 0, assigned_session_count: 50, current_card: card },
    );
    shell
}

#[test]
fn stack_line_scales_and_saturates() {
    assert_eq!(stack_line("Queue", 0), format!("Queue    {} 0", "░".repeat(20)));
    assert_eq!(stack_line("Assigned", 50), format!("Assigned {} 50", "█".repeat(20)));
    assert_eq!(stack_line("Assigned", 500), format!("Assigned {} 500", "█".repeat(20)));
}

#[test]
fn unsupported_files_render_as_download() {
    let card = Card { card_id: 1, incoming_no: 12, title: "T".to_owned(), files: vec![file("data.zip")] };
    let block = files_block(&card, Some(0), &ViewerContext::default());
    assert!(block.contains(">0 📎 data.zip"));
    assert!(block.contains("download  [ZIP] /files/12/data.zip"));
}

#[test]
fn empty_card_says_so() {
    let card = Card { card_id: 1, incoming_no: 12, title: "T".to_owned(), files: vec![] };
    assert_eq!(files_block(&card, None, &ViewerContext::default()), "  (no attachments)\n");
}

#[test]
fn state_view_shows_card_and_counters() {
    let card = Card { card_id: 9, incoming_no: 4411, title: "Claim".to_owned(), files: vec![file("scan.pdf")] };
    let view = state_view(&shell_with(Some(card)), "http://backend", None);
    assert!(view.starts_with("operator: operator\n"));
    assert!(view.contains("card 9 · #4411 · Claim"));
    assert!(view.contains("frame     http://backend/files/4411/scan.pdf"));
    assert!(!view.contains("deferred"));
}

#[test]
fn state_view_distinguishes_empty_and_unloaded() {
    assert!(state_view(&shell_with(None), "", None).contains("The queue is empty."));
    assert!(state_view(&Shell::default(), "", None).contains("(no data yet)"));
}

#[test]
fn state_view_puts_session_token_on_file_urls() {
    let card = Card {
        card_id: 5,
        incoming_no: 5,
        title: "Contract".to_owned(),
        files: vec![file("scan.pdf"), file("a.docx")],
    };
    let mut shell = shell_with(Some(card));
    shell.set_public_base(Some("https://pub.example".to_owned()));

    let view = state_view(&shell, "http://backend", Some("tok"));
    assert!(view.contains("frame     http://backend/files/5/scan.pdf?token=tok"));
    assert!(view.contains("url=https%3A%2F%2Fpub.example%2Ffiles%2F5%2Fa.docx%3Ftoken%3Dtok&embedded=true"));
}

#[test]
fn employees_view_lists_ids() {
    let view = employees_view(&[Employee { id: 101, name: "Alexandra Volkova".to_owned() }]);
    assert_eq!(view, "   101  Alexandra Volkova\n");
}
