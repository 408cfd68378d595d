use super::*;
use crate::types::FileInfo;

fn card(card_id: i64, files: usize) -> Card {
    Card {
        card_id,
        incoming_no: card_id * 10,
        title: format!("Letter {card_id}"),
        files: (0..files)
            .map(|i| FileInfo { name: format!("f{i}.pdf"), ext: "pdf".into(), url: String::new() })
            .collect(),
    }
}

fn state_with(card_id: Option<i64>, queue_count: u32) -> QueueState {
    QueueState {
        queue_count,
        deferred_count: 0,
        assigned_session_count: 0,
        current_card: card_id.map(|id| card(id, 3)),
    }
}

/// Authenticated shell showing card `card_id`.
fn ready_shell(card_id: i64) -> Shell {
    let mut shell = Shell::default();
    shell.authenticated("operator");
    let pending = shell.prepare(Command::Load).unwrap();
    shell.finish_ok(pending.ticket, state_with(Some(card_id), 5));
    shell
}

fn assign_request(pending: &Pending) -> &AssignRequest {
    match &pending.request {
        Request::Assign(req) => req,
        other => panic!("expected assign request, got {other:?}"),
    }
}

// =============================================================
// Auth phases
// =============================================================

#[test]
fn default_is_unauthenticated() {
    let shell = Shell::default();
    assert_eq!(shell.phase, Phase::Unauthenticated);
    assert!(shell.username.is_none());
}

#[test]
fn authenticating_then_authenticated() {
    let mut shell = Shell::default();
    shell.begin_authentication();
    assert_eq!(shell.phase, Phase::Authenticating);
    shell.authenticated("anna");
    assert!(shell.is_authenticated());
    assert_eq!(shell.username.as_deref(), Some("anna"));
}

#[test]
fn commands_are_refused_before_authentication() {
    let mut shell = Shell::default();
    assert!(shell.prepare(Command::Load).is_none());
    assert!(!shell.loading());
}

// =============================================================
// Assignment flows
// =============================================================

#[test]
fn single_click_issues_one_assignment_with_owner() {
    let mut shell = ready_shell(42);
    let command = shell.click_employee(101).expect("single mode assigns immediately");
    let pending = shell.prepare(command).unwrap();
    assert_eq!(pending.request.endpoint(), Endpoint::Assign);
    let req = assign_request(&pending);
    assert_eq!(req.card_id, 42);
    assert_eq!(req.owner_id, 101);
    assert!(req.co_owner_ids.is_empty());
    assert!(!req.multi);
}

#[test]
fn multi_select_two_then_confirm_issues_owner_and_co_owner() {
    let mut shell = ready_shell(42);
    shell.toggle_multi();
    assert!(shell.click_employee(103).is_none());
    assert!(shell.click_employee(101).is_none());
    let pending = shell.prepare(shell.confirm_multi().unwrap()).unwrap();
    let req = assign_request(&pending);
    assert_eq!(req.owner_id, 103);
    assert_eq!(req.co_owner_ids, vec![101]);
    assert!(req.multi);
}

#[test]
fn comment_draft_is_sent_and_cleared_after_assign() {
    let mut shell = ready_shell(42);
    shell.open_comment();
    shell.set_comment("Please review by Friday");
    shell.close_comment();
    let command = shell.click_employee(101).unwrap();
    let pending = shell.prepare(command).unwrap();
    assert_eq!(assign_request(&pending).comment_text, "Please review by Friday");

    shell.finish_ok(pending.ticket, state_with(Some(43), 4));
    assert_eq!(shell.comment, CommentDraft::default());
    assert!(!shell.selection.is_multi());
}

#[test]
fn failed_assign_keeps_selection_and_comment() {
    let mut shell = ready_shell(42);
    shell.toggle_multi();
    shell.click_employee(101);
    shell.set_comment("keep me");
    let pending = shell.prepare(shell.confirm_multi().unwrap()).unwrap();
    assert_eq!(shell.finish_err(pending.ticket, &ApiError::Status(500)), Transition::Failed);
    assert_eq!(shell.error.as_deref(), Some("Failed to assign"));
    assert_eq!(shell.selection.selected(), &[101]);
    assert_eq!(shell.comment.text, "keep me");
}

#[test]
fn assign_and_skip_need_a_current_card() {
    let mut shell = Shell::default();
    shell.authenticated("operator");
    let pending = shell.prepare(Command::Load).unwrap();
    shell.finish_ok(pending.ticket, state_with(None, 0));
    assert!(shell.prepare(Command::Skip).is_none());
    assert!(shell.prepare(Command::Assign(vec![1])).is_none());
    assert!(shell.prepare(Command::Undo).is_some());
}

#[test]
fn skip_targets_current_card() {
    let mut shell = ready_shell(9);
    let pending = shell.prepare(Command::Skip).unwrap();
    assert_eq!(pending.request, Request::Skip(SkipRequest { card_id: 9 }));
    assert_eq!(pending.request.body(), Some(serde_json::json!({ "card_id": 9 })));
}

#[test]
fn undo_sends_empty_object() {
    let mut shell = ready_shell(9);
    let pending = shell.prepare(Command::Undo).unwrap();
    assert_eq!(pending.request.body(), Some(serde_json::json!({})));
    assert_eq!(Request::State.body(), None);
}

// =============================================================
// Loading + errors
// =============================================================

#[test]
fn loading_tracks_in_flight_requests() {
    let mut shell = ready_shell(1);
    let a = shell.prepare(Command::Load).unwrap();
    let b = shell.prepare(Command::Undo).unwrap();
    assert!(shell.loading());
    shell.finish_ok(a.ticket, state_with(Some(1), 5));
    assert!(shell.loading());
    shell.finish_err(b.ticket, &ApiError::Network("down".into()));
    assert!(!shell.loading());
}

#[test]
fn failure_messages_are_action_specific() {
    let mut shell = ready_shell(1);
    let pending = shell.prepare(Command::Skip).unwrap();
    shell.finish_err(pending.ticket, &ApiError::Status(503));
    assert_eq!(shell.error.as_deref(), Some("Failed to skip"));

    let pending = shell.prepare(Command::Load).unwrap();
    shell.finish_err(pending.ticket, &ApiError::Decode("eof".into()));
    assert_eq!(shell.error.as_deref(), Some("Failed to load data"));
}

#[test]
fn success_clears_previous_error() {
    let mut shell = ready_shell(1);
    let pending = shell.prepare(Command::Undo).unwrap();
    shell.finish_err(pending.ticket, &ApiError::Status(500));
    let pending = shell.prepare(Command::Load).unwrap();
    shell.finish_ok(pending.ticket, state_with(Some(1), 5));
    assert!(shell.error.is_none());
}

#[test]
fn unauthorized_from_any_action_logs_out() {
    for command in [Command::Load, Command::Skip, Command::Undo, Command::Assign(vec![101])] {
        let mut shell = ready_shell(1);
        let pending = shell.prepare(command.clone()).unwrap();
        assert_eq!(shell.finish_err(pending.ticket, &ApiError::Unauthorized), Transition::LoggedOut, "{command:?}");
        assert_eq!(shell.phase, Phase::Unauthenticated);
        assert!(shell.username.is_none());
        assert!(shell.queue.is_none());
    }
}

#[test]
fn response_from_dead_session_is_dropped_after_logout() {
    let mut shell = ready_shell(1);
    let poll = shell.prepare(Command::Load).unwrap();
    let undo = shell.prepare(Command::Undo).unwrap();

    assert_eq!(shell.finish_err(undo.ticket, &ApiError::Unauthorized), Transition::LoggedOut);
    assert_eq!(shell.finish_ok(poll.ticket, state_with(Some(1), 5)), Transition::Stale);
    assert_eq!(shell.phase, Phase::Unauthenticated);
    assert!(shell.queue.is_none());
    assert!(!shell.loading());
}

#[test]
fn late_unauthorized_does_not_log_out_new_session() {
    let mut shell = ready_shell(1);
    let first = shell.prepare(Command::Load).unwrap();
    let second = shell.prepare(Command::Skip).unwrap();
    shell.finish_err(first.ticket, &ApiError::Unauthorized);

    shell.authenticated("operator");
    let fresh = shell.prepare(Command::Load).unwrap();
    assert_eq!(shell.finish_err(second.ticket, &ApiError::Unauthorized), Transition::Stale);
    assert!(shell.is_authenticated());
    assert!(shell.loading(), "the new session's request is still in flight");

    assert_eq!(shell.finish_ok(fresh.ticket, state_with(Some(3), 2)), Transition::Applied);
    assert_eq!(shell.current_card_id(), Some(3));
    assert!(!shell.loading());
}

// =============================================================
// Card changes
// =============================================================

#[test]
fn switching_card_resets_tab_to_first_file() {
    let mut shell = ready_shell(1);
    assert!(shell.select_tab(2));
    assert_eq!(shell.active_tab(), Some(2));

    let pending = shell.prepare(Command::Load).unwrap();
    shell.finish_ok(pending.ticket, state_with(Some(1), 5));
    assert_eq!(shell.active_tab(), Some(2), "same card keeps the tab");

    let pending = shell.prepare(Command::Skip).unwrap();
    shell.finish_ok(pending.ticket, state_with(Some(2), 4));
    assert_eq!(shell.active_tab(), Some(0));
}

#[test]
fn switching_card_resets_selection() {
    let mut shell = ready_shell(1);
    shell.toggle_multi();
    shell.click_employee(101);
    let pending = shell.prepare(Command::Load).unwrap();
    shell.finish_ok(pending.ticket, state_with(Some(2), 4));
    assert!(shell.selection.selected().is_empty());
}

#[test]
fn same_card_poll_keeps_selection() {
    let mut shell = ready_shell(1);
    shell.toggle_multi();
    shell.click_employee(101);
    let pending = shell.prepare(Command::Load).unwrap();
    shell.finish_ok(pending.ticket, state_with(Some(1), 5));
    assert_eq!(shell.selection.selected(), &[101]);
}

#[test]
fn select_tab_out_of_range_is_ignored() {
    let mut shell = ready_shell(1);
    assert!(!shell.select_tab(3));
    assert_eq!(shell.active_tab(), Some(0));
}

// =============================================================
// Stale responses
// =============================================================

#[test]
fn stale_poll_does_not_overwrite_newer_assignment() {
    let mut shell = ready_shell(1);
    let poll = shell.prepare(Command::Load).unwrap();
    let assign = shell.prepare(Command::Assign(vec![101])).unwrap();

    assert_eq!(shell.finish_ok(assign.ticket, state_with(Some(2), 4)), Transition::Applied);
    assert_eq!(shell.finish_ok(poll.ticket, state_with(Some(1), 5)), Transition::Stale);
    assert_eq!(shell.current_card_id(), Some(2));
    assert_eq!(shell.queue_count(), 4);
    assert!(!shell.loading());
}

#[test]
fn stale_failure_does_not_set_error() {
    let mut shell = ready_shell(1);
    let poll = shell.prepare(Command::Load).unwrap();
    let undo = shell.prepare(Command::Undo).unwrap();
    shell.finish_ok(undo.ticket, state_with(Some(1), 6));
    assert_eq!(shell.finish_err(poll.ticket, &ApiError::Status(502)), Transition::Stale);
    assert!(shell.error.is_none());
}

// =============================================================
// Counters + misc
// =============================================================

#[test]
fn counters_default_to_zero_without_state() {
    let shell = Shell::default();
    assert_eq!(shell.queue_count(), 0);
    assert_eq!(shell.assigned_count(), 0);
    assert!(shell.initial_load());
}

#[test]
fn empty_public_base_is_ignored() {
    let mut shell = Shell::default();
    shell.set_public_base(Some(String::new()));
    assert!(shell.public_base.is_none());
    shell.set_public_base(Some("https://p.test".into()));
    assert_eq!(shell.public_base.as_deref(), Some("https://p.test"));
}
