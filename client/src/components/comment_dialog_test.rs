use super::*;

#[test]
fn empty_draft_offers_to_add() {
    assert_eq!(comment_button_label(""), "Add comment");
    assert_eq!(comment_button_label("   "), "Add comment");
}

#[test]
fn short_draft_is_shown_whole() {
    assert_eq!(comment_button_label(" urgent "), "Comment: urgent");
}

#[test]
fn long_draft_is_truncated() {
    let label = comment_button_label("please review before friday afternoon");
    assert_eq!(label, "Comment: please review before fri…");
}
